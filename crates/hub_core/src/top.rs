use crate::ContentItem;

/// Highest-rated `n` items, best first.
///
/// The sort is stable: items with equal ratings keep their input order. The
/// input slice is left untouched.
pub fn top_n(items: &[ContentItem], n: usize) -> Vec<ContentItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::get_items;
    use crate::Category;

    fn item(id: u32, rating: f32) -> ContentItem {
        ContentItem {
            id,
            title: "item",
            image_url: "",
            description: "",
            rating,
            category: Category::Movie,
        }
    }

    fn ids(items: &[ContentItem]) -> Vec<u32> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn sorts_descending_and_truncates() {
        let items = vec![item(1, 7.0), item(2, 9.0), item(3, 8.0)];
        assert_eq!(ids(&top_n(&items, 2)), vec![2, 3]);
    }

    #[test]
    fn ties_keep_input_order() {
        let items = vec![item(1, 8.0), item(2, 9.0), item(3, 8.0), item(4, 8.0)];
        assert_eq!(ids(&top_n(&items, 4)), vec![2, 1, 3, 4]);
    }

    #[test]
    fn oversized_and_zero_counts() {
        let items = vec![item(1, 7.0), item(2, 9.0)];
        assert_eq!(ids(&top_n(&items, 100)), vec![2, 1]);
        assert!(top_n(&items, 0).is_empty());
        assert!(top_n(&[], 5).is_empty());
    }

    #[test]
    fn is_idempotent() {
        let movies = get_items(Category::Movie);
        for n in [0, 1, 5, 12, 50] {
            let once = top_n(movies, n);
            assert_eq!(top_n(&once, n), once);
        }
    }

    #[test]
    fn movie_ties_follow_list_order() {
        // Inception and Fight Club share 8.8; Pulp Fiction and LOTR share 8.9.
        let top = top_n(get_items(Category::Movie), 7);
        let titles: Vec<&str> = top.iter().map(|item| item.title).collect();
        assert_eq!(
            titles,
            vec![
                "The Shawshank Redemption",
                "The Godfather",
                "The Dark Knight",
                "Pulp Fiction",
                "The Lord of the Rings: The Return of the King",
                "Inception",
                "Fight Club",
            ]
        );
    }

    #[test]
    fn input_is_not_reordered() {
        let games = get_items(Category::Game);
        let before = ids(games);
        let _ = top_n(games, 5);
        assert_eq!(ids(games), before);
    }
}
