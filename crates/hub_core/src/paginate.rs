/// Fixed page size used by every catalog view.
pub const ITEMS_PER_PAGE: usize = 6;

/// Returns the 1-based `page` of `items`, clipped to the list bounds.
///
/// Pages past the end, page `0` and a zero `page_size` all yield an empty
/// slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = match (page - 1).checked_mul(page_size) {
        Some(start) if start < items.len() => start,
        _ => return &[],
    };
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// `ceil(len / page_size)`; zero for an empty list.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn twelve() -> Vec<u32> {
        (1..=12).collect()
    }

    #[test]
    fn second_page_holds_items_seven_to_twelve() {
        let items = twelve();
        assert_eq!(paginate(&items, 2, 6), &[7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn last_page_is_clipped() {
        let items: Vec<u32> = (1..=8).collect();
        assert_eq!(paginate(&items, 2, 6), &[7, 8]);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items = twelve();
        assert!(paginate(&items, 3, 6).is_empty());
        assert!(paginate(&items, 0, 6).is_empty());
        assert!(paginate(&items, usize::MAX, 6).is_empty());
        assert!(paginate(&items, 1, 0).is_empty());
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(12, 6), 2);
        assert_eq!(total_pages(13, 6), 3);
        assert_eq!(total_pages(5, 6), 1);
        assert_eq!(total_pages(0, 6), 0);
        assert_eq!(total_pages(3, 0), 0);
    }

    #[test]
    fn pages_never_exceed_page_size() {
        let items: Vec<u32> = (0..40).collect();
        let pages = total_pages(items.len(), ITEMS_PER_PAGE);
        for page in 1..=pages + 2 {
            let slice = paginate(&items, page, ITEMS_PER_PAGE);
            assert!(slice.len() <= ITEMS_PER_PAGE);
            if page > pages {
                assert!(slice.is_empty());
            }
        }
    }
}
