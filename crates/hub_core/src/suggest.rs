/// Maximum number of typeahead entries shown under the search box.
pub const SUGGESTION_LIMIT: usize = 5;
/// Queries shorter than this never produce suggestions.
pub const MIN_QUERY_CHARS: usize = 2;

/// Case-insensitive substring match over `corpus`, in corpus order, capped at
/// `limit`.
pub fn suggest<'a>(query: &str, corpus: &[&'a str], limit: usize) -> Vec<&'a str> {
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    corpus
        .iter()
        .copied()
        .filter(|title| title.to_lowercase().contains(&needle))
        .take(limit)
        .collect()
}
