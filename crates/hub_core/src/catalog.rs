//! Catalog store: read-only access to the static item lists.

use hub_logging::hub_debug;

use crate::data::{GAMES, MOVIES, WEB_SERIES};
use crate::{Category, ContentItem};

/// Static list for a known category.
pub fn get_items(category: Category) -> &'static [ContentItem] {
    match category {
        Category::Game => &GAMES,
        Category::Movie => &MOVIES,
        Category::WebSeries => &WEB_SERIES,
    }
}

/// List for a route token. Unrecognized tokens are a valid "no results"
/// condition and yield an empty slice.
pub fn items_for_token(token: &str) -> &'static [ContentItem] {
    match Category::from_token(token) {
        Some(category) => get_items(category),
        None => {
            hub_debug!("Unknown category token {:?}; no items", token);
            &[]
        }
    }
}
