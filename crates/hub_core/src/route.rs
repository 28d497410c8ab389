//! Maps navigable locations to catalog views.
//!
//! The routing table is small and fixed:
//!
//! | location                   | route                        |
//! |----------------------------|------------------------------|
//! | `/`, `/games`              | `Route::List(Category::Game)`|
//! | `/movies`                  | `Route::List(Category::Movie)`|
//! | `/webseries`               | `Route::List(Category::WebSeries)`|
//! | `/top/{category}/{count}`  | `Route::Top { .. }`          |
//! | anything else              | `Route::Unmatched`           |
//!
//! Literal segments match case-insensitively, parameter values are
//! percent-decoded but otherwise kept verbatim. Neither an unknown category
//! nor a malformed count is an error.

use std::borrow::Cow;
use std::num::IntErrorKind;

use hub_logging::hub_debug;
use url::Url;

use crate::catalog::{get_items, items_for_token};
use crate::top::top_n;
use crate::{Category, ContentItem};

/// Count used by `/top/{category}/{count}` when `count` is not a number.
pub const DEFAULT_TOP_COUNT: usize = 20;

const LOCAL_BASE: &str = "hub://local/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Full list view for one category.
    List(Category),
    /// Highest-rated `count` items of the category named by `category`.
    Top { category: String, count: usize },
    /// No view matches; the content area stays empty.
    Unmatched(String),
}

impl Default for Route {
    fn default() -> Self {
        Route::List(Category::Game)
    }
}

impl Route {
    /// Resolves a bare path, relative path or absolute URL. Query strings and
    /// fragments are ignored.
    pub fn parse(location: &str) -> Self {
        let Some(segments) = path_segments(location) else {
            hub_debug!("Location {:?} has no path; unmatched", location);
            return Route::Unmatched(location.to_string());
        };

        let is = |segment: &str, literal: &str| segment.eq_ignore_ascii_case(literal);
        match segments.as_slice() {
            [] => Route::List(Category::Game),
            [single] => Category::ALL
                .into_iter()
                .find(|category| is(single.as_str(), category.token()))
                .map(Route::List)
                .unwrap_or_else(|| Route::Unmatched(join_path(&segments))),
            [top, category, count] if is(top.as_str(), "top") => Route::Top {
                category: category.clone(),
                count: parse_count(count),
            },
            _ => Route::Unmatched(join_path(&segments)),
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::List(category) => format!("/{}", category.token()),
            Route::Top { category, count } => format!("/top/{category}/{count}"),
            Route::Unmatched(path) => path.clone(),
        }
    }

    /// The ordered item list this route displays, before pagination.
    pub fn items(&self) -> Cow<'static, [ContentItem]> {
        match self {
            Route::List(category) => Cow::Borrowed(get_items(*category)),
            Route::Top { category, count } => Cow::Owned(top_n(items_for_token(category), *count)),
            Route::Unmatched(_) => Cow::Borrowed(&[]),
        }
    }

    /// Page heading, or `None` when no view matched.
    pub fn title(&self) -> Option<String> {
        match self {
            Route::List(category) => Some(category.display_name().to_string()),
            Route::Top { category, count } => {
                // Any token other than movies/webseries is headed as games.
                let name = match Category::from_token(category) {
                    Some(known) => known.display_name(),
                    None => Category::Game.display_name(),
                };
                Some(format!("Top {count} {name}"))
            }
            Route::Unmatched(_) => None,
        }
    }

    /// Top views hide their page buttons when everything fits on one page.
    pub fn shows_single_page_controls(&self) -> bool {
        matches!(self, Route::List(_))
    }
}

fn path_segments(location: &str) -> Option<Vec<String>> {
    let url = match Url::parse(location) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            // A leading `//` would otherwise be read as a host.
            let relative = location.trim_start_matches('/');
            Url::parse(LOCAL_BASE).and_then(|base| base.join(relative)).ok()?
        }
        Err(err) => {
            hub_debug!("Could not parse location {:?}: {}", location, err);
            return None;
        }
    };
    let segments = url
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .map(decode_segment)
        .collect();
    Some(segments)
}

fn decode_segment(segment: &str) -> String {
    match urlencoding::decode(segment) {
        Ok(decoded) => decoded.into_owned(),
        Err(err) => {
            hub_debug!("Segment {:?} is not UTF-8 once decoded: {}", segment, err);
            segment.to_string()
        }
    }
}

fn join_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

fn parse_count(raw: &str) -> usize {
    match raw.parse::<usize>() {
        Ok(count) => count,
        Err(err) if matches!(err.kind(), IntErrorKind::PosOverflow) => usize::MAX,
        Err(err) => {
            hub_debug!(
                "Malformed top count {:?} ({}); using {}",
                raw,
                err,
                DEFAULT_TOP_COUNT
            );
            DEFAULT_TOP_COUNT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top(category: &str, count: usize) -> Route {
        Route::Top {
            category: category.to_string(),
            count,
        }
    }

    #[test]
    fn root_is_games() {
        assert_eq!(Route::parse("/"), Route::List(Category::Game));
        assert_eq!(Route::parse(""), Route::List(Category::Game));
        assert_eq!(Route::parse("/"), Route::parse("/games"));
    }

    #[test]
    fn list_routes() {
        assert_eq!(Route::parse("/movies"), Route::List(Category::Movie));
        assert_eq!(Route::parse("webseries"), Route::List(Category::WebSeries));
        assert_eq!(Route::parse("/games/"), Route::List(Category::Game));
        assert_eq!(Route::parse("/MOVIES"), Route::List(Category::Movie));
    }

    #[test]
    fn absolute_urls_ignore_query_and_fragment() {
        assert_eq!(
            Route::parse("http://localhost:3000/top/movies/5?sort=1#grid"),
            top("movies", 5)
        );
        assert_eq!(
            Route::parse("https://example.com/webseries"),
            Route::List(Category::WebSeries)
        );
    }

    #[test]
    fn top_route_parses_count() {
        assert_eq!(Route::parse("/top/games/5"), top("games", 5));
        assert_eq!(Route::parse("/TOP/games/100"), top("games", 100));
        assert_eq!(Route::parse("/top/games/0"), top("games", 0));
    }

    #[test]
    fn malformed_count_falls_back_to_default() {
        assert_eq!(Route::parse("/top/games/abc"), top("games", DEFAULT_TOP_COUNT));
        assert_eq!(Route::parse("/top/games/-5"), top("games", DEFAULT_TOP_COUNT));
        assert_eq!(Route::parse("/top/games/5x"), top("games", DEFAULT_TOP_COUNT));
    }

    #[test]
    fn leading_slashes_are_not_a_host() {
        assert_eq!(Route::parse("//movies"), Route::List(Category::Movie));
        assert_eq!(Route::parse("//top/games/5"), top("games", 5));
        assert_eq!(Route::parse("///webseries//"), Route::List(Category::WebSeries));
    }

    #[test]
    fn parameters_are_percent_decoded() {
        let route = Route::parse("/top/web%73eries/5");
        assert_eq!(route, top("webseries", 5));
        assert_eq!(route.items().len(), 5);
        assert_eq!(Route::parse("/top/games/%35"), top("games", 5));
        assert_eq!(Route::parse("/%6Dovies"), Route::List(Category::Movie));
        assert_eq!(Route::parse("/top/my cat/3"), top("my cat", 3));
    }

    #[test]
    fn oversized_count_saturates() {
        let route = Route::parse("/top/games/99999999999999999999999");
        assert_eq!(route, top("games", usize::MAX));
        assert_eq!(route.items().len(), 12);
        assert_eq!(route.title(), Some(format!("Top {} Games", usize::MAX)));
    }

    #[test]
    fn category_parameter_is_verbatim() {
        let route = Route::parse("/top/GAMES/5");
        assert_eq!(route, top("GAMES", 5));
        assert!(route.items().is_empty());
    }

    #[test]
    fn unknown_paths_are_unmatched() {
        assert_eq!(Route::parse("/contact"), Route::Unmatched("/contact".to_string()));
        assert_eq!(
            Route::parse("/top/games"),
            Route::Unmatched("/top/games".to_string())
        );
        assert_eq!(
            Route::parse("/top/games/5/extra"),
            Route::Unmatched("/top/games/5/extra".to_string())
        );
        assert!(Route::parse("/faq").items().is_empty());
        assert_eq!(Route::parse("/faq").title(), None);
    }

    #[test]
    fn unknown_category_is_empty_not_an_error() {
        let route = Route::parse("/top/unknowncat/10");
        assert!(route.items().is_empty());
        assert_eq!(route.title().as_deref(), Some("Top 10 Games"));
    }

    #[test]
    fn titles() {
        assert_eq!(Route::parse("/webseries").title().as_deref(), Some("Web Series"));
        assert_eq!(
            Route::parse("/top/webseries/50").title().as_deref(),
            Some("Top 50 Web Series")
        );
        assert_eq!(
            Route::parse("/top/movies/nope").title().as_deref(),
            Some("Top 20 Movies")
        );
    }

    #[test]
    fn canonical_paths() {
        assert_eq!(Route::parse("/").path(), "/games");
        assert_eq!(Route::parse("top/movies/7").path(), "/top/movies/7");
        assert_eq!(Route::parse("/a//b/").path(), "/a/b");
    }

    #[test]
    fn top_items_are_sorted_and_capped() {
        let items = Route::parse("/top/games/5").items();
        let titles: Vec<&str> = items.iter().map(|item| item.title).collect();
        assert_eq!(
            titles,
            vec![
                "The Witcher 3",
                "Elden Ring",
                "Red Dead Redemption 2",
                "God of War",
                "Ghost of Tsushima",
            ]
        );
    }

    #[test]
    fn list_items_are_borrowed() {
        assert!(matches!(Route::parse("/games").items(), Cow::Borrowed(_)));
    }
}
