use crate::nav::{footer_sections, header_links, sidebar_sections, LinkSection, SITE_NAME};
use crate::paginate::{paginate, total_pages};
use crate::{AppState, ContentItem, Palette, Theme};

pub const SEARCH_PLACEHOLDER: &str = "Search...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub theme: Theme,
    pub palette: Palette,
    pub header: HeaderView,
    pub search: SearchView,
    pub sidebar: SidebarView,
    /// `None` when the location matched no view.
    pub content: Option<ContentPageView>,
    pub footer: Vec<LinkSection>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub site_name: &'static str,
    pub links: Vec<HeaderLinkView>,
    pub theme_toggle_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLinkView {
    pub label: String,
    pub target: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    pub active: bool,
    pub query: String,
    pub placeholder: &'static str,
    /// Only populated while the box is open.
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarView {
    pub open: bool,
    pub sections: Vec<LinkSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPageView {
    pub title: String,
    pub path: String,
    pub cards: Vec<CardView>,
    /// Empty when no page controls should be drawn.
    pub pages: Vec<PageButtonView>,
    pub current_page: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// One decimal place, e.g. `"9.0"`.
    pub rating: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButtonView {
    pub page: usize,
    pub active: bool,
}

impl AppViewModel {
    pub(crate) fn build(state: &AppState) -> Self {
        let theme = state.theme();
        let route_path = state.route().path();

        let header = HeaderView {
            site_name: SITE_NAME,
            links: header_links()
                .into_iter()
                .map(|link| HeaderLinkView {
                    active: link.target == route_path,
                    label: link.label,
                    target: link.target,
                })
                .collect(),
            theme_toggle_label: theme.toggle_label(),
        };

        let search = state.search();
        let search = SearchView {
            active: search.active,
            query: search.query.clone(),
            placeholder: SEARCH_PLACEHOLDER,
            suggestions: if search.active {
                search.suggestions.iter().map(|s| s.to_string()).collect()
            } else {
                Vec::new()
            },
        };

        Self {
            theme,
            palette: theme.palette(),
            header,
            search,
            sidebar: SidebarView {
                open: state.sidebar_open(),
                sections: sidebar_sections(),
            },
            content: build_content(state),
            footer: footer_sections(),
            dirty: state.is_dirty(),
        }
    }
}

fn build_content(state: &AppState) -> Option<ContentPageView> {
    let route = state.route();
    let title = route.title()?;
    let items = route.items();
    let page = state.page();

    let total = total_pages(items.len(), page.items_per_page);
    let show_controls = if route.shows_single_page_controls() {
        total >= 1
    } else {
        total > 1
    };
    let pages = if show_controls {
        (1..=total)
            .map(|number| PageButtonView {
                page: number,
                active: number == page.current_page,
            })
            .collect()
    } else {
        Vec::new()
    };

    Some(ContentPageView {
        title,
        path: route.path(),
        cards: paginate(&items, page.current_page, page.items_per_page)
            .iter()
            .map(card_view)
            .collect(),
        pages,
        current_page: page.current_page,
        total_pages: total,
    })
}

fn card_view(item: &ContentItem) -> CardView {
    CardView {
        id: item.id,
        title: item.title.to_string(),
        description: item.description.to_string(),
        image_url: item.image_url.to_string(),
        rating: format!("{:.1}", item.rating),
    }
}
