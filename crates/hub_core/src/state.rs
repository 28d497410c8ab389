use hub_logging::hub_debug;

use crate::data::SEARCH_TITLES;
use crate::paginate::ITEMS_PER_PAGE;
use crate::suggest::{suggest, SUGGESTION_LIMIT};
use crate::view_model::AppViewModel;
use crate::{Route, Theme};

/// Page position within the active view. Reset whenever the view's list
/// changes identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: ITEMS_PER_PAGE,
        }
    }
}

/// Header search box. Purely advisory: nothing here feeds the catalog view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    pub active: bool,
    pub query: String,
    pub suggestions: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    route: Route,
    page: PageState,
    theme: Theme,
    sidebar_open: bool,
    search: SearchState,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state for a shell that was configured with a start location
    /// and theme.
    pub fn starting_at(route: Route, theme: Theme) -> Self {
        Self {
            route,
            theme,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::build(self)
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        hub_debug!("Route {} -> {}", self.route.path(), route.path());
        self.route = route;
        self.page.current_page = 1;
        self.dirty = true;
    }

    pub(crate) fn select_page(&mut self, page: usize) {
        if self.page.current_page != page {
            self.page.current_page = page;
            self.dirty = true;
        }
    }

    pub(crate) fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
        self.dirty = true;
    }

    pub(crate) fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.dirty = true;
    }

    /// Returns `true` when the search box was opened.
    pub(crate) fn toggle_search(&mut self) -> bool {
        if self.search.active {
            self.search = SearchState::default();
        } else {
            self.search.active = true;
        }
        self.dirty = true;
        self.search.active
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if !self.search.active {
            return;
        }
        self.search.suggestions = suggest(&query, &SEARCH_TITLES, SUGGESTION_LIMIT);
        self.search.query = query;
        self.dirty = true;
    }

    pub(crate) fn choose_suggestion(&mut self, index: usize) {
        if !self.search.active {
            return;
        }
        if let Some(title) = self.search.suggestions.get(index).copied() {
            self.search.query = title.to_string();
            self.search.suggestions.clear();
            self.dirty = true;
        }
    }

    /// Closes the search box but keeps whatever was typed.
    pub(crate) fn dismiss_search(&mut self) {
        if self.search.active || !self.search.suggestions.is_empty() {
            self.search.active = false;
            self.search.suggestions.clear();
            self.dirty = true;
        }
    }
}
