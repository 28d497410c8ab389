pub mod constants;
pub mod input;
pub mod layout;
pub mod render;

use hub_core::AppViewModel;

/// Which part of the screen receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Browse,
    Search,
}

/// Shell-only presentation state that the core never sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    pub focus: Focus,
    pub suggestion_cursor: Option<usize>,
    /// Card rows scrolled out of view at the top of the grid.
    pub scroll_rows: u16,
}

impl UiState {
    /// Drops focus and cursor positions that no longer make sense for `view`.
    pub fn sync_with(&mut self, view: &AppViewModel) {
        if !view.search.active {
            self.focus = Focus::Browse;
        }
        let count = view.search.suggestions.len();
        self.suggestion_cursor = match self.suggestion_cursor {
            Some(index) if index < count => Some(index),
            _ => None,
        };
    }

    pub fn move_suggestion_cursor(&mut self, delta: isize, count: usize) {
        if count == 0 {
            self.suggestion_cursor = None;
            return;
        }
        let next = match self.suggestion_cursor {
            None if delta >= 0 => 0,
            None => count - 1,
            Some(index) => (index as isize + delta).rem_euclid(count as isize) as usize,
        };
        self.suggestion_cursor = Some(next);
    }

    pub fn scroll_by(&mut self, delta: i16) {
        self.scroll_rows = self.scroll_rows.saturating_add_signed(delta);
    }
}
