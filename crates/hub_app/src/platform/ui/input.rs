//! Turns terminal input into core messages or shell-local commands.

use hub_core::{AppViewModel, Msg};
use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use super::constants::*;
use super::{Focus, UiState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Scroll(i16),
    MoveSuggestion(isize),
    Focus(Focus),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    Link(String),
    SearchInput,
    SearchButton,
    Suggestion(usize),
    ThemeButton,
    MenuButton,
    SidebarClose,
    /// Content area beside an open sidebar.
    SidebarOverlay,
    SidebarLink(usize),
    PageButton(usize),
}

/// Clickable regions recorded while drawing the last frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
    search_container: Vec<Rect>,
}

impl HitMap {
    pub fn push(&mut self, rect: Rect, target: HitTarget) {
        if !rect.is_empty() {
            self.regions.push((rect, target));
        }
    }

    /// Marks `rect` as part of the search container for click-outside checks.
    pub fn add_search_container(&mut self, rect: Rect) {
        self.search_container.push(rect);
    }

    /// Regions drawn later sit on top, so the last match wins.
    pub fn target_at(&self, column: u16, row: u16) -> Option<&HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| contains(*rect, column, row))
            .map(|(_, target)| target)
    }

    pub fn inside_search(&self, column: u16, row: u16) -> bool {
        self.search_container
            .iter()
            .any(|rect| contains(*rect, column, row))
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

pub fn on_key(key: KeyEvent, ui: &UiState, view: &AppViewModel) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }
    match ui.focus {
        Focus::Search => on_search_key(key, ui, view),
        Focus::Browse => on_browse_key(key, view),
    }
}

fn on_search_key(key: KeyEvent, ui: &UiState, view: &AppViewModel) -> Option<Command> {
    let query = &view.search.query;
    match key.code {
        KeyCode::Esc => Some(Command::Dispatch(Msg::SearchToggled)),
        KeyCode::Tab => Some(Command::Focus(Focus::Browse)),
        KeyCode::Up => Some(Command::MoveSuggestion(-1)),
        KeyCode::Down => Some(Command::MoveSuggestion(1)),
        KeyCode::Enter => ui
            .suggestion_cursor
            .map(|index| Command::Dispatch(Msg::SuggestionChosen(index))),
        KeyCode::Backspace => {
            let mut text = query.clone();
            text.pop()?;
            Some(Command::Dispatch(Msg::SearchInputChanged(text)))
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut text = query.clone();
            text.push(c);
            Some(Command::Dispatch(Msg::SearchInputChanged(text)))
        }
        _ => None,
    }
}

fn on_browse_key(key: KeyEvent, view: &AppViewModel) -> Option<Command> {
    let navigate = |path: &str| Some(Command::Dispatch(Msg::Navigate(path.to_string())));
    match key.code {
        KeyCode::Char(KEY_QUIT) => Some(Command::Quit),
        KeyCode::Char(KEY_GAMES) => navigate("/games"),
        KeyCode::Char(KEY_MOVIES) => navigate("/movies"),
        KeyCode::Char(KEY_WEBSERIES) => navigate("/webseries"),
        KeyCode::Char(KEY_SIDEBAR) => Some(Command::Dispatch(Msg::SidebarToggled)),
        KeyCode::Char(KEY_THEME) => Some(Command::Dispatch(Msg::ThemeToggled)),
        KeyCode::Char(KEY_SEARCH) => Some(Command::Dispatch(Msg::SearchToggled)),
        KeyCode::Char(digit @ '1'..='9') => {
            let number = digit.to_digit(10)? as usize;
            if view.sidebar.open {
                Some(Command::Dispatch(Msg::SidebarLinkChosen(number - 1)))
            } else {
                page_button(view, number)
            }
        }
        KeyCode::Left => {
            let current = view.content.as_ref()?.current_page;
            page_button(view, current.checked_sub(1)?)
        }
        KeyCode::Right => {
            let current = view.content.as_ref()?.current_page;
            page_button(view, current + 1)
        }
        KeyCode::Esc if view.sidebar.open => Some(Command::Dispatch(Msg::SidebarToggled)),
        KeyCode::Tab if view.search.active => Some(Command::Focus(Focus::Search)),
        KeyCode::PageDown => Some(Command::Scroll(SCROLL_STEP)),
        KeyCode::PageUp => Some(Command::Scroll(-SCROLL_STEP)),
        _ => None,
    }
}

/// Only pages that have a visible button can be selected from the keyboard.
fn page_button(view: &AppViewModel, page: usize) -> Option<Command> {
    view.content
        .as_ref()?
        .pages
        .iter()
        .find(|button| button.page == page)
        .map(|button| Command::Dispatch(Msg::PageSelected(button.page)))
}

pub fn on_mouse(mouse: MouseEvent, hits: &HitMap, view: &AppViewModel) -> Vec<Command> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let mut commands = Vec::new();
            if view.search.active && !hits.inside_search(column, row) {
                commands.push(Command::Dispatch(Msg::PointerDownOutsideSearch));
            }
            if let Some(target) = hits.target_at(column, row) {
                commands.extend(click(target, view));
            }
            commands
        }
        MouseEventKind::ScrollDown => vec![Command::Scroll(SCROLL_STEP)],
        MouseEventKind::ScrollUp => vec![Command::Scroll(-SCROLL_STEP)],
        _ => Vec::new(),
    }
}

fn click(target: &HitTarget, view: &AppViewModel) -> Option<Command> {
    let msg = match target {
        HitTarget::Link(path) => Msg::Navigate(path.clone()),
        HitTarget::SearchInput if view.search.active => return Some(Command::Focus(Focus::Search)),
        HitTarget::SearchInput => return None,
        HitTarget::SearchButton => Msg::SearchToggled,
        HitTarget::Suggestion(index) => Msg::SuggestionChosen(*index),
        HitTarget::ThemeButton => Msg::ThemeToggled,
        HitTarget::MenuButton | HitTarget::SidebarClose | HitTarget::SidebarOverlay => {
            Msg::SidebarToggled
        }
        HitTarget::SidebarLink(index) => Msg::SidebarLinkChosen(*index),
        HitTarget::PageButton(page) => Msg::PageSelected(*page),
    };
    Some(Command::Dispatch(msg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_core::{update, AppState};
    use pretty_assertions::assert_eq;
    use ratatui::crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn searching(query: &str) -> AppViewModel {
        let (state, _) = update(AppState::new(), Msg::SearchToggled);
        update(state, Msg::SearchInputChanged(query.to_string())).0.view()
    }

    #[test]
    fn browse_keys_map_to_messages() {
        let view = AppState::new().view();
        let ui = UiState::default();

        assert_eq!(
            on_key(key(KeyCode::Char('m')), &ui, &view),
            Some(Command::Dispatch(Msg::Navigate("/movies".to_string())))
        );
        assert_eq!(
            on_key(key(KeyCode::Right), &ui, &view),
            Some(Command::Dispatch(Msg::PageSelected(2)))
        );
        assert_eq!(on_key(key(KeyCode::Left), &ui, &view), None);
        assert_eq!(on_key(key(KeyCode::Char('3')), &ui, &view), None);
        assert_eq!(on_key(key(KeyCode::Char('q')), &ui, &view), Some(Command::Quit));
    }

    #[test]
    fn digits_pick_sidebar_links_while_open() {
        let (state, _) = update(AppState::new(), Msg::SidebarToggled);
        let view = state.view();
        assert_eq!(
            on_key(key(KeyCode::Char('4')), &UiState::default(), &view),
            Some(Command::Dispatch(Msg::SidebarLinkChosen(3)))
        );
    }

    #[test]
    fn search_keys_edit_the_query() {
        let view = searching("wa");
        let ui = UiState {
            focus: Focus::Search,
            ..UiState::default()
        };

        assert_eq!(
            on_key(key(KeyCode::Char('r')), &ui, &view),
            Some(Command::Dispatch(Msg::SearchInputChanged("war".to_string())))
        );
        assert_eq!(
            on_key(key(KeyCode::Backspace), &ui, &view),
            Some(Command::Dispatch(Msg::SearchInputChanged("w".to_string())))
        );
        // Typing 'q' while searching is text, not quit.
        assert_eq!(
            on_key(key(KeyCode::Char('q')), &ui, &view),
            Some(Command::Dispatch(Msg::SearchInputChanged("waq".to_string())))
        );
        assert_eq!(on_key(key(KeyCode::Enter), &ui, &view), None);
    }

    #[test]
    fn enter_chooses_highlighted_suggestion() {
        let view = searching("war");
        let ui = UiState {
            focus: Focus::Search,
            suggestion_cursor: Some(0),
            ..UiState::default()
        };
        assert_eq!(
            on_key(key(KeyCode::Enter), &ui, &view),
            Some(Command::Dispatch(Msg::SuggestionChosen(0)))
        );
    }

    #[test]
    fn ctrl_c_always_quits() {
        let view = searching("wa");
        let ui = UiState {
            focus: Focus::Search,
            ..UiState::default()
        };
        let ctrl_c = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: ratatui::crossterm::event::KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert_eq!(on_key(ctrl_c, &ui, &view), Some(Command::Quit));
    }

    #[test]
    fn click_outside_search_dismisses_then_hits_target() {
        let view = searching("war");
        let mut hits = HitMap::default();
        hits.add_search_container(Rect::new(80, 0, 32, 3));
        hits.push(Rect::new(10, 30, 5, 3), HitTarget::PageButton(2));

        assert_eq!(
            on_mouse(left_click(11, 31), &hits, &view),
            vec![
                Command::Dispatch(Msg::PointerDownOutsideSearch),
                Command::Dispatch(Msg::PageSelected(2)),
            ]
        );
        assert_eq!(on_mouse(left_click(85, 1), &hits, &view), Vec::new());
    }

    #[test]
    fn click_beside_open_sidebar_closes_it() {
        let (state, _) = update(AppState::new(), Msg::SidebarToggled);
        let view = state.view();
        let mut hits = HitMap::default();
        hits.push(Rect::new(30, 10, 5, 3), HitTarget::PageButton(2));
        hits.push(Rect::new(26, 3, 94, 30), HitTarget::SidebarOverlay);

        assert_eq!(
            on_mouse(left_click(31, 11), &hits, &view),
            vec![Command::Dispatch(Msg::SidebarToggled)]
        );
    }

    #[test]
    fn later_regions_win() {
        let mut hits = HitMap::default();
        hits.push(Rect::new(0, 0, 10, 10), HitTarget::ThemeButton);
        hits.push(Rect::new(2, 2, 2, 2), HitTarget::Suggestion(1));

        assert_eq!(hits.target_at(3, 3), Some(&HitTarget::Suggestion(1)));
        assert_eq!(hits.target_at(0, 0), Some(&HitTarget::ThemeButton));
        assert_eq!(hits.target_at(10, 10), None);
    }
}
