use hub_core::AppViewModel;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::constants::*;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub logo: Rect,
    pub nav: Rect,
    pub search_input: Rect,
    pub search_button: Rect,
    pub theme_button: Rect,
    pub menu_button: Rect,
    /// Popup under the search box; `None` when there is nothing to suggest.
    pub suggestions: Option<Rect>,
    pub sidebar: Option<Rect>,
    pub content: Rect,
    pub footer: Rect,
    pub help: Rect,
}

pub fn compute(area: Rect, view: &AppViewModel) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(LOGO_WIDTH),
            Constraint::Min(0),
            Constraint::Length(SEARCH_WIDTH),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .split(rows[0]);

    let search = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(BUTTON_WIDTH)])
        .split(header[2]);

    let (sidebar, content) = if view.sidebar.open {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(rows[1]);
        (Some(body[0]), body[1])
    } else {
        (None, rows[1])
    };

    let suggestions = if view.search.suggestions.is_empty() {
        None
    } else {
        let height = view.search.suggestions.len() as u16 + 2;
        let popup = Rect::new(
            header[2].x,
            header[2].y + header[2].height,
            header[2].width,
            height,
        );
        Some(popup.intersection(area)).filter(|rect| !rect.is_empty())
    };

    ScreenLayout {
        logo: header[0],
        nav: header[1],
        search_input: search[0],
        search_button: search[1],
        theme_button: header[3],
        menu_button: header[4],
        suggestions,
        sidebar,
        content,
        footer: rows[2],
        help: rows[3],
    }
}

/// Splits the content area into title, card grid and page-button row.
pub fn content_sections(area: Rect, has_pages: bool) -> (Rect, Rect, Option<Rect>) {
    let pages_height = if has_pages { 3 } else { 0 };
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(pages_height),
        ])
        .split(area);
    let pages = if has_pages { Some(parts[2]) } else { None };
    (parts[0], parts[1], pages)
}

/// Card slots for one grid row.
pub fn card_columns(row: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, CARD_COLUMNS as u32); CARD_COLUMNS])
        .split(row)
        .to_vec()
}
