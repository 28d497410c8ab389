use hub_logging::hub_debug;

use crate::nav::sidebar_links;
use crate::{AppState, Effect, Msg, Route};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Navigate(location) => {
            state.navigate(Route::parse(&location));
            Vec::new()
        }
        Msg::PageSelected(0) => {
            hub_debug!("Ignoring page 0");
            Vec::new()
        }
        Msg::PageSelected(page) => {
            state.select_page(page);
            vec![Effect::ScrollToTop]
        }
        Msg::SidebarToggled => {
            state.toggle_sidebar();
            Vec::new()
        }
        Msg::SidebarLinkChosen(index) => {
            // The sidebar stays open until the user closes it.
            match sidebar_links().into_iter().nth(index) {
                Some(link) => state.navigate(Route::parse(&link.target)),
                None => hub_debug!("No sidebar link at index {}", index),
            }
            Vec::new()
        }
        Msg::ThemeToggled => {
            state.toggle_theme();
            Vec::new()
        }
        Msg::SearchToggled => {
            if state.toggle_search() {
                vec![Effect::FocusSearchInput]
            } else {
                Vec::new()
            }
        }
        Msg::SearchInputChanged(text) => {
            state.set_query(text);
            Vec::new()
        }
        Msg::SuggestionChosen(index) => {
            state.choose_suggestion(index);
            Vec::new()
        }
        Msg::PointerDownOutsideSearch => {
            state.dismiss_search();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
