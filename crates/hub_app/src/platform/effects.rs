use hub_core::Effect;
use hub_logging::hub_debug;

use super::ui::{Focus, UiState};

/// Applies core effects to shell-only state.
pub fn run_effects(effects: Vec<Effect>, ui: &mut UiState) {
    for effect in effects {
        hub_debug!("Running effect {:?}", effect);
        match effect {
            Effect::ScrollToTop => ui.scroll_rows = 0,
            Effect::FocusSearchInput => {
                ui.focus = Focus::Search;
                ui.suggestion_cursor = None;
            }
        }
    }
}
