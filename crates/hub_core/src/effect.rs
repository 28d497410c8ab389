/// Requests for the shell that the pure core cannot perform itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Bring the top of the content area back into view after a page change.
    ScrollToTop,
    /// Give keyboard focus to the search box that was just opened.
    FocusSearchInput,
}
