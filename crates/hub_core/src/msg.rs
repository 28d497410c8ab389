#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User followed a link or typed a location.
    Navigate(String),
    /// User clicked a page button (1-based).
    PageSelected(usize),
    /// User clicked the menu button, the sidebar's close button, or the
    /// content beside an open sidebar.
    SidebarToggled,
    /// User clicked the n-th sidebar link (display order, 0-based).
    SidebarLinkChosen(usize),
    /// User clicked the theme button.
    ThemeToggled,
    /// User clicked the search button.
    SearchToggled,
    /// User edited the search box (full text after the edit).
    SearchInputChanged(String),
    /// User picked the n-th visible suggestion.
    SuggestionChosen(usize),
    /// A pointer went down outside the search container.
    PointerDownOutsideSearch,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
