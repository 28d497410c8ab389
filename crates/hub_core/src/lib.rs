//! EntertainmentHub core: static catalog, list transformations, and the pure
//! state machine and view-model helpers driven by the shell.
mod catalog;
mod data;
mod effect;
mod item;
mod msg;
mod nav;
mod paginate;
mod route;
mod state;
mod suggest;
mod theme;
mod top;
mod update;
mod view_model;

pub use catalog::{get_items, items_for_token};
pub use data::SEARCH_TITLES;
pub use effect::Effect;
pub use item::{Category, ContentItem};
pub use msg::Msg;
pub use nav::{
    copyright_line, footer_sections, header_links, sidebar_links, sidebar_sections, LinkSection,
    NavLink, SITE_NAME,
};
pub use paginate::{paginate, total_pages, ITEMS_PER_PAGE};
pub use route::{Route, DEFAULT_TOP_COUNT};
pub use state::{AppState, PageState, SearchState};
pub use suggest::{suggest, MIN_QUERY_CHARS, SUGGESTION_LIMIT};
pub use theme::{Palette, Rgb, Theme};
pub use top::top_n;
pub use update::update;
pub use view_model::{
    AppViewModel, CardView, ContentPageView, HeaderLinkView, HeaderView, PageButtonView,
    SearchView, SidebarView, SEARCH_PLACEHOLDER,
};
