pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 6;
pub const SIDEBAR_WIDTH: u16 = 26;
pub const LOGO_WIDTH: u16 = 20;
pub const SEARCH_WIDTH: u16 = 32;
pub const BUTTON_WIDTH: u16 = 5;

pub const CARD_COLUMNS: usize = 3;
pub const CARD_HEIGHT: u16 = 8;
pub const PAGE_BUTTON_WIDTH: u16 = 5;

pub const KEY_GAMES: char = 'g';
pub const KEY_MOVIES: char = 'm';
pub const KEY_WEBSERIES: char = 'w';
pub const KEY_SIDEBAR: char = 'b';
pub const KEY_THEME: char = 't';
pub const KEY_SEARCH: char = '/';
pub const KEY_QUIT: char = 'q';

pub const SCROLL_STEP: i16 = 1;

pub const HELP_TEXT: &str =
    "g/m/w: category  ←/→ 1-9: page  b: sidebar  t: theme  /: search  PgUp/PgDn: scroll  q: quit";
