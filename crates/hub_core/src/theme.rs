/// Light or dark presentation. Held in `AppState` and handed to the view
/// model; nothing reads it from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colors used by the shell to draw one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub text: Rgb,
    pub muted_text: Rgb,
    pub surface: Rgb,
    pub page_button: Rgb,
    pub accent: Rgb,
    pub accent_text: Rgb,
    pub rating: Rgb,
}

const LIGHT: Palette = Palette {
    background: Rgb(0xf5, 0xf5, 0xf5),
    text: Rgb(0x33, 0x33, 0x33),
    muted_text: Rgb(0x66, 0x66, 0x66),
    surface: Rgb(0xff, 0xff, 0xff),
    page_button: Rgb(0xf0, 0xf0, 0xf0),
    accent: Rgb(0x34, 0x98, 0xdb),
    accent_text: Rgb(0xff, 0xff, 0xff),
    rating: Rgb(0xf3, 0x9c, 0x12),
};

const DARK: Palette = Palette {
    background: Rgb(0x12, 0x12, 0x12),
    text: Rgb(0xff, 0xff, 0xff),
    muted_text: Rgb(0xaa, 0xaa, 0xaa),
    surface: Rgb(0x1e, 0x1e, 0x1e),
    page_button: Rgb(0x33, 0x33, 0x33),
    accent: Rgb(0x34, 0x98, 0xdb),
    accent_text: Rgb(0xff, 0xff, 0xff),
    rating: Rgb(0xf1, 0xc4, 0x0f),
};

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }

    /// Label of the toggle button, naming the theme it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_returns() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn dark_palette_uses_dark_background() {
        assert_eq!(Theme::Dark.palette().background, Rgb(0x12, 0x12, 0x12));
        assert_eq!(Theme::Light.palette().background, Rgb(0xf5, 0xf5, 0xf5));
        assert_ne!(Theme::Dark.palette().text, Theme::Light.palette().text);
    }
}
