use std::fmt;

/// The three fixed content kinds shown by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Game,
    Movie,
    WebSeries,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Game, Category::Movie, Category::WebSeries];

    /// Path token used in routes (`/games`, `/top/movies/20`, ...).
    pub fn token(self) -> &'static str {
        match self {
            Category::Game => "games",
            Category::Movie => "movies",
            Category::WebSeries => "webseries",
        }
    }

    /// Exact, case-sensitive token lookup.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.token() == token)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::Game => "Games",
            Category::Movie => "Movies",
            Category::WebSeries => "Web Series",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One catalog entry. `id` is only unique within its category list.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem {
    pub id: u32,
    pub title: &'static str,
    pub image_url: &'static str,
    pub description: &'static str,
    pub rating: f32,
    pub category: Category,
}
