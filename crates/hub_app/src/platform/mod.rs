pub mod app;
pub mod cli;
pub mod config;
pub mod effects;
pub mod ui;

pub use app::run_app;
pub use cli::Cli;
pub use config::{load_config, AppConfig};
