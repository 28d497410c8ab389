use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use super::config::{config_path, AppConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "hub_app",
    about = "Browse the EntertainmentHub catalog in the terminal",
    version
)]
pub struct Cli {
    /// Location to open first, e.g. `/movies` or `/top/games/10`
    pub location: Option<String>,

    /// Configuration file; overrides `$HUB_CONFIG` and `./hub.ron`
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level; overrides the configuration file
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(config_path)
    }

    /// Command-line values win over the configuration file.
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(location) = &self.location {
            config.start_route = location.clone();
        }
        if let Some(level) = self.log_level {
            config.log.level = level.as_str().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("hub_app").chain(args.iter().copied()))
    }

    #[test]
    fn no_arguments_keep_configuration() {
        let cli = parse(&[]).unwrap();
        let mut config = AppConfig::default();
        cli.apply_to(&mut config);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn location_and_level_override_configuration() {
        let cli = parse(&["/top/movies/10", "--log-level", "debug"]).unwrap();
        let mut config = AppConfig::default();
        cli.apply_to(&mut config);

        assert_eq!(config.start_route, "/top/movies/10");
        assert_eq!(config.log.to_settings().level, log::LevelFilter::Debug);
    }

    #[test]
    fn config_flag_replaces_default_path() {
        let cli = parse(&["--config", "/tmp/other.ron"]).unwrap();
        assert_eq!(cli.config_path(), PathBuf::from("/tmp/other.ron"));
        assert_eq!(cli.location, None);
    }

    #[test]
    fn help_is_not_a_location() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("Usage"));
    }

    #[test]
    fn unknown_flags_and_extra_arguments_are_rejected() {
        assert_eq!(
            parse(&["--bogus"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
        assert_eq!(
            parse(&["/games", "/movies"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
        assert_eq!(
            parse(&["--log-level", "loud"]).unwrap_err().kind(),
            ErrorKind::InvalidValue
        );
    }
}
