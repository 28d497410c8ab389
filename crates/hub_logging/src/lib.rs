#![deny(missing_docs)]
//! Shared logging utilities for the EntertainmentHub workspace.
//!
//! This crate provides the `hub_*` logging macros used across the codebase,
//! the start-up logger initialization for the terminal shell, and a minimal
//! test initializer for the global logger.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Default log file, relative to the current working directory.
pub const DEFAULT_LOG_FILE: &str = "./hub.log";

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! hub_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! hub_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! hub_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! hub_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! hub_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogDestination {
    /// Write to the configured log file.
    #[default]
    File,
    /// Write to the terminal. Interleaves with the UI, so mostly useful for tests.
    Terminal,
    /// Write to both file and terminal.
    Both,
    /// Do not install a logger.
    Off,
}

/// Everything needed to install the global logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Where log lines go.
    pub destination: LogDestination,
    /// Maximum level that is emitted.
    pub level: LevelFilter,
    /// Log file used by [`LogDestination::File`] and [`LogDestination::Both`].
    pub file: PathBuf,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            destination: LogDestination::File,
            level: LevelFilter::Info,
            file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// Parses a level name such as `"debug"` or `"WARN"`, falling back to `Info`.
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Installs the global logger described by `settings`.
///
/// Returns `true` when a logger was installed. A log file that cannot be
/// created is reported on stderr and skipped; a logger installed earlier is
/// left in place.
pub fn initialize(settings: &LogSettings) -> bool {
    let config = build_config();
    let level = settings.level;

    let loggers: Vec<Box<dyn SharedLogger>> = match settings.destination {
        LogDestination::Off => return false,
        LogDestination::File => match create_file_logger(&settings.file, level, config) {
            Some(file_logger) => vec![file_logger],
            None => return false,
        },
        LogDestination::Terminal => vec![TermLogger::new(
            level,
            config,
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )],
        LogDestination::Both => {
            let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
                level,
                config.clone(),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )];
            if let Some(file_logger) = create_file_logger(&settings.file, level, config) {
                loggers.push(file_logger);
            }
            loggers
        }
    };

    CombinedLogger::init(loggers).is_ok()
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_are_case_insensitive() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert_eq!(parse_level("chatty"), LevelFilter::Info);
        assert_eq!(parse_level(""), LevelFilter::Info);
    }

    #[test]
    fn file_logger_is_created_in_existing_dir() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("hub.log");
        let logger = create_file_logger(&path, LevelFilter::Info, build_config());
        assert!(logger.is_some());
        assert!(path.exists());
    }

    #[test]
    fn file_logger_in_missing_dir_is_skipped() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("missing").join("hub.log");
        assert!(create_file_logger(&path, LevelFilter::Info, build_config()).is_none());
    }

    #[test]
    fn off_destination_installs_nothing() {
        let settings = LogSettings {
            destination: LogDestination::Off,
            ..LogSettings::default()
        };
        assert!(!initialize(&settings));
    }
}
