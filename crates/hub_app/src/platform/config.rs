//! Start-up configuration read from a RON file. Nothing is written back.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use hub_core::Theme;
use hub_logging::{hub_info, parse_level, LogDestination, LogSettings, DEFAULT_LOG_FILE};
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILENAME: &str = "hub.ron";
pub const CONFIG_ENV_VAR: &str = "HUB_CONFIG";
pub const DEFAULT_TICK_MS: u64 = 75;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub start_route: String,
    pub theme: ThemeSetting,
    pub tick_ms: u64,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_route: "/".to_string(),
            theme: ThemeSetting::Light,
            tick_ms: DEFAULT_TICK_MS,
            log: LogConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ThemeSetting {
    #[default]
    Light,
    Dark,
}

impl From<ThemeSetting> for Theme {
    fn from(setting: ThemeSetting) -> Self {
        match setting {
            ThemeSetting::Light => Theme::Light,
            ThemeSetting::Dark => Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub destination: LogTarget,
    pub level: String,
    pub file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            destination: LogTarget::File,
            level: "info".to_string(),
            file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl LogConfig {
    pub fn to_settings(&self) -> LogSettings {
        LogSettings {
            destination: self.destination.into(),
            level: parse_level(&self.level),
            file: self.file.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum LogTarget {
    #[default]
    File,
    Terminal,
    Both,
    Off,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
            LogTarget::Off => LogDestination::Off,
        }
    }
}

/// `$HUB_CONFIG` when set, otherwise `./hub.ron`.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".").join(CONFIG_FILENAME))
}

/// Loads the configuration at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let config = ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    hub_info!("Loaded configuration from {:?}", path);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(&temp.path().join("absent.ron")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "(start_route: \"/top/movies/5\", theme: Dark)");
        let config = load_config(&path).unwrap();

        assert_eq!(config.start_route, "/top/movies/5");
        assert_eq!(Theme::from(config.theme), Theme::Dark);
        assert_eq!(config.tick_ms, DEFAULT_TICK_MS);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn log_section_maps_to_settings() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            "(log: (destination: Off, level: \"debug\", file: \"other.log\"))",
        );
        let settings = load_config(&path).unwrap().log.to_settings();

        assert_eq!(settings.destination, LogDestination::Off);
        assert_eq!(settings.level, log::LevelFilter::Debug);
        assert_eq!(settings.file, PathBuf::from("other.log"));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "(theme: Purple)");
        let err = load_config(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(CONFIG_FILENAME));
    }

    #[test]
    fn directory_path_is_a_read_error() {
        let temp = TempDir::new().unwrap();
        let err = load_config(temp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
