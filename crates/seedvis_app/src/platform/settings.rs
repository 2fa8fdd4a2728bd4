use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use engine_logging::{engine_info, engine_warn};
use seedvis_core::CaseCount;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::logging::{LogDestination, LogLevel};

pub const SETTINGS_FILENAME: &str = "seedvis.ron";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid settings in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Session settings. Missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Delay between automatic turn advances.
    pub playback_interval_ms: u64,
    pub default_case_count: u32,
    pub download_dir: PathBuf,
    pub log_destination: LogDestination,
    pub log_level: LogLevel,
    /// Used when `log_destination` includes a file.
    pub log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playback_interval_ms: 100,
            default_case_count: CaseCount::default().get(),
            download_dir: PathBuf::from("downloads"),
            log_destination: LogDestination::Terminal,
            log_level: LogLevel::Info,
            log_file: PathBuf::from("seedvis.log"),
        }
    }
}

impl Settings {
    pub fn playback_interval(&self) -> Duration {
        Duration::from_millis(self.playback_interval_ms.max(1))
    }

    /// Configured case count, or the built-in default when out of range.
    pub fn case_count(&self) -> CaseCount {
        CaseCount::new(self.default_case_count).unwrap_or_default()
    }

    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Reads settings from `path`. A missing file is normal and yields the
/// defaults; an unreadable or malformed one is logged and also yields them.
pub fn load_settings(path: &Path) -> Settings {
    match Settings::from_file(path) {
        Ok(settings) => {
            engine_info!("Loaded settings from {:?}", path);
            settings
        }
        Err(SettingsError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            Settings::default()
        }
        Err(err) => {
            engine_warn!("{}; using defaults", err);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let settings: Settings = ron::from_str("(playback_interval_ms: 40)").unwrap();
        assert_eq!(settings.playback_interval_ms, 40);
        assert_eq!(settings.default_case_count, 100);
        assert_eq!(settings.log_destination, LogDestination::Terminal);
        assert_eq!(settings.log_level, LogLevel::Info);
    }

    #[test]
    fn logging_fields_are_read_from_file() {
        let settings: Settings = ron::from_str(
            r#"(log_destination: Both, log_level: Debug, log_file: "logs/run.log")"#,
        )
        .unwrap();
        assert_eq!(settings.log_destination, LogDestination::Both);
        assert_eq!(settings.log_level, LogLevel::Debug);
        assert_eq!(settings.log_file, PathBuf::from("logs/run.log"));
    }

    #[test]
    fn out_of_range_case_count_falls_back() {
        let settings = Settings {
            default_case_count: 0,
            ..Settings::default()
        };
        assert_eq!(settings.case_count().get(), 100);
    }

    #[test]
    fn zero_interval_is_raised_to_one_millisecond() {
        let settings = Settings {
            playback_interval_ms: 0,
            ..Settings::default()
        };
        assert_eq!(settings.playback_interval(), Duration::from_millis(1));
    }
}
