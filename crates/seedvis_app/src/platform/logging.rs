//! Session logging for seedvis, configured from [`Settings`].
//!
//! Only records from seedvis crates pass; dependency chatter is filtered out.

use std::fs::File;
use std::path::Path;

use engine_logging::engine_info;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use super::settings::Settings;

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogDestination {
    /// Write to the configured log file.
    File,
    #[default]
    Terminal,
    Both,
}

impl LogDestination {
    fn wants_file(self) -> bool {
        matches!(self, Self::File | Self::Both)
    }

    fn wants_terminal(self) -> bool {
        matches!(self, Self::Terminal | Self::Both)
    }
}

/// Most verbose level written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

/// Installs the global logger described by `settings`. Later calls are ignored.
pub fn initialize(settings: &Settings) {
    let loggers = build_loggers(
        settings.log_destination,
        settings.log_level.filter(),
        &settings.log_file,
    );
    if CombinedLogger::init(loggers).is_ok() {
        engine_info!(
            "Logging {:?} to {:?} ({:?})",
            settings.log_level,
            settings.log_destination,
            settings.log_file
        );
    }
}

/// Backends for `destination`. When the log file cannot be created the
/// terminal takes over, so a session never runs without any log output.
fn build_loggers(
    destination: LogDestination,
    level: LevelFilter,
    log_file: &Path,
) -> Vec<Box<dyn SharedLogger>> {
    let config = session_config();
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    let mut terminal = destination.wants_terminal();
    if destination.wants_file() {
        match File::create(log_file) {
            Ok(file) => loggers.push(WriteLogger::new(level, config.clone(), file)),
            Err(err) => {
                // No logger exists yet to report this.
                eprintln!("Warning: cannot create log file {:?}: {}", log_file, err);
                terminal = true;
            }
        }
    }
    if terminal {
        loggers.push(TermLogger::new(
            level,
            config,
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    loggers
}

fn session_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .add_filter_allow_str("seedvis")
        .build()
}
