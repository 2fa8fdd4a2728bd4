#![deny(missing_docs)]
//! Shared logging utilities for the seedvis workspace.
//!
//! This crate provides the `engine_*` logging macros used across the codebase,
//! a per-thread playback turn context that the macros stamp onto every record,
//! and a minimal test initializer for the global logger.

use std::cell::Cell;
use std::fmt;

thread_local! {
    /// Turn currently shown by the playback controller on this thread, if any.
    static PLAYBACK_TURN: Cell<Option<usize>> = const { Cell::new(None) };
}

/// Records the playback turn for the current thread.
///
/// The runtime calls this after every dispatched message so that log lines
/// emitted while resolving a frame can be matched to the turn they belong to.
/// Pass `None` when nothing is loaded.
pub fn set_playback_turn(turn: Option<usize>) {
    PLAYBACK_TURN.with(|v| v.set(turn));
}

/// Returns the playback turn recorded for the current thread.
pub fn playback_turn() -> Option<usize> {
    PLAYBACK_TURN.with(|v| v.get())
}

/// Display adapter for the turn prefix used by the macros.
#[doc(hidden)]
pub struct TurnTag(pub Option<usize>);

impl fmt::Display for TurnTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(turn) => write!(f, "[turn {turn}]"),
            None => write!(f, "[turn -]"),
        }
    }
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! engine_trace {
    ($($arg:tt)*) => {{
        log::trace!("{} {}", $crate::TurnTag($crate::playback_turn()), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! engine_info {
    ($($arg:tt)*) => {{
        log::info!("{} {}", $crate::TurnTag($crate::playback_turn()), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! engine_debug {
    ($($arg:tt)*) => {{
        log::debug!("{} {}", $crate::TurnTag($crate::playback_turn()), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        log::warn!("{} {}", $crate::TurnTag($crate::playback_turn()), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! engine_error {
    ($($arg:tt)*) => {{
        log::error!("{} {}", $crate::TurnTag($crate::playback_turn()), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may already own the global logger.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_context_is_per_thread() {
        set_playback_turn(Some(7));
        assert_eq!(playback_turn(), Some(7));

        let other = std::thread::spawn(playback_turn).join().unwrap();
        assert_eq!(other, None);

        set_playback_turn(None);
        assert_eq!(playback_turn(), None);
    }

    #[test]
    fn turn_tag_formats_missing_turn() {
        assert_eq!(TurnTag(Some(3)).to_string(), "[turn 3]");
        assert_eq!(TurnTag(None).to_string(), "[turn -]");
    }

    #[test]
    fn macros_expand_with_and_without_args() {
        initialize_for_tests();
        engine_info!("plain message");
        engine_debug!("seed={} count={}", 1u64, 2usize);
    }
}
