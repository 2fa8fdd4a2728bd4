//! Seedvis platform runtime: drives the core state machine on one thread and
//! executes its effects against the engine, the filesystem and the timer.
mod platform;

pub use platform::app::{launch, Runtime};
pub use platform::effects::EffectRunner;
pub use platform::logging::{self as logging, LogDestination, LogLevel};
pub use platform::settings::{load_settings, Settings, SettingsError, SETTINGS_FILENAME};
pub use platform::timer::{ThreadTicker, Ticker};
