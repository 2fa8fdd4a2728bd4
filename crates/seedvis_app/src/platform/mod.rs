pub mod app;
pub mod effects;
pub mod logging;
pub mod settings;
pub mod timer;
