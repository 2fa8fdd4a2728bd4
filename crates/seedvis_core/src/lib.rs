//! Seedvis core: pure state machine and view-model helpers.
mod archive;
mod catalog;
mod effect;
mod msg;
mod playback;
mod state;
mod update;
mod view_model;

pub use archive::{ArchiveStatus, CaseCount, CASE_COUNT_MAX, CASE_COUNT_MIN};
pub use catalog::{seed_from_filename, CatalogEntry, CatalogState};
pub use effect::{Effect, Revision, TimerId};
pub use msg::{Msg, TurnOutcome};
pub use playback::{PlaybackPhase, PlaybackState};
pub use state::AppState;
pub use update::update;
pub use view_model::{AppViewModel, CatalogRowView, PlaybackView};
