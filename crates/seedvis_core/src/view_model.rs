use crate::{PlaybackPhase, PlaybackState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub seed: u64,
    pub case_count: u32,
    pub input: String,
    pub output: String,
    pub archive_running: bool,
    pub archive_progress: f64,
    pub download_label: String,
    pub files: Vec<CatalogRowView>,
    pub selected_file: Option<usize>,
    pub file_selector_enabled: bool,
    pub playback: PlaybackView,
    pub notice: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRowView {
    pub name: String,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaybackView {
    pub phase: PlaybackPhase,
    pub turn: usize,
    pub max_turn: usize,
    pub score: Option<i64>,
    pub error: Option<String>,
    pub frame: Option<String>,
}

impl PlaybackView {
    pub(crate) fn from_state(playback: &PlaybackState) -> Self {
        Self {
            phase: playback.phase(),
            turn: playback.turn(),
            max_turn: playback.max_turn(),
            score: playback.score(),
            error: playback.error().map(ToOwned::to_owned),
            frame: playback.frame().map(ToOwned::to_owned),
        }
    }

    /// Score line shown above the frame; a missing result reads as zero.
    pub fn score_label(&self) -> String {
        format!("Score: {}", self.score.unwrap_or(0))
    }
}
