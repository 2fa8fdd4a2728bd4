use std::sync::Arc;

use crate::view_model::{AppViewModel, CatalogRowView, PlaybackView};
use crate::{ArchiveStatus, CaseCount, CatalogState, Effect, PlaybackState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    seed: u64,
    case_count: CaseCount,
    input: Arc<str>,
    output: Arc<str>,
    /// Set while a catalog selection changed the seed and the matching input
    /// has not been generated yet.
    awaiting_input: bool,
    archive: ArchiveStatus,
    catalog: CatalogState,
    playback: PlaybackState,
    notice: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_case_count(case_count: CaseCount) -> Self {
        Self {
            case_count,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            seed: self.seed,
            case_count: self.case_count.get(),
            input: self.input.to_string(),
            output: self.output.to_string(),
            archive_running: self.archive.is_running(),
            archive_progress: self.archive.progress(),
            download_label: self.archive.button_label(),
            files: self
                .catalog
                .entries()
                .iter()
                .map(|entry| CatalogRowView {
                    name: entry.name.clone(),
                    seed: entry.seed,
                })
                .collect(),
            selected_file: self.catalog.selected(),
            file_selector_enabled: self.catalog.selection_enabled(),
            playback: PlaybackView::from_state(&self.playback),
            notice: self.notice.clone(),
            dirty: self.dirty,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn case_count(&self) -> CaseCount {
        self.case_count
    }

    pub fn archive(&self) -> &ArchiveStatus {
        &self.archive
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    /// Returns and clears the dirty flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
        self.mark_dirty();
    }

    pub(crate) fn set_seed(&mut self, seed: u64) -> Effect {
        self.seed = seed;
        self.mark_dirty();
        Effect::GenerateInput { seed }
    }

    pub(crate) fn set_case_count(&mut self, case_count: CaseCount) {
        self.case_count = case_count;
        self.mark_dirty();
    }

    pub(crate) fn awaiting_input(&self) -> bool {
        self.awaiting_input
    }

    pub(crate) fn set_awaiting_input(&mut self, awaiting: bool) {
        self.awaiting_input = awaiting;
    }

    pub(crate) fn set_input(&mut self, input: String) {
        self.input = Arc::from(input);
        self.mark_dirty();
    }

    pub(crate) fn set_output(&mut self, output: String) {
        self.output = Arc::from(output);
        self.mark_dirty();
    }

    /// Feeds the current input/output pair into the playback controller.
    pub(crate) fn reload_playback(&mut self) -> Vec<Effect> {
        self.mark_dirty();
        self.playback.load(self.input.clone(), self.output.clone())
    }

    pub(crate) fn archive_mut(&mut self) -> &mut ArchiveStatus {
        &mut self.archive
    }

    pub(crate) fn catalog_mut(&mut self) -> &mut CatalogState {
        &mut self.catalog
    }

    pub(crate) fn playback_mut(&mut self) -> &mut PlaybackState {
        &mut self.playback
    }
}
