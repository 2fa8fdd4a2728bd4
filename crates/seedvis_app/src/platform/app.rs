use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc};

use engine_logging::{engine_debug, engine_info, set_playback_turn};
use seedvis_core::{update, AppState, AppViewModel, Msg, PlaybackPhase};
use seedvis_engine::{
    CatalogError, DirectoryDownloadSink, DownloadSink, EngineHandle, EngineInitError,
    GenerationEngine, OutputFileStore,
};

use super::effects::EffectRunner;
use super::logging;
use super::settings::{load_settings, Settings};
use super::timer::{ThreadTicker, Ticker};

/// Loads settings, sets up logging and starts a runtime for `engine`.
pub fn launch(
    settings_path: &Path,
    engine: Arc<dyn GenerationEngine>,
) -> Result<Runtime, EngineInitError> {
    let settings = load_settings(settings_path);
    logging::initialize(&settings);
    Runtime::start(engine, &settings)
}

/// Single-threaded orchestrator.
///
/// All messages go through [`Runtime::send`] or [`Runtime::pump`] on the
/// owning thread. Messages produced by an effect are dispatched before
/// anything queued after it. Timer ticks and archive progress arrive in the
/// inbox from other threads and are dispatched one pump at a time.
pub struct Runtime {
    state: AppState,
    runner: EffectRunner,
    queue: VecDeque<Msg>,
    inbox: mpsc::Receiver<Msg>,
}

impl Runtime {
    /// Initializes the engine once and generates the input for seed 0.
    /// Fails if the engine never becomes ready.
    pub fn start(
        engine: Arc<dyn GenerationEngine>,
        settings: &Settings,
    ) -> Result<Self, EngineInitError> {
        let engine = EngineHandle::initialize(engine)?;
        let sink = DirectoryDownloadSink::new(settings.download_dir.clone());
        let mut runtime = Self::with_parts(
            engine,
            Box::new(sink),
            Box::new(ThreadTicker::new()),
            settings,
        );
        let seed = runtime.state.seed();
        runtime.send(Msg::SeedChanged(seed));
        Ok(runtime)
    }

    /// Builds a runtime around explicit collaborators; nothing is dispatched.
    pub fn with_parts(
        engine: EngineHandle,
        sink: Box<dyn DownloadSink>,
        ticker: Box<dyn Ticker>,
        settings: &Settings,
    ) -> Self {
        let (msg_tx, inbox) = mpsc::channel();
        let runner = EffectRunner::new(engine, sink, ticker, msg_tx, settings.playback_interval());
        engine_info!(
            "Runtime ready (interval {:?}, download dir {:?})",
            settings.playback_interval(),
            settings.download_dir
        );
        Self {
            state: AppState::with_case_count(settings.case_count()),
            runner,
            queue: VecDeque::new(),
            inbox,
        }
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatches `msg` and everything it causes. Returns the new view when
    /// anything visible changed.
    pub fn send(&mut self, msg: Msg) -> Option<AppViewModel> {
        self.queue.push_back(msg);
        self.drain()
    }

    /// Dispatches inbox messages that arrived since the last call.
    pub fn pump(&mut self) -> Option<AppViewModel> {
        while let Ok(msg) = self.inbox.try_recv() {
            self.queue.push_back(msg);
        }
        self.drain()
    }

    /// Blocks until one inbox message arrives (or `timeout` passes) and
    /// dispatches it. Every archive progress step therefore gets its own view.
    pub fn pump_blocking(&mut self, timeout: std::time::Duration) -> Option<AppViewModel> {
        match self.inbox.recv_timeout(timeout) {
            Ok(msg) => self.send(msg),
            Err(_) => None,
        }
    }

    /// Replaces the catalog with every file below `dir`.
    pub fn select_directory(&mut self, dir: &Path) -> Result<Option<AppViewModel>, CatalogError> {
        let store = OutputFileStore::from_dir(dir)?;
        Ok(self.install_store(store))
    }

    /// Replaces the catalog with an explicit file set.
    pub fn select_files(&mut self, paths: Vec<PathBuf>) -> Option<AppViewModel> {
        self.install_store(OutputFileStore::from_paths(paths))
    }

    fn install_store(&mut self, store: OutputFileStore) -> Option<AppViewModel> {
        let names = store.names();
        self.runner.replace_store(store);
        self.send(Msg::OutputFilesIngested(names))
    }

    fn drain(&mut self) -> Option<AppViewModel> {
        let mut dirty = false;
        while let Some(msg) = self.queue.pop_front() {
            engine_debug!("dispatch {}", msg_label(&msg));
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;

            let mut replies = Vec::new();
            for effect in effects {
                replies.extend(self.runner.run(effect));
            }
            for reply in replies.into_iter().rev() {
                self.queue.push_front(reply);
            }
            dirty |= self.state.consume_dirty();
        }

        let playback = self.state.playback();
        set_playback_turn((playback.phase() != PlaybackPhase::Idle).then(|| playback.turn()));
        dirty.then(|| self.state.view())
    }
}

/// Short name for logs; message payloads can hold whole input files.
fn msg_label(msg: &Msg) -> &'static str {
    match msg {
        Msg::SeedChanged(_) => "SeedChanged",
        Msg::CaseCountChanged(_) => "CaseCountChanged",
        Msg::InputEdited(_) => "InputEdited",
        Msg::OutputEdited(_) => "OutputEdited",
        Msg::InputGenerated { .. } => "InputGenerated",
        Msg::DownloadClicked => "DownloadClicked",
        Msg::ArchiveProgress(_) => "ArchiveProgress",
        Msg::ArchiveFinished(_) => "ArchiveFinished",
        Msg::OutputFilesIngested(_) => "OutputFilesIngested",
        Msg::OutputFileSelected(_) => "OutputFileSelected",
        Msg::OutputFileLoaded { .. } => "OutputFileLoaded",
        Msg::MaxTurnComputed { .. } => "MaxTurnComputed",
        Msg::FrameRendered { .. } => "FrameRendered",
        Msg::PlayClicked => "PlayClicked",
        Msg::PauseClicked => "PauseClicked",
        Msg::TurnChanged(_) => "TurnChanged",
        Msg::StepForward => "StepForward",
        Msg::StepBackward => "StepBackward",
        Msg::PlaybackTick { .. } => "PlaybackTick",
    }
}
