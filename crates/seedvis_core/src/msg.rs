use crate::{Revision, TimerId};

/// Score, error and frame the engine produced for one turn.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TurnOutcome {
    pub score: i64,
    /// Empty when the turn is valid.
    pub error: String,
    /// Visual markup (SVG) for the turn.
    pub frame: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the seed field.
    SeedChanged(u64),
    /// User edited the #cases field.
    CaseCountChanged(u32),
    /// User edited the input text area directly.
    InputEdited(String),
    /// User pasted or typed into the output text area.
    OutputEdited(String),
    /// Engine finished generating the input for `seed`.
    InputGenerated {
        seed: u64,
        result: Result<String, String>,
    },
    /// User clicked Download.
    DownloadClicked,
    /// Archive packaging progress, in percent.
    ArchiveProgress(f64),
    /// Archive run ended; `Ok` carries the delivered filename.
    ArchiveFinished(Result<String, String>),
    /// A directory selection produced this (unordered) set of file names.
    OutputFilesIngested(Vec<String>),
    /// User picked an entry of the file selector.
    OutputFileSelected(usize),
    /// Content of a catalog entry finished loading.
    OutputFileLoaded {
        index: usize,
        result: Result<String, String>,
    },
    /// Engine answered a max-turn request.
    MaxTurnComputed {
        revision: Revision,
        result: Result<usize, String>,
    },
    /// Engine answered a visualization request.
    FrameRendered {
        revision: Revision,
        turn: usize,
        result: Result<TurnOutcome, String>,
    },
    /// User clicked Play.
    PlayClicked,
    /// User clicked Pause.
    PauseClicked,
    /// User moved the turn slider.
    TurnChanged(usize),
    StepForward,
    StepBackward,
    /// Periodic advance from the playback timer.
    PlaybackTick { timer_id: TimerId },
}
