use thiserror::Error;

use crate::download::DownloadError;

/// Result of visualizing one turn.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisOutcome {
    pub score: i64,
    /// Empty when the turn is valid.
    pub err: String,
    /// SVG markup for the turn.
    pub svg: String,
}

/// Failure reported by the engine itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EngineFault {
    pub message: String,
}

impl EngineFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
#[error("engine failed to initialize: {0}")]
pub struct EngineInitError(#[from] pub EngineFault);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("generation failed for seed {seed}: {fault}")]
pub struct GenerationError {
    pub seed: u64,
    pub fault: EngineFault,
}

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("download failed: {0}")]
    Delivery(#[from] DownloadError),
}
