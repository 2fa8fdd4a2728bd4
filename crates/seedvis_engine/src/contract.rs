use crate::{EngineFault, VisOutcome};

/// Problem-specific generator and visualizer.
///
/// Implementations are pure: the same arguments always give the same answer.
/// `init` runs once before any other call and must tolerate being repeated.
pub trait GenerationEngine: Send + Sync {
    fn init(&self) -> Result<(), EngineFault>;

    /// Input text for `seed`.
    fn gen(&self, seed: u64) -> Result<String, EngineFault>;

    /// Number of turns the output describes for this input.
    fn max_turn(&self, input: &str, output: &str) -> Result<usize, EngineFault>;

    /// Score, error and frame after applying the first `turn` turns.
    fn vis(&self, input: &str, output: &str, turn: usize) -> Result<VisOutcome, EngineFault>;
}
