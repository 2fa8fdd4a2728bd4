use std::sync::Arc;

use crate::CaseCount;

/// Identifies one load of an input/output pair; engine answers for an older
/// revision are discarded.
pub type Revision = u64;

/// Identifies one started playback timer; ticks from cancelled timers are discarded.
pub type TimerId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    GenerateInput {
        seed: u64,
    },
    BuildArchive {
        seed: u64,
        case_count: CaseCount,
    },
    LoadOutputFile {
        index: usize,
        name: String,
    },
    ComputeMaxTurn {
        revision: Revision,
        input: Arc<str>,
        output: Arc<str>,
    },
    Visualize {
        revision: Revision,
        turn: usize,
        input: Arc<str>,
        output: Arc<str>,
    },
    StartTimer {
        timer_id: TimerId,
    },
    CancelTimer {
        timer_id: TimerId,
    },
}
