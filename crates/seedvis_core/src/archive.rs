pub const CASE_COUNT_MIN: u32 = 1;
pub const CASE_COUNT_MAX: u32 = 10_000;

/// Number of cases in one batch download, always within
/// `CASE_COUNT_MIN..=CASE_COUNT_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CaseCount(u32);

impl CaseCount {
    pub fn new(value: u32) -> Option<Self> {
        (CASE_COUNT_MIN..=CASE_COUNT_MAX)
            .contains(&value)
            .then_some(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for CaseCount {
    fn default() -> Self {
        Self(100)
    }
}

/// Progress of the batch archive run.
///
/// Progress only moves forward while a run is active and drops back to zero
/// when the run ends, whatever the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArchiveStatus {
    running: bool,
    progress: f64,
}

impl ArchiveStatus {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Returns false when a run is already in flight.
    pub(crate) fn begin(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.progress = 0.0;
        true
    }

    /// Returns true when the visible progress changed.
    pub(crate) fn advance(&mut self, percent: f64) -> bool {
        if !self.running || percent.is_nan() {
            return false;
        }
        let percent = percent.clamp(0.0, 100.0);
        if percent > self.progress {
            self.progress = percent;
            true
        } else {
            false
        }
    }

    pub(crate) fn finish(&mut self) -> bool {
        let was_running = self.running;
        self.running = false;
        self.progress = 0.0;
        was_running
    }

    pub fn button_label(&self) -> String {
        if self.progress > 0.0 {
            format!("{:.0}% downloaded", self.progress)
        } else {
            "Download".to_string()
        }
    }
}
