// Use-case level inputs/outputs for driving simulation runs.

use crate::domain::InhibitionModel;
use crate::use_cases::statistics::StatisticsSnapshot;

/// Edge-triggered operator controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSignal {
    Start,
    Clean,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Plateaued,
    Exhausted,
    /// The configured step limit was reached first.
    StepLimit,
    /// Shutdown was requested before the run finished.
    Cancelled,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub model: InhibitionModel,
    pub outcome: RunOutcome,
    pub time: u64,
    pub products: usize,
    pub substrates_left: usize,
    pub statistics: StatisticsSnapshot,
}
