// Stop rule evaluated by the caller after each step.

use crate::domain::errors::ConfigError;
use crate::domain::state::SimulationState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Running,
    /// Product formation stalled over the last few sampling windows.
    Plateaued,
    /// No free substrate is left.
    Exhausted,
}

impl RunStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, RunStatus::Running)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminationPolicy {
    /// Number of consecutive sampled deltas that must stay low.
    pub plateau_intervals: usize,
    /// Largest per-window product gain still counted as stalled.
    pub plateau_threshold: usize,
}

impl Default for TerminationPolicy {
    fn default() -> Self {
        Self {
            plateau_intervals: 2,
            plateau_threshold: 1,
        }
    }
}

impl TerminationPolicy {
    /// Rejects windows that are empty or too long to index.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.plateau_intervals == 0 || self.plateau_intervals == usize::MAX {
            return Err(ConfigError::InvalidPlateauWindow(self.plateau_intervals));
        }
        Ok(())
    }

    /// Exhaustion wins when both conditions hold.
    pub fn evaluate(&self, state: &SimulationState) -> RunStatus {
        if state.substrates().is_empty() {
            RunStatus::Exhausted
        } else if self.is_plateau(&state.history().sampled_products) {
            RunStatus::Plateaued
        } else {
            RunStatus::Running
        }
    }

    pub fn is_plateau(&self, sampled: &[usize]) -> bool {
        // An unvalidated zero or overflowing window never reports a plateau.
        let Some(window) = self.plateau_intervals.checked_add(1) else {
            return false;
        };
        if self.plateau_intervals == 0 || sampled.len() < window {
            return false;
        }
        sampled[sampled.len() - window..]
            .windows(2)
            .all(|pair| pair[1].saturating_sub(pair[0]) <= self.plateau_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_history_is_a_plateau() {
        let policy = TerminationPolicy::default();
        assert!(policy.is_plateau(&[0, 0, 0]));
    }

    #[test]
    fn too_few_samples_never_plateau() {
        let policy = TerminationPolicy::default();
        assert!(!policy.is_plateau(&[]));
        assert!(!policy.is_plateau(&[5, 5]));
    }

    #[test]
    fn only_the_trailing_window_counts() {
        let policy = TerminationPolicy::default();
        assert!(policy.is_plateau(&[0, 40, 80, 81, 82]));
        assert!(!policy.is_plateau(&[0, 40, 80, 81, 83]));
        assert!(!policy.is_plateau(&[80, 81, 90]));
    }

    #[test]
    fn threshold_is_inclusive() {
        let policy = TerminationPolicy {
            plateau_intervals: 3,
            plateau_threshold: 2,
        };
        assert!(policy.is_plateau(&[10, 12, 14, 16]));
        assert!(!policy.is_plateau(&[10, 12, 15, 16]));
    }

    #[test]
    fn degenerate_windows_are_rejected() {
        assert!(TerminationPolicy::default().validate().is_ok());

        for plateau_intervals in [0, usize::MAX] {
            let policy = TerminationPolicy {
                plateau_intervals,
                plateau_threshold: 1,
            };
            assert_eq!(
                policy.validate(),
                Err(ConfigError::InvalidPlateauWindow(plateau_intervals))
            );
        }
    }

    #[test]
    fn degenerate_windows_never_plateau() {
        let huge = TerminationPolicy {
            plateau_intervals: usize::MAX,
            plateau_threshold: 1,
        };
        assert!(!huge.is_plateau(&[0, 0, 0]));

        let empty = TerminationPolicy {
            plateau_intervals: 0,
            plateau_threshold: 1,
        };
        assert!(!empty.is_plateau(&[0, 50]));
    }

    #[test]
    fn only_running_is_not_terminal() {
        assert!(!RunStatus::Running.is_terminal());
        assert!(RunStatus::Plateaued.is_terminal());
        assert!(RunStatus::Exhausted.is_terminal());
    }
}
