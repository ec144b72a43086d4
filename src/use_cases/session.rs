// A single simulation run under operator control.

use crate::domain::{
    ConfigError, InhibitionModel, SimError, SimulationConfig, SimulationSettings, SimulationState,
    WorldSnapshot,
};
use crate::use_cases::engine::{self, StepReport};
use crate::use_cases::statistics::{StatisticsSnapshot, statistics};
use crate::use_cases::termination::{RunStatus, TerminationPolicy};
use crate::use_cases::types::ControlSignal;
use rand::Rng;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for `start`.
    Idle,
    Running,
    /// Stopped by the termination policy; holds the terminal status.
    Finished(RunStatus),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub report: StepReport,
    pub status: RunStatus,
}

/// Owns one state, its random source and its stop rule.
///
/// The session is the only mutator of its state. Configuration and control
/// signals are applied between ticks, never during one.
pub struct SimulationSession<R> {
    model: InhibitionModel,
    defaults: SimulationSettings,
    policy: TerminationPolicy,
    state: SimulationState,
    phase: SessionPhase,
    rng: R,
}

impl<R: Rng> SimulationSession<R> {
    pub fn new(
        model: InhibitionModel,
        defaults: SimulationSettings,
        policy: TerminationPolicy,
        mut rng: R,
    ) -> Result<Self, ConfigError> {
        policy.validate()?;
        let state = SimulationState::new(model, &defaults, &mut rng)?;
        Ok(Self {
            model,
            defaults,
            policy,
            state,
            phase: SessionPhase::Idle,
            rng,
        })
    }

    /// Applies configuration; see [`SimulationState::apply_config`].
    pub fn apply_config(&mut self, config: &SimulationConfig) -> Result<bool, ConfigError> {
        let reinitialized = self
            .state
            .apply_config(config, &mut self.rng)
            .inspect_err(|e| warn!(model = %self.model, error = %e, "configuration rejected"))?;
        if reinitialized {
            info!(model = %self.model, "counts changed, particles re-initialized");
        }
        Ok(reinitialized)
    }

    /// Handles one press of a control. Each call acts exactly once.
    pub fn handle(&mut self, signal: ControlSignal) -> Result<(), ConfigError> {
        match signal {
            ControlSignal::Start => {
                self.start();
                Ok(())
            }
            ControlSignal::Clean => self.clean(),
        }
    }

    /// Fresh particles, zeroed time and histories, then stepping begins.
    pub fn start(&mut self) {
        self.state.reset(&mut self.rng);
        self.phase = SessionPhase::Running;
        info!(model = %self.model, "simulation started");
    }

    /// Discards the state and returns to the session defaults.
    pub fn clean(&mut self) -> Result<(), ConfigError> {
        self.state = SimulationState::new(self.model, &self.defaults, &mut self.rng)?;
        self.phase = SessionPhase::Idle;
        info!(model = %self.model, "simulation cleaned");
        Ok(())
    }

    /// Steps once if running, then evaluates the stop rule.
    ///
    /// Returns `None` when the session is not running. A failed step stops the
    /// session.
    pub fn tick(&mut self) -> Result<Option<TickOutcome>, SimError> {
        if self.phase != SessionPhase::Running {
            return Ok(None);
        }

        let report = engine::step(&mut self.state, &mut self.rng).inspect_err(|_| {
            self.phase = SessionPhase::Idle;
        })?;

        let status = self.policy.evaluate(&self.state);
        if status.is_terminal() {
            self.phase = SessionPhase::Finished(status);
            info!(
                model = %self.model,
                ?status,
                time = report.time,
                products = report.products,
                "simulation finished"
            );
        }
        Ok(Some(TickOutcome { report, status }))
    }

    pub fn model(&self) -> InhibitionModel {
        self.model
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        self.state.snapshot()
    }

    pub fn statistics(&self) -> StatisticsSnapshot {
        statistics(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn session(model: InhibitionModel, seed: u64) -> SimulationSession<ChaCha8Rng> {
        SimulationSession::new(
            model,
            SimulationSettings::default(),
            TerminationPolicy::default(),
            ChaCha8Rng::seed_from_u64(seed),
        )
        .expect("default settings are valid")
    }

    #[test]
    fn idle_session_does_not_step() {
        let mut session = session(InhibitionModel::None, 1);
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.tick(), Ok(None));
        assert_eq!(session.state().time(), 0);
    }

    #[test]
    fn start_resets_a_used_state() {
        let mut session = session(InhibitionModel::None, 2);
        session.start();
        for _ in 0..60 {
            session.tick().expect("tick succeeds");
        }
        assert_eq!(session.state().time(), 60);

        session.start();
        assert_eq!(session.phase(), SessionPhase::Running);
        assert_eq!(session.state().time(), 0);
        assert!(session.state().history().time.is_empty());
        assert!(session.state().products().is_empty());
        assert_eq!(session.state().substrates().len(), 100);
    }

    #[test]
    fn clean_returns_to_defaults() {
        let mut session = session(InhibitionModel::Competitive, 3);
        let config = SimulationConfig {
            enzyme_count: 4,
            substrate_count: 20,
            temperature: 45.0,
            inhibitor_concentration: 40,
            ..SimulationConfig::default()
        };
        assert_eq!(session.apply_config(&config), Ok(true));
        session.handle(ControlSignal::Start).expect("start");
        session.tick().expect("tick succeeds");

        session.handle(ControlSignal::Clean).expect("clean");
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.state().time(), 0);
        assert_eq!(session.state().enzymes().len(), 10);
        assert_eq!(session.state().environment().temperature, 37.0);
        assert_eq!(session.state().inhibitor_concentration(), 0.0);
    }

    #[test]
    fn empty_substrate_pool_finishes_as_exhausted() {
        let mut session = session(InhibitionModel::None, 4);
        let config = SimulationConfig {
            substrate_count: 0,
            ..SimulationConfig::default()
        };
        session.apply_config(&config).expect("valid config");
        session.start();

        let outcome = session
            .tick()
            .expect("tick succeeds")
            .expect("session is running");
        assert_eq!(outcome.status, RunStatus::Exhausted);
        assert_eq!(session.phase(), SessionPhase::Finished(RunStatus::Exhausted));
        assert_eq!(session.tick(), Ok(None));
    }

    #[test]
    fn enzyme_free_run_plateaus_after_three_samples() {
        let mut session = session(InhibitionModel::None, 5);
        let config = SimulationConfig {
            enzyme_count: 0,
            ..SimulationConfig::default()
        };
        session.apply_config(&config).expect("valid config");
        session.start();

        let mut last = None;
        while let Some(outcome) = session.tick().expect("tick succeeds") {
            last = Some(outcome);
        }
        let last = last.expect("at least one step");
        assert_eq!(last.status, RunStatus::Plateaued);
        // Default sampling every 50 steps, three samples needed.
        assert_eq!(last.report.time, 150);
    }

    #[test]
    fn zero_length_plateau_window_is_rejected_up_front() {
        let result = SimulationSession::new(
            InhibitionModel::None,
            SimulationSettings::default(),
            TerminationPolicy {
                plateau_intervals: 0,
                plateau_threshold: 1,
            },
            ChaCha8Rng::seed_from_u64(7),
        );
        assert!(matches!(result, Err(ConfigError::InvalidPlateauWindow(0))));
    }

    #[test]
    fn rejected_config_keeps_the_session_usable() {
        let mut session = session(InhibitionModel::None, 6);
        let config = SimulationConfig {
            ph: -1.0,
            ..SimulationConfig::default()
        };
        assert_eq!(
            session.apply_config(&config),
            Err(ConfigError::PhOutOfRange(-1.0))
        );
        session.start();
        assert!(session.tick().expect("tick succeeds").is_some());
    }
}
