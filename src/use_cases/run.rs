// Fixed-interval driver that steps one session until it stops.

use crate::domain::WorldSnapshot;
use crate::use_cases::session::SimulationSession;
use crate::use_cases::termination::RunStatus;
use crate::use_cases::types::{RunOutcome, RunReport};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, watch};
use tokio::time::MissedTickBehavior;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    /// Wall-clock time between steps; zero steps as fast as possible.
    pub tick_interval: Duration,
    /// Hard cap on steps; zero disables the cap.
    pub max_steps: u64,
}

/// Starts `session` and ticks it until the stop rule, the step cap or
/// `shutdown` ends the run.
///
/// Every step publishes a snapshot on `snapshot_tx`. Cancellation only takes
/// effect between steps.
pub async fn simulation_task<R: Rng>(
    mut session: SimulationSession<R>,
    settings: RunSettings,
    snapshot_tx: watch::Sender<WorldSnapshot>,
    shutdown: Arc<Notify>,
) -> RunReport {
    session.start();
    let _ = snapshot_tx.send(session.snapshot());

    let mut interval = (!settings.tick_interval.is_zero()).then(|| {
        let mut interval = tokio::time::interval(settings.tick_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval
    });

    let outcome = loop {
        let tick = async {
            match interval.as_mut() {
                Some(interval) => {
                    interval.tick().await;
                }
                None => tokio::task::yield_now().await,
            }
        };
        let cancelled = tokio::select! {
            biased;
            _ = shutdown.notified() => true,
            _ = tick => false,
        };
        if cancelled {
            break RunOutcome::Cancelled;
        }

        match session.tick() {
            Ok(Some(stepped)) => {
                let _ = snapshot_tx.send(session.snapshot());
                match stepped.status {
                    RunStatus::Plateaued => break RunOutcome::Plateaued,
                    RunStatus::Exhausted => break RunOutcome::Exhausted,
                    RunStatus::Running => {}
                }
                if settings.max_steps != 0 && stepped.report.time >= settings.max_steps {
                    break RunOutcome::StepLimit;
                }
            }
            // Not expected after start(); treat it as a stop.
            Ok(None) => break RunOutcome::Cancelled,
            Err(e) => {
                error!(model = %session.model(), error = %e, "run failed");
                break RunOutcome::Failed(e.to_string());
            }
        }
    };

    let state = session.state();
    info!(
        model = %session.model(),
        ?outcome,
        time = state.time(),
        products = state.products().len(),
        "run finished"
    );

    RunReport {
        model: session.model(),
        outcome,
        time: state.time(),
        products: state.products().len(),
        substrates_left: state.substrates().len(),
        statistics: session.statistics(),
    }
}
