mod support;

use enzyme_sim::domain::{InhibitionModel, SimulationConfig, SimulationSettings};
use enzyme_sim::frameworks::config::{AppConfig, RunConfig};
use enzyme_sim::use_cases::{RunOutcome, RunSettings, simulation_task};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, watch};

fn fast(max_steps: u64) -> RunSettings {
    RunSettings {
        tick_interval: Duration::ZERO,
        max_steps,
    }
}

#[tokio::test]
async fn run_stops_on_its_own_and_reports_statistics() {
    let session = support::session(InhibitionModel::None, support::dense_settings(), 11);
    let (snapshot_tx, mut snapshot_rx) = watch::channel(session.snapshot());

    let report = simulation_task(session, fast(0), snapshot_tx, Arc::new(Notify::new())).await;

    assert!(matches!(
        report.outcome,
        RunOutcome::Plateaued | RunOutcome::Exhausted
    ));
    assert!(report.time > 0);
    assert_eq!(report.statistics.sample_interval, 10);
    assert!(report.products + report.substrates_left <= 150);

    // The last published snapshot matches the final state.
    let latest = snapshot_rx.borrow_and_update().clone();
    assert_eq!(latest.time, report.time);
    assert_eq!(latest.product_count, report.products);
}

#[tokio::test]
async fn step_limit_ends_a_run_early() {
    let session = support::session(InhibitionModel::None, support::dense_settings(), 12);
    let (snapshot_tx, _snapshot_rx) = watch::channel(session.snapshot());

    let report = simulation_task(session, fast(5), snapshot_tx, Arc::new(Notify::new())).await;

    assert_eq!(report.outcome, RunOutcome::StepLimit);
    assert_eq!(report.time, 5);
}

#[tokio::test]
async fn pending_shutdown_cancels_before_the_first_step() {
    let session = support::session(InhibitionModel::None, support::dense_settings(), 13);
    let (snapshot_tx, _snapshot_rx) = watch::channel(session.snapshot());
    let shutdown = Arc::new(Notify::new());
    shutdown.notify_one();

    let settings = RunSettings {
        tick_interval: Duration::from_millis(20),
        max_steps: 0,
    };
    let report = simulation_task(session, settings, snapshot_tx, shutdown).await;

    assert_eq!(report.outcome, RunOutcome::Cancelled);
    assert_eq!(report.time, 0);
}

#[tokio::test]
async fn exhausted_run_reports_after_one_step() {
    let settings = SimulationSettings {
        config: SimulationConfig {
            substrate_count: 0,
            ..SimulationConfig::default()
        },
        ..SimulationSettings::default()
    };
    let session = support::session(InhibitionModel::Competitive, settings, 14);
    let (snapshot_tx, _snapshot_rx) = watch::channel(session.snapshot());

    let report = simulation_task(session, fast(0), snapshot_tx, Arc::new(Notify::new())).await;

    assert_eq!(report.outcome, RunOutcome::Exhausted);
    assert_eq!(report.time, 1);
    assert_eq!(report.products, 0);
}

#[tokio::test]
async fn app_runs_every_configured_model_independently() {
    let config = AppConfig {
        simulation: support::dense_settings(),
        run: RunConfig {
            models: InhibitionModel::ALL.to_vec(),
            seed: Some(2024),
            tick_interval_ms: 0,
            max_steps: 2_000,
        },
        ..AppConfig::default()
    };

    let reports = enzyme_sim::run(config.clone())
        .await
        .expect("valid configuration");
    assert_eq!(reports.len(), 3);
    let models: Vec<_> = reports.iter().map(|r| r.model).collect();
    assert_eq!(models, InhibitionModel::ALL.to_vec());

    // Same base seed, same reports.
    let again = enzyme_sim::run(config).await.expect("valid configuration");
    assert_eq!(reports, again);
}
