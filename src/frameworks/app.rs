// Framework bootstrap: logging, configuration and one task per run.

use crate::domain::{ConfigError, InhibitionModel, WorldSnapshot};
use crate::frameworks::config::{AppConfig, AppConfigError, LogFormat, log_format};
use crate::interface_adapters::protocol::RunReportDto;
use crate::interface_adapters::utils::rng::{fresh_seed, seeded_rng};
use crate::use_cases::{RunReport, SimulationSession, simulation_task};
use std::{fmt, sync::Arc};
use tokio::sync::{Notify, watch};
use tracing::{debug, error, info};

// Reports go to stdout, so every log line goes to stderr.
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().with_current_span(true).init(),
        LogFormat::Compact => builder.compact().init(),
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        let thread = std::thread::current().name().unwrap_or("unnamed").to_owned();
        tracing::error!(%info, thread = %thread, ?backtrace, "simulation panicked");
    }));
}

#[derive(Debug)]
pub enum AppError {
    Config(AppConfigError),
    Session(ConfigError),
    Output(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "{err}"),
            AppError::Session(err) => write!(f, "cannot build simulation: {err}"),
            AppError::Output(err) => write!(f, "cannot encode report: {err}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<AppConfigError> for AppError {
    fn from(err: AppConfigError) -> Self {
        AppError::Config(err)
    }
}

/// Loads configuration from the environment, runs every configured model and
/// prints the reports as JSON on stdout.
pub async fn run_with_config() -> Result<(), AppError> {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();
    init_tracing(log_format());

    let config = AppConfig::load().inspect_err(|e| {
        error!(error = %e, "failed to load configuration");
    })?;

    let reports = run(config).await.inspect_err(|e| {
        error!(error = %e, "run setup failed");
    })?;

    let dtos: Vec<RunReportDto> = reports.iter().map(RunReportDto::from).collect();
    let json = serde_json::to_string_pretty(&dtos)
        .map_err(AppError::Output)
        .inspect_err(|e| error!(error = %e, "failed to encode reports"))?;
    println!("{json}");
    Ok(())
}

/// Runs each configured model in its own task and waits for all of them.
///
/// Ctrl-C cancels every run between steps; cancelled runs still report.
pub async fn run(config: AppConfig) -> Result<Vec<RunReport>, AppError> {
    let run_settings = config.run.settings();
    let mut handles = Vec::with_capacity(config.run.models.len());
    let mut stops = Vec::with_capacity(config.run.models.len());

    for (i, model) in config.run.models.iter().copied().enumerate() {
        let seed = config
            .run
            .seed
            .map(|base| base.wrapping_add(i as u64))
            .unwrap_or_else(fresh_seed);

        let session = SimulationSession::new(
            model,
            config.simulation.clone(),
            config.termination,
            seeded_rng(seed),
        )
        .map_err(AppError::Session)?;

        let (snapshot_tx, snapshot_rx) = watch::channel(session.snapshot());
        tokio::spawn(log_progress(
            model,
            snapshot_rx,
            config.simulation.layout.sample_interval,
        ));

        // Per-run notifier so a stop request is never missed between polls.
        let stop = Arc::new(Notify::new());
        stops.push(stop.clone());

        info!(%model, seed, "run spawned");
        handles.push(tokio::spawn(simulation_task(
            session,
            run_settings,
            snapshot_tx,
            stop,
        )));
    }

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("stop requested");
            for stop in &stops {
                stop.notify_one();
            }
        }
    });

    let mut reports = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok(report) => reports.push(report),
            Err(e) => error!(error = %e, "run task panicked"),
        }
    }
    Ok(reports)
}

// Stands in for a renderer: follows the snapshot stream and logs each sampling window.
async fn log_progress(
    model: InhibitionModel,
    mut snapshot_rx: watch::Receiver<WorldSnapshot>,
    sample_interval: u64,
) {
    while snapshot_rx.changed().await.is_ok() {
        let (time, products) = {
            let snapshot = snapshot_rx.borrow_and_update();
            (snapshot.time, snapshot.product_count)
        };
        if time > 0 && time % sample_interval.max(1) == 0 {
            debug!(%model, time, products, "progress");
        }
    }
}
