// Serializable DTOs for renderers, dashboards and run reports.

use crate::domain::{InhibitionModel, PointSnapshot, WorldSnapshot};
use crate::use_cases::{Aggregates, ProgressRow, RunOutcome, RunReport, StatisticsSnapshot};
use serde::Serialize;

/// Particle positions for one step.
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotDto {
    pub time: u64,
    pub product_count: usize,
    pub enzymes: Vec<PointDto>,
    pub substrates: Vec<PointDto>,
    pub products: Vec<PointDto>,
    pub complexes: Vec<PointDto>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PointDto {
    pub x: f64,
    pub y: f64,
}

impl From<&PointSnapshot> for PointDto {
    fn from(p: &PointSnapshot) -> Self {
        Self { x: p.x, y: p.y }
    }
}

fn points(points: &[PointSnapshot]) -> Vec<PointDto> {
    points.iter().map(PointDto::from).collect()
}

impl From<&WorldSnapshot> for SnapshotDto {
    fn from(snapshot: &WorldSnapshot) -> Self {
        Self {
            time: snapshot.time,
            product_count: snapshot.product_count,
            enzymes: points(&snapshot.enzymes),
            substrates: points(&snapshot.substrates),
            products: points(&snapshot.products),
            complexes: points(&snapshot.complexes),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatisticsDto {
    pub sample_interval: u64,
    pub interval_production: Vec<i64>,
    pub min: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub max: f64,
    pub progress: Vec<ProgressRowDto>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProgressRowDto {
    pub time: u64,
    pub products: usize,
}

impl From<&ProgressRow> for ProgressRowDto {
    fn from(row: &ProgressRow) -> Self {
        Self {
            time: row.time,
            products: row.products,
        }
    }
}

impl From<&StatisticsSnapshot> for StatisticsDto {
    fn from(stats: &StatisticsSnapshot) -> Self {
        let Aggregates {
            min,
            mean,
            std_dev,
            max,
        } = stats.aggregates;
        Self {
            sample_interval: stats.sample_interval,
            interval_production: stats.interval_production.clone(),
            min,
            mean,
            std_dev,
            max,
            progress: stats.progress.iter().map(ProgressRowDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum OutcomeDto {
    Plateaued,
    Exhausted,
    StepLimit,
    Cancelled,
    Failed(String),
}

impl From<&RunOutcome> for OutcomeDto {
    fn from(outcome: &RunOutcome) -> Self {
        match outcome {
            RunOutcome::Plateaued => OutcomeDto::Plateaued,
            RunOutcome::Exhausted => OutcomeDto::Exhausted,
            RunOutcome::StepLimit => OutcomeDto::StepLimit,
            RunOutcome::Cancelled => OutcomeDto::Cancelled,
            RunOutcome::Failed(reason) => OutcomeDto::Failed(reason.clone()),
        }
    }
}

/// Final summary of one run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReportDto {
    pub model: InhibitionModel,
    pub outcome: OutcomeDto,
    pub time: u64,
    pub products: usize,
    pub substrates_left: usize,
    pub statistics: StatisticsDto,
}

impl From<&RunReport> for RunReportDto {
    fn from(report: &RunReport) -> Self {
        Self {
            model: report.model,
            outcome: OutcomeDto::from(&report.outcome),
            time: report.time,
            products: report.products,
            substrates_left: report.substrates_left,
            statistics: StatisticsDto::from(&report.statistics),
        }
    }
}
