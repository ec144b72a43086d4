// Use cases layer: stepping, stop rules and run orchestration.

pub mod engine;
pub mod run;
pub mod session;
pub mod statistics;
pub mod termination;
pub mod types;

pub use engine::{StepReport, step};
pub use run::{RunSettings, simulation_task};
pub use session::{SessionPhase, SimulationSession, TickOutcome};
pub use statistics::{Aggregates, ProgressRow, StatisticsSnapshot, statistics};
pub use termination::{RunStatus, TerminationPolicy};
pub use types::{ControlSignal, RunOutcome, RunReport};
