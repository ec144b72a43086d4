// Domain layer: core simulation types and rules.

pub mod errors;
pub mod inhibition;
pub mod kinetics;
pub mod particle;
pub mod settings;
pub mod state;
pub mod systems;
pub mod tuning;

pub use errors::{ConfigError, SimError};
pub use inhibition::InhibitionModel;
pub use kinetics::Environment;
pub use particle::{Arena, Complex, Enzyme, EnzymeParams, Particle, ParticleKind, PointSnapshot};
pub use settings::{Layout, SimulationConfig, SimulationSettings};
pub use state::{History, SimulationState, WorldSnapshot};
