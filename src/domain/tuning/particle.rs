/// Per-species tuning for free particles.
///
/// Keep this separate from runtime configuration (tick rates, seeds, etc.).
use crate::domain::particle::ParticleKind;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleTuning {
    /// Collision radius in arena units.
    pub radius: f64,

    /// Base magnitude of the per-step random displacement.
    pub speed: f64,
}

impl ParticleTuning {
    pub const fn for_kind(kind: ParticleKind) -> Self {
        match kind {
            ParticleKind::Enzyme => Self {
                radius: 4.0,
                speed: 2.0,
            },
            ParticleKind::Substrate => Self {
                radius: 2.0,
                speed: 4.0,
            },
            ParticleKind::Product => Self {
                radius: 6.0,
                speed: 6.0,
            },
        }
    }
}

/// Display radius of an enzyme-substrate complex. Not used for collisions.
pub const COMPLEX_RADIUS: f64 = 9.0;
