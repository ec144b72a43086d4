// Domain-level particles, complexes and their snapshot types.

use crate::domain::tuning::particle::{COMPLEX_RADIUS, ParticleTuning};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleKind {
    Enzyme,
    Substrate,
    Product,
}

/// Rectangular arena; positions live in `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

impl Arena {
    pub fn clamp(&self, x: f64, y: f64) -> (f64, f64) {
        (x.clamp(0.0, self.width), y.clamp(0.0, self.height))
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

/// Anything with a centre and a collision radius.
pub trait Body {
    fn position(&self) -> (f64, f64);
    fn radius(&self) -> f64;
}

/// A free-moving circular agent. Radius and speed follow from its kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub kind: ParticleKind,
    pub x: f64,
    pub y: f64,
}

impl Particle {
    pub fn new(kind: ParticleKind, x: f64, y: f64) -> Self {
        Self { kind, x, y }
    }

    pub fn substrate(x: f64, y: f64) -> Self {
        Self::new(ParticleKind::Substrate, x, y)
    }

    pub fn product(x: f64, y: f64) -> Self {
        Self::new(ParticleKind::Product, x, y)
    }

    pub fn speed(&self) -> f64 {
        ParticleTuning::for_kind(self.kind).speed
    }
}

impl Body for Particle {
    fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    fn radius(&self) -> f64 {
        ParticleTuning::for_kind(self.kind).radius
    }
}

/// Kinetic parameters handed to every enzyme at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnzymeParams {
    pub km: f64,
    pub optimal_temperature: f64,
    pub optimal_ph: f64,
}

impl Default for EnzymeParams {
    fn default() -> Self {
        Self {
            km: 0.5,
            optimal_temperature: 37.0,
            optimal_ph: 7.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enzyme {
    pub body: Particle,
    pub km: f64,
    pub optimal_temperature: f64,
    pub optimal_ph: f64,

    // True while exactly one complex holds this enzyme.
    pub bound: bool,
}

impl Enzyme {
    pub fn new(x: f64, y: f64, params: EnzymeParams) -> Self {
        Self {
            body: Particle::new(ParticleKind::Enzyme, x, y),
            km: params.km,
            optimal_temperature: params.optimal_temperature,
            optimal_ph: params.optimal_ph,
            bound: false,
        }
    }
}

impl Body for Enzyme {
    fn position(&self) -> (f64, f64) {
        self.body.position()
    }

    fn radius(&self) -> f64 {
        self.body.radius()
    }
}

/// Enzyme-substrate complex.
///
/// Holds the index of its enzyme in the owning state's enzyme collection. The
/// collection is only rebuilt by initialization, which also drops every
/// complex, so the index stays valid for the complex's whole life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complex {
    pub enzyme: usize,
}

impl Complex {
    pub fn new(enzyme: usize) -> Self {
        Self { enzyme }
    }

    pub fn radius(&self) -> f64 {
        COMPLEX_RADIUS
    }

    /// Current position, borrowed from the enzyme it occupies.
    pub fn position(&self, enzymes: &[Enzyme]) -> Option<(f64, f64)> {
        enzymes.get(self.enzyme).map(Body::position)
    }
}

/// Renderer-facing position of a single agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSnapshot {
    pub x: f64,
    pub y: f64,
}

impl From<&Particle> for PointSnapshot {
    fn from(p: &Particle) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<&Enzyme> for PointSnapshot {
    fn from(e: &Enzyme) -> Self {
        Self::from(&e.body)
    }
}
