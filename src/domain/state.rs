// Simulation state: environment, live particles, complexes and histories.

use crate::domain::errors::{ConfigError, SimError};
use crate::domain::inhibition::InhibitionModel;
use crate::domain::kinetics::Environment;
use crate::domain::particle::{Arena, Complex, Enzyme, EnzymeParams, Particle, PointSnapshot};
use crate::domain::settings::{Layout, SimulationConfig, SimulationSettings, ValidConfig};
use rand::Rng;
use tracing::info;

/// Full and sampled time series recorded by the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    pub time: Vec<u64>,
    pub products: Vec<usize>,
    /// Products formed in each individual step.
    pub rate: Vec<usize>,
    pub sampled_time: Vec<u64>,
    pub sampled_products: Vec<usize>,
}

impl History {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Per-step view for renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldSnapshot {
    pub time: u64,
    pub product_count: usize,
    pub enzymes: Vec<PointSnapshot>,
    pub substrates: Vec<PointSnapshot>,
    pub products: Vec<PointSnapshot>,
    pub complexes: Vec<PointSnapshot>,
}

pub struct SimulationState {
    model: InhibitionModel,
    environment: Environment,
    enzyme_params: EnzymeParams,
    enzyme_count: usize,
    substrate_count: usize,
    inhibitor_concentration: u32,
    layout: Layout,
    arena: Arena,
    initial_substrates: usize,

    // Engine-owned from here on.
    pub(crate) time: u64,
    pub(crate) step_counter: u64,
    pub(crate) enzymes: Vec<Enzyme>,
    pub(crate) substrates: Vec<Particle>,
    pub(crate) products: Vec<Particle>,
    pub(crate) complexes: Vec<Complex>,
    pub(crate) history: History,
}

impl SimulationState {
    /// Builds a state and materializes its initial particles.
    pub fn new<R: Rng + ?Sized>(
        model: InhibitionModel,
        settings: &SimulationSettings,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let arena = settings.layout.validate()?;
        let config = settings.config.validate()?;

        let mut state = Self {
            model,
            environment: config.environment,
            enzyme_params: config.enzyme_params,
            enzyme_count: config.enzyme_count,
            substrate_count: config.substrate_count,
            inhibitor_concentration: effective_inhibitor(model, &config),
            layout: settings.layout.clone(),
            arena,
            initial_substrates: 0,
            time: 0,
            step_counter: 0,
            enzymes: Vec::new(),
            substrates: Vec::new(),
            products: Vec::new(),
            complexes: Vec::new(),
            history: History::default(),
        };
        state.initialize_particles(rng);
        Ok(state)
    }

    /// Draws fresh enzymes and substrates and drops products and complexes.
    ///
    /// Counters and histories are left alone; see [`SimulationState::reset`].
    pub fn initialize_particles<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let Arena { width, height } = self.arena;
        let params = self.enzyme_params;

        self.enzymes = (0..self.enzyme_count)
            .map(|_| Enzyme::new(rng.gen::<f64>() * width, rng.gen::<f64>() * height, params))
            .collect();
        self.substrates = (0..self.substrate_count)
            .map(|_| Particle::substrate(rng.gen::<f64>() * width, rng.gen::<f64>() * height))
            .collect();
        self.products.clear();
        self.complexes.clear();
        self.initial_substrates = self.substrates.len();

        info!(
            model = %self.model,
            enzymes = self.enzymes.len(),
            substrates = self.substrates.len(),
            "particles initialized"
        );
    }

    /// Re-initializes particles and zeroes time, counters and histories.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.initialize_particles(rng);
        self.time = 0;
        self.step_counter = 0;
        self.history.clear();
    }

    /// Applies operator configuration between steps.
    ///
    /// Returns `true` when the requested counts differed from the live ones
    /// and the particles were re-initialized. Nothing changes on error.
    pub fn apply_config<R: Rng + ?Sized>(
        &mut self,
        config: &SimulationConfig,
        rng: &mut R,
    ) -> Result<bool, ConfigError> {
        let valid = config.validate()?;

        self.environment = valid.environment;
        self.enzyme_params = valid.enzyme_params;
        self.enzyme_count = valid.enzyme_count;
        self.substrate_count = valid.substrate_count;
        self.inhibitor_concentration = effective_inhibitor(self.model, &valid);

        let stale =
            self.enzyme_count != self.enzymes.len() || self.substrate_count != self.substrates.len();
        if stale {
            self.initialize_particles(rng);
        }
        Ok(stale)
    }

    /// Re-checks the fixed layout; the engine refuses to step when this fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate().map(|_| ())
    }

    /// Verifies the enzyme/complex pairing without touching anything.
    pub fn check_invariants(&self) -> Result<(), SimError> {
        let mut claimed = vec![false; self.enzymes.len()];
        for complex in &self.complexes {
            let Some(enzyme) = self.enzymes.get(complex.enzyme) else {
                return Err(SimError::InvariantViolation(format!(
                    "complex references missing enzyme {}",
                    complex.enzyme
                )));
            };
            if !enzyme.bound {
                return Err(SimError::InvariantViolation(format!(
                    "complex references free enzyme {}",
                    complex.enzyme
                )));
            }
            if std::mem::replace(&mut claimed[complex.enzyme], true) {
                return Err(SimError::InvariantViolation(format!(
                    "enzyme {} is held by two complexes",
                    complex.enzyme
                )));
            }
        }

        if let Some(idx) = self
            .enzymes
            .iter()
            .zip(&claimed)
            .position(|(enzyme, held)| enzyme.bound && !held)
        {
            return Err(SimError::InvariantViolation(format!(
                "enzyme {idx} is bound without a complex"
            )));
        }
        Ok(())
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            time: self.time,
            product_count: self.products.len(),
            enzymes: self.enzymes.iter().map(PointSnapshot::from).collect(),
            substrates: self.substrates.iter().map(PointSnapshot::from).collect(),
            products: self.products.iter().map(PointSnapshot::from).collect(),
            complexes: self
                .complexes
                .iter()
                .filter_map(|c| c.position(&self.enzymes))
                .map(|(x, y)| PointSnapshot { x, y })
                .collect(),
        }
    }

    pub fn model(&self) -> InhibitionModel {
        self.model
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn enzyme_params(&self) -> &EnzymeParams {
        &self.enzyme_params
    }

    pub fn inhibitor_concentration(&self) -> f64 {
        f64::from(self.inhibitor_concentration)
    }

    pub fn binding_modifier(&self) -> f64 {
        self.model.binding_modifier(self.inhibitor_concentration())
    }

    pub fn catalysis_modifier(&self) -> f64 {
        self.model.catalysis_modifier(self.inhibitor_concentration())
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn base_speed(&self) -> f64 {
        self.layout.base_speed
    }

    pub fn sample_interval(&self) -> u64 {
        self.layout.sample_interval
    }

    pub fn target_counts(&self) -> (usize, usize) {
        (self.enzyme_count, self.substrate_count)
    }

    pub fn time(&self) -> u64 {
        self.time
    }

    pub fn step_counter(&self) -> u64 {
        self.step_counter
    }

    pub fn enzymes(&self) -> &[Enzyme] {
        &self.enzymes
    }

    pub fn substrates(&self) -> &[Particle] {
        &self.substrates
    }

    pub fn products(&self) -> &[Particle] {
        &self.products
    }

    pub fn complexes(&self) -> &[Complex] {
        &self.complexes
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Substrate count at the last initialization.
    pub fn initial_substrate_count(&self) -> usize {
        self.initial_substrates
    }
}

// Without an inhibited model the inhibitor control has no meaning.
fn effective_inhibitor(model: InhibitionModel, config: &ValidConfig) -> u32 {
    if model.uses_inhibitor() {
        config.inhibitor_concentration
    } else {
        0
    }
}
