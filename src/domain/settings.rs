// Operator-facing configuration for a simulation run and its validation.

use crate::domain::errors::ConfigError;
use crate::domain::kinetics::Environment;
use crate::domain::particle::{Arena, EnzymeParams};
use serde::{Deserialize, Serialize};

/// Values the control surface may change between steps.
///
/// Counts are signed so that a negative request can be reported instead of
/// being silently wrapped or clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub temperature: f64,
    pub ph: f64,
    pub enzyme_count: i64,
    pub substrate_count: i64,
    pub inhibitor_concentration: i64,
    pub km: f64,
    pub optimal_temperature: f64,
    pub optimal_ph: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let env = Environment::default();
        let params = EnzymeParams::default();
        Self {
            temperature: env.temperature,
            ph: env.ph,
            enzyme_count: 10,
            substrate_count: 100,
            inhibitor_concentration: 0,
            km: params.km,
            optimal_temperature: params.optimal_temperature,
            optimal_ph: params.optimal_ph,
        }
    }
}

/// A configuration that passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidConfig {
    pub environment: Environment,
    pub enzyme_params: EnzymeParams,
    pub enzyme_count: usize,
    pub substrate_count: usize,
    pub inhibitor_concentration: u32,
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<ValidConfig, ConfigError> {
        finite("temperature", self.temperature)?;
        finite("ph", self.ph)?;
        finite("km", self.km)?;
        finite("optimal_temperature", self.optimal_temperature)?;
        finite("optimal_ph", self.optimal_ph)?;
        if !(0.0..=14.0).contains(&self.ph) {
            return Err(ConfigError::PhOutOfRange(self.ph));
        }

        Ok(ValidConfig {
            environment: Environment {
                temperature: self.temperature,
                ph: self.ph,
            },
            enzyme_params: EnzymeParams {
                km: self.km,
                optimal_temperature: self.optimal_temperature,
                optimal_ph: self.optimal_ph,
            },
            enzyme_count: count("enzyme_count", self.enzyme_count)?,
            substrate_count: count("substrate_count", self.substrate_count)?,
            inhibitor_concentration: count("inhibitor_concentration", self.inhibitor_concentration)?,
        })
    }
}

/// Arena geometry and sampling; fixed for the lifetime of a state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    /// Steps between two sampled history points.
    pub sample_interval: u64,
    /// Global multiplier on every particle's random displacement.
    pub base_speed: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 100.0,
            sample_interval: 50,
            base_speed: 1.0,
        }
    }
}

impl Layout {
    pub fn validate(&self) -> Result<Arena, ConfigError> {
        let sized = |v: f64| v.is_finite() && v > 0.0;
        if !sized(self.width) || !sized(self.height) {
            return Err(ConfigError::InvalidArena {
                width: self.width,
                height: self.height,
            });
        }
        if self.sample_interval == 0 {
            return Err(ConfigError::ZeroSampleInterval);
        }
        if !sized(self.base_speed) {
            return Err(ConfigError::InvalidBaseSpeed(self.base_speed));
        }
        Ok(Arena {
            width: self.width,
            height: self.height,
        })
    }
}

/// Everything needed to build a fresh simulation state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    pub config: SimulationConfig,
    pub layout: Layout,
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field })
    }
}

fn count<T: TryFrom<i64>>(field: &'static str, value: i64) -> Result<T, ConfigError> {
    if value < 0 {
        return Err(ConfigError::NegativeCount { field, value });
    }
    T::try_from(value).map_err(|_| ConfigError::CountTooLarge { field, value })
}
