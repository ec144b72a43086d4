// Inhibition kinetics: probability multipliers driven by inhibitor concentration.

use crate::domain::tuning::reaction::ReactionTuning;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inhibition model selected when a simulation is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InhibitionModel {
    #[default]
    None,
    /// Inhibitor competes for the binding site; only binding slows down.
    Competitive,
    /// Inhibitor impairs the bound enzyme; only catalysis slows down.
    NonCompetitive,
}

impl InhibitionModel {
    pub const ALL: [InhibitionModel; 3] = [
        InhibitionModel::None,
        InhibitionModel::Competitive,
        InhibitionModel::NonCompetitive,
    ];

    /// Multiplier applied to the binding probability. Expects `inhibitor >= 0`.
    pub fn binding_modifier(self, inhibitor: f64) -> f64 {
        match self {
            InhibitionModel::Competitive => attenuation(inhibitor),
            InhibitionModel::None | InhibitionModel::NonCompetitive => 1.0,
        }
    }

    /// Multiplier applied to the catalysis probability. Expects `inhibitor >= 0`.
    pub fn catalysis_modifier(self, inhibitor: f64) -> f64 {
        match self {
            InhibitionModel::NonCompetitive => attenuation(inhibitor),
            InhibitionModel::None | InhibitionModel::Competitive => 1.0,
        }
    }

    pub fn uses_inhibitor(self) -> bool {
        !matches!(self, InhibitionModel::None)
    }
}

fn attenuation(inhibitor: f64) -> f64 {
    1.0 / (1.0 + inhibitor / ReactionTuning::STANDARD.inhibition_constant)
}

impl fmt::Display for InhibitionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InhibitionModel::None => write!(f, "no inhibitor"),
            InhibitionModel::Competitive => write!(f, "competitive"),
            InhibitionModel::NonCompetitive => write!(f, "non-competitive"),
        }
    }
}
