/// Reaction tuning shared by every simulation run.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactionTuning {
    /// Binding probability for a colliding pair at full activity.
    pub binding_probability: f64,

    /// Per-step catalysis probability for a complex at full activity.
    pub catalysis_probability: f64,

    /// Width of the temperature activity bell.
    pub temperature_sigma: f64,

    /// Width of the pH activity bell.
    pub ph_sigma: f64,

    /// Fractional speed change per degree away from the optimal temperature.
    pub speed_slope: f64,

    /// Lower bound of the thermal speed multiplier.
    pub min_speed_factor: f64,

    /// Inhibition constant shared by the inhibited models.
    pub inhibition_constant: f64,
}

impl ReactionTuning {
    pub const STANDARD: Self = Self {
        binding_probability: 0.2,
        catalysis_probability: 0.1,
        temperature_sigma: 5.0,
        ph_sigma: 0.8,
        speed_slope: 0.05,
        min_speed_factor: 0.1,
        inhibition_constant: 20.0,
    };
}
