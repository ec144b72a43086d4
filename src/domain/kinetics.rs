// Environment-dependent activity and thermal speed scaling.

use crate::domain::particle::Enzyme;
use crate::domain::tuning::reaction::ReactionTuning;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub temperature: f64,
    pub ph: f64,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            temperature: 37.0,
            ph: 7.0,
        }
    }
}

fn gaussian(value: f64, optimum: f64, sigma: f64) -> f64 {
    let delta = value - optimum;
    (-(delta * delta) / (2.0 * sigma * sigma)).exp()
}

pub fn temperature_activity(enzyme: &Enzyme, env: &Environment) -> f64 {
    gaussian(
        env.temperature,
        enzyme.optimal_temperature,
        ReactionTuning::STANDARD.temperature_sigma,
    )
}

pub fn ph_activity(enzyme: &Enzyme, env: &Environment) -> f64 {
    gaussian(env.ph, enzyme.optimal_ph, ReactionTuning::STANDARD.ph_sigma)
}

/// Combined activity in `(0, 1]`, exactly 1 at the enzyme's optima.
pub fn activity(enzyme: &Enzyme, env: &Environment) -> f64 {
    temperature_activity(enzyme, env) * ph_activity(enzyme, env)
}

/// Linear thermal scaling of movement speed, floored so motion never stops.
pub fn speed_factor(env: &Environment, optimal_temperature: f64, base_speed: f64) -> f64 {
    let tuning = ReactionTuning::STANDARD;
    let factor = 1.0 + tuning.speed_slope * (env.temperature - optimal_temperature);
    base_speed * factor.max(tuning.min_speed_factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::particle::EnzymeParams;

    fn enzyme() -> Enzyme {
        Enzyme::new(0.0, 0.0, EnzymeParams::default())
    }

    #[test]
    fn activity_is_exactly_one_at_the_optima() {
        let env = Environment {
            temperature: 37.0,
            ph: 7.0,
        };
        assert_eq!(activity(&enzyme(), &env), 1.0);
    }

    #[test]
    fn activity_decays_symmetrically() {
        let e = enzyme();
        let hot = Environment {
            temperature: 42.0,
            ph: 7.0,
        };
        let cold = Environment {
            temperature: 32.0,
            ph: 7.0,
        };
        let expected = (-0.5f64).exp();
        assert!((temperature_activity(&e, &hot) - expected).abs() < 1e-12);
        assert!((temperature_activity(&e, &cold) - expected).abs() < 1e-12);

        let acidic = Environment {
            temperature: 37.0,
            ph: 6.2,
        };
        assert!((ph_activity(&e, &acidic) - expected).abs() < 1e-12);
        assert!((activity(&e, &acidic) - expected).abs() < 1e-12);
    }

    #[test]
    fn activity_stays_positive_far_from_the_optima() {
        let env = Environment {
            temperature: 60.0,
            ph: 10.0,
        };
        let a = activity(&enzyme(), &env);
        assert!(a > 0.0 && a < 1e-3);
    }

    #[test]
    fn speed_factor_scales_linearly_with_temperature() {
        let at = |temperature| speed_factor(&Environment { temperature, ph: 7.0 }, 37.0, 1.0);
        assert_eq!(at(37.0), 1.0);
        assert!((at(47.0) - 1.5).abs() < 1e-12);
        assert!((at(27.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn speed_factor_never_drops_below_the_floor() {
        let env = Environment {
            temperature: 0.0,
            ph: 7.0,
        };
        assert!((speed_factor(&env, 37.0, 1.0) - 0.1).abs() < 1e-12);
        assert!((speed_factor(&env, 37.0, 2.0) - 0.2).abs() < 1e-12);
    }
}
