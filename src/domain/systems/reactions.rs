use crate::domain::kinetics::{Environment, activity};
use crate::domain::particle::{Complex, Enzyme, Particle};
use crate::domain::systems::collision::collides;
use crate::domain::tuning::reaction::ReactionTuning;
use rand::Rng;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct ReactionConfig {
    pub tuning: ReactionTuning,
    pub binding_modifier: f64,
    pub catalysis_modifier: f64,
}

/// Binds free enzymes to the first substrate they touch.
///
/// Enzymes are visited in collection order and each gets at most one
/// Bernoulli trial, against the first colliding substrate in collection order.
/// This first-match rule is order dependent: it does not look for the nearest
/// substrate or the best pairing. Returns the number of new complexes.
pub fn bind_enzymes<R: Rng + ?Sized>(
    enzymes: &mut [Enzyme],
    substrates: &mut Vec<Particle>,
    complexes: &mut Vec<Complex>,
    env: &Environment,
    cfg: ReactionConfig,
    rng: &mut R,
) -> usize {
    let mut bound = 0;
    for (idx, enzyme) in enzymes.iter_mut().enumerate() {
        if enzyme.bound {
            continue;
        }
        let Some(hit) = substrates.iter().position(|s| collides(enzyme, s)) else {
            continue;
        };

        let p = cfg.tuning.binding_probability * activity(enzyme, env) * cfg.binding_modifier;
        if rng.gen::<f64>() < p {
            // Vec::remove keeps the remaining substrates in order.
            substrates.remove(hit);
            enzyme.bound = true;
            complexes.push(Complex::new(idx));
            bound += 1;
            debug!(enzyme = idx, p, "substrate bound");
        }
    }
    bound
}

/// Converts complexes to products and frees their enzymes.
///
/// The product appears where the enzyme currently sits. Returns the number of
/// products formed.
pub fn catalyze_complexes<R: Rng + ?Sized>(
    enzymes: &mut [Enzyme],
    complexes: &mut Vec<Complex>,
    products: &mut Vec<Particle>,
    env: &Environment,
    cfg: ReactionConfig,
    rng: &mut R,
) -> usize {
    let mut formed = 0;
    complexes.retain(|complex| {
        // Dangling complexes are rejected before a step starts.
        let Some(enzyme) = enzymes.get_mut(complex.enzyme) else {
            return true;
        };

        let p = cfg.tuning.catalysis_probability * activity(enzyme, env) * cfg.catalysis_modifier;
        if rng.gen::<f64>() >= p {
            return true;
        }

        enzyme.bound = false;
        products.push(Particle::product(enzyme.body.x, enzyme.body.y));
        formed += 1;
        debug!(enzyme = complex.enzyme, p, "product formed");
        false
    });
    formed
}
