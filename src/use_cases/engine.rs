// One discrete simulation step: motion, binding, catalysis, bookkeeping.

use crate::domain::SimError;
use crate::domain::kinetics::speed_factor;
use crate::domain::state::SimulationState;
use crate::domain::systems::{movement, reactions};
use crate::domain::tuning::reaction::ReactionTuning;
use rand::Rng;
use tracing::warn;

/// What happened during a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub time: u64,
    /// Complexes formed this step.
    pub bound: usize,
    /// Products formed this step.
    pub formed: usize,
    /// Live products after the step.
    pub products: usize,
}

/// Advances `state` by one tick.
///
/// The state is validated before anything moves; on error nothing is mutated.
/// Phase order is fixed: a substrate bound this step may already be catalyzed
/// in the same step, but a product formed this step does not move until the
/// next one.
pub fn step<R: Rng + ?Sized>(
    state: &mut SimulationState,
    rng: &mut R,
) -> Result<StepReport, SimError> {
    state
        .validate()
        .inspect_err(|e| warn!(error = %e, "refusing to step"))?;
    state
        .check_invariants()
        .inspect_err(|e| warn!(error = %e, time = state.time, "step aborted"))?;

    let env = *state.environment();
    let arena = state.arena();

    // One arena-wide factor, taken from the configured enzyme optimum.
    let factor = speed_factor(
        &env,
        state.enzyme_params().optimal_temperature,
        state.base_speed(),
    );

    for e in &mut state.enzymes {
        movement::tick_particle(&mut e.body, arena, factor, rng);
    }
    for s in &mut state.substrates {
        movement::tick_particle(s, arena, factor, rng);
    }
    for p in &mut state.products {
        movement::tick_particle(p, arena, factor, rng);
    }

    let cfg = reactions::ReactionConfig {
        tuning: ReactionTuning::STANDARD,
        binding_modifier: state.binding_modifier(),
        catalysis_modifier: state.catalysis_modifier(),
    };

    let bound = reactions::bind_enzymes(
        &mut state.enzymes,
        &mut state.substrates,
        &mut state.complexes,
        &env,
        cfg,
        rng,
    );
    let formed = reactions::catalyze_complexes(
        &mut state.enzymes,
        &mut state.complexes,
        &mut state.products,
        &env,
        cfg,
        rng,
    );

    state.time += 1;
    let products = state.products.len();
    state.history.time.push(state.time);
    state.history.products.push(products);
    state.history.rate.push(formed);

    state.step_counter += 1;
    if state.step_counter % state.sample_interval() == 0 {
        state.history.sampled_time.push(state.time);
        state.history.sampled_products.push(products);
    }

    Ok(StepReport {
        time: state.time,
        bound,
        formed,
        products,
    })
}
