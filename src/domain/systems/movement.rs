use crate::domain::particle::{Arena, Particle};
use rand::Rng;

/// Random-walk displacement for one step, clamped into the arena.
pub fn tick_particle<R: Rng + ?Sized>(
    p: &mut Particle,
    arena: Arena,
    speed_factor: f64,
    rng: &mut R,
) {
    let step = p.speed() * speed_factor;
    let dx = rng.gen_range(-1.0..1.0) * step;
    let dy = rng.gen_range(-1.0..1.0) * step;

    // Walls are sticky: overshoot lands on the edge.
    (p.x, p.y) = arena.clamp(p.x + dx, p.y + dy);
}
