// Per-step systems the engine runs in a fixed order.

pub mod collision;
pub mod movement;
pub mod reactions;
