// Fixed model constants, kept apart from runtime configuration.

pub mod particle;
pub mod reaction;
