// Shared builders for integration tests.
#![allow(dead_code)]

use enzyme_sim::domain::{InhibitionModel, Layout, SimulationConfig, SimulationSettings};
use enzyme_sim::use_cases::{SimulationSession, TerminationPolicy};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Dense arena so reactions happen within a few hundred steps.
pub fn dense_settings() -> SimulationSettings {
    SimulationSettings {
        config: SimulationConfig {
            enzyme_count: 25,
            substrate_count: 150,
            ..SimulationConfig::default()
        },
        layout: Layout {
            width: 120.0,
            height: 80.0,
            sample_interval: 10,
            ..Layout::default()
        },
    }
}

pub fn session(
    model: InhibitionModel,
    settings: SimulationSettings,
    seed: u64,
) -> SimulationSession<ChaCha8Rng> {
    SimulationSession::new(
        model,
        settings,
        TerminationPolicy::default(),
        ChaCha8Rng::seed_from_u64(seed),
    )
    .expect("test settings should be valid")
}

pub fn started(
    model: InhibitionModel,
    settings: SimulationSettings,
    seed: u64,
) -> SimulationSession<ChaCha8Rng> {
    let mut session = session(model, settings, seed);
    session.start();
    session
}
