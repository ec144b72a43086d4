use crate::domain::{ConfigError, InhibitionModel, SimulationSettings};
use crate::use_cases::{RunSettings, TerminationPolicy};
use serde::Deserialize;
use std::{env, fmt, path::PathBuf, time::Duration};

// Runtime constants and environment overrides (not model tuning).

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(50);
// Safety cap for unattended runs (0 disables).
pub const DEFAULT_MAX_STEPS: u64 = 100_000;

/// Output shape of the log lines written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

pub fn log_format() -> LogFormat {
    match env::var("LOG_FORMAT").as_deref() {
        Ok("json") => LogFormat::Json,
        _ => LogFormat::Compact,
    }
}

pub fn config_path() -> Option<PathBuf> {
    env::var("ENZYME_SIM_CONFIG").ok().map(PathBuf::from)
}

pub fn seed_override() -> Option<u64> {
    env::var("ENZYME_SIM_SEED").ok().and_then(|v| v.parse().ok())
}

pub fn tick_interval_override() -> Option<Duration> {
    env::var("ENZYME_SIM_TICK_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_millis)
}

pub fn max_steps_override() -> Option<u64> {
    env::var("ENZYME_SIM_MAX_STEPS")
        .ok()
        .and_then(|v| v.parse().ok())
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// One independent run per listed model.
    pub models: Vec<InhibitionModel>,
    /// Base seed; run `i` uses `seed + i`. Unset draws a fresh seed per run.
    pub seed: Option<u64>,
    pub tick_interval_ms: u64,
    pub max_steps: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            models: InhibitionModel::ALL.to_vec(),
            seed: None,
            tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u64,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl RunConfig {
    pub fn settings(&self) -> RunSettings {
        RunSettings {
            tick_interval: Duration::from_millis(self.tick_interval_ms),
            max_steps: self.max_steps,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationSettings,
    pub termination: TerminationPolicy,
    pub run: RunConfig,
}

#[derive(Debug)]
pub enum AppConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(toml::de::Error),
    Invalid(ConfigError),
    NoModels,
}

impl fmt::Display for AppConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppConfigError::Io { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            AppConfigError::Parse(err) => write!(f, "invalid config file: {err}"),
            AppConfigError::Invalid(err) => write!(f, "invalid simulation settings: {err}"),
            AppConfigError::NoModels => write!(f, "no inhibition models configured"),
        }
    }
}

impl std::error::Error for AppConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppConfigError::Io { source, .. } => Some(source),
            AppConfigError::Parse(err) => Some(err),
            AppConfigError::Invalid(err) => Some(err),
            AppConfigError::NoModels => None,
        }
    }
}

impl From<ConfigError> for AppConfigError {
    fn from(err: ConfigError) -> Self {
        AppConfigError::Invalid(err)
    }
}

impl AppConfig {
    /// Reads the optional config file, then applies environment overrides.
    pub fn load() -> Result<Self, AppConfigError> {
        let mut config = match config_path() {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|source| AppConfigError::Io { path, source })?;
                Self::from_toml(&content)?
            }
            None => Self::default(),
        };

        if let Some(seed) = seed_override() {
            config.run.seed = Some(seed);
        }
        if let Some(interval) = tick_interval_override() {
            config.run.tick_interval_ms = interval.as_millis() as u64;
        }
        if let Some(max_steps) = max_steps_override() {
            config.run.max_steps = max_steps;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, AppConfigError> {
        toml::from_str(content).map_err(AppConfigError::Parse)
    }

    pub fn validate(&self) -> Result<(), AppConfigError> {
        self.simulation.layout.validate()?;
        self.simulation.config.validate()?;
        self.termination.validate()?;
        if self.run.models.is_empty() {
            return Err(AppConfigError::NoModels);
        }
        Ok(())
    }
}
