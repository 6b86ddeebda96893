use std::{env, fmt, time::Duration};

// Runtime constants (not gameplay tuning).

pub const EVENT_CHANNEL_CAPACITY: usize = 1024;
pub const WORLD_BROADCAST_CAPACITY: usize = 128;
pub const TELEMETRY_CHANNEL_CAPACITY: usize = 256;

pub const DEFAULT_TICK_HZ: u32 = 60;

/// Errors returned while reading configuration from the environment.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Variable is set but does not parse.
    Invalid { key: &'static str, value: String },
    /// Variable parses but is outside the accepted range.
    OutOfRange { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => write!(f, "{key}={value:?} is not valid"),
            ConfigError::OutOfRange { key, value } => write!(f, "{key}={value:?} is out of range"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for a headless simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub tick_hz: u32,
    pub boats: u64,
    /// Ticks to simulate before stopping (0 runs until interrupted).
    pub ticks: u64,
    pub wind_strength: f64,
    pub wind_direction_deg: f64,
    pub sheet_length: f64,
    /// Emit a telemetry line every N ticks.
    pub telemetry_every: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_hz: DEFAULT_TICK_HZ,
            boats: 1,
            ticks: 600,
            wind_strength: 12.0,
            wind_direction_deg: 90.0,
            sheet_length: 10.0,
            telemetry_every: 30,
        }
    }
}

impl SimConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; unset keys keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            tick_hz: parse_or(&lookup, "SIM_TICK_HZ", defaults.tick_hz)?,
            boats: parse_or(&lookup, "SIM_BOATS", defaults.boats)?,
            ticks: parse_or(&lookup, "SIM_TICKS", defaults.ticks)?,
            wind_strength: parse_or(&lookup, "SIM_WIND_STRENGTH", defaults.wind_strength)?,
            wind_direction_deg: parse_or(
                &lookup,
                "SIM_WIND_DIRECTION",
                defaults.wind_direction_deg,
            )?,
            sheet_length: parse_or(&lookup, "SIM_SHEET_LENGTH", defaults.sheet_length)?,
            telemetry_every: parse_or(&lookup, "SIM_TELEMETRY_EVERY", defaults.telemetry_every)?,
        };

        if config.tick_hz == 0 || config.tick_hz > 1000 {
            return Err(out_of_range("SIM_TICK_HZ", config.tick_hz));
        }
        if !(0.0..=100.0).contains(&config.wind_strength) {
            return Err(out_of_range("SIM_WIND_STRENGTH", config.wind_strength));
        }
        if !(0.0..=100.0).contains(&config.sheet_length) {
            return Err(out_of_range("SIM_SHEET_LENGTH", config.sheet_length));
        }
        if !config.wind_direction_deg.is_finite() {
            return Err(out_of_range("SIM_WIND_DIRECTION", config.wind_direction_deg));
        }
        Ok(config)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_hz))
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

fn out_of_range(key: &'static str, value: impl ToString) -> ConfigError {
    ConfigError::OutOfRange {
        key,
        value: value.to_string(),
    }
}
