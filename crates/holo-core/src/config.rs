//! Session configuration for a card view.
//!
//! A [`Config`] is built once, validated, and then handed to
//! [`HoloEngine::new`](crate::HoloEngine::new). It is never mutated afterwards.

use crate::constants::*;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// How the displayed state follows the target state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SmoothingStrategy {
    /// Display jumps to the latest target, at most once per frame.
    Direct,
    /// Display eases toward the target every frame.
    #[default]
    Interpolate,
}

impl FromStr for SmoothingStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(Self::Direct),
            "interpolate" | "smooth" | "spring" => Ok(Self::Interpolate),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("max rotation must be finite and positive, got {0}")]
    MaxRotation(f32),
    #[error("idle timeout must be non-zero")]
    IdleTimeout,
    #[error("{name} must lie in (0, 1], got {value}")]
    Factor { name: &'static str, value: f32 },
    #[error("gyro scale must be finite and positive, got {0}")]
    GyroScale(f32),
    #[error("unknown smoothing strategy {0:?}")]
    UnknownStrategy(String),
    #[error("invalid value {value:?} for {key}")]
    Parse { key: &'static str, value: String },
}

/// Tunables that front-ends may override from strings (attributes, env vars).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigKey {
    MaxRotation,
    IdleTimeoutMs,
    Smoothing,
    SpringBack,
    GyroScale,
    Strategy,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 6] = [
        ConfigKey::MaxRotation,
        ConfigKey::IdleTimeoutMs,
        ConfigKey::Smoothing,
        ConfigKey::SpringBack,
        ConfigKey::GyroScale,
        ConfigKey::Strategy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ConfigKey::MaxRotation => "max_rotation",
            ConfigKey::IdleTimeoutMs => "idle_timeout_ms",
            ConfigKey::Smoothing => "smoothing",
            ConfigKey::SpringBack => "spring_back",
            ConfigKey::GyroScale => "gyro_scale",
            ConfigKey::Strategy => "strategy",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Peak rotation on either axis, in degrees.
    pub max_rotation: f32,
    pub idle_timeout: Duration,
    /// Per-frame blend factor while pointer/touch input is active.
    pub smoothing: f32,
    /// Per-frame blend factor otherwise.
    pub spring_back: f32,
    /// Multiplier applied to device orientation angles.
    pub gyro_scale: f32,
    pub strategy: SmoothingStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_rotation: DEFAULT_MAX_ROTATION_DEG,
            idle_timeout: Duration::from_millis(DEFAULT_IDLE_TIMEOUT_MS),
            smoothing: DEFAULT_SMOOTHING,
            spring_back: DEFAULT_SPRING_BACK,
            gyro_scale: DEFAULT_GYRO_SCALE,
            strategy: SmoothingStrategy::default(),
        }
    }
}

impl Config {
    pub fn with_max_rotation(mut self, degrees: f32) -> Self {
        self.max_rotation = degrees;
        self
    }

    pub fn with_idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    pub fn with_smoothing(mut self, factor: f32) -> Self {
        self.smoothing = factor;
        self
    }

    pub fn with_spring_back(mut self, factor: f32) -> Self {
        self.spring_back = factor;
        self
    }

    pub fn with_gyro_scale(mut self, scale: f32) -> Self {
        self.gyro_scale = scale;
        self
    }

    pub fn with_strategy(mut self, strategy: SmoothingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Overwrite one field from its string form. The config is left untouched
    /// when `raw` does not parse; range checks are left to [`Config::validate`].
    pub fn apply(&mut self, key: ConfigKey, raw: &str) -> Result<(), ConfigError> {
        let parse_err = || ConfigError::Parse {
            key: key.name(),
            value: raw.to_string(),
        };
        let number = || raw.trim().parse::<f32>().map_err(|_| parse_err());
        match key {
            ConfigKey::MaxRotation => self.max_rotation = number()?,
            ConfigKey::IdleTimeoutMs => {
                let ms = raw.trim().parse::<u64>().map_err(|_| parse_err())?;
                self.idle_timeout = Duration::from_millis(ms);
            }
            ConfigKey::Smoothing => self.smoothing = number()?,
            ConfigKey::SpringBack => self.spring_back = number()?,
            ConfigKey::GyroScale => self.gyro_scale = number()?,
            ConfigKey::Strategy => self.strategy = raw.parse()?,
        }
        Ok(())
    }

    /// Apply every override `lookup` yields, then validate. Bad entries are
    /// skipped with a warning; an invalid result falls back to defaults.
    pub fn from_overrides(lookup: impl Fn(ConfigKey) -> Option<String>) -> Self {
        let mut config = Self::default();
        for key in ConfigKey::ALL {
            if let Some(raw) = lookup(key) {
                if let Err(e) = config.apply(key, &raw) {
                    log::warn!("[config] {e}; keeping {}", key.name());
                }
            }
        }
        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("[config] {e}; using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_rotation.is_finite() && self.max_rotation > 0.0) {
            return Err(ConfigError::MaxRotation(self.max_rotation));
        }
        if self.idle_timeout.is_zero() {
            return Err(ConfigError::IdleTimeout);
        }
        check_factor("smoothing", self.smoothing)?;
        check_factor("spring_back", self.spring_back)?;
        if !(self.gyro_scale.is_finite() && self.gyro_scale > 0.0) {
            return Err(ConfigError::GyroScale(self.gyro_scale));
        }
        Ok(())
    }
}

fn check_factor(name: &'static str, value: f32) -> Result<(), ConfigError> {
    // NaN fails both comparisons
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::Factor { name, value })
    }
}
