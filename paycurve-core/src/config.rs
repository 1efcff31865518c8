//! Engine configuration: shape policy, sampling range and resolution.
//!
//! The three historical variants of the computation differ only in these
//! knobs, so each one is a preset here rather than a separate code path.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Statutory minimum annual gross salary used by the fixed range floor.
pub const STATUTORY_MINIMUM_SALARY: f64 = 21_203.0;

/// Absolute floor of the legacy range policy.
pub const LEGACY_FLOOR_ABSOLUTE: f64 = 20_000.0;

/// Median fraction of the legacy range policy.
pub const LEGACY_FLOOR_MEDIAN_FRACTION: f64 = 0.5;

/// Upper end of the sampled range, as a multiple of the median.
pub const DEFAULT_CEILING_FACTOR: f64 = 2.5;

/// Step count of the coarse presets.
pub const DEFAULT_STEPS: usize = 150;

/// Step count of the smooth preset.
pub const SMOOTH_STEPS: usize = 100_000;

/// Cosmetic factor applied to raw densities so they read as ordinary numbers.
pub const DENSITY_DISPLAY_SCALE: f64 = 1_000_000.0;

/// How the log-scale shape parameter sigma is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShapePolicy {
    /// sigma = sqrt(2 * (ln(mean) - ln(median))). Requires mean > median.
    MeanRatio,
    /// sigma = skewness_input * (1 + spread_input).
    SkewSpread,
}

impl ShapePolicy {
    pub fn label(self) -> &'static str {
        match self {
            ShapePolicy::MeanRatio => "mean/median ratio",
            ShapePolicy::SkewSpread => "skewness x spread",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ShapePolicy::MeanRatio => ShapePolicy::SkewSpread,
            ShapePolicy::SkewSpread => ShapePolicy::MeanRatio,
        }
    }
}

/// Lower end of the sampled range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RangeFloor {
    /// A fixed amount, typically the statutory minimum wage.
    Fixed { amount: f64 },
    /// max(absolute, median_fraction * median).
    Legacy { absolute: f64, median_fraction: f64 },
}

impl RangeFloor {
    pub fn resolve(&self, median: f64) -> f64 {
        match *self {
            RangeFloor::Fixed { amount } => amount,
            RangeFloor::Legacy {
                absolute,
                median_fraction,
            } => absolute.max(median_fraction * median),
        }
    }
}

impl Default for RangeFloor {
    fn default() -> Self {
        RangeFloor::Legacy {
            absolute: LEGACY_FLOOR_ABSOLUTE,
            median_fraction: LEGACY_FLOOR_MEDIAN_FRACTION,
        }
    }
}

/// Full engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub shape_policy: ShapePolicy,
    /// range_max = ceiling_factor * median
    pub ceiling_factor: f64,
    /// Number of equal-width steps across the range (samples = steps + 1).
    pub steps: usize,
    pub density_scale: f64,
    // Kept last: it serializes as a TOML table.
    pub range_floor: RangeFloor,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            shape_policy: ShapePolicy::MeanRatio,
            ceiling_factor: DEFAULT_CEILING_FACTOR,
            steps: DEFAULT_STEPS,
            density_scale: DENSITY_DISPLAY_SCALE,
            range_floor: RangeFloor::default(),
        }
    }
}

impl EngineConfig {
    /// High-resolution curve anchored at the statutory minimum wage.
    pub fn smooth() -> Self {
        Self {
            range_floor: RangeFloor::Fixed {
                amount: STATUTORY_MINIMUM_SALARY,
            },
            steps: SMOOTH_STEPS,
            ..Self::default()
        }
    }

    /// Shape from explicit skewness/spread inputs instead of the mean.
    pub fn skew_spread() -> Self {
        Self {
            shape_policy: ShapePolicy::SkewSpread,
            ..Self::default()
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject configurations that cannot produce a curve for any input.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps == 0 {
            return Err(ConfigError::Invalid("steps must be at least 1".into()));
        }
        if !(self.ceiling_factor.is_finite() && self.ceiling_factor > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "ceiling_factor must be a positive number (got {})",
                self.ceiling_factor
            )));
        }
        if !(self.density_scale.is_finite() && self.density_scale > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "density_scale must be a positive number (got {})",
                self.density_scale
            )));
        }
        match self.range_floor {
            RangeFloor::Fixed { amount } => {
                if !(amount.is_finite() && amount >= 0.0) {
                    return Err(ConfigError::Invalid(format!(
                        "fixed floor amount must be non-negative (got {amount})"
                    )));
                }
            }
            RangeFloor::Legacy {
                absolute,
                median_fraction,
            } => {
                if !(absolute.is_finite() && absolute >= 0.0) {
                    return Err(ConfigError::Invalid(format!(
                        "legacy floor absolute must be non-negative (got {absolute})"
                    )));
                }
                if !(median_fraction.is_finite() && median_fraction >= 0.0) {
                    return Err(ConfigError::Invalid(format!(
                        "legacy floor median_fraction must be non-negative (got {median_fraction})"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Named configurations selectable from the CLI and TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    Default,
    Smooth,
    SkewSpread,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Default, Preset::Smooth, Preset::SkewSpread];

    pub fn config(self) -> EngineConfig {
        match self {
            Preset::Default => EngineConfig::default(),
            Preset::Smooth => EngineConfig::smooth(),
            Preset::SkewSpread => EngineConfig::skew_spread(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Default => "default",
            Preset::Smooth => "smooth",
            Preset::SkewSpread => "skew-spread",
        }
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}

/// Errors from loading or validating an engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("unknown preset '{0}' (expected default, smooth or skew-spread)")]
    UnknownPreset(String),
}
