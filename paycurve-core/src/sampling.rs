//! Discretized density curve with its running cumulative share.
//!
//! The cumulative percentage is a running normalization over the sampled
//! points, not the closed-form CDF: mass outside the sampled range is
//! ignored, so the last sample always reaches 100%.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::EngineConfig;
use crate::error::DomainError;
use crate::lognormal::LogNormalFit;

/// One point of the fitted curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensitySample {
    /// Salary level, rounded to a whole currency unit.
    pub value: f64,
    /// Density scaled by the display factor (arbitrary units).
    pub density: f64,
    /// Share of the total sampled density up to and including this point.
    pub cumulative_percent: f64,
}

/// Closed salary interval the curve is sampled on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    pub min: f64,
    pub max: f64,
    /// Step count actually used (see [`SampleRange::resolve`]).
    pub steps: usize,
}

impl SampleRange {
    /// Resolve the range for a median under the given config.
    ///
    /// Sample values are rounded to integers, so the step count is capped at
    /// the width of the range: every step then spans at least one unit and
    /// the rounded values stay strictly ascending.
    pub fn resolve(median: f64, config: &EngineConfig) -> Result<Self, DomainError> {
        let min = config.range_floor.resolve(median);
        let max = config.ceiling_factor * median;
        let span = max - min;
        if !(span.is_finite() && span >= 1.0) {
            return Err(DomainError::EmptyRange { min, max });
        }
        let steps = config.steps.min(span.floor() as usize).max(1);
        Ok(Self { min, max, steps })
    }

    pub fn step_width(&self) -> f64 {
        (self.max - self.min) / self.steps as f64
    }

    /// Sample points including both endpoints.
    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        let width = self.step_width();
        (0..=self.steps).map(move |i| {
            if i == self.steps {
                self.max
            } else {
                self.min + i as f64 * width
            }
        })
    }
}

/// Evaluate the scaled density on every point of `range` and attach the
/// running cumulative percentage.
pub fn generate_samples(
    fit: &LogNormalFit,
    range: &SampleRange,
    density_scale: f64,
) -> Result<Vec<DensitySample>, DomainError> {
    let raw: Vec<(f64, f64)> = range
        .points()
        .map(|s| (s.round(), fit.pdf(s) * density_scale))
        .collect();

    let total: f64 = raw.iter().map(|&(_, d)| d).sum();
    if !(total.is_finite() && total > 0.0) {
        return Err(DomainError::ZeroMass);
    }
    trace!(
        samples = raw.len(),
        step = range.step_width(),
        total_density = total,
        "sampled density curve"
    );

    let mut running = 0.0;
    let samples = raw
        .into_iter()
        .map(|(value, density)| {
            running += density / total;
            DensitySample {
                value,
                density,
                cumulative_percent: running * 100.0,
            }
        })
        .collect();
    Ok(samples)
}

/// Share-weighted mean of the sample values.
pub fn weighted_mean(samples: &[DensitySample]) -> f64 {
    let total: f64 = samples.iter().map(|s| s.density).sum();
    if total <= 0.0 {
        return 0.0;
    }
    samples.iter().map(|s| s.value * s.density).sum::<f64>() / total
}
