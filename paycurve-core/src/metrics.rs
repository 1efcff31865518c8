//! Summary metrics: where the personal salary sits, and shape statistics.

use serde::{Deserialize, Serialize};

use crate::lognormal::LogNormalFit;
use crate::params::DistributionParameters;
use crate::sampling::{weighted_mean, DensitySample};

/// Derived metrics of one computation. All zero for a degenerate result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// mu = ln(median)
    pub log_mean: f64,
    /// sigma
    pub log_std_dev: f64,
    /// sigma squared
    pub variance: f64,
    /// Closed-form log-normal skewness from sigma.
    pub skewness: f64,
    /// Cumulative percent at the first sample at or above the personal value;
    /// 0 when no sample qualifies.
    pub personal_percentile: f64,
    pub deviation_from_median_pct: f64,
    pub deviation_from_mean_pct: f64,
    /// Density-weighted mean of the sampled values.
    pub theoretical_mean: f64,
    /// exp(mu + sigma² / 2) of the untruncated curve.
    pub analytic_mean: f64,
    /// Closed-form CDF at the personal value, in percent.
    pub analytic_percentile: f64,
}

impl DerivedMetrics {
    pub fn compute(
        params: &DistributionParameters,
        fit: &LogNormalFit,
        samples: &[DensitySample],
    ) -> Self {
        Self {
            log_mean: fit.mu,
            log_std_dev: fit.sigma,
            variance: fit.variance(),
            skewness: fit.skewness(),
            personal_percentile: percentile_of(samples, params.personal_value),
            deviation_from_median_pct: deviation_pct(params.personal_value, params.median),
            deviation_from_mean_pct: deviation_pct(params.personal_value, params.mean),
            theoretical_mean: weighted_mean(samples),
            analytic_mean: fit.analytic_mean(),
            analytic_percentile: fit.cdf_percent(params.personal_value),
        }
    }

    pub fn position_band(&self) -> PositionBand {
        PositionBand::from_percentile(self.personal_percentile)
    }
}

/// Coarse reading of the personal percentile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionBand {
    /// Below the 25th percentile.
    VeryLow,
    /// Between the 25th and the 50th percentile.
    Below,
    /// At or above the 50th percentile.
    Above,
}

impl PositionBand {
    pub fn from_percentile(percentile: f64) -> Self {
        if percentile < 25.0 {
            PositionBand::VeryLow
        } else if percentile < 50.0 {
            PositionBand::Below
        } else {
            PositionBand::Above
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PositionBand::VeryLow => "very low",
            PositionBand::Below => "below average",
            PositionBand::Above => "above average",
        }
    }
}

/// Cumulative percent of the first sample whose value is at or above
/// `value`, or 0 if the value lies beyond the sampled range.
pub fn percentile_of(samples: &[DensitySample], value: f64) -> f64 {
    samples
        .iter()
        .find(|s| s.value >= value)
        .map_or(0.0, |s| s.cumulative_percent)
}

/// Signed deviation of `value` from `reference`, in percent. A zero
/// reference yields 0 instead of a non-number.
pub fn deviation_pct(value: f64, reference: f64) -> f64 {
    if reference == 0.0 {
        return 0.0;
    }
    (value - reference) / reference * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<DensitySample> {
        vec![
            DensitySample { value: 100.0, density: 1.0, cumulative_percent: 25.0 },
            DensitySample { value: 200.0, density: 2.0, cumulative_percent: 75.0 },
            DensitySample { value: 300.0, density: 1.0, cumulative_percent: 100.0 },
        ]
    }

    #[test]
    fn percentile_uses_first_sample_at_or_above() {
        let s = samples();
        assert_eq!(percentile_of(&s, 50.0), 25.0);
        assert_eq!(percentile_of(&s, 100.0), 25.0);
        assert_eq!(percentile_of(&s, 150.0), 75.0);
        assert_eq!(percentile_of(&s, 300.0), 100.0);
    }

    #[test]
    fn percentile_beyond_range_is_zero() {
        assert_eq!(percentile_of(&samples(), 301.0), 0.0);
        assert_eq!(percentile_of(&[], 10.0), 0.0);
    }

    #[test]
    fn deviation_reference_values() {
        assert!((deviation_pct(28_000.0, 25_000.0) - 12.0).abs() < 1e-12);
        assert!((deviation_pct(28_000.0, 30_000.0) + 6.666_666_666).abs() < 1e-6);
    }

    #[test]
    fn deviation_from_zero_reference_is_zero() {
        assert_eq!(deviation_pct(28_000.0, 0.0), 0.0);
    }

    #[test]
    fn theoretical_mean_is_density_weighted() {
        assert!((weighted_mean(&samples()) - 200.0).abs() < 1e-12);
    }

    #[test]
    fn position_bands() {
        assert_eq!(PositionBand::from_percentile(0.0), PositionBand::VeryLow);
        assert_eq!(PositionBand::from_percentile(24.9), PositionBand::VeryLow);
        assert_eq!(PositionBand::from_percentile(25.0), PositionBand::Below);
        assert_eq!(PositionBand::from_percentile(49.9), PositionBand::Below);
        assert_eq!(PositionBand::from_percentile(50.0), PositionBand::Above);
    }

    #[test]
    fn band_labels_do_not_name_the_median() {
        // A salary above the median can still sit below the 50th sampled
        // percentile once the range floor truncates the low tail.
        for band in [PositionBand::VeryLow, PositionBand::Below, PositionBand::Above] {
            assert!(!band.label().contains("median"), "{}", band.label());
        }
        assert_eq!(PositionBand::Below.label(), "below average");
        assert_eq!(PositionBand::Above.label(), "above average");
    }

    #[test]
    fn default_metrics_are_zero() {
        let m = DerivedMetrics::default();
        assert_eq!(m.personal_percentile, 0.0);
        assert_eq!(m.theoretical_mean, 0.0);
        assert_eq!(m.log_std_dev, 0.0);
    }
}
