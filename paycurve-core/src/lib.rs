//! Paycurve Core: log-normal salary distribution engine.
//!
//! Reconstructs a log-normal density from summary statistics and derives:
//! - An ordered, discretized density curve with its running cumulative share
//! - Decile breakpoints (D1..D9) read off that curve
//! - Where a personal salary falls: percentile, deviation from median/mean
//! - Shape statistics: mu, sigma, variance, analytic skewness
//!
//! Everything is a pure function of (parameters, config). Renderers consume
//! [`DistributionResult`] and use [`scale`] and [`format`] for display.

pub mod config;
pub mod deciles;
pub mod engine;
pub mod error;
pub mod format;
pub mod lognormal;
pub mod metrics;
pub mod params;
pub mod sampling;
pub mod scale;

pub use config::{ConfigError, EngineConfig, Preset, RangeFloor, ShapePolicy};
pub use deciles::{extract_deciles, DecileEntry};
pub use engine::{compute_distribution, try_compute, DistributionEngine, DistributionResult};
pub use error::DomainError;
pub use format::Locale;
pub use lognormal::LogNormalFit;
pub use metrics::{DerivedMetrics, PositionBand};
pub use params::DistributionParameters;
pub use sampling::{DensitySample, SampleRange};
pub use scale::{nearest_sample, ValueScale};

#[cfg(test)]
mod send_sync_checks {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn result_types_are_send_sync() {
        assert_send::<DistributionResult>();
        assert_sync::<DistributionResult>();
        assert_send::<DensitySample>();
        assert_sync::<DensitySample>();
        assert_send::<DecileEntry>();
        assert_sync::<DecileEntry>();
        assert_send::<DerivedMetrics>();
        assert_sync::<DerivedMetrics>();
    }

    #[test]
    fn config_types_are_send_sync() {
        assert_send::<EngineConfig>();
        assert_sync::<EngineConfig>();
        assert_send::<DistributionEngine>();
        assert_sync::<DistributionEngine>();
        assert_send::<DistributionParameters>();
        assert_sync::<DistributionParameters>();
    }

    #[test]
    fn error_types_are_send_sync() {
        assert_send::<DomainError>();
        assert_sync::<DomainError>();
        assert_send::<ConfigError>();
        assert_sync::<ConfigError>();
    }
}
