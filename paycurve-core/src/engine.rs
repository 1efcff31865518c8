//! Distribution engine: parameters in, curve + deciles + metrics out.
//!
//! Pipeline per call:
//! 1. Fit mu/sigma under the configured shape policy
//! 2. Resolve the sampled salary range
//! 3. Sample the scaled density and the running cumulative share
//! 4. Read deciles off the cumulative curve
//! 5. Derive metrics for the personal value
//!
//! Each call is a pure function of its inputs; the caller owns the result.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EngineConfig;
use crate::deciles::{extract_deciles, DecileEntry};
use crate::error::DomainError;
use crate::lognormal::LogNormalFit;
use crate::metrics::DerivedMetrics;
use crate::params::DistributionParameters;
use crate::sampling::{generate_samples, DensitySample, SampleRange};

/// Output of one computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionResult {
    /// Ascending by value; empty when the inputs have no curve.
    pub samples: Vec<DensitySample>,
    /// At most nine entries, ascending.
    pub deciles: Vec<DecileEntry>,
    pub metrics: DerivedMetrics,
    pub fit: Option<LogNormalFit>,
    pub range: Option<SampleRange>,
    /// Why the result is degenerate, if it is.
    pub issue: Option<DomainError>,
}

impl DistributionResult {
    /// Empty curve, zero metrics, with the reason recorded.
    pub fn degenerate(issue: DomainError) -> Self {
        Self {
            samples: Vec::new(),
            deciles: Vec::new(),
            metrics: DerivedMetrics::default(),
            fit: None,
            range: None,
            issue: Some(issue),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.issue.is_some()
    }
}

/// Holds a configuration; otherwise stateless.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistributionEngine {
    config: EngineConfig,
}

impl DistributionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn compute(&self, params: &DistributionParameters) -> DistributionResult {
        compute_distribution(params, &self.config)
    }

    pub fn try_compute(
        &self,
        params: &DistributionParameters,
    ) -> Result<DistributionResult, DomainError> {
        try_compute(params, &self.config)
    }
}

/// Compute the full result, absorbing domain errors into a degenerate
/// result. Never panics on any input.
pub fn compute_distribution(
    params: &DistributionParameters,
    config: &EngineConfig,
) -> DistributionResult {
    match try_compute(params, config) {
        Ok(result) => result,
        Err(issue) => {
            debug!(%issue, ?params, "degenerate distribution input");
            DistributionResult::degenerate(issue)
        }
    }
}

/// Compute the full result, surfacing domain errors.
pub fn try_compute(
    params: &DistributionParameters,
    config: &EngineConfig,
) -> Result<DistributionResult, DomainError> {
    let fit = LogNormalFit::fit(params, config.shape_policy)?;
    let range = SampleRange::resolve(params.median, config)?;
    let samples = generate_samples(&fit, &range, config.density_scale)?;
    let deciles = extract_deciles(&samples);
    let metrics = DerivedMetrics::compute(params, &fit, &samples);

    debug!(
        mu = fit.mu,
        sigma = fit.sigma,
        samples = samples.len(),
        deciles = deciles.len(),
        percentile = metrics.personal_percentile,
        "fitted distribution"
    );

    Ok(DistributionResult {
        samples,
        deciles,
        metrics,
        fit: Some(fit),
        range: Some(range),
        issue: None,
    })
}
