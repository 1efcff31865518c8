//! Log-normal shape fit and closed-form identities.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, LogNormal};

use crate::config::ShapePolicy;
use crate::error::DomainError;
use crate::params::DistributionParameters;

/// Location (mu) and shape (sigma) of a log-normal curve on the log scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogNormalFit {
    pub mu: f64,
    pub sigma: f64,
}

impl LogNormalFit {
    /// Derive mu and sigma from the parameters under the given policy.
    ///
    /// mu is always ln(median). sigma comes from either the mean/median
    /// ratio or the explicit skewness/spread inputs; both paths require a
    /// strictly positive sigma whose closed-form moments stay finite.
    pub fn fit(params: &DistributionParameters, policy: ShapePolicy) -> Result<Self, DomainError> {
        params.check_common()?;
        let mu = params.median.ln();

        let sigma = match policy {
            ShapePolicy::MeanRatio => {
                if params.mean < params.median {
                    return Err(DomainError::MeanBelowMedian {
                        mean: params.mean,
                        median: params.median,
                    });
                }
                (2.0 * (params.mean.ln() - mu)).sqrt()
            }
            ShapePolicy::SkewSpread => match (params.skewness_input, params.spread_input) {
                (Some(skewness), Some(spread)) => skewness * (1.0 + spread),
                _ => return Err(DomainError::MissingShapeInput),
            },
        };

        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(DomainError::DegenerateShape(sigma));
        }
        let fit = Self { mu, sigma };
        // e^{1.5 σ²} overflows well before sigma itself does.
        if !(fit.skewness().is_finite() && fit.analytic_mean().is_finite()) {
            return Err(DomainError::DegenerateShape(sigma));
        }
        Ok(fit)
    }

    /// Probability density at `x` (unscaled). Zero for non-positive `x`.
    pub fn pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let z = (x.ln() - self.mu) / self.sigma;
        (1.0 / (x * self.sigma * (2.0 * std::f64::consts::PI).sqrt())) * (-0.5 * z * z).exp()
    }

    /// sigma squared.
    pub fn variance(&self) -> f64 {
        self.sigma * self.sigma
    }

    /// (e^{σ²} + 2) * sqrt(e^{σ²} - 1)
    pub fn skewness(&self) -> f64 {
        let e = self.variance().exp();
        (e + 2.0) * (e - 1.0).sqrt()
    }

    /// exp(mu + sigma² / 2), the mean of the untruncated curve.
    pub fn analytic_mean(&self) -> f64 {
        (self.mu + self.variance() / 2.0).exp()
    }

    /// Closed-form CDF at `x` as a percentage (0..=100).
    pub fn cdf_percent(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        match LogNormal::new(self.mu, self.sigma) {
            Ok(dist) => dist.cdf(x) * 100.0,
            Err(_) => 0.0,
        }
    }
}
