//! Input parameters for one distribution computation.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Summary statistics the curve is reconstructed from.
///
/// The skewness/spread inputs are only read under
/// [`ShapePolicy::SkewSpread`](crate::config::ShapePolicy::SkewSpread);
/// `mean` is read under every policy because the deviation metrics need it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionParameters {
    /// Annual median salary.
    pub median: f64,
    /// Annual mean salary.
    pub mean: f64,
    /// Salary to locate within the distribution.
    pub personal_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skewness_input: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread_input: Option<f64>,
}

impl DistributionParameters {
    pub fn new(median: f64, mean: f64, personal_value: f64) -> Self {
        Self {
            median,
            mean,
            personal_value,
            skewness_input: None,
            spread_input: None,
        }
    }

    /// Attach the explicit shape inputs used by the skew-spread policy.
    pub fn with_shape_inputs(mut self, skewness: f64, spread: f64) -> Self {
        self.skewness_input = Some(skewness);
        self.spread_input = Some(spread);
        self
    }

    /// Checks shared by every shape policy: finite inputs, positive median
    /// and mean, non-negative personal value.
    pub fn check_common(&self) -> Result<(), DomainError> {
        let finite = [self.median, self.mean, self.personal_value]
            .iter()
            .chain(self.skewness_input.iter())
            .chain(self.spread_input.iter())
            .all(|v| v.is_finite());
        if !finite {
            return Err(DomainError::NonFiniteInput);
        }
        if self.median <= 0.0 {
            return Err(DomainError::NonPositiveMedian(self.median));
        }
        if self.mean <= 0.0 {
            return Err(DomainError::NonPositiveMean(self.mean));
        }
        if self.personal_value < 0.0 {
            return Err(DomainError::NegativePersonalValue(self.personal_value));
        }
        Ok(())
    }
}

impl Default for DistributionParameters {
    /// Zero-initialized, the state of an empty input form.
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_rejected_as_non_positive_median() {
        let params = DistributionParameters::default();
        assert_eq!(
            params.check_common(),
            Err(DomainError::NonPositiveMedian(0.0))
        );
    }

    #[test]
    fn zero_mean_is_rejected() {
        let params = DistributionParameters::new(25_000.0, 0.0, 1.0);
        assert_eq!(params.check_common(), Err(DomainError::NonPositiveMean(0.0)));
    }

    #[test]
    fn nan_shape_input_is_rejected() {
        let params =
            DistributionParameters::new(25_000.0, 30_000.0, 1.0).with_shape_inputs(f64::NAN, 0.1);
        assert_eq!(params.check_common(), Err(DomainError::NonFiniteInput));
    }

    #[test]
    fn valid_parameters_pass() {
        let params = DistributionParameters::new(25_000.0, 30_000.0, 0.0);
        assert!(params.check_common().is_ok());
    }

    #[test]
    fn shape_inputs_are_optional_in_json() {
        let params: DistributionParameters =
            serde_json::from_str(r#"{"median":1.0,"mean":2.0,"personal_value":3.0}"#).unwrap();
        assert!(params.skewness_input.is_none());
        assert!(params.spread_input.is_none());
    }
}
