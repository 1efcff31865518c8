//! Domain errors: inputs for which no curve can be built.
//!
//! These are expected transient states of an interactively edited form
//! (empty fields, mean typed before median, ...). `compute_distribution`
//! absorbs them into a degenerate result; `try_compute` surfaces them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum DomainError {
    #[error("input contains a non-finite number")]
    NonFiniteInput,
    #[error("median must be positive (got {0})")]
    NonPositiveMedian(f64),
    #[error("mean must be positive (got {0})")]
    NonPositiveMean(f64),
    #[error("personal value must not be negative (got {0})")]
    NegativePersonalValue(f64),
    #[error("mean {mean} is below median {median}: no real log-normal shape")]
    MeanBelowMedian { mean: f64, median: f64 },
    #[error("skewness and spread inputs are required by the skew-spread policy")]
    MissingShapeInput,
    #[error("shape parameter sigma must be positive (got {0})")]
    DegenerateShape(f64),
    #[error("sampling range [{min}, {max}] is empty")]
    EmptyRange { min: f64, max: f64 },
    #[error("sampled densities have no usable mass")]
    ZeroMass,
}
