//! Decile breakpoints read off the cumulative curve.

use serde::{Deserialize, Serialize};

use crate::sampling::DensitySample;

/// One decile threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecileEntry {
    /// "D1" through "D9".
    pub label: String,
    /// Salary of the first sample whose cumulative share reaches the target.
    pub value: f64,
    /// 10, 20, ..., 90.
    pub target_percentile: f64,
}

/// Scan the samples once per target (10% .. 90%) and keep the first sample
/// reaching it. Targets the curve never reaches are omitted, not synthesized.
pub fn extract_deciles(samples: &[DensitySample]) -> Vec<DecileEntry> {
    (1..=9u32)
        .filter_map(|i| {
            let target = f64::from(i * 10);
            samples
                .iter()
                .find(|s| s.cumulative_percent >= target)
                .map(|s| DecileEntry {
                    label: format!("D{i}"),
                    value: s.value,
                    target_percentile: target,
                })
        })
        .collect()
}
