//! Machine-readable output: sample CSV and full-result JSON.

use std::path::Path;

use anyhow::{Context, Result};
use paycurve_core::{DensitySample, DistributionResult};

/// Samples as CSV with columns `value,density,cumulative_percent`.
pub fn export_samples_csv(samples: &[DensitySample]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["value", "density", "cumulative_percent"])?;
    for s in samples {
        wtr.write_record([
            &format!("{:.0}", s.value),
            &format!("{:.6}", s.density),
            &format!("{:.6}", s.cumulative_percent),
        ])?;
    }
    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Write the sample CSV to `path`, returning the number of rows written.
pub fn write_samples_csv(samples: &[DensitySample], path: &Path) -> Result<usize> {
    let csv = export_samples_csv(samples)?;
    std::fs::write(path, csv)
        .with_context(|| format!("failed to write samples to {}", path.display()))?;
    Ok(samples.len())
}

/// Pretty JSON of the whole result.
pub fn export_json(result: &DistributionResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("failed to serialize result to JSON")
}
