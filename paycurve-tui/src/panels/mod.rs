//! Buffer-level widgets
//!
//! - DensityChart: filled curve, reference lines, hover tooltip
//! - DecileTable: D1..D9 thresholds

pub mod decile_table;
pub mod density_chart;

pub use decile_table::DecileTable;
pub use density_chart::DensityChart;
