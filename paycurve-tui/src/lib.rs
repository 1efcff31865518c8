//! Paycurve TUI: interactive salary distribution explorer.
//!
//! Layout:
//! - Density chart with decile guides, reference lines and a hover cursor
//! - Inputs form (median, mean, salary, optional skewness / spread)
//! - Summary of fit statistics and the salary's position
//! - Decile table

pub mod app;
pub mod input;
pub mod panels;
pub mod persistence;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use theme::Theme;
