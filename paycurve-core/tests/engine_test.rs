//! Integration tests for the distribution engine.
//!
//! Tests:
//! 1. Reference example: median 25k, mean 30k, personal 28k
//! 2. Degenerate inputs: zero/negative/inverted parameters never panic
//! 3. Presets: smooth and skew-spread configurations
//! 4. Output invariants: ordering, cumulative, deciles, idempotence

use paycurve_core::{
    compute_distribution, try_compute, DistributionParameters, DomainError, EngineConfig,
    PositionBand, Preset, RangeFloor, ShapePolicy,
};

fn reference() -> DistributionParameters {
    DistributionParameters::new(25_000.0, 30_000.0, 28_000.0)
}

// ── 1. Reference example ─────────────────────────────────────────────

#[test]
fn reference_example_fit_parameters() {
    let result = compute_distribution(&reference(), &EngineConfig::default());
    let m = result.metrics;

    assert!((m.log_mean - 10.1266).abs() < 1e-4, "mu = {}", m.log_mean);
    assert!((m.log_std_dev - 0.604).abs() < 1e-3, "sigma = {}", m.log_std_dev);
    assert!((m.variance - m.log_std_dev * m.log_std_dev).abs() < 1e-12);
    assert!(m.skewness > 0.0);
}

#[test]
fn reference_example_deviations() {
    let m = compute_distribution(&reference(), &EngineConfig::default()).metrics;
    assert!((m.deviation_from_median_pct - 12.0).abs() < 1e-9);
    assert!((m.deviation_from_mean_pct - (-6.666_666_7)).abs() < 1e-6);
}

#[test]
fn reference_example_percentile_is_below_half_but_not_zero() {
    // 28k is above the median, but the sampled range starts at 20k so the
    // running share at 28k is the truncated one, well under 50%.
    let m = compute_distribution(&reference(), &EngineConfig::default()).metrics;
    assert!(m.personal_percentile > 25.0, "{}", m.personal_percentile);
    assert!(m.personal_percentile < 50.0, "{}", m.personal_percentile);
    assert_eq!(m.position_band(), PositionBand::Below);
}

#[test]
fn reference_example_closed_form_cross_checks() {
    let m = compute_distribution(&reference(), &EngineConfig::default()).metrics;
    // Untruncated CDF at 28k: Phi(ln(1.12) / 0.6039) ~ 57.4%
    assert!((m.analytic_percentile - 57.4).abs() < 0.5, "{}", m.analytic_percentile);
    assert!((m.analytic_mean - 30_000.0).abs() < 1e-6);
}

#[test]
fn reference_example_sample_shape() {
    let result = compute_distribution(&reference(), &EngineConfig::default());
    assert_eq!(result.samples.len(), 151);
    assert_eq!(result.samples[0].value, 20_000.0);
    assert_eq!(result.samples[150].value, 62_500.0);

    let range = result.range.unwrap();
    assert!(result.metrics.theoretical_mean > range.min);
    assert!(result.metrics.theoretical_mean < range.max);
}

// ── 2. Degenerate inputs ─────────────────────────────────────────────

#[test]
fn zero_median_yields_empty_result_and_zero_metrics() {
    let params = DistributionParameters::new(0.0, 30_000.0, 28_000.0);
    let result = compute_distribution(&params, &EngineConfig::default());
    assert!(result.samples.is_empty());
    assert!(result.deciles.is_empty());
    assert_eq!(result.metrics.personal_percentile, 0.0);
    assert_eq!(result.metrics.deviation_from_median_pct, 0.0);
    assert_eq!(result.metrics.deviation_from_mean_pct, 0.0);
    assert_eq!(result.metrics.theoretical_mean, 0.0);
    assert_eq!(result.metrics.skewness, 0.0);
}

#[test]
fn all_zero_form_is_degenerate_not_fatal() {
    let result = compute_distribution(&DistributionParameters::default(), &EngineConfig::default());
    assert!(result.is_degenerate());
}

#[test]
fn negative_mean_is_domain_error() {
    let params = DistributionParameters::new(25_000.0, -1.0, 28_000.0);
    assert_eq!(
        try_compute(&params, &EngineConfig::default()),
        Err(DomainError::NonPositiveMean(-1.0))
    );
}

#[test]
fn mean_below_median_is_degenerate() {
    let params = DistributionParameters::new(30_000.0, 25_000.0, 28_000.0);
    let result = compute_distribution(&params, &EngineConfig::default());
    assert!(matches!(result.issue, Some(DomainError::MeanBelowMedian { .. })));
    assert!(result.samples.is_empty());
}

#[test]
fn tiny_median_under_legacy_floor_is_empty_range() {
    let params = DistributionParameters::new(5_000.0, 6_000.0, 5_500.0);
    let result = compute_distribution(&params, &EngineConfig::default());
    assert!(matches!(result.issue, Some(DomainError::EmptyRange { .. })));
}

#[test]
fn non_finite_input_is_degenerate() {
    let params = DistributionParameters::new(f64::INFINITY, 30_000.0, 28_000.0);
    let result = compute_distribution(&params, &EngineConfig::default());
    assert_eq!(result.issue, Some(DomainError::NonFiniteInput));
}

#[test]
fn personal_value_above_range_has_zero_percentile() {
    let params = DistributionParameters::new(25_000.0, 30_000.0, 1_000_000.0);
    let result = compute_distribution(&params, &EngineConfig::default());
    assert!(!result.is_degenerate());
    assert_eq!(result.metrics.personal_percentile, 0.0);
    assert_eq!(result.metrics.position_band(), PositionBand::VeryLow);
}

#[test]
fn personal_value_below_range_takes_first_sample() {
    let params = DistributionParameters::new(25_000.0, 30_000.0, 0.0);
    let result = compute_distribution(&params, &EngineConfig::default());
    assert_eq!(
        result.metrics.personal_percentile,
        result.samples[0].cumulative_percent
    );
}

// ── 3. Presets ───────────────────────────────────────────────────────

#[test]
fn smooth_preset_samples_at_unit_resolution() {
    let result = compute_distribution(&reference(), &Preset::Smooth.config());
    let range = result.range.unwrap();
    assert_eq!(range.min, 21_203.0);
    assert_eq!(range.steps, 62_500 - 21_203);
    assert!(result.samples.windows(2).all(|w| w[1].value > w[0].value));
    assert_eq!(result.deciles.len(), 9);
}

#[test]
fn smooth_and_coarse_agree_roughly_on_percentile() {
    let mut config = EngineConfig::default();
    let coarse = compute_distribution(&reference(), &config).metrics.personal_percentile;
    config.steps = 10_000;
    let fine = compute_distribution(&reference(), &config).metrics.personal_percentile;
    assert!((coarse - fine).abs() < 2.0, "coarse {coarse} vs fine {fine}");
}

#[test]
fn skew_spread_policy_uses_shape_inputs() {
    let params = reference().with_shape_inputs(0.4, 0.25);
    let result = compute_distribution(&params, &EngineConfig::skew_spread());
    assert!(!result.is_degenerate());
    assert!((result.metrics.log_std_dev - 0.5).abs() < 1e-12);
    // Mean still drives the deviation metric.
    assert!((result.metrics.deviation_from_mean_pct - (-6.666_666_7)).abs() < 1e-6);
}

#[test]
fn skew_spread_policy_ignores_mean_below_median() {
    let params = DistributionParameters::new(30_000.0, 25_000.0, 28_000.0).with_shape_inputs(0.5, 0.0);
    let result = compute_distribution(&params, &EngineConfig::skew_spread());
    assert!(!result.is_degenerate());
}

#[test]
fn skew_spread_without_inputs_is_degenerate() {
    let result = compute_distribution(&reference(), &EngineConfig::skew_spread());
    assert_eq!(result.issue, Some(DomainError::MissingShapeInput));
}

#[test]
fn skew_spread_overflowing_sigma_is_degenerate() {
    let params = reference().with_shape_inputs(30.0, 0.0);
    let result = compute_distribution(&params, &EngineConfig::skew_spread());
    assert_eq!(result.issue, Some(DomainError::DegenerateShape(30.0)));
    assert!(result.samples.is_empty());
    assert_eq!(result.metrics.skewness, 0.0);
}

#[test]
fn wide_skew_spread_result_reads_back_from_json() {
    for (skewness, spread) in [(30.0, 0.0), (3.0, 0.5), (21.0, 0.0)] {
        let params = reference().with_shape_inputs(skewness, spread);
        let result = compute_distribution(&params, &EngineConfig::skew_spread());
        let m = &result.metrics;
        for value in [m.skewness, m.variance, m.analytic_mean, m.theoretical_mean] {
            assert!(value.is_finite(), "({skewness}, {spread}) gave {value}");
        }

        let json = serde_json::to_string(&result).unwrap();
        let back: paycurve_core::DistributionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.issue, result.issue);
        assert_eq!(back.samples.len(), result.samples.len());
    }
}

#[test]
fn fixed_floor_config_from_toml() {
    let config = EngineConfig::from_toml_str(
        r#"
shape_policy = "MEAN_RATIO"
steps = 300

[range_floor]
type = "FIXED"
amount = 15000.0
"#,
    )
    .unwrap();
    assert_eq!(config.range_floor, RangeFloor::Fixed { amount: 15_000.0 });
    assert_eq!(config.shape_policy, ShapePolicy::MeanRatio);
    let result = compute_distribution(&reference(), &config);
    assert_eq!(result.samples.len(), 301);
    assert_eq!(result.samples[0].value, 15_000.0);
}

// ── 4. Output invariants ─────────────────────────────────────────────

#[test]
fn samples_ascend_and_cumulative_ends_at_hundred() {
    let result = compute_distribution(&reference(), &EngineConfig::default());
    assert!(result.samples.windows(2).all(|w| w[1].value > w[0].value));
    assert!(result
        .samples
        .windows(2)
        .all(|w| w[1].cumulative_percent >= w[0].cumulative_percent));
    let last = result.samples.last().unwrap();
    assert!((last.cumulative_percent - 100.0).abs() < 1e-9);
}

#[test]
fn nine_strictly_increasing_deciles() {
    let result = compute_distribution(&reference(), &EngineConfig::default());
    assert_eq!(result.deciles.len(), 9);
    for (i, d) in result.deciles.iter().enumerate() {
        assert_eq!(d.label, format!("D{}", i + 1));
        assert_eq!(d.target_percentile, (i as f64 + 1.0) * 10.0);
    }
    assert!(result.deciles.windows(2).all(|w| w[1].value > w[0].value));
}

#[test]
fn computation_is_idempotent() {
    let config = EngineConfig::default();
    let a = compute_distribution(&reference(), &config);
    let b = compute_distribution(&reference(), &config);
    assert_eq!(a, b);
}

#[test]
fn result_serializes_to_json() {
    let result = compute_distribution(&reference(), &EngineConfig::default());
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"cumulative_percent\""));
    assert!(json.contains("\"D5\""));

    let degenerate = compute_distribution(&DistributionParameters::default(), &EngineConfig::default());
    let json = serde_json::to_string(&degenerate).unwrap();
    assert!(json.contains("non_positive_median"));
}
