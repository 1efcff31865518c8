//! Plain-text reports for the `compute` and `deciles` commands.

use paycurve_core::format::{format_amount, format_percent, format_share, Locale};
use paycurve_core::{DistributionParameters, DistributionResult, EngineConfig};

/// Full report: inputs, fit, personal position, decile table.
pub fn render_report(
    params: &DistributionParameters,
    config: &EngineConfig,
    result: &DistributionResult,
    locale: Locale,
) -> String {
    let amount = |v: f64| format_amount(v, locale);
    let mut lines = vec![
        "=== Salary Distribution ===".to_string(),
        format!("Median:         {}", amount(params.median)),
        format!("Mean:           {}", amount(params.mean)),
        format!("Salary:         {}", amount(params.personal_value)),
        format!("Shape policy:   {}", config.shape_policy.label()),
    ];

    if let Some(issue) = &result.issue {
        lines.push(String::new());
        lines.push(format!("WARNING: no distribution for these inputs: {issue}"));
        return join_lines(lines);
    }

    let m = &result.metrics;
    if let Some(range) = &result.range {
        lines.push(format!(
            "Range:          {} to {} ({} steps)",
            amount(range.min),
            amount(range.max),
            range.steps
        ));
    }
    lines.extend([
        String::new(),
        "--- Fit ---".to_string(),
        format!("mu:             {:.4}", m.log_mean),
        format!("sigma:          {:.4}", m.log_std_dev),
        format!("Variance:       {:.4}", m.variance),
        format!("Skewness:       {:.3}", m.skewness),
        format!("Sampled mean:   {}", amount(m.theoretical_mean)),
        format!("Analytic mean:  {}", amount(m.analytic_mean)),
        String::new(),
        "--- Position ---".to_string(),
        format!(
            "Percentile:     {} ({})",
            format_share(m.personal_percentile, locale),
            m.position_band().label()
        ),
        format!("Closed form:    {}", format_share(m.analytic_percentile, locale)),
        format!(
            "vs median:      {}",
            format_percent(m.deviation_from_median_pct, locale)
        ),
        format!(
            "vs mean:        {}",
            format_percent(m.deviation_from_mean_pct, locale)
        ),
        String::new(),
    ]);

    let mut out = join_lines(lines);
    out.push_str(&render_deciles(result, locale));
    out
}

/// Decile table only. Empty table for a degenerate result.
pub fn render_deciles(result: &DistributionResult, locale: Locale) -> String {
    let mut lines = vec![
        format!("{:<6} {:>8} {:>14}", "Decile", "Target", "Salary"),
        "-".repeat(30),
    ];
    lines.extend(result.deciles.iter().map(|d| {
        format!(
            "{:<6} {:>8} {:>14}",
            d.label,
            format_share(d.target_percentile, locale),
            format_amount(d.value, locale)
        )
    }));
    join_lines(lines)
}

/// Newline-terminated block.
fn join_lines(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}
