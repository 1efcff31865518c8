//! Summary panel: fit statistics and where the personal salary sits.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use paycurve_core::format::{format_amount, format_percent, format_share};

use crate::app::AppState;
use crate::theme::{self, Theme};

pub fn render(f: &mut Frame, area: Rect, app: &AppState, t: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false))
        .title(" Summary ")
        .title_style(theme::panel_title(false));

    let lines = match &app.result.issue {
        Some(issue) => vec![
            Line::from(Span::styled("No distribution for these inputs:", theme::warning())),
            Line::from(Span::styled(issue.to_string(), theme::negative())),
            Line::from(""),
            Line::from(Span::styled(
                "Edit the fields on the left; the chart updates as you type.",
                theme::muted(),
            )),
        ],
        None => metric_lines(app, t),
    };

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn metric_lines(app: &AppState, t: &Theme) -> Vec<Line<'static>> {
    let m = &app.result.metrics;
    let locale = app.locale;
    let band = m.position_band();

    vec![
        row(
            "Percentile",
            format_share(m.personal_percentile, locale),
            Style::default().fg(t.band_color(band)),
        ),
        row(
            "Position",
            band.label().to_string(),
            Style::default().fg(t.band_color(band)),
        ),
        row("Closed form", format_share(m.analytic_percentile, locale), theme::muted()),
        row(
            "vs median",
            format_percent(m.deviation_from_median_pct, locale),
            Style::default().fg(t.deviation_color(m.deviation_from_median_pct)),
        ),
        row(
            "vs mean",
            format_percent(m.deviation_from_mean_pct, locale),
            Style::default().fg(t.deviation_color(m.deviation_from_mean_pct)),
        ),
        Line::from(""),
        row("mu / sigma", format!("{:.4} / {:.4}", m.log_mean, m.log_std_dev), theme::accent()),
        row("Variance", format!("{:.4}", m.variance), theme::accent()),
        row("Skewness", format!("{:.3}", m.skewness), theme::accent()),
        row("Sampled mean", format_amount(m.theoretical_mean, locale), theme::accent()),
        row("Analytic mean", format_amount(m.analytic_mean, locale), theme::muted()),
    ]
}

fn row(label: &str, value: String, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:>14}: "), theme::muted()),
        Span::styled(value, style),
    ])
}
