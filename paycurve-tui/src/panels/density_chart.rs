//! Density chart - filled log-normal curve with reference lines
//!
//! Renders, straight into the buffer:
//! - Area fill, one column per plot cell, eighth blocks for sub-cell height
//! - Solid lines at the personal salary, median and mean
//! - Dashed decile lines, labelled along the top row
//! - Compact thousands ("30k") along the bottom row
//! - Hover cursor with a tooltip for the nearest sample

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use paycurve_core::format::{
    format_amount, format_compact_thousands, format_density, format_share, Locale,
};
use paycurve_core::{
    nearest_sample, DensitySample, DistributionParameters, DistributionResult, ValueScale,
};

use crate::theme::Theme;

/// Partial blocks indexed by eighths (index 0 unused).
const EIGHTHS: [&str; 8] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇"];
const FULL: &str = "█";
const SOLID: &str = "│";
const DASHED: &str = "┆";
const CURSOR: &str = "┃";

/// Density chart widget.
pub struct DensityChart<'a> {
    result: &'a DistributionResult,
    params: &'a DistributionParameters,
    theme: &'a Theme,
    locale: Locale,
    cursor: Option<u16>,
}

impl<'a> DensityChart<'a> {
    pub fn new(
        result: &'a DistributionResult,
        params: &'a DistributionParameters,
        theme: &'a Theme,
    ) -> Self {
        Self {
            result,
            params,
            theme,
            locale: Locale::default(),
            cursor: None,
        }
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Hovered column, relative to the left edge of [`Self::plot_area`].
    pub fn cursor(mut self, cursor: Option<u16>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Cells the curve is drawn in, for a widget rendered into `area`:
    /// inside the border, below the decile label row, above the axis row.
    pub fn plot_area(area: Rect) -> Rect {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        Rect::new(
            inner.x,
            inner.y.saturating_add(1),
            inner.width,
            inner.height.saturating_sub(2),
        )
    }

    /// Sample shown for plot column `cursor` out of `width` columns.
    pub fn hovered(
        result: &DistributionResult,
        cursor: u16,
        width: u16,
    ) -> Option<&DensitySample> {
        let scale = ValueScale::from_samples(&result.samples)?;
        if cursor >= width {
            return None;
        }
        nearest_sample(&result.samples, scale.value_at_cell(cursor, width))
    }

    fn title(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                " Density ",
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("{SOLID}you "), Style::default().fg(self.theme.warning)),
            Span::styled(format!("{SOLID}median "), Style::default().fg(self.theme.neutral)),
            Span::styled(
                format!("{SOLID}mean "),
                Style::default().fg(self.theme.text_secondary),
            ),
            Span::styled(format!("{DASHED}deciles "), Style::default().fg(self.theme.muted)),
        ])
    }
}

impl<'a> Widget for DensityChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.neutral))
            .style(Style::default().bg(self.theme.background));
        let inner = block.inner(area);
        block.render(area, buf);

        let samples = &self.result.samples;
        let Some(scale) = ValueScale::from_samples(samples) else {
            let msg = match &self.result.issue {
                Some(issue) => format!("No curve: {issue}"),
                None => "No curve".to_string(),
            };
            if inner.height > 0 {
                buf.set_stringn(
                    inner.x,
                    inner.y,
                    msg,
                    inner.width as usize,
                    Style::default().fg(self.theme.warning),
                );
            }
            return;
        };

        let plot = Self::plot_area(area);
        if plot.width < 10 || plot.height < 2 {
            return;
        }
        let width = plot.width;
        let max_density = samples.iter().map(|s| s.density).fold(0.0_f64, f64::max);
        if max_density <= 0.0 {
            return;
        }

        // Area fill. `filled[c]` is the number of rows touched in column c.
        let area_style = Style::default().fg(self.theme.accent);
        let mut filled = vec![0u16; width as usize];
        for c in 0..width {
            let Some(sample) = nearest_sample(samples, scale.value_at_cell(c, width)) else {
                continue;
            };
            let eighths = (sample.density / max_density * f64::from(plot.height) * 8.0).round() as u32;
            let full = (eighths / 8).min(u32::from(plot.height)) as u16;
            let rem = (eighths % 8) as usize;
            let x = plot.x + c;
            for r in 0..full {
                set_cell(buf, x, plot.bottom() - 1 - r, FULL, area_style);
            }
            let mut rows = full;
            if rem > 0 && full < plot.height {
                set_cell(buf, x, plot.bottom() - 1 - full, EIGHTHS[rem], area_style);
                rows += 1;
            }
            filled[c as usize] = rows;
        }

        // Dashed decile lines above the fill, labels on the top row.
        let decile_style = Style::default().fg(self.theme.muted);
        let mut next_free = inner.x;
        for d in &self.result.deciles {
            let Some(c) = scale.cell_of(d.value, width) else {
                continue;
            };
            let x = plot.x + c;
            for y in plot.y..(plot.bottom() - filled[c as usize]) {
                set_cell(buf, x, y, DASHED, decile_style);
            }
            let len = d.label.len() as u16;
            if x >= next_free && x + len <= inner.right() {
                buf.set_string(x, inner.y, &d.label, decile_style);
                next_free = x + len + 1;
            }
        }

        // Solid reference lines; the personal line is drawn last, on top.
        let markers = [
            (self.params.median, self.theme.neutral),
            (self.params.mean, self.theme.text_secondary),
            (self.params.personal_value, self.theme.warning),
        ];
        for (value, color) in markers {
            if let Some(c) = scale.cell_of(value, width) {
                let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
                for y in plot.y..plot.bottom() {
                    set_cell(buf, plot.x + c, y, SOLID, style);
                }
            }
        }

        self.render_axis(buf, inner, plot, &scale);

        if let Some(c) = self.cursor.filter(|&c| c < width) {
            let x = plot.x + c;
            let style = Style::default().fg(self.theme.text_primary);
            for y in plot.y..(plot.bottom() - filled[c as usize]) {
                set_cell(buf, x, y, CURSOR, style);
            }
            if let Some(sample) = Self::hovered(self.result, c, width) {
                self.render_tooltip(buf, inner, plot, x, sample);
            }
        }
    }
}

impl<'a> DensityChart<'a> {
    fn render_axis(&self, buf: &mut Buffer, inner: Rect, plot: Rect, scale: &ValueScale) {
        let y = plot.bottom();
        if y >= inner.bottom() {
            return;
        }
        let style = Style::default().fg(self.theme.muted);
        let ticks = (plot.width / 12).max(1);
        let mut next_free = inner.x;
        for i in 0..=ticks {
            let c = (f64::from(i) / f64::from(ticks) * f64::from(plot.width - 1)).round() as u16;
            let label = format_compact_thousands(scale.value_at_cell(c, plot.width));
            let len = label.len() as u16;
            let x = (plot.x + c)
                .saturating_sub(len / 2)
                .clamp(inner.x, inner.right().saturating_sub(len));
            if x >= next_free {
                buf.set_string(x, y, &label, style);
                next_free = x + len + 1;
            }
        }
    }

    fn render_tooltip(&self, buf: &mut Buffer, inner: Rect, plot: Rect, x: u16, sample: &DensitySample) {
        let lines = [
            format!("Salary     {}", format_amount(sample.value, self.locale)),
            format!("Density    {}", format_density(sample.density)),
            format!(
                "Percentile {}",
                format_share(sample.cumulative_percent, self.locale)
            ),
        ];
        let text_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
        let w = text_width + 2;
        let h = lines.len() as u16 + 2;
        if w > inner.width || h > inner.height {
            return;
        }
        let left = if x + 2 + w <= inner.right() {
            x + 2
        } else {
            x.saturating_sub(w + 1).max(inner.x)
        };
        let rect = Rect::new(left, plot.y, w, h.min(inner.bottom() - plot.y));

        Clear.render(rect, buf);
        let text: Vec<Line> = lines
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(self.theme.text_primary))))
            .collect();
        Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.accent))
                    .style(Style::default().bg(self.theme.background)),
            )
            .render(rect, buf);
    }
}

/// Overwrite one cell, keeping its background. Off-buffer positions are skipped.
fn set_cell(buf: &mut Buffer, x: u16, y: u16, symbol: &str, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(symbol).set_style(style);
    }
}
