//! Decile table - D1..D9 thresholds with the personal bracket highlighted

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

use paycurve_core::format::{format_amount, format_share, Locale};
use paycurve_core::DecileEntry;

use crate::theme::Theme;

/// Decile table widget
pub struct DecileTable<'a> {
    deciles: &'a [DecileEntry],
    personal_value: f64,
    theme: &'a Theme,
    locale: Locale,
}

impl<'a> DecileTable<'a> {
    pub fn new(deciles: &'a [DecileEntry], personal_value: f64, theme: &'a Theme) -> Self {
        Self {
            deciles,
            personal_value,
            theme,
            locale: Locale::default(),
        }
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Index of the first decile at or above the personal value.
    pub fn bracket(deciles: &[DecileEntry], personal_value: f64) -> Option<usize> {
        deciles.iter().position(|d| d.value >= personal_value)
    }
}

impl<'a> Widget for DecileTable<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Deciles ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.neutral))
            .style(Style::default().bg(self.theme.background));

        let header = Row::new(["", "Share", "Salary"].map(|h| {
            Cell::from(h).style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
        }));

        let bracket = Self::bracket(self.deciles, self.personal_value);
        let rows = self.deciles.iter().enumerate().map(|(i, d)| {
            let style = if Some(i) == bracket {
                Style::default()
                    .fg(self.theme.warning)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.text_primary)
            };
            Row::new(vec![
                Cell::from(d.label.clone()),
                Cell::from(format_share(d.target_percentile, self.locale)),
                Cell::from(format_amount(d.value, self.locale)),
            ])
            .style(style)
        });

        let widths = [
            Constraint::Length(3),
            Constraint::Length(8),
            Constraint::Min(8),
        ];
        Table::new(rows, widths)
            .header(header)
            .block(block)
            .render(area, buf);
    }
}
