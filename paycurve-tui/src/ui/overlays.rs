//! Help overlay: key bindings.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::theme;
use crate::ui::centered_rect;

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keys [Esc]close ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Form");
    key(&mut lines, "Tab / j / Down", "Next field");
    key(&mut lines, "S-Tab / k / Up", "Previous field");
    key(&mut lines, "0-9 .", "Type into the field");
    key(&mut lines, "Backspace", "Delete last character");
    key(&mut lines, "+ / -", "Nudge the value up / down");
    lines.push(Line::from(""));

    section(&mut lines, "Engine");
    key(&mut lines, "p", "Switch shape policy (mean ratio / skew x spread)");
    key(&mut lines, "s", "Toggle smooth preset (unit-resolution curve)");
    key(&mut lines, "L", "Switch number format (fr / en)");
    lines.push(Line::from(""));

    section(&mut lines, "Chart");
    key(&mut lines, "mouse", "Hover to inspect the nearest sample");
    key(&mut lines, "h / l", "Move the cursor left / right");
    key(&mut lines, "Esc", "Hide the cursor");
    lines.push(Line::from(""));

    section(&mut lines, "General");
    key(&mut lines, "?", "Toggle this help");
    key(&mut lines, "q / Ctrl-C", "Quit");

    f.render_widget(Paragraph::new(lines).block(block), popup);
}

fn section(lines: &mut Vec<Line<'_>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key(lines: &mut Vec<Line<'_>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {keys:>16}  "), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
