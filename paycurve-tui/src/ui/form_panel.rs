//! Inputs panel: five editable fields plus policy and preset switches.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use paycurve_core::ShapePolicy;

use crate::app::{AppState, Field};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(" Inputs ")
        .title_style(theme::panel_title(true));

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        "[j/k]field [0-9]type [+/-]nudge",
        theme::muted(),
    )));

    let shape_used = app.policy == ShapePolicy::SkewSpread;
    for field in Field::ALL {
        let focused = field == app.form.focus;
        let inactive = field.is_shape_input() && !shape_used;
        let text = app.form.text(field);

        let label_style = if focused {
            theme::accent_bold()
        } else if inactive {
            theme::muted().add_modifier(Modifier::DIM)
        } else {
            theme::neutral()
        };
        let value = if focused {
            format!("{text}_")
        } else if text.is_empty() {
            "-".to_string()
        } else {
            text.to_string()
        };
        let value_style = if focused {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else {
            label_style
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{:>12}: ", field.label()), label_style),
            Span::styled(value, value_style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!("{:>12}: ", "Shape [p]"), theme::muted()),
        Span::styled(app.policy.label(), theme::accent()),
    ]));
    let config = app.engine_config();
    lines.push(Line::from(vec![
        Span::styled(format!("{:>12}: ", "Preset [s]"), theme::muted()),
        Span::styled(preset_label(app), theme::accent()),
        Span::styled(format!(" ({} steps)", config.steps), theme::muted()),
    ]));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn preset_label(app: &AppState) -> &'static str {
    if app.smooth {
        "smooth"
    } else if app.config_file.is_some() {
        "file"
    } else {
        "default"
    }
}
