//! Top-level UI layout: chart on top, form / summary / deciles below,
//! one-line status bar.

pub mod form_panel;
pub mod overlays;
pub mod status_bar;
pub mod summary_panel;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::app::{AppState, Overlay};
use crate::panels::{DecileTable, DensityChart};
use crate::theme::Theme;

/// Panel rectangles for one frame. Shared by drawing and mouse mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub chart: Rect,
    pub form: Rect,
    pub summary: Rect,
    pub deciles: Rect,
    pub status: Rect,
}

pub fn layout(area: Rect) -> AppLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Min(12)])
        .split(rows[0]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(36),
            Constraint::Fill(1),
            Constraint::Length(30),
        ])
        .split(main[1]);

    AppLayout {
        chart: main[0],
        form: bottom[0],
        summary: bottom[1],
        deciles: bottom[2],
        status: rows[1],
    }
}

/// Plot cells of the density chart for a frame of size `area`.
pub fn plot_area(area: Rect) -> Rect {
    DensityChart::plot_area(layout(area).chart)
}

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let area = f.area();
    let l = layout(area);
    let theme = Theme::default();
    let params = app.params();

    let chart = DensityChart::new(&app.result, &params, &theme)
        .locale(app.locale)
        .cursor(app.cursor);
    f.render_widget(chart, l.chart);

    form_panel::render(f, l.form, app);
    summary_panel::render(f, l.summary, app, &theme);
    f.render_widget(
        DecileTable::new(&app.result.deciles, params.personal_value, &theme).locale(app.locale),
        l.deciles,
    );
    status_bar::render(f, l.status, app);

    if app.overlay == Overlay::Help {
        overlays::render_help(f, area);
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
