//! Input dispatch: overlays first, then form / engine / chart keys; mouse
//! movement over the plot drives the hover cursor.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::app::{AppState, Overlay};
use crate::ui;

pub fn handle_event(app: &mut AppState, event: Event) {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Resize(..) => app.cursor = None,
        _ => {}
    }
}

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.running = false;
        return;
    }

    // 1. Overlays consume input first.
    if app.overlay == Overlay::Help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.overlay = Overlay::None;
        }
        return;
    }

    // 2. Everything else.
    let plot_width = ui::plot_area(app.frame_area).width;
    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('?') => app.overlay = Overlay::Help,

        // Form navigation
        KeyCode::Tab | KeyCode::Char('j') | KeyCode::Down => {
            app.form.focus = app.form.focus.next();
        }
        KeyCode::BackTab | KeyCode::Char('k') | KeyCode::Up => {
            app.form.focus = app.form.focus.prev();
        }

        // Form editing
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
            if app.form.push_char(c) {
                app.recompute();
            }
        }
        KeyCode::Backspace => {
            if app.form.backspace() {
                app.recompute();
            }
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            if app.form.nudge(1.0) {
                app.recompute();
            }
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            if app.form.nudge(-1.0) {
                app.recompute();
            }
        }

        // Engine
        KeyCode::Char('p') => app.toggle_policy(),
        KeyCode::Char('s') => app.toggle_smooth(),
        KeyCode::Char('L') => {
            app.toggle_locale();
            app.recompute();
        }

        // Chart cursor
        KeyCode::Char('h') | KeyCode::Left => app.move_cursor(-1, plot_width),
        KeyCode::Char('l') | KeyCode::Right => app.move_cursor(1, plot_width),
        KeyCode::Esc => app.cursor = None,

        _ => {}
    }
}

/// Map pointer motion onto a plot column; leaving the plot hides the cursor.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    if !matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
        return;
    }
    let plot = ui::plot_area(app.frame_area);
    let inside = plot.contains(Position::new(mouse.column, mouse.row));
    app.cursor = if inside && !app.result.samples.is_empty() {
        Some(mouse.column - plot.x)
    } else {
        None
    };
}
