//! Paycurve TUI: type summary statistics, watch the curve redraw.

use std::fs::File;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use paycurve_core::EngineConfig;
use paycurve_tui::app::AppState;
use paycurve_tui::{input, persistence, ui};

/// Log to a file only when `PAYCURVE_LOG` is set; stderr belongs to the
/// alternate screen.
fn init_tracing() -> Result<()> {
    let Ok(filter) = EnvFilter::try_from_env("PAYCURVE_LOG") else {
        return Ok(());
    };
    let path = persistence::config_path("paycurve-tui.log");
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Base engine config: `PAYCURVE_CONFIG` if set, else the default preset.
fn base_config() -> Result<(EngineConfig, Option<PathBuf>)> {
    let Some(path) = std::env::var_os("PAYCURVE_CONFIG").map(PathBuf::from) else {
        return Ok((EngineConfig::default(), None));
    };
    let config = EngineConfig::load(&path)
        .with_context(|| format!("failed to load engine config {}", path.display()))?;
    info!(path = %path.display(), "loaded engine config");
    Ok((config, Some(path)))
}

fn main() -> Result<()> {
    init_tracing()?;
    let (config, config_file) = base_config()?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    let state_path = persistence::config_path("state.json");
    let mut app = AppState::new(config);
    app.config_file = config_file;
    persistence::apply(&mut app, persistence::load(&state_path));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    if let Err(e) = persistence::save(&state_path, &persistence::extract(&app)) {
        warn!(error = %e, "failed to save state");
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            app.frame_area = f.area();
            ui::draw(f, app);
        })?;

        // 50ms poll keeps the loop responsive without spinning.
        if event::poll(Duration::from_millis(50))? {
            input::handle_event(app, event::read()?);
        }
    }
    Ok(())
}
