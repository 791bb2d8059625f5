//! Wizard command implementation
//!
//! Runs the estimation wizard in the alternate screen until the user quits.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, path::PathBuf, time::Duration};

use cost_predictor::{
    config::Config,
    ui::WizardApp,
    wizard::{FloorPlan, Wizard},
};

/// Execute the wizard command
///
/// # Arguments
/// * `cfg` - Loaded configuration
/// * `floor_plan` - Optional floor plan that skips the upload step
pub fn execute(cfg: &Config, floor_plan: Option<PathBuf>) -> Result<()> {
    let mut wizard = Wizard::new(cfg.estimator()?);

    // Validate before touching the terminal so errors print normally
    if let Some(path) = floor_plan {
        wizard.select_floor_plan(FloorPlan::from_path(path)?)?;
    }

    let app = WizardApp::new(wizard, cfg.display.currency_symbol.clone());
    run_wizard(app)
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    Ok(terminal)
}

fn run_wizard(mut app: WizardApp) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            disable_raw_mode()?;
            return Err(e);
        }
    };

    // Main loop
    let result = loop {
        if let Err(e) = terminal.draw(|f| app.render(f)) {
            break Err(e.into());
        }

        match event::poll(Duration::from_millis(100)) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(e) => break Err(e.into()),
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key) {
                    break Ok(());
                }
            }
            Ok(_) => {}
            Err(e) => break Err(e.into()),
        }
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
