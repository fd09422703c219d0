// cardswitch: one visible card at a time, chosen by buttons

use std::io;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::error;

use cardswitch::cli::Cli;
use cardswitch::logging::init_logging;
use cardswitch::selection::SelectionController;
use cardswitch::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path, cli.verbose)?;
    }

    // Wiring defects are reported before the terminal is taken over
    let registry = cli.build_registry()?;
    let selection = match &cli.initial {
        Some(id) => SelectionController::new(&registry, id)?,
        None => SelectionController::with_first(&registry)?,
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(selection);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(event = "ui.app.failed", error = %err);
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
