mod config;
mod format;
mod models;
mod ui;

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::config::{Config, config_path, load_config, save_config};
use crate::models::AbacusState;
use crate::ui::{App, render};

fn main() -> io::Result<()> {
    // Preferences (~/.config/soroban/config.toml)
    let path = config_path()?;
    let config = load_config(&path)?;

    // The one abacus instance, alive for the whole process
    let mut app = App::new(AbacusState::new(config.mode));

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Keep the mode preference for the next launch
    let config = Config {
        mode: app.abacus.mode(),
    };
    save_config(&config, &path)?;
    println!("preferences saved to {}", path.display());

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        match crossterm::event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if ui::handle_key_event(app, key.code)? {
                    break;
                }
            }
            Event::Mouse(mouse) => {
                if ui::handle_mouse_event(app, mouse)? {
                    break;
                }
            }
            _ => {}
        }
    }
    Ok(())
}
