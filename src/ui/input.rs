//! Event mapping (Input -> Action)
//!
//! Key and mouse events become Actions

use std::io;

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};

use super::actions::Action;
use super::state::{App, AppMode};

/// Map a key to an Action for the current interaction mode.
pub fn get_action(mode: &AppMode, key: KeyCode) -> Option<Action> {
    match mode {
        AppMode::Normal => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::MoveLeft),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::MoveRight),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Char(' ') | KeyCode::Enter => Some(Action::ToggleSelected),
            KeyCode::Char('d') => Some(Action::FlipMode),
            KeyCode::Char('c') => Some(Action::StartClear),
            KeyCode::Char('?') => Some(Action::ShowHelp),
            _ => None,
        },
        AppMode::Help => match key {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q') => {
                Some(Action::Cancel)
            }
            _ => None,
        },
        AppMode::ConfirmClear => match key {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Action::Submit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::Cancel),
            _ => None,
        },
    }
}

/// Handle a key event.
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(&app.mode, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

/// Handle a mouse event: a left press on a bead toggles it. Resolved
/// against the grid geometry captured on the last draw.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> io::Result<bool> {
    if app.mode != AppMode::Normal {
        return Ok(false);
    }
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return Ok(false);
    }

    if let Some(grid) = app.grid {
        if let Some((rod, slot)) = grid.hit_test(&app.abacus, mouse.column, mouse.row) {
            return Ok(app.dispatch(Action::ToggleBead { rod, slot }));
        }
    }

    Ok(false)
}
