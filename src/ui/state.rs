//! App state definition (Model)
//!
//! The application state struct and its enums

use super::view::layouts::BeadGrid;
use crate::models::AbacusState;

/// A bead position on a rod: the heaven bead or one of the earth beads
/// (index 0 nearest the bar).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeadSlot {
    Heaven,
    Earth(usize),
}

/// Keyboard cursor over the bead grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub rod: usize,
    pub slot: BeadSlot,
}

/// Interaction mode.
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    Help,
    ConfirmClear,
}

/// Application state.
pub struct App {
    pub abacus: AbacusState,
    pub cursor: Cursor,
    pub mode: AppMode,
    pub message: Option<String>,
    /// Where the bead grid landed on the last draw; mouse events are
    /// resolved against this. None until the first draw, or when the
    /// terminal is too small to fit the frame.
    pub grid: Option<BeadGrid>,
}

impl App {
    /// Create the app around the one abacus instance, cursor on the
    /// units rod's first earth bead.
    pub fn new(abacus: AbacusState) -> Self {
        let cursor = Cursor {
            rod: abacus.mode().unit_rod(),
            slot: BeadSlot::Earth(0),
        };
        Self {
            abacus,
            cursor,
            mode: AppMode::Normal,
            message: None,
            grid: None,
        }
    }
}
