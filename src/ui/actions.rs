//! Action enum definition (Intent)
//!
//! User interactions become explicit semantic Actions

use super::state::BeadSlot;

/// User operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,

    // Intents dispatched into the value model
    ToggleSelected,
    ToggleBead { rod: usize, slot: BeadSlot },
    FlipMode,

    // Overlays
    StartClear,
    ShowHelp,

    // Generic interactions
    Cancel, // Esc / n
    Submit, // Enter / y
}
