//! Update logic (Update/Dispatch)
//!
//! The core dispatch reducer and the state transitions it applies

use super::actions::Action;
use super::state::{App, AppMode, BeadSlot};
use crate::models::{EARTH_BEADS, PlaceValueMode, ROD_COUNT};

impl App {
    /// Core reducer. Every user intent flows through here; returns
    /// true when the app should exit.
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,

            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::MoveUp => self.move_up(),
            Action::MoveDown => self.move_down(),

            Action::ToggleSelected => self.toggle_bead(self.cursor.rod, self.cursor.slot),
            Action::ToggleBead { rod, slot } => {
                self.cursor.rod = rod;
                self.cursor.slot = slot;
                self.toggle_bead(rod, slot);
            }
            Action::FlipMode => self.flip_mode(),

            Action::StartClear => self.mode = AppMode::ConfirmClear,
            Action::ShowHelp => self.mode = AppMode::Help,

            Action::Cancel => self.cancel(),
            Action::Submit => {
                if self.mode == AppMode::ConfirmClear {
                    self.confirm_clear();
                }
            }
        }
        false
    }

    // ============ Navigation ============

    pub fn move_left(&mut self) {
        if self.cursor.rod > 0 {
            self.cursor.rod -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor.rod + 1 < ROD_COUNT {
            self.cursor.rod += 1;
        }
    }

    /// Step the cursor toward the heaven bead, crossing the bar.
    pub fn move_up(&mut self) {
        self.cursor.slot = match self.cursor.slot {
            BeadSlot::Heaven | BeadSlot::Earth(0) => BeadSlot::Heaven,
            BeadSlot::Earth(bead) => BeadSlot::Earth(bead - 1),
        };
    }

    /// Step the cursor toward the lower frame edge.
    pub fn move_down(&mut self) {
        self.cursor.slot = match self.cursor.slot {
            BeadSlot::Heaven => BeadSlot::Earth(0),
            BeadSlot::Earth(bead) if bead + 1 < EARTH_BEADS => BeadSlot::Earth(bead + 1),
            slot => slot,
        };
    }

    // ============ Bead and mode intents ============

    /// Send a toggle intent into the value model.
    pub fn toggle_bead(&mut self, rod: usize, slot: BeadSlot) {
        match slot {
            BeadSlot::Heaven => self.abacus.toggle_heaven(rod),
            BeadSlot::Earth(bead) => self.abacus.toggle_earth(rod, bead),
        }
        self.message = None;
    }

    /// Flip RightmostUnits <-> CenterUnits.
    pub fn flip_mode(&mut self) {
        let mode = self.abacus.mode().flipped();
        self.abacus.set_mode(mode);
        self.message = Some(
            match mode {
                PlaceValueMode::CenterUnits => "decimals on: the center rod is the units rod",
                PlaceValueMode::RightmostUnits => "decimals off: the last rod is the units rod",
            }
            .to_string(),
        );
    }

    // ============ Clear ============

    /// Confirmed clear: every bead drops, the mode survives.
    pub fn confirm_clear(&mut self) {
        self.abacus.reset();
        self.mode = AppMode::Normal;
        self.message = Some("frame cleared".to_string());
    }

    // ============ Generic ============

    /// Cancel the active overlay.
    pub fn cancel(&mut self) {
        self.mode = AppMode::Normal;
        self.message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AbacusState;

    fn app() -> App {
        App::new(AbacusState::new(PlaceValueMode::RightmostUnits))
    }

    #[test]
    fn test_toggle_intent_cascades() {
        let mut app = app();
        app.dispatch(Action::ToggleBead {
            rod: 12,
            slot: BeadSlot::Earth(2),
        });
        assert_eq!(app.abacus.total(), 3.0);
        assert_eq!(app.cursor.rod, 12);
    }

    #[test]
    fn test_cursor_clamps_at_edges() {
        let mut app = app();
        for _ in 0..20 {
            app.dispatch(Action::MoveRight);
        }
        assert_eq!(app.cursor.rod, ROD_COUNT - 1);

        for _ in 0..20 {
            app.dispatch(Action::MoveLeft);
        }
        assert_eq!(app.cursor.rod, 0);

        for _ in 0..10 {
            app.dispatch(Action::MoveDown);
        }
        assert_eq!(app.cursor.slot, BeadSlot::Earth(EARTH_BEADS - 1));

        for _ in 0..10 {
            app.dispatch(Action::MoveUp);
        }
        assert_eq!(app.cursor.slot, BeadSlot::Heaven);
    }

    #[test]
    fn test_clear_needs_confirmation() {
        let mut app = app();
        app.dispatch(Action::ToggleBead {
            rod: 12,
            slot: BeadSlot::Heaven,
        });

        app.dispatch(Action::StartClear);
        app.dispatch(Action::Cancel);
        assert_eq!(app.abacus.total(), 5.0);

        app.dispatch(Action::StartClear);
        app.dispatch(Action::Submit);
        assert_eq!(app.abacus.total(), 0.0);
        assert_eq!(app.abacus.mode(), PlaceValueMode::RightmostUnits);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_flip_mode_keeps_beads() {
        let mut app = app();
        app.dispatch(Action::ToggleSelected); // units rod, earth bead 0
        assert_eq!(app.abacus.total(), 1.0);
        let rods = *app.abacus.rods();

        app.dispatch(Action::FlipMode);
        assert_eq!(app.abacus.mode(), PlaceValueMode::CenterUnits);
        assert_eq!(*app.abacus.rods(), rods);
    }

    #[test]
    fn test_only_quit_exits() {
        assert!(app().dispatch(Action::Quit));
        assert!(!app().dispatch(Action::MoveLeft));
        assert!(!app().dispatch(Action::ToggleSelected));
    }
}
