//! Layout helpers and bead-grid geometry
//!
//! One fixed character-cell grid describes the frame: a two-row heaven
//! section, the divider bar, a five-row earth section (four beads plus
//! one travel gap), and a digit readout row. Rendering and mouse
//! hit-testing both derive bead positions from the same functions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::models::{AbacusState, EARTH_BEADS, ROD_COUNT};
use crate::ui::state::BeadSlot;

/// Character cells per rod column (a bead plus one gap cell).
pub const ROD_WIDTH: u16 = 5;
/// Cells a bead glyph spans.
pub const BEAD_WIDTH: u16 = 4;
/// Rows in the heaven section.
pub const HEAVEN_ROWS: u16 = 2;
/// Rows in the earth section: four beads and one travel gap.
pub const EARTH_ROWS: u16 = EARTH_BEADS as u16 + 1;

pub const GRID_WIDTH: u16 = ROD_COUNT as u16 * ROD_WIDTH;
pub const GRID_HEIGHT: u16 = HEAVEN_ROWS + 1 + EARTH_ROWS + 1;

/// Grid row of the divider bar.
pub const BAR_ROW: u16 = HEAVEN_ROWS;
/// First grid row of the earth section.
pub const EARTH_TOP: u16 = BAR_ROW + 1;
/// Grid row of the per-rod digit readout.
pub const DIGIT_ROW: u16 = EARTH_TOP + EARTH_ROWS;

/// Screen placement of the bead grid, captured at render time so mouse
/// events resolve against what is actually on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeadGrid {
    pub x: u16,
    pub y: u16,
}

impl BeadGrid {
    /// Center the grid in `area`; None when there is no room.
    pub fn fit(area: Rect) -> Option<Self> {
        if area.width < GRID_WIDTH || area.height < GRID_HEIGHT {
            return None;
        }
        Some(Self {
            x: area.x + (area.width - GRID_WIDTH) / 2,
            y: area.y + (area.height - GRID_HEIGHT) / 2,
        })
    }

    /// Grid row a bead currently occupies, given its active state.
    pub fn bead_row(slot: BeadSlot, active: bool) -> u16 {
        match slot {
            // Inactive heaven rests at the frame edge, active sits on
            // the bar.
            BeadSlot::Heaven => {
                if active {
                    BAR_ROW - 1
                } else {
                    0
                }
            }
            // Active earth packs up against the bar, inactive packs
            // down toward the frame edge.
            BeadSlot::Earth(bead) => {
                let bead = bead as u16;
                if active {
                    EARTH_TOP + bead
                } else {
                    EARTH_TOP + 1 + bead
                }
            }
        }
    }

    /// Leftmost cell of the bead glyph on `rod`.
    pub fn bead_x(&self, rod: usize) -> u16 {
        self.x + rod as u16 * ROD_WIDTH
    }

    /// Resolve a screen cell to the bead drawn there, if any.
    pub fn hit_test(&self, abacus: &AbacusState, column: u16, row: u16) -> Option<(usize, BeadSlot)> {
        if column < self.x || column >= self.x + GRID_WIDTH || row < self.y {
            return None;
        }
        let rod = ((column - self.x) / ROD_WIDTH) as usize;
        if column - self.bead_x(rod) >= BEAD_WIDTH {
            return None; // the gap column between rods
        }
        let grid_row = row - self.y;

        let state = abacus.rod(rod);
        if Self::bead_row(BeadSlot::Heaven, state.heaven) == grid_row {
            return Some((rod, BeadSlot::Heaven));
        }
        for (bead, &active) in state.earth.iter().enumerate() {
            let slot = BeadSlot::Earth(bead);
            if Self::bead_row(slot, active) == grid_row {
                return Some((rod, slot));
            }
        }
        None
    }
}

/// Centered popup rect, sized as a percentage of `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_requires_room() {
        assert!(BeadGrid::fit(Rect::new(0, 0, GRID_WIDTH, GRID_HEIGHT)).is_some());
        assert!(BeadGrid::fit(Rect::new(0, 0, GRID_WIDTH - 1, GRID_HEIGHT)).is_none());
        assert!(BeadGrid::fit(Rect::new(0, 0, GRID_WIDTH, GRID_HEIGHT - 1)).is_none());
    }

    #[test]
    fn test_fit_centers_in_area() {
        let grid = BeadGrid::fit(Rect::new(2, 3, GRID_WIDTH + 10, GRID_HEIGHT + 4)).unwrap();
        assert_eq!(grid.x, 2 + 5);
        assert_eq!(grid.y, 3 + 2);
    }

    #[test]
    fn test_hit_inactive_heaven_bead() {
        let grid = BeadGrid { x: 10, y: 5 };
        let abacus = AbacusState::default();
        // Inactive heaven rests on the top row; the row below is bare rod.
        assert_eq!(grid.hit_test(&abacus, 10, 5), Some((0, BeadSlot::Heaven)));
        assert_eq!(grid.hit_test(&abacus, 10, 6), None);
    }

    #[test]
    fn test_hit_follows_bead_position() {
        let grid = BeadGrid { x: 0, y: 0 };
        let mut abacus = AbacusState::default();
        assert_eq!(grid.hit_test(&abacus, 2, BAR_ROW - 1), None);

        abacus.toggle_heaven(0);
        assert_eq!(
            grid.hit_test(&abacus, 2, BAR_ROW - 1),
            Some((0, BeadSlot::Heaven))
        );
        assert_eq!(grid.hit_test(&abacus, 2, 0), None);
    }

    #[test]
    fn test_hit_earth_rows() {
        let grid = BeadGrid { x: 0, y: 0 };
        let mut abacus = AbacusState::default();
        // All four inactive: the row under the bar is the travel gap.
        assert_eq!(grid.hit_test(&abacus, 0, EARTH_TOP), None);
        assert_eq!(
            grid.hit_test(&abacus, 0, EARTH_TOP + 1),
            Some((0, BeadSlot::Earth(0)))
        );

        abacus.toggle_earth(0, 1);
        // Beads 0 and 1 now sit against the bar, the gap moved below them.
        assert_eq!(
            grid.hit_test(&abacus, 0, EARTH_TOP),
            Some((0, BeadSlot::Earth(0)))
        );
        assert_eq!(
            grid.hit_test(&abacus, 0, EARTH_TOP + 1),
            Some((0, BeadSlot::Earth(1)))
        );
        assert_eq!(grid.hit_test(&abacus, 0, EARTH_TOP + 2), None);
        assert_eq!(
            grid.hit_test(&abacus, 0, EARTH_TOP + 3),
            Some((0, BeadSlot::Earth(2)))
        );
    }

    #[test]
    fn test_hit_gap_bar_and_outside_miss() {
        let grid = BeadGrid { x: 0, y: 0 };
        let abacus = AbacusState::default();
        // Gap column between rods, the bar row, and cells past the grid.
        assert_eq!(grid.hit_test(&abacus, BEAD_WIDTH, 0), None);
        assert_eq!(grid.hit_test(&abacus, 0, BAR_ROW), None);
        assert_eq!(grid.hit_test(&abacus, GRID_WIDTH, 0), None);
        assert_eq!(grid.hit_test(&abacus, 0, DIGIT_ROW), None);
    }

    #[test]
    fn test_hit_resolves_rightmost_rod() {
        let grid = BeadGrid { x: 0, y: 0 };
        let abacus = AbacusState::default();
        let x = grid.bead_x(ROD_COUNT - 1);
        assert_eq!(
            grid.hit_test(&abacus, x, 0),
            Some((ROD_COUNT - 1, BeadSlot::Heaven))
        );
    }
}
