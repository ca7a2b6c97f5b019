use serde::{Deserialize, Serialize};

/// Rods on the frame.
pub const ROD_COUNT: usize = 13;
/// Earth beads per rod.
pub const EARTH_BEADS: usize = 4;

/// Which rod carries 10^0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlaceValueMode {
    /// Integer abacus: the last rod is the units rod.
    RightmostUnits,
    /// Decimal abacus: the middle rod is the units rod, rods to its
    /// right carry fractional places.
    #[default]
    CenterUnits,
}

impl PlaceValueMode {
    pub fn unit_rod(self) -> usize {
        match self {
            PlaceValueMode::RightmostUnits => ROD_COUNT - 1,
            PlaceValueMode::CenterUnits => ROD_COUNT / 2,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            PlaceValueMode::RightmostUnits => PlaceValueMode::CenterUnits,
            PlaceValueMode::CenterUnits => PlaceValueMode::RightmostUnits,
        }
    }
}

/// One column of beads: a single heaven bead over four earth beads.
/// Earth index 0 is the bead nearest the divider bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rod {
    pub heaven: bool,
    pub earth: [bool; EARTH_BEADS],
}

impl Rod {
    /// Digit 0..=9 this rod contributes at its place value.
    pub fn digit(&self) -> u8 {
        let ones = self.earth.iter().filter(|&&active| active).count() as u8;
        if self.heaven { 5 + ones } else { ones }
    }
}

/// The whole frame: 13 rods plus the active place-value mode.
///
/// The only mutable entity in the program. Built once with every bead
/// inactive and mutated exclusively through the operations below. Out
/// of range rod or bead indices are caller bugs and panic.
#[derive(Debug, Clone, PartialEq)]
pub struct AbacusState {
    rods: [Rod; ROD_COUNT],
    mode: PlaceValueMode,
}

impl AbacusState {
    pub fn new(mode: PlaceValueMode) -> Self {
        Self {
            rods: [Rod::default(); ROD_COUNT],
            mode,
        }
    }

    pub fn rods(&self) -> &[Rod; ROD_COUNT] {
        &self.rods
    }

    pub fn rod(&self, rod: usize) -> &Rod {
        &self.rods[rod]
    }

    pub fn mode(&self) -> PlaceValueMode {
        self.mode
    }

    /// Flip one rod's heaven bead. Its own inverse.
    pub fn toggle_heaven(&mut self, rod: usize) {
        self.rods[rod].heaven = !self.rods[rod].heaven;
    }

    /// Toggle an earth bead under the cascade rule: releasing a bead
    /// drops every bead below it with it, while activating one carries
    /// every bead between it and the bar along. The active run stays
    /// contiguous from index 0.
    pub fn toggle_earth(&mut self, rod: usize, bead: usize) {
        let earth = &mut self.rods[rod].earth;
        if earth[bead] {
            for active in &mut earth[bead..] {
                *active = false;
            }
        } else {
            for active in &mut earth[..=bead] {
                *active = true;
            }
        }
    }

    /// Reassign the units rod. Bead state is untouched; only the
    /// interpretation of each rod's place value changes.
    pub fn set_mode(&mut self, mode: PlaceValueMode) {
        self.mode = mode;
    }

    /// Return every bead to inactive. The mode survives.
    pub fn reset(&mut self) {
        self.rods = [Rod::default(); ROD_COUNT];
    }

    /// Sum the frame, freshly, from current bead state.
    pub fn total(&self) -> f64 {
        let unit = self.mode.unit_rod() as i32;
        let mut total = 0.0;
        for (i, rod) in self.rods.iter().enumerate() {
            let place = 10f64.powi(unit - i as i32);
            total += f64::from(rod.digit()) * place;
        }
        total
    }
}

impl Default for AbacusState {
    fn default() -> Self {
        Self::new(PlaceValueMode::default())
    }
}
