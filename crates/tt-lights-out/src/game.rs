//! Board state and the Lights-Out transition function.
//!
//! The board is nine bits, row-major over the 3x3 grid (`0 1 2 / 3 4 5 /
//! 6 7 8`), bit set = LED lit. Pressing a button flips its own cell and
//! its orthogonal neighbours; clearing every light wins, and the next
//! press draws a fresh board from the random generator.

/// Cells flipped by each button: the cell itself plus its in-bounds
/// orthogonal neighbours. Classic Lights-Out adjacency, no wraparound, so
/// corners flip 3 cells, edges 4, the centre 5.
///
/// This is the corrected second-revision table; the first revision shipped
/// with a wrong neighbour bit in two entries.
pub const TOGGLE_MASKS: [u16; 9] = [
    0x00B, // 0: {0, 1, 3}
    0x017, // 1: {0, 1, 2, 4}
    0x026, // 2: {1, 2, 5}
    0x059, // 3: {0, 3, 4, 6}
    0x0BA, // 4: {1, 3, 4, 5, 7}
    0x134, // 5: {2, 4, 5, 8}
    0x0C8, // 6: {3, 6, 7}
    0x1D0, // 7: {4, 6, 7, 8}
    0x1A0, // 8: {5, 7, 8}
];

/// The nine-bit board register and its per-clock transition.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    board: u16,
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self { board: 0 }
    }

    /// Commit one clock of the game transition.
    ///
    /// `pressed` is the debounced pulse set for this clock, one bit per
    /// cell. An empty board plus any pulse starts a new game from
    /// `lfsr_low9`; otherwise every pressed button's toggle mask applies
    /// as a single combined XOR, so simultaneous pulses and press order
    /// cannot matter. Reset clears the board.
    pub fn step(&mut self, lfsr_low9: u16, pressed: u16, reset: bool) {
        debug_assert!(lfsr_low9 <= 0x1FF);
        debug_assert!(pressed <= 0x1FF);

        if reset {
            self.board = 0;
        } else if self.board == 0 && pressed != 0 {
            self.board = lfsr_low9;
        } else {
            let mut flip = 0;
            for (cell, &mask) in TOGGLE_MASKS.iter().enumerate() {
                if pressed & (1 << cell) != 0 {
                    flip |= mask;
                }
            }
            self.board ^= flip;
        }
    }

    /// Current board, always within nine bits.
    #[must_use]
    pub fn board(&self) -> u16 {
        self.board
    }

    /// Win condition: every light off. Derived, never stored.
    #[must_use]
    pub fn done(&self) -> bool {
        self.board == 0
    }
}
