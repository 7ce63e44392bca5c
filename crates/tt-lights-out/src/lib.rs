//! 3x3 Lights-Out matrix game controller.
//!
//! Cycle-accurate model of a self-contained electronic puzzle: nine LEDs
//! and nine buttons share a time-multiplexed 3x3 matrix, scanned one
//! column per clock. Pressing a button flips its cell and its orthogonal
//! neighbours; turning every light off wins, and the next press deals a
//! fresh pseudo-random board from a free-running 16-bit LFSR.
//!
//! The model covers the clocked control core only: scan counter, matrix
//! debouncers, random generator and board transition, advanced in lockstep
//! by [`LightsOut::tick`]. Driving real electronics is the host's job;
//! [`project`] gives it the combinational drive levels for the active
//! column each clock.
//!
//! Everything is deterministic from reset (the LFSR reseeds to a fixed
//! constant), so the model doubles as a verification oracle for the
//! original silicon.

mod debounce;
mod game;
mod lfsr;
mod project;
mod scan;

pub use debounce::Debouncer;
pub use game::{GameState, TOGGLE_MASKS};
pub use lfsr::{LFSR_SEED, Lfsr16};
pub use project::{COLUMN_MASKS, MatrixDrive, project};
pub use scan::ScanCounter;

/// The control core: every register of the chip, advanced one clock at a
/// time.
#[derive(Debug, Clone, Default)]
pub struct LightsOut {
    scan: ScanCounter,
    debounce: Debouncer,
    lfsr: Lfsr16,
    game: GameState,
}

impl LightsOut {
    /// Core in its post-reset state: dark board, column 0, LFSR seeded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Core with a harness-chosen LFSR seed.
    #[must_use]
    pub fn with_seed(seed: u16) -> Self {
        Self {
            lfsr: Lfsr16::with_seed(seed),
            ..Self::default()
        }
    }

    /// Advance the whole core by one clock.
    ///
    /// `rows` carries the raw pre-debounce levels of the three shared row
    /// lines; which buttons they mean depends on the column the scan
    /// counter selects this clock. `reset` is a level: while held, every
    /// register clamps to its reset value each clock.
    ///
    /// Order within the clock is fixed: scan advances, the active column's
    /// button channels sample, the LFSR shifts, then the board transition
    /// consumes the fresh pulses and LFSR value. A reseed therefore loads
    /// the LFSR value as of this same clock.
    pub fn tick(&mut self, rows: [bool; 3], reset: bool) {
        let column = self.scan.advance(reset);
        self.debounce.sample(column, rows, reset);
        let random = self.lfsr.tick(reset);
        self.game.step(random & 0x1FF, self.debounce.pulses(), reset);
    }

    /// Advance `count` clocks with the row lines idle.
    pub fn tick_idle(&mut self, count: u32) {
        for _ in 0..count {
            self.tick([false; 3], false);
        }
    }

    /// Current nine-bit board.
    #[must_use]
    pub fn board(&self) -> u16 {
        self.game.board()
    }

    /// Column the scan counter selected on the most recent clock.
    #[must_use]
    pub fn column(&self) -> u8 {
        self.scan.column()
    }

    /// Win flag: true whenever the board is dark.
    #[must_use]
    pub fn done(&self) -> bool {
        self.game.done()
    }

    /// Random generator register, for harness and oracle use.
    #[must_use]
    pub fn lfsr(&self) -> u16 {
        self.lfsr.value()
    }

    /// Drive levels for the active column, recomputed combinationally.
    #[must_use]
    pub fn drive(&self) -> MatrixDrive {
        project(self.column(), self.board())
    }
}
