//! Button debouncers for the multiplexed 3x3 matrix.
//!
//! One 16-sample shift history per cell. Because the buttons share three
//! physical row lines, a cell's channel only sees its own button while the
//! scan counter has that cell's column selected; the other six channels
//! hold their history frozen until their column comes around again.
//!
//! A channel fires for exactly one clock when its history reads `0x7FFF`:
//! fifteen consecutive asserted samples immediately preceded by one
//! de-asserted sample. Holding the button keeps shifting ones in, the
//! history becomes all-ones, and the pattern no longer matches, so a held
//! button produces a single pulse rather than a repeating train. No
//! timers, no thresholds to configure, just a shift register and an
//! equality test.

/// History pattern that fires a pulse: one leading zero, fifteen ones.
const PRESS_PATTERN: u16 = 0x7FFF;

/// Nine-channel matrix debouncer.
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    history: [u16; 9],
    pulses: u16,
}

impl Debouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the three row lines against the active column.
    ///
    /// `rows[r]` is the raw level of physical row line `r` this clock,
    /// routed to the channel for cell `r * 3 + column`. While `reset` is
    /// held, every history and pulse clears regardless of column.
    pub fn sample(&mut self, column: u8, rows: [bool; 3], reset: bool) {
        if reset {
            self.history = [0; 9];
            self.pulses = 0;
            return;
        }

        debug_assert!(column < 3);
        self.pulses = 0;
        for (row, &level) in rows.iter().enumerate() {
            let cell = row * 3 + column as usize;
            self.history[cell] = (self.history[cell] << 1) | u16::from(level);
            if self.history[cell] == PRESS_PATTERN {
                self.pulses |= 1 << cell;
            }
        }
    }

    /// Debounced pulses from the most recent clock, one bit per cell.
    #[must_use]
    pub fn pulses(&self) -> u16 {
        self.pulses
    }

    /// True if any channel fired this clock.
    #[must_use]
    pub fn any_pulse(&self) -> bool {
        self.pulses != 0
    }
}
