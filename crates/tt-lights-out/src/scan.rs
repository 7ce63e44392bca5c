//! Matrix scan counter.
//!
//! A 2-bit counter cycling 0 -> 1 -> 2 -> 0. The value selects which of
//! the three matrix columns is driven for display and which three button
//! channels are sampled this clock.

/// 2-bit column scan counter.
#[derive(Debug, Clone, Default)]
pub struct ScanCounter {
    column: u8,
}

impl ScanCounter {
    #[must_use]
    pub fn new() -> Self {
        Self { column: 0 }
    }

    /// Advance one clock and return the active column for this tick.
    ///
    /// While `reset` is held the counter clamps to column 0.
    pub fn advance(&mut self, reset: bool) -> u8 {
        if reset {
            self.column = 0;
        } else {
            self.column = (self.column + 1) % 3;
        }
        self.column
    }

    /// Column selected by the most recent clock.
    #[must_use]
    pub fn column(&self) -> u8 {
        self.column
    }
}
