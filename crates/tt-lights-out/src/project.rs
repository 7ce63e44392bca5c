//! Combinational projection of the board onto the matrix drive lines.
//!
//! Pure function of the committed registers, recomputed from scratch every
//! clock and never stored. It drives exactly one column per clock; the
//! scan counter moves fast enough that persistence of vision shows the
//! whole board.

/// Cells belonging to each column of the row-major board.
pub const COLUMN_MASKS: [u16; 3] = [0x049, 0x092, 0x124];

/// Physical drive levels for one clock of the multiplexed display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixDrive {
    /// Active-low row drives, bit `r` low when the LED at row `r` of the
    /// active column is lit.
    pub row_n: u8,
    /// Active-high one-hot column select.
    pub col: u8,
}

/// Project `(column, board)` onto the drive lines.
#[must_use]
pub fn project(column: u8, board: u16) -> MatrixDrive {
    debug_assert!(column < 3);
    debug_assert!(board <= 0x1FF);

    let mut row_n = 0x07;
    for row in 0..3u8 {
        let cell = u16::from(row) * 3 + u16::from(column);
        if board & (1 << cell) != 0 {
            row_n &= !(1 << row);
        }
    }
    MatrixDrive {
        row_n,
        col: 1 << column,
    }
}
