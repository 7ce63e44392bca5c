//! Whole-chip gameplay scenarios, driven through the matrix interface the
//! way a host (or the original silicon's test bench) would drive it.

use tt_lights_out::{LFSR_SEED, LightsOut, TOGGLE_MASKS};

/// Reference generator model: the LFSR value after `clocks` shifts.
fn lfsr16(seed: u16, clocks: u32) -> u16 {
    let mut lfsr = seed;
    for _ in 0..clocks {
        let new_bit = ((lfsr >> 15) ^ (lfsr >> 13) ^ (lfsr >> 12) ^ (lfsr >> 10)) & 1;
        lfsr = (lfsr << 1) | new_bit;
    }
    lfsr
}

/// Press one button through the matrix: assert its row line only on the
/// clocks where its column is scanned, for the fifteen samples the
/// debouncer needs, then release.
fn press(chip: &mut LightsOut, cell: usize) {
    let row = cell / 3;
    let col = (cell % 3) as u8;

    let mut delivered = 0;
    while delivered < 15 {
        let next_col = (chip.column() + 1) % 3;
        let mut rows = [false; 3];
        if next_col == col {
            rows[row] = true;
            delivered += 1;
        }
        chip.tick(rows, false);
    }
    // Two full scans with the line idle re-arm the channel.
    chip.tick_idle(6);
}

#[test]
fn reset_release_and_first_board_match_the_reference_model() {
    let mut chip = LightsOut::new();
    for _ in 0..10 {
        chip.tick([false; 3], true);
    }
    assert!(chip.done());
    assert_eq!(chip.lfsr(), LFSR_SEED);

    // Hold row line 0, which covers buttons 0, 1 and 2 as the scan wheels
    // around. Column c's channel collects its 15th sample on clock
    // c + 42 after release (column follows clocks-since-reset mod 3), so
    // the three debouncers fire on clocks 43, 44 and 45 in cell order
    // 1, 2, 0.
    let mut expected: u16 = 0;
    let mut fired = [(43u32, 1usize), (44, 2), (45, 0)].into_iter();
    let mut next_fire = fired.next();

    for clock in 1..=45u32 {
        chip.tick([true, false, false], false);

        if let Some((at, cell)) = next_fire {
            if clock == at {
                if expected == 0 {
                    expected = lfsr16(LFSR_SEED, clock) & 0x1FF;
                } else {
                    expected ^= TOGGLE_MASKS[cell];
                }
                next_fire = fired.next();
            }
        }
        assert_eq!(chip.board(), expected, "board diverged at clock {clock}");
        assert_eq!(chip.done(), expected == 0);
    }
    assert!(next_fire.is_none());

    // The drive lines show exactly the active column's slice of the board:
    // lit cells pull their row low, the column select is one-hot.
    chip.tick([false; 3], false); // clock 46, column 1
    assert_eq!(chip.column(), 1);
    let drive = chip.drive();
    assert_eq!(drive.col, 0b010);
    for row in 0..3u8 {
        let lit = chip.board() & (1 << (row * 3 + 1)) != 0;
        assert_eq!(drive.row_n & (1 << row) == 0, lit, "row {row} drive is wrong");
    }
}

#[test]
fn a_held_button_changes_the_board_exactly_once() {
    let mut chip = LightsOut::new();
    chip.tick([false; 3], true);

    // Hold button 4's row line through 100 scans of its column.
    let mut changes = 0;
    let mut last = chip.board();
    let mut delivered = 0;
    while delivered < 100 {
        let next_col = (chip.column() + 1) % 3;
        let mut rows = [false; 3];
        if next_col == 1 {
            rows[1] = true;
            delivered += 1;
        }
        chip.tick(rows, false);
        if chip.board() != last {
            changes += 1;
            last = chip.board();
        }
    }
    assert_eq!(changes, 1, "a held button must produce a single board change");
}

#[test]
fn seeded_game_solves_to_a_win_and_reseeds_on_the_next_press() {
    let mut chip = LightsOut::with_seed(0x1234);
    chip.tick([false; 3], true);

    // Any press on the dark board deals a new game from the LFSR.
    press(&mut chip, 7);
    let board = chip.board();

    // Find a press set whose combined toggle mask cancels the board. The
    // 3x3 game is always solvable, so the search cannot come up empty.
    let solution = (0..512u16)
        .find(|&s| {
            (0..9usize)
                .filter(|&b| s & (1 << b) != 0)
                .fold(0u16, |acc, b| acc ^ TOGGLE_MASKS[b]) == board
        })
        .expect("every 3x3 Lights-Out board is solvable");

    let mut expected = board;
    for cell in (0..9usize).filter(|&b| solution & (1 << b) != 0) {
        if expected == 0 {
            break;
        }
        press(&mut chip, cell);
        expected ^= TOGGLE_MASKS[cell];
        assert_eq!(chip.board(), expected, "wrong board after pressing {cell}");
    }
    assert!(chip.done(), "solving the board should win the game");

    // The next press starts over from whatever the free-running LFSR
    // holds on the clock the pulse lands. Drive button 0 by hand and stop
    // on that clock, before the generator runs any further.
    let mut delivered = 0;
    while delivered < 15 {
        let next_col = (chip.column() + 1) % 3;
        let mut rows = [false; 3];
        if next_col == 0 {
            rows[0] = true;
            delivered += 1;
        }
        chip.tick(rows, false);
    }
    assert_eq!(chip.board(), chip.lfsr() & 0x1FF);
}
