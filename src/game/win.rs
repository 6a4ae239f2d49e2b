//! Four-in-a-row detection over a board snapshot.
//!
//! Every cell is used as the anchor of four candidate runs (rightward,
//! downward, down-right and down-left). A run counts only if all of its
//! cells are on the board and owned by the player being checked. Runs
//! overlap, so the scan does redundant work; at `rows * cols * 4` probes it
//! is cheap enough to repeat after every move.

use super::board::{Board, Cell, RUN_LENGTH};
use super::PlayerId;

/// Row/column steps for the four run directions.
const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // horizontal, rightward
    (1, 0),  // vertical, downward
    (1, 1),  // diagonal, down-right
    (1, -1), // diagonal, down-left
];

/// Does `player` own four cells in a straight line anywhere on the board?
pub fn has_four_in_a_row(board: &Board, player: PlayerId) -> bool {
    find_run(board, player).is_some()
}

/// First winning run for `player` in row-major anchor order, as
/// `(row, col)` pairs starting from the anchor.
pub fn find_run(board: &Board, player: PlayerId) -> Option<[(usize, usize); RUN_LENGTH]> {
    let target = Cell::Occupied(player);

    for row in 0..board.rows() {
        for col in 0..board.cols() {
            for &(dr, dc) in &DIRECTIONS {
                if let Some(run) = run_from(board, row, col, dr, dc, target) {
                    return Some(run);
                }
            }
        }
    }

    None
}

fn run_from(
    board: &Board,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    target: Cell,
) -> Option<[(usize, usize); RUN_LENGTH]> {
    let mut run = [(0, 0); RUN_LENGTH];
    for (step, slot) in run.iter_mut().enumerate() {
        let r = row as isize + dr * step as isize;
        let c = col as isize + dc * step as isize;
        if board.get_signed(r, c)? != target {
            return None;
        }
        *slot = (r as usize, c as usize);
    }
    Some(run)
}
