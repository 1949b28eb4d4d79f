// Minesweeper board layout: mines at a shuffled prefix of all coordinates,
// every other cell annotated with its adjacent-mine count.

use rand::seq::SliceRandom;
use rand::Rng;

use super::board::Board;
use crate::core::{LabError, Result};

/// Mine marker. Non-mine cells hold counts in 0..=8.
pub const MINE: i32 = -1;

// Moore neighborhood, clockwise from top-left.
const OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Advisory cap shown to the user before the count prompt. Anything past half
/// the board makes a pointless game; the prompt itself only requires a
/// non-negative count.
pub fn suggested_max_mines(size: usize) -> usize {
    size * size / 2
}

/// Lay out `count` mines at distinct cells chosen by uniformly shuffling the
/// full coordinate list, then write the clipped 8-neighbor mine count into
/// every remaining cell. Previous board contents are discarded.
pub fn mine_fill<R: Rng>(board: &mut Board, count: usize, rng: &mut R) -> Result<()> {
    let n = board.size();
    let cells = n * n;
    if count > cells {
        return Err(LabError::TooManyMines {
            requested: count,
            cells,
        });
    }

    board.clear();
    let mut coords: Vec<(usize, usize)> = (0..n)
        .flat_map(|r| (0..n).map(move |c| (r, c)))
        .collect();
    coords.shuffle(rng);
    for &(r, c) in &coords[..count] {
        board.set(r, c, MINE);
    }

    annotate_counts(board);
    Ok(())
}

fn annotate_counts(board: &mut Board) {
    let n = board.size() as i32;
    for r in 0..board.size() {
        for c in 0..board.size() {
            if board.get(r, c) == MINE {
                continue;
            }
            let mut adjacent = 0;
            for &(dr, dc) in &OFFSETS {
                let nr = r as i32 + dr;
                let nc = c as i32 + dc;
                if nr >= 0 && nr < n && nc >= 0 && nc < n && board.get(nr as usize, nc as usize) == MINE
                {
                    adjacent += 1;
                }
            }
            board.set(r, c, adjacent);
        }
    }
}
