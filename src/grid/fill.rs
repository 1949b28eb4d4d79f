// Deterministic fill actions. The two symmetric fills ask the caller for one
// value per cell of the triangle through a fallible source, so the menu can
// plug in a validated prompt and tests can plug in a closure.

use std::io;

use super::board::Board;
use crate::core::{LabError, Result};

/// Sizes at or above this produce i32 overflow in deep Pascal rows, which
/// shows up as negative coefficients. The action refuses instead.
pub const PASCAL_SIZE_LIMIT: usize = 35;

pub fn zero_fill(board: &mut Board) {
    board.clear();
}

/// Fill the upper triangle (main diagonal included) from `value`, mirroring
/// each cell across the main diagonal. Postcondition: `b[i][j] == b[j][i]`.
pub fn main_diagonal_fill<F>(board: &mut Board, mut value: F) -> io::Result<()>
where
    F: FnMut(usize, usize) -> io::Result<i32>,
{
    let n = board.size();
    for i in 0..n {
        for j in i..n {
            let v = value(i, j)?;
            board.set(i, j, v);
            board.set(j, i, v);
        }
    }
    Ok(())
}

/// Fill the triangle above the anti-diagonal (anti-diagonal included),
/// mirroring each cell across it: `b[i][j] == b[n-1-j][n-1-i]`.
pub fn anti_diagonal_fill<F>(board: &mut Board, mut value: F) -> io::Result<()>
where
    F: FnMut(usize, usize) -> io::Result<i32>,
{
    let n = board.size();
    for i in 0..n {
        for j in 0..n - i {
            let v = value(i, j)?;
            board.set(i, j, v);
            board.set(n - 1 - j, n - 1 - i, v);
        }
    }
    Ok(())
}

/// Fill row i with binomial coefficients (columns 0..=i), edges 1, interior
/// from the standard recurrence. Requires an all-zero board so stale values
/// never leak into the sums, and refuses sizes at the overflow limit.
pub fn pascal_fill(board: &mut Board) -> Result<()> {
    if !board.is_cleared() {
        return Err(LabError::GridNotCleared);
    }
    let n = board.size();
    if n >= PASCAL_SIZE_LIMIT {
        return Err(LabError::SizeTooLarge(n));
    }
    for i in 0..n {
        board.set(i, 0, 1);
        board.set(i, i, 1);
        for j in 1..=i {
            board.set(i, j, board.get(i - 1, j - 1) + board.get(i - 1, j));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_fill_resets_everything() {
        let mut b = Board::new(3);
        b.set(0, 0, 9);
        b.set(2, 2, -3);
        zero_fill(&mut b);
        assert!(b.is_cleared());
    }

    #[test]
    fn main_diagonal_fill_is_symmetric() {
        let mut b = Board::new(4);
        main_diagonal_fill(&mut b, |i, j| Ok((i * 10 + j) as i32)).unwrap();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(b.get(i, j), b.get(j, i));
            }
        }
        // upper triangle keeps the supplied values
        assert_eq!(b.get(1, 3), 13);
        assert_eq!(b.get(3, 1), 13);
    }

    #[test]
    fn anti_diagonal_fill_mirrors_across_anti_diagonal() {
        let n = 5;
        let mut b = Board::new(n);
        anti_diagonal_fill(&mut b, |i, j| Ok((i * 10 + j) as i32)).unwrap();
        for i in 0..n {
            for j in 0..n {
                assert_eq!(b.get(i, j), b.get(n - 1 - j, n - 1 - i));
            }
        }
    }

    #[test]
    fn fill_stops_on_source_error() {
        let mut b = Board::new(3);
        let mut calls = 0;
        let result = main_diagonal_fill(&mut b, |_, _| {
            calls += 1;
            if calls == 2 {
                Err(io::Error::new(io::ErrorKind::UnexpectedEof, "done"))
            } else {
                Ok(1)
            }
        });
        assert!(result.is_err());
        assert_eq!(calls, 2);
    }

    #[test]
    fn pascal_fill_matches_known_rows() {
        let mut b = Board::new(5);
        pascal_fill(&mut b).unwrap();
        let expected = [
            [1, 0, 0, 0, 0],
            [1, 1, 0, 0, 0],
            [1, 2, 1, 0, 0],
            [1, 3, 3, 1, 0],
            [1, 4, 6, 4, 1],
        ];
        for i in 0..5 {
            for j in 0..5 {
                assert_eq!(b.get(i, j), expected[i][j], "cell [{}][{}]", i, j);
            }
        }
    }

    #[test]
    fn pascal_fill_requires_cleared_board() {
        let mut b = Board::new(4);
        b.set(1, 1, 2);
        assert_eq!(pascal_fill(&mut b), Err(LabError::GridNotCleared));
        // board untouched by the rejected action
        assert_eq!(b.get(1, 1), 2);
        assert_eq!(b.get(0, 0), 0);
    }

    #[test]
    fn pascal_fill_refuses_large_boards() {
        let mut b = Board::new(PASCAL_SIZE_LIMIT);
        assert_eq!(pascal_fill(&mut b), Err(LabError::SizeTooLarge(35)));
        let mut ok = Board::new(PASCAL_SIZE_LIMIT - 1);
        assert!(pascal_fill(&mut ok).is_ok());
    }
}
