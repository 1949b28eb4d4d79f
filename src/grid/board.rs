use std::fmt;

use serde::{Deserialize, Serialize};

/// Owned N×N integer table. Cells live in a single row-major buffer; every
/// fill action mutates it in place and the board keeps its dimension for the
/// whole program run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<i32>,
}

impl Board {
    /// A freshly created board is all zeros.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.cells[row * self.size + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: i32) {
        self.cells[row * self.size + col] = value;
    }

    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(|&v| v == 0)
    }

    pub fn clear(&mut self) {
        self.cells.fill(0);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                write!(f, "{}\t", self.get(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_square_and_zeroed() {
        for n in 1..=6 {
            let b = Board::new(n);
            assert_eq!(b.size(), n);
            for r in 0..n {
                for c in 0..n {
                    assert_eq!(b.get(r, c), 0);
                }
            }
            assert!(b.is_cleared());
        }
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut b = Board::new(3);
        b.set(2, 1, -7);
        assert_eq!(b.get(2, 1), -7);
        assert!(!b.is_cleared());
        b.clear();
        assert!(b.is_cleared());
    }

    #[test]
    fn display_is_tab_separated_rows() {
        let mut b = Board::new(2);
        b.set(0, 1, 5);
        b.set(1, 0, -1);
        assert_eq!(b.to_string(), "0\t5\t\n-1\t0\t\n");
    }
}
