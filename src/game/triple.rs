//! The 8 fixed winning triples.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// An ordered set of 3 board positions that constitutes a win.
///
/// Only the 8 canonical triples (3 rows, 3 columns, 2 diagonals) have a
/// [`TripleKind`]; anything else is rejected by consumers such as the
/// geometry calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    cells: [Position; 3],
}

/// Classification of a canonical triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TripleKind {
    /// One of the 3 horizontal rows.
    Row,
    /// One of the 3 vertical columns.
    Column,
    /// The main diagonal {0, 4, 8}.
    MainDiagonal,
    /// The anti-diagonal {2, 4, 6}.
    AntiDiagonal,
}

impl Triple {
    /// The 8 canonical winning triples, in win-scan order:
    /// rows, then columns, then diagonals.
    pub const ALL: [Triple; 8] = [
        // Rows
        Triple::new([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        Triple::new([
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
        ]),
        Triple::new([
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ]),
        // Columns
        Triple::new([
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft,
        ]),
        Triple::new([
            Position::TopCenter,
            Position::Center,
            Position::BottomCenter,
        ]),
        Triple::new([
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomRight,
        ]),
        // Diagonals
        Triple::new([Position::TopLeft, Position::Center, Position::BottomRight]),
        Triple::new([Position::TopRight, Position::Center, Position::BottomLeft]),
    ];

    /// Creates a triple from three positions.
    ///
    /// Arbitrary triples can be built (useful in tests); only canonical
    /// ones classify via [`Triple::kind`].
    pub const fn new(cells: [Position; 3]) -> Self {
        Self { cells }
    }

    /// The three positions, in order.
    pub fn cells(&self) -> [Position; 3] {
        self.cells
    }

    /// Classifies this triple, or `None` if it is not one of the 8
    /// canonical triples.
    pub fn kind(&self) -> Option<TripleKind> {
        let idx = Self::ALL.iter().position(|t| t == self)?;
        Some(match idx {
            0..=2 => TripleKind::Row,
            3..=5 => TripleKind::Column,
            6 => TripleKind::MainDiagonal,
            _ => TripleKind::AntiDiagonal,
        })
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.cells[0].to_index(),
            self.cells[1].to_index(),
            self.cells[2].to_index()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_triples_classify() {
        assert_eq!(Triple::ALL[0].kind(), Some(TripleKind::Row));
        assert_eq!(Triple::ALL[3].kind(), Some(TripleKind::Column));
        assert_eq!(Triple::ALL[6].kind(), Some(TripleKind::MainDiagonal));
        assert_eq!(Triple::ALL[7].kind(), Some(TripleKind::AntiDiagonal));
    }

    #[test]
    fn test_non_canonical_triple_has_no_kind() {
        let bogus = Triple::new([Position::TopLeft, Position::TopCenter, Position::Center]);
        assert_eq!(bogus.kind(), None);
    }

    #[test]
    fn test_scan_order_is_rows_columns_diagonals() {
        let indices: Vec<[usize; 3]> = Triple::ALL
            .iter()
            .map(|t| t.cells().map(Position::to_index))
            .collect();
        assert_eq!(
            indices,
            vec![
                [0, 1, 2],
                [3, 4, 5],
                [6, 7, 8],
                [0, 3, 6],
                [1, 4, 7],
                [2, 5, 8],
                [0, 4, 8],
                [2, 4, 6],
            ]
        );
    }
}
