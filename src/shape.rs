//! Step directions on the square grid and token-grid printing.

use ndarray::Array2;
use strum::VariantArray;

use crate::position::Position;

/// The four directions a path may grow in on a rectangular board.
///
/// Declaration order is the order successors are generated in during path enumeration,
/// which in turn fixes the order candidate paths are found and tried.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum SquareStep {
    /// Toward column 0.
    Left,
    /// Away from column 0.
    Right,
    /// Away from row 0.
    Down,
    /// Toward row 0.
    Up,
}

impl SquareStep {
    /// Attempt the step from `position` in the direction specified by `self` and return the resultant [`Position`].
    ///
    /// The result may lie off the board; callers check it against the board dimensions.
    pub fn attempt_from(&self, position: Position) -> Position {
        match self {
            Self::Left => position.offset_by((-1, 0)),
            Self::Right => position.offset_by((1, 0)),
            Self::Down => position.offset_by((0, 1)),
            Self::Up => position.offset_by((0, -1)),
        }
    }

    /// Get all neighbors of a [`Position`] in "theory", by attempting every step direction in order.
    pub fn neighbors_of(position: Position) -> impl Iterator<Item = (Self, Position)> {
        Self::VARIANTS.iter().map(move |dir| (*dir, dir.attempt_from(position)))
    }
}

/// Dump the specified token grid row by row, tokens separated by a single space.
pub(crate) fn print(board: Array2<String>) -> String {
    let mut out = String::with_capacity(board.len() * 3);

    for row in board.rows() {
        let mut first = true;
        for token in row {
            if !first {
                out.push(' ');
            }
            out.push_str(token);
            first = false;
        }
        out.push('\n');
    }

    out
}
