use std::num::NonZero;

use ndarray::Ix;

pub(crate) type Coord = usize;
pub(crate) type Dimension = NonZero<Coord>;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A position `(x, y)` on a board. The top left corner is `Position(0, 0)`; `x` grows rightward and `y` downward.
pub struct Position(pub Coord, pub Coord);

impl Position {
    /// Column of this position.
    pub fn x(&self) -> Coord {
        self.0
    }

    /// Row of this position.
    pub fn y(&self) -> Coord {
        self.1
    }

    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    /// Translate by `(dx, dy)`.
    ///
    /// Stepping off the top or left edge wraps to a huge coordinate, which no board contains,
    /// so bounds checks against the board dimensions reject it like any other off-board position.
    pub fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    /// Whether `other` shares a row and is at most one column away, or shares a column and is at most one row away.
    ///
    /// Diagonal neighbors are not beside each other; a position is beside itself.
    pub fn is_beside(&self, other: Position) -> bool {
        (self.1 == other.1 && self.0.abs_diff(other.0) <= 1)
            || (self.0 == other.0 && self.1.abs_diff(other.1) <= 1)
    }
}

impl From<(Ix, Ix)> for Position {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}
