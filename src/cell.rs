use std::num::NonZero;

use crate::position::Position;

/// A color identifier. `0` is reserved for empty cells; every flow has a positive id.
pub type ColorId = usize;

/// What occupies a [`Cell`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum CellType {
    /// Nothing yet.
    #[default]
    Empty,
    /// Part of the flow between two receivers.
    PathSegment,
    /// A fixed flow endpoint.
    Receiver,
}

/// A single grid slot.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Cell {
    pub(crate) position: Position,
    pub(crate) cell_type: CellType,
    pub(crate) color: ColorId,
}

impl Cell {
    /// An empty cell at `position`.
    pub fn empty(position: Position) -> Self {
        Self { position, cell_type: CellType::Empty, color: 0 }
    }

    /// A receiver of `color` at `position`.
    pub fn receiver(position: Position, color: NonZero<ColorId>) -> Self {
        Self { position, cell_type: CellType::Receiver, color: color.get() }
    }

    /// A path segment of `color` at `position`.
    pub fn segment(position: Position, color: NonZero<ColorId>) -> Self {
        Self { position, cell_type: CellType::PathSegment, color: color.get() }
    }

    /// Build a cell from a `(color, is_receiver)` description.
    /// Color `0` is empty regardless of `is_receiver`.
    pub fn from_parts(position: Position, color: ColorId, is_receiver: bool) -> Self {
        match NonZero::new(color) {
            None => Self::empty(position),
            Some(color) if is_receiver => Self::receiver(position, color),
            Some(color) => Self::segment(position, color),
        }
    }

    /// Where this cell sits on its board.
    pub fn position(&self) -> Position {
        self.position
    }

    /// What occupies this cell.
    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    /// The color of this cell, `0` if empty.
    pub fn color(&self) -> ColorId {
        self.color
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.cell_type == CellType::Empty
    }
}
