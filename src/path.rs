use std::num::NonZero;

use crate::cell::{Cell, CellType, ColorId};
use crate::error::PathError;
use crate::position::Position;

/// A potential flow: the two receivers of one color and the interior positions placed between them so far.
///
/// `positions` is in connection order, starting next to `start` (which is not itself stored).
/// The first `committed` positions are already path segments on the board the path was derived from;
/// the rest were added by the search.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Path {
    color: NonZero<ColorId>,
    start: Cell,
    end: Cell,
    positions: Vec<Position>,
    committed: usize,
}

impl Path {
    /// A path between two receiver cells with no interior positions.
    pub fn new(start: Cell, end: Cell) -> Result<Self, PathError> {
        Self::with_positions(start, end, Vec::new())
    }

    /// A path between two receiver cells whose interior `positions` are already committed.
    pub fn with_positions(start: Cell, end: Cell, positions: Vec<Position>) -> Result<Self, PathError> {
        let color = NonZero::new(start.color).ok_or(PathError::NonPositiveColor)?;
        if end.color == 0 {
            return Err(PathError::NonPositiveColor);
        }
        if start.color != end.color {
            return Err(PathError::ColorMismatch { start: start.color, end: end.color });
        }
        if start.position == end.position {
            return Err(PathError::SameReceiver);
        }
        for cell in [start, end] {
            if cell.cell_type != CellType::Receiver {
                return Err(PathError::NotOnBoard { position: cell.position });
            }
        }

        let committed = positions.len();
        Ok(Self { color, start, end, positions, committed })
    }

    /// A path for receivers and a route already validated by a [`Board`](crate::Board).
    pub(crate) fn derived(color: NonZero<ColorId>, start: Cell, end: Cell, positions: Vec<Position>) -> Self {
        let committed = positions.len();
        Self { color, start, end, positions, committed }
    }

    /// The color this path connects.
    pub fn color(&self) -> NonZero<ColorId> {
        self.color
    }

    /// The receiver the path grows from.
    pub fn start(&self) -> &Cell {
        &self.start
    }

    /// The receiver the path grows toward.
    pub fn end(&self) -> &Cell {
        &self.end
    }

    /// Interior positions in connection order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Interior positions added since the path was derived from its board.
    pub fn placed(&self) -> &[Position] {
        &self.positions[self.committed..]
    }

    /// The last placed position, or the start receiver if nothing is placed.
    pub fn head(&self) -> Position {
        self.positions.last().copied().unwrap_or(self.start.position)
    }

    /// Whether the head has reached the end receiver.
    pub fn is_completed(&self) -> bool {
        self.head().is_beside(self.end.position)
    }

    /// Whether `position` is already one of this path's interior positions.
    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    /// A copy of this path with `position` appended. The receivers are shared, the positions are not.
    pub(crate) fn extended(&self, position: Position) -> Self {
        let mut positions = Vec::with_capacity(self.positions.len() + 1);
        positions.extend_from_slice(&self.positions);
        positions.push(position);

        Self {
            color: self.color,
            start: self.start,
            end: self.end,
            positions,
            committed: self.committed,
        }
    }
}
