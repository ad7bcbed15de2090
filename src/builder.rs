//! Incremental construction of boards, cell by cell.

use std::num::NonZero;

use ndarray::Array2;

use crate::board::Board;
use crate::cell::{Cell, ColorId};
use crate::error::{BuildError, BuilderInvalidReason};
use crate::position::{Dimension, Position};

/// A builder for rectangular boards.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Once a call makes the builder invalid, every later mutating call does nothing; [`Self::build`] reports why.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    // width, height
    dims: (Dimension, Dimension),
    cells: Array2<Cell>,
    colors_added: ColorId,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::with_dims((NonZero::<usize>::MIN.saturating_add(4), NonZero::<usize>::MIN.saturating_add(4)))
    }
}

impl BoardBuilder {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(x, y)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            cells: Array2::from_shape_fn((dims.1.get(), dims.0.get()), |ind| Cell::empty(Position::from(ind))),
            colors_added: 0,
            invalid_reasons: Default::default(),
        }
    }

    fn claim(&mut self, position: Position) -> bool {
        match self.cells.get(position.as_index()) {
            None => {
                self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
                false
            }
            Some(cell) if !cell.is_empty() => {
                self.invalid_reasons.push(BuilderInvalidReason::CellOccupied);
                false
            }
            Some(_) => true,
        }
    }

    /// Add a pair of receivers under the next unused color id, starting from 1. The order of `positions` is the order they are scanned in.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if either position is out of bounds,
    /// or a [`CellOccupied`](BuilderInvalidReason::CellOccupied) invalid state if either position is taken or both are the same.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_receivers(&mut self, positions: (Position, Position)) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if positions.0 == positions.1 {
            self.invalid_reasons.push(BuilderInvalidReason::CellOccupied);
            return self;
        }
        if !self.claim(positions.0) || !self.claim(positions.1) {
            return self;
        }

        self.colors_added += 1;
        let Some(color) = NonZero::new(self.colors_added) else { return self };
        for position in [positions.0, positions.1] {
            self.cells[position.as_index()] = Cell::receiver(position, color);
        }

        self
    }

    /// Remove the most recently added pair of receivers, along with any segments of their color.
    ///
    /// If the builder is in an invalid state or no receivers are present, this function does nothing.
    pub fn pop_receivers(&mut self) -> &mut Self {
        if !self.invalid_reasons.is_empty() || self.colors_added == 0 {
            return self;
        }

        let color_to_remove = self.colors_added;
        self.colors_added -= 1;
        self.cells.map_inplace(|cell| {
            if cell.color == color_to_remove {
                *cell = Cell::empty(cell.position);
            }
        });

        self
    }

    /// Commit a path segment of `color` at `position` before solving.
    ///
    /// May cause the builder to enter an invalid state under the same conditions as [`Self::add_receivers`].
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_segment(&mut self, color: NonZero<ColorId>, position: Position) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if self.claim(position) {
            self.cells[position.as_index()] = Cell::segment(position, color);
        }

        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Board`].
    ///
    /// Fails with the collected reasons if the builder is invalid, or with a board error if a segment's color has no receivers.
    pub fn build(&self) -> Result<Board, BuildError> {
        if !self.invalid_reasons.is_empty() {
            return Err(BuildError::Invalid(self.invalid_reasons.clone()));
        }

        Ok(Board::from_grid(self.dims, self.cells.clone())?)
    }
}
