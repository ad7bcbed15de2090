#![warn(missing_docs)]

//! # `chromate`
//!
//! A solver for Flow Free puzzles: connect every pair of same-colored receivers with a path so that paths never cross and every cell is covered.
//! Begin by building a [`Board`], either with [`Board::new`], a [`BoardBuilder`](builder::BoardBuilder), or by parsing the text format described in [`format`].
//! Then call [`solve()`](crate::Board::solve), yielding a solved copy of the board or [`None`] if it has no solution.
//!
//! # Internals
//! Solving is an exhaustive breadth-first search in two stages, both driven by the generic [`Tree`](tree::Tree).
//!
//! 1. For each color, grow paths from one receiver one cell at a time (left, right, down, up) through cells that are empty on the input board,
//! never revisiting a cell. Every path whose head reaches the other receiver is kept as a candidate for that color.
//! 2. Grow boards from the input board. A board's children are the boards obtained by laying one candidate path of a still-unconnected color onto it,
//! provided every cell the candidate needs is still empty. A board generated once is never generated again.
//! The first board with every color connected and no empty cell left is the solution.
//!
//! No heuristics are applied and both stages retain every state they generate, so large open boards are slow.
//! See [`Solver`](solver::Solver) for a run that also reports how much work was done.

pub use board::Board;
pub use builder::BoardBuilder;
pub use cell::{Cell, CellType, ColorId};
pub use error::{BoardError, BuildError, BuilderInvalidReason, ParseError, PathError};
pub use path::Path;
pub use position::Position;
pub use solver::solve;

pub(crate) mod board;
pub(crate) mod cell;
pub(crate) mod error;
pub(crate) mod path;
pub(crate) mod position;
pub mod builder;
pub mod format;
pub mod queue;
pub mod shape;
pub mod solver;
pub mod tree;
#[cfg(feature = "wasm")]
pub mod wasm;
