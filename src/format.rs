//! The plain-text board format.
//!
//! One row per line, cells separated by whitespace:
//! `0` is an empty cell, `N+` a receiver of color `N`, and `N-` or bare `N` a path segment of color `N`.
//! Blank lines are skipped.
//!
//! ```text
//! 1+ 0 1+
//! 2+ 0 2+
//! ```

use std::fmt::{Display, Formatter};
use std::num::NonZero;
use std::str::FromStr;

use itertools::Itertools;

use crate::board::Board;
use crate::cell::{Cell, CellType, ColorId};
use crate::error::ParseError;
use crate::position::{Dimension, Position};
use crate::shape;

fn parse_token(token: &str, position: Position) -> Option<Cell> {
    let (digits, is_receiver) = match token.strip_suffix('+') {
        Some(digits) => (digits, true),
        None => (token.strip_suffix('-').unwrap_or(token), false),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let color: ColorId = digits.parse().ok()?;
    // only a bare "0" is empty; "0+" and friends are not
    if color == 0 && token != "0" {
        return None;
    }

    Some(Cell::from_parts(position, color, is_receiver))
}

fn token(cell: &Cell) -> String {
    match cell.cell_type {
        CellType::Empty => "0".to_string(),
        CellType::PathSegment => cell.color.to_string(),
        CellType::Receiver => format!("{}+", cell.color),
    }
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s.lines()
            .map(|line| line.split_whitespace().collect_vec())
            .filter(|row| !row.is_empty())
            .collect_vec();

        let width = rows.first().map(Vec::len).ok_or(ParseError::NoRows)?;
        let mut cells = Vec::with_capacity(width * rows.len());

        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ParseError::RaggedRow { row: y, expected: width, found: row.len() });
            }

            for (x, token) in row.iter().enumerate() {
                let cell = parse_token(token, Position(x, y)).ok_or_else(|| ParseError::BadToken {
                    row: y,
                    column: x,
                    token: token.to_string(),
                })?;
                cells.push(cell);
            }
        }

        let dims = (
            NonZero::new(width).ok_or(ParseError::NoRows)?,
            NonZero::new(rows.len()).ok_or(ParseError::NoRows)?,
        );
        Ok(Board::new(dims, cells)?)
    }
}

impl Board {
    /// Parse `text`, additionally requiring the board to be `dims` (width, height).
    pub fn parse_with_dimensions(text: &str, dims: (Dimension, Dimension)) -> Result<Self, ParseError> {
        let board: Board = text.parse()?;
        if board.dims != dims {
            return Err(ParseError::DimensionMismatch {
                expected: (dims.0.get(), dims.1.get()),
                found: (board.width(), board.height()),
            });
        }

        Ok(board)
    }
}

/// Parse a `WIDTHxHEIGHT` size such as `5x2`.
pub fn parse_dimensions(size: &str) -> Result<(Dimension, Dimension), ParseError> {
    let bad = || ParseError::BadDimensions(size.to_string());

    let (width, height) = size.trim().split_once(['x', 'X']).ok_or_else(bad)?;
    Ok((width.parse().map_err(|_| bad())?, height.parse().map_err(|_| bad())?))
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", shape::print(self.cells.map(token)))
    }
}
