use crate::cell::ColorId;
use crate::position::Position;

/// Reasons a grid of cells does not form a valid board.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A color does not have exactly two receivers.
    #[error("color {color} has {found} receivers, expected exactly 2")]
    WrongReceiverCount {
        /// The offending color.
        color: ColorId,
        /// How many receivers it has.
        found: usize,
    },

    /// Segments of a color that has no receivers at all.
    #[error("color {color} has path segments but no receivers")]
    OrphanSegment {
        /// The offending color.
        color: ColorId,
    },

    /// A cell was given a position outside the board dimensions.
    #[error("cell at {position:?} lies outside the board")]
    OutOfBounds {
        /// Where the cell claimed to be.
        position: Position,
    },

    /// Two cells were given for the same position.
    #[error("cell at {position:?} given more than once")]
    DuplicateCell {
        /// The contested position.
        position: Position,
    },
}

/// Reasons a [`Path`](crate::Path) cannot be formed between two cells.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// A receiver has color id 0.
    #[error("receivers must carry a positive color id")]
    NonPositiveColor,

    /// The two receivers are of different colors.
    #[error("receiver colors differ: {start} and {end}")]
    ColorMismatch {
        /// Color of the start receiver.
        start: ColorId,
        /// Color of the end receiver.
        end: ColorId,
    },

    /// A cell that should be a receiver of the board is not one.
    #[error("no receiver at {position:?} on this board")]
    NotOnBoard {
        /// Where a receiver was expected.
        position: Position,
    },

    /// Both ends are the same receiver.
    #[error("a path needs two distinct receivers")]
    SameReceiver,
}

/// Reasons board text could not be read.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A cell token is none of `0`, `N`, `N-` or `N+`.
    #[error("unrecognized token {token:?} at row {row}, column {column}")]
    BadToken {
        /// Zero-based row of the token.
        row: usize,
        /// Zero-based column of the token.
        column: usize,
        /// The token as written.
        token: String,
    },

    /// A row is not as wide as the first.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },

    /// The text holds no cells.
    #[error("no rows given")]
    NoRows,

    /// A board size could not be read.
    #[error("malformed board size {0:?}, expected WIDTHxHEIGHT")]
    BadDimensions(String),

    /// The board read is not the size asked for.
    #[error("board is {found:?} but {expected:?} was requested")]
    DimensionMismatch {
        /// Requested `(width, height)`.
        expected: (usize, usize),
        /// `(width, height)` of the text.
        found: (usize, usize),
    },

    /// The cells read do not form a valid board.
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BuilderInvalidReason {
    /// A receiver or segment was placed outside the bounds specified by `dims` on a builder.
    FeatureOutOfBounds,
    /// A receiver or segment was placed on a cell that is already occupied.
    CellOccupied,
}

/// A builder could not produce a board.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// The builder recorded invalid operations.
    #[error("builder is invalid: {0:?}")]
    Invalid(Vec<BuilderInvalidReason>),

    /// The cells placed do not form a valid board.
    #[error(transparent)]
    Board(#[from] BoardError),
}
