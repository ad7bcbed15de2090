use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};
use std::num::NonZero;

use ndarray::{Array2, ArrayView1};

use crate::cell::{Cell, CellType, ColorId};
use crate::error::{BoardError, PathError};
use crate::path::Path;
use crate::position::{Dimension, Position};
use crate::solver;

/// A rectangular Flow board: a fixed grid of [`Cell`]s, each color having exactly two receivers.
///
/// [`Board`]s are built with [`Board::new`], a [`BoardBuilder`](crate::builder::BoardBuilder), or parsed from text.
/// Two boards are equal when their grids are; how a board was reached does not matter.
#[derive(Clone, Debug)]
pub struct Board {
    // width, height
    pub(crate) dims: (Dimension, Dimension),
    pub(crate) cells: Array2<Cell>,
    // start and end receiver per color, in scan order
    receivers: BTreeMap<NonZero<ColorId>, (Position, Position)>,
    // interior segments per color in connection order; not part of the board's identity
    routes: BTreeMap<NonZero<ColorId>, Vec<Position>>,
}

impl Board {
    /// Construct a board of `dims` (width, height) from `cells`, placed by their own positions.
    /// Positions not covered by `cells` are empty.
    ///
    /// Fails if a cell lies outside the board, a position is given twice, or some color does not have exactly two receivers.
    pub fn new(dims: (Dimension, Dimension), cells: impl IntoIterator<Item = Cell>) -> Result<Self, BoardError> {
        let mut grid = Array2::from_shape_fn((dims.1.get(), dims.0.get()), |ind| Cell::empty(Position::from(ind)));
        let mut given = Array2::from_elem(grid.raw_dim(), false);

        for cell in cells {
            let index = cell.position.as_index();
            match given.get_mut(index) {
                None => return Err(BoardError::OutOfBounds { position: cell.position }),
                Some(true) => return Err(BoardError::DuplicateCell { position: cell.position }),
                Some(flag) => *flag = true,
            }
            grid[index] = cell;
        }

        Self::from_grid(dims, grid)
    }

    /// Validate a complete grid and scan it for receivers and committed segments.
    pub(crate) fn from_grid(dims: (Dimension, Dimension), cells: Array2<Cell>) -> Result<Self, BoardError> {
        // receivers, segments
        let mut groups: BTreeMap<NonZero<ColorId>, (Vec<Position>, Vec<Position>)> = BTreeMap::new();

        // row-major scan
        for cell in cells.iter() {
            let Some(color) = NonZero::new(cell.color) else { continue };
            let group = groups.entry(color).or_default();
            match cell.cell_type {
                CellType::Receiver => group.0.push(cell.position),
                CellType::PathSegment => group.1.push(cell.position),
                CellType::Empty => {}
            }
        }

        let mut receivers = BTreeMap::new();
        let mut routes = BTreeMap::new();
        for (color, (ends, segments)) in groups {
            if ends.is_empty() && !segments.is_empty() {
                return Err(BoardError::OrphanSegment { color: color.get() });
            }
            let &[start, end] = ends.as_slice() else {
                return Err(BoardError::WrongReceiverCount { color: color.get(), found: ends.len() });
            };

            receivers.insert(color, (start, end));
            routes.insert(color, segments);
        }

        Ok(Self { dims, cells, receivers, routes })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.dims.0.get()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.dims.1.get()
    }

    /// The cell at `position`, or [`None`] if it lies off the board.
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.cells.get(position.as_index())
    }

    /// Rows of cells, top to bottom; each row runs left to right.
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, Cell>> {
        self.cells.rows().into_iter()
    }

    /// Every color id present on this board, ascending.
    pub fn colors(&self) -> impl Iterator<Item = NonZero<ColorId>> + '_ {
        self.receivers.keys().copied()
    }

    #[inline]
    pub(crate) fn is_empty_at(&self, position: Position) -> bool {
        self.cell(position).is_some_and(Cell::is_empty)
    }

    /// One [`Path`] per color, keyed and ordered by color id.
    ///
    /// Interior positions are the color's segments in connection order as far as this board knows it:
    /// scan order for segments the board was constructed with, placement order for overlaid paths.
    /// Derived paths are computed fresh on every call.
    pub fn derive_color_paths(&self) -> BTreeMap<NonZero<ColorId>, Path> {
        self.receivers
            .keys()
            .filter_map(|color| self.path_for(*color).map(|path| (*color, path)))
            .collect()
    }

    /// The derived [`Path`] for `id`, if that color is on this board.
    pub fn path_by_id(&self, id: ColorId) -> Option<Path> {
        NonZero::new(id).and_then(|color| self.path_for(color))
    }

    fn path_for(&self, color: NonZero<ColorId>) -> Option<Path> {
        let (start, end) = self.receivers.get(&color)?;
        let route = self.routes.get(&color).cloned().unwrap_or_default();
        Some(Path::derived(color, *self.cell(*start)?, *self.cell(*end)?, route))
    }

    /// A path from the receiver at `start` to the receiver at `end`, carrying any segments already committed for its color.
    ///
    /// Fails if either position is not a receiver on this board, or the receivers do not pair up.
    pub fn path_between(&self, start: Position, end: Position) -> Result<Path, PathError> {
        let receiver = |position| match self.cell(position) {
            Some(cell) if cell.cell_type == CellType::Receiver => Ok(*cell),
            _ => Err(PathError::NotOnBoard { position }),
        };
        let seed = Path::new(receiver(start)?, receiver(end)?)?;

        let mut route = self.routes.get(&seed.color()).cloned().unwrap_or_default();
        // routes run from the receiver found first in scan order
        if self.receivers.get(&seed.color()).is_some_and(|(first, _)| *first != start) {
            route.reverse();
        }

        Path::with_positions(*seed.start(), *seed.end(), route)
    }

    /// Lay the positions `path` added onto a copy of this board as segments of its color.
    ///
    /// Returns [`None`], leaving nothing changed anywhere, if any of those positions is off the board or not empty,
    /// if `path`'s receivers are not receivers of this board,
    /// or if any position `path` already had is not a segment of its color here.
    pub fn overlay_path(&self, path: &Path) -> Option<Board> {
        if self.cell(path.start().position) != Some(path.start()) || self.cell(path.end().position) != Some(path.end()) {
            return None;
        }
        let committed = &path.positions()[..path.positions().len() - path.placed().len()];
        let owned = |position: &Position| {
            self.cell(*position)
                .is_some_and(|cell| cell.cell_type == CellType::PathSegment && cell.color == path.color().get())
        };
        if !committed.iter().all(owned) {
            return None;
        }
        if !path.placed().iter().all(|position| self.is_empty_at(*position)) {
            return None;
        }

        let mut clone = self.clone();
        for position in path.placed() {
            clone.cells[position.as_index()] = Cell::segment(*position, path.color());
        }
        clone.routes.insert(path.color(), path.positions().to_vec());

        Some(clone)
    }

    /// Whether every color is connected and no cell is left empty.
    pub fn is_solved(&self) -> bool {
        self.derive_color_paths().values().all(Path::is_completed) && !self.cells.iter().any(Cell::is_empty)
    }

    /// Solve this board, returning a solved copy, or [`None`] if no combination of candidate paths fills it.
    ///
    /// See [`solver::solve`].
    pub fn solve(&self) -> Option<Board> {
        solver::solve(self)
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.dims == other.dims && self.cells == other.cells
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dims.hash(state);
        self.cells.iter().for_each(|cell| cell.hash(state));
    }
}
