//! The two-stage search: candidate paths per color, then boards.

use std::collections::BTreeMap;
use std::num::NonZero;

use itertools::Itertools;
use tracing::{debug, info, info_span};

use crate::board::Board;
use crate::cell::ColorId;
use crate::path::Path;
use crate::shape::SquareStep;
use crate::tree::{Offspring, Tree};

/// Every completed candidate path per color, in the order the path search found them.
pub type CandidatePool = BTreeMap<NonZero<ColorId>, Vec<Path>>;

/// Counters collected over one [`Solver::run`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Completed candidate paths found per color.
    pub candidates: BTreeMap<ColorId, usize>,
    /// Partial paths expanded across all colors.
    pub paths_expanded: usize,
    /// Boards expanded before the search stopped.
    pub boards_expanded: usize,
    /// Distinct boards generated.
    pub boards_seen: usize,
}

/// The outcome of a [`Solver::run`].
#[derive(Clone, Debug)]
pub struct Solution {
    /// The first solved board found, if any.
    pub board: Option<Board>,
    /// How much work finding it took.
    pub stats: SearchStats,
}

/// Two-stage breadth-first solver.
///
/// # Stages
/// First, every simple path from one receiver of a color to the other through cells empty on the input board is enumerated.
/// Then, starting from the input board, boards are grown level by level: each child lays one candidate path of a color not yet connected.
/// Boards already generated are not generated again. The first board found with every color connected and no empty cell is the solution.
///
/// Both stages keep every state they generate until they finish.
pub struct Solver<'b> {
    board: &'b Board,
}

impl<'b> Solver<'b> {
    /// A solver for `board`. Nothing is searched until [`Self::run`] or [`Self::candidate_paths`].
    pub fn new(board: &'b Board) -> Self {
        Self { board }
    }

    /// Enumerate the candidate paths of every color.
    ///
    /// Colors already connected on the input board get no candidates; the board search never places them.
    pub fn candidate_paths(&self) -> CandidatePool {
        self.enumerate(&mut SearchStats::default())
    }

    fn enumerate(&self, stats: &mut SearchStats) -> CandidatePool {
        let mut pool = BTreeMap::new();

        for (color, seed) in self.board.derive_color_paths() {
            let candidates = if seed.is_completed() {
                Vec::new()
            } else {
                let mut tree = Tree::new(seed, |path: &Path, offspring: &mut Offspring<'_, Path>| {
                    grow_path(self.board, path, offspring)
                });
                let candidates = tree.populate_tree_add(Path::is_completed)
                    .into_iter()
                    .map(|node| node.value().clone())
                    .collect_vec();
                stats.paths_expanded += tree.expanded();
                candidates
            };

            debug!(color = color.get(), candidates = candidates.len(), "enumerated candidate paths");
            stats.candidates.insert(color.get(), candidates.len());
            pool.insert(color, candidates);
        }

        pool
    }

    /// Search for a solved board, returning it with the statistics of the search.
    pub fn run(&self) -> Solution {
        let span = info_span!("solve", width = self.board.width(), height = self.board.height());
        let _guard = span.enter();

        let mut stats = SearchStats::default();
        let pool = self.enumerate(&mut stats);

        let mut tree = Tree::new(self.board.clone(), |board: &Board, offspring: &mut Offspring<'_, Board>| {
            grow_board(&pool, board, offspring)
        });
        let board = tree.populate_tree_check(Board::is_solved).map(|node| node.value().clone());

        stats.boards_expanded = tree.expanded();
        stats.boards_seen = tree.processed();
        debug!(boards_expanded = stats.boards_expanded, boards_seen = stats.boards_seen, "board search finished");

        match board {
            Some(_) => info!("solution found"),
            None => info!("search space exhausted without a solution"),
        }

        Solution { board, stats }
    }
}

/// Solve `board`, returning the first solved board found or [`None`] if the puzzle has no solution.
///
/// Cells that are not empty on `board` are never changed. The search order is fixed, so equal boards always yield equal solutions.
pub fn solve(board: &Board) -> Option<Board> {
    Solver::new(board).run().board
}

/// Extend `path` by one step in each direction that lands on a cell empty on `board` and not already on the path.
fn grow_path(board: &Board, path: &Path, offspring: &mut Offspring<'_, Path>) {
    for (_, next) in SquareStep::neighbors_of(path.head()) {
        if board.is_empty_at(next) && !path.contains(next) {
            offspring.attach(path.extended(next));
        }
    }
}

/// Lay each candidate of each unconnected color onto `board`, keeping the boards that fit and were not generated before.
fn grow_board(pool: &CandidatePool, board: &Board, offspring: &mut Offspring<'_, Board>) {
    let paths = board.derive_color_paths();

    for (color, candidates) in pool {
        if paths.get(color).is_some_and(Path::is_completed) {
            continue;
        }

        for candidate in candidates {
            if let Some(next) = board.overlay_path(candidate) {
                offspring.attach_unseen(next);
            }
        }
    }
}
