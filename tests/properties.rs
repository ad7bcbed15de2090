//! Property tests over small random boards.
//!
//! Boards are at most 3x3 with up to two colors, so every search here runs to exhaustion quickly.

use std::num::NonZero;

use chromate::solver::Solver;
use chromate::{Board, Cell, CellType, Position};
use proptest::prelude::*;

fn board_strategy() -> impl Strategy<Value = Board> {
    (1usize..=3, 1usize..=3)
        .prop_flat_map(|(width, height)| {
            let cells = width * height;
            (
                Just(width),
                Just(height),
                Just((0..cells).collect::<Vec<_>>()).prop_shuffle(),
                0..=(cells / 2).min(2),
            )
        })
        .prop_map(|(width, height, order, colors)| {
            let receivers = order.iter()
                .take(colors * 2)
                .enumerate()
                .map(|(i, index)| {
                    let color = NonZero::new(i / 2 + 1).unwrap();
                    Cell::receiver(Position(index % width, index / width), color)
                })
                .collect::<Vec<_>>();

            Board::new((NonZero::new(width).unwrap(), NonZero::new(height).unwrap()), receivers).unwrap()
        })
}

fn snapshot(board: &Board) -> Vec<Vec<(CellType, usize)>> {
    board.rows()
        .map(|row| row.iter().map(|cell| (cell.cell_type(), cell.color())).collect())
        .collect()
}

proptest! {
    #[test]
    fn beside_is_reflexive_and_symmetric(a in (0usize..10, 0usize..10), b in (0usize..10, 0usize..10)) {
        let (p, q) = (Position(a.0, a.1), Position(b.0, b.1));
        prop_assert!(p.is_beside(p));
        prop_assert_eq!(p.is_beside(q), q.is_beside(p));
    }

    #[test]
    fn clone_preserves_state(board in board_strategy()) {
        let clone = board.clone();
        prop_assert_eq!(&clone, &board);
        prop_assert_eq!(clone.is_solved(), board.is_solved());
        prop_assert_eq!(clone.to_string(), board.to_string());
    }

    #[test]
    fn overlay_never_mutates_its_input(board in board_strategy()) {
        let before = snapshot(&board);

        for (color, candidates) in Solver::new(&board).candidate_paths() {
            for candidate in candidates {
                match board.overlay_path(&candidate) {
                    None => {}
                    Some(laid) => {
                        for row in laid.rows() {
                            for cell in row.iter() {
                                let before_cell = board.cell(cell.position()).unwrap();
                                if candidate.placed().contains(&cell.position()) {
                                    prop_assert_eq!(before_cell.cell_type(), CellType::Empty);
                                    prop_assert_eq!(cell.cell_type(), CellType::PathSegment);
                                    prop_assert_eq!(cell.color(), color.get());
                                } else {
                                    prop_assert_eq!(cell, before_cell);
                                }
                            }
                        }
                    }
                }
                prop_assert_eq!(&snapshot(&board), &before);
            }
        }
    }

    #[test]
    fn solutions_are_solved_and_keep_fixed_cells(board in board_strategy()) {
        if let Some(solved) = board.solve() {
            prop_assert!(solved.is_solved());
            for row in board.rows() {
                for cell in row.iter().filter(|cell| cell.cell_type() != CellType::Empty) {
                    prop_assert_eq!(solved.cell(cell.position()), Some(cell));
                }
            }
        }
    }

    #[test]
    fn solving_is_deterministic(board in board_strategy()) {
        prop_assert_eq!(board.solve(), board.solve());
    }
}
