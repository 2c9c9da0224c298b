//! Property-based tests for board geometry.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use quotient_integers::Rational;

    use crate::{Cell, Direction, GameBoard, SquareBoard};

    fn board_and_cell() -> impl Strategy<Value = (SquareBoard, Cell)> {
        (1usize..12).prop_flat_map(|width| {
            (1..=width, 1..=width)
                .prop_map(move |(i, j)| (SquareBoard::new(width), Cell::new(i, j)))
        })
    }

    fn direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        #[test]
        fn neighbour_round_trips((board, cell) in board_and_cell(), direction in direction()) {
            if let Some(next) = board.neighbour(cell, direction) {
                prop_assert!(board.in_bounds(next.i, next.j));
                prop_assert_eq!(board.neighbour(next, direction.reversed()), Some(cell));
            }
        }

        #[test]
        fn neighbour_moves_one_step((board, cell) in board_and_cell(), direction in direction()) {
            if let Some(next) = board.neighbour(cell, direction) {
                prop_assert_eq!(next.i.abs_diff(cell.i) + next.j.abs_diff(cell.j), 1);
            }
        }

        #[test]
        fn row_and_reversed_row_agree(
            width in 1usize..12,
            i in 1usize..12,
            first in 0usize..15,
            last in 0usize..15
        ) {
            let board = SquareBoard::new(width);
            let forward = board.row(i, first, last);
            let mut backward = board.row(i, last, first);
            backward.reverse();
            prop_assert_eq!(&forward, &backward);
            prop_assert!(forward.iter().all(|c| board.in_bounds(c.i, c.j)));
        }

        #[test]
        fn every_cell_is_listed_once(width in 0usize..10) {
            let board = SquareBoard::new(width);
            let cells = board.all_cells();
            prop_assert_eq!(cells.len(), width * width);
            prop_assert!(cells.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn stores_rationals_by_value(n in -50i64..50, d in 1i64..50) {
            let mut board = GameBoard::new(2);
            let cell = Cell::new(1, 1);
            board.set(cell, Some(Rational::from_i64(n, d).unwrap()));

            let scaled = Rational::from_i64(n * 3, d * 3).unwrap();
            prop_assert_eq!(board.find(|v| v == Some(&scaled)), Some(cell));
        }
    }
}
