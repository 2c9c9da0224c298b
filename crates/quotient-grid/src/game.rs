//! Square boards carrying a value per cell.

use rustc_hash::FxHashMap;
use std::ops::Deref;

use crate::board::{Cell, SquareBoard};

/// A [`SquareBoard`] where every cell may hold a value of type `T`.
///
/// Cells start empty. The board geometry is reachable through `Deref`, so
/// `row`, `column`, `neighbour` and friends work directly on a `GameBoard`.
#[derive(Clone, Debug)]
pub struct GameBoard<T> {
    board: SquareBoard,
    values: FxHashMap<Cell, T>,
}

impl<T> GameBoard<T> {
    /// Creates an empty `width` x `width` board.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            board: SquareBoard::new(width),
            values: FxHashMap::default(),
        }
    }

    /// Returns the value stored at `cell`, if any.
    #[must_use]
    pub fn get(&self, cell: &Cell) -> Option<&T> {
        self.values.get(cell)
    }

    /// Stores `value` at `cell`, or clears the cell when `value` is `None`.
    ///
    /// Cells off the board are ignored.
    pub fn set(&mut self, cell: Cell, value: Option<T>) {
        if !self.board.in_bounds(cell.i, cell.j) {
            return;
        }
        match value {
            Some(value) => {
                self.values.insert(cell, value);
            }
            None => {
                self.values.remove(&cell);
            }
        }
    }

    /// Returns the occupied cells whose value satisfies `predicate`, in
    /// row-major order.
    pub fn filter<F>(&self, predicate: F) -> Vec<Cell>
    where
        F: Fn(Option<&T>) -> bool,
    {
        self.board
            .all_cells()
            .into_iter()
            .filter(|cell| {
                self.values
                    .get(cell)
                    .is_some_and(|value| predicate(Some(value)))
            })
            .collect()
    }

    /// Returns the first occupied cell, in row-major order, whose value
    /// satisfies `predicate`.
    pub fn find<F>(&self, predicate: F) -> Option<Cell>
    where
        F: Fn(Option<&T>) -> bool,
    {
        self.board.all_cells().into_iter().find(|cell| {
            self.values
                .get(cell)
                .is_some_and(|value| predicate(Some(value)))
        })
    }

    /// Returns true if any cell satisfies `predicate`. Empty cells are
    /// offered as `None`.
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: Fn(Option<&T>) -> bool,
    {
        self.board
            .all_cells()
            .iter()
            .any(|cell| predicate(self.values.get(cell)))
    }

    /// Returns true if every cell is occupied and every value satisfies
    /// `predicate`.
    pub fn all<F>(&self, predicate: F) -> bool
    where
        F: Fn(Option<&T>) -> bool,
    {
        self.board.all_cells().iter().all(|cell| {
            self.values
                .get(cell)
                .is_some_and(|value| predicate(Some(value)))
        })
    }
}

impl<T> Deref for GameBoard<T> {
    type Target = SquareBoard;

    fn deref(&self) -> &SquareBoard {
        &self.board
    }
}
