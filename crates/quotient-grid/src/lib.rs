//! # quotient-grid
//!
//! Fixed-size square grids addressed by 1-based `(i, j)` coordinates.
//!
//! - [`SquareBoard`]: geometry only (bounds-checked lookup, row and column
//!   slices, four-directional neighbours)
//! - [`GameBoard`]: a square board with an optional value per cell
//!
//! Coordinates run from `1` to `width` on both axes; `i` selects the row and
//! `j` the column.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod board;
pub mod error;
pub mod game;

#[cfg(test)]
mod proptests;

pub use board::{Cell, Direction, SquareBoard};
pub use error::GridError;
pub use game::GameBoard;
