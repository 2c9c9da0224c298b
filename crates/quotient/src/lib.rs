//! # Quotient
//!
//! Exact rational arithmetic on arbitrary precision integers, plus a small
//! square-grid crate that can hold rationals (or anything else) per cell.
//!
//! ## Quick Start
//!
//! ```rust
//! use quotient::prelude::*;
//!
//! let half = 1.div_by(2)?;
//! let third: Rational = "1/3".parse()?;
//! assert_eq!((&half - &third).to_string(), "1/6");
//!
//! let mut board = GameBoard::new(3);
//! board.set(Cell::new(2, 2), Some(half.clone()));
//! assert_eq!(board.find(|v| v == Some(&half)), Some(Cell::new(2, 2)));
//! # Ok::<(), RationalError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use quotient_grid as grid;
pub use quotient_integers as integers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use quotient_grid::{Cell, Direction, GameBoard, GridError, SquareBoard};
    pub use quotient_integers::{DivBy, Integer, Rational, RationalError, RationalRange};
}
