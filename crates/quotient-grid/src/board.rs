//! Square board geometry.

use std::fmt;
use tracing::debug;

use crate::error::GridError;

/// A board coordinate. Both axes are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index.
    pub i: usize,
    /// Column index.
    pub j: usize,
}

impl Cell {
    /// Creates a cell at row `i`, column `j`.
    #[must_use]
    pub const fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

/// One of the four axis-aligned neighbour directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 1.
    Up,
    /// Towards row `width`.
    Down,
    /// Towards column 1.
    Left,
    /// Towards column `width`.
    Right,
}

impl Direction {
    /// All directions, in `Up, Down, Left, Right` order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A `width` x `width` board of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SquareBoard {
    width: usize,
}

impl SquareBoard {
    /// Creates a board with `width` rows and `width` columns.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Returns the number of cells along each side.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns true if `(i, j)` lies on the board.
    #[must_use]
    pub fn in_bounds(&self, i: usize, j: usize) -> bool {
        (1..=self.width).contains(&i) && (1..=self.width).contains(&j)
    }

    /// Returns the cell at `(i, j)`, or `None` if it is off the board.
    #[must_use]
    pub fn get_cell_or_none(&self, i: usize, j: usize) -> Option<Cell> {
        self.in_bounds(i, j).then_some(Cell::new(i, j))
    }

    /// Returns the cell at `(i, j)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the coordinate is off the board.
    pub fn get_cell(&self, i: usize, j: usize) -> Result<Cell, GridError> {
        self.get_cell_or_none(i, j).ok_or_else(|| {
            debug!(i, j, width = self.width, "cell lookup out of bounds");
            GridError::OutOfBounds {
                i,
                j,
                width: self.width,
            }
        })
    }

    /// Returns every cell in row-major order.
    #[must_use]
    pub fn all_cells(&self) -> Vec<Cell> {
        (1..=self.width)
            .flat_map(|i| (1..=self.width).map(move |j| Cell::new(i, j)))
            .collect()
    }

    /// Returns the cells of row `i` from column `first` to column `last`.
    ///
    /// The slice is inclusive and clipped to the board. It runs right to left
    /// when `first > last`. An off-board row yields no cells.
    #[must_use]
    pub fn row(&self, i: usize, first: usize, last: usize) -> Vec<Cell> {
        if !(1..=self.width).contains(&i) {
            return Vec::new();
        }
        self.span(first, last).map(|j| Cell::new(i, j)).collect()
    }

    /// Returns the cells of column `j` from row `first` to row `last`.
    ///
    /// Same clipping and ordering rules as [`SquareBoard::row`].
    #[must_use]
    pub fn column(&self, first: usize, last: usize, j: usize) -> Vec<Cell> {
        if !(1..=self.width).contains(&j) {
            return Vec::new();
        }
        self.span(first, last).map(|i| Cell::new(i, j)).collect()
    }

    /// Returns the adjacent cell in `direction`, or `None` at the edge.
    #[must_use]
    pub fn neighbour(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let Cell { i, j } = cell;
        let (i, j) = match direction {
            Direction::Up => (i.checked_sub(1)?, j),
            Direction::Down => (i + 1, j),
            Direction::Left => (i, j.checked_sub(1)?),
            Direction::Right => (i, j + 1),
        };
        self.get_cell_or_none(i, j)
    }

    /// Returns the on-board neighbours of `cell` in `Up, Down, Left, Right` order.
    #[must_use]
    pub fn neighbours(&self, cell: Cell) -> Vec<Cell> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| self.neighbour(cell, direction))
            .collect()
    }

    /// Indices between `first` and `last` clipped to `[1, width]`, walking
    /// from `first` towards `last`.
    fn span(&self, first: usize, last: usize) -> Box<dyn Iterator<Item = usize>> {
        let lo = first.min(last).max(1);
        let hi = first.max(last).min(self.width);
        if first <= last {
            Box::new(lo..=hi)
        } else {
            Box::new((lo..=hi).rev())
        }
    }
}
