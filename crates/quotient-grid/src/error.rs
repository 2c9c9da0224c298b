//! Grid lookup errors.

use thiserror::Error;

/// Errors that can occur when addressing a grid.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// The coordinate lies outside `[1, width]` on some axis.
    #[error("cell ({i}, {j}) is outside a {width}x{width} board")]
    OutOfBounds {
        /// Requested row.
        i: usize,
        /// Requested column.
        j: usize,
        /// Board width.
        width: usize,
    },
}
