#![forbid(unsafe_code)]

mod grid;
mod stats;
mod union_find;

pub use grid::Percolation;
pub use stats::{mean, stddev, PercolationStats};
pub use union_find::UnionFind;

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("grid size and trial count must be positive")]
    InvalidArgument,
    #[error("cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        size: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
