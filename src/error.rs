//! Error types for distance matrix validation and filtration construction.
//!
//! All construction paths are synchronous pure functions over immutable
//! data, so failures surface immediately to the caller; nothing is
//! retried or recovered internally.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TopologyError>;

/// Errors raised when validating inputs to the filtration pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopologyError {
    /// Point cloud or distance matrix with zero entries.
    #[error("input contains no points")]
    EmptyInput,

    /// Distance matrix whose row and column counts differ.
    #[error("distance matrix is not square ({rows}x{cols})")]
    NonSquareMatrix { rows: usize, cols: usize },

    /// Distance matrix violating d(i,j) = d(j,i) beyond tolerance.
    #[error("distance matrix is asymmetric at entry ({i}, {j})")]
    AsymmetricMatrix { i: usize, j: usize },

    /// Distance matrix with a nonzero self-distance.
    #[error("distance matrix has nonzero diagonal at index {i}")]
    NonZeroDiagonal { i: usize },
}
