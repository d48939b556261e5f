//! Pairwise Euclidean Distance Matrices
//!
//! The distance matrix d(i,j) = ‖xᵢ - xⱼ‖₂ is computed once per point
//! cloud and is the sole input to Vietoris-Rips construction. It is
//! symmetric with zero diagonal by construction; matrices supplied by
//! callers are checked for the same invariants before use.

use ndarray::Array2;

use crate::error::{Result, TopologyError};

/// Tolerance used when checking symmetry and zero diagonal of a
/// caller-supplied distance matrix.
pub const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// Compute the n×n Euclidean distance matrix of a point cloud.
///
/// `points` has one point per row; the column count fixes the ambient
/// dimension, so rows cannot disagree on dimensionality.
///
/// # Errors
///
/// Returns [`TopologyError::EmptyInput`] for a cloud with no points.
pub fn distance_matrix(points: &Array2<f64>) -> Result<Array2<f64>> {
    let n = points.nrows();
    if n == 0 {
        return Err(TopologyError::EmptyInput);
    }
    let dim = points.ncols();

    let mut dm = Array2::<f64>::zeros((n, n));

    for i in 0..n {
        for j in i + 1..n {
            let mut dist_sq = 0.0;
            for d in 0..dim {
                let diff = points[[i, d]] - points[[j, d]];
                dist_sq += diff * diff;
            }
            let dist = dist_sq.sqrt();
            dm[[i, j]] = dist;
            dm[[j, i]] = dist;
        }
    }

    Ok(dm)
}

/// Check that a caller-supplied matrix is a plausible distance matrix:
/// non-empty, square, symmetric, zero diagonal.
///
/// The triangle inequality is not checked; it is inherited from the
/// Euclidean metric when the matrix comes from [`distance_matrix`],
/// and Vietoris-Rips construction does not rely on it.
pub fn validate_distance_matrix(dm: &Array2<f64>) -> Result<()> {
    let (rows, cols) = dm.dim();
    if rows == 0 || cols == 0 {
        return Err(TopologyError::EmptyInput);
    }
    if rows != cols {
        return Err(TopologyError::NonSquareMatrix { rows, cols });
    }

    for i in 0..rows {
        if dm[[i, i]].abs() > SYMMETRY_TOLERANCE {
            return Err(TopologyError::NonZeroDiagonal { i });
        }
        for j in i + 1..rows {
            if (dm[[i, j]] - dm[[j, i]]).abs() > SYMMETRY_TOLERANCE {
                return Err(TopologyError::AsymmetricMatrix { i, j });
            }
        }
    }

    Ok(())
}
