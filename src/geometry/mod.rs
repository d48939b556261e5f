//! Geometry Module: Point Clouds and Pairwise Distances
//!
//! A point cloud is an ordered sequence of n points in d-dimensional
//! Euclidean space, represented as an n×d `ndarray::Array2<f64>` (one
//! point per row). The derived distance matrix is the only geometric
//! object the topology layer consumes.

mod distance;

pub use distance::{distance_matrix, validate_distance_matrix, SYMMETRY_TOLERANCE};
