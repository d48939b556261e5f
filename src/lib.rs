//! # tda-rips
//!
//! Classical Vietoris-Rips filtration construction over point clouds,
//! with deterministic topological summaries.
//!
//! ## Pipeline
//!
//! 1. **Distance matrix**: pairwise Euclidean distances over an
//!    ordered point cloud (n×d array, one point per row).
//!
//! 2. **Filtration**: for an evenly spaced radius schedule from 0 to
//!    a maximum radius, the Vietoris-Rips (flag) complex at each
//!    radius, built by clique extension up to a configured maximum
//!    simplex dimension. The complexes are nested, and construction
//!    is deterministic and idempotent.
//!
//! 3. **Summaries** derived from the real complexes: Betti numbers
//!    (β₀ exact via union-find, β₁ estimated via the Euler
//!    characteristic) and graph-Laplacian spectra of the 1-skeleton
//!    via a classical symmetric eigen-solver.
//!
//! Everything is a synchronous pure function over immutable value
//! objects; configuration is passed explicitly per construction, and
//! there is no global state.
//!
//! ## Example
//!
//! ```
//! use ndarray::array;
//! use tda_rips::{FiltrationConfig, VietorisRips};
//!
//! let points = array![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
//! let vr = VietorisRips::from_points(&points, FiltrationConfig::default())?;
//!
//! let filtration = vr.filtration();
//! assert_eq!(filtration.len(), vr.n_steps() + 1);
//!
//! // The first level contains only the three vertices.
//! let (radius, simplices) = &filtration.levels()[0];
//! assert_eq!(*radius, 0.0);
//! assert_eq!(simplices.len(), 3);
//! # Ok::<(), tda_rips::TopologyError>(())
//! ```
//!
//! ## References
//!
//! - Edelsbrunner & Harer, "Computational Topology" (2010)
//! - Zomorodian, "Fast construction of the Vietoris-Rips complex" (2010)

pub mod error;
pub mod geometry;
pub mod topology;

// Re-exports from error
pub use error::{Result, TopologyError};

// Re-exports from geometry
pub use geometry::{distance_matrix, validate_distance_matrix};

// Re-exports from topology
pub use topology::{
    // Complex construction
    VietorisRips,
    FiltrationConfig,
    Filtration,
    Simplex,
    SimplexSet,
    // Derived invariants
    BettiNumbers,
    BettiCurve,
};
