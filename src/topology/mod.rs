//! Topology Module: Vietoris-Rips Filtrations and Their Invariants
//!
//! For a point cloud X we construct a filtration of simplicial
//! complexes VR_r(X) indexed by the scale parameter r. A simplex
//! belongs to VR_r(X) iff all pairwise distances among its vertices
//! are at most r (flag-complex rule), so the complexes are nested as
//! r grows.
//!
//! Deterministic summaries are derived from the actual complexes:
//!
//! - `betti`: β₀ via union-find, β₁ via the Euler characteristic.
//! - `spectral`: graph-Laplacian spectrum of the 1-skeleton through a
//!   classical symmetric eigen-solver.
//!
//! Persistence pairing (birth/death intervals) is deliberately absent;
//! see DESIGN.md.

mod betti;
mod simplex;
pub mod spectral;
mod vietoris_rips;

pub use betti::{BettiCurve, BettiNumbers};
pub use simplex::{Simplex, SimplexSet};
pub use vietoris_rips::{Filtration, FiltrationConfig, VietorisRips};
