//! Spectral Analysis of the Filtration 1-Skeleton
//!
//! The combinatorial graph Laplacian L = D - A of the 1-skeleton at a
//! filtration scale is symmetric positive semi-definite. Its kernel
//! dimension equals the number of connected components, so the
//! spectrum gives an independent, linear-algebraic route to β₀ that
//! can be cross-checked against union-find.
//!
//! Eigenvalues come from a direct classical symmetric eigen-solver
//! (`nalgebra::SymmetricEigen`); no other machinery is involved.

use nalgebra::DMatrix;
use ndarray::Array2;

use super::VietorisRips;

/// Combinatorial graph Laplacian L = D - A of the 1-skeleton at a
/// filtration step.
pub fn graph_laplacian(vr: &VietorisRips, step: usize) -> Array2<f64> {
    let n = vr.n_points();
    let mut lap = Array2::<f64>::zeros((n, n));

    for (i, j) in vr.edges_at(step) {
        lap[[i, i]] += 1.0;
        lap[[j, j]] += 1.0;
        lap[[i, j]] -= 1.0;
        lap[[j, i]] -= 1.0;
    }

    lap
}

/// Eigenvalues of the graph Laplacian at a filtration step, sorted
/// ascending. All eigenvalues are real and non-negative up to
/// numerical error.
pub fn laplacian_spectrum(vr: &VietorisRips, step: usize) -> Vec<f64> {
    let lap = graph_laplacian(vr, step);
    let n = vr.n_points();

    let m = DMatrix::from_fn(n, n, |i, j| lap[[i, j]]);
    let eigen = m.symmetric_eigen();

    let mut values: Vec<f64> = eigen.eigenvalues.iter().copied().collect();
    values.sort_by(f64::total_cmp);
    values
}

/// Rank of the Laplacian: eigenvalues with magnitude above `tol`.
pub fn spectral_rank(vr: &VietorisRips, step: usize, tol: f64) -> usize {
    laplacian_spectrum(vr, step)
        .iter()
        .filter(|v| v.abs() > tol)
        .count()
}

/// Kernel dimension of the Laplacian, which equals the number of
/// connected components of the 1-skeleton.
pub fn zero_eigenvalue_count(vr: &VietorisRips, step: usize, tol: f64) -> usize {
    vr.n_points() - spectral_rank(vr, step, tol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::FiltrationConfig;
    use ndarray::array;

    const TOL: f64 = 1e-9;

    fn vr_triangle() -> VietorisRips {
        // Equilateral triangle with side 1.
        let points = array![[0.0, 0.0], [1.0, 0.0], [0.5, 0.866]];
        let cfg = FiltrationConfig {
            max_dimension: 2,
            n_steps: 100,
            max_radius: Some(2.0),
        };
        VietorisRips::from_points(&points, cfg).unwrap()
    }

    #[test]
    fn test_laplacian_rows_sum_to_zero() {
        let vr = vr_triangle();
        let lap = graph_laplacian(&vr, 60);

        for i in 0..vr.n_points() {
            let row_sum: f64 = (0..vr.n_points()).map(|j| lap[[i, j]]).sum();
            assert!(row_sum.abs() < TOL);
        }
    }

    #[test]
    fn test_kernel_matches_union_find() {
        let vr = vr_triangle();

        for step in [0, 40, 60, 100] {
            assert_eq!(
                zero_eigenvalue_count(&vr, step, TOL),
                vr.count_components_at(step),
            );
        }
    }

    #[test]
    fn test_complete_graph_spectrum() {
        // Fully connected triangle: Laplacian spectrum of K3 is
        // {0, 3, 3}.
        let vr = vr_triangle();
        let spectrum = laplacian_spectrum(&vr, 100);

        assert_eq!(spectrum.len(), 3);
        assert!(spectrum[0].abs() < TOL);
        assert!((spectrum[1] - 3.0).abs() < 1e-9);
        assert!((spectrum[2] - 3.0).abs() < 1e-9);

        assert_eq!(spectral_rank(&vr, 100, TOL), 2);
    }

    #[test]
    fn test_empty_graph_has_full_kernel() {
        let vr = vr_triangle();
        // r = 0: no edges, Laplacian is zero, kernel is everything.
        assert_eq!(zero_eigenvalue_count(&vr, 0, TOL), 3);
        assert_eq!(spectral_rank(&vr, 0, TOL), 0);
    }
}
