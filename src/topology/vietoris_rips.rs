//! Vietoris-Rips Filtration Construction
//!
//! The Vietoris-Rips complex VR_r(X) is the flag complex where a
//! k-simplex [v₀, ..., vₖ] exists iff d(vᵢ, vⱼ) ≤ r for all i,j.
//! Across an ascending radius schedule these complexes are nested,
//! forming a filtration.
//!
//! Construction is by clique extension: edges are read off the
//! distance matrix, and an (m)-simplex is admitted by extending an
//! (m-1)-simplex with a vertex whose distance to every existing vertex
//! is within the radius. Extending only with indices above the
//! simplex's largest vertex generates each simplex exactly once, so
//! no post-hoc deduplication is needed and the result is independent
//! of traversal order.
//!
//! The extension search is combinatorial in the number of vertices per
//! radius step; that cost is inherent to flag-complex construction.

use ndarray::Array2;
use std::collections::HashSet;
use tracing::debug;

use super::simplex::{Simplex, SimplexSet};
use crate::error::Result;
use crate::geometry::{distance_matrix, validate_distance_matrix};

/// Configuration for filtration construction.
///
/// Passed explicitly to every builder; there is no shared global
/// state between constructions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiltrationConfig {
    /// Largest simplex dimension included in the complex. Homology up
    /// to dimension `max_dimension - 1` is supported by the result.
    pub max_dimension: usize,
    /// Number of radius steps; the schedule is `n_steps + 1` evenly
    /// spaced values from 0 to the maximum radius.
    pub n_steps: usize,
    /// Maximum radius of the schedule. `None` defaults to the largest
    /// entry of the distance matrix, at which the complex is complete.
    pub max_radius: Option<f64>,
}

impl Default for FiltrationConfig {
    fn default() -> Self {
        Self {
            max_dimension: 2,
            n_steps: 100,
            max_radius: None,
        }
    }
}

/// Vietoris-Rips filtration builder over a validated distance matrix.
pub struct VietorisRips {
    /// Distance matrix (validated at construction)
    distances: Array2<f64>,
    /// Maximum radius of the schedule
    max_radius: f64,
    /// Number of radius steps
    n_steps: usize,
    /// Largest simplex dimension constructed
    max_dimension: usize,
}

/// An ordered sequence of (radius, simplex set) pairs with
/// monotonically increasing radius. Simplex sets are nested: the set
/// at a smaller radius is a subset of the set at any larger radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Filtration {
    levels: Vec<(f64, SimplexSet)>,
}

impl Filtration {
    /// The (radius, simplex set) levels in ascending radius order.
    pub fn levels(&self) -> &[(f64, SimplexSet)] {
        &self.levels
    }

    /// Number of filtration levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Radius schedule of the filtration.
    pub fn radii(&self) -> Vec<f64> {
        self.levels.iter().map(|(r, _)| *r).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(f64, SimplexSet)> {
        self.levels.iter()
    }
}

impl VietorisRips {
    /// Create a filtration builder from a point cloud (one point per
    /// row), computing and validating the distance matrix.
    pub fn from_points(points: &Array2<f64>, config: FiltrationConfig) -> Result<Self> {
        let distances = distance_matrix(points)?;
        Ok(Self::from_validated(distances, config))
    }

    /// Create a filtration builder from a precomputed distance matrix.
    ///
    /// # Errors
    ///
    /// Rejects empty, non-square, asymmetric, or nonzero-diagonal
    /// matrices.
    pub fn from_distance_matrix(distances: &Array2<f64>, config: FiltrationConfig) -> Result<Self> {
        validate_distance_matrix(distances)?;
        Ok(Self::from_validated(distances.clone(), config))
    }

    fn from_validated(distances: Array2<f64>, config: FiltrationConfig) -> Self {
        let max_radius = config
            .max_radius
            .unwrap_or_else(|| distances.iter().copied().fold(0.0, f64::max));
        Self {
            distances,
            max_radius,
            n_steps: config.n_steps.max(1),
            max_dimension: config.max_dimension,
        }
    }

    /// Radius for a given step of the schedule.
    pub fn radius_at(&self, step: usize) -> f64 {
        self.max_radius * (step as f64) / (self.n_steps as f64)
    }

    /// The simplex set of the Vietoris-Rips complex at a schedule step.
    pub fn complex_at(&self, step: usize) -> SimplexSet {
        self.complex_at_radius(self.radius_at(step))
    }

    /// The simplex set of the Vietoris-Rips complex at an arbitrary
    /// radius, up to the configured maximum simplex dimension.
    pub fn complex_at_radius(&self, radius: f64) -> SimplexSet {
        let n = self.distances.nrows();
        let mut complex = SimplexSet::new();

        // 0-simplices are always present.
        for i in 0..n {
            complex.insert(Simplex::vertex(i));
        }

        // 1-simplices from the distance matrix. A dimension bound of
        // 0 keeps the complex at its vertex set.
        let mut frontier: Vec<Simplex> = Vec::new();
        if self.max_dimension >= 1 {
            for i in 0..n {
                for j in i + 1..n {
                    if self.distances[[i, j]] <= radius {
                        let edge = Simplex::edge(i, j);
                        complex.insert(edge.clone());
                        frontier.push(edge);
                    }
                }
            }
        }

        // Clique extension: an (m)-simplex is admitted iff the new
        // vertex is within the radius of every existing vertex.
        for _dim in 2..=self.max_dimension {
            let mut next = Vec::new();
            for simplex in &frontier {
                for v in simplex.max_vertex() + 1..n {
                    let admissible = simplex
                        .vertices()
                        .iter()
                        .all(|&u| self.distances[[u, v]] <= radius);
                    if admissible {
                        let extended = simplex.extend(v);
                        complex.insert(extended.clone());
                        next.push(extended);
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }

        complex
    }

    /// Build the full filtration: `n_steps + 1` levels at evenly
    /// spaced radii from 0 to the maximum radius.
    pub fn filtration(&self) -> Filtration {
        let levels = (0..=self.n_steps)
            .map(|step| {
                let radius = self.radius_at(step);
                let simplices = self.complex_at_radius(radius);
                debug!(step, radius, n_simplices = simplices.len(), "filtration level");
                (radius, simplices)
            })
            .collect();

        Filtration { levels }
    }

    /// All edges present at a given schedule step.
    pub fn edges_at(&self, step: usize) -> Vec<(usize, usize)> {
        let radius = self.radius_at(step);
        let n = self.distances.nrows();
        let mut edges = Vec::new();

        for i in 0..n {
            for j in i + 1..n {
                if self.distances[[i, j]] <= radius {
                    edges.push((i, j));
                }
            }
        }

        edges
    }

    /// All triangles present at a given schedule step.
    pub fn triangles_at(&self, step: usize) -> Vec<(usize, usize, usize)> {
        let radius = self.radius_at(step);
        let n = self.distances.nrows();
        let mut triangles = Vec::new();

        for i in 0..n {
            for j in i + 1..n {
                if self.distances[[i, j]] > radius {
                    continue;
                }
                for k in j + 1..n {
                    if self.distances[[i, k]] <= radius && self.distances[[j, k]] <= radius {
                        triangles.push((i, j, k));
                    }
                }
            }
        }

        triangles
    }

    /// Count connected components of the 1-skeleton using union-find.
    pub fn count_components_at(&self, step: usize) -> usize {
        let n = self.distances.nrows();
        let mut parent: Vec<usize> = (0..n).collect();
        let mut rank = vec![0usize; n];

        fn find(parent: &mut [usize], i: usize) -> usize {
            if parent[i] != i {
                parent[i] = find(parent, parent[i]);
            }
            parent[i]
        }

        fn union(parent: &mut [usize], rank: &mut [usize], x: usize, y: usize) {
            let rx = find(parent, x);
            let ry = find(parent, y);
            if rx != ry {
                if rank[rx] < rank[ry] {
                    parent[rx] = ry;
                } else if rank[rx] > rank[ry] {
                    parent[ry] = rx;
                } else {
                    parent[ry] = rx;
                    rank[rx] += 1;
                }
            }
        }

        for (i, j) in self.edges_at(step) {
            union(&mut parent, &mut rank, i, j);
        }

        let mut roots = HashSet::new();
        for i in 0..n {
            roots.insert(find(&mut parent, i));
        }
        roots.len()
    }

    /// Estimate the number of 1-cycles at a schedule step via the
    /// Euler characteristic: β₁ = E - V + β₀ - F. A lower bound when
    /// triangles do not fill all cycles.
    pub fn estimate_cycles_at(&self, step: usize) -> usize {
        let v = self.distances.nrows();
        let e = self.edges_at(step).len();
        let f = self.triangles_at(step).len();
        let beta0 = self.count_components_at(step);

        (e + beta0).saturating_sub(v + f)
    }

    /// Number of points.
    pub fn n_points(&self) -> usize {
        self.distances.nrows()
    }

    /// Number of radius steps in the schedule.
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Largest simplex dimension constructed.
    pub fn max_dimension(&self) -> usize {
        self.max_dimension
    }

    /// Maximum radius of the schedule.
    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TopologyError;
    use ndarray::array;

    fn right_triangle() -> Array2<f64> {
        array![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]
    }

    fn config(max_dimension: usize, n_steps: usize, max_radius: f64) -> FiltrationConfig {
        FiltrationConfig {
            max_dimension,
            n_steps,
            max_radius: Some(max_radius),
        }
    }

    #[test]
    fn test_right_triangle_levels() {
        // Distances: d(0,1) = d(0,2) = 1, d(1,2) = sqrt(2).
        let vr = VietorisRips::from_points(&right_triangle(), config(2, 2, 2.0)).unwrap();

        // r = 0: exactly the three vertices.
        let c0 = vr.complex_at(0);
        assert_eq!(c0.len(), 3);
        assert!(c0.iter().all(|s| s.dimension() == 0));

        // r = 1: edges (0,1) and (0,2), not (1,2).
        let c1 = vr.complex_at(1);
        assert!(c1.contains(&Simplex::edge(0, 1)));
        assert!(c1.contains(&Simplex::edge(0, 2)));
        assert!(!c1.contains(&Simplex::edge(1, 2)));
        assert!(!c1.contains(&Simplex::new(vec![0, 1, 2])));

        // r = sqrt(2): all edges plus the filled triangle.
        let c2 = vr.complex_at_radius(2.0_f64.sqrt());
        assert!(c2.contains(&Simplex::edge(1, 2)));
        assert!(c2.contains(&Simplex::new(vec![0, 1, 2])));
        assert_eq!(c2.len(), 7);
    }

    #[test]
    fn test_filtration_monotone() {
        let vr = VietorisRips::from_points(&right_triangle(), config(2, 10, 2.0)).unwrap();
        let filtration = vr.filtration();
        assert_eq!(filtration.len(), 11);

        let levels = filtration.levels();
        for w in levels.windows(2) {
            assert!(w[0].0 <= w[1].0);
            assert!(w[0].1.is_subset(&w[1].1));
        }
    }

    #[test]
    fn test_complete_at_max_distance() {
        let vr = VietorisRips::from_points(&right_triangle(), config(2, 4, 2.0)).unwrap();

        // Beyond the diameter every subset of size <= 3 is a simplex:
        // 3 vertices + 3 edges + 1 triangle.
        let c = vr.complex_at(vr.n_steps());
        assert_eq!(c.len(), 7);
    }

    #[test]
    fn test_default_max_radius_is_diameter() {
        let cfg = FiltrationConfig {
            max_dimension: 2,
            n_steps: 10,
            max_radius: None,
        };
        let vr = VietorisRips::from_points(&right_triangle(), cfg).unwrap();
        assert!((vr.max_radius() - 2.0_f64.sqrt()).abs() < 1e-12);

        let top = vr.complex_at(vr.n_steps());
        assert_eq!(top.len(), 7);
    }

    #[test]
    fn test_max_dimension_truncates() {
        // Four mutually close points: the full complex would contain a
        // tetrahedron, but max_dimension = 2 stops at triangles.
        let points = array![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
        let vr = VietorisRips::from_points(&points, config(2, 1, 3.0)).unwrap();

        let c = vr.complex_at(1);
        assert!(c.iter().all(|s| s.dimension() <= 2));
        // 4 vertices + 6 edges + 4 triangles
        assert_eq!(c.len(), 14);

        let vr3 = VietorisRips::from_points(&points, config(3, 1, 3.0)).unwrap();
        let c3 = vr3.complex_at(1);
        assert!(c3.contains(&Simplex::new(vec![0, 1, 2, 3])));
        assert_eq!(c3.len(), 15);
    }

    #[test]
    fn test_dimension_bound_zero_and_one() {
        // max_dimension = 0: only the vertex set, even past the
        // diameter.
        let vr0 = VietorisRips::from_points(&right_triangle(), config(0, 2, 2.0)).unwrap();
        let c0 = vr0.complex_at(vr0.n_steps());
        assert_eq!(c0.len(), 3);
        assert!(c0.iter().all(|s| s.dimension() == 0));

        // max_dimension = 1: the full 1-skeleton, no triangles.
        let vr1 = VietorisRips::from_points(&right_triangle(), config(1, 2, 2.0)).unwrap();
        let c1 = vr1.complex_at(vr1.n_steps());
        assert_eq!(c1.len(), 6);
        assert!(c1.iter().all(|s| s.dimension() <= 1));
        assert!(c1.contains(&Simplex::edge(1, 2)));
    }

    #[test]
    fn test_idempotent_construction() {
        let vr = VietorisRips::from_points(&right_triangle(), config(2, 8, 2.0)).unwrap();
        assert_eq!(vr.filtration(), vr.filtration());
    }

    #[test]
    fn test_single_point_trivial_filtration() {
        let points = array![[1.0, 2.0]];
        let vr = VietorisRips::from_points(&points, FiltrationConfig::default()).unwrap();

        let filtration = vr.filtration();
        for (_, simplices) in filtration.iter() {
            assert_eq!(simplices.len(), 1);
            assert!(simplices.contains(&Simplex::vertex(0)));
        }
    }

    #[test]
    fn test_rejects_malformed_matrix() {
        let cfg = FiltrationConfig::default();

        let non_square = array![[0.0, 1.0, 2.0], [1.0, 0.0, 3.0]];
        assert_eq!(
            VietorisRips::from_distance_matrix(&non_square, cfg).err(),
            Some(TopologyError::NonSquareMatrix { rows: 2, cols: 3 })
        );

        let empty = Array2::<f64>::zeros((0, 0));
        assert_eq!(
            VietorisRips::from_distance_matrix(&empty, cfg).err(),
            Some(TopologyError::EmptyInput)
        );

        let asymmetric = array![[0.0, 1.0], [2.0, 0.0]];
        assert_eq!(
            VietorisRips::from_distance_matrix(&asymmetric, cfg).err(),
            Some(TopologyError::AsymmetricMatrix { i: 0, j: 1 })
        );
    }

    #[test]
    fn test_components_across_schedule() {
        // Equilateral triangle with side 1.
        let points = array![[0.0, 0.0], [1.0, 0.0], [0.5, 0.866]];
        let vr = VietorisRips::from_points(&points, config(2, 100, 2.0)).unwrap();

        // Below the side length, three components; above, one.
        assert_eq!(vr.count_components_at(40), 3);
        assert_eq!(vr.count_components_at(60), 1);
    }
}
