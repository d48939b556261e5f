//! Simplices: Canonical Vertex Tuples
//!
//! A k-simplex is a set of k+1 distinct point indices. Simplices are
//! stored canonically as ascending vertex vectors, so two simplices
//! over the same vertices compare equal regardless of the order in
//! which the construction discovered them. `Ord` follows the canonical
//! vector, which gives simplex sets a deterministic iteration order.

use std::collections::BTreeSet;
use std::fmt;

/// A simplex identified by its sorted vertex indices.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Simplex {
    vertices: Vec<usize>,
}

/// The set of simplices present at one filtration level.
pub type SimplexSet = BTreeSet<Simplex>;

impl Simplex {
    /// Create a simplex from vertex indices, canonicalizing to a
    /// sorted, deduplicated representation.
    ///
    /// # Panics
    ///
    /// A simplex has at least one vertex; panics on empty input.
    pub fn new(mut vertices: Vec<usize>) -> Self {
        assert!(!vertices.is_empty(), "simplex requires at least one vertex");
        vertices.sort_unstable();
        vertices.dedup();
        Self { vertices }
    }

    /// A 0-simplex for a single point.
    pub fn vertex(v: usize) -> Self {
        Self { vertices: vec![v] }
    }

    /// A 1-simplex for a pair of points.
    pub fn edge(i: usize, j: usize) -> Self {
        Self::new(vec![i, j])
    }

    /// Sorted vertex indices.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Dimension = cardinality - 1.
    pub fn dimension(&self) -> usize {
        self.vertices.len() - 1
    }

    /// Whether the vertex belongs to this simplex.
    pub fn contains(&self, v: usize) -> bool {
        self.vertices.binary_search(&v).is_ok()
    }

    /// Largest vertex index. Drives clique extension: a simplex is
    /// only extended with strictly larger indices, so every simplex
    /// is generated exactly once.
    pub fn max_vertex(&self) -> usize {
        *self.vertices.last().expect("simplex is never empty")
    }

    /// Extend with one additional vertex, producing a simplex of one
    /// dimension higher.
    pub fn extend(&self, v: usize) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.push(v);
        Self::new(vertices)
    }

    /// All codimension-1 faces. A 0-simplex has none.
    pub fn faces(&self) -> Vec<Simplex> {
        if self.vertices.len() < 2 {
            return Vec::new();
        }
        (0..self.vertices.len())
            .map(|i| {
                let mut face = self.vertices.clone();
                face.remove(i);
                Simplex { vertices: face }
            })
            .collect()
    }
}

impl fmt::Display for Simplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (k, v) in self.vertices.iter().enumerate() {
            if k > 0 {
                write!(f, ",")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let a = Simplex::new(vec![2, 0, 1]);
        let b = Simplex::new(vec![0, 1, 2]);
        assert_eq!(a, b);
        assert_eq!(a.vertices(), &[0, 1, 2]);
        assert_eq!(a.dimension(), 2);
    }

    #[test]
    fn test_duplicate_vertices_collapse() {
        let s = Simplex::new(vec![3, 3, 1]);
        assert_eq!(s.vertices(), &[1, 3]);
        assert_eq!(s.dimension(), 1);
    }

    #[test]
    fn test_extend_and_faces() {
        let edge = Simplex::edge(0, 2);
        let tri = edge.extend(1);
        assert_eq!(tri.vertices(), &[0, 1, 2]);

        let faces = tri.faces();
        assert_eq!(faces.len(), 3);
        assert!(faces.contains(&Simplex::edge(0, 1)));
        assert!(faces.contains(&Simplex::edge(0, 2)));
        assert!(faces.contains(&Simplex::edge(1, 2)));

        assert!(Simplex::vertex(5).faces().is_empty());
    }

    #[test]
    #[should_panic(expected = "at least one vertex")]
    fn test_empty_vertex_list_rejected() {
        Simplex::new(Vec::new());
    }

    #[test]
    fn test_display() {
        assert_eq!(Simplex::new(vec![2, 0]).to_string(), "(0,2)");
    }
}
