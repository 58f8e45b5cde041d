//! N-dimensional hypercube geometry
//!
//! An N-cube has 2^N vertices (all combinations of +-0.5 per coordinate)
//! and N * 2^(N-1) edges, one for every pair of vertices that differ in a
//! single coordinate.
//!
//! Vertex `i` is described by the bits of `i`: bit `n` set means coordinate
//! `n` is +0.5, clear means -0.5. Two vertices share an edge exactly when
//! their indices differ in one bit.

use crate::{HypercubeError, RotationPlane};
use crate::rotation::rotate_vertices;

/// Smallest dimension that still leaves something to collapse into 3D
pub const MIN_DIMENSION: usize = 3;

/// Largest supported dimension (65536 vertices, 524288 edges)
pub const MAX_DIMENSION: usize = 16;

/// An edge of the hypercube as a pair of vertex indices
///
/// `v1` always has the differing bit clear and `v2` has it set, so
/// `v1 < v2` holds for every generated edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub v1: usize,
    pub v2: usize,
}

impl Edge {
    /// Create a new edge between two vertex indices
    #[inline]
    pub fn new(v1: usize, v2: usize) -> Self {
        Self { v1, v2 }
    }

    /// The coordinate axis this edge runs along
    #[inline]
    pub fn axis(&self) -> usize {
        (self.v1 ^ self.v2).trailing_zeros() as usize
    }
}

/// An N-dimensional hypercube centered at the origin with unit side length
///
/// Vertex coordinates live in one contiguous buffer, `dimension` values per
/// vertex. Rotation mutates them in place; the buffer is never reallocated.
#[derive(Clone, Debug)]
pub struct Hypercube {
    dimension: usize,
    vertices: Vec<f64>,
    edges: Vec<Edge>,
}

impl Hypercube {
    /// Build the vertices and edges of an N-cube
    ///
    /// # Errors
    /// Returns [`HypercubeError::DimensionTooSmall`] below [`MIN_DIMENSION`] and
    /// [`HypercubeError::DimensionTooLarge`] above [`MAX_DIMENSION`].
    pub fn new(dimension: usize) -> Result<Self, HypercubeError> {
        check_dimension(dimension)?;

        let vertices = generate_vertices(dimension);
        let edges = generate_edges(dimension);

        debug_assert_eq!(edges.len(), edge_count(dimension));

        Ok(Self {
            dimension,
            vertices,
            edges,
        })
    }

    /// Number of coordinates per vertex
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of vertices (2^N)
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / self.dimension
    }

    /// Number of edges (N * 2^(N-1))
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All vertex coordinates, `dimension` values per vertex
    #[inline]
    pub fn vertices(&self) -> &[f64] {
        &self.vertices
    }

    /// Mutable flat coordinates
    ///
    /// Only positions change through this; the edge list stays valid.
    pub fn vertices_mut(&mut self) -> &mut [f64] {
        &mut self.vertices
    }

    /// Coordinates of a single vertex
    ///
    /// # Panics
    /// Panics if `index` is not below [`Hypercube::vertex_count`].
    pub fn vertex(&self, index: usize) -> &[f64] {
        let start = index * self.dimension;
        &self.vertices[start..start + self.dimension]
    }

    /// Iterate over vertices as coordinate slices
    pub fn iter_vertices(&self) -> impl Iterator<Item = &[f64]> {
        self.vertices.chunks_exact(self.dimension)
    }

    /// The edge list, in generation order
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Rotate every vertex in `plane` by `angle` radians
    ///
    /// # Errors
    /// Returns [`HypercubeError::InvalidRotationPlane`] if the plane does not
    /// fit this hypercube.
    pub fn rotate(&mut self, plane: RotationPlane, angle: f64) -> Result<(), HypercubeError> {
        plane.validate(self.dimension)?;
        rotate_vertices(&mut self.vertices, self.dimension, plane, angle);
        Ok(())
    }
}

/// Check that `dimension` lies in [`MIN_DIMENSION`, `MAX_DIMENSION`]
pub fn check_dimension(dimension: usize) -> Result<(), HypercubeError> {
    if dimension < MIN_DIMENSION {
        return Err(HypercubeError::DimensionTooSmall {
            dimension,
            minimum: MIN_DIMENSION,
        });
    }
    if dimension > MAX_DIMENSION {
        return Err(HypercubeError::DimensionTooLarge {
            dimension,
            maximum: MAX_DIMENSION,
        });
    }
    Ok(())
}

/// Expected number of edges of an N-cube
#[inline]
pub fn edge_count(dimension: usize) -> usize {
    dimension << (dimension - 1)
}

/// Generate the 2^N vertices as a flat coordinate buffer
///
/// Coordinate `n` of vertex `i` is `((i >> n) & 1) - 0.5`.
pub fn generate_vertices(dimension: usize) -> Vec<f64> {
    let count = 1usize << dimension;
    let mut vertices = Vec::with_capacity(count * dimension);

    for i in 0..count {
        for n in 0..dimension {
            vertices.push(((i >> n) & 1) as f64 - 0.5);
        }
    }

    vertices
}

/// Generate the edges with the bit-doubling sweep
///
/// For axis `j` the index space is walked in blocks of `2 * 2^j`; within a
/// block the first `2^j` indices are joined to their partners `2^j` further
/// on. Each edge comes out exactly once, ordered by axis.
pub fn generate_edges(dimension: usize) -> Vec<Edge> {
    let count = 1usize << dimension;
    let mut edges = Vec::with_capacity(edge_count(dimension));

    for j in 0..dimension {
        let shift = 1usize << j;

        for start in (0..count).step_by(shift * 2) {
            for idx in start..start + shift {
                edges.push(Edge::new(idx, idx + shift));
            }
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vertex_count() {
        for n in MIN_DIMENSION..=8 {
            let h = Hypercube::new(n).unwrap();
            assert_eq!(h.vertex_count(), 1 << n);
            assert_eq!(h.vertices().len(), (1 << n) * n);
        }
    }

    #[test]
    fn test_edge_count() {
        for n in MIN_DIMENSION..=8 {
            let h = Hypercube::new(n).unwrap();
            assert_eq!(h.edge_count(), n * (1 << (n - 1)));
            assert_eq!(h.edge_count(), edge_count(n));
        }
    }

    #[test]
    fn test_every_vertex_has_degree_n() {
        for n in MIN_DIMENSION..=7 {
            let h = Hypercube::new(n).unwrap();
            let mut degree = vec![0usize; h.vertex_count()];
            for edge in h.edges() {
                degree[edge.v1] += 1;
                degree[edge.v2] += 1;
            }
            assert!(degree.iter().all(|&d| d == n), "N={} degrees {:?}", n, degree);
        }
    }

    #[test]
    fn test_cube_vertex_positions() {
        let h = Hypercube::new(3).unwrap();
        assert_eq!(h.vertex(0), &[-0.5, -0.5, -0.5]);
        assert_eq!(h.vertex(7), &[0.5, 0.5, 0.5]);
        assert_eq!(h.vertex(5), &[0.5, -0.5, 0.5]);
        assert_eq!(h.vertex(2), &[-0.5, 0.5, -0.5]);
    }

    #[test]
    fn test_vertex_bit_mapping() {
        let h = Hypercube::new(5).unwrap();
        for (i, v) in h.iter_vertices().enumerate() {
            for (n, &c) in v.iter().enumerate() {
                let expected = if (i >> n) & 1 == 1 { 0.5 } else { -0.5 };
                assert_eq!(c, expected, "vertex {} coordinate {}", i, n);
            }
        }
    }

    #[test]
    fn test_cube_edges_match_standard_cube() {
        let h = Hypercube::new(3).unwrap();
        let edges: HashSet<(usize, usize)> = h.edges().iter().map(|e| (e.v1, e.v2)).collect();

        let expected: HashSet<(usize, usize)> = [
            (0, 1), (2, 3), (4, 5), (6, 7),
            (0, 2), (1, 3), (4, 6), (5, 7),
            (0, 4), (1, 5), (2, 6), (3, 7),
        ]
        .into_iter()
        .collect();

        assert_eq!(h.edge_count(), 12);
        assert_eq!(edges, expected);
    }

    #[test]
    fn test_edge_generation_order() {
        let edges = generate_edges(3);
        assert_eq!(edges[0], Edge::new(0, 1));
        assert_eq!(edges[4], Edge::new(0, 2));
        assert_eq!(edges[8], Edge::new(0, 4));
        assert_eq!(edges[11], Edge::new(3, 7));
    }

    #[test]
    fn test_no_duplicate_edges_or_self_loops() {
        for n in MIN_DIMENSION..=8 {
            let h = Hypercube::new(n).unwrap();
            let mut seen = HashSet::new();
            for edge in h.edges() {
                assert_ne!(edge.v1, edge.v2, "self-loop at {}", edge.v1);
                let canonical = (edge.v1.min(edge.v2), edge.v1.max(edge.v2));
                assert!(seen.insert(canonical), "duplicate edge {:?}", canonical);
            }
        }
    }

    #[test]
    fn test_edges_differ_in_one_coordinate() {
        let h = Hypercube::new(4).unwrap();
        for edge in h.edges() {
            assert!((edge.v1 ^ edge.v2).is_power_of_two());
            assert!(edge.v1 < edge.v2);

            let differing = h
                .vertex(edge.v1)
                .iter()
                .zip(h.vertex(edge.v2))
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(differing, 1);
        }
    }

    #[test]
    fn test_all_hypercube_edges_present() {
        // Every pair one bit apart is an edge
        let h = Hypercube::new(4).unwrap();
        let edges: HashSet<(usize, usize)> = h.edges().iter().map(|e| (e.v1, e.v2)).collect();
        for i in 0usize..16 {
            for j in (i + 1)..16 {
                if (i ^ j).count_ones() == 1 {
                    assert!(edges.contains(&(i, j)), "missing edge ({}, {})", i, j);
                }
            }
        }
    }

    #[test]
    fn test_edge_axis() {
        assert_eq!(Edge::new(0, 1).axis(), 0);
        assert_eq!(Edge::new(5, 13).axis(), 3);
        let h = Hypercube::new(4).unwrap();
        let per_axis = h.edge_count() / 4;
        for (i, edge) in h.edges().iter().enumerate() {
            assert_eq!(edge.axis(), i / per_axis);
        }
    }

    #[test]
    fn test_dimension_too_small() {
        for n in 0..MIN_DIMENSION {
            assert_eq!(
                Hypercube::new(n).unwrap_err(),
                HypercubeError::DimensionTooSmall { dimension: n, minimum: 3 }
            );
        }
    }

    #[test]
    fn test_dimension_too_large() {
        assert_eq!(
            Hypercube::new(MAX_DIMENSION + 1).unwrap_err(),
            HypercubeError::DimensionTooLarge { dimension: 17, maximum: 16 }
        );
    }

    #[test]
    fn test_rotate_rejects_invalid_plane() {
        let mut h = Hypercube::new(3).unwrap();
        let before = h.vertices().to_vec();
        assert!(h.rotate(RotationPlane::ZW, 0.5).is_err());
        assert_eq!(h.vertices(), &before[..]);
    }

    #[test]
    fn test_vertices_mut_keeps_topology() {
        let mut h = Hypercube::new(4).unwrap();
        let edges = h.edges().to_vec();

        h.vertices_mut()[0] = 3.0;

        assert_eq!(h.vertex(0)[0], 3.0);
        assert_eq!(h.edges(), &edges[..]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut h1 = Hypercube::new(4).unwrap();
        let h2 = h1.clone();
        h1.rotate(RotationPlane::ZW, 1.0).unwrap();
        assert_ne!(h1.vertices(), h2.vertices());
        assert_eq!(h1.edges(), h2.edges());
    }
}
