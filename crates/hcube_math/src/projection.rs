//! Perspective collapse from N dimensions down to 3
//!
//! A point is collapsed one dimension at a time, highest axis first. The
//! highest remaining coordinate acts as depth and every lower coordinate is
//! scaled by `focal / (depth + focal)`. Repeating until three coordinates
//! remain gives the point handed to the 3D camera.
//!
//! When `depth + focal` reaches zero the divide is degenerate and the result
//! is infinite or NaN. That is left to the caller unless a minimum
//! denominator is configured on the [`Projector`].

use crate::hypercube::check_dimension;
use crate::{HypercubeError, MIN_DIMENSION};

/// Collapse a single point in place
///
/// On return `point[0..3]` holds the projected position; the remaining
/// entries are stale. Points of length 3 or less are left unchanged.
pub fn collapse(point: &mut [f64], focal_distance: f64, min_denominator: Option<f64>) {
    for ind in (MIN_DIMENSION..point.len()).rev() {
        let last = point[ind];
        let denominator = clamp_denominator(last + focal_distance, min_denominator);

        for p in &mut point[..ind] {
            *p = focal_distance * *p / denominator;
        }
    }
}

fn clamp_denominator(denominator: f64, min_denominator: Option<f64>) -> f64 {
    match min_denominator {
        Some(min) if denominator.abs() < min => {
            if denominator < 0.0 {
                -min
            } else {
                min
            }
        }
        _ => denominator,
    }
}

/// Projects whole vertex sets, reusing one scratch buffer across frames
///
/// The buffer is sized for a fixed dimension and vertex count when the
/// projector is created; projecting never allocates.
#[derive(Clone, Debug)]
pub struct Projector {
    dimension: usize,
    buffer: Box<[f64]>,
    min_denominator: Option<f64>,
}

impl Projector {
    /// Create a projector for `vertex_count` vertices of `dimension` coordinates
    ///
    /// # Errors
    /// Fails for the same dimensions [`crate::Hypercube::new`] rejects.
    pub fn new(dimension: usize, vertex_count: usize) -> Result<Self, HypercubeError> {
        check_dimension(dimension)?;

        Ok(Self {
            dimension,
            buffer: vec![0.0; dimension * vertex_count].into_boxed_slice(),
            min_denominator: None,
        })
    }

    /// Clamp perspective denominators to at least this magnitude
    ///
    /// `None` disables the clamp, letting degenerate vertices go non-finite.
    pub fn with_min_denominator(mut self, min_denominator: Option<f64>) -> Self {
        self.min_denominator = min_denominator.map(f64::abs);
        self
    }

    /// Configured denominator clamp, if any
    pub fn min_denominator(&self) -> Option<f64> {
        self.min_denominator
    }

    /// Number of coordinates per vertex
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of vertices the buffer holds
    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / self.dimension
    }

    /// Copy `vertices` into the scratch buffer and collapse each one
    ///
    /// `vertices` is a flat buffer with `dimension` values per vertex and must
    /// match the size this projector was built for. The source is not modified.
    ///
    /// # Panics
    /// Panics if `vertices` has a different length than the scratch buffer.
    pub fn project(&mut self, vertices: &[f64], focal_distance: f64) -> Projection<'_> {
        self.buffer.copy_from_slice(vertices);

        for point in self.buffer.chunks_exact_mut(self.dimension) {
            collapse(point, focal_distance, self.min_denominator);
        }

        Projection {
            buffer: &self.buffer,
            dimension: self.dimension,
        }
    }
}

/// Projected points borrowed from a [`Projector`]'s scratch buffer
#[derive(Clone, Copy, Debug)]
pub struct Projection<'a> {
    buffer: &'a [f64],
    dimension: usize,
}

impl<'a> Projection<'a> {
    /// Number of projected points
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len() / self.dimension
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Projected 3D position of vertex `index`
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    #[inline]
    pub fn point(&self, index: usize) -> [f64; 3] {
        let start = index * self.dimension;
        [
            self.buffer[start],
            self.buffer[start + 1],
            self.buffer[start + 2],
        ]
    }

    /// Iterate over all projected points in vertex order
    pub fn points(&self) -> impl Iterator<Item = [f64; 3]> + 'a {
        let buffer: &'a [f64] = self.buffer;
        buffer
            .chunks_exact(self.dimension)
            .map(|p| [p[0], p[1], p[2]])
    }
}
