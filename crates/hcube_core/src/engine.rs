//! Hypercube engine
//!
//! Owns one hypercube's live geometry and runs the per-frame pipeline:
//! rotate the stored vertices, project them into the reused scratch buffer,
//! and hand every edge to a [`LinePrimitive`].

use hcube_math::{
    rotate_vertices, Edge, Hypercube, HypercubeError, Projection, Projector, RotationPlane,
};

use crate::edges::for_each_edge;
use crate::line::LinePrimitive;

/// Rotating, projecting N-cube
///
/// Topology is fixed at construction; only rotation mutates vertex
/// coordinates. Projection reads the vertices and writes the engine's own
/// scratch buffer, so rotation state carries over between frames.
#[derive(Clone, Debug)]
pub struct HypercubeEngine {
    hypercube: Hypercube,
    projector: Projector,
    planes: Vec<RotationPlane>,
}

impl HypercubeEngine {
    /// Create an engine for an N-cube animated in the (2, 3) plane
    ///
    /// A 3-cube has no axis 3, so it starts with no rotation planes.
    ///
    /// # Errors
    /// Fails when `dimension` is outside the supported range; nothing is
    /// clamped.
    pub fn new(dimension: usize) -> Result<Self, HypercubeError> {
        let hypercube = Hypercube::new(dimension)?;
        let projector = Projector::new(dimension, hypercube.vertex_count())?;

        log::debug!(
            "Built {}-cube: {} vertices, {} edges",
            dimension,
            hypercube.vertex_count(),
            hypercube.edge_count()
        );

        let planes = if RotationPlane::ZW.validate(dimension).is_ok() {
            vec![RotationPlane::ZW]
        } else {
            Vec::new()
        };

        Ok(Self {
            hypercube,
            projector,
            planes,
        })
    }

    /// Replace the planes animated by [`HypercubeEngine::rotate`]
    ///
    /// An empty list leaves the hypercube static.
    pub fn with_rotation_planes(
        mut self,
        planes: impl IntoIterator<Item = RotationPlane>,
    ) -> Result<Self, HypercubeError> {
        let planes: Vec<RotationPlane> = planes.into_iter().collect();
        for plane in &planes {
            plane.validate(self.dimension())?;
        }
        self.planes = planes;
        Ok(self)
    }

    /// Clamp perspective denominators to at least `min_denominator` in magnitude
    pub fn with_min_denominator(mut self, min_denominator: Option<f64>) -> Self {
        self.projector = self.projector.with_min_denominator(min_denominator);
        self
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.hypercube.dimension()
    }

    #[inline]
    pub fn hypercube(&self) -> &Hypercube {
        &self.hypercube
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        self.hypercube.edges()
    }

    /// Planes animated by [`HypercubeEngine::rotate`]
    #[inline]
    pub fn rotation_planes(&self) -> &[RotationPlane] {
        &self.planes
    }

    /// Advance the animation by `delta` radians in every configured plane
    pub fn rotate(&mut self, delta: f64) {
        // Planes are validated against this dimension when they are set
        let dimension = self.hypercube.dimension();
        for &plane in &self.planes {
            rotate_vertices(self.hypercube.vertices_mut(), dimension, plane, delta);
        }
    }

    /// Rotate by `delta` radians in a single plane
    pub fn rotate_in(&mut self, plane: RotationPlane, delta: f64) -> Result<(), HypercubeError> {
        self.hypercube.rotate(plane, delta)
    }

    /// Project all vertices to 3D with the given focal distance
    pub fn project(&mut self, focal_distance: f64) -> Projection<'_> {
        self.projector.project(self.hypercube.vertices(), focal_distance)
    }

    /// Project and draw every edge through `line`
    ///
    /// Only endpoints are set per edge; color and transform are the caller's
    /// business. Returns the number of segments drawn.
    pub fn render<L>(&mut self, focal_distance: f64, line: &mut L) -> usize
    where
        L: LinePrimitive + ?Sized,
    {
        let projection = self.projector.project(self.hypercube.vertices(), focal_distance);

        let mut drawn = 0;
        for_each_edge(self.hypercube.edges(), &projection, |start, end| {
            line.set_endpoints(to_f32(start), to_f32(end));
            line.draw();
            drawn += 1;
        });
        drawn
    }
}

#[inline]
fn to_f32(p: [f64; 3]) -> [f32; 3] {
    [p[0] as f32, p[1] as f32, p[2] as f32]
}
