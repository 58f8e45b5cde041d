//! Edge rendering pass

use hcube_math::{Edge, Projection};

/// Call `draw_segment` with both projected endpoints of every edge
///
/// Edges are visited in list order, so repeated frames draw in the same
/// sequence.
pub fn for_each_edge<F>(edges: &[Edge], projection: &Projection<'_>, mut draw_segment: F)
where
    F: FnMut([f64; 3], [f64; 3]),
{
    for edge in edges {
        draw_segment(projection.point(edge.v1), projection.point(edge.v2));
    }
}
