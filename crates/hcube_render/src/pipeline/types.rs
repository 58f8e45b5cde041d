//! GPU-compatible data types for the line pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};
use hcube_math::mat4::IDENTITY;
use hcube_math::Mat4;

/// Each segment is drawn as two vertices of a line list
pub const VERTICES_PER_SEGMENT: usize = 2;

/// A line endpoint in 3D space
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// Position in 3D space (x, y, z)
    pub position: [f32; 3],
}

impl LineVertex {
    pub fn new(position: [f32; 3]) -> Self {
        Self { position }
    }
}

/// Uniforms for the line shader
/// Layout: 80 bytes total (must match line.wgsl LineUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineUniforms {
    /// Projection * view * model matrix (64 bytes)
    pub mvp: Mat4,
    /// RGB line color + padding (16 bytes)
    pub color: [f32; 3],
    pub _padding: f32,
}

impl Default for LineUniforms {
    fn default() -> Self {
        Self {
            mvp: IDENTITY,
            color: [1.0, 1.0, 1.0],
            _padding: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_line_vertex_size() {
        // 3 floats position = 12 bytes
        assert_eq!(size_of::<LineVertex>(), 12);
    }

    #[test]
    fn test_line_uniforms_size() {
        // 16 floats mvp + 3 floats color + 1 padding = 80 bytes
        assert_eq!(size_of::<LineUniforms>(), 80);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<LineVertex>(), 4);
        assert_eq!(std::mem::align_of::<LineUniforms>(), 4);
    }

    #[test]
    fn test_uniform_bytes() {
        let uniforms = LineUniforms::default();
        let bytes = bytemuck::bytes_of(&uniforms);
        assert_eq!(bytes.len(), 80);
        // Color starts right after the matrix
        let color: &[f32] = bytemuck::cast_slice(&bytes[64..76]);
        assert_eq!(color, &[1.0, 1.0, 1.0]);
    }
}
