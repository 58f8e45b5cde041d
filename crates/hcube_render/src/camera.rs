//! Fixed 3D camera
//!
//! The hypercube is collapsed to 3D on the CPU; this camera supplies the
//! last step, a single projection * view * model matrix for the line shader.

use hcube_math::mat4::{self, Mat4, IDENTITY};

/// Perspective camera looking at a fixed target
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Eye position
    pub eye: [f32; 3],
    /// Point the camera looks at
    pub target: [f32; 3],
    /// Up direction
    pub up: [f32; 3],
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: [2.0, 2.0, 2.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            fov: 45.0,
            near: 0.01,
            far: 50.0,
        }
    }
}

impl Camera {
    pub fn view_matrix(&self) -> Mat4 {
        mat4::look_at(self.eye, self.target, self.up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        mat4::perspective(self.fov.to_radians(), aspect, self.near, self.far)
    }

    /// projection * view * model
    pub fn mvp(&self, aspect: f32, model: Mat4) -> Mat4 {
        mat4::mul(self.projection_matrix(aspect), mat4::mul(self.view_matrix(), model))
    }

    /// projection * view with an identity model
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.mvp(aspect, IDENTITY)
    }
}
