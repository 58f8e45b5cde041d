//! N-dimensional Hypercube Mathematics
//!
//! This crate provides the pure geometry behind HCube: building an N-cube,
//! rotating it in a coordinate plane, and collapsing it to 3D by repeated
//! perspective division.
//!
//! ## Core Types
//!
//! - [`Hypercube`] - 2^N vertices and N * 2^(N-1) edges of an N-cube
//! - [`Edge`] - A pair of vertex indices differing in one coordinate
//! - [`RotationPlane`] - A pair of coordinate axes rotated together
//! - [`Projector`] - Reusable scratch buffer for the perspective collapse
//! - [`Mat4`] - 4x4 matrix for the final camera transform

mod error;
pub mod hypercube;
pub mod rotation;
pub mod projection;
pub mod mat4;

pub use error::HypercubeError;
pub use hypercube::{Edge, Hypercube, MAX_DIMENSION, MIN_DIMENSION};
pub use rotation::{rotate_vertices, RotationPlane};
pub use projection::{collapse, Projection, Projector};
pub use mat4::Mat4;
