//! HCube application library
//!
//! Configuration and per-frame systems used by the `hcube` binary.

pub mod config;
pub mod systems;
