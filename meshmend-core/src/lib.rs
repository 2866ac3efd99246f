//! Core data structures and traits for meshmend
//!
//! This crate provides the fundamental types for triangle mesh repair,
//! including points, meshes, the shared error type, and the per-face
//! geometric measures the repair algorithms are built on.

pub mod point;
pub mod mesh;
pub mod traits;
pub mod metrics;
pub mod error;

pub use point::*;
pub use mesh::*;
pub use traits::*;
pub use metrics::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3};

// Type aliases for easier imports
pub type Point = Point3f;
pub type Mesh = TriangleMesh;
