//! Mesh repair algorithms
//!
//! This crate provides algorithms that clean up defective triangle meshes
//! without relocating geometry:
//! - Small-triangle collapse by shortest-edge merging
//! - Array-backed vertex forwarding maps used to relabel faces

pub mod forwarding;
pub mod small_triangles;

pub use forwarding::*;
pub use small_triangles::*;

use meshmend_core::{Result, TriangleMesh};

/// Repair a mesh, producing a new mesh over the same vertex set
pub trait MeshRepairer {
    /// Repair `mesh`. Vertices and per-vertex attributes are carried over
    /// unchanged; only the face list may differ.
    fn repair(&self, mesh: &TriangleMesh) -> Result<TriangleMesh>;
}
