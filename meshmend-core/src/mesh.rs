//! Mesh data structures and functionality

use crate::error::{Error, Result};
use crate::point::*;
use serde::{Deserialize, Serialize};

/// A triangle mesh with vertices and faces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleMesh {
    pub vertices: Vec<Point3f>,
    pub faces: Vec<[usize; 3]>,
    pub normals: Option<Vec<Vector3f>>,
    pub colors: Option<Vec<[u8; 3]>>,
}

impl TriangleMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            normals: None,
            colors: None,
        }
    }

    /// Create a mesh from vertices and faces
    pub fn from_vertices_and_faces(vertices: Vec<Point3f>, faces: Vec<[usize; 3]>) -> Self {
        Self {
            vertices,
            faces,
            normals: None,
            colors: None,
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Add a vertex to the mesh
    pub fn add_vertex(&mut self, vertex: Point3f) -> usize {
        let index = self.vertices.len();
        self.vertices.push(vertex);
        index
    }

    /// Add a face to the mesh
    pub fn add_face(&mut self, face: [usize; 3]) {
        self.faces.push(face);
    }

    /// Set vertex normals
    pub fn set_normals(&mut self, normals: Vec<Vector3f>) {
        if normals.len() == self.vertices.len() {
            self.normals = Some(normals);
        }
    }

    /// Set vertex colors
    pub fn set_colors(&mut self, colors: Vec<[u8; 3]>) {
        if colors.len() == self.vertices.len() {
            self.colors = Some(colors);
        }
    }

    /// Build a mesh sharing this mesh's vertices and per-vertex attributes
    /// but using a different face list.
    pub fn with_faces(&self, faces: Vec<[usize; 3]>) -> Self {
        Self {
            vertices: self.vertices.clone(),
            faces,
            normals: self.normals.clone(),
            colors: self.colors.clone(),
        }
    }

    /// Check that every face corner refers to an existing vertex.
    pub fn validate_indices(&self) -> Result<()> {
        let vertex_count = self.vertices.len();
        for (fi, face) in self.faces.iter().enumerate() {
            if let Some(&bad) = face.iter().find(|&&v| v >= vertex_count) {
                return Err(Error::InvalidData(format!(
                    "Face {} references vertex {} but the mesh has {} vertices",
                    fi, bad, vertex_count
                )));
            }
        }
        Ok(())
    }

    /// Number of faces with two or more equal corners
    pub fn degenerate_face_count(&self) -> usize {
        self.faces
            .iter()
            .filter(|f| f[0] == f[1] || f[1] == f[2] || f[0] == f[2])
            .count()
    }

    /// Clear the mesh
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.faces.clear();
        self.normals = None;
        self.colors = None;
    }
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_quad() -> TriangleMesh {
        TriangleMesh::from_vertices_and_faces(
            vec![
                Point3f::new(0.0, 0.0, 0.0),
                Point3f::new(1.0, 0.0, 0.0),
                Point3f::new(1.0, 1.0, 0.0),
                Point3f::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2], [0, 2, 3]],
        )
    }

    #[test]
    fn test_counts() {
        let mesh = make_quad();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 2);
        assert!(!mesh.is_empty());
        assert!(TriangleMesh::new().is_empty());
    }

    #[test]
    fn test_validate_indices() {
        let mut mesh = make_quad();
        assert!(mesh.validate_indices().is_ok());

        mesh.add_face([0, 3, 4]);
        match mesh.validate_indices() {
            Err(Error::InvalidData(msg)) => assert!(msg.contains("Face 2")),
            other => panic!("expected InvalidData, got {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_face_count() {
        let mut mesh = make_quad();
        assert_eq!(mesh.degenerate_face_count(), 0);
        mesh.add_face([1, 1, 2]);
        mesh.add_face([3, 0, 3]);
        assert_eq!(mesh.degenerate_face_count(), 2);
    }

    #[test]
    fn test_with_faces_keeps_attributes() {
        let mut mesh = make_quad();
        mesh.set_colors(vec![[10, 20, 30]; 4]);
        mesh.set_normals(vec![Vector3f::new(0.0, 0.0, 1.0); 4]);

        let trimmed = mesh.with_faces(vec![[0, 1, 2]]);
        assert_eq!(trimmed.vertex_count(), 4);
        assert_eq!(trimmed.face_count(), 1);
        assert_eq!(trimmed.colors.as_ref().map(Vec::len), Some(4));
        assert_eq!(trimmed.normals.as_ref().map(Vec::len), Some(4));
    }

    #[test]
    fn test_mismatched_attributes_rejected() {
        let mut mesh = make_quad();
        mesh.set_colors(vec![[0, 0, 0]; 3]);
        assert!(mesh.colors.is_none());
    }
}
