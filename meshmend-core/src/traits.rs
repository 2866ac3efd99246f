//! Core traits for meshmend

use crate::{mesh::*, point::*};

/// Trait for objects with an axis-aligned extent
pub trait Bounded {
    /// Get the minimal axis-aligned bounding box as `(min, max)`
    fn bounding_box(&self) -> (Point3f, Point3f);

    /// Length of the bounding box diagonal, measured in f64
    fn bounding_box_diagonal(&self) -> f64 {
        let (min, max) = self.bounding_box();
        (to_point3d(&max) - to_point3d(&min)).norm()
    }
}

impl Bounded for [Point3f] {
    fn bounding_box(&self) -> (Point3f, Point3f) {
        if self.is_empty() {
            return (Point3f::origin(), Point3f::origin());
        }

        let mut min = self[0];
        let mut max = self[0];

        for vertex in self {
            min.x = min.x.min(vertex.x);
            min.y = min.y.min(vertex.y);
            min.z = min.z.min(vertex.z);

            max.x = max.x.max(vertex.x);
            max.y = max.y.max(vertex.y);
            max.z = max.z.max(vertex.z);
        }

        (min, max)
    }
}

impl Bounded for TriangleMesh {
    fn bounding_box(&self) -> (Point3f, Point3f) {
        self.vertices.as_slice().bounding_box()
    }
}
