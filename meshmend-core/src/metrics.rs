//! Per-face geometric measures
//!
//! Edge lengths follow the opposite-corner convention: entry `e` of a face's
//! length triple is the length of the edge opposite corner `e`, which joins
//! corners `(e + 1) % 3` and `(e + 2) % 3`. All measures are computed in f64.

use crate::point::*;
use crate::traits::Bounded;

/// Length of the diagonal of the axis-aligned box enclosing `vertices`.
pub fn bounding_box_diagonal(vertices: &[Point3f]) -> f64 {
    vertices.bounding_box_diagonal()
}

/// Edge lengths of a single face, indexed by opposite corner.
///
/// # Panics
/// Panics if a corner of `face` is not a valid index into `vertices`.
#[inline]
pub fn face_edge_lengths(vertices: &[Point3f], face: &[usize; 3]) -> [f64; 3] {
    let p = [
        to_point3d(&vertices[face[0]]),
        to_point3d(&vertices[face[1]]),
        to_point3d(&vertices[face[2]]),
    ];
    [
        (p[1] - p[2]).norm(),
        (p[2] - p[0]).norm(),
        (p[0] - p[1]).norm(),
    ]
}

/// Edge lengths for every face
pub fn edge_lengths(vertices: &[Point3f], faces: &[[usize; 3]]) -> Vec<[f64; 3]> {
    faces
        .iter()
        .map(|face| face_edge_lengths(vertices, face))
        .collect()
}

/// Twice the area of a triangle given its three edge lengths.
///
/// Uses the cancellation-stable arrangement of Heron's formula on lengths
/// sorted so that `a >= b >= c`. Lengths that cannot form a triangle
/// (roundoff on slivers, or bad input) produce a negative radicand; the NaN
/// that results is replaced by `nan_replacement`.
#[inline]
pub fn triangle_double_area(lengths: [f64; 3], nan_replacement: f64) -> f64 {
    let mut s = lengths;
    s.sort_by(|x, y| y.total_cmp(x));
    let [a, b, c] = s;
    let dbl_area = 0.5 * ((a + (b + c)) * (c - (a - b)) * (c + (a - b)) * (a + (b - c))).sqrt();
    if dbl_area.is_nan() {
        nan_replacement
    } else {
        dbl_area
    }
}

/// Doubled areas for a list of edge length triples
pub fn double_area(lengths: &[[f64; 3]], nan_replacement: f64) -> Vec<f64> {
    lengths
        .iter()
        .map(|&l| triangle_double_area(l, nan_replacement))
        .collect()
}

/// Inclusive integer range `low..=high`; empty when `high < low`.
pub fn index_range(low: usize, high: usize) -> Vec<usize> {
    if high < low {
        return Vec::new();
    }
    (low..=high).collect()
}

/// The identity map `[0, 1, ..., n - 1]`
pub fn identity_range(n: usize) -> Vec<usize> {
    (0..n).collect()
}
