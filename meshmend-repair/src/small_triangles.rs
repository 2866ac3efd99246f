//! Small triangle collapse
//!
//! Removes faces whose area is tiny relative to the mesh extent by merging
//! the endpoints of their shortest edge. Each pass measures the current face
//! list against the unmodified vertex positions, records one forwarding
//! instruction per under-threshold face, relabels every face through the
//! forwarding map and drops faces whose corners are no longer distinct.
//! Passes repeat until one records no instruction.
//!
//! Vertices are never moved or deleted. Vertices that stop being referenced
//! stay in the vertex set.

use crate::{ForwardingMap, MeshRepairer};
use itertools::Itertools;
use meshmend_core::{
    bounding_box_diagonal, face_edge_lengths, triangle_double_area, Error, Point3f, Result,
    TriangleMesh,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

// ============================================================
// Edge Selection
// ============================================================

/// Which corners of an under-threshold face take part in a collapse.
///
/// Edges are named by their opposite corner, so `shortest` and `longest` are
/// corner indices as well. The collapse redirects the vertex at `from_corner`
/// to the vertex at `to_corner`; the edge between them is the edge opposite
/// `shortest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollapseSelection {
    pub shortest: usize,
    pub longest: usize,
    pub from_corner: usize,
    pub to_corner: usize,
}

/// Pick the edge to eliminate from a face's opposite-corner edge lengths.
///
/// Ties resolve to the lowest edge index for both the shortest and the
/// longest edge. When every length is equal both scans land on edge 0, so
/// the longest edge is moved to the next index to keep the two distinct.
pub fn select_collapse(lengths: &[f64; 3]) -> CollapseSelection {
    let mut shortest = 0;
    for e in 1..3 {
        if lengths[e] < lengths[shortest] {
            shortest = e;
        }
    }
    let mut longest = 0;
    for e in 1..3 {
        if lengths[e] > lengths[longest] {
            longest = e;
        }
    }
    if longest == shortest {
        longest = (shortest + 1) % 3;
    }

    let to_corner = if (shortest + 1) % 3 == longest {
        (shortest + 2) % 3
    } else {
        (shortest + 1) % 3
    };

    CollapseSelection {
        shortest,
        longest,
        from_corner: longest,
        to_corner,
    }
}

// ============================================================
// Compaction
// ============================================================

/// Keep only faces whose three corners are pairwise distinct.
///
/// Row order is preserved and the returned list carries no spare capacity.
/// The second value is the number of dropped faces.
pub fn compact_faces(faces: Vec<[usize; 3]>) -> (Vec<[usize; 3]>, usize) {
    let total = faces.len();
    let mut kept: Vec<[usize; 3]> = faces
        .into_iter()
        .filter(|face| face.iter().all_unique())
        .collect();
    kept.shrink_to_fit();
    let dropped = total - kept.len();
    (kept, dropped)
}

// ============================================================
// Diagnostics
// ============================================================

/// Counters for a single pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassStats {
    /// Faces entering the pass
    pub faces_in: usize,
    /// Faces left after compaction
    pub faces_out: usize,
    /// Forwarding instructions recorded
    pub edge_collapses: usize,
    /// Faces dropped by compaction
    pub face_collapses: usize,
    /// Doubled-area threshold used for the pass
    pub min_double_area: f64,
}

/// Result of running the collapse to convergence
#[derive(Debug, Clone)]
pub struct CollapseOutcome {
    /// Final face list, indexing the unmodified input vertices
    pub faces: Vec<[usize; 3]>,
    /// One entry per executed pass, the converging pass last
    pub passes: Vec<PassStats>,
}

impl CollapseOutcome {
    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    /// Total forwarding instructions over all passes
    pub fn edge_collapses(&self) -> usize {
        self.passes.iter().map(|p| p.edge_collapses).sum()
    }

    /// Total faces removed over all passes
    pub fn face_collapses(&self) -> usize {
        self.passes.iter().map(|p| p.face_collapses).sum()
    }
}

// ============================================================
// Small Triangle Collapser
// ============================================================

/// Collapses triangles whose doubled area falls below
/// `2 * eps * bbd^2`, where `bbd` is the bounding box diagonal of the
/// vertex set.
///
/// By default passes are unbounded, and a pass that drops faces without
/// recording any collapse is only logged, not treated as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollapseSmallTriangles {
    /// Area tolerance as a fraction of the squared bounding box diagonal
    pub eps: f64,
    /// Give up with `Error::NotConverged` after this many passes
    pub max_passes: Option<usize>,
    /// Measure faces with rayon
    pub parallel: bool,
    /// Fail with `Error::InvariantViolation` when the converging pass drops faces
    pub strict: bool,
}

impl Default for CollapseSmallTriangles {
    fn default() -> Self {
        Self {
            eps: 1e-10,
            max_passes: None,
            parallel: true,
            strict: false,
        }
    }
}

impl CollapseSmallTriangles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_eps(eps: f64) -> Self {
        Self {
            eps,
            ..Self::default()
        }
    }

    pub fn with_params(eps: f64, max_passes: Option<usize>, parallel: bool, strict: bool) -> Self {
        Self {
            eps,
            max_passes,
            parallel,
            strict,
        }
    }

    pub fn max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = Some(max_passes);
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    fn validate(&self) -> Result<()> {
        if !self.eps.is_finite() || self.eps < 0.0 {
            return Err(Error::InvalidData(format!(
                "eps must be finite and non-negative, got {}",
                self.eps
            )));
        }
        if self.max_passes == Some(0) {
            return Err(Error::InvalidData(
                "max_passes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Edge lengths and doubled areas for every face.
    fn measure(&self, vertices: &[Point3f], faces: &[[usize; 3]]) -> (Vec<[f64; 3]>, Vec<f64>) {
        let measure_face = |face: &[usize; 3]| {
            let l = face_edge_lengths(vertices, face);
            (l, triangle_double_area(l, 0.0))
        };
        if self.parallel {
            faces.par_iter().map(measure_face).unzip()
        } else {
            faces.iter().map(measure_face).unzip()
        }
    }

    /// Run a single pass over `faces`.
    ///
    /// Forwarding instructions are applied in face order, so when two faces
    /// redirect the same vertex the later face wins.
    pub fn collapse_pass(
        &self,
        vertices: &[Point3f],
        faces: &[[usize; 3]],
    ) -> (Vec<[usize; 3]>, PassStats) {
        let bbd = bounding_box_diagonal(vertices);
        let min_double_area = 2.0 * self.eps * bbd * bbd;
        let (lengths, double_areas) = self.measure(vertices, faces);

        let mut fim = ForwardingMap::identity(vertices.len());
        let mut edge_collapses = 0usize;
        for (f, face) in faces.iter().enumerate() {
            if double_areas[f] < min_double_area {
                let sel = select_collapse(&lengths[f]);
                let from = face[sel.from_corner];
                let to = face[sel.to_corner];
                fim.redirect(from, to);
                trace!(face = f, from, to = fim.get(from), "edge collapse");
                edge_collapses += 1;
            }
        }

        let (kept, face_collapses) = compact_faces(fim.reindex(faces));

        let stats = PassStats {
            faces_in: faces.len(),
            faces_out: kept.len(),
            edge_collapses,
            face_collapses,
            min_double_area,
        };
        (kept, stats)
    }

    /// Collapse small triangles until a pass records no collapse.
    ///
    /// # Panics
    /// Panics if a face corner is not a valid index into `vertices`.
    /// [`MeshRepairer::repair`] validates indices first.
    pub fn run(&self, vertices: &[Point3f], faces: &[[usize; 3]]) -> Result<CollapseOutcome> {
        self.validate()?;

        let mut current = faces.to_vec();
        let mut passes = Vec::new();
        loop {
            let (next, stats) = self.collapse_pass(vertices, &current);
            debug!(
                pass = passes.len() + 1,
                faces_in = stats.faces_in,
                faces_out = stats.faces_out,
                edge_collapses = stats.edge_collapses,
                face_collapses = stats.face_collapses,
                "small triangle pass"
            );
            passes.push(stats);
            current = next;

            if stats.edge_collapses == 0 {
                if stats.face_collapses > 0 {
                    let msg = format!(
                        "{} faces dropped in a pass without collapses; input contains degenerate faces",
                        stats.face_collapses
                    );
                    if self.strict {
                        return Err(Error::InvariantViolation(msg));
                    }
                    warn!("{}", msg);
                }
                info!(
                    passes = passes.len(),
                    faces_in = faces.len(),
                    faces_out = current.len(),
                    "small triangle collapse converged"
                );
                return Ok(CollapseOutcome {
                    faces: current,
                    passes,
                });
            }

            if let Some(limit) = self.max_passes {
                if passes.len() >= limit {
                    return Err(Error::NotConverged {
                        passes: passes.len(),
                    });
                }
            }
        }
    }

    /// Collapse small triangles and return only the final face list.
    pub fn collapse_faces(
        &self,
        vertices: &[Point3f],
        faces: &[[usize; 3]],
    ) -> Result<Vec<[usize; 3]>> {
        self.run(vertices, faces).map(|outcome| outcome.faces)
    }
}

impl MeshRepairer for CollapseSmallTriangles {
    fn repair(&self, mesh: &TriangleMesh) -> Result<TriangleMesh> {
        mesh.validate_indices()?;
        let faces = self.collapse_faces(&mesh.vertices, &mesh.faces)?;
        Ok(mesh.with_faces(faces))
    }
}

/// Collapse triangles smaller than `2 * eps * bbd^2` in doubled area,
/// using the default (unbounded, parallel) configuration.
pub fn collapse_small_triangles(
    vertices: &[Point3f],
    faces: &[[usize; 3]],
    eps: f64,
) -> Result<Vec<[usize; 3]>> {
    CollapseSmallTriangles::with_eps(eps).collapse_faces(vertices, faces)
}
