//! Vertex forwarding maps
//!
//! A [`ForwardingMap`] redirects vertex indices to other vertex indices. It
//! is a flat table, not a union-find: a redirect copies the target's current
//! entry and later redirects of the same vertex overwrite earlier ones.

use meshmend_core::identity_range;

/// Per-vertex redirection table, initialised to the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardingMap {
    map: Vec<usize>,
}

impl ForwardingMap {
    /// Identity map over `vertex_count` vertices
    pub fn identity(vertex_count: usize) -> Self {
        Self {
            map: identity_range(vertex_count),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Current target of vertex `v`
    #[inline]
    pub fn get(&self, v: usize) -> usize {
        self.map[v]
    }

    /// Point `from` at whatever `to` currently maps to.
    ///
    /// This is a single lookup; chains created by earlier redirects are not
    /// followed further.
    #[inline]
    pub fn redirect(&mut self, from: usize, to: usize) {
        self.map[from] = self.map[to];
    }

    /// True when no vertex is redirected
    pub fn is_identity(&self) -> bool {
        self.map.iter().enumerate().all(|(v, &t)| v == t)
    }

    #[inline]
    pub fn reindex_face(&self, face: &[usize; 3]) -> [usize; 3] {
        [self.map[face[0]], self.map[face[1]], self.map[face[2]]]
    }

    /// Rewrite every corner of every face through the map. No face is removed.
    pub fn reindex(&self, faces: &[[usize; 3]]) -> Vec<[usize; 3]> {
        faces.iter().map(|f| self.reindex_face(f)).collect()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let fim = ForwardingMap::identity(5);
        assert_eq!(fim.len(), 5);
        assert!(fim.is_identity());
        assert_eq!(fim.as_slice(), &[0, 1, 2, 3, 4]);
        assert!(ForwardingMap::identity(0).is_empty());
    }

    #[test]
    fn test_redirect_copies_current_target() {
        let mut fim = ForwardingMap::identity(4);
        fim.redirect(0, 1);
        assert_eq!(fim.get(0), 1);
        // 2 takes 0's current entry, which is already 1
        fim.redirect(2, 0);
        assert_eq!(fim.get(2), 1);
        assert!(!fim.is_identity());
    }

    #[test]
    fn test_redirect_does_not_follow_later_chains() {
        let mut fim = ForwardingMap::identity(3);
        fim.redirect(0, 1);
        fim.redirect(1, 2);
        // 0 still points at 1, not at 2
        assert_eq!(fim.get(0), 1);
        assert_eq!(fim.get(1), 2);
    }

    #[test]
    fn test_last_write_wins() {
        let mut fim = ForwardingMap::identity(4);
        fim.redirect(0, 1);
        fim.redirect(0, 3);
        assert_eq!(fim.get(0), 3);
    }

    #[test]
    fn test_reindex_keeps_all_rows() {
        let mut fim = ForwardingMap::identity(4);
        fim.redirect(3, 0);
        let faces = vec![[0, 1, 2], [0, 2, 3], [1, 2, 3]];
        let reindexed = fim.reindex(&faces);
        assert_eq!(reindexed, vec![[0, 1, 2], [0, 2, 0], [1, 2, 0]]);
    }
}
