use fxhash::FxHashMap;

use super::*;

/// Disjoint sets over vertex values.
///
/// A vertex without a parent entry is the representative of its own set, so
/// every vertex starts out as a singleton without registration. `find` is
/// an iterative parent walk without path compression, which keeps it
/// read-only and lets it take `&self`.
#[derive(Debug, Default, Clone)]
pub struct DisjointSets<V: VertexId> {
    parent: FxHashMap<V, V>,
}

impl<V: VertexId> DisjointSets<V> {
    pub fn new() -> Self {
        Self {
            parent: FxHashMap::default(),
        }
    }

    /// Returns the representative of the set containing `v`.
    pub fn find(&self, v: &V) -> V {
        let mut root = v;
        while let Some(parent) = self.parent.get(root) {
            root = parent;
        }
        root.clone()
    }

    /// Returns *true* if both vertices belong to the same set.
    pub fn same_set(&self, u: &V, v: &V) -> bool {
        self.find(u) == self.find(v)
    }

    /// Merges the sets of `u` and `v` by linking `u`'s representative to
    /// `v`'s. Returns *true* exactly if the sets were distinct before.
    pub fn union(&mut self, u: &V, v: &V) -> bool {
        let root_u = self.find(u);
        let root_v = self.find(v);

        if root_u == root_v {
            return false;
        }

        self.parent.insert(root_u, root_v);
        true
    }
}
