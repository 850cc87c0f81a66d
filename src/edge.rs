use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
};

use crate::vertex::VertexId;

/// Edge weights are single-precision floats.
pub type Weight = f32;

/// Weight assumed by algorithms for edges of unweighted graphs.
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// A directed half of an undirected edge: the store keeps `(u, v, w)` in
/// `u`'s adjacency set and the mirror `(v, u, w)` in `v`'s.
///
/// Identity is structural over `(origin, target, weight)`, so re-adding an
/// existing edge is a no-op while the same endpoint pair may carry several
/// distinct weights.
#[derive(Clone)]
pub struct Edge<V> {
    origin: V,
    target: V,
    weight: Weight,
}

impl<V: VertexId> Edge<V> {
    /// Creates an edge with the default weight.
    pub fn new(origin: V, target: V) -> Self {
        Self::with_weight(origin, target, DEFAULT_WEIGHT)
    }

    /// Creates an edge with an explicit weight.
    pub fn with_weight(origin: V, target: V, weight: Weight) -> Self {
        Self {
            origin,
            target,
            weight,
        }
    }

    pub fn origin(&self) -> &V {
        &self.origin
    }

    pub fn target(&self) -> &V {
        &self.target
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Reverses the edge by switching the endpoints. The weight is kept.
    pub fn reverse(&self) -> Self {
        Self::with_weight(self.target.clone(), self.origin.clone(), self.weight)
    }

    /// Returns *true* if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.origin == self.target
    }

    /// Returns *true* if the endpoint with smaller value comes first
    pub fn is_normalized(&self) -> bool {
        self.origin <= self.target
    }
}

impl<V: VertexId> PartialEq for Edge<V> {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin
            && self.target == other.target
            && self.weight.to_bits() == other.weight.to_bits()
    }
}

impl<V: VertexId> Eq for Edge<V> {}

impl<V: VertexId> Hash for Edge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.origin.hash(state);
        self.target.hash(state);
        self.weight.to_bits().hash(state);
    }
}

/// Edges order by weight first, then lexicographically by `(origin, target)`.
/// With uniform weights this degenerates to pure lexicographic order, which
/// makes spanning-forest construction deterministic.
impl<V: VertexId> Ord for Edge<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.origin.cmp(&other.origin))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl<V: VertexId> PartialOrd for Edge<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: VertexId> Display for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.origin, self.target)
    }
}

impl<V: VertexId> Debug for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.weight.to_bits() == DEFAULT_WEIGHT.to_bits() {
            write!(f, "({:?},{:?})", self.origin, self.target)
        } else {
            write!(f, "({:?},{:?},{})", self.origin, self.target, self.weight)
        }
    }
}

impl<V: VertexId> From<(V, V)> for Edge<V> {
    fn from(value: (V, V)) -> Self {
        Edge::new(value.0, value.1)
    }
}

impl<V: VertexId> From<(V, V, Weight)> for Edge<V> {
    fn from(value: (V, V, Weight)) -> Self {
        Edge::with_weight(value.0, value.1, value.2)
    }
}
