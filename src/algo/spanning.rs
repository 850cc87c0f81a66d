use super::*;

/// Provides Kruskal-style minimum-spanning-forest construction.
pub trait SpanningForest: AdjacencyList + Sized {
    /// Builds a minimum spanning forest: scan all edges ascending by
    /// `(weight, origin, target)` and accept each edge whose endpoints are
    /// not yet in the same component.
    ///
    /// The scan runs over the full mirrored multiset; a mirror half is
    /// skipped naturally because its endpoints are already unified by the
    /// time it comes up. Accepted edges are returned in scan order.
    ///
    /// On a disconnected graph the result is a forest, one tree per
    /// component; whether that is acceptable is the caller's policy (see
    /// `ForestPolicy`), not the builder's.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges([(1, 2), (2, 3), (1, 3)]);
    ///
    /// let forest = g.minimum_spanning_forest();
    /// assert_eq!(forest, vec![Edge::new(1, 2), Edge::new(1, 3)]);
    /// ```
    fn minimum_spanning_forest(&self) -> Vec<Edge<Self::Vertex>> {
        let mut components = DisjointSets::new();
        let mut forest = Vec::new();

        for edge in self.ordered_edges() {
            if components.union(edge.origin(), edge.target()) {
                forest.push(edge);
            }
        }

        forest
    }
}

impl<G> SpanningForest for G where G: AdjacencyList + Sized {}
