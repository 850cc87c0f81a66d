/*!
Single-source shortest paths via Dijkstra-style relaxation.

The frontier is a binary heap with lazy deletion: every relaxation pushes a
fresh `(distance, vertex)` entry and stale entries are discarded when
popped, which gives true decrease-key semantics without an indexed heap.

Negative weights are rejected up front: the presence of *any*
negative-weight edge fails the query with
[`GraphError::NegativeWeightCycle`], whether or not the edge lies on a
cycle.
*/

use std::{cmp::Ordering, collections::BinaryHeap};

use fxhash::FxHashMap;

use super::*;

/// Heap entry ordered by ascending distance, with the vertex order as
/// tie-break so extraction stays deterministic.
struct FrontierEntry<V> {
    distance: Weight,
    vertex: V,
}

impl<V: VertexId> PartialEq for FrontierEntry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V: VertexId> Eq for FrontierEntry<V> {}

impl<V: VertexId> Ord for FrontierEntry<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        // inverted: BinaryHeap is a max-heap, we want the smallest distance
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl<V: VertexId> PartialOrd for FrontierEntry<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Provides single-source-to-target shortest paths on graphs.
pub trait ShortestPath: AdjacencyList + Sized {
    /// Computes a cheapest path from `source` to `target` and returns it
    /// as the full vertex sequence, endpoints included.
    ///
    /// A same-vertex query returns `[source]` without touching any edge.
    /// `source` must exist in the graph; the caller is expected to have
    /// validated it (see `GraphLibrary`).
    ///
    /// # Errors
    /// - [`GraphError::NegativeWeightCycle`] if any edge has negative weight
    /// - [`GraphError::NoPath`] if `target` is unreachable from `source`
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges([(1, 2), (2, 5), (5, 3), (4, 5), (1, 5)]);
    /// assert_eq!(g.shortest_path(&1, &3).unwrap(), vec![1, 5, 3]);
    /// ```
    fn shortest_path(
        &self,
        source: &Self::Vertex,
        target: &Self::Vertex,
    ) -> Result<Vec<Self::Vertex>, GraphError> {
        if source == target {
            return Ok(vec![source.clone()]);
        }
        if self.edges().any(|e| e.weight() < 0.0) {
            return Err(GraphError::NegativeWeightCycle);
        }

        // absent distance entry = +infinity
        let mut distances: FxHashMap<Self::Vertex, Weight> = FxHashMap::default();
        let mut predecessors: FxHashMap<Self::Vertex, Self::Vertex> = FxHashMap::default();

        distances.insert(source.clone(), 0.0);

        let mut frontier = BinaryHeap::new();
        frontier.push(FrontierEntry {
            distance: 0.0,
            vertex: source.clone(),
        });

        while let Some(FrontierEntry { distance, vertex }) = frontier.pop() {
            if distance > distances[&vertex] {
                continue; // stale entry, a cheaper route was settled already
            }
            if vertex == *target {
                break;
            }

            for edge in self.edges_of(&vertex) {
                let relaxed = distance + edge.weight();
                if distances
                    .get(edge.target())
                    .is_none_or(|&known| relaxed < known)
                {
                    distances.insert(edge.target().clone(), relaxed);
                    predecessors.insert(edge.target().clone(), vertex.clone());
                    frontier.push(FrontierEntry {
                        distance: relaxed,
                        vertex: edge.target().clone(),
                    });
                }
            }
        }

        reconstruct_path(source, target, &predecessors)
    }
}

impl<G> ShortestPath for G where G: AdjacencyList + Sized {}

/// Walks predecessor pointers backwards from `target`; the walk must end
/// at `source`, otherwise no path exists.
fn reconstruct_path<V: VertexId>(
    source: &V,
    target: &V,
    predecessors: &FxHashMap<V, V>,
) -> Result<Vec<V>, GraphError> {
    let mut path = vec![target.clone()];

    let mut current = target;
    while let Some(predecessor) = predecessors.get(current) {
        path.push(predecessor.clone());
        current = predecessor;
    }

    if current != source {
        return Err(GraphError::no_path(source, target));
    }

    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::repr::{Graph, WeightedGraph};

    #[test]
    fn unit_weight_paths() {
        let graph = Graph::from_edges([(1, 2), (2, 5), (5, 3), (4, 5), (1, 5)]);

        assert_eq!(graph.shortest_path(&1, &3).unwrap(), vec![1, 5, 3]);
        assert_eq!(graph.shortest_path(&1, &4).unwrap(), vec![1, 5, 4]);
    }

    #[test]
    fn weighted_detour_beats_direct_route() {
        let mut graph = WeightedGraph::new();
        graph.add_edge_with_weight(1, 2, 0.1);
        graph.add_edge_with_weight(2, 5, 0.2);
        graph.add_edge_with_weight(5, 3, 5.0);
        graph.add_edge_with_weight(4, 5, 2.3);
        graph.add_edge_with_weight(1, 5, 1.0);

        assert_eq!(graph.shortest_path(&1, &3).unwrap(), vec![1, 2, 5, 3]);
    }

    #[test]
    fn same_vertex_short_circuits() {
        let mut graph = WeightedGraph::new();
        // a negative edge elsewhere must not affect a trivial query
        graph.add_edge_with_weight(7, 8, -3.0);
        graph.add_vertex(1);

        assert_eq!(graph.shortest_path(&1, &1).unwrap(), vec![1]);
    }

    #[test]
    fn any_negative_edge_is_rejected() {
        let mut graph = WeightedGraph::new();
        graph.add_edge_with_weight(1, 2, 1.0);
        // acyclic, still rejected by the conservative check
        graph.add_edge_with_weight(3, 4, -1.0);

        assert_eq!(
            graph.shortest_path(&1, &2),
            Err(GraphError::NegativeWeightCycle)
        );
    }

    #[test]
    fn unreachable_target_reports_no_path() {
        let graph = Graph::from_edges([(1, 2), (3, 4)]);

        assert_eq!(
            graph.shortest_path(&1, &4),
            Err(GraphError::no_path(&1, &4))
        );
    }

    #[test]
    fn stale_frontier_entries_are_discarded() {
        // 0 -10- 3, but 0-1-2-3 costs 3; vertex 3 gets relaxed twice
        let mut graph = WeightedGraph::new();
        graph.add_edge_with_weight(0, 3, 10.0);
        graph.add_edge_with_weight(0, 1, 1.0);
        graph.add_edge_with_weight(1, 2, 1.0);
        graph.add_edge_with_weight(2, 3, 1.0);

        assert_eq!(graph.shortest_path(&0, &3).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn unit_weights_agree_with_bfs_levels() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);

        for _ in 0..10 {
            let n = 40u32;
            let edges = (0..150)
                .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
                .filter(|(u, v)| u != v)
                .collect_vec();
            let graph = Graph::from_edges(edges);

            if !graph.has_vertex(&0) {
                continue;
            }

            let levels: FxHashMap<u32, Level> = graph
                .bfs(&0)
                .map(|item| (item.vertex, item.level))
                .collect();

            for v in graph.vertices() {
                match graph.shortest_path(&0, v) {
                    Ok(path) => {
                        assert_eq!(path.len() as Level - 1, levels[v]);
                        assert_eq!(path.first(), Some(&0));
                        assert_eq!(path.last(), Some(v));
                    }
                    Err(GraphError::NoPath { .. }) => assert!(!levels.contains_key(v)),
                    Err(e) => panic!("unexpected error: {e}"),
                }
            }
        }
    }
}
