use std::{
    collections::{BTreeMap, BTreeSet},
    marker::PhantomData,
};

use super::*;
use crate::{
    edge::{Edge, Weight},
    ops::*,
    vertex::*,
};

/// An undirected graph over arbitrary ordered vertex labels.
///
/// Every undirected edge `{u, v}` is stored as the two directed halves
/// `(u, v, w)` and `(v, u, w)`; a self-loop is stored once. The store only
/// grows: vertices and edges can be added but never removed.
#[derive(Debug, Clone)]
pub struct AdjMapGraph<V: VertexId, W: Weighting = Unweighted> {
    adj: BTreeMap<V, BTreeSet<Edge<V>>>,
    num_edges: NumEdges,
    _weighting: PhantomData<W>,
}

/// An undirected, unweighted graph. Edges behave as weight `1`.
pub type Graph<V> = AdjMapGraph<V, Unweighted>;

/// An undirected graph with caller-supplied edge weights.
pub type WeightedGraph<V> = AdjMapGraph<V, Weighted>;

impl<V: VertexId, W: Weighting> Default for AdjMapGraph<V, W> {
    fn default() -> Self {
        Self {
            adj: BTreeMap::new(),
            num_edges: 0,
            _weighting: PhantomData,
        }
    }
}

impl<V: VertexId, W: Weighting> AdjMapGraph<V, W> {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V: VertexId> WeightedGraph<V> {
    /// Adds the undirected edge `{u, v}` with an explicit weight and
    /// returns the stored `(u, v)` half.
    pub fn add_edge_with_weight(&mut self, u: V, v: V, weight: Weight) -> Edge<V> {
        let edge = Edge::with_weight(u, v, weight);
        self.insert_edge(edge.clone());
        edge
    }
}

impl<V: VertexId, W: Weighting> GraphType for AdjMapGraph<V, W> {
    type Weights = W;
}

impl<V: VertexId, W: Weighting> GraphOrder for AdjMapGraph<V, W> {
    type Vertex = V;

    fn number_of_vertices(&self) -> NumVertices {
        self.adj.len()
    }

    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }

    fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adj.keys()
    }
}

impl<V: VertexId, W: Weighting> AdjacencyList for AdjMapGraph<V, W> {
    fn edges_of(&self, u: &V) -> impl Iterator<Item = &Edge<V>> + '_ {
        self.adj[u].iter()
    }
}

impl<V: VertexId, W: Weighting> AdjacencyTest for AdjMapGraph<V, W> {
    fn has_vertex(&self, u: &V) -> bool {
        self.adj.contains_key(u)
    }

    fn has_edge(&self, u: &V, v: &V) -> bool {
        self.adj
            .get(u)
            .is_some_and(|edges| edges.iter().any(|e| e.target() == v))
    }

    fn has_weighted_edge(&self, u: &V, v: &V, weight: Weight) -> bool {
        self.adj.get(u).is_some_and(|edges| {
            edges.contains(&Edge::with_weight(u.clone(), v.clone(), weight))
        })
    }
}

impl<V: VertexId, W: Weighting> GraphEdgeEditing for AdjMapGraph<V, W> {
    fn add_vertex(&mut self, u: V) -> bool {
        if self.adj.contains_key(&u) {
            return false;
        }
        self.adj.insert(u, BTreeSet::new());
        true
    }

    fn insert_edge(&mut self, edge: Edge<V>) {
        let edge = Edge::with_weight(
            edge.origin().clone(),
            edge.target().clone(),
            W::store_weight(edge.weight()),
        );

        self.add_vertex(edge.origin().clone());
        self.add_vertex(edge.target().clone());

        let newly_added = self
            .adj
            .get_mut(edge.origin())
            .unwrap()
            .insert(edge.clone());

        if !edge.is_loop() {
            let mirror = edge.reverse();
            self.adj.get_mut(edge.target()).unwrap().insert(mirror);
        }

        if newly_added {
            self.num_edges += 1;
        }
    }
}

impl<V: VertexId, W: Weighting> PartialEq for AdjMapGraph<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.adj == other.adj
    }
}

impl<V: VertexId, W: Weighting> Eq for AdjMapGraph<V, W> {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn add_vertex_is_idempotent() {
        let mut graph = Graph::new();
        for n in 1..=5 {
            assert!(graph.add_vertex(n));
        }
        for n in 1..=5 {
            assert!(!graph.add_vertex(n));
        }
        assert_eq!(graph.number_of_vertices(), 5);
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn edges_are_mirrored() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2);

        assert!(graph.has_edge(&1, &2));
        assert!(graph.has_edge(&2, &1));
        assert_eq!(graph.number_of_vertices(), 2);
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.edges().count(), 2);
    }

    #[test]
    fn duplicate_edges_are_idempotent() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2);
        graph.add_edge(1, 2);
        graph.add_edge(2, 1);

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.edges().count(), 2);
        assert_eq!(graph.edges_of(&1).count(), 1);
        assert_eq!(graph.edges_of(&2).count(), 1);
    }

    #[test]
    fn parallel_weights_are_distinct_edges() {
        let mut graph = WeightedGraph::new();
        graph.add_edge_with_weight(1, 2, 1.0);
        graph.add_edge_with_weight(1, 2, 2.0);
        graph.add_edge_with_weight(1, 2, 2.0);

        assert_eq!(graph.number_of_edges(), 2);
        assert!(graph.has_weighted_edge(&1, &2, 1.0));
        assert!(graph.has_weighted_edge(&2, &1, 2.0));
        assert!(!graph.has_weighted_edge(&1, &2, 3.0));
    }

    #[test]
    fn unweighted_graphs_coerce_weights() {
        let mut graph = Graph::new();
        graph.add_edges([(1, 2, 5.0), (2, 3, 7.0)]);

        assert!(graph.has_weighted_edge(&1, &2, DEFAULT_WEIGHT));
        assert!(!graph.has_weighted_edge(&1, &2, 5.0));
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn self_loop_is_stored_once() {
        let mut graph = Graph::new();
        graph.add_edge(1, 1);

        assert!(graph.has_self_loop(&1));
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.edges_of(&1).count(), 1);
    }

    #[test]
    fn vertices_iterate_in_natural_order() {
        let graph = Graph::from_edges([(5, 3), (1, 4), (2, 5)]);
        assert_eq!(graph.vertices().copied().collect_vec(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn mean_degree() {
        let mut graph = Graph::new();
        assert_eq!(graph.mean_degree(), 0.0);

        graph.add_edges([(1, 2), (2, 5), (5, 3), (4, 5), (1, 5)]);
        assert_eq!(graph.number_of_vertices(), 5);
        assert_eq!(graph.number_of_edges(), 5);
        assert_eq!(graph.mean_degree(), 2.0);
    }

    #[test]
    fn degrees_count_directed_halves() {
        let graph = Graph::from_edges([(1, 2), (2, 5), (5, 3), (4, 5), (1, 5)]);

        assert_eq!(graph.degree_of(&5), 4);
        assert_eq!(graph.degree_of(&3), 1);
        assert_eq!(
            graph.vertices().map(|v| graph.degree_of(v)).sum::<usize>(),
            2 * graph.number_of_edges()
        );
    }

    #[test]
    fn debug_output_shows_edges() {
        let graph = Graph::from_edges([(1, 2)]);
        let rendered = format!("{graph:?}");

        assert!(rendered.contains("(1,2)"));
        assert!(rendered.contains("(2,1)"));

        let mut weighted = WeightedGraph::new();
        weighted.add_edge_with_weight(1, 2, 2.5);
        assert!(format!("{weighted:?}").contains("(1,2,2.5)"));
    }

    #[test]
    fn string_vertices() {
        let mut graph = WeightedGraph::new();
        graph.add_edge_with_weight("a".to_string(), "b".to_string(), 0.5);

        assert!(graph.has_vertex(&"a".to_string()));
        assert!(graph.has_weighted_edge(&"b".to_string(), &"a".to_string(), 0.5));
    }
}

