use itertools::Itertools;

use crate::{
    edge::{Edge, Weight},
    vertex::*,
};

/// Provides getters pertaining to the size of a graph
pub trait GraphOrder {
    /// The vertex type of the graph
    type Vertex: VertexId;

    /// Returns the number of vertices of the graph
    fn number_of_vertices(&self) -> NumVertices;

    /// Returns the number of undirected edges of the graph.
    /// Mirror pairs count once, a self-loop counts once.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns an iterator over all vertices in natural (ascending) order.
    fn vertices(&self) -> impl Iterator<Item = &Self::Vertex> + '_;

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_vertices() == 0
    }

    /// Returns the mean degree `2m / n`, or `0` for the empty graph.
    fn mean_degree(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            2.0 * self.number_of_edges() as f32 / self.number_of_vertices() as f32
        }
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphOrder {
    /// Returns an iterator over the outgoing edges of a given vertex,
    /// ascending by `(weight, origin, target)`.
    /// ** Panics if `u` is not in the graph **
    fn edges_of(&self, u: &Self::Vertex) -> impl Iterator<Item = &Edge<Self::Vertex>> + '_;

    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// A neighbor connected by several weights appears once per weight.
    /// ** Panics if `u` is not in the graph **
    fn neighbors_of(&self, u: &Self::Vertex) -> impl Iterator<Item = &Self::Vertex> + '_ {
        self.edges_of(u).map(|e| e.target())
    }

    /// Returns the number of outgoing edges of `u`
    /// ** Panics if `u` is not in the graph **
    fn degree_of(&self, u: &Self::Vertex) -> NumVertices {
        self.edges_of(u).count()
    }

    /// Returns an iterator over the full mirrored edge multiset: every
    /// undirected edge appears as both of its directed halves, self-loops
    /// appear once.
    fn edges(&self) -> impl Iterator<Item = &Edge<Self::Vertex>> + '_ {
        self.vertices().flat_map(|u| self.edges_of(u))
    }

    /// Returns all edges of the graph in sorted order (mirrored multiset).
    fn ordered_edges(&self) -> Vec<Edge<Self::Vertex>> {
        self.edges().cloned().sorted().collect_vec()
    }
}

/// Trait to test existence of vertices and edges in a graph.
pub trait AdjacencyTest: GraphOrder {
    /// Returns *true* if the vertex is in the graph.
    fn has_vertex(&self, u: &Self::Vertex) -> bool;

    /// Returns *true* if an edge `(u,v)` of any weight exists in the graph.
    fn has_edge(&self, u: &Self::Vertex, v: &Self::Vertex) -> bool;

    /// Returns *true* if the edge `(u,v)` exists with exactly this weight.
    fn has_weighted_edge(&self, u: &Self::Vertex, v: &Self::Vertex, weight: Weight) -> bool;

    /// Returns *true* if a self-loop `(u,u)` exists.
    fn has_self_loop(&self, u: &Self::Vertex) -> bool {
        self.has_edge(u, u)
    }
}

/// Provides functions to insert vertices and edges.
///
/// The store only grows; there are no removal operations.
pub trait GraphEdgeEditing: GraphOrder {
    /// Adds a vertex without any edges.
    /// Returns *true* exactly if the vertex was not present previously.
    fn add_vertex(&mut self, u: Self::Vertex) -> bool;

    /// Inserts an edge and its mirror into the store, adding absent
    /// endpoints first. Re-inserting an existing edge is a no-op.
    /// Unweighted graphs coerce the weight to [`crate::edge::DEFAULT_WEIGHT`].
    fn insert_edge(&mut self, edge: Edge<Self::Vertex>);

    /// Adds the undirected edge `{u, v}` with the default weight and
    /// returns the stored `(u, v)` half.
    fn add_edge(&mut self, u: Self::Vertex, v: Self::Vertex) -> Edge<Self::Vertex> {
        let edge = Edge::new(u, v);
        self.insert_edge(edge.clone());
        edge
    }

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge<Self::Vertex>>>) {
        for edge in edges {
            self.insert_edge(edge.into());
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges
pub trait GraphFromEdges: GraphEdgeEditing + Default {
    /// Create a graph from an iterator over edges
    fn from_edges(edges: impl IntoIterator<Item = impl Into<Edge<Self::Vertex>>>) -> Self {
        let mut graph = Self::default();
        graph.add_edges(edges);
        graph
    }
}

impl<G: GraphEdgeEditing + Default> GraphFromEdges for G {}
