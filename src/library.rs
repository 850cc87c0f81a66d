/*!
# Library Façade

[`GraphLibrary`] bundles the traversal, shortest-path and spanning-forest
operations behind argument validation: every entry point checks its vertex
arguments first and fails with [`GraphError::VertexNotFound`] instead of
panicking, so callers can hand it untrusted input directly.

It also renders the classic line-per-item text reports for each result.
*/

use itertools::Itertools;

use crate::{
    algo::{ShortestPath, SpanningForest, Traversal, TreeItem},
    edge::Edge,
    error::GraphError,
    ops::{AdjacencyList, AdjacencyTest},
    vertex::VertexId,
};

/// What to do when a minimum-spanning-forest query meets a disconnected
/// graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForestPolicy {
    /// Return one tree per connected component.
    #[default]
    AllowForest,
    /// Fail with [`GraphError::DisconnectedGraph`] unless a single tree
    /// spans the whole graph.
    RequireSpanningTree,
}

/// Validated entry points over any graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphLibrary {
    forest_policy: ForestPolicy,
}

impl GraphLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_forest_policy(forest_policy: ForestPolicy) -> Self {
        Self { forest_policy }
    }

    /// Runs a breadth-first search from `root` and collects its tree.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `root` is not in the graph.
    pub fn bfs<G>(&self, graph: &G, root: &G::Vertex) -> Result<Vec<TreeItem<G::Vertex>>, GraphError>
    where
        G: AdjacencyList + AdjacencyTest,
    {
        self.check_vertex(graph, root)?;
        Ok(graph.bfs(root).collect())
    }

    /// Runs a depth-first search from `root` and collects its tree.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `root` is not in the graph.
    pub fn dfs<G>(&self, graph: &G, root: &G::Vertex) -> Result<Vec<TreeItem<G::Vertex>>, GraphError>
    where
        G: AdjacencyList + AdjacencyTest,
    {
        self.check_vertex(graph, root)?;
        Ok(graph.dfs(root).collect())
    }

    /// Computes a cheapest path between two existing vertices.
    ///
    /// # Errors
    /// - [`GraphError::VertexNotFound`] if either endpoint is missing
    /// - [`GraphError::NegativeWeightCycle`] if any edge has negative weight
    /// - [`GraphError::NoPath`] if `target` is unreachable from `source`
    pub fn shortest_path<G>(
        &self,
        graph: &G,
        source: &G::Vertex,
        target: &G::Vertex,
    ) -> Result<Vec<G::Vertex>, GraphError>
    where
        G: AdjacencyList + AdjacencyTest,
    {
        self.check_vertex(graph, source)?;
        self.check_vertex(graph, target)?;
        graph.shortest_path(source, target)
    }

    /// Builds a minimum spanning forest, subject to the configured
    /// [`ForestPolicy`].
    ///
    /// # Errors
    /// [`GraphError::DisconnectedGraph`] under
    /// [`ForestPolicy::RequireSpanningTree`] when no single tree spans the
    /// graph.
    pub fn minimum_spanning_forest<G>(
        &self,
        graph: &G,
    ) -> Result<Vec<Edge<G::Vertex>>, GraphError>
    where
        G: AdjacencyList,
    {
        let forest = graph.minimum_spanning_forest();

        if self.forest_policy == ForestPolicy::RequireSpanningTree
            && graph.number_of_vertices() > 0
            && forest.len() + 1 != graph.number_of_vertices()
        {
            return Err(GraphError::DisconnectedGraph);
        }

        Ok(forest)
    }

    /// Renders a traversal tree as one `vertex - level predecessor` line
    /// per item, with `-` standing in for the root's missing predecessor.
    pub fn traversal_report<V: VertexId>(&self, tree: &[TreeItem<V>]) -> String {
        tree.iter()
            .map(|item| {
                let predecessor = item
                    .predecessor
                    .as_ref()
                    .map_or_else(|| "-".to_string(), |p| p.to_string());
                format!("{} - {} {predecessor}\n", item.vertex, item.level)
            })
            .collect()
    }

    /// Renders a path as its vertices joined by single spaces.
    pub fn path_report<V: VertexId>(&self, path: &[V]) -> String {
        path.iter().join(" ")
    }

    /// Renders a forest as one edge per line.
    pub fn forest_report<V: VertexId>(&self, forest: &[Edge<V>]) -> String {
        forest.iter().map(|edge| format!("{edge}\n")).collect()
    }

    fn check_vertex<G>(&self, graph: &G, u: &G::Vertex) -> Result<(), GraphError>
    where
        G: AdjacencyTest,
    {
        if graph.has_vertex(u) {
            Ok(())
        } else {
            Err(GraphError::vertex_not_found(u))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ops::GraphFromEdges,
        repr::{Graph, WeightedGraph},
    };

    fn sample() -> Graph<u32> {
        Graph::from_edges([(1, 2), (2, 5), (5, 3), (4, 5), (1, 5)])
    }

    #[test]
    fn bfs_requires_an_existing_root() {
        let library = GraphLibrary::new();
        let graph = sample();

        assert!(library.bfs(&graph, &1).is_ok());
        assert_eq!(
            library.bfs(&graph, &9),
            Err(GraphError::VertexNotFound("9".to_string()))
        );
        assert_eq!(
            library.dfs(&graph, &9),
            Err(GraphError::VertexNotFound("9".to_string()))
        );
    }

    #[test]
    fn shortest_path_validates_both_endpoints() {
        let library = GraphLibrary::new();
        let graph = sample();

        assert_eq!(library.shortest_path(&graph, &1, &3).unwrap(), vec![1, 5, 3]);
        assert_eq!(
            library.shortest_path(&graph, &9, &3),
            Err(GraphError::VertexNotFound("9".to_string()))
        );
        assert_eq!(
            library.shortest_path(&graph, &1, &9),
            Err(GraphError::VertexNotFound("9".to_string()))
        );
    }

    #[test]
    fn forest_policy_gates_disconnected_graphs() {
        let graph = Graph::from_edges([(1, 2), (3, 4)]);

        let lenient = GraphLibrary::new();
        assert_eq!(lenient.minimum_spanning_forest(&graph).unwrap().len(), 2);

        let strict = GraphLibrary::with_forest_policy(ForestPolicy::RequireSpanningTree);
        assert_eq!(
            strict.minimum_spanning_forest(&graph),
            Err(GraphError::DisconnectedGraph)
        );
        assert!(strict.minimum_spanning_forest(&sample()).is_ok());
    }

    #[test]
    fn strict_policy_accepts_the_empty_graph() {
        let strict = GraphLibrary::with_forest_policy(ForestPolicy::RequireSpanningTree);
        let graph = Graph::<u32>::new();

        assert_eq!(strict.minimum_spanning_forest(&graph).unwrap(), vec![]);
    }

    #[test]
    fn traversal_report_lines() {
        let library = GraphLibrary::new();
        let tree = library.bfs(&sample(), &1).unwrap();

        assert_eq!(
            library.traversal_report(&tree),
            "1 - 0 -\n2 - 1 1\n5 - 1 1\n3 - 2 5\n4 - 2 5\n"
        );
    }

    #[test]
    fn path_report_joins_vertices() {
        let library = GraphLibrary::new();
        let path = library.shortest_path(&sample(), &1, &3).unwrap();

        assert_eq!(library.path_report(&path), "1 5 3");
    }

    #[test]
    fn forest_report_lists_edges() {
        let library = GraphLibrary::new();
        let mut graph = WeightedGraph::new();
        graph.add_edge_with_weight(1, 2, 4.0);
        graph.add_edge_with_weight(1, 3, 1.0);
        graph.add_edge_with_weight(2, 3, 2.0);

        let forest = library.minimum_spanning_forest(&graph).unwrap();
        assert_eq!(library.forest_report(&forest), "(1,3)\n(2,3)\n");
    }
}
