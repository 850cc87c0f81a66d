/*!
Breadth- and depth-first traversal.

Both traversals share one iterator, [`TraversalSearch`], parameterized by
the frontier container: queue semantics give BFS, stack semantics give DFS.
The depth-first variant therefore never recurses, so chains of tens of
thousands of vertices cannot exhaust the call stack.

Items are yielded in discovery order, which together with the sorted
adjacency store makes traversal output reproducible across runs.
*/

use std::collections::VecDeque;

use fxhash::FxHashSet;

use super::*;

/// One discovered vertex of a traversal tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeItem<V> {
    pub vertex: V,
    /// Depth in the traversal tree; the root has level `0` and every other
    /// vertex sits one level below its predecessor.
    pub level: Level,
    /// Parent in the traversal tree, `None` for the root.
    pub predecessor: Option<V>,
}

impl<V: VertexId> TreeItem<V> {
    fn root(vertex: V) -> Self {
        Self {
            vertex,
            level: 0,
            predecessor: None,
        }
    }

    fn child_of(parent: &Self, vertex: V) -> Self {
        Self {
            vertex,
            level: parent.level + 1,
            predecessor: Some(parent.vertex.clone()),
        }
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// The implementation determines the traversal order:
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait VertexSequencer<T> {
    /// Creates a new sequencer initialized with a single item.
    fn init(item: T) -> Self;

    /// Pushes an item into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next item from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> VertexSequencer<T> for VecDeque<T> {
    fn init(item: T) -> Self {
        Self::from(vec![item])
    }
    fn push(&mut self, item: T) {
        self.push_back(item)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> VertexSequencer<T> for Vec<T> {
    fn init(item: T) -> Self {
        vec![item]
    }
    fn push(&mut self, item: T) {
        self.push(item)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier of undiscovered tree items and a set of
/// visited vertices; vertices are marked visited when they enter the
/// frontier, so each vertex is yielded at most once.
pub struct TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: VertexSequencer<TreeItem<G::Vertex>>,
{
    graph: &'a G,
    visited: FxHashSet<G::Vertex>,
    sequencer: S,
}

/// A BFS traversal iterator, visiting vertices in breadth-first discovery
/// order from a given root.
pub type Bfs<'a, G> = TraversalSearch<'a, G, VecDeque<TreeItem<<G as GraphOrder>::Vertex>>>;

/// A DFS traversal iterator, visiting vertices in depth-first discovery
/// order from a given root.
pub type Dfs<'a, G> = TraversalSearch<'a, G, Vec<TreeItem<<G as GraphOrder>::Vertex>>>;

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: VertexSequencer<TreeItem<G::Vertex>>,
{
    /// Creates a new traversal iterator rooted at `root`.
    /// The root must already exist in the graph; the iterator panics on an
    /// absent root once it expands the root's neighborhood.
    pub fn new(graph: &'a G, root: &G::Vertex) -> Self {
        let mut visited = FxHashSet::default();
        visited.insert(root.clone());
        Self {
            graph,
            visited,
            sequencer: S::init(TreeItem::root(root.clone())),
        }
    }
}

impl<G, S> Iterator for TraversalSearch<'_, G, S>
where
    G: AdjacencyList,
    S: VertexSequencer<TreeItem<G::Vertex>>,
{
    type Item = TreeItem<G::Vertex>;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;

        for v in self.graph.neighbors_of(&popped.vertex) {
            if self.visited.insert(v.clone()) {
                self.sequencer.push(TreeItem::child_of(&popped, v.clone()));
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // everything queued is yielded for sure, plus at most the
        // undiscovered remainder of the graph
        let queued = self.sequencer.cardinality();
        (
            queued,
            Some(queued + self.graph.number_of_vertices() - self.visited.len()),
        )
    }
}

/// Provides traversal methods directly on graph data structures.
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses vertices reachable from `root`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges([(1, 2), (2, 3)]);
    ///
    /// let levels: Vec<_> = g.bfs(&1).map(|item| item.level).collect();
    /// assert_eq!(levels, vec![0, 1, 2]);
    /// ```
    fn bfs(&self, root: &Self::Vertex) -> Bfs<'_, Self> {
        Bfs::new(self, root)
    }

    /// Returns an iterator that traverses vertices reachable from `root`
    /// in **depth-first search (DFS) order**, using an explicit stack.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges([(1, 2), (2, 3)]);
    ///
    /// let order: Vec<_> = g.dfs(&1).map(|item| item.vertex).collect();
    /// assert_eq!(order, vec![1, 2, 3]);
    /// ```
    fn dfs(&self, root: &Self::Vertex) -> Dfs<'_, Self> {
        Dfs::new(self, root)
    }

    /// Returns *true* iff a traversal from an arbitrary vertex reaches
    /// every vertex of the graph. The empty graph is vacuously connected.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = Graph::from_edges([(1, 2), (2, 3)]);
    /// assert!(g.connected());
    ///
    /// g.add_vertex(4);
    /// assert!(!g.connected());
    /// ```
    fn connected(&self) -> bool {
        match self.vertices().next() {
            None => true,
            Some(root) => self.dfs(root).count() == self.number_of_vertices(),
        }
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
