/*!
# WGraphs

A library for undirected, optionally weighted graphs over arbitrary
ordered vertex labels.

Graphs are built from edges or read from the line-oriented edge-list
format, then queried through trait-based operations: traversal (BFS and
DFS), connectivity, Dijkstra shortest paths, Kruskal minimum spanning
forests and text renderings as adjacency matrix or adjacency list. All
iteration derives from the natural vertex order, so every result is
reproducible across runs.

```
use wgraphs::{algo::*, io::*, prelude::*};

let graph: Graph<u32> = read_graph("5\n1 2\n2 5\n5 3\n4 5\n1 5\n".as_bytes()).unwrap();

assert!(graph.connected());
assert_eq!(graph.shortest_path(&1, &3).unwrap(), vec![1, 5, 3]);
assert_eq!(graph.minimum_spanning_forest().len(), 4);
assert_eq!(graph.adjacency_list(), "1 - 2 5\n2 - 1 5\n3 - 5\n4 - 5\n5 - 1 2 3 4\n");
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod library;
pub mod ops;
pub mod repr;
pub mod vertex;

/// Includes all graph structures and their operation traits
pub mod prelude {
    pub use super::{edge::*, ops::*, repr::*, vertex::*};
}
