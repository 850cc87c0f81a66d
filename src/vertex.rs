/*!
# Vertex Representation

Vertices are opaque user-supplied values rather than dense integer ids.
Any type with value equality and a total order works as a vertex; the order
is load-bearing: it fixes the row/column order of renderings, the tie-break
of spanning-forest construction and the start vertex of `connected()`, so
all outputs are reproducible across runs.
*/

use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// Blanket trait for everything a vertex value must support.
///
/// `Ord` provides the natural vertex order, `Hash` allows per-call scratch
/// maps (visited sets, distances, union-find parents) to be hash-based.
pub trait VertexId: Clone + Ord + Hash + Debug + Display {}

impl<V: Clone + Ord + Hash + Debug + Display> VertexId for V {}

/// Number of vertices in a graph
pub type NumVertices = usize;

/// Number of (undirected) edges in a graph
pub type NumEdges = usize;

/// Depth of a vertex in a traversal tree (root = 0)
pub type Level = u32;
