/*!
# Errors

All engine failures are recoverable at the call site; algorithms are
deterministic for a fixed graph, so nothing is ever retried internally.
Vertices are rendered into the error at construction time to keep the
error type independent of the vertex type.
*/

use thiserror::Error;

use crate::vertex::VertexId;

/// Failures surfaced by graph algorithms and the validation facade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// No route connects the two requested endpoints.
    #[error("there is no path between {from} and {to}")]
    NoPath { from: String, to: String },

    /// A negative-weight edge exists somewhere in the graph. The check is
    /// conservative: any negative edge refuses the shortest-path run, cycle
    /// or not.
    #[error("the shortest path cannot be found in a graph with a negative-weight cycle")]
    NegativeWeightCycle,

    /// An operation referenced a vertex absent from the store.
    #[error("vertex {0} not found in the graph")]
    VertexNotFound(String),

    /// A spanning tree was demanded but the graph splits into several
    /// components. Only raised by callers that opted into the check; the
    /// forest builder itself never fails.
    #[error("the graph is disconnected; the result is a forest, not a spanning tree")]
    DisconnectedGraph,
}

impl GraphError {
    pub fn no_path<V: VertexId>(from: &V, to: &V) -> Self {
        Self::NoPath {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn vertex_not_found<V: VertexId>(v: &V) -> Self {
        Self::VertexNotFound(v.to_string())
    }
}
