//! Reading graphs from the line-oriented edge-list format.
//!
//! The first non-blank line declares the number of vertices. Every further
//! non-blank line is one undirected edge, `origin target` with an optional
//! trailing weight. Blank lines are skipped anywhere in the file.

use std::{fs::File, io::BufRead, io::BufReader, path::Path, str::FromStr};

use super::{LoadError, parse_next_value};
use crate::{
    edge::{DEFAULT_WEIGHT, Edge, Weight},
    ops::GraphEdgeEditing,
    repr::{AdjMapGraph, Graph, WeightedGraph, Weighting},
    vertex::VertexId,
};

/// Reads an unweighted graph. Weight tokens on edge lines are ignored;
/// every edge behaves as weight `1`.
///
/// # Examples
/// ```
/// use wgraphs::{io::read_graph, prelude::*};
///
/// let input = "5\n1 2\n2 5\n5 3\n4 5\n1 5\n";
/// let graph: Graph<u32> = read_graph(input.as_bytes()).unwrap();
///
/// assert_eq!(graph.number_of_vertices(), 5);
/// assert_eq!(graph.number_of_edges(), 5);
/// ```
pub fn read_graph<V, R>(reader: R) -> Result<Graph<V>, LoadError>
where
    V: VertexId + FromStr,
    R: BufRead,
{
    read_edge_lines(reader)
}

/// Reads a weighted graph. An edge line without a weight token gets the
/// default weight `1`.
pub fn read_weighted_graph<V, R>(reader: R) -> Result<WeightedGraph<V>, LoadError>
where
    V: VertexId + FromStr,
    R: BufRead,
{
    read_edge_lines(reader)
}

/// Opens `path` and reads it as an unweighted graph.
pub fn read_graph_file<V, P>(path: P) -> Result<Graph<V>, LoadError>
where
    V: VertexId + FromStr,
    P: AsRef<Path>,
{
    read_graph(BufReader::new(File::open(path)?))
}

/// Opens `path` and reads it as a weighted graph.
pub fn read_weighted_graph_file<V, P>(path: P) -> Result<WeightedGraph<V>, LoadError>
where
    V: VertexId + FromStr,
    P: AsRef<Path>,
{
    read_weighted_graph(BufReader::new(File::open(path)?))
}

/// Shared parse loop. The vertex-count header is validated but otherwise
/// unused; the vertex set is whatever the edge lines mention.
fn read_edge_lines<V, W, R>(reader: R) -> Result<AdjMapGraph<V, W>, LoadError>
where
    V: VertexId + FromStr,
    W: Weighting,
    R: BufRead,
{
    let mut graph = AdjMapGraph::new();
    let mut saw_header = false;
    let mut saw_edge = false;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;

        let mut tokens = line.split_whitespace().peekable();
        if tokens.peek().is_none() {
            continue;
        }

        if !saw_header {
            let _num_vertices: usize = parse_next_value!(tokens, lineno, "number of vertices");
            saw_header = true;
            continue;
        }

        let origin: V = parse_next_value!(tokens, lineno, "edge origin");
        let target: V = parse_next_value!(tokens, lineno, "edge target");
        if origin == target {
            return Err(LoadError::SelfLoop { line: lineno });
        }

        let weight: Weight = if W::IS_WEIGHTED && tokens.peek().is_some() {
            parse_next_value!(tokens, lineno, "edge weight")
        } else {
            DEFAULT_WEIGHT
        };

        graph.insert_edge(Edge::with_weight(origin, target, weight));
        saw_edge = true;
    }

    if !saw_header {
        return Err(LoadError::EmptyFile);
    }
    if !saw_edge {
        return Err(LoadError::NoEdges);
    }

    Ok(graph)
}
