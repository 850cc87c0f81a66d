//! Text renderings of a graph as an adjacency matrix or adjacency list.

use fxhash::FxHashMap;
use itertools::Itertools;

use crate::{
    edge::Weight,
    ops::AdjacencyList,
    repr::GraphType,
};

/// The two supported text renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepresentationType {
    AdjacencyMatrix,
    AdjacencyList,
}

/// Formats a weight without a trailing `.0`, so unit weights print as `1`.
pub fn format_weight(weight: Weight) -> String {
    format!("{weight}")
}

/// Renders graphs as adjacency-matrix or adjacency-list text.
///
/// Both renderings list vertices in their natural order, so the output is
/// reproducible and two equal graphs render identically.
pub trait GraphRepresentation: AdjacencyList + GraphType + Sized {
    /// Renders the graph in the requested representation.
    fn representation(&self, kind: RepresentationType) -> String {
        match kind {
            RepresentationType::AdjacencyMatrix => self.adjacency_matrix(),
            RepresentationType::AdjacencyList => self.adjacency_list(),
        }
    }

    /// Renders the adjacency matrix. The header row holds the vertex
    /// labels behind two leading spaces; every further row starts with its
    /// vertex label followed by one cell per vertex. A cell holds the edge
    /// weight, or `0` when there is no edge.
    ///
    /// With parallel edges of different weights between the same pair, the
    /// cell holds the largest weight.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{io::GraphRepresentation, prelude::*};
    ///
    /// let g = Graph::from_edges([(1, 2), (2, 3)]);
    /// assert_eq!(
    ///     g.adjacency_matrix(),
    ///     "  1 2 3\n\
    ///      1 0 1 0\n\
    ///      2 1 0 1\n\
    ///      3 0 1 0\n"
    /// );
    /// ```
    fn adjacency_matrix(&self) -> String {
        let vertices = self.vertices().collect_vec();
        let n = vertices.len();

        let columns: FxHashMap<&Self::Vertex, usize> = vertices
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, i))
            .collect();

        let mut cells: Vec<Weight> = vec![0.0; n * n];
        for (row, &u) in vertices.iter().enumerate() {
            for edge in self.edges_of(u) {
                let col = columns[edge.target()];
                let cell = &mut cells[row * n + col];
                *cell = cell.max(edge.weight());
            }
        }

        let mut out = String::from("  ");
        out.push_str(&vertices.iter().join(" "));
        out.push('\n');

        for (row, &u) in vertices.iter().enumerate() {
            out.push_str(&format!("{u} "));
            out.push_str(
                &cells[row * n..(row + 1) * n]
                    .iter()
                    .map(|&w| format_weight(w))
                    .join(" "),
            );
            out.push('\n');
        }

        out
    }

    /// Renders the adjacency list, one `vertex - neighbors` line per
    /// vertex with neighbors sorted ascending. On weighted graphs each
    /// neighbor carries its weight as `neighbor(weight)`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{io::GraphRepresentation, prelude::*};
    ///
    /// let g = Graph::from_edges([(1, 2), (2, 3)]);
    /// assert_eq!(g.adjacency_list(), "1 - 2\n2 - 1 3\n3 - 2\n");
    /// ```
    fn adjacency_list(&self) -> String {
        let weighted = self.is_weighted();
        let mut out = String::new();

        for u in self.vertices() {
            let neighbors = self
                .edges_of(u)
                .sorted_by(|a, b| a.target().cmp(b.target()).then(a.cmp(b)))
                .map(|edge| {
                    if weighted {
                        format!("{}({})", edge.target(), format_weight(edge.weight()))
                    } else {
                        edge.target().to_string()
                    }
                })
                .join(" ");

            out.push_str(&format!("{u} - {neighbors}\n"));
        }

        out
    }
}

impl<G> GraphRepresentation for G where G: AdjacencyList + GraphType + Sized {}
