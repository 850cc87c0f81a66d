/*!
# IO

Reading graphs from the line-oriented edge-list format and rendering
graphs as adjacency-matrix or adjacency-list text.

The loader is the validating boundary of the crate: it rejects empty
files, files without edges and self-loop edge lines before anything
reaches the store. The renderers are pure; they never fail.
*/

pub mod edge_list;
pub mod representation;

use thiserror::Error;

pub use edge_list::*;
pub use representation::*;

/// Failures while reading a graph from its textual format.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("the file is empty")]
    EmptyFile,

    #[error("no edge found in the file")]
    NoEdges,

    #[error("line {line}: self-loop edges are not allowed")]
    SelfLoop { line: usize },

    #[error("line {line}: premature end of line when parsing {what}")]
    MissingValue { line: usize, what: &'static str },

    #[error("line {line}: invalid value found, cannot parse {what}")]
    InvalidValue { line: usize, what: &'static str },
}

/// Tries to parse the next token on a line and returns early if it fails
macro_rules! parse_next_value {
    ($tokens:expr, $line:expr, $name:expr) => {{
        let next = $tokens.next().ok_or(LoadError::MissingValue {
            line: $line,
            what: $name,
        })?;

        next.parse().map_err(|_| LoadError::InvalidValue {
            line: $line,
            what: $name,
        })?
    }};
}

pub(crate) use parse_next_value;
