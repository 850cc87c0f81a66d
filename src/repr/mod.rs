/*!
# Graph Representations

The adjacency store keeps one sorted edge set per vertex inside a sorted
map, so every iteration order is derived from the natural vertex order and
reproducible across runs. Whether a graph carries caller-supplied weights
is a compile-time property, expressed by the [`Weighting`] marker.
*/

use crate::edge::{DEFAULT_WEIGHT, Weight};

mod adj_map;

pub use adj_map::*;

/// Exposes the [`Weighting`] marker of a concrete graph type, so generic
/// code (e.g. the renderers) can ask whether weights are caller-supplied.
pub trait GraphType {
    type Weights: Weighting;

    fn is_weighted(&self) -> bool {
        Self::Weights::IS_WEIGHTED
    }
}

/// Compile-time marker deciding how a graph treats edge weights.
pub trait Weighting {
    /// *true* for graphs whose edges carry caller-supplied weights
    const IS_WEIGHTED: bool;

    /// Maps a requested weight to the weight actually stored
    fn store_weight(weight: Weight) -> Weight;
}

/// Marker for unweighted graphs. Every edge behaves as weight `1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unweighted;

/// Marker for weighted graphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Weighted;

impl Weighting for Unweighted {
    const IS_WEIGHTED: bool = false;

    fn store_weight(_weight: Weight) -> Weight {
        DEFAULT_WEIGHT
    }
}

impl Weighting for Weighted {
    const IS_WEIGHTED: bool = true;

    fn store_weight(weight: Weight) -> Weight {
        weight
    }
}
