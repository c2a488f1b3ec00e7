//! # Hypertree Decomposition
//!
//! Tree decompositions and generalized hypertree decompositions of hypergraphs, computed by
//! bucket elimination along a caller-supplied elimination ordering.
//!
//! A [tree decomposition](crate::tree::TreeDecomposition) of a hypergraph is a rooted tree of
//! *bags* (sets of vertices) such that every hyperedge fits inside some bag, and the bags
//! containing any given vertex form a connected subtree. Its *width* is the size of the largest
//! bag minus one. For the hypergraph with edges `{1,2}`, `{2,3}`, `{3,4}`:
//!
//! ```text
//!     1 ── 2 ── 3 ── 4          {1,2}
//!                                 │
//!                               {2,3}
//!                                 │
//!                               {3,4}
//! ```
//!
//! A [hypertree decomposition](crate::hypertree::HypertreeDecomposition) additionally covers
//! every bag by a set of hyperedges; its width is the size of the largest cover.
//!
//! # Pipeline
//!
//! [BucketEliminationAlgorithm](crate::decomposition::BucketEliminationAlgorithm) runs four
//! stages, one module each:
//!
//! 1. [bucket]: every hyperedge is merged into the bucket of its earliest vertex in the
//!    elimination ordering.
//! 2. [connect]: each bucket passes its leftover vertices on to the bucket of the next vertex,
//!    which links the two; disconnected pieces are then joined to the bucket they overlap most.
//! 3. [materialize]: the resulting tree is rooted at vertex 1, one node per vertex.
//! 4. [compress]: nodes whose bag is contained in a neighbor's bag are removed.
//!
//! [HypertreeDecompositionAlgorithm](crate::hypertree::HypertreeDecompositionAlgorithm) then
//! covers every bag using a pluggable [set cover](crate::set_cover::SetCoverAlgorithm) solver.
//!
//! # Example
//!
//! ```rust
//! use hypertree_decomposition::prelude::*;
//!
//! let graph = Hypergraph::from_edges(4, [vec![1, 2], vec![2, 3], vec![3, 4]]).unwrap();
//!
//! let tree = BucketEliminationAlgorithm::new(NaturalOrdering)
//!     .compute_decomposition(&graph)
//!     .unwrap();
//! assert_eq!(tree.width(), 1);
//! assert!(tree.is_valid_for(&graph));
//!
//! let hypertree = HypertreeDecompositionAlgorithm::new(
//!     BucketEliminationAlgorithm::new(NaturalOrdering),
//!     GreedySetCover,
//! )
//! .compute_decomposition(&graph)
//! .unwrap();
//! assert_eq!(hypertree.hypertree_width(), 1);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for hypergraphs and their identifiers.
//! - `parallel`: set cover and labeling functions run per node on rayon's thread pool. Output
//!   is identical to the sequential build.

pub mod error;
pub mod hypergraph;
pub mod sorted;

pub mod ordering;

pub mod bucket;
pub mod compress;
pub mod connect;
pub mod materialize;

pub mod label;
pub mod tree;
pub mod verify;

pub mod decomposition;
pub mod hypertree;
pub mod set_cover;

pub mod cancel;
pub mod config;

pub mod prelude {
    //! The types needed to build a hypergraph and decompose it.
    pub use crate::cancel::CancellationToken;
    pub use crate::config::DecompositionConfig;
    pub use crate::decomposition::{BucketEliminationAlgorithm, TreeDecompositionAlgorithm};
    pub use crate::error::{DecompositionError, RefinementError, SetCoverError};
    pub use crate::hypergraph::{EdgeId, Hyperedge, Hypergraph, HypergraphView, Vertex};
    pub use crate::hypertree::{HypertreeDecomposition, HypertreeDecompositionAlgorithm};
    pub use crate::label::{labeling_fn, Label, LabelingFunction, BAG_LABEL, EDGE_COVER_LABEL};
    pub use crate::ordering::{FixedOrdering, NaturalOrdering, OrderingAlgorithm};
    pub use crate::set_cover::{GreedySetCover, SetCoverAlgorithm};
    pub use crate::tree::{NodeId, TreeDecomposition};
    pub use crate::verify::Violation;
}
