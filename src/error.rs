//! Error types for decomposition construction and hypertree refinement.
use crate::hypergraph::{EdgeId, Vertex};
use crate::tree::TreeDecomposition;

use thiserror::Error;

/// Result type alias using [`DecompositionError`].
pub type Result<T> = std::result::Result<T, DecompositionError>;

/// Failure of a decomposition call. No partial tree is ever returned alongside one of these.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DecompositionError {
    /// The ordering oracle returned a sequence whose length differs from the vertex count.
    #[error("invalid ordering: expected {expected} vertices, got {actual}")]
    InvalidOrdering { expected: usize, actual: usize },

    /// The ordering has the right length but repeats (or skips) a vertex.
    #[error("invalid ordering: vertex {vertex} is repeated or out of range")]
    OrderingNotPermutation { vertex: Vertex },

    /// A hyperedge mentions a vertex outside `[1, vertex_count]`.
    #[error("vertex {vertex} is out of range for a hypergraph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: Vertex, vertex_count: usize },

    /// A hyperedge with no vertices.
    #[error("malformed hyperedge {0}: hyperedges must contain at least one vertex")]
    MalformedHyperedge(EdgeId),

    #[error("malformed hyperedge {edge}: vertex {vertex} occurs more than once")]
    DuplicateVertexInHyperedge { edge: EdgeId, vertex: Vertex },

    /// Two labeling functions (or a labeling function and a built-in label) share a name.
    #[error("label name {0:?} is used more than once")]
    DuplicateLabelName(String),

    #[error("set cover failed: {0}")]
    SetCover(#[from] SetCoverError),

    #[error(transparent)]
    Refinement(Box<RefinementError>),

    /// The call's cancellation token fired or its deadline passed.
    #[error("decomposition cancelled")]
    Cancelled,
}

/// Failure reported by a [`crate::set_cover::SetCoverAlgorithm`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SetCoverError {
    /// No available hyperedge contains `vertex`.
    #[error("vertex {vertex} is not contained in any available hyperedge")]
    Uncoverable { vertex: Vertex },

    /// The solver returned edges that leave `vertex` uncovered.
    #[error("set cover result misses vertex {vertex}")]
    Incomplete { vertex: Vertex },

    #[error("set cover solver unavailable: {0}")]
    Unavailable(String),
}

/// Hypertree refinement aborted.
///
/// The plain tree decomposition the refinement started from is handed back untouched, so a
/// caller can still use it.
#[derive(Debug, Error)]
#[error("hypertree refinement failed: {error}")]
pub struct RefinementError {
    #[source]
    pub error: DecompositionError,
    pub decomposition: TreeDecomposition,
}

impl RefinementError {
    /// Recover the untouched tree decomposition.
    pub fn into_decomposition(self) -> TreeDecomposition {
        self.decomposition
    }
}

impl From<RefinementError> for DecompositionError {
    fn from(err: RefinementError) -> Self {
        DecompositionError::Refinement(Box::new(err))
    }
}
