//! Elimination orderings.
//!
//! Concrete ordering heuristics (min-degree, min-fill, ...) live outside this crate; they plug
//! in through [`OrderingAlgorithm`]. Whatever they return is validated into an
//! [`EliminationOrdering`] before the bucket builder sees it.
use crate::error::{DecompositionError, Result};
use crate::hypergraph::{HypergraphView, Vertex, FIRST_VERTEX};

/// Computes an elimination ordering: a sequence listing every vertex exactly once.
pub trait OrderingAlgorithm: Send + Sync {
    fn compute_ordering(&self, graph: &dyn HypergraphView) -> Vec<Vertex>;
}

/// Orders vertices by identifier, `1, 2, ..., n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrdering;

impl OrderingAlgorithm for NaturalOrdering {
    fn compute_ordering(&self, graph: &dyn HypergraphView) -> Vec<Vertex> {
        graph.vertices()
    }
}

/// Returns a caller-chosen sequence regardless of the input hypergraph.
#[derive(Debug, Clone, Default)]
pub struct FixedOrdering(pub Vec<Vertex>);

impl FixedOrdering {
    pub fn from_raw(vertices: impl IntoIterator<Item = usize>) -> Self {
        FixedOrdering(vertices.into_iter().map(Vertex).collect())
    }
}

impl OrderingAlgorithm for FixedOrdering {
    fn compute_ordering(&self, _graph: &dyn HypergraphView) -> Vec<Vertex> {
        self.0.clone()
    }
}

/// A validated bijection between vertices and ranks `[0, n)`.
///
/// Lower rank means eliminated earlier; "minimum vertex" always means minimum rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EliminationOrdering {
    sequence: Vec<Vertex>,
    // rank[v.index()] is the position of v in `sequence`
    ranks: Vec<usize>,
}

impl EliminationOrdering {
    /// Validate `sequence` as a permutation of `[1, vertex_count]`.
    pub fn new(sequence: Vec<Vertex>, vertex_count: usize) -> Result<Self> {
        if sequence.len() != vertex_count {
            return Err(DecompositionError::InvalidOrdering {
                expected: vertex_count,
                actual: sequence.len(),
            });
        }

        let mut ranks = vec![usize::MAX; vertex_count];
        for (rank, &vertex) in sequence.iter().enumerate() {
            if vertex.0 < FIRST_VERTEX || vertex.0 > vertex_count {
                return Err(DecompositionError::OrderingNotPermutation { vertex });
            }
            let slot = &mut ranks[vertex.index()];
            if *slot != usize::MAX {
                return Err(DecompositionError::OrderingNotPermutation { vertex });
            }
            *slot = rank;
        }

        Ok(EliminationOrdering { sequence, ranks })
    }

    /// Ask `algorithm` for an ordering of `graph` and validate it.
    pub fn compute(algorithm: &dyn OrderingAlgorithm, graph: &dyn HypergraphView) -> Result<Self> {
        Self::new(algorithm.compute_ordering(graph), graph.vertex_count())
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// # Panics
    ///
    /// When `vertex` is not part of the ordering.
    #[inline]
    pub fn rank(&self, vertex: Vertex) -> usize {
        self.ranks[vertex.index()]
    }

    pub fn vertex_at(&self, rank: usize) -> Vertex {
        self.sequence[rank]
    }

    /// Vertices in elimination order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.sequence
    }

    /// The vertex of `vertices` with the lowest rank, or `None` for an empty slice.
    pub fn minimum(&self, vertices: &[Vertex]) -> Option<Vertex> {
        vertices.iter().copied().min_by_key(|&v| self.rank(v))
    }
}
