//! Bucket construction: one working bag per vertex, derived from the hyperedges and an
//! elimination ordering.
use crate::error::{DecompositionError, Result};
use crate::hypergraph::{Hyperedge, HypergraphView, Vertex, FIRST_VERTEX};
use crate::ordering::EliminationOrdering;
use crate::sorted;

use tracing::{debug, trace};

/// Per-vertex buckets. `contents[v.index()]` is the sorted bucket owned by `v`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buckets {
    contents: Vec<Vec<Vertex>>,
    isolated: Vec<Vertex>,
}

impl Buckets {
    /// Build one bucket per vertex.
    ///
    /// Every bucket starts as `{v}`. Each hyperedge is then merged into the bucket of its
    /// minimum-rank vertex.
    pub fn build(graph: &dyn HypergraphView, ordering: &EliminationOrdering) -> Result<Self> {
        let n = graph.vertex_count();
        if ordering.len() != n {
            return Err(DecompositionError::InvalidOrdering {
                expected: n,
                actual: ordering.len(),
            });
        }

        let mut contents: Vec<Vec<Vertex>> = (0..n).map(|i| vec![Vertex::from_index(i)]).collect();
        let mut in_proper_edge = vec![false; n];

        for edge in graph.hyperedges() {
            check_hyperedge(edge, n)?;

            let vertices = edge.sorted_vertices();
            if vertices.len() > 1 {
                for v in &vertices {
                    in_proper_edge[v.index()] = true;
                }
            }

            // non-empty, so a minimum exists
            let Some(minimum) = ordering.minimum(&vertices) else {
                continue;
            };
            sorted::union_into(&mut contents[minimum.index()], &vertices);
        }

        // Isolated vertices are only reported; every vertex still becomes a decomposition node.
        let isolated: Vec<Vertex> = in_proper_edge
            .iter()
            .enumerate()
            .filter(|(_, used)| !**used)
            .map(|(i, _)| Vertex::from_index(i))
            .collect();

        debug!(
            buckets = n,
            isolated = isolated.len(),
            "built buckets"
        );
        for (i, bucket) in contents.iter().enumerate() {
            trace!(vertex = %Vertex::from_index(i), ?bucket, "bucket");
        }

        Ok(Buckets { contents, isolated })
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn get(&self, vertex: Vertex) -> &[Vertex] {
        &self.contents[vertex.index()]
    }

    /// Buckets taken as given, with nothing reported isolated.
    #[cfg(test)]
    pub(crate) fn from_contents(contents: Vec<Vec<Vertex>>) -> Self {
        Buckets {
            contents,
            isolated: Vec::new(),
        }
    }

    /// Merge `vertices` (sorted) into the bucket of `owner`.
    pub(crate) fn merge(&mut self, owner: Vertex, vertices: &[Vertex]) {
        sorted::union_into(&mut self.contents[owner.index()], vertices);
    }

    /// Vertices occurring in no hyperedge with more than one vertex.
    pub fn isolated(&self) -> &[Vertex] {
        &self.isolated
    }

    pub(crate) fn into_contents(self) -> Vec<Vec<Vertex>> {
        self.contents
    }
}

/// Reject an empty hyperedge or one mentioning a vertex outside `[1, vertex_count]`.
///
/// Repeated vertices are tolerated here; they are merged away when the edge is sorted.
pub(crate) fn check_hyperedge(edge: &Hyperedge, vertex_count: usize) -> Result<()> {
    if edge.is_empty() {
        return Err(DecompositionError::MalformedHyperedge(edge.id));
    }
    match edge
        .vertices
        .iter()
        .find(|v| v.0 < FIRST_VERTEX || v.0 > vertex_count)
    {
        Some(&vertex) => Err(DecompositionError::VertexOutOfRange {
            vertex,
            vertex_count,
        }),
        None => Ok(()),
    }
}
