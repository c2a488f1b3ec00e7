//! Hypergraph input: the narrow contract the decomposition pipeline consumes, and a simple
//! owned [`Hypergraph`] implementing it.
use crate::error::{DecompositionError, Result};

use core::fmt;

/// Identifier of the first vertex. Vertices are densely numbered `[FIRST_VERTEX, vertex_count]`.
pub const FIRST_VERTEX: usize = 1;

/// A vertex of a hypergraph, numbered from [`FIRST_VERTEX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex(pub usize);

impl Vertex {
    /// The 0-based slot of this vertex in per-vertex arrays.
    #[inline]
    pub fn index(self) -> usize {
        self.0 - FIRST_VERTEX
    }

    /// The vertex stored at 0-based slot `index`.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Vertex(index + FIRST_VERTEX)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeId(pub usize);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A hyperedge: an identifier plus an ordered, duplicate-free, non-empty list of vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hyperedge {
    pub id: EdgeId,
    pub vertices: Vec<Vertex>,
}

impl Hyperedge {
    pub fn new(id: EdgeId, vertices: Vec<Vertex>) -> Self {
        Hyperedge { id, vertices }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        self.vertices.contains(&vertex)
    }

    /// The vertices of this edge, sorted and deduplicated.
    pub fn sorted_vertices(&self) -> Vec<Vertex> {
        let mut vertices = self.vertices.clone();
        vertices.sort_unstable();
        vertices.dedup();
        vertices
    }
}

/// Read-only view of a hypergraph, as consumed by the decomposition algorithms.
///
/// Implementors must number vertices densely in `[1, vertex_count()]`. The pipeline
/// re-validates hyperedges, so a malformed view produces an error rather than a panic.
pub trait HypergraphView {
    fn vertex_count(&self) -> usize;

    fn hyperedges(&self) -> &[Hyperedge];

    fn hyperedge_count(&self) -> usize {
        self.hyperedges().len()
    }

    /// All vertices, in ascending order.
    fn vertices(&self) -> Vec<Vertex> {
        (0..self.vertex_count()).map(Vertex::from_index).collect()
    }
}

impl<G: HypergraphView + ?Sized> HypergraphView for &G {
    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn hyperedges(&self) -> &[Hyperedge] {
        (**self).hyperedges()
    }
}

/// An owned hypergraph with densely numbered vertices.
///
/// Edges are validated on insertion, so every [`Hypergraph`] satisfies the
/// [`HypergraphView`] contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hypergraph {
    vertex_count: usize,
    edges: Vec<Hyperedge>,
}

impl Hypergraph {
    /// The empty Hypergraph with no vertices or edges.
    pub fn empty() -> Self {
        Hypergraph::default()
    }

    /// A hypergraph with `vertex_count` vertices and no edges.
    pub fn discrete(vertex_count: usize) -> Self {
        Hypergraph {
            vertex_count,
            edges: vec![],
        }
    }

    /// Build a hypergraph from raw vertex numbers, one list per hyperedge.
    ///
    /// ```rust
    /// use hypertree_decomposition::hypergraph::{Hypergraph, HypergraphView};
    ///
    /// let h = Hypergraph::from_edges(3, [vec![1, 2], vec![2, 3]]).unwrap();
    /// assert_eq!(h.vertex_count(), 3);
    /// assert_eq!(h.hyperedge_count(), 2);
    /// ```
    pub fn from_edges<I, E>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: IntoIterator<Item = usize>,
    {
        let mut h = Self::discrete(vertex_count);
        for edge in edges {
            h.new_edge(edge.into_iter().map(Vertex).collect())?;
        }
        Ok(h)
    }

    /// Add a single vertex, returning its identifier.
    pub fn new_vertex(&mut self) -> Vertex {
        self.vertex_count += 1;
        Vertex(self.vertex_count)
    }

    /// Add a hyperedge over `vertices`, returning the [`EdgeId`] of the new edge.
    ///
    /// Fails if `vertices` is empty, mentions an unknown vertex, or repeats a vertex.
    pub fn new_edge(&mut self, vertices: Vec<Vertex>) -> Result<EdgeId> {
        let id = EdgeId(self.edges.len());
        if vertices.is_empty() {
            return Err(DecompositionError::MalformedHyperedge(id));
        }

        let mut seen = vec![false; self.vertex_count];
        for &vertex in &vertices {
            if vertex.0 < FIRST_VERTEX || vertex.0 > self.vertex_count {
                return Err(DecompositionError::VertexOutOfRange {
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
            if std::mem::replace(&mut seen[vertex.index()], true) {
                return Err(DecompositionError::DuplicateVertexInHyperedge { edge: id, vertex });
            }
        }

        self.edges.push(Hyperedge { id, vertices });
        Ok(id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Hyperedge> {
        self.edges.get(id.0)
    }
}

impl HypergraphView for Hypergraph {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn hyperedges(&self) -> &[Hyperedge] {
        &self.edges
    }
}
