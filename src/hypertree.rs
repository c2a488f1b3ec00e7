//! Generalized hypertree decompositions: tree decompositions whose bags also carry a covering
//! set of hyperedges.
//!
//! The width of a hypertree decomposition is the size of its largest edge cover, rather than
//! of its largest bag. Refinement never changes the shape of the tree or its bags; it only
//! attaches a [`Label::EdgeCover`] under [`EDGE_COVER_LABEL`] to every node.
use crate::cancel::{self, CancellationToken};
use crate::decomposition::TreeDecompositionAlgorithm;
use crate::error::{RefinementError, Result, SetCoverError};
use crate::hypergraph::{Hyperedge, HypergraphView, FIRST_VERTEX};
use crate::label::{self, Label, LabelingFunction, EDGE_COVER_LABEL};
use crate::set_cover::{first_uncovered, SetCoverAlgorithm};
use crate::sorted;
use crate::tree::{self, NodeId, TreeDecomposition};

use core::ops::Deref;
use tracing::debug;

/// A [`TreeDecomposition`] in which every node has an edge cover.
#[derive(Debug, Clone)]
pub struct HypertreeDecomposition {
    decomposition: TreeDecomposition,
}

impl HypertreeDecomposition {
    /// The hyperedges covering the bag of `id`.
    pub fn edge_cover(&self, id: NodeId) -> &[Hyperedge] {
        self.decomposition
            .label(EDGE_COVER_LABEL, id)
            .and_then(Label::as_edge_cover)
            .unwrap_or_default()
    }

    /// Largest edge cover size over all nodes.
    pub fn hypertree_width(&self) -> usize {
        self.decomposition
            .nodes()
            .map(|id| self.edge_cover(id).len())
            .max()
            .unwrap_or(0)
    }

    pub fn into_inner(self) -> TreeDecomposition {
        self.decomposition
    }
}

impl Deref for HypertreeDecomposition {
    type Target = TreeDecomposition;

    fn deref(&self) -> &TreeDecomposition {
        &self.decomposition
    }
}

/// Computes a tree decomposition with `T`, then covers every bag using `S`.
///
/// ```rust
/// use hypertree_decomposition::prelude::*;
///
/// let graph = Hypergraph::from_edges(4, [vec![1, 2, 3], vec![3, 4], vec![1, 4]]).unwrap();
/// let algorithm = HypertreeDecompositionAlgorithm::new(
///     BucketEliminationAlgorithm::new(NaturalOrdering),
///     GreedySetCover,
/// );
/// let hypertree = algorithm.compute_decomposition(&graph).unwrap();
///
/// assert!(hypertree.is_valid_for(&graph));
/// assert_eq!(hypertree.hypertree_width(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct HypertreeDecompositionAlgorithm<T, S> {
    tree_algorithm: T,
    set_cover: S,
    cancellation: Option<CancellationToken>,
}

impl<T, S> HypertreeDecompositionAlgorithm<T, S>
where
    T: TreeDecompositionAlgorithm,
    S: SetCoverAlgorithm,
{
    pub fn new(tree_algorithm: T, set_cover: S) -> Self {
        HypertreeDecompositionAlgorithm {
            tree_algorithm,
            set_cover,
            cancellation: None,
        }
    }

    /// Poll `token` once per node during refinement.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn compute_decomposition(&self, graph: &dyn HypergraphView) -> Result<HypertreeDecomposition> {
        let decomposition = self.tree_algorithm.compute_decomposition(graph)?;
        Ok(self.refine(decomposition, graph)?)
    }

    /// As [`Self::compute_decomposition`], then run each labeling function over every node in
    /// order. Functions are handed both the bag and its edge cover.
    pub fn compute_decomposition_with_labels(
        &self,
        graph: &dyn HypergraphView,
        labeling_functions: &[&dyn LabelingFunction],
    ) -> Result<HypertreeDecomposition> {
        label::check_names(labeling_functions, &[EDGE_COVER_LABEL])?;
        let mut hypertree = self.compute_decomposition(graph)?;

        let nodes: Vec<NodeId> = hypertree.nodes().collect();
        for function in labeling_functions {
            let labels = {
                let hypertree = &hypertree;
                tree::map_nodes(&nodes, |id| {
                    function.compute_hypertree_label(hypertree.bag(id), hypertree.edge_cover(id))
                })
            };
            for (&id, label) in nodes.iter().zip(labels) {
                hypertree.decomposition.set_label(function.name(), id, label);
            }
        }
        Ok(hypertree)
    }

    /// Attach an edge cover to every node of `decomposition`.
    ///
    /// Each bag is offered only the hyperedges incident to its vertices, in hypergraph order.
    /// Covers are computed for all nodes before any is written, so on failure the decomposition
    /// comes back unchanged inside the error. The failure reported is that of the first node in
    /// id order.
    pub fn refine(
        &self,
        mut decomposition: TreeDecomposition,
        graph: &dyn HypergraphView,
    ) -> std::result::Result<HypertreeDecomposition, RefinementError> {
        let edges = graph.hyperedges();
        let incidence = incidence(edges, graph.vertex_count());
        let nodes: Vec<NodeId> = decomposition.nodes().collect();

        let covers = {
            let decomposition = &decomposition;
            let incidence = &incidence;
            tree::map_nodes(&nodes, |id| -> Result<Vec<Hyperedge>> {
                cancel::poll(self.cancellation.as_ref())?;
                let bag = decomposition.bag(id);
                let available: Vec<Hyperedge> = bag
                    .iter()
                    .filter_map(|v| v.0.checked_sub(FIRST_VERTEX))
                    .filter_map(|i| incidence.get(i))
                    .fold(Vec::new(), |acc, incident| sorted::union(&acc, incident))
                    .into_iter()
                    .map(|e| edges[e].clone())
                    .collect();

                let cover = self.set_cover.compute_set_cover(bag, &available)?;
                match first_uncovered(bag, &cover) {
                    Some(vertex) => Err(SetCoverError::Incomplete { vertex }.into()),
                    None => Ok(cover),
                }
            })
        };

        let covers: Vec<Vec<Hyperedge>> = match covers.into_iter().collect::<Result<Vec<_>>>() {
            Ok(covers) => covers,
            Err(error) => {
                debug!(%error, "hypertree refinement failed");
                return Err(RefinementError {
                    error,
                    decomposition,
                });
            }
        };

        for (&id, cover) in nodes.iter().zip(covers) {
            decomposition.set_label(EDGE_COVER_LABEL, id, Label::EdgeCover(cover));
        }
        let hypertree = HypertreeDecomposition { decomposition };
        debug!(
            nodes = hypertree.node_count(),
            width = hypertree.width(),
            hypertree_width = hypertree.hypertree_width(),
            "hypertree decomposition complete"
        );
        Ok(hypertree)
    }
}

/// For every vertex slot, the indices of the hyperedges containing it, ascending.
fn incidence(edges: &[Hyperedge], vertex_count: usize) -> Vec<Vec<usize>> {
    let mut incidence = vec![Vec::new(); vertex_count];
    for (e, edge) in edges.iter().enumerate() {
        for v in edge.sorted_vertices() {
            if let Some(incident) = v
                .0
                .checked_sub(FIRST_VERTEX)
                .and_then(|i| incidence.get_mut(i))
            {
                incident.push(e);
            }
        }
    }
    incidence
}

impl From<HypertreeDecomposition> for TreeDecomposition {
    fn from(hypertree: HypertreeDecomposition) -> Self {
        hypertree.into_inner()
    }
}
