//! Bucket-elimination tree decompositions.
use crate::bucket::{self, Buckets};
use crate::cancel;
use crate::compress::compress;
use crate::config::DecompositionConfig;
use crate::connect::connect;
use crate::error::Result;
use crate::hypergraph::HypergraphView;
use crate::label::{self, LabelingFunction};
use crate::materialize::materialize;
use crate::ordering::{EliminationOrdering, OrderingAlgorithm};
use crate::tree::{self, NodeId, TreeDecomposition};

use tracing::debug;

/// Computes tree decompositions of hypergraphs.
pub trait TreeDecompositionAlgorithm: Send + Sync {
    fn compute_decomposition(&self, graph: &dyn HypergraphView) -> Result<TreeDecomposition>;

    /// Compute a decomposition, then run each labeling function over every node, in order.
    fn compute_decomposition_with_labels(
        &self,
        graph: &dyn HypergraphView,
        labeling_functions: &[&dyn LabelingFunction],
    ) -> Result<TreeDecomposition> {
        label::check_names(labeling_functions, &[])?;
        let mut decomposition = self.compute_decomposition(graph)?;
        apply_labeling_functions(&mut decomposition, labeling_functions);
        Ok(decomposition)
    }
}

/// Tree decompositions by bucket elimination along an elimination ordering.
///
/// ```rust
/// use hypertree_decomposition::prelude::*;
///
/// let graph = Hypergraph::from_edges(3, [vec![1, 2], vec![2, 3]]).unwrap();
/// let algorithm = BucketEliminationAlgorithm::new(NaturalOrdering);
/// let decomposition = algorithm.compute_decomposition(&graph).unwrap();
///
/// assert_eq!(decomposition.node_count(), 2);
/// assert_eq!(decomposition.width(), 1);
/// assert!(decomposition.is_valid_for(&graph));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BucketEliminationAlgorithm<O> {
    ordering: O,
    config: DecompositionConfig,
}

impl<O: OrderingAlgorithm> BucketEliminationAlgorithm<O> {
    pub fn new(ordering: O) -> Self {
        Self::with_config(ordering, DecompositionConfig::default())
    }

    pub fn with_config(ordering: O, config: DecompositionConfig) -> Self {
        BucketEliminationAlgorithm { ordering, config }
    }

    pub fn config(&self) -> &DecompositionConfig {
        &self.config
    }

    /// The decomposition before compression: one node per vertex.
    pub fn compute_uncompressed(&self, graph: &dyn HypergraphView) -> Result<TreeDecomposition> {
        let n = graph.vertex_count();
        if n == 0 {
            for edge in graph.hyperedges() {
                bucket::check_hyperedge(edge, n)?;
            }
            let mut decomposition = TreeDecomposition::new();
            decomposition.insert_root(Vec::new());
            return Ok(decomposition);
        }

        let ordering = EliminationOrdering::compute(&self.ordering, graph)?;
        let mut buckets = Buckets::build(graph, &ordering)?;
        let connection = connect(&mut buckets, &ordering, self.config.cancellation.as_ref())?;

        Ok(materialize(
            connection.root,
            &connection.neighbors,
            buckets.into_contents(),
        ))
    }
}

impl<O: OrderingAlgorithm> TreeDecompositionAlgorithm for BucketEliminationAlgorithm<O> {
    #[tracing::instrument(
        name = "bucket_elimination",
        skip_all,
        fields(vertices = graph.vertex_count(), hyperedges = graph.hyperedge_count())
    )]
    fn compute_decomposition(&self, graph: &dyn HypergraphView) -> Result<TreeDecomposition> {
        let mut decomposition = self.compute_uncompressed(graph)?;
        if self.config.compress {
            compress(&mut decomposition);
        }
        cancel::poll(self.config.cancellation.as_ref())?;

        debug!(
            nodes = decomposition.node_count(),
            width = decomposition.width(),
            "tree decomposition complete"
        );
        Ok(decomposition)
    }
}

/// Store the output of every labeling function on every node, under the function's name.
pub(crate) fn apply_labeling_functions(
    decomposition: &mut TreeDecomposition,
    labeling_functions: &[&dyn LabelingFunction],
) {
    let nodes: Vec<NodeId> = decomposition.nodes().collect();
    for function in labeling_functions {
        let labels = {
            let decomposition = &*decomposition;
            tree::map_nodes(&nodes, |id| function.compute_label(decomposition.bag(id)))
        };
        for (&id, label) in nodes.iter().zip(labels) {
            decomposition.set_label(function.name(), id, label);
        }
    }
}
