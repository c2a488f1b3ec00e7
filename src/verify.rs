//! Checking that a tree really is a tree decomposition of a hypergraph.
use crate::hypergraph::{EdgeId, HypergraphView, Vertex, FIRST_VERTEX};
use crate::sorted;
use crate::tree::TreeDecomposition;

/// A way in which a tree fails to decompose a hypergraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// No bag contains every vertex of this hyperedge.
    UncoveredHyperedge(EdgeId),
    /// The vertex occurs in no bag.
    MissingVertex(Vertex),
    /// The nodes whose bags contain this vertex do not form a connected subtree.
    DisconnectedOccurrences(Vertex),
}

/// All coverage and running-intersection violations of `tree` with respect to `graph`.
///
/// Running intersection is checked by counting, for each vertex, the nodes containing it and
/// the parent/child pairs that both contain it: occurrences in a tree are connected exactly
/// when there is one more node than pair.
pub fn check(tree: &TreeDecomposition, graph: &dyn HypergraphView) -> Vec<Violation> {
    let mut violations = Vec::new();

    for edge in graph.hyperedges() {
        let vertices = edge.sorted_vertices();
        if !tree
            .nodes()
            .any(|id| sorted::is_subset(&vertices, tree.bag(id)))
        {
            violations.push(Violation::UncoveredHyperedge(edge.id));
        }
    }

    let n = graph.vertex_count();
    let mut occurrences = vec![0usize; n];
    let mut shared_links = vec![0usize; n];
    let in_range = |v: &&Vertex| v.0 >= FIRST_VERTEX && v.0 <= n;
    for id in tree.nodes() {
        let bag = tree.bag(id);
        for v in bag.iter().filter(in_range) {
            occurrences[v.index()] += 1;
        }
        if let Some(parent) = tree.parent(id) {
            let parent_bag = tree.bag(parent);
            for v in bag.iter().filter(in_range) {
                if parent_bag.binary_search(v).is_ok() {
                    shared_links[v.index()] += 1;
                }
            }
        }
    }

    for i in 0..n {
        let vertex = Vertex::from_index(i);
        if occurrences[i] == 0 {
            violations.push(Violation::MissingVertex(vertex));
        } else if occurrences[i] != shared_links[i] + 1 {
            violations.push(Violation::DisconnectedOccurrences(vertex));
        }
    }

    violations
}
