//! Turning the neighbor tree plus buckets into a rooted [`TreeDecomposition`].
use crate::connect::NeighborGraph;
use crate::hypergraph::Vertex;
use crate::tree::{NodeId, TreeDecomposition};

use tracing::debug;

/// Root the neighbor tree at `root` and attach each vertex's bucket as its node's bag.
///
/// The traversal is an explicit-stack pre-order walk, so arbitrarily deep neighbor trees do
/// not exhaust the call stack. Children appear in neighbor insertion order. `bags` is indexed
/// by [`Vertex::index`] and consumed.
pub(crate) fn materialize(root: Vertex, neighbors: &NeighborGraph, bags: Vec<Vec<Vertex>>) -> TreeDecomposition {
    let mut bags: Vec<Option<Vec<Vertex>>> = bags.into_iter().map(Some).collect();
    let mut visited = vec![false; neighbors.vertex_count()];
    let mut tree = TreeDecomposition::new();

    visited[root.index()] = true;
    let root_node = tree.insert_root(take_bag(&mut bags, root));

    // (vertex, index of the next neighbor to look at, decomposition node of vertex)
    let mut stack: Vec<(Vertex, usize, NodeId)> = vec![(root, 0, root_node)];

    while let Some((vertex, next, node)) = stack.pop() {
        let neighborhood = neighbors.neighbors(vertex);
        if next >= neighborhood.len() {
            continue;
        }
        stack.push((vertex, next + 1, node));

        let neighbor = neighborhood[next];
        if !std::mem::replace(&mut visited[neighbor.index()], true) {
            let child = tree.add_child(node, take_bag(&mut bags, neighbor));
            stack.push((neighbor, 0, child));
        }
    }

    debug!(nodes = tree.node_count(), width = tree.width(), "materialized decomposition");
    tree
}

fn take_bag(bags: &mut [Option<Vec<Vertex>>], vertex: Vertex) -> Vec<Vertex> {
    bags.get_mut(vertex.index())
        .and_then(Option::take)
        .unwrap_or_default()
}
