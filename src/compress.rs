//! Removing redundant nodes from a tree decomposition.
//!
//! A node is redundant when its bag is contained in a neighboring bag: deleting it and letting
//! that neighbor take its place keeps every hyperedge covered and every vertex's occurrences
//! connected.
use crate::sorted::is_subset;
use crate::tree::{NodeId, TreeDecomposition};

use tracing::{debug, trace};

/// Compress `tree` in place, returning the number of removed nodes.
///
/// Each pass walks the tree in pre-order and compares every node's bag with its parent's:
/// a child contained in its parent is marked, otherwise a parent contained in its child is
/// marked. Marked nodes are then removed:
///
/// - with at most one child, the node is spliced out (its child, if any, takes its place),
///   provided its bag is still contained in its parent's or its only child's bag;
/// - with several children, only if its bag is contained in every child's bag.
///
/// Passes repeat until one removes nothing, so compressing a compressed tree is a no-op.
pub fn compress(tree: &mut TreeDecomposition) -> usize {
    let mut removed = 0;
    loop {
        let mut pass = 0;
        for id in mark(tree) {
            if removable(tree, id) && tree.remove_node(id) {
                pass += 1;
            }
        }
        removed += pass;
        if pass == 0 {
            break;
        }
    }

    debug!(removed, remaining = tree.node_count(), "compressed decomposition");
    removed
}

fn mark(tree: &TreeDecomposition) -> Vec<NodeId> {
    let mut marked = Vec::new();
    let mut is_marked = vec![false; tree.slot_count()];

    for (id, _) in tree.preorder() {
        let Some(parent) = tree.parent(id) else {
            continue;
        };
        let (bag, parent_bag) = (tree.bag(id), tree.bag(parent));

        let candidate = if is_subset(bag, parent_bag) {
            id
        } else if is_subset(parent_bag, bag) {
            parent
        } else {
            continue;
        };

        if !std::mem::replace(&mut is_marked[candidate.0], true) {
            trace!(node = %candidate, "marked redundant");
            marked.push(candidate);
        }
    }

    marked
}

fn removable(tree: &TreeDecomposition, id: NodeId) -> bool {
    if !tree.contains(id) {
        return false;
    }
    let bag = tree.bag(id);
    let within_parent = || {
        tree.parent(id)
            .is_some_and(|parent| is_subset(bag, tree.bag(parent)))
    };

    match tree.children(id) {
        [] => within_parent(),
        [only] => is_subset(bag, tree.bag(*only)) || within_parent(),
        children => children.iter().all(|&child| is_subset(bag, tree.bag(child))),
    }
}
