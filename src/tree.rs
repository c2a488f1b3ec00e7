//! The rooted, bag-labeled decomposition tree.
//!
//! Nodes live in an arena indexed by [`NodeId`]. Removing a node leaves a hole, so the ids of
//! surviving nodes never change.
use crate::hypergraph::{HypergraphView, Vertex};
use crate::label::{Label, BAG_LABEL};
use crate::verify::{self, Violation};

use core::fmt;
use core::iter;
use std::collections::BTreeMap;

/// A node of a [`TreeDecomposition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct TreeNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    // always `Label::Vertices`
    bag: Label,
    labels: BTreeMap<String, Label>,
}

/// A rooted tree whose nodes each carry a bag and any number of named labels.
///
/// The bag is itself a label: [`TreeDecomposition::label`] returns it as
/// [`Label::Vertices`] under [`BAG_LABEL`]. It is fixed when the node is created.
///
/// # Panics
///
/// Accessors taking a [`NodeId`] panic when the node does not exist (or was removed), in the
/// same way slice indexing does.
#[derive(Debug, Clone, Default)]
pub struct TreeDecomposition {
    nodes: Vec<Option<TreeNode>>,
    root: Option<NodeId>,
    len: usize,
}

impl TreeDecomposition {
    /// The empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new root with the given bag. An existing root becomes its only child.
    pub fn insert_root(&mut self, bag: Vec<Vertex>) -> NodeId {
        let old_root = self.root;
        let id = self.push(TreeNode {
            parent: None,
            children: old_root.into_iter().collect(),
            bag: Label::Vertices(bag),
            labels: BTreeMap::new(),
        });
        if let Some(old_root) = old_root {
            self.node_mut(old_root).parent = Some(id);
        }
        self.root = Some(id);
        id
    }

    /// Append a child with the given bag to `parent`.
    pub fn add_child(&mut self, parent: NodeId, bag: Vec<Vertex>) -> NodeId {
        let id = self.push(TreeNode {
            parent: Some(parent),
            children: Vec::new(),
            bag: Label::Vertices(bag),
            labels: BTreeMap::new(),
        });
        self.node_mut(parent).children.push(id);
        id
    }

    fn push(&mut self, node: TreeNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(node));
        self.len += 1;
        id
    }

    fn node(&self, id: NodeId) -> &TreeNode {
        match self.nodes.get(id.0) {
            Some(Some(node)) => node,
            _ => panic!("unknown decomposition node {id}"),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut TreeNode {
        match self.nodes.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => panic!("unknown decomposition node {id}"),
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn contains(&self, id: NodeId) -> bool {
        matches!(self.nodes.get(id.0), Some(Some(_)))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// The bag of `id`: sorted, duplicate-free.
    pub fn bag(&self, id: NodeId) -> &[Vertex] {
        self.node(id).bag.as_vertices().unwrap_or_default()
    }

    /// The label stored under `name`, if any. [`BAG_LABEL`] always yields the bag.
    pub fn label(&self, name: &str, id: NodeId) -> Option<&Label> {
        let node = self.node(id);
        if name == BAG_LABEL {
            Some(&node.bag)
        } else {
            node.labels.get(name)
        }
    }

    /// Store `label` under `name`, returning the label it replaced.
    ///
    /// The bag cannot be replaced: a label offered under [`BAG_LABEL`] is handed straight back
    /// and nothing is stored.
    pub fn set_label(&mut self, name: impl Into<String>, id: NodeId, label: Label) -> Option<Label> {
        let name = name.into();
        if name == BAG_LABEL {
            return Some(label);
        }
        self.node_mut(id).labels.insert(name, label)
    }

    /// Remove the label stored under `name`. The bag is never removed.
    pub fn remove_label(&mut self, name: &str, id: NodeId) -> Option<Label> {
        self.node_mut(id).labels.remove(name)
    }

    /// All labels of `id`: the bag first, then the others ordered by name.
    pub fn labels(&self, id: NodeId) -> impl Iterator<Item = (&str, &Label)> {
        let node = self.node(id);
        iter::once((BAG_LABEL, &node.bag))
            .chain(node.labels.iter().map(|(k, v)| (k.as_str(), v)))
    }

    pub fn node_count(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Live nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_some())
            .map(|(i, _)| NodeId(i))
    }

    /// Number of arena slots, including removed nodes. Every live id is below this.
    pub(crate) fn slot_count(&self) -> usize {
        self.nodes.len()
    }

    /// Lazy pre-order traversal yielding `(node, depth)`, the root at depth 0.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: self.root.map(|root| (root, 0)).into_iter().collect(),
        }
    }

    /// Largest bag size minus one; 0 for a tree of empty or singleton bags.
    pub fn width(&self) -> usize {
        self.nodes()
            .map(|id| self.bag(id).len())
            .max()
            .unwrap_or(0)
            .saturating_sub(1)
    }

    /// Remove `id`, keeping the tree connected.
    ///
    /// A leaf is simply deleted. Otherwise the first child takes the removed node's place
    /// (same parent, same position among siblings, or the root), and the remaining children
    /// are re-hung under that first child. The only node of a tree is never removed.
    ///
    /// Returns `false` if nothing was removed.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        if !self.contains(id) || self.len == 1 {
            return false;
        }
        let Some(TreeNode {
            parent,
            mut children,
            ..
        }) = self.nodes[id.0].take()
        else {
            return false;
        };
        self.len -= 1;

        if children.is_empty() {
            if let Some(parent) = parent {
                self.node_mut(parent).children.retain(|&c| c != id);
            }
            return true;
        }

        let heir = children.remove(0);
        for &child in &children {
            self.node_mut(child).parent = Some(heir);
        }
        let heir_node = self.node_mut(heir);
        heir_node.parent = parent;
        heir_node.children.extend(children);

        match parent {
            Some(parent) => {
                if let Some(slot) = self
                    .node_mut(parent)
                    .children
                    .iter_mut()
                    .find(|c| **c == id)
                {
                    *slot = heir;
                }
            }
            None => self.root = Some(heir),
        }
        true
    }

    /// Coverage and running-intersection violations with respect to `graph`.
    pub fn violations(&self, graph: &dyn HypergraphView) -> Vec<Violation> {
        verify::check(self, graph)
    }

    /// `true` if this is a valid tree decomposition of `graph`.
    pub fn is_valid_for(&self, graph: &dyn HypergraphView) -> bool {
        self.violations(graph).is_empty()
    }
}

/// Pre-order iterator over a [`TreeDecomposition`]; see [`TreeDecomposition::preorder`].
pub struct Preorder<'a> {
    tree: &'a TreeDecomposition,
    stack: Vec<(NodeId, usize)>,
}

impl Iterator for Preorder<'_> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        self.stack.extend(
            self.tree
                .children(id)
                .iter()
                .rev()
                .map(|&child| (child, depth + 1)),
        );
        Some((id, depth))
    }
}

/// Evaluate `f` for every node, in the order given.
///
/// With the `parallel` feature the calls run on rayon's pool; results still come back in
/// `nodes` order.
pub(crate) fn map_nodes<T, F>(nodes: &[NodeId], f: F) -> Vec<T>
where
    T: Send,
    F: Fn(NodeId) -> T + Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        nodes.par_iter().map(|&id| f(id)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        nodes.iter().map(|&id| f(id)).collect()
    }
}
