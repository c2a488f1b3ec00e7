//! Named node labels and caller-supplied labeling functions.
use crate::error::{DecompositionError, Result};
use crate::hypergraph::{Hyperedge, Vertex};

use core::any::Any;
use core::fmt;
use core::iter;
use std::collections::HashSet;
use std::sync::Arc;

/// Name under which every decomposition node exposes its bag, as [`Label::Vertices`].
pub const BAG_LABEL: &str = "bag";

/// Name under which hypertree refinement stores each node's edge cover.
pub const EDGE_COVER_LABEL: &str = "edge_cover";

/// A value attached to a decomposition node under some name.
#[derive(Clone)]
pub enum Label {
    Vertices(Vec<Vertex>),
    EdgeCover(Vec<Hyperedge>),
    /// Anything else a labeling function wants to attach. Read it back with
    /// [`Label::downcast_custom`].
    Custom(Arc<dyn Any + Send + Sync>),
}

impl Label {
    pub fn custom<T: Any + Send + Sync>(value: T) -> Self {
        Label::Custom(Arc::new(value))
    }

    pub fn as_vertices(&self) -> Option<&[Vertex]> {
        match self {
            Label::Vertices(vertices) => Some(vertices),
            _ => None,
        }
    }

    pub fn as_edge_cover(&self) -> Option<&[Hyperedge]> {
        match self {
            Label::EdgeCover(edges) => Some(edges),
            _ => None,
        }
    }

    /// The custom payload, if this is a [`Label::Custom`] holding a `T`.
    pub fn downcast_custom<T: Any>(&self) -> Option<&T> {
        match self {
            Label::Custom(value) => value.downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Vertices(vertices) => f.debug_tuple("Vertices").field(vertices).finish(),
            Label::EdgeCover(edges) => f.debug_tuple("EdgeCover").field(edges).finish(),
            Label::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Computes a label for every node of a finished decomposition from the node's bag.
///
/// Functions run in the order the caller lists them and never see each other's output.
pub trait LabelingFunction: Send + Sync {
    /// Key under which the label is stored. Must be unique within one call.
    fn name(&self) -> &str;

    fn compute_label(&self, bag: &[Vertex]) -> Label;

    /// Label for a node of a hypertree decomposition, which also knows the node's edge cover.
    /// Defaults to [`LabelingFunction::compute_label`].
    fn compute_hypertree_label(&self, bag: &[Vertex], edge_cover: &[Hyperedge]) -> Label {
        let _ = edge_cover;
        self.compute_label(bag)
    }
}

/// A [`LabelingFunction`] built from a name and a closure.
pub struct FnLabeling<F> {
    name: String,
    f: F,
}

/// Wrap a closure as a [`LabelingFunction`].
///
/// ```rust
/// use hypertree_decomposition::label::{labeling_fn, Label, LabelingFunction};
/// use hypertree_decomposition::hypergraph::Vertex;
///
/// let size = labeling_fn("size", |bag| Label::custom(bag.len()));
/// let label = size.compute_label(&[Vertex(1), Vertex(4)]);
/// assert_eq!(label.downcast_custom::<usize>(), Some(&2));
/// ```
pub fn labeling_fn<F>(name: impl Into<String>, f: F) -> FnLabeling<F>
where
    F: Fn(&[Vertex]) -> Label + Send + Sync,
{
    FnLabeling {
        name: name.into(),
        f,
    }
}

impl<F> LabelingFunction for FnLabeling<F>
where
    F: Fn(&[Vertex]) -> Label + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn compute_label(&self, bag: &[Vertex]) -> Label {
        (self.f)(bag)
    }
}

/// Reject duplicate names, and names colliding with [`BAG_LABEL`] or the `reserved` ones.
pub(crate) fn check_names(functions: &[&dyn LabelingFunction], reserved: &[&str]) -> Result<()> {
    let mut seen: HashSet<&str> = iter::once(BAG_LABEL)
        .chain(reserved.iter().copied())
        .collect();
    for function in functions {
        if !seen.insert(function.name()) {
            return Err(DecompositionError::DuplicateLabelName(
                function.name().to_string(),
            ));
        }
    }
    Ok(())
}
