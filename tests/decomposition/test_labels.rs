use hypertree_decomposition::prelude::*;

use std::sync::atomic::{AtomicUsize, Ordering};

fn path() -> Hypergraph {
    Hypergraph::from_edges(4, [vec![1, 2], vec![2, 3], vec![3, 4]]).unwrap()
}

#[test]
fn test_labels_are_stored_under_their_names() {
    let h = path();
    let size = labeling_fn("size", |bag| Label::custom(bag.len()));
    let copy = labeling_fn("copy", |bag| Label::Vertices(bag.to_vec()));

    let t = BucketEliminationAlgorithm::new(NaturalOrdering)
        .compute_decomposition_with_labels(&h, &[&size, &copy])
        .unwrap();

    for id in t.nodes() {
        let label = t.label("size", id).and_then(Label::downcast_custom::<usize>);
        assert_eq!(label, Some(&t.bag(id).len()));
        assert_eq!(
            t.label("copy", id).and_then(Label::as_vertices),
            Some(t.bag(id))
        );
        assert!(t.label("missing", id).is_none());
        assert_eq!(
            t.labels(id).map(|(name, _)| name).collect::<Vec<_>>(),
            vec![BAG_LABEL, "copy", "size"]
        );
    }
}

struct Counting {
    calls: AtomicUsize,
}

impl LabelingFunction for Counting {
    fn name(&self) -> &str {
        "count"
    }

    fn compute_label(&self, bag: &[Vertex]) -> Label {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Label::Vertices(bag.iter().rev().copied().collect())
    }
}

#[test]
fn test_labeling_functions_run_once_per_node() {
    let h = path();
    let counting = Counting {
        calls: AtomicUsize::new(0),
    };

    let t = BucketEliminationAlgorithm::new(NaturalOrdering)
        .compute_decomposition_with_labels(&h, &[&counting])
        .unwrap();

    assert_eq!(counting.calls.load(Ordering::SeqCst), t.node_count());
}

#[test]
fn test_no_labeling_functions_is_plain_decomposition() {
    let h = path();
    let algorithm = BucketEliminationAlgorithm::new(NaturalOrdering);
    let t = algorithm.compute_decomposition_with_labels(&h, &[]).unwrap();
    for id in t.nodes() {
        assert_eq!(t.labels(id).map(|(name, _)| name).collect::<Vec<_>>(), vec![BAG_LABEL]);
    }
    assert_eq!(t.node_count(), algorithm.compute_decomposition(&h).unwrap().node_count());
}

#[test]
fn test_bag_is_read_back_through_label() {
    let h = Hypergraph::from_edges(3, [vec![1, 2], vec![2, 3]]).unwrap();
    let t = BucketEliminationAlgorithm::new(NaturalOrdering)
        .compute_decomposition(&h)
        .unwrap();

    let root = t.root().unwrap();
    assert_eq!(
        t.label(BAG_LABEL, root).and_then(Label::as_vertices),
        Some(&[Vertex(1), Vertex(2)][..])
    );
    for id in t.nodes() {
        assert_eq!(t.label(BAG_LABEL, id).and_then(Label::as_vertices), Some(t.bag(id)));
    }
}

#[test]
fn test_bag_name_is_reserved() {
    let h = path();
    let clash = labeling_fn(BAG_LABEL, |_| Label::custom(()));

    let err = BucketEliminationAlgorithm::new(NaturalOrdering)
        .compute_decomposition_with_labels(&h, &[&clash])
        .unwrap_err();
    assert!(matches!(err, DecompositionError::DuplicateLabelName(name) if name == BAG_LABEL));
}

#[test]
fn test_duplicate_label_names_are_rejected() {
    let h = path();
    let a = labeling_fn("a", |_| Label::custom(()));
    let b = labeling_fn("a", |_| Label::custom(()));

    let err = BucketEliminationAlgorithm::new(NaturalOrdering)
        .compute_decomposition_with_labels(&h, &[&a, &b])
        .unwrap_err();
    assert!(matches!(err, DecompositionError::DuplicateLabelName(name) if name == "a"));
}
