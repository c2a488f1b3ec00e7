use hypertree_decomposition::prelude::*;

use crate::init_tracing;

fn vs(raw: &[usize]) -> Vec<Vertex> {
    raw.iter().copied().map(Vertex).collect()
}

/// Bags in pre-order, each paired with its depth.
fn shape(t: &TreeDecomposition) -> Vec<(usize, Vec<Vertex>)> {
    t.preorder().map(|(id, depth)| (depth, t.bag(id).to_vec())).collect()
}

fn decompose(h: &Hypergraph, ordering: &[usize]) -> TreeDecomposition {
    BucketEliminationAlgorithm::new(FixedOrdering::from_raw(ordering.iter().copied()))
        .compute_decomposition(h)
        .unwrap()
}

#[test]
fn test_path_of_two_edges() {
    init_tracing();
    let h = Hypergraph::from_edges(3, [vec![1, 2], vec![2, 3]]).unwrap();
    let t = decompose(&h, &[1, 2, 3]);

    assert_eq!(shape(&t), vec![(0, vs(&[1, 2])), (1, vs(&[2, 3]))]);
    assert_eq!(t.width(), 1);
    assert!(t.is_valid_for(&h));
}

#[test]
fn test_uncompressed_tree_has_one_node_per_vertex() {
    let h = Hypergraph::from_edges(3, [vec![1, 2], vec![2, 3]]).unwrap();
    let algorithm = BucketEliminationAlgorithm::with_config(
        NaturalOrdering,
        DecompositionConfig::default().with_compression(false),
    );
    let t = algorithm.compute_decomposition(&h).unwrap();

    assert_eq!(
        shape(&t),
        vec![(0, vs(&[1, 2])), (1, vs(&[2, 3])), (2, vs(&[3]))]
    );
    assert!(t.is_valid_for(&h));
}

#[test]
fn test_disconnected_components_are_joined() {
    init_tracing();
    let h = Hypergraph::from_edges(4, [vec![1, 2], vec![3, 4]]).unwrap();
    let t = decompose(&h, &[1, 2, 3, 4]);

    assert_eq!(shape(&t), vec![(0, vs(&[1, 2])), (1, vs(&[3, 4]))]);
    assert!(t.is_valid_for(&h));
}

#[test]
fn test_every_component_is_attached() {
    // Ordering [1, 3, 2, 4, 5, 6]: 1 and 3 both link to 2; {4, 5} and {6} are joined later.
    let h = Hypergraph::from_edges(6, [vec![1, 2], vec![2, 3], vec![4, 5]]).unwrap();
    let t = decompose(&h, &[1, 3, 2, 4, 5, 6]);

    assert!(t.is_valid_for(&h));
    assert_eq!(t.preorder().count(), t.node_count());
    assert_eq!(t.width(), 1);
}

#[test]
fn test_isolated_vertices_get_their_own_node() {
    let h = Hypergraph::from_edges(3, [vec![1, 2]]).unwrap();
    let t = decompose(&h, &[1, 2, 3]);

    assert_eq!(shape(&t), vec![(0, vs(&[1, 2])), (1, vs(&[3]))]);
    assert!(t.is_valid_for(&h));
}

#[test]
fn test_hypergraph_without_edges() {
    let h = Hypergraph::discrete(3);
    let t = decompose(&h, &[2, 3, 1]);

    assert_eq!(t.node_count(), 3);
    assert_eq!(t.width(), 0);
    assert!(t.is_valid_for(&h));
}

#[test]
fn test_zero_vertices_give_a_single_empty_root() {
    let h = Hypergraph::empty();
    let t = BucketEliminationAlgorithm::new(NaturalOrdering)
        .compute_decomposition(&h)
        .unwrap();

    let root = t.root().unwrap();
    assert_eq!(t.node_count(), 1);
    assert!(t.bag(root).is_empty());
    assert!(t.children(root).is_empty());
    assert_eq!(t.parent(root), None);
    assert_eq!(t.width(), 0);
}

#[test]
fn test_width_depends_on_the_ordering() {
    // A star: eliminating the centre first puts every vertex into one bag.
    let h = Hypergraph::from_edges(4, [vec![1, 2], vec![1, 3], vec![1, 4]]).unwrap();

    let centre_first = decompose(&h, &[1, 2, 3, 4]);
    assert_eq!(centre_first.width(), 3);
    assert_eq!(centre_first.node_count(), 1);

    let centre_last = decompose(&h, &[2, 3, 4, 1]);
    assert_eq!(centre_last.width(), 1);
    assert_eq!(
        shape(&centre_last),
        vec![(0, vs(&[1, 2])), (1, vs(&[1, 3])), (1, vs(&[1, 4]))]
    );

    assert!(centre_first.is_valid_for(&h));
    assert!(centre_last.is_valid_for(&h));
}

#[test]
fn test_large_hyperedge_is_a_single_bag() {
    let h = Hypergraph::from_edges(5, [vec![5, 3, 1, 2, 4]]).unwrap();
    let t = decompose(&h, &[4, 2, 5, 1, 3]);
    assert_eq!(shape(&t), vec![(0, vs(&[1, 2, 3, 4, 5]))]);
}

#[test]
fn test_output_is_deterministic() {
    let h = Hypergraph::from_edges(6, [vec![1, 4], vec![2, 4, 5], vec![3, 6], vec![5, 6]]).unwrap();
    let a = decompose(&h, &[6, 1, 5, 2, 4, 3]);
    let b = decompose(&h, &[6, 1, 5, 2, 4, 3]);
    assert_eq!(shape(&a), shape(&b));
}

#[test]
fn test_long_path_does_not_overflow_the_stack() {
    let n = 20_000;
    let h = Hypergraph::from_edges(n, (1..n).map(|i| vec![i, i + 1])).unwrap();
    let t = BucketEliminationAlgorithm::new(NaturalOrdering)
        .compute_decomposition(&h)
        .unwrap();

    assert_eq!(t.node_count(), n - 1);
    assert_eq!(t.width(), 1);
    assert_eq!(t.preorder().map(|(_, depth)| depth).max(), Some(n - 2));
}
