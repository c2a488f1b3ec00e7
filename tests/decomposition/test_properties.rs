use hypertree_decomposition::compress::compress;
use hypertree_decomposition::prelude::*;

use proptest::prelude::*;
use proptest::proptest;

use crate::hypergraph::strategy::{arb_hypergraph_with_ordering, arb_hypergraph_with_two_orderings};

fn algorithm(ordering: Vec<Vertex>, compress: bool) -> BucketEliminationAlgorithm<FixedOrdering> {
    BucketEliminationAlgorithm::with_config(
        FixedOrdering(ordering),
        DecompositionConfig::default().with_compression(compress),
    )
}

fn bags(t: &TreeDecomposition) -> Vec<(usize, Vec<Vertex>)> {
    t.preorder().map(|(id, depth)| (depth, t.bag(id).to_vec())).collect()
}

proptest! {
    #[test]
    fn test_uncompressed_decomposition_is_valid((h, ordering) in arb_hypergraph_with_ordering(12, 12)) {
        let t = algorithm(ordering, false).compute_decomposition(&h).unwrap();

        prop_assert_eq!(t.node_count(), h.vertex_count());
        prop_assert_eq!(t.preorder().count(), t.node_count());
        prop_assert_eq!(t.violations(&h), Vec::<Violation>::new());
    }

    #[test]
    fn test_compressed_decomposition_is_valid((h, ordering) in arb_hypergraph_with_ordering(12, 12)) {
        let t = algorithm(ordering, true).compute_decomposition(&h).unwrap();

        prop_assert!(t.node_count() >= 1);
        prop_assert!(t.node_count() <= h.vertex_count());
        prop_assert_eq!(t.preorder().count(), t.node_count());
        prop_assert_eq!(t.violations(&h), Vec::<Violation>::new());
    }

    #[test]
    fn test_compression_preserves_width((h, ordering) in arb_hypergraph_with_ordering(12, 12)) {
        let full = algorithm(ordering.clone(), false).compute_decomposition(&h).unwrap();
        let compressed = algorithm(ordering, true).compute_decomposition(&h).unwrap();
        prop_assert_eq!(full.width(), compressed.width());
    }

    #[test]
    fn test_compression_is_idempotent((h, ordering) in arb_hypergraph_with_ordering(12, 12)) {
        let mut t = algorithm(ordering, true).compute_decomposition(&h).unwrap();
        let before = bags(&t);

        prop_assert_eq!(compress(&mut t), 0);
        prop_assert_eq!(bags(&t), before);
    }

    #[test]
    fn test_every_ordering_gives_a_valid_decomposition(
        (h, first, second) in arb_hypergraph_with_two_orderings(10, 10)
    ) {
        // The widths may differ; validity may not.
        for ordering in [first, second] {
            let t = algorithm(ordering, true).compute_decomposition(&h).unwrap();
            prop_assert!(t.is_valid_for(&h));
            prop_assert!(t.width() < h.vertex_count());
        }
    }

    #[test]
    fn test_every_hyperedge_bounds_the_width((h, ordering) in arb_hypergraph_with_ordering(12, 12)) {
        let t = algorithm(ordering, true).compute_decomposition(&h).unwrap();
        let largest = h.hyperedges().iter().map(Hyperedge::len).max().unwrap_or(1);
        prop_assert!(t.width() + 1 >= largest);
    }
}
