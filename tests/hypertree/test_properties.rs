use hypertree_decomposition::prelude::*;
use hypertree_decomposition::sorted;

use proptest::prelude::*;
use proptest::proptest;

use crate::hypergraph::strategy::arb_hypergraph_with_ordering;

fn covered_vertices(cover: &[Hyperedge]) -> Vec<Vertex> {
    cover
        .iter()
        .fold(Vec::new(), |acc, e| sorted::union(&acc, &e.sorted_vertices()))
}

proptest! {
    #[test]
    fn test_covers_are_complete_and_minimal((h, ordering) in arb_hypergraph_with_ordering(10, 12)) {
        let algorithm = HypertreeDecompositionAlgorithm::new(
            BucketEliminationAlgorithm::new(FixedOrdering(ordering)),
            GreedySetCover,
        );
        let isolated = h
            .vertices()
            .into_iter()
            .find(|&v| !h.hyperedges().iter().any(|e| e.contains(v)));

        match (algorithm.compute_decomposition(&h), isolated) {
            (Ok(hd), None) => {
                prop_assert!(hd.is_valid_for(&h));
                for id in hd.nodes() {
                    let cover = hd.edge_cover(id);
                    prop_assert!(sorted::is_subset(hd.bag(id), &covered_vertices(cover)));

                    // dropping any edge uncovers something
                    for skip in 0..cover.len() {
                        let rest: Vec<Hyperedge> = cover
                            .iter()
                            .enumerate()
                            .filter(|&(i, _)| i != skip)
                            .map(|(_, e)| e.clone())
                            .collect();
                        prop_assert!(!sorted::is_subset(hd.bag(id), &covered_vertices(&rest)));
                    }
                }
                prop_assert!(hd.hypertree_width() <= hd.width() + 1);
            }
            (Err(DecompositionError::Refinement(refinement)), Some(_)) => {
                let is_uncoverable = matches!(
                    refinement.error,
                    DecompositionError::SetCover(SetCoverError::Uncoverable { .. })
                );
                prop_assert!(is_uncoverable);
                prop_assert!(refinement.decomposition.is_valid_for(&h));
            }
            (result, isolated) => {
                prop_assert!(false, "unexpected {:?} with isolated vertex {:?}", result.err(), isolated);
            }
        }
    }
}
