use hypertree_decomposition::prelude::*;

use proptest::proptest;

use super::strategy::{arb_hypergraph, MAX_ARITY};

#[test]
fn test_new_edge_assigns_sequential_ids() {
    let mut h = Hypergraph::discrete(3);
    assert_eq!(h.new_edge(vec![Vertex(1), Vertex(2)]).unwrap(), EdgeId(0));
    assert_eq!(h.new_edge(vec![Vertex(3)]).unwrap(), EdgeId(1));
    assert_eq!(h.hyperedge_count(), 2);
    assert_eq!(h.edge(EdgeId(1)).map(|e| e.vertices.clone()), Some(vec![Vertex(3)]));
}

#[test]
fn test_new_vertex_extends_the_range() {
    let mut h = Hypergraph::empty();
    assert_eq!(h.new_vertex(), Vertex(1));
    assert_eq!(h.new_vertex(), Vertex(2));
    assert_eq!(h.vertices(), vec![Vertex(1), Vertex(2)]);
    assert!(h.new_edge(vec![Vertex(2), Vertex(1)]).is_ok());
}

#[test]
fn test_malformed_edges_are_rejected() {
    let mut h = Hypergraph::discrete(3);

    assert!(matches!(
        h.new_edge(vec![]),
        Err(DecompositionError::MalformedHyperedge(EdgeId(0)))
    ));
    assert!(matches!(
        h.new_edge(vec![Vertex(0)]),
        Err(DecompositionError::VertexOutOfRange { vertex: Vertex(0), vertex_count: 3 })
    ));
    assert!(matches!(
        h.new_edge(vec![Vertex(4)]),
        Err(DecompositionError::VertexOutOfRange { vertex: Vertex(4), .. })
    ));
    assert!(matches!(
        h.new_edge(vec![Vertex(1), Vertex(2), Vertex(1)]),
        Err(DecompositionError::DuplicateVertexInHyperedge { vertex: Vertex(1), .. })
    ));

    // nothing was added
    assert_eq!(h.hyperedge_count(), 0);
}

proptest! {
    #[test]
    fn test_generated_hypergraphs_are_well_formed(h in arb_hypergraph(10, 10)) {
        for edge in h.hyperedges() {
            assert!(!edge.is_empty());
            assert!(edge.len() <= MAX_ARITY);
            assert_eq!(edge.sorted_vertices().len(), edge.len());
            assert!(edge.vertices.iter().all(|v| v.0 >= 1 && v.0 <= h.vertex_count()));
        }
    }
}
