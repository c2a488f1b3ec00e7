pub mod test_hypergraph;
