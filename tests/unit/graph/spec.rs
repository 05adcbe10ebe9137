use super::*;

#[test]
fn parses_edge_pairs_in_order() {
    let spec = GraphSpec::from_reader(r#"{ "edges": [[0, 2], [0, 1], [2, 5]] }"#.as_bytes()).unwrap();
    assert_eq!(
        spec.edges,
        vec![
            (NodeId(0), NodeId(2)),
            (NodeId(0), NodeId(1)),
            (NodeId(2), NodeId(5))
        ]
    );
    let g = spec.build();
    assert_eq!(g.children(NodeId(0))[0].target, NodeId(2));
    assert_eq!(g.edge_count(), 3);
}

#[test]
fn rejects_garbage() {
    assert!(GraphSpec::from_reader("{ \"edges\": [[0]] }".as_bytes()).is_err());
    assert!(GraphSpec::from_reader("{ \"nodes\": [] }".as_bytes()).is_err());
}

#[test]
fn demo_tree_is_a_tree() {
    let g = demo_tree();
    assert_eq!(g.edge_count(), 23);
    g.validate_tree(NodeId::ROOT).unwrap();
    let roots: Vec<_> = g.children(NodeId::ROOT).iter().map(|e| e.target).collect();
    assert_eq!(roots, vec![NodeId(1), NodeId(2)]);
}
