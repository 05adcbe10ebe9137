use super::*;

fn n(v: u64) -> NodeId {
    NodeId(v)
}

#[test]
fn children_keep_insertion_order() {
    let g = GraphStore::from_edges([(n(0), n(2)), (n(0), n(1)), (n(2), n(3))]);
    let targets: Vec<_> = g.children(n(0)).iter().map(|e| e.target).collect();
    assert_eq!(targets, vec![n(2), n(1)]);
    assert!(g.children(n(0)).iter().all(|e| !e.is_visited()));
    assert!(g.children(n(42)).is_empty());
    assert_eq!(g.edge_count(), 3);
}

#[test]
fn mark_visited_is_monotonic() {
    let mut g = GraphStore::from_edges([(n(0), n(1)), (n(0), n(2))]);
    g.mark_visited(n(0), 1).unwrap();
    assert_eq!(g.children(n(0))[1].state, EdgeState::Visited);
    assert_eq!(g.children(n(0))[0].state, EdgeState::Unvisited);
    g.mark_visited(n(0), 1).unwrap();
    assert_eq!(g.visited_count(), 1);
}

#[test]
fn mark_visited_out_of_range_is_a_precondition_error() {
    let mut g = GraphStore::from_edges([(n(0), n(1))]);
    let err = g.mark_visited(n(0), 1).unwrap_err();
    assert!(matches!(err, TreeframesError::Precondition(_)));
    let err = g.mark_visited(n(5), 0).unwrap_err();
    assert!(matches!(err, TreeframesError::Precondition(_)));
    assert_eq!(g.visited_count(), 0);
}

#[test]
fn validate_tree_accepts_trees_and_rejects_shared_children_and_cycles() {
    let tree = GraphStore::from_edges([(n(0), n(1)), (n(0), n(2)), (n(1), n(3))]);
    tree.validate_tree(n(0)).unwrap();

    let shared = GraphStore::from_edges([(n(0), n(1)), (n(0), n(2)), (n(1), n(3)), (n(2), n(3))]);
    assert!(matches!(
        shared.validate_tree(n(0)),
        Err(TreeframesError::MalformedGraph(_))
    ));

    let cycle = GraphStore::from_edges([(n(0), n(1)), (n(1), n(0))]);
    assert!(matches!(
        cycle.validate_tree(n(0)),
        Err(TreeframesError::MalformedGraph(_))
    ));

    let self_loop = GraphStore::from_edges([(n(0), n(0))]);
    assert!(self_loop.validate_tree(n(0)).is_err());
}

#[test]
fn reaches_follows_edges_only_downwards() {
    let g = GraphStore::from_edges([(n(0), n(1)), (n(1), n(3)), (n(7), n(8))]);
    assert!(g.reaches(n(0), n(3)));
    assert!(g.reaches(n(0), n(0)));
    assert!(!g.reaches(n(1), n(0)));
    assert!(!g.reaches(n(0), n(8)));
}
