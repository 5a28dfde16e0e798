//! Tests for the bidirectional network layout.

use super::*;
use crate::DSepError;

#[test]
fn from_adjacency_builds_both_directions() {
    // 0 -> 1, 0 -> 2, 1 -> 2
    let adjacency = vec![
        vec![1, 2], // node 0
        vec![2],    // node 1
        vec![],     // node 2
    ];

    let net = BayesNet::from_adjacency(&adjacency).unwrap();

    assert_eq!(net.node_count(), 3);
    assert_eq!(net.edge_count(), 3);
    assert_eq!(net.children(0), &[1, 2]);
    assert_eq!(net.children(2), &[] as &[usize]);
    assert_eq!(net.parents(0), &[] as &[usize]);
    assert_eq!(net.parents(1), &[0]);
    assert_eq!(net.parents(2), &[0, 1]);
    #[cfg(debug_assertions)]
    assert!(net.validate_invariants());
}

#[test]
fn duplicate_edges_collapse() {
    let adjacency = vec![vec![1, 1, 1], vec![], vec![1, 0, 1]];
    let net = BayesNet::from_adjacency(&adjacency).unwrap();

    assert_eq!(net.edge_count(), 3);
    assert_eq!(net.children(0), &[1]);
    assert_eq!(net.children(2), &[0, 1]);
    assert_eq!(net.parents(1), &[0, 2]);
    assert_eq!(net.out_degree(2), 2);
    assert_eq!(net.in_degree(1), 2);
}

#[test]
fn rows_are_sorted_regardless_of_input_order() {
    let adjacency = vec![vec![3, 1, 2], vec![], vec![], vec![]];
    let net = BayesNet::from_adjacency(&adjacency).unwrap();
    assert_eq!(net.children(0), &[1, 2, 3]);
    assert!(net.has_edge(0, 3));
    assert!(!net.has_edge(3, 0));
}

#[test]
fn out_of_range_target_is_rejected() {
    let adjacency = vec![vec![1], vec![3], vec![]];
    assert_eq!(
        BayesNet::from_adjacency(&adjacency),
        Err(DSepError::IndexOutOfRange {
            index: 3,
            node_count: 3
        })
    );
}

#[test]
fn target_equal_to_node_count_is_rejected() {
    let adjacency = vec![vec![2], vec![]];
    assert!(matches!(
        BayesNet::from_adjacency(&adjacency),
        Err(DSepError::IndexOutOfRange { index: 2, .. })
    ));
}

#[test]
fn empty_graph() {
    let net = BayesNet::from_adjacency(&[]).unwrap();
    assert_eq!(net.node_count(), 0);
    assert_eq!(net.edge_count(), 0);
    assert!(!net.contains(0));
}

#[test]
fn self_loops_are_kept() {
    let adjacency = vec![vec![0, 1], vec![]];
    let net = BayesNet::from_adjacency(&adjacency).unwrap();
    assert_eq!(net.children(0), &[0, 1]);
    assert_eq!(net.parents(0), &[0]);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn children_out_of_bounds_panics() {
    let net = BayesNet::from_adjacency(&[vec![]]).unwrap();
    let _ = net.children(1);
}
