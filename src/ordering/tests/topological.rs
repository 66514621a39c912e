use std::collections::{HashMap, HashSet};
use crate::fixtures::{diamond, forward_chain, ids, init_nodes, links};
use crate::ordering::topological_sort;
use crate::types::{Link, NodeId};

/// Asserts every approver comes before what it approves
fn assert_valid_order(order: &[NodeId], links: &[Link]) {
    let rank: HashMap<NodeId, usize> = order.iter().enumerate().map(|(i, id)| (*id, i)).collect();
    for link in links {
        assert!(
            rank[&link.source] < rank[&link.target],
            "link {} is out of order in {:?}", link, order
        );
    }
}

#[test]
fn test_all_vertices_in_disconnected_graph() {
    let nodes = init_nodes(10);

    let ordered = topological_sort(&nodes, &[]);

    assert_eq!(ordered.len(), 10);
    assert_eq!(ordered.iter().collect::<HashSet<_>>().len(), 10);
}

#[test]
fn test_all_vertices_in_chain() {
    let (nodes, links) = forward_chain(10);

    let ordered = topological_sort(&nodes, &links);

    assert_eq!(ordered, ids(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]));
}

#[test]
fn test_genesis_last_in_three_node_graph() {
    let nodes = init_nodes(3);
    let links = links(&[(1, 0), (2, 0)]);

    let ordered = topological_sort(&nodes, &links);

    assert_eq!(ordered.len(), 3);
    assert_eq!(ordered[2], NodeId(0));
}

#[test]
fn test_diamond_first_and_last() {
    let (nodes, links) = diamond();

    let ordered = topological_sort(&nodes, &links);

    assert_eq!(ordered.len(), 4);
    assert_eq!(ordered[0], NodeId(3));
    assert_eq!(ordered[3], NodeId(0));
    assert_valid_order(&ordered, &links);
}

#[test]
fn test_empty_graph() {
    assert!(topological_sort(&[], &[]).is_empty());
}

#[test]
fn test_links_outside_node_set_are_ignored() {
    // Only the prefix {0, 1} is supplied, the link from 2 must not leak in
    let all = init_nodes(3);
    let links = links(&[(1, 0), (2, 1)]);

    let ordered = topological_sort(&all[..2], &links);

    assert_eq!(ordered, ids(&[1, 0]));
}

#[test]
fn test_deep_chain_does_not_overflow() {
    let n = 50_000;
    let (nodes, links) = forward_chain(n);

    let ordered = topological_sort(&nodes, &links);

    assert_eq!(ordered.len(), n);
    assert_eq!(ordered[0], NodeId(0));
    assert_eq!(ordered[n - 1], NodeId(n - 1));
}

#[test]
fn test_wide_dag_is_valid_order() {
    // Every node approves the two before it
    let nodes = init_nodes(30);
    let pairs: Vec<(usize, usize)> = (2..30).flat_map(|i| [(i, i - 1), (i, i - 2)]).collect();
    let links = links(&pairs);

    let ordered = topological_sort(&nodes, &links);

    assert_eq!(ordered.len(), 30);
    assert_valid_order(&ordered, &links);
}
