//! Ancestor closure of an observation set.

use std::collections::VecDeque;

use crate::collections::NodeSet;
use crate::graph::access::visited::VisitedSet;
use crate::graph::BayesNet;

/// Returns every node from which some observed node can be reached by
/// following parent edges zero or more times (observed nodes included).
///
/// Breadth-first over parent edges; each node is expanded at most once, so
/// this is \(O(n + m)\). An empty observation set yields an empty closure.
///
/// Callers guarantee every index in `observed` is in range.
pub(crate) fn ancestor_closure(net: &BayesNet, observed: &NodeSet) -> NodeSet {
    let mut visited = VisitedSet::new(net.node_count());
    let mut queue: VecDeque<usize> = VecDeque::new();

    for node in observed {
        if visited.try_visit(node) {
            queue.push_back(node);
        }
    }

    while let Some(node) = queue.pop_front() {
        for &parent in net.parents(node) {
            if visited.try_visit(parent) {
                queue.push_back(parent);
            }
        }
    }

    visited.into_set()
}
