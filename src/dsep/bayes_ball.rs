//! The direction-aware active-trail traversal (Bayes-Ball).
//!
//! The search runs over [`DirectedNode`] tokens rather than bare nodes: a node
//! reached while moving up (from a child) licenses different continuations
//! than the same node reached while moving down (from a parent), so each
//! direction is visited independently.
//!
//! Legality rules, for a token `(n, dir)`:
//!
//! | Arrived | `n` observed | `n` in ancestor closure | Continue to |
//! |---------|--------------|-------------------------|-------------|
//! | up      | no           | any                     | parents (up), children (down) |
//! | up      | yes          | any                     | nothing |
//! | down    | no           | no                      | children (down) |
//! | down    | no           | yes                     | children (down), parents (up) |
//! | down    | yes          | yes                     | parents (up) |
//!
//! An observed node is always in its own ancestor closure.
//!
//! Going on to children is gated on `n` being unobserved; bouncing back up to
//! parents is gated on `n` being in the ancestor closure of the observations
//! (the v-structure case), independent of whether `n` itself is observed.

use std::collections::VecDeque;

use crate::collections::NodeSet;
use crate::graph::access::visited::DirectedVisited;
use crate::graph::BayesNet;

use super::{DirectedNode, Direction};

/// Returns the nodes reachable from `source` along an active trail.
///
/// The source itself is included. Each `(node, direction)` pair is expanded
/// at most once, bounding the work to \(O(n + m)\).
///
/// Callers guarantee `source` and every index in `observed` are in range and
/// that `ancestors` was computed from `observed` on the same network.
pub(crate) fn active_trail(
    net: &BayesNet,
    source: usize,
    observed: &NodeSet,
    ancestors: &NodeSet,
) -> NodeSet {
    let n = net.node_count();
    let mut visited = DirectedVisited::new(n);
    let mut reachable = NodeSet::new(n);
    let mut queue: VecDeque<DirectedNode> = VecDeque::new();

    let start = DirectedNode::up(source);
    visited.try_visit(start);
    queue.push_back(start);

    let mut push = |queue: &mut VecDeque<DirectedNode>, token: DirectedNode| {
        if visited.try_visit(token) {
            queue.push_back(token);
        }
    };

    while let Some(DirectedNode { node, direction }) = queue.pop_front() {
        let is_observed = observed.contains(node);
        if !is_observed {
            reachable.insert(node);
        }

        match direction {
            Direction::Up => {
                if is_observed {
                    continue;
                }
                for &parent in net.parents(node) {
                    push(&mut queue, DirectedNode::up(parent));
                }
                for &child in net.children(node) {
                    push(&mut queue, DirectedNode::down(child));
                }
            }
            Direction::Down => {
                if !is_observed {
                    for &child in net.children(node) {
                        push(&mut queue, DirectedNode::down(child));
                    }
                }
                if ancestors.contains(node) {
                    for &parent in net.parents(node) {
                        push(&mut queue, DirectedNode::up(parent));
                    }
                }
            }
        }
    }

    reachable
}
