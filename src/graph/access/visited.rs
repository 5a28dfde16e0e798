//! Visited sets for graph traversals.
//!
//! This provides two internal implementations:
//! - `VisitedSet`: one bit per node, for plain reachability passes
//! - `DirectedVisited`: one bit per `(node, direction)` pair, for traversals
//!   that may legitimately arrive at a node once from each side
//!
//! The goal is to keep graph algorithms expressing visited logic in one place.

use crate::collections::NodeSet;
use crate::dsep::{DirectedNode, Direction};

/// A dense, word-packed visited set over nodes.
pub(crate) struct VisitedSet {
    bits: NodeSet,
}

impl VisitedSet {
    #[inline(always)]
    pub(crate) fn new(nodes: usize) -> Self {
        Self {
            bits: NodeSet::new(nodes),
        }
    }

    /// Returns `true` iff this call observed the node as not-yet-visited and marks it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, node: usize) -> bool {
        self.bits.insert(node)
    }

    pub(crate) fn into_set(self) -> NodeSet {
        self.bits
    }
}

/// A visited set keyed by `(node, direction)`, stored as `2 * nodes` bits.
pub(crate) struct DirectedVisited {
    bits: NodeSet,
}

impl DirectedVisited {
    #[inline(always)]
    pub(crate) fn new(nodes: usize) -> Self {
        Self {
            bits: NodeSet::new(nodes * 2),
        }
    }

    /// Returns `true` iff this call observed the token as not-yet-visited and marks it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, token: DirectedNode) -> bool {
        self.bits.insert(slot(token))
    }
}

#[inline(always)]
fn slot(token: DirectedNode) -> usize {
    let dir = match token.direction {
        Direction::Up => 0,
        Direction::Down => 1,
    };
    token.node * 2 + dir
}
