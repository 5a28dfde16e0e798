//! D-separation queries over directed acyclic graphs.
//!
//! A node `X` is D-separated from `Y` given observations `Z` when every trail
//! between them is blocked; in a Bayesian network this implies `X` is
//! conditionally independent of `Y` given `Z` in every distribution the graph
//! admits.
//!
//! A query runs in two linear passes over a [`BayesNet`]:
//! 1. the ancestor closure of `Z` (who has an observed descendant),
//! 2. a Bayes-Ball traversal from the source over `(node, direction)` tokens.
//!
//! Everything not reached, not observed, and not the source is D-separated.
//!
//! Reference: Koller & Friedman, *Probabilistic Graphical Models*, pp. 74-75.

mod ancestors;
mod bayes_ball;
mod separation;

use serde::{Deserialize, Serialize};

use crate::error::{check_index, DSepError, Result};
use crate::graph::BayesNet;

/// Direction of travel when a traversal arrives at a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Arrived from a child, moving toward ancestors.
    Up,
    /// Arrived from a parent, moving toward descendants.
    Down,
}

/// A visitation state of the Bayes-Ball traversal: a node plus the direction
/// it was reached in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectedNode {
    /// Node index.
    pub node: usize,
    /// Direction of arrival.
    pub direction: Direction,
}

impl DirectedNode {
    /// Token for `node` reached while moving up.
    #[inline(always)]
    pub const fn up(node: usize) -> Self {
        Self {
            node,
            direction: Direction::Up,
        }
    }

    /// Token for `node` reached while moving down.
    #[inline(always)]
    pub const fn down(node: usize) -> Self {
        Self {
            node,
            direction: Direction::Down,
        }
    }
}

/// Finds all nodes D-separated from `source` given `observed`.
///
/// `adjacency[i]` lists the direct successors of node `i`, so
/// `[[1], [], []]` is a single edge `0 -> 1` over three nodes. `observed` may
/// contain duplicates and its order is irrelevant.
///
/// Returns the D-separated nodes in ascending order.
///
/// # Errors
/// - [`DSepError::InvalidSource`] if `source` is in `observed`
/// - [`DSepError::IndexOutOfRange`] if `source`, an adjacency entry, or an
///   observed index is outside `0..adjacency.len()`
///
/// # Example
///
/// ```rust
/// use dsep::find_d_separation;
///
/// // 1 -> 0 <- 2: an unobserved common effect blocks the trail.
/// let adjacency = vec![vec![], vec![0], vec![0]];
/// assert_eq!(find_d_separation(&adjacency, 1, &[]).unwrap(), vec![2]);
///
/// // Observing the common effect opens it.
/// assert_eq!(find_d_separation(&adjacency, 1, &[0]).unwrap(), Vec::<usize>::new());
/// ```
pub fn find_d_separation(
    adjacency: &[Vec<usize>],
    source: usize,
    observed: &[usize],
) -> Result<Vec<usize>> {
    if observed.contains(&source) {
        return Err(DSepError::InvalidSource { source });
    }
    check_index(source, adjacency.len())?;

    let net = BayesNet::from_adjacency(adjacency)?;
    net.d_separated(source, observed)
}

/// A self-contained D-separation query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DSepQuery {
    /// Outgoing edges per node.
    pub adjacency: Vec<Vec<usize>>,
    /// The query node.
    pub source: usize,
    /// Conditioning nodes.
    #[serde(default)]
    pub observed: Vec<usize>,
}

impl DSepQuery {
    /// Runs the query; see [`find_d_separation`].
    ///
    /// # Errors
    /// Same as [`find_d_separation`].
    pub fn run(&self) -> Result<Vec<usize>> {
        find_d_separation(&self.adjacency, self.source, &self.observed)
    }
}
