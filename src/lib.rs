//! # `dsep` - Linear-time D-separation for Bayesian networks
//!
//! Given a directed acyclic graph, a source node and a set of observed nodes,
//! `dsep` reports every node that is *D-separated* from the source. In a
//! Bayesian network, D-separation of `X` and `Y` given `Z` implies that `X` is
//! conditionally independent of `Y` given `Z` in every distribution
//! consistent with the graph.
//!
//! ## Architecture
//!
//! Data flows strictly forward through four stages:
//!
//! 1. **Graph builder** ([`BayesNet::from_adjacency`]): adjacency lists become
//!    a CSR (children) + CSC (parents) structure with set semantics.
//! 2. **Ancestor closure** ([`BayesNet::ancestors`]): every node with an
//!    observed descendant (or itself observed).
//! 3. **Active-trail traversal** ([`BayesNet::active_trail_nodes`]): the
//!    Bayes-Ball search over `(node, direction)` tokens.
//! 4. **Result assembly** ([`BayesNet::d_separated`]): the ascending
//!    complement of reachable, observed and source.
//!
//! Both searches visit each node (respectively each `(node, direction)`
//! pair) at most once, so every query is \(O(n + m)\).
//!
//! ### Guarantees
//!
//! - **No panics on bad input**: out-of-range indices surface as
//!   [`DSepError::IndexOutOfRange`], an observed source as
//!   [`DSepError::InvalidSource`].
//! - **Set semantics**: duplicate edges and duplicate observations never
//!   change a result.
//! - **Determinism**: results are ascending and independent of the order of
//!   observations or of edges within a row.
//! - **Shareable graphs**: a built [`BayesNet`] is immutable and `Sync`;
//!   independent queries may run concurrently (see the `parallel` feature).
//!
//! ## Features
//!
//! - `parallel`: [`BayesNet::d_separated_batch`] runs on the rayon pool.
//! - `tracing`: graph construction and queries emit `tracing` events.
//!
//! ## Example
//!
//! ```rust
//! use dsep::{find_d_separation, BayesNet};
//!
//! // Common cause: 0 -> 1, 0 -> 2.
//! let adjacency = vec![vec![1, 2], vec![], vec![]];
//!
//! // Observing the cause blocks the trail between its effects.
//! assert_eq!(find_d_separation(&adjacency, 1, &[0]).unwrap(), vec![2]);
//!
//! // Reuse one network for many queries.
//! let net = BayesNet::from_adjacency(&adjacency).unwrap();
//! assert!(net.d_separated(1, &[]).unwrap().is_empty());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod macros;

pub mod collections;
pub mod dsep;
pub mod error;
pub mod graph;

pub use collections::NodeSet;
pub use dsep::{find_d_separation, DSepQuery, DirectedNode, Direction};
pub use error::{DSepError, Result};
pub use graph::BayesNet;

// Compile-time assertions for the traversal token layout.
const _: () = {
    use core::mem;

    // A token is plain data: one index plus a one-byte direction tag.
    assert!(mem::size_of::<Direction>() == 1);
    assert!(mem::size_of::<DirectedNode>() <= 2 * mem::size_of::<usize>());

    // Shared read-only across batch queries.
    const fn assert_sync<T: Sync + Send>() {}
    assert_sync::<BayesNet>();
};
