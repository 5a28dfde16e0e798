//! Graph layouts the D-separation queries run on.
//!
//! - `network`: the bidirectional (parents + children) representation
//! - `access`: crate-internal traversal state (visited sets)

pub mod network;
pub(crate) mod access;

pub use network::BayesNet;
