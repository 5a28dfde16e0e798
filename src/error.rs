//! Error types for graph construction and D-separation queries.
//!
//! Every error is a precondition violation detected before any traversal
//! starts; no partial result ever accompanies one.

use serde::{Deserialize, Serialize};

/// Result alias used throughout the crate.
pub type Result<T, E = DSepError> = core::result::Result<T, E>;

/// The error type for D-separation queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DSepError {
    /// The query node is also listed as observed.
    InvalidSource {
        /// The offending source node.
        source: usize,
    },
    /// A node index lies outside `0..node_count`.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },
}

impl core::fmt::Display for DSepError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidSource { source } => write!(
                f,
                "source node should not be in the observation nodes (source {source})"
            ),
            Self::IndexOutOfRange { index, node_count } => write!(
                f,
                "node {index} is out of range for a graph with {node_count} nodes"
            ),
        }
    }
}

impl std::error::Error for DSepError {}

/// Fails with [`DSepError::IndexOutOfRange`] unless `index < node_count`.
#[inline]
pub(crate) fn check_index(index: usize, node_count: usize) -> Result<()> {
    if index < node_count {
        Ok(())
    } else {
        Err(DSepError::IndexOutOfRange { index, node_count })
    }
}
