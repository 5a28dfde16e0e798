//! Index-keyed collections shared by the graph and query layers.

pub mod node_set;

pub use node_set::NodeSet;
