//! Internal graph accessors and low-level building blocks.
//!
//! This module is intentionally `pub(crate)` so traversals can share visited
//! sets and scratch buffers without exposing them as part of the public API.

pub(crate) mod visited;
