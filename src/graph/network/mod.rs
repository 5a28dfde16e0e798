//! A directed graph with both child and parent adjacency, built once per model.
//!
//! Children are stored in CSR form (row offsets + targets) and parents in CSC
//! form (column offsets + sources), so both directions of every edge are a
//! contiguous slice. Rows are sorted and deduplicated on construction, which
//! makes every neighbour list a true set.
//!
//! The structure performs no acyclicity check. Queries terminate on any input
//! because traversals track visited state per node (and per direction).

#[cfg(debug_assertions)]
pub(crate) mod invariants;

use crate::error::{check_index, Result};
use crate::macros::trace_event;

/// The bidirectional node structure D-separation queries run against.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_adjacency` | \(O(n + m \log d)\) | CSR + CSC, rows sorted and deduplicated |
/// | `children` | \(O(1)\) | Slice into the CSR targets |
/// | `parents` | \(O(1)\) | Slice into the CSC sources |
/// | `has_edge` | \(O(\log d)\) | Binary search over a sorted row |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BayesNet {
    child_offsets: Vec<usize>,
    children: Vec<usize>,
    parent_offsets: Vec<usize>,
    parents: Vec<usize>,
}

impl BayesNet {
    /// Builds the network from adjacency lists.
    ///
    /// `adjacency[u]` lists the targets of the edges leaving `u`; its length
    /// defines the node count. Duplicate edges collapse into one.
    ///
    /// # Errors
    /// [`DSepError::IndexOutOfRange`](crate::DSepError::IndexOutOfRange) if any
    /// edge targets a node outside `0..adjacency.len()`.
    pub fn from_adjacency(adjacency: &[Vec<usize>]) -> Result<Self> {
        let n = adjacency.len();

        // CSR over the sorted, deduplicated rows.
        let mut child_offsets = Vec::with_capacity(n + 1);
        child_offsets.push(0);
        let mut children = Vec::with_capacity(adjacency.iter().map(Vec::len).sum());
        let mut in_degrees = vec![0usize; n];

        for row in adjacency {
            let start = children.len();
            for &v in row {
                check_index(v, n)?;
                children.push(v);
            }
            let tail = &mut children[start..];
            tail.sort_unstable();
            let unique = dedup_sorted(tail);
            children.truncate(start + unique);
            for &v in &children[start..] {
                in_degrees[v] += 1;
            }
            child_offsets.push(children.len());
        }

        // CSC: prefix sums of in-degrees, then fill by increasing `u` so each
        // column comes out sorted.
        let mut parent_offsets = Vec::with_capacity(n + 1);
        parent_offsets.push(0);
        let mut total = 0usize;
        for &deg in &in_degrees {
            total += deg;
            parent_offsets.push(total);
        }

        let mut parents = vec![0usize; total];
        let mut write_pos = parent_offsets[..n].to_vec();
        for u in 0..n {
            for &v in &children[child_offsets[u]..child_offsets[u + 1]] {
                parents[write_pos[v]] = u;
                write_pos[v] += 1;
            }
        }

        let net = Self {
            child_offsets,
            children,
            parent_offsets,
            parents,
        };

        #[cfg(debug_assertions)]
        net.validate_invariants();

        trace_event!(
            debug,
            nodes = net.node_count(),
            edges = net.edge_count(),
            "built bayes net"
        );

        Ok(net)
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.child_offsets.len() - 1
    }

    /// Number of distinct edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if `node` is a valid index.
    #[inline]
    pub fn contains(&self, node: usize) -> bool {
        node < self.node_count()
    }

    /// Children of `node` (targets of its outgoing edges), ascending.
    ///
    /// # Panics
    /// Panics if `node` is out of bounds.
    #[inline]
    pub fn children(&self, node: usize) -> &[usize] {
        assert!(self.contains(node), "node {node} out of bounds");
        &self.children[self.child_offsets[node]..self.child_offsets[node + 1]]
    }

    /// Parents of `node` (sources of its incoming edges), ascending.
    ///
    /// # Panics
    /// Panics if `node` is out of bounds.
    #[inline]
    pub fn parents(&self, node: usize) -> &[usize] {
        assert!(self.contains(node), "node {node} out of bounds");
        &self.parents[self.parent_offsets[node]..self.parent_offsets[node + 1]]
    }

    /// Out-degree.
    pub fn out_degree(&self, node: usize) -> usize {
        self.children(node).len()
    }

    /// In-degree.
    pub fn in_degree(&self, node: usize) -> usize {
        self.parents(node).len()
    }

    /// Edge membership test.
    ///
    /// # Panics
    /// Panics if `from` is out of bounds.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.children(from).binary_search(&to).is_ok()
    }
}

/// Moves the unique elements of a sorted slice to its front and returns how
/// many there are.
fn dedup_sorted(row: &mut [usize]) -> usize {
    if row.is_empty() {
        return 0;
    }
    let mut write = 1;
    for read in 1..row.len() {
        if row[read] != row[write - 1] {
            row[write] = row[read];
            write += 1;
        }
    }
    write
}

#[cfg(test)]
mod tests;
