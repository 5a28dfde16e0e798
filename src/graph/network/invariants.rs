//! Debug-only structural checks for [`BayesNet`].
//!
//! Compiled only with `debug_assertions`; release builds skip these checks.

use super::BayesNet;

/// Debug-asserts a structural invariant with a message.
#[inline(always)]
pub(crate) fn invariant_assert(condition: bool, message: &str) {
    debug_assert!(condition, "Graph invariant violated: {}", message);
}

impl BayesNet {
    /// Validates the structural invariants of the network.
    ///
    /// This method checks that:
    /// 1. Offsets are monotone and cover their edge arrays exactly
    /// 2. All neighbour indices are within bounds
    /// 3. Every row is strictly ascending (sorted, no duplicates)
    /// 4. Parents are the exact transpose of children
    ///
    /// Returns `true` if all invariants hold.
    pub fn validate_invariants(&self) -> bool {
        let n = self.node_count();

        invariant_assert(
            self.parent_offsets.len() == n + 1,
            "child and parent offsets must describe the same node count",
        );
        invariant_assert(
            self.children.len() == self.parents.len(),
            "child and parent edge counts must match",
        );
        invariant_assert(
            self.child_offsets.windows(2).all(|w| w[0] <= w[1])
                && self.parent_offsets.windows(2).all(|w| w[0] <= w[1]),
            "offsets must be monotone",
        );
        invariant_assert(
            self.child_offsets.last() == Some(&self.children.len())
                && self.parent_offsets.last() == Some(&self.parents.len()),
            "last offset must equal edge count",
        );

        let mut in_degrees = vec![0usize; n];
        for u in 0..n {
            let row = self.children(u);
            invariant_assert(row.iter().all(|&v| v < n), "child index out of bounds");
            invariant_assert(
                row.windows(2).all(|w| w[0] < w[1]),
                "children must be sorted and unique",
            );
            for &v in row {
                in_degrees[v] += 1;
                invariant_assert(
                    self.parents(v).binary_search(&u).is_ok(),
                    "every child edge must appear in the parent lists",
                );
            }
        }

        for v in 0..n {
            let col = self.parents(v);
            invariant_assert(
                col.windows(2).all(|w| w[0] < w[1]),
                "parents must be sorted and unique",
            );
            invariant_assert(
                col.len() == in_degrees[v],
                "in-degree must match the transpose",
            );
        }

        true
    }
}
