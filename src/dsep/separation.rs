//! Query entry points on [`BayesNet`]: precondition checks and result assembly.

use crate::collections::NodeSet;
use crate::error::{check_index, DSepError, Result};
use crate::graph::BayesNet;
use crate::macros::trace_event;

use super::ancestors::ancestor_closure;
use super::bayes_ball::active_trail;

impl BayesNet {
    /// Validates a `(source, observed)` pair and returns the observations as a set.
    ///
    /// Checks run in order: `source` not observed, `source` in range, every
    /// observed index in range.
    fn observation_set(&self, source: usize, observed: &[usize]) -> Result<NodeSet> {
        if observed.contains(&source) {
            return Err(DSepError::InvalidSource { source });
        }
        check_index(source, self.node_count())?;
        self.observed_nodes(observed)
    }

    fn observed_nodes(&self, observed: &[usize]) -> Result<NodeSet> {
        let n = self.node_count();
        let mut set = NodeSet::new(n);
        for &node in observed {
            check_index(node, n)?;
            set.insert(node);
        }
        Ok(set)
    }

    /// Every ancestor of the observed nodes, the observed nodes included.
    ///
    /// # Errors
    /// [`DSepError::IndexOutOfRange`] if an observed index is out of range.
    pub fn ancestors(&self, observed: &[usize]) -> Result<NodeSet> {
        let observed = self.observed_nodes(observed)?;
        Ok(ancestor_closure(self, &observed))
    }

    /// Nodes reachable from `source` along an active trail given `observed`.
    ///
    /// The set contains `source` itself and never contains an observed node.
    ///
    /// # Errors
    /// [`DSepError::InvalidSource`] if `source` is observed,
    /// [`DSepError::IndexOutOfRange`] if `source` or an observed index is out
    /// of range.
    pub fn active_trail_nodes(&self, source: usize, observed: &[usize]) -> Result<NodeSet> {
        let observed = self.observation_set(source, observed)?;
        let ancestors = ancestor_closure(self, &observed);
        Ok(active_trail(self, source, &observed, &ancestors))
    }

    /// Nodes D-separated from `source` given `observed`, ascending.
    ///
    /// A node is reported iff it is neither `source`, observed, nor reachable
    /// along an active trail.
    ///
    /// # Errors
    /// Same as [`active_trail_nodes`](Self::active_trail_nodes).
    pub fn d_separated(&self, source: usize, observed: &[usize]) -> Result<Vec<usize>> {
        let observed = self.observation_set(source, observed)?;
        let ancestors = ancestor_closure(self, &observed);
        let reachable = active_trail(self, source, &observed, &ancestors);

        #[cfg(debug_assertions)]
        crate::graph::network::invariants::invariant_assert(
            reachable.contains(source),
            "the source always lies on its own trail",
        );

        let separated: Vec<usize> = (0..self.node_count())
            .filter(|&i| i != source && !observed.contains(i) && !reachable.contains(i))
            .collect();

        trace_event!(
            trace,
            source,
            observed = observed.count(),
            ancestors = ancestors.count(),
            reachable = reachable.count(),
            separated = separated.len(),
            "d-separation query"
        );

        Ok(separated)
    }

    /// Whether `x` is D-separated from `y` given `observed`.
    ///
    /// `x` must satisfy the same preconditions as a query source. Returns
    /// `false` when `y == x` and `true` when `y` is itself observed.
    ///
    /// # Errors
    /// Same as [`active_trail_nodes`](Self::active_trail_nodes), plus
    /// [`DSepError::IndexOutOfRange`] if `y` is out of range.
    pub fn is_d_separated(&self, x: usize, y: usize, observed: &[usize]) -> Result<bool> {
        let observed_set = self.observation_set(x, observed)?;
        check_index(y, self.node_count())?;
        if y == x {
            return Ok(false);
        }
        if observed_set.contains(y) {
            return Ok(true);
        }
        let ancestors = ancestor_closure(self, &observed_set);
        let reachable = active_trail(self, x, &observed_set, &ancestors);
        Ok(!reachable.contains(y))
    }

    /// Answers independent `(source, observed)` queries against this network.
    ///
    /// Results come back in input order. With the `parallel` feature the
    /// queries are spread over the rayon thread pool; only the immutable
    /// network is shared between them.
    pub fn d_separated_batch(&self, queries: &[(usize, Vec<usize>)]) -> Vec<Result<Vec<usize>>> {
        trace_event!(debug, queries = queries.len(), "d-separation batch");
        run_batch(self, queries)
    }
}

#[cfg(feature = "parallel")]
fn run_batch(net: &BayesNet, queries: &[(usize, Vec<usize>)]) -> Vec<Result<Vec<usize>>> {
    use rayon::prelude::*;

    queries
        .par_iter()
        .map(|(source, observed)| net.d_separated(*source, observed))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn run_batch(net: &BayesNet, queries: &[(usize, Vec<usize>)]) -> Vec<Result<Vec<usize>>> {
    queries
        .iter()
        .map(|(source, observed)| net.d_separated(*source, observed))
        .collect()
}
