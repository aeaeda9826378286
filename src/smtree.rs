//! The Sankoff-style state-mutation tree (C3).
//!
//! Shape mirrors a `PhylogenyTree`; each node instead carries a table from
//! candidate state to `StateInfo { cost, count }`. `update` recomputes every
//! internal table bottom-up per the invariant of spec §3: for node `n` and
//! state `s`,
//!
//! ```text
//! cost(n, s)  = sum_child min_s' (cost(child, s') + cost_fn(s, s'))
//! count(n, s) = product_child (sum of count(child, s') over s' attaining that min)
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use error_chain::bail;

use crate::errors::{ErrorKind, Result};
use crate::phylogeny::{NodeId, PhylogenyTree};

/// Tolerance used for the "attains the minimum" comparisons inside the DP
/// itself. Distinct from the user-facing `epsilon` used for `ScoreResult`
/// ordering and equivalence (§3) -- this one only ever compares sums of
/// `cost_fn` outputs within a single `update` call.
pub const DP_TOLERANCE: f64 = 1e-9;

/// The cost and reconstruction count of assigning one state to one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateInfo {
    pub cost: f64,
    pub count: u64,
}

impl StateInfo {
    const UNREACHABLE: StateInfo = StateInfo {
        cost: std::f64::INFINITY,
        count: 0,
    };
}

type StateInfoTable<S> = HashMap<S, StateInfo>;

/// A Sankoff-style DP tree: same topology as the `PhylogenyTree` it was
/// built from, payload replaced by a per-node state table.
pub struct SMTree<S: Clone + Eq + Hash> {
    root: Option<NodeId>,
    children: Vec<Vec<NodeId>>,
    tables: Vec<StateInfoTable<S>>,
}

impl<S: Clone + Eq + Hash> SMTree<S> {
    /// Builds an `SMTree` with the same shape as `tree`, with empty tables.
    pub fn mimic<T>(tree: &PhylogenyTree<T>) -> Self {
        let n = tree.len();
        let mut children = Vec::with_capacity(n);
        for id in 0..n {
            children.push(tree.children(id).to_vec());
        }
        SMTree {
            root: tree.root(),
            children,
            tables: vec![HashMap::new(); n],
        }
    }

    /// The root of the tree, if non-empty.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The children of `node`, first child first.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.children[node]
    }

    /// Fixes a leaf to a single state: `{s -> (0, 1)}`, all others absent.
    pub fn fix_state(&mut self, leaf: NodeId, s: S) {
        let mut table = HashMap::with_capacity(1);
        table.insert(s, StateInfo { cost: 0.0, count: 1 });
        self.tables[leaf] = table;
    }

    /// Iterates over `(state, info)` pairs currently stored at `node`.
    pub fn states_at(&self, node: NodeId) -> impl Iterator<Item = (&S, &StateInfo)> {
        self.tables[node].iter()
    }

    /// The `StateInfo` for `(node, s)`; absent states read as unreachable
    /// (`cost = +inf, count = 0`).
    pub fn info(&self, node: NodeId, s: &S) -> StateInfo {
        self.tables[node].get(s).cloned().unwrap_or(StateInfo::UNREACHABLE)
    }

    /// `min_s table[root][s].cost`.
    pub fn min_cost(&self, node: NodeId) -> f64 {
        self.tables[node]
            .values()
            .map(|info| info.cost)
            .fold(std::f64::INFINITY, f64::min)
    }

    /// Recomputes every internal node's table bottom-up, per the invariant
    /// in spec §3 / §4.3. Leaves (nodes with no children) are left alone --
    /// they must already have been fixed via `fix_state`.
    pub fn update<F>(&mut self, states: &[S], cost_fn: &F) -> Result<()>
    where
        F: Fn(&S, &S) -> f64,
    {
        let order = self.postorder();
        for node in order {
            if self.children[node].is_empty() {
                continue;
            }
            let mut table = HashMap::with_capacity(states.len());
            for s in states {
                let mut total_cost = 0.0;
                let mut total_count: u64 = 1;
                for &child in &self.children[node] {
                    let (best_cost, best_count) = self.best_child_transition(child, s, states, cost_fn)?;
                    total_cost += best_cost;
                    total_count *= best_count;
                }
                table.insert(s.clone(), StateInfo { cost: total_cost, count: total_count });
            }
            self.tables[node] = table;
        }
        Ok(())
    }

    /// For a fixed parent state `s`, the minimum augmented cost
    /// `min_s' (cost(child, s') + cost_fn(s, s'))` together with the total
    /// reconstruction count of the child states attaining it.
    fn best_child_transition<F>(
        &self,
        child: NodeId,
        s: &S,
        states: &[S],
        cost_fn: &F,
    ) -> Result<(f64, u64)>
    where
        F: Fn(&S, &S) -> f64,
    {
        let mut best_cost = std::f64::INFINITY;
        let mut best_count: u64 = 0;
        for sp in states {
            let info = self.info(child, sp);
            if info.count == 0 {
                continue;
            }
            let augmented = info.cost + cost_fn(s, sp);
            if augmented < best_cost - DP_TOLERANCE {
                best_cost = augmented;
                best_count = info.count;
            } else if (augmented - best_cost).abs() <= DP_TOLERANCE {
                best_count += info.count;
            }
        }
        if best_count == 0 {
            bail!(ErrorKind::InternalInvariantViolation(format!(
                "node {} has no reachable state for parent state transition",
                child
            )));
        }
        Ok((best_cost, best_count))
    }

    fn postorder(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.children.len());
        if let Some(root) = self.root {
            self.collect_postorder(root, &mut out);
        }
        out
    }

    fn collect_postorder(&self, node: NodeId, out: &mut Vec<NodeId>) {
        for &child in &self.children[node] {
            self.collect_postorder(child, out);
        }
        out.push(node);
    }
}
