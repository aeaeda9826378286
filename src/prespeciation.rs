//! The pre-speciation cost evaluator (C5).
//!
//! Given an updated `SMTree`, computes the expected number of mutations
//! along edges from the root to its direct children, averaged over every
//! minimum-cost reconstruction at the root. See spec §4.5.

use error_chain::bail;
use std::hash::Hash;

use crate::errors::{ErrorKind, Result};
use crate::smtree::{SMTree, DP_TOLERANCE};

/// Computes the pre-speciation cost of an already-`update`d tree.
pub fn pre_speciation_cost<S, F>(tree: &SMTree<S>, states: &[S], cost_fn: &F) -> Result<f64>
where
    S: Clone + Eq + Hash,
    F: Fn(&S, &S) -> f64,
{
    let root = tree
        .root()
        .ok_or_else(|| ErrorKind::InternalInvariantViolation("empty tree".into()))?;

    let min_cost = tree.min_cost(root);
    let root_candidates: Vec<&S> = states
        .iter()
        .filter(|s| (tree.info(root, s).cost - min_cost).abs() <= DP_TOLERANCE)
        .collect();

    let total_reconstructions: u64 = root_candidates.iter().map(|s| tree.info(root, s).count).sum();
    if total_reconstructions == 0 {
        bail!(ErrorKind::InternalInvariantViolation(
            "zero minimum-cost reconstructions at root".into()
        ));
    }

    let mut cost_sum = 0.0;
    for &s in &root_candidates {
        let root_count = tree.info(root, s).count;
        for &child in tree.children(root) {
            let mut min_augmented = std::f64::INFINITY;
            for sp in states {
                let augmented = tree.info(child, sp).cost + cost_fn(s, sp);
                if augmented < min_augmented {
                    min_augmented = augmented;
                }
            }

            let equivalent_children: u64 = states
                .iter()
                .filter(|sp| (tree.info(child, sp).cost + cost_fn(s, sp) - min_augmented).abs() <= DP_TOLERANCE)
                .map(|sp| tree.info(child, sp).count)
                .sum();
            if equivalent_children == 0 {
                bail!(ErrorKind::InternalInvariantViolation(format!(
                    "child {} has no state attaining its minimum augmented cost",
                    child
                )));
            }
            if root_count % equivalent_children != 0 {
                bail!(ErrorKind::InternalInvariantViolation(format!(
                    "root count {} not divisible by equivalent-children count {}",
                    root_count, equivalent_children
                )));
            }
            let mult = root_count / equivalent_children;

            for sp in states {
                let info = tree.info(child, sp);
                let augmented = info.cost + cost_fn(s, sp);
                if (augmented - min_augmented).abs() <= DP_TOLERANCE {
                    cost_sum += cost_fn(s, sp) * (info.count as f64) * (mult as f64);
                }
            }
        }
    }

    Ok(cost_sum / total_reconstructions as f64)
}
