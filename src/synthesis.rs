//! Deterministic phylogeny synthesis (C4): K input sequences -> a 2K-leaf
//! mirror-pair comb.
//!
//! See spec §4.4. The left half is a left-comb whose ordered leaves are
//! `s_0, ..., s_{K-1}`; the right half mirrors it with the same ordering.
//! The symmetry is what turns segment-pair scoring into a single SMTree
//! evaluation: the left half anchors the candidate segment, the right half
//! anchors the same positions shifted by one segment length.

use crate::phylogeny::{NodeId, PhylogenyTree};

/// The synthesized topology, plus the leaf ids for each sequence index on
/// each side, in sequence order.
pub struct SynthesizedPhylogeny {
    pub tree: PhylogenyTree<()>,
    pub left_leaves: Vec<NodeId>,
    pub right_leaves: Vec<NodeId>,
}

/// Builds the mirror-pair comb for `k` sequences. Requires `k >= 2`.
pub fn synthesize(k: usize) -> SynthesizedPhylogeny {
    assert!(k >= 2, "phylogeny synthesis requires at least two sequences");

    let mut tree: PhylogenyTree<()> = PhylogenyTree::new();
    let root = tree.set_root(None);
    let mut left_current = tree.append_child(root, None);
    let mut right_current = tree.append_child(root, None);

    let mut left_leaves = Vec::with_capacity(k);
    let mut right_leaves = Vec::with_capacity(k);

    for i in 0..k {
        left_leaves.push(tree.append_child(left_current, None));
        right_leaves.push(tree.append_child(right_current, None));

        if k - i - 1 > 1 {
            left_current = tree.append_child(left_current, None);
            right_current = tree.append_child(right_current, None);
        }
    }

    SynthesizedPhylogeny {
        tree,
        left_leaves,
        right_leaves,
    }
}
