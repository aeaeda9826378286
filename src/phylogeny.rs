//! An N-ary rooted tree with optional payload per node (C2).
//!
//! The tree exclusively owns its nodes; callers address them through
//! `NodeId`, an opaque handle scoped to the tree that produced it. Topology
//! is mutated only via `set_root` and `append_child`; everything else is
//! read-only traversal.

/// An opaque handle to a node, valid only for the tree that produced it.
pub type NodeId = usize;

struct Node<T> {
    payload: Option<T>,
    children: Vec<NodeId>,
}

/// An N-ary rooted tree of optional payload.
pub struct PhylogenyTree<T> {
    root: Option<NodeId>,
    nodes: Vec<Node<T>>,
}

impl<T> Default for PhylogenyTree<T> {
    fn default() -> Self {
        PhylogenyTree {
            root: None,
            nodes: Vec::new(),
        }
    }
}

impl<T> PhylogenyTree<T> {
    /// Builds an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every node, resetting the tree to empty.
    pub fn clear(&mut self) {
        self.root = None;
        self.nodes.clear();
    }

    /// Sets the root, replacing any existing tree. Returns the root's id.
    pub fn set_root(&mut self, payload: Option<T>) -> NodeId {
        self.clear();
        self.nodes.push(Node {
            payload,
            children: Vec::new(),
        });
        self.root = Some(0);
        0
    }

    /// Appends a new child of `parent`, returning the new node's id.
    pub fn append_child(&mut self, parent: NodeId, payload: Option<T>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            payload,
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// The root, if the tree is non-empty.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The children of `node`, first child first.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node].children
    }

    /// The payload at `node`.
    pub fn payload(&self, node: NodeId) -> Option<&T> {
        self.nodes[node].payload.as_ref()
    }

    /// The total number of nodes currently in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The leaves of the tree, in a deterministic, order-preserving,
    /// first-child-first traversal.
    pub fn leaves(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        if let Some(root) = self.root {
            self.collect_leaves(root, &mut out);
        }
        out
    }

    fn collect_leaves(&self, node: NodeId, out: &mut Vec<NodeId>) {
        let children = &self.nodes[node].children;
        if children.is_empty() {
            out.push(node);
            return;
        }
        for &child in children {
            self.collect_leaves(child, out);
        }
    }

    /// All node ids, in a deterministic post-order (children before parent),
    /// used by the SMTree's bottom-up `update` (§4.3).
    pub fn postorder(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        if let Some(root) = self.root {
            self.collect_postorder(root, &mut out);
        }
        out
    }

    fn collect_postorder(&self, node: NodeId, out: &mut Vec<NodeId>) {
        for &child in &self.nodes[node].children {
            self.collect_postorder(child, out);
        }
        out.push(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_leaf_tree() {
        let mut t: PhylogenyTree<()> = PhylogenyTree::new();
        let root = t.set_root(None);
        assert_eq!(t.leaves(), vec![root]);
    }

    #[test]
    fn leaves_are_first_child_first() {
        let mut t: PhylogenyTree<char> = PhylogenyTree::new();
        let root = t.set_root(None);
        let a = t.append_child(root, Some('a'));
        let b = t.append_child(root, Some('b'));
        let c1 = t.append_child(a, Some('1'));
        let c2 = t.append_child(a, Some('2'));
        let d = t.append_child(b, Some('3'));
        assert_eq!(t.leaves(), vec![c1, c2, d]);
    }

    #[test]
    fn postorder_visits_children_before_parent() {
        let mut t: PhylogenyTree<()> = PhylogenyTree::new();
        let root = t.set_root(None);
        let a = t.append_child(root, None);
        let _b = t.append_child(root, None);
        let _c1 = t.append_child(a, None);
        let order = t.postorder();
        assert_eq!(*order.last().unwrap(), root);
        let a_pos = order.iter().position(|&n| n == a).unwrap();
        let c1_pos = order.iter().position(|&n| n == _c1).unwrap();
        assert!(c1_pos < a_pos);
    }

    #[test]
    fn clear_resets_tree() {
        let mut t: PhylogenyTree<()> = PhylogenyTree::new();
        let root = t.set_root(None);
        t.append_child(root, None);
        t.clear();
        assert!(t.is_empty());
        assert_eq!(t.root(), None);
    }
}
