use core::fmt;

use crate::Balance;
use crate::raw::Node;

/// A read-only view of one node of a [`RankBalancedTree`], for tools that
/// walk or draw the tree's shape.
///
/// Nodes hold no link to their parent. A consumer that needs one keeps its
/// own path while descending from [`RankBalancedTree::root`].
///
/// # Examples
///
/// ```
/// use edit_tree::{Balance, RankBalancedTree};
///
/// let doc = RankBalancedTree::from("abc");
/// let root = doc.root().unwrap();
/// assert_eq!(root.data(), 'b');
/// assert_eq!(root.rank(), 1);
/// assert_eq!(root.balance(), Balance::Even);
/// assert!(root.has_left_child() && root.has_right_child());
/// assert!(root.left().unwrap().is_leaf());
/// ```
///
/// [`RankBalancedTree`]: crate::RankBalancedTree
/// [`RankBalancedTree::root`]: crate::RankBalancedTree::root
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    node: &'a Node,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(node: &'a Node) -> Self {
        Self { node }
    }

    /// The character stored at this node.
    #[must_use]
    pub fn data(self) -> char {
        self.node.data
    }

    /// The number of nodes in this node's left subtree.
    #[must_use]
    pub fn rank(self) -> usize {
        self.node.rank
    }

    #[must_use]
    pub fn balance(self) -> Balance {
        self.node.balance
    }

    #[must_use]
    pub fn left(self) -> Option<NodeRef<'a>> {
        self.node.left.node().map(NodeRef::new)
    }

    #[must_use]
    pub fn right(self) -> Option<NodeRef<'a>> {
        self.node.right.node().map(NodeRef::new)
    }

    #[must_use]
    pub fn has_left_child(self) -> bool {
        self.node.has_left_child()
    }

    #[must_use]
    pub fn has_right_child(self) -> bool {
        self.node.has_right_child()
    }

    #[must_use]
    pub fn is_leaf(self) -> bool {
        self.node.is_leaf()
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("data", &self.node.data)
            .field("rank", &self.node.rank)
            .field("balance", &self.node.balance)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::RankBalancedTree;
    use alloc::vec::Vec;

    // Walks the tree keeping an explicit path, the way a drawing tool would
    // recover parents.
    #[test]
    fn walk_with_explicit_path() {
        let doc = RankBalancedTree::from("abcdefg");
        let mut path = Vec::new();
        let mut current = doc.root();

        while let Some(node) = current {
            path.push(node.data());
            current = node.left();
        }

        assert_eq!(path, ['d', 'b', 'a']);
    }

    #[test]
    fn empty_tree_has_no_root() {
        assert!(RankBalancedTree::new().root().is_none());
    }

    #[test]
    fn one_sided_node() {
        let doc = RankBalancedTree::from("ab");
        let root = doc.root().unwrap();
        assert!(!root.has_left_child());
        assert!(root.has_right_child());
        assert!(root.left().is_none());
        assert_eq!(root.right().map(|n| n.data()), Some('b'));
        assert_eq!(alloc::format!("{root:?}"), "NodeRef { data: 'a', rank: 0, balance: RightHeavy, .. }");
    }
}
