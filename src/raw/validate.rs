//! Brute-force measurements used to check the incrementally maintained
//! rank and balance fields. None of these trust the fields they verify,
//! except [`Subtree::fast_height`].

use super::node::{Node, Subtree};
use crate::Balance;

impl Subtree {
    /// Counts nodes by full traversal. O(n).
    pub(crate) fn slow_size(&self) -> usize {
        match self {
            Subtree::Empty => 0,
            Subtree::Node(node) => node.left.slow_size() + node.right.slow_size() + 1,
        }
    }

    /// Height in levels by full traversal (0 when empty). O(n).
    pub(crate) fn slow_height(&self) -> usize {
        match self {
            Subtree::Empty => 0,
            Subtree::Node(node) => node.left.slow_height().max(node.right.slow_height()) + 1,
        }
    }

    /// Height in levels, following the taller side as recorded by balance codes. O(log n).
    pub(crate) fn fast_height(&self) -> usize {
        let mut height = 0;
        let mut current = self;

        while let Subtree::Node(node) = current {
            height += 1;
            current = match node.balance {
                Balance::RightHeavy => &node.right,
                Balance::LeftHeavy | Balance::Even => &node.left,
            };
        }

        height
    }

    /// Returns the node count if every rank equals its left subtree's size,
    /// otherwise `None`. Single pass, O(n).
    pub(crate) fn checked_size(&self) -> Option<usize> {
        match self {
            Subtree::Empty => Some(0),
            Subtree::Node(node) => {
                let left = node.left.checked_size()?;
                let right = node.right.checked_size()?;
                (left == node.rank).then_some(left + right + 1)
            }
        }
    }

    /// Returns the height in levels if every balance code matches the true
    /// height difference of its children, otherwise `None`. Single pass, O(n).
    pub(crate) fn checked_height(&self) -> Option<usize> {
        match self {
            Subtree::Empty => Some(0),
            Subtree::Node(node) => {
                let left = node.left.checked_height()?;
                let right = node.right.checked_height()?;
                (Balance::from_heights(left, right)? == node.balance).then_some(left.max(right) + 1)
            }
        }
    }

    /// Visits every node in pre-order.
    pub(crate) fn pre_order<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        if let Subtree::Node(node) = self {
            visit(node);
            node.left.pre_order(visit);
            node.right.pre_order(visit);
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn sample() -> Subtree {
        let chars: Vec<char> = "abcdefghij".chars().collect();
        Subtree::build(&chars).0
    }

    #[test]
    fn measurements_agree_on_built_tree() {
        let subtree = sample();
        assert_eq!(subtree.slow_size(), 10);
        assert_eq!(subtree.checked_size(), Some(10));
        assert_eq!(subtree.slow_height(), 4);
        assert_eq!(subtree.fast_height(), 4);
        assert_eq!(subtree.checked_height(), Some(4));
    }

    #[test]
    fn wrong_rank_is_detected() {
        let mut subtree = sample();
        subtree.as_node_mut().right.as_node_mut().rank += 1;
        assert_eq!(subtree.checked_size(), None);
        assert_eq!(subtree.slow_size(), 10);
    }

    #[test]
    fn wrong_balance_is_detected() {
        let mut subtree = sample();
        let left = subtree.as_node_mut().left.as_node_mut();
        left.balance = match left.balance {
            Balance::Even => Balance::LeftHeavy,
            Balance::LeftHeavy | Balance::RightHeavy => Balance::Even,
        };
        assert_eq!(subtree.checked_height(), None);
    }

    #[test]
    fn empty_measurements() {
        let subtree = Subtree::Empty;
        assert_eq!(subtree.slow_size(), 0);
        assert_eq!(subtree.slow_height(), 0);
        assert_eq!(subtree.fast_height(), 0);
        assert_eq!(subtree.checked_size(), Some(0));
        assert_eq!(subtree.checked_height(), Some(0));
    }

    #[test]
    fn pre_order_visits_root_first() {
        let subtree = Subtree::build(&['a', 'b', 'c']).0;
        let mut seen = Vec::new();
        subtree.pre_order(&mut |node| seen.push(node.data));
        assert_eq!(seen, ['b', 'a', 'c']);
    }
}
