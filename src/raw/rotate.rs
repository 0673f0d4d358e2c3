use alloc::boxed::Box;
use core::mem;

use log::trace;

use super::node::{Node, Subtree};
use crate::Balance;

/// Result of restoring balance at a node whose one side is two levels taller
/// than the other.
pub(crate) struct Rebalanced {
    pub(crate) node: Box<Node>,
    pub(crate) rotations: usize,
    /// False only when the overloaded child was `Even`: the rotation then
    /// leaves the subtree as tall as it was before it became unbalanced.
    pub(crate) shortened: bool,
}

impl Node {
    /// Promotes the left child into this node's place.
    ///
    /// Both nodes come out `Even`; callers with other shapes fix the codes
    /// afterwards.
    pub(crate) fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        trace!("rotate right at {:?}", self.data);

        let mut child = mem::take(&mut self.left).into_node();
        self.left = mem::take(&mut child.right);
        // Everything that moved up with the child was to the left of `self`.
        self.rank -= child.rank + 1;
        self.balance = Balance::Even;
        child.balance = Balance::Even;
        child.right = Subtree::Node(self);
        child
    }

    /// Promotes the right child into this node's place.
    ///
    /// Both nodes come out `Even`; callers with other shapes fix the codes
    /// afterwards.
    pub(crate) fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        trace!("rotate left at {:?}", self.data);

        let mut child = mem::take(&mut self.right).into_node();
        self.right = mem::take(&mut child.left);
        // The child now has `self` and all of its left subtree on its left.
        child.rank += self.rank + 1;
        self.balance = Balance::Even;
        child.balance = Balance::Even;
        child.left = Subtree::Node(self);
        child
    }

    /// Rebalances a node whose left subtree is two levels taller than its right.
    pub(crate) fn rebalance_left_heavy(mut self: Box<Self>) -> Rebalanced {
        match self.left.as_node().balance {
            Balance::LeftHeavy => Rebalanced {
                node: self.rotate_right(),
                rotations: 1,
                shortened: true,
            },
            Balance::RightHeavy => {
                let grandchild = self.left.as_node().right.as_node().balance;
                let child = mem::take(&mut self.left).into_node();
                self.left = Subtree::Node(child.rotate_left());

                let mut node = self.rotate_right();
                node.settle_double_rotation(grandchild);
                Rebalanced {
                    node,
                    rotations: 2,
                    shortened: true,
                }
            }
            Balance::Even => {
                let mut node = self.rotate_right();
                node.balance = Balance::RightHeavy;
                node.right.as_node_mut().balance = Balance::LeftHeavy;
                Rebalanced {
                    node,
                    rotations: 1,
                    shortened: false,
                }
            }
        }
    }

    /// Rebalances a node whose right subtree is two levels taller than its left.
    pub(crate) fn rebalance_right_heavy(mut self: Box<Self>) -> Rebalanced {
        match self.right.as_node().balance {
            Balance::RightHeavy => Rebalanced {
                node: self.rotate_left(),
                rotations: 1,
                shortened: true,
            },
            Balance::LeftHeavy => {
                let grandchild = self.right.as_node().left.as_node().balance;
                let child = mem::take(&mut self.right).into_node();
                self.right = Subtree::Node(child.rotate_right());

                let mut node = self.rotate_left();
                node.settle_double_rotation(grandchild);
                Rebalanced {
                    node,
                    rotations: 2,
                    shortened: true,
                }
            }
            Balance::Even => {
                let mut node = self.rotate_left();
                node.balance = Balance::LeftHeavy;
                node.left.as_node_mut().balance = Balance::RightHeavy;
                Rebalanced {
                    node,
                    rotations: 1,
                    shortened: false,
                }
            }
        }
    }

    // `self` is the former grandchild; its old lean decides which of its new
    // children received the shorter of its old subtrees.
    fn settle_double_rotation(&mut self, grandchild: Balance) {
        let (left, right) = match grandchild {
            Balance::LeftHeavy => (Balance::Even, Balance::RightHeavy),
            Balance::Even => (Balance::Even, Balance::Even),
            Balance::RightHeavy => (Balance::LeftHeavy, Balance::Even),
        };

        self.balance = Balance::Even;
        self.left.as_node_mut().balance = left;
        self.right.as_node_mut().balance = right;
    }
}
