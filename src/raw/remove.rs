use alloc::boxed::Box;
use core::cmp::Ordering;
use core::mem;

use super::node::{Node, Rebuilt, Removal, Subtree};
use crate::Balance;

impl Subtree {
    /// Removes the node at in-order position `pos` of this subtree.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not less than the number of nodes in the subtree.
    pub(crate) fn remove(self, pos: usize) -> Removal {
        match self {
            Subtree::Node(node) => node.remove(pos),
            Subtree::Empty => panic!("`Subtree::remove()` - `pos` is past the end of the subtree!"),
        }
    }
}

impl Node {
    fn remove(mut self: Box<Self>, pos: usize) -> Removal {
        match pos.cmp(&self.rank) {
            Ordering::Less => {
                self.rank -= 1;
                let Removal { rebuilt: child, removed } = mem::take(&mut self.left).remove(pos);
                self.left = child.root;
                let rebuilt = if child.height_changed {
                    self.after_left_shrink(child.rotations)
                } else {
                    Rebuilt::unchanged(self, child.rotations)
                };
                Removal { rebuilt, removed }
            }
            Ordering::Greater => {
                let Removal { rebuilt: child, removed } = mem::take(&mut self.right).remove(pos - self.rank - 1);
                self.right = child.root;
                let rebuilt = if child.height_changed {
                    self.after_right_shrink(child.rotations)
                } else {
                    Rebuilt::unchanged(self, child.rotations)
                };
                Removal { rebuilt, removed }
            }
            Ordering::Equal => self.remove_root(),
        }
    }

    fn remove_root(mut self: Box<Self>) -> Removal {
        let removed = self.data;

        let rebuilt = match (mem::take(&mut self.left), mem::take(&mut self.right)) {
            (Subtree::Empty, Subtree::Empty) => Rebuilt::changed(Subtree::Empty, 0),
            (only @ Subtree::Node(_), Subtree::Empty) | (Subtree::Empty, only @ Subtree::Node(_)) => {
                Rebuilt::changed(only, 0)
            }
            (left, right) => {
                // Refill this slot with the in-order successor: position 0 of the right subtree.
                self.left = left;
                let Removal {
                    rebuilt: child,
                    removed: successor,
                } = right.remove(0);
                self.data = successor;
                self.right = child.root;
                if child.height_changed {
                    self.after_right_shrink(child.rotations)
                } else {
                    Rebuilt::unchanged(self, child.rotations)
                }
            }
        };

        Removal { rebuilt, removed }
    }

    // Unlike insertion, a rotation here may leave the subtree shorter, so
    // propagation continues unless the rotated child was `Even`.
    fn after_left_shrink(mut self: Box<Self>, rotations: usize) -> Rebuilt {
        match self.balance {
            Balance::Even => {
                self.balance = Balance::RightHeavy;
                Rebuilt::unchanged(self, rotations)
            }
            Balance::LeftHeavy => {
                self.balance = Balance::Even;
                Rebuilt::changed(self, rotations)
            }
            Balance::RightHeavy => {
                let fixed = self.rebalance_right_heavy();
                Rebuilt {
                    root: fixed.node.into(),
                    rotations: rotations + fixed.rotations,
                    height_changed: fixed.shortened,
                }
            }
        }
    }

    fn after_right_shrink(mut self: Box<Self>, rotations: usize) -> Rebuilt {
        match self.balance {
            Balance::Even => {
                self.balance = Balance::LeftHeavy;
                Rebuilt::unchanged(self, rotations)
            }
            Balance::RightHeavy => {
                self.balance = Balance::Even;
                Rebuilt::changed(self, rotations)
            }
            Balance::LeftHeavy => {
                let fixed = self.rebalance_left_heavy();
                Rebuilt {
                    root: fixed.node.into(),
                    rotations: rotations + fixed.rotations,
                    height_changed: fixed.shortened,
                }
            }
        }
    }
}
