use alloc::boxed::Box;
use core::mem;

use super::node::{Node, Rebuilt, Subtree};
use crate::Balance;

impl Subtree {
    /// Inserts `data` so that it becomes in-order position `pos` of this subtree.
    ///
    /// `pos` must be at most the number of nodes in the subtree.
    pub(crate) fn insert(self, pos: usize, data: char) -> Rebuilt {
        match self {
            Subtree::Empty => Rebuilt::changed(Node::leaf(data), 0),
            Subtree::Node(node) => node.insert(pos, data),
        }
    }
}

impl Node {
    fn insert(mut self: Box<Self>, pos: usize, data: char) -> Rebuilt {
        if pos <= self.rank {
            self.rank += 1;
            let child = mem::take(&mut self.left).insert(pos, data);
            self.left = child.root;
            if child.height_changed {
                self.after_left_growth(child.rotations)
            } else {
                Rebuilt::unchanged(self, child.rotations)
            }
        } else {
            let child = mem::take(&mut self.right).insert(pos - self.rank - 1, data);
            self.right = child.root;
            if child.height_changed {
                self.after_right_growth(child.rotations)
            } else {
                Rebuilt::unchanged(self, child.rotations)
            }
        }
    }

    // A single rotation always absorbs the growth of one insertion, so
    // propagation stops at the first node that rotates.
    fn after_left_growth(mut self: Box<Self>, rotations: usize) -> Rebuilt {
        match self.balance {
            Balance::Even => {
                self.balance = Balance::LeftHeavy;
                Rebuilt::changed(self, rotations)
            }
            Balance::RightHeavy => {
                self.balance = Balance::Even;
                Rebuilt::unchanged(self, rotations)
            }
            Balance::LeftHeavy => {
                let fixed = self.rebalance_left_heavy();
                Rebuilt::unchanged(fixed.node, rotations + fixed.rotations)
            }
        }
    }

    fn after_right_growth(mut self: Box<Self>, rotations: usize) -> Rebuilt {
        match self.balance {
            Balance::Even => {
                self.balance = Balance::RightHeavy;
                Rebuilt::changed(self, rotations)
            }
            Balance::LeftHeavy => {
                self.balance = Balance::Even;
                Rebuilt::unchanged(self, rotations)
            }
            Balance::RightHeavy => {
                let fixed = self.rebalance_right_heavy();
                Rebuilt::unchanged(fixed.node, rotations + fixed.rotations)
            }
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn insert_all(positions: &[(usize, char)]) -> (Subtree, usize) {
        let mut root = Subtree::Empty;
        let mut rotations = 0;
        for &(pos, ch) in positions {
            let rebuilt = root.insert(pos, ch);
            root = rebuilt.root;
            rotations += rebuilt.rotations;
        }
        (root, rotations)
    }

    #[test]
    fn insert_into_empty_grows() {
        let rebuilt = Subtree::Empty.insert(0, 'a');
        assert!(rebuilt.height_changed);
        assert_eq!(rebuilt.rotations, 0);
        assert_eq!(rebuilt.root.as_node().data, 'a');
    }

    #[test]
    fn second_insert_leans() {
        let (root, rotations) = insert_all(&[(0, 'b'), (0, 'a')]);
        let node = root.as_node();
        assert_eq!(rotations, 0);
        assert_eq!((node.data, node.rank, node.balance), ('b', 1, Balance::LeftHeavy));
    }

    #[test]
    fn filling_the_short_side_stops_growth() {
        let (root, _) = insert_all(&[(0, 'b'), (0, 'a')]);
        let rebuilt = root.insert(2, 'c');
        assert!(!rebuilt.height_changed);
        assert_eq!(rebuilt.root.as_node().balance, Balance::Even);
    }

    #[test]
    fn third_front_insert_rotates_once() {
        let (root, rotations) = insert_all(&[(0, 'c'), (0, 'b'), (0, 'a')]);
        let node = root.as_node();
        assert_eq!(rotations, 1);
        assert_eq!((node.data, node.rank, node.balance), ('b', 1, Balance::Even));
    }

    #[test]
    fn zig_zag_insert_rotates_twice() {
        let (root, rotations) = insert_all(&[(0, 'a'), (1, 'c'), (1, 'b')]);
        let node = root.as_node();
        assert_eq!(rotations, 2);
        assert_eq!((node.data, node.rank, node.balance), ('b', 1, Balance::Even));
    }
}
