use alloc::boxed::Box;
use alloc::string::String;
use core::cmp::Ordering;

use crate::Balance;

/// A subtree: either nothing, or a node that owns its two children.
///
/// The empty case carries no data and is never mutated in place; every
/// routine that reshapes the tree matches on the variant instead.
#[derive(Clone, Debug, Default)]
pub(crate) enum Subtree {
    #[default]
    Empty,
    Node(Box<Node>),
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) data: char,
    pub(crate) left: Subtree,
    pub(crate) right: Subtree,
    // Number of nodes in `left`.
    pub(crate) rank: usize,
    pub(crate) balance: Balance,
}

/// What one level of a recursive insert or remove hands back to its caller.
pub(crate) struct Rebuilt {
    /// The (possibly new) root of the subtree that was operated on.
    pub(crate) root: Subtree,
    /// Rotations performed at or below this level.
    pub(crate) rotations: usize,
    /// Whether the subtree's height differs from its height before the call.
    pub(crate) height_changed: bool,
}

/// Result of removing one character from a subtree.
pub(crate) struct Removal {
    pub(crate) rebuilt: Rebuilt,
    pub(crate) removed: char,
}

impl Rebuilt {
    pub(crate) fn changed(root: impl Into<Subtree>, rotations: usize) -> Self {
        Self {
            root: root.into(),
            rotations,
            height_changed: true,
        }
    }

    pub(crate) fn unchanged(root: impl Into<Subtree>, rotations: usize) -> Self {
        Self {
            root: root.into(),
            rotations,
            height_changed: false,
        }
    }
}

impl From<Box<Node>> for Subtree {
    fn from(node: Box<Node>) -> Self {
        Subtree::Node(node)
    }
}

impl Node {
    /// Creates a detached leaf holding `data`.
    pub(crate) fn leaf(data: char) -> Box<Self> {
        Box::new(Self {
            data,
            left: Subtree::Empty,
            right: Subtree::Empty,
            rank: 0,
            balance: Balance::Even,
        })
    }

    pub(crate) fn has_left_child(&self) -> bool {
        !self.left.is_empty()
    }

    pub(crate) fn has_right_child(&self) -> bool {
        !self.right.is_empty()
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

impl Subtree {
    /// Returns true if this subtree holds no nodes.
    pub(crate) fn is_empty(&self) -> bool {
        matches!(self, Subtree::Empty)
    }

    /// Returns the root node, if any.
    pub(crate) fn node(&self) -> Option<&Node> {
        match self {
            Subtree::Node(node) => Some(node),
            Subtree::Empty => None,
        }
    }

    /// Returns the root node, panicking if the subtree is empty.
    pub(crate) fn as_node(&self) -> &Node {
        match self {
            Subtree::Node(node) => node,
            Subtree::Empty => panic!("expected a non-empty subtree"),
        }
    }

    /// Returns the root node mutably, panicking if the subtree is empty.
    pub(crate) fn as_node_mut(&mut self) -> &mut Node {
        match self {
            Subtree::Node(node) => node,
            Subtree::Empty => panic!("expected a non-empty subtree"),
        }
    }

    /// Takes the root node out of the subtree, panicking if the subtree is empty.
    pub(crate) fn into_node(self) -> Box<Node> {
        match self {
            Subtree::Node(node) => node,
            Subtree::Empty => panic!("expected a non-empty subtree"),
        }
    }

    /// Returns the node at in-order position `pos`, or `None` if `pos` is past the end.
    ///
    /// Descends by rank alone, so this is O(height).
    pub(crate) fn get(&self, mut pos: usize) -> Option<&Node> {
        let mut current = self;

        while let Subtree::Node(node) = current {
            match pos.cmp(&node.rank) {
                Ordering::Less => current = &node.left,
                Ordering::Equal => return Some(node),
                Ordering::Greater => {
                    pos -= node.rank + 1;
                    current = &node.right;
                }
            }
        }

        None
    }

    /// Appends the characters at in-order positions `begin..=end` to `out`.
    ///
    /// Only subtrees that overlap the range are entered, so the cost is
    /// O(height + end - begin).
    pub(crate) fn collect_range(&self, begin: usize, end: usize, out: &mut String) {
        let Subtree::Node(node) = self else {
            return;
        };

        if begin < node.rank {
            node.left.collect_range(begin, end, out);
        }

        if begin <= node.rank && node.rank <= end {
            out.push(node.data);
        }

        if end > node.rank {
            let skipped = node.rank + 1;
            node.right.collect_range(begin.saturating_sub(skipped), end - skipped, out);
        }
    }

    /// Builds a balanced subtree whose in-order sequence is `chars`.
    ///
    /// Returns the subtree and its height in levels (0 for an empty slice).
    /// Every node is created exactly once and its rank and balance are
    /// known from the split itself, so this is O(n).
    pub(crate) fn build(chars: &[char]) -> (Self, usize) {
        let Some(last) = chars.len().checked_sub(1) else {
            return (Subtree::Empty, 0);
        };

        let mid = last / 2;
        let (left, left_height) = Self::build(&chars[..mid]);
        let (right, right_height) = Self::build(&chars[mid + 1..]);

        // Sibling halves differ in length by at most one, so their heights do too.
        let balance = Balance::from_heights(left_height, right_height)
            .expect("`Subtree::build()` - midpoint halves differ in height by more than one!");

        let node = Box::new(Node {
            data: chars[mid],
            left,
            right,
            rank: mid,
            balance,
        });

        (Subtree::Node(node), left_height.max(right_height) + 1)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    // The empty variant lives in the null-pointer niche of the box.
    assert_eq_size!(Subtree, Box<Node>);
    assert_eq_size!(Subtree, Option<Box<Node>>);

    fn in_order(subtree: &Subtree, out: &mut String) {
        if let Subtree::Node(node) = subtree {
            in_order(&node.left, out);
            out.push(node.data);
            in_order(&node.right, out);
        }
    }

    #[test]
    fn build_empty() {
        let (subtree, height) = Subtree::build(&[]);
        assert!(subtree.is_empty());
        assert_eq!(height, 0);
        assert!(subtree.get(0).is_none());
    }

    #[test]
    fn build_three_is_full() {
        let (subtree, height) = Subtree::build(&['a', 'b', 'c']);
        let root = subtree.as_node();
        assert_eq!(height, 2);
        assert_eq!(root.data, 'b');
        assert_eq!(root.rank, 1);
        assert_eq!(root.balance, Balance::Even);
        assert!(root.left.as_node().is_leaf());
        assert!(root.right.as_node().is_leaf());
    }

    #[test]
    fn build_two_leans_right() {
        let (subtree, _) = Subtree::build(&['a', 'b']);
        let root = subtree.as_node();
        assert_eq!(root.data, 'a');
        assert_eq!(root.rank, 0);
        assert_eq!(root.balance, Balance::RightHeavy);
        assert!(!root.has_left_child());
        assert!(root.has_right_child());
    }

    #[test]
    fn build_eight_leans_right_with_two_children() {
        // Splits 3 | 4, giving child heights of 2 and 3 levels.
        let chars: Vec<char> = "abcdefgh".chars().collect();
        let (subtree, height) = Subtree::build(&chars);
        let root = subtree.as_node();
        assert_eq!(height, 4);
        assert_eq!(root.data, 'd');
        assert_eq!(root.rank, 3);
        assert_eq!(root.balance, Balance::RightHeavy);
    }

    #[test]
    fn leaf_shape() {
        let leaf = Node::leaf('x');
        assert!(leaf.is_leaf());
        assert_eq!(leaf.rank, 0);
        assert_eq!(leaf.balance, Balance::Even);
    }

    #[test]
    #[should_panic(expected = "expected a non-empty subtree")]
    fn as_node_on_empty() {
        let _ = Subtree::Empty.as_node();
    }

    proptest! {
        #[test]
        fn build_preserves_sequence(text in "[a-z]{0,200}") {
            let chars: Vec<char> = text.chars().collect();
            let (subtree, _) = Subtree::build(&chars);

            let mut rebuilt = String::new();
            in_order(&subtree, &mut rebuilt);
            prop_assert_eq!(&rebuilt, &text);

            for (pos, &ch) in chars.iter().enumerate() {
                prop_assert_eq!(subtree.get(pos).map(|node| node.data), Some(ch));
            }
            prop_assert!(subtree.get(chars.len()).is_none());
        }

        #[test]
        fn collect_range_matches_slice(text in "[a-z]{1,120}", a in any::<prop::sample::Index>(), b in any::<prop::sample::Index>()) {
            let chars: Vec<char> = text.chars().collect();
            let (subtree, _) = Subtree::build(&chars);
            let (begin, end) = {
                let (x, y) = (a.index(chars.len()), b.index(chars.len()));
                (x.min(y), x.max(y))
            };

            let mut out = String::new();
            subtree.collect_range(begin, end, &mut out);
            let expected: String = chars[begin..=end].iter().collect();
            prop_assert_eq!(out, expected);
        }
    }
}
