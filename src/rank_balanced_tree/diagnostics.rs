use alloc::string::String;
use core::fmt::Write as _;

use super::RankBalancedTree;

impl RankBalancedTree {
    /// Returns the nodes in pre-order as `<char><rank>` tokens, e.g. `[b1, a0, c0]`.
    ///
    /// Useful for checking ranks by eye: two trees with the same text can
    /// have different rank strings.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::RankBalancedTree;
    ///
    /// let mut doc = RankBalancedTree::from_char('a');
    /// doc.push('b');
    /// assert_eq!(doc.to_rank_string(), "[a0, b0]");
    /// ```
    #[must_use]
    pub fn to_rank_string(&self) -> String {
        self.pre_order_string(false)
    }

    /// Like [`to_rank_string`], with each token followed by its balance code:
    /// `/` left-heavy, `=` even, `\` right-heavy.
    ///
    /// [`to_rank_string`]: RankBalancedTree::to_rank_string
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::RankBalancedTree;
    ///
    /// let mut doc = RankBalancedTree::from_char('b');
    /// doc.insert(0, 'a').unwrap();
    /// assert_eq!(doc.to_debug_string(), "[b1/, a0=]");
    /// ```
    #[must_use]
    pub fn to_debug_string(&self) -> String {
        self.pre_order_string(true)
    }

    fn pre_order_string(&self, with_balance: bool) -> String {
        let mut out = String::from("[");
        let mut first = true;

        self.root.pre_order(&mut |node| {
            if !first {
                out.push_str(", ");
            }
            first = false;

            // Writing into a `String` cannot fail.
            let _ = write!(out, "{}{}", node.data, node.rank);
            if with_balance {
                out.push(node.balance.symbol());
            }
        });

        out.push(']');
        out
    }

    /// Returns true if every node's rank equals the true size of its left subtree.
    ///
    /// Sizes are counted, not read from ranks, in a single pass.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn ranks_match_left_subtree_size(&self) -> bool {
        self.root.checked_size().is_some()
    }

    /// Returns true if every node's balance code matches the true height
    /// difference of its children.
    ///
    /// Heights are measured, not read from balance codes, in a single pass.
    /// A tree that passes is also height-balanced.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn balance_codes_are_correct(&self) -> bool {
        self.root.checked_height().is_some()
    }

    /// Returns the height of the tree (edges on the longest root-to-leaf
    /// path), or `None` if it is empty.
    ///
    /// Follows balance codes down a single path, so the answer is only as
    /// good as the codes; see [`balance_codes_are_correct`].
    ///
    /// [`balance_codes_are_correct`]: RankBalancedTree::balance_codes_are_correct
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::RankBalancedTree;
    ///
    /// assert_eq!(RankBalancedTree::new().fast_height(), None);
    /// assert_eq!(RankBalancedTree::from("abc").fast_height(), Some(1));
    /// ```
    #[must_use]
    pub fn fast_height(&self) -> Option<usize> {
        self.root.fast_height().checked_sub(1)
    }

    /// Returns the height of the tree by visiting every node, or `None` if it is empty.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn slow_height(&self) -> Option<usize> {
        self.root.slow_height().checked_sub(1)
    }

    /// Counts the nodes by visiting every one of them.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn slow_size(&self) -> usize {
        self.root.slow_size()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn empty_strings() {
        let tree = RankBalancedTree::new();
        assert_eq!(tree.to_rank_string(), "[]");
        assert_eq!(tree.to_debug_string(), "[]");
        assert!(tree.ranks_match_left_subtree_size());
        assert!(tree.balance_codes_are_correct());
        assert_eq!(tree.slow_height(), None);
        assert_eq!(tree.slow_size(), 0);
    }

    #[test]
    fn three_node_strings() {
        let tree = RankBalancedTree::from("abc");
        assert_eq!(tree.to_rank_string(), "[b1, a0, c0]");
        assert_eq!(tree.to_debug_string(), "[b1=, a0=, c0=]");
    }

    #[test]
    fn right_lean_renders_backslash() {
        let tree = RankBalancedTree::from("ab");
        assert_eq!(tree.to_debug_string(), "[a0\\, b0=]");
    }

    #[test]
    fn heights_agree() {
        let tree = RankBalancedTree::from("abcdefghijklmnop");
        assert_eq!(tree.fast_height(), Some(4));
        assert_eq!(tree.slow_height(), Some(4));
        assert_eq!(tree.slow_size(), 16);
    }
}
