use core::fmt;

/// The sign of `height(left) - height(right)` for one node.
///
/// A tree whose every node carries one of these three codes, and carries the
/// correct one, is height-balanced: no node's subtrees differ in height by
/// more than one.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Balance {
    /// The left subtree is exactly one level taller.
    LeftHeavy,
    /// Both subtrees have the same height.
    #[default]
    Even,
    /// The right subtree is exactly one level taller.
    RightHeavy,
}

impl Balance {
    /// Returns the code for two subtree heights, or `None` if they differ by
    /// more than one.
    pub(crate) fn from_heights(left: usize, right: usize) -> Option<Self> {
        match left.abs_diff(right) {
            0 => Some(Balance::Even),
            1 if left > right => Some(Balance::LeftHeavy),
            1 => Some(Balance::RightHeavy),
            _ => None,
        }
    }

    /// The single-character symbol used by debug strings.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Balance::LeftHeavy => '/',
            Balance::Even => '=',
            Balance::RightHeavy => '\\',
        }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use proptest::prelude::*;

    #[test]
    fn symbols() {
        assert_eq!(Balance::LeftHeavy.to_string(), "/");
        assert_eq!(Balance::Even.to_string(), "=");
        assert_eq!(Balance::RightHeavy.to_string(), "\\");
    }

    #[test]
    fn default_is_even() {
        assert_eq!(Balance::default(), Balance::Even);
    }

    proptest! {
        #[test]
        fn from_heights_matches_difference(left in 0usize..64, right in 0usize..64) {
            #[allow(clippy::cast_possible_wrap)]
            let expected = match left as isize - right as isize {
                1 => Some(Balance::LeftHeavy),
                0 => Some(Balance::Even),
                -1 => Some(Balance::RightHeavy),
                _ => None,
            };
            prop_assert_eq!(Balance::from_heights(left, right), expected);
        }
    }
}
