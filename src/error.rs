use thiserror::Error;

/// Errors returned by the positional operations of [`RankBalancedTree`].
///
/// The tree is never modified by a call that returns an error.
///
/// [`RankBalancedTree`]: crate::RankBalancedTree
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum Error {
    /// A position (or the last position of a range) falls outside the valid
    /// bounds of the tree for the requested operation.
    #[error("position {pos} is out of range for a tree of length {len}")]
    OutOfRange {
        /// The rejected position.
        pos: usize,
        /// The length of the tree when the call was made.
        len: usize,
    },
}
