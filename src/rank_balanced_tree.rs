use alloc::string::String;
use core::fmt::{self, Write as _};
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::mem;
use core::ops::Index;

use log::debug;
use smallvec::SmallVec;

use crate::Error;
use crate::raw::{Node, Subtree};

mod diagnostics;
mod node_ref;

pub use node_ref::NodeRef;

/// A document of characters stored in a rank-augmented, height-balanced
/// (AVL) binary tree.
///
/// Each node holds one character and its *rank*, the number of nodes in its
/// left subtree. Positions are located by comparing against ranks rather
/// than keys, so inserting, removing, and reading the character at any
/// position are all O(log n), however the document was built.
///
/// In-order traversal of the tree always yields the document text.
///
/// # Examples
///
/// ```
/// use edit_tree::RankBalancedTree;
///
/// let mut doc = RankBalancedTree::from("helo");
/// doc.insert(3, 'l').unwrap();
/// doc.push('!');
/// assert_eq!(doc.to_string(), "hello!");
///
/// assert_eq!(doc.get(1), Ok('e'));
/// assert_eq!(doc.get_range(1, 3).unwrap(), "ell");
///
/// assert_eq!(doc.remove(5), Ok('!'));
/// assert_eq!(doc.len(), 5);
/// ```
///
/// Every fallible operation validates its position first and leaves the tree
/// untouched on error:
///
/// ```
/// use edit_tree::{Error, RankBalancedTree};
///
/// let mut doc = RankBalancedTree::from("abc");
/// assert_eq!(doc.remove(3), Err(Error::OutOfRange { pos: 3, len: 3 }));
/// assert_eq!(doc.to_string(), "abc");
/// ```
pub struct RankBalancedTree {
    root: Subtree,
    len: usize,
    rotations: usize,
}

/// An in-order iterator over the characters of a [`RankBalancedTree`].
///
/// This `struct` is created by the [`chars`] method on [`RankBalancedTree`].
///
/// [`chars`]: RankBalancedTree::chars
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Chars<'a> {
    // Nodes whose left subtree has been emitted but which have not been emitted themselves.
    stack: SmallVec<[&'a Node; 32]>,
    remaining: usize,
}

impl RankBalancedTree {
    /// Makes a new, empty tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::RankBalancedTree;
    ///
    /// let doc = RankBalancedTree::new();
    /// assert!(doc.is_empty());
    /// assert_eq!(doc.to_rank_string(), "[]");
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: Subtree::Empty,
            len: 0,
            rotations: 0,
        }
    }

    /// Makes a tree holding the single character `ch`.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::RankBalancedTree;
    ///
    /// let doc = RankBalancedTree::from_char('x');
    /// assert_eq!(doc.len(), 1);
    /// assert_eq!(doc.to_rank_string(), "[x0]");
    /// ```
    #[must_use]
    pub fn from_char(ch: char) -> Self {
        Self {
            root: Subtree::Node(Node::leaf(ch)),
            len: 1,
            rotations: 0,
        }
    }

    /// Builds a balanced tree directly from a slice of characters.
    ///
    /// Each character becomes exactly one node and no rotations happen, so
    /// this is O(n) rather than the O(n log n) of repeated [`push`].
    ///
    /// [`push`]: RankBalancedTree::push
    fn from_slice(chars: &[char]) -> Self {
        let (root, height) = Subtree::build(chars);
        debug!("built tree of {} characters with height {}", chars.len(), height);
        Self {
            root,
            len: chars.len(),
            rotations: 0,
        }
    }

    /// Returns the number of characters in the tree.
    ///
    /// The count is maintained on every insert and remove, not recomputed.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no characters.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every character. The rotation count is kept.
    pub fn clear(&mut self) {
        self.root = Subtree::Empty;
        self.len = 0;
    }

    /// Returns the character at position `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `pos >= self.len()`.
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
    /// let doc = RankBalancedTree::from("abc");
    /// assert_eq!(doc.get(2), Ok('c'));
    /// assert!(doc.get(3).is_err());
    /// ```
    pub fn get(&self, pos: usize) -> Result<char, Error> {
        self.root.get(pos).map(|node| node.data).ok_or(self.out_of_range(pos))
    }

    /// Returns the `length` characters starting at position `pos`.
    ///
    /// Only the nodes that overlap the requested range (and their ancestors)
    /// are visited.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] unless both `pos` and the last requested
    /// position, `pos + length - 1`, are valid positions. An empty request
    /// at position 0 has no valid last position and is rejected; an empty
    /// request at any other valid position returns an empty string.
    ///
    /// # Complexity
    ///
    /// O(log n + length)
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::RankBalancedTree;
    ///
    /// let doc = RankBalancedTree::from("abcdefg");
    /// assert_eq!(doc.get_range(2, 3).unwrap(), "cde");
    /// assert!(doc.get_range(5, 3).is_err());
    /// ```
    pub fn get_range(&self, pos: usize, length: usize) -> Result<String, Error> {
        if pos >= self.len {
            return Err(self.out_of_range(pos));
        }

        let last = pos
            .checked_add(length)
            .and_then(|end| end.checked_sub(1))
            .filter(|&last| last < self.len)
            .ok_or(self.out_of_range(pos.saturating_add(length).saturating_sub(1)))?;

        let mut out = String::with_capacity(length);
        if length > 0 {
            self.root.collect_range(pos, last, &mut out);
        }
        Ok(out)
    }

    /// Appends `ch` to the end of the document.
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
    /// let mut doc = RankBalancedTree::new();
    /// doc.push('a');
    /// doc.push('b');
    /// assert_eq!(doc.to_string(), "ab");
    /// ```
    pub fn push(&mut self, ch: char) {
        self.insert_unchecked(self.len, ch);
    }

    /// Inserts `ch` so that it becomes the character at position `pos`,
    /// shifting everything from `pos` onwards one place right.
    ///
    /// Valid positions are `0..=self.len()`; inserting at `self.len()` appends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `pos > self.len()`.
    ///
    /// # Complexity
    ///
    /// O(log n), with at most one single or double rotation.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::RankBalancedTree;
    ///
    /// let mut doc = RankBalancedTree::from("ac");
    /// doc.insert(1, 'b').unwrap();
    /// assert_eq!(doc.to_string(), "abc");
    /// assert!(doc.insert(5, 'z').is_err());
    /// ```
    pub fn insert(&mut self, pos: usize, ch: char) -> Result<(), Error> {
        if pos > self.len {
            return Err(self.out_of_range(pos));
        }

        self.insert_unchecked(pos, ch);
        Ok(())
    }

    fn insert_unchecked(&mut self, pos: usize, ch: char) {
        let rebuilt = mem::take(&mut self.root).insert(pos, ch);
        self.root = rebuilt.root;
        self.rotations += rebuilt.rotations;
        self.len += 1;
    }

    /// Removes and returns the character at position `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `pos >= self.len()`.
    ///
    /// # Complexity
    ///
    /// O(log n). Unlike insertion, a removal may rotate at every level on the
    /// way back up.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::RankBalancedTree;
    ///
    /// let mut doc = RankBalancedTree::from("abc");
    /// assert_eq!(doc.remove(1), Ok('b'));
    /// assert_eq!(doc.to_string(), "ac");
    /// ```
    pub fn remove(&mut self, pos: usize) -> Result<char, Error> {
        if pos >= self.len {
            return Err(self.out_of_range(pos));
        }

        let removal = mem::take(&mut self.root).remove(pos);
        self.root = removal.rebuilt.root;
        self.rotations += removal.rebuilt.rotations;
        self.len -= 1;
        Ok(removal.removed)
    }

    /// Returns the number of rotations performed by this tree since it was
    /// created. A double rotation counts as two.
    ///
    /// Clones start again from zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::RankBalancedTree;
    ///
    /// let mut doc = RankBalancedTree::new();
    /// for ch in ['c', 'b', 'a'] {
    ///     doc.insert(0, ch).unwrap();
    /// }
    /// assert_eq!(doc.total_rotation_count(), 1);
    /// ```
    #[must_use]
    pub const fn total_rotation_count(&self) -> usize {
        self.rotations
    }

    /// Returns an iterator over the characters in document order.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::RankBalancedTree;
    ///
    /// let doc = RankBalancedTree::from("abc");
    /// let upper: String = doc.chars().map(|c| c.to_ascii_uppercase()).collect();
    /// assert_eq!(upper, "ABC");
    /// ```
    pub fn chars(&self) -> Chars<'_> {
        let mut chars = Chars {
            stack: SmallVec::new(),
            remaining: self.len,
        };
        chars.push_left_spine(&self.root);
        chars
    }

    /// Returns a read-only view of the root node, or `None` if the tree is empty.
    ///
    /// Intended for tools that draw or inspect the tree's shape.
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_>> {
        self.root.node().map(NodeRef::new)
    }

    fn out_of_range(&self, pos: usize) -> Error {
        Error::OutOfRange { pos, len: self.len }
    }
}

impl<'a> Chars<'a> {
    fn push_left_spine(&mut self, mut subtree: &'a Subtree) {
        while let Subtree::Node(node) = subtree {
            self.stack.push(node);
            subtree = &node.left;
        }
    }
}

impl Iterator for Chars<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.remaining -= 1;
        Some(node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Chars<'_> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl FusedIterator for Chars<'_> {}

impl fmt::Debug for Chars<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Deep-copies every node. The copy's rotation count starts at zero.
impl Clone for RankBalancedTree {
    fn clone(&self) -> Self {
        debug!("cloning tree of {} characters", self.len);
        Self {
            root: self.root.clone(),
            len: self.len,
            rotations: 0,
        }
    }
}

impl Default for RankBalancedTree {
    fn default() -> Self {
        Self::new()
    }
}

impl From<char> for RankBalancedTree {
    fn from(ch: char) -> Self {
        Self::from_char(ch)
    }
}

/// Builds the tree in O(n) without incremental insertion.
///
/// # Examples
///
/// ```
/// use edit_tree::RankBalancedTree;
///
/// let doc = RankBalancedTree::from("abc");
/// assert_eq!(doc.to_rank_string(), "[b1, a0, c0]");
/// ```
impl From<&str> for RankBalancedTree {
    fn from(text: &str) -> Self {
        text.chars().collect()
    }
}

impl FromIterator<char> for RankBalancedTree {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let chars: SmallVec<[char; 64]> = iter.into_iter().collect();
        Self::from_slice(&chars)
    }
}

impl Extend<char> for RankBalancedTree {
    fn extend<T: IntoIterator<Item = char>>(&mut self, iter: T) {
        for ch in iter {
            self.push(ch);
        }
    }
}

impl<'a> IntoIterator for &'a RankBalancedTree {
    type Item = char;
    type IntoIter = Chars<'a>;

    fn into_iter(self) -> Chars<'a> {
        self.chars()
    }
}

/// Indexes the document by position.
///
/// # Panics
///
/// Panics if `pos` is out of bounds.
impl Index<usize> for RankBalancedTree {
    type Output = char;

    fn index(&self, pos: usize) -> &char {
        &self.root.get(pos).expect("position out of bounds").data
    }
}

/// Writes the document text (the in-order traversal).
impl fmt::Display for RankBalancedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self {
            f.write_char(ch)?;
        }
        Ok(())
    }
}

impl fmt::Debug for RankBalancedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.chars()).finish()
    }
}

// Equality and hashing see only the document, never the shape.
impl PartialEq for RankBalancedTree {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.chars().eq(other.chars())
    }
}

impl Eq for RankBalancedTree {}

impl Hash for RankBalancedTree {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for ch in self {
            ch.hash(state);
        }
    }
}
