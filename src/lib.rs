//! A rank-augmented, height-balanced binary tree for text editing.
//!
//! This crate provides [`RankBalancedTree`], which stores a document as a
//! sequence of characters in an AVL tree. Instead of comparison keys, every
//! node carries its *rank*: the number of nodes in its left subtree. Ranks
//! turn a document position into a root-to-leaf descent, so positional
//! operations cost O(log n):
//!
//! - [`insert`](RankBalancedTree::insert) / [`push`](RankBalancedTree::push) - Add a character at a position
//! - [`remove`](RankBalancedTree::remove) - Delete the character at a position
//! - [`get`](RankBalancedTree::get) / [`get_range`](RankBalancedTree::get_range) - Read a character or a substring
//!
//! # Example
//!
//! ```
//! use edit_tree::RankBalancedTree;
//!
//! let mut doc = RankBalancedTree::from("abcdefg");
//! assert_eq!(doc.get_range(2, 3).unwrap(), "cde");
//!
//! doc.insert(0, '>').unwrap();
//! assert_eq!(doc.remove(4), Ok('d'));
//! assert_eq!(doc.to_string(), ">abcefg");
//!
//! // The structural invariants can be checked at any time.
//! assert!(doc.ranks_match_left_subtree_size());
//! assert!(doc.balance_codes_are_correct());
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **O(log n) positional edits** - Ranks and balance codes are updated in O(1) per rotation
//! - **O(n) bulk construction** - `From<&str>` builds a balanced tree without rotating
//! - **Diagnostics** - Rank and balance strings plus brute-force validators for testing
//!
//! # Implementation
//!
//! A subtree is either empty or a boxed node that exclusively owns its two
//! children; there are no parent pointers. Recursive insert and remove
//! routines take a subtree by value and hand back the rebuilt subtree along
//! with the number of rotations performed and whether its height changed.
//! The tree handle folds those results into its cached length and rotation
//! count.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod balance;
mod error;
mod raw;

pub mod rank_balanced_tree;

pub use balance::Balance;
pub use error::Error;
pub use rank_balanced_tree::{Chars, NodeRef, RankBalancedTree};
