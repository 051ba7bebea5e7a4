//! This crate exposes a Binary Search Tree (BST) over numeric keys that is
//! built balanced and can be explicitly rebalanced.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). A [`Tree`] built with [`Tree::from_keys`] has a
//! height of `O(lg N)`. Inserts and deletes don't restructure the tree so they can make it taller;
//! [`Tree::rebalance`] rebuilds it from scratch to get back to `O(lg N)`.
//!
//! The tree can be walked in level, pre, post, and in order, either lazily through iterators
//! (see [`iter`]) or by handing a callback to [`Tree::level_order`] and friends.

#![deny(missing_docs)]

pub mod error;
pub mod iter;
pub mod node;
pub mod tree;

pub use error::{Error, Order};
pub use node::Node;
pub use tree::{Tree, Visit};

/// The type of key stored in a [`Tree`].
pub type Key = i64;
