//! The node record every [`Tree`][crate::Tree] is made of.
//!
//! A `Node` only stores a key and owns its two optional subtrees. It has no behaviour of its own:
//! every structural change goes through the owning tree so the ordering invariant can't be broken
//! from the outside. Callers only ever see `&Node`, e.g. from [`Tree::find`][crate::Tree::find]
//! or from inside a traversal callback.

use std::fmt;

use crate::Key;

/// An owning, possibly empty, handle to a subtree.
pub(crate) type Link = Option<Box<Node>>;

/// A single node of a [`Tree`][crate::Tree].
///
/// Every key in the `left` subtree is strictly less than `key` and every key in the `right`
/// subtree is strictly greater.
pub struct Node {
    pub(crate) key: Key,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    /// Construct a new leaf `Node` holding `key`.
    pub(crate) fn new(key: Key) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> Key {
        self.key
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

// Trees aren't rebalanced on insert so they can be as deep as they are large. Everything that
// walks a whole subtree below keeps its own stack instead of recursing once per level.

impl Clone for Node {
    fn clone(&self) -> Self {
        let mut root = Node::new(self.key);
        {
            let mut pending: Vec<(&Node, &mut Node)> = vec![(self, &mut root)];
            while let Some((source, target)) = pending.pop() {
                let Node { left, right, .. } = target;
                if let Some(source_left) = source.left() {
                    let copy = left.insert(Box::new(Node::new(source_left.key)));
                    pending.push((source_left, &mut **copy));
                }
                if let Some(source_right) = source.right() {
                    let copy = right.insert(Box::new(Node::new(source_right.key)));
                    pending.push((source_right, &mut **copy));
                }
            }
        }
        root
    }
}

/// Two nodes are equal when their subtrees have the same shape and keys.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.key != b.key {
                return false;
            }
            for children in [(a.left(), b.left()), (a.right(), b.right())] {
                match children {
                    (Some(a), Some(b)) => pending.push((a, b)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for Node {}

/// Only shows the keys of the children, not whole subtrees.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left().map(Node::key))
            .field("right", &self.right().map(Node::key))
            .finish()
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
