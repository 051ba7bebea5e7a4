//! A Binary Search Tree that is built balanced and can be explicitly rebalanced.
//!
//! `insert` and `delete` are plain BST operations and never restructure the tree, so a run of
//! biased inserts can grow it towards a linked list. [`Tree::rebalance`] rebuilds the whole tree
//! from its sorted keys to get back to a shape where no node's subtrees differ in height by more
//! than one.
//!
//! # Examples
//!
//! ```
//! use rebalance_bst::Tree;
//!
//! // Duplicates are dropped and the rest is built into a balanced tree.
//! let mut tree = Tree::from_keys([5, 3, 8, 3, 1]);
//! assert_eq!(tree.keys(), [1, 3, 5, 8]);
//! assert!(tree.is_balanced());
//!
//! // Always inserting larger keys leans the tree to the right.
//! for key in 9..15 {
//!     assert!(tree.insert(key));
//! }
//! assert!(!tree.is_balanced());
//!
//! // Rebuilding it keeps every key.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.len(), 10);
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::error::{Error, Order};
use crate::iter::{InOrder, LevelOrder, PostOrder, PreOrder};
use crate::node::{Link, Node};
use crate::Key;

/// A callback for the callback traversals. It gets read access to each node it visits.
pub type Visit<'v> = &'v mut dyn FnMut(&Node);

/// A Binary Search Tree over unique [`Key`]s. This can be used for inserting, finding, and
/// deleting keys, visiting them in several orders, and rebalancing.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Tree {
    root: Link,
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a balanced tree from `keys`. They don't need to be sorted and duplicates are
    /// ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let tree = Tree::from_keys([5, 3, 8, 3, 1]);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.key(), 5);
    /// assert_eq!(tree.height(Some(root)), 2);
    /// ```
    pub fn from_keys(keys: impl IntoIterator<Item = Key>) -> Self {
        let mut keys: Vec<Key> = keys.into_iter().collect();
        keys.sort_unstable();
        keys.dedup();

        debug!(len = keys.len(), "building balanced tree");
        Self { root: build(&keys) }
    }

    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.iter_in_order().count()
    }

    /// Whether a node holds `key`.
    pub fn contains(&self, key: Key) -> bool {
        self.find(key).is_some()
    }

    /// All keys in ascending order.
    pub fn keys(&self) -> Vec<Key> {
        self.iter_in_order().map(Node::key).collect()
    }

    /// Potentially finds the node holding `key`. If no node has the key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let tree = Tree::from_keys([1, 2, 3]);
    ///
    /// assert_eq!(tree.find(3).map(|node| node.key()), Some(3));
    /// assert!(tree.find(42).is_none());
    /// ```
    pub fn find(&self, key: Key) -> Option<&Node> {
        let mut current = self.root();
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => current = node.right(),
            }
        }
        None
    }

    /// Inserts `key` as a new leaf. Returns `false`, leaving the tree untouched, if the key is
    /// already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: Key) -> bool {
        let slot = slot_mut(&mut self.root, key);
        if slot.is_some() {
            trace!(key, "key already present");
            return false;
        }

        *slot = Some(Box::new(Node::new(key)));
        debug!(key, "inserted key");
        true
    }

    /// Deletes the node holding `key`. Returns `false` if no node holds it.
    ///
    /// A node with two children keeps its place in the tree and takes the key of its in-order
    /// successor, which is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let mut tree = Tree::from_keys([1, 3, 5, 8]);
    ///
    /// assert!(tree.delete(5));
    /// assert_eq!(tree.root().map(|root| root.key()), Some(8));
    /// assert_eq!(tree.keys(), [1, 3, 8]);
    ///
    /// assert!(!tree.delete(5));
    /// ```
    pub fn delete(&mut self, key: Key) -> bool {
        let slot = slot_mut(&mut self.root, key);
        let Some(node) = slot else {
            trace!(key, "key to delete not found");
            return false;
        };

        if node.left.is_some() && node.right.is_some() {
            // The successor is the leftmost node of the right subtree so it has no left child.
            let successor_slot = leftmost_slot(&mut node.right);
            if let Some(mut successor) = successor_slot.take() {
                *successor_slot = successor.right.take();
                node.key = successor.key;
            }
        } else if let Some(mut node) = slot.take() {
            *slot = node.left.take().or_else(|| node.right.take());
        }

        debug!(key, "deleted key");
        true
    }

    /// The number of edges on the longest path from `node` down to a leaf. An absent node has a
    /// height of `-1`.
    pub fn height(&self, node: Option<&Node>) -> isize {
        subtree_height(node)
    }

    /// The number of edges from the root to `node`.
    ///
    /// The node is located by searching for its key from the root, so `-1` is returned for an
    /// absent node or one whose key isn't in this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let tree = Tree::from_keys([1, 3, 5, 8]);
    ///
    /// assert_eq!(tree.depth(tree.root()), 0);
    /// assert_eq!(tree.depth(tree.find(1)), 2);
    /// assert_eq!(tree.depth(None), -1);
    /// ```
    pub fn depth(&self, node: Option<&Node>) -> isize {
        let Some(target) = node else {
            return -1;
        };

        let mut current = self.root();
        let mut depth = 0;
        while let Some(node) = current {
            match target.key.cmp(&node.key) {
                Ordering::Less => current = node.left(),
                Ordering::Equal => return depth,
                Ordering::Greater => current = node.right(),
            }
            depth += 1;
        }
        -1
    }

    /// Whether the heights of the two subtrees of every node differ by at most one. An empty tree
    /// is balanced.
    pub fn is_balanced(&self) -> bool {
        self.iter_level_order().all(|node| {
            let left_height = subtree_height(node.left());
            let right_height = subtree_height(node.right());
            (left_height - right_height).abs() <= 1
        })
    }

    /// Rebuilds the tree from its keys so that it is balanced.
    pub fn rebalance(&mut self) {
        let keys = self.keys();
        self.root = build(&keys);
        debug!(len = keys.len(), "rebalanced tree");
    }

    /// Visits nodes breadth-first.
    pub fn iter_level_order(&self) -> LevelOrder<'_> {
        LevelOrder::new(self.root())
    }

    /// Visits each node before its left and then its right subtree.
    pub fn iter_pre_order(&self) -> PreOrder<'_> {
        PreOrder::new(self.root())
    }

    /// Visits each node after its left and then its right subtree.
    pub fn iter_post_order(&self) -> PostOrder<'_> {
        PostOrder::new(self.root())
    }

    /// Visits nodes in ascending key order.
    pub fn iter_in_order(&self) -> InOrder<'_> {
        InOrder::new(self.root())
    }

    /// Calls `callback` on every node, breadth-first.
    ///
    /// # Errors
    ///
    /// [`Error::MissingCallback`] if `callback` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::{Error, Node, Tree};
    ///
    /// let tree = Tree::from_keys([1, 3, 5, 8]);
    /// let mut keys = Vec::new();
    ///
    /// tree.level_order(Some(&mut |node: &Node| keys.push(node.key())))?;
    /// assert_eq!(keys, [5, 3, 8, 1]);
    ///
    /// assert!(tree.level_order(None).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn level_order(&self, callback: Option<Visit<'_>>) -> Result<(), Error> {
        visit(self.iter_level_order(), callback, Order::Level)
    }

    /// Calls `callback` on every node in pre-order.
    ///
    /// # Errors
    ///
    /// [`Error::MissingCallback`] if `callback` is `None`.
    pub fn pre_order(&self, callback: Option<Visit<'_>>) -> Result<(), Error> {
        visit(self.iter_pre_order(), callback, Order::Pre)
    }

    /// Calls `callback` on every node in post-order.
    ///
    /// # Errors
    ///
    /// [`Error::MissingCallback`] if `callback` is `None`.
    pub fn post_order(&self, callback: Option<Visit<'_>>) -> Result<(), Error> {
        visit(self.iter_post_order(), callback, Order::Post)
    }

    /// Calls `callback` on every node in ascending key order.
    ///
    /// # Errors
    ///
    /// [`Error::MissingCallback`] if `callback` is `None`.
    pub fn in_order(&self, callback: Option<Visit<'_>>) -> Result<(), Error> {
        visit(self.iter_in_order(), callback, Order::In)
    }
}

/// Lists the keys in pre-order, which is enough to tell apart any two trees.
impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pre_order: Vec<Key> = self.iter_pre_order().map(Node::key).collect();
        f.debug_struct("Tree").field("pre_order", &pre_order).finish()
    }
}

impl FromIterator<Key> for Tree {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}

impl From<Vec<Key>> for Tree {
    fn from(keys: Vec<Key>) -> Self {
        Self::from_keys(keys)
    }
}

/// Draws the tree sideways, one node per line, with the right subtree above its parent.
///
/// ```
/// use rebalance_bst::Tree;
///
/// let tree = Tree::from_keys([1, 3, 5, 8]);
/// let expected = "\
/// │   ┌── 8
/// └── 5
///     └── 3
///         └── 1
/// ";
/// assert_eq!(tree.to_string(), expected);
/// ```
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => write_subtree(f, root, "", true),
            None => Ok(()),
        }
    }
}

fn write_subtree(
    f: &mut fmt::Formatter<'_>,
    node: &Node,
    prefix: &str,
    is_left: bool,
) -> fmt::Result {
    if let Some(right) = node.right() {
        let continuation = if is_left { "│   " } else { "    " };
        write_subtree(f, right, &format!("{prefix}{continuation}"), false)?;
    }

    let branch = if is_left { "└── " } else { "┌── " };
    writeln!(f, "{prefix}{branch}{}", node.key)?;

    if let Some(left) = node.left() {
        let continuation = if is_left { "    " } else { "│   " };
        write_subtree(f, left, &format!("{prefix}{continuation}"), true)?;
    }
    Ok(())
}

/// Recursively builds a balanced subtree from sorted, unique keys. The middle key (the upper one
/// for an even number of keys) becomes the root.
fn build(keys: &[Key]) -> Link {
    let (left, rest) = keys.split_at(keys.len() / 2);
    let (&key, right) = rest.split_first()?;

    Some(Box::new(Node {
        key,
        left: build(left),
        right: build(right),
    }))
}

fn subtree_height(node: Option<&Node>) -> isize {
    node.map_or(-1, |node| {
        1 + subtree_height(node.left()).max(subtree_height(node.right()))
    })
}

/// Walks down from `slot` and returns the slot that holds `key`, or the empty slot where it would
/// be attached.
fn slot_mut(mut slot: &mut Link, key: Key) -> &mut Link {
    while slot.as_deref().is_some_and(|node| node.key != key) {
        if let Some(node) = slot {
            slot = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }
    }
    slot
}

/// Returns the slot holding the leftmost node below `slot`.
fn leftmost_slot(mut slot: &mut Link) -> &mut Link {
    while slot.as_deref().is_some_and(|node| node.left.is_some()) {
        if let Some(node) = slot {
            slot = &mut node.left;
        }
    }
    slot
}

fn visit<'a>(
    nodes: impl Iterator<Item = &'a Node>,
    callback: Option<Visit<'_>>,
    order: Order,
) -> Result<(), Error> {
    let callback = callback.ok_or(Error::MissingCallback(order))?;
    for node in nodes {
        callback(node);
    }
    Ok(())
}
