//! Lazy traversals over a [`Tree`][crate::Tree].
//!
//! Each iterator borrows the tree, visits every node exactly once, and can't be restarted. The
//! tree can't change while one of these is alive since they hold a shared borrow of it.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::Node;

/// Breadth-first traversal. Created by [`Tree::iter_level_order`][crate::Tree::iter_level_order].
#[derive(Clone, Debug)]
pub struct LevelOrder<'a> {
    queue: VecDeque<&'a Node>,
}

impl<'a> LevelOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for LevelOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }
}

impl FusedIterator for LevelOrder<'_> {}

/// Depth-first traversal visiting a node before its children. Created by
/// [`Tree::iter_pre_order`][crate::Tree::iter_pre_order].
#[derive(Clone, Debug)]
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> PreOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is popped first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

impl FusedIterator for PreOrder<'_> {}

/// Depth-first traversal visiting a node after both of its children. Created by
/// [`Tree::iter_post_order`][crate::Tree::iter_post_order].
///
/// This walks the tree node-right-left onto a stack up front and then pops that stack, which
/// yields left-right-node.
#[derive(Clone, Debug)]
pub struct PostOrder<'a> {
    output: Vec<&'a Node>,
}

impl<'a> PostOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        let mut pending: Vec<&'a Node> = root.into_iter().collect();
        let mut output = Vec::new();

        while let Some(node) = pending.pop() {
            output.push(node);
            pending.extend(node.left());
            pending.extend(node.right());
        }

        Self { output }
    }
}

impl<'a> Iterator for PostOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        self.output.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.output.len(), Some(self.output.len()))
    }
}

impl ExactSizeIterator for PostOrder<'_> {}
impl FusedIterator for PostOrder<'_> {}

/// Depth-first traversal in ascending key order. Created by
/// [`Tree::iter_in_order`][crate::Tree::iter_in_order].
#[derive(Clone, Debug)]
pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
    current: Option<&'a Node>,
}

impl<'a> InOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: Vec::new(),
            current: root,
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left();
        }

        let node = self.stack.pop()?;
        self.current = node.right();
        Some(node)
    }
}

impl FusedIterator for InOrder<'_> {}
