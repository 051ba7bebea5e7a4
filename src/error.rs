//! Errors surfaced by [`Tree`][crate::Tree] operations.

use std::fmt;

use thiserror::Error;

/// The order in which a traversal visits nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Breadth-first, top to bottom and left to right.
    Level,
    /// Node, then left subtree, then right subtree.
    Pre,
    /// Left subtree, then right subtree, then node.
    Post,
    /// Left subtree, then node, then right subtree. Yields keys in ascending order.
    In,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Level => "level",
            Self::Pre => "pre",
            Self::Post => "post",
            Self::In => "in",
        };
        f.write_str(name)
    }
}

/// Errors returned by [`Tree`][crate::Tree].
///
/// Lookups that miss and duplicate inserts are not errors; they are reported through `bool` and
/// `Option` results instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A callback traversal was started without a callback.
    #[error("{0}-order traversal requires a callback")]
    MissingCallback(Order),
}
