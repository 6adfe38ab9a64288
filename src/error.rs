//! Error types

use thiserror::Error;

use crate::iter::Traversal;

/// Errors returned by fallible [`Tree`](crate::Tree) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A path walked off the tree after taking `depth` steps (or the tree is
    /// empty).
    #[error("no node at path (walked off the tree after {depth} step(s))")]
    NoNodeAtPath {
        /// The number of steps successfully taken.
        depth: usize,
    },

    /// The start value of a relative path is not in the tree.
    #[error("start value not found in tree")]
    StartNotFound,

    /// A traversal iterator was dereferenced after it was exhausted.
    #[error("iterator exhausted")]
    Exhausted,

    /// A path step could not be parsed as a direction.
    #[error("invalid path step {0:?} (expected L or R)")]
    InvalidDirection(String),

    /// A traversal name is not one of `preorder`, `inorder` or `postorder`.
    #[error("unknown traversal order {0:?}")]
    InvalidTraversal(String),

    /// The serialized input is malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A malformed serialized tree.
///
/// Token positions are zero-based indexes into the whitespace separated token
/// stream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Only preorder serializations carry enough shape to be rebuilt.
    #[error("cannot rebuild a tree from {0} serialization")]
    UnsupportedOrder(Traversal),

    /// The input ended before every child slot was filled.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// A token could not be parsed as a tree value.
    #[error("invalid token {token:?} at position {position}: {reason}")]
    InvalidToken {
        /// Token index.
        position: usize,
        /// The offending token.
        token: String,
        /// The value parser's error message.
        reason: String,
    },

    /// A value breaks the ordering of the tree, or duplicates a value already
    /// placed.
    #[error("token {token:?} at position {position} violates the tree ordering")]
    OutOfOrder {
        /// Token index.
        position: usize,
        /// The offending token.
        token: String,
    },

    /// Input remained after the tree was complete.
    #[error("trailing input at position {position}")]
    TrailingTokens {
        /// Index of the first unused token.
        position: usize,
    },
}
