mod owned_iter;
mod ref_iter;

use std::{fmt::Display, str::FromStr};

pub use owned_iter::*;
pub use ref_iter::*;

use crate::Error;

/// The order in which a traversal visits the nodes of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Traversal {
    /// Node, then left subtree, then right subtree.
    #[default]
    PreOrder,
    /// Left subtree, then node, then right subtree (sorted order).
    InOrder,
    /// Left subtree, then right subtree, then node.
    PostOrder,
}

impl FromStr for Traversal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "preorder" => Ok(Self::PreOrder),
            "inorder" => Ok(Self::InOrder),
            "postorder" => Ok(Self::PostOrder),
            _ => Err(Error::InvalidTraversal(s.to_string())),
        }
    }
}

impl Display for Traversal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::PreOrder => "preorder",
            Self::InOrder => "inorder",
            Self::PostOrder => "postorder",
        };
        f.write_str(s)
    }
}
