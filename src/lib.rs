//! A generic, ordered set backed by an unbalanced binary search tree.
//!
//! A [`Tree`] stores unique values ordered by a pluggable [`Comparator`],
//! defaulting to the [`PartialOrd`] ordering of the values ([`Natural`]). Any
//! `Fn(&T, &T) -> bool` closure can be used as a "less than" comparator, so
//! records can be ordered by a single field, and values with no natural
//! ordering (such as function pointers) can be stored by ordering them by a
//! projection.
//!
//! Beyond the usual insert / find / remove operations, the tree supports:
//!
//!   * Lazy, restartable [`Iter`]ators in pre-order, in-order and post-order
//!     ([`Traversal`]), alongside eager [`Vec`] producing traversals.
//!   * Structural algebra: [`Tree::merge()`], [`Tree::extract_subtree()`] and
//!     [`Tree::contains_subtree()`].
//!   * Functional transforms: [`Tree::map()`], [`Tree::filter()`] and
//!     [`Tree::reduce()`] (see [`transform`]).
//!   * Navigation by a path of [`Direction`]s, from the root or from a given
//!     value.
//!   * A whitespace separated text form using [`SENTINEL`] for absent
//!     children, which round-trips through [`Tree::serialize()`] and
//!     [`Tree::deserialize()`] in pre-order.
//!
//! ```
//! use ordtree::{Traversal, Tree};
//!
//! let mut t = Tree::new();
//! for v in [50, 30, 70, 20, 40, 60, 80] {
//!     t.insert(v);
//! }
//!
//! let text = t.serialize(Traversal::PreOrder);
//! assert_eq!(text, "50 30 20 # # 40 # # 70 60 # # 80 # #");
//!
//! let mut copy = Tree::<i32>::new();
//! copy.deserialize(&text, Traversal::PreOrder)?;
//! assert_eq!(copy, t);
//! # Ok::<(), ordtree::Error>(())
//! ```
//!
//! The tree performs no rebalancing. Inserting values in sorted order
//! produces a tree with a height equal to its length, and the recursive
//! operations (insertion, removal, eager traversals, serialisation) need stack
//! space proportional to the height. Dropping a tree and the lazy iterators
//! never recurse.
//!
//! The crate emits diagnostics through the [`log`] facade and never installs a
//! logger.

#![deny(missing_docs)]

mod compare;
mod dot;
mod error;
mod iter;
mod node;
mod path;
mod serial;
pub mod transform;
mod tree;

#[cfg(test)]
mod test_utils;

pub use compare::{Comparator, Natural, Reverse};
pub use dot::Dot;
pub use error::{Error, ParseError};
pub use iter::{IntoIter, Iter, Traversal};
pub use path::Direction;
pub use serial::SENTINEL;
pub use tree::Tree;
