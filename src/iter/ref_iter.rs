use std::iter::FusedIterator;

use crate::{node::Node, Error};

use super::Traversal;

#[derive(Debug)]
struct Pending<'a, T> {
    node: &'a Node<T>,

    /// Post-order only: the children of `node` have been pushed above it.
    expanded: bool,
}

impl<T> Clone for Pending<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Pending<'_, T> {}

/// A lazy, restartable, depth-first walk over the values of a
/// [`Tree`](crate::Tree).
///
/// The iterator holds an explicit stack of pending nodes, the top of which is
/// always the next value to yield. It can be inspected with
/// [`Iter::current()`] and moved forward with [`Iter::advance()`], or driven as
/// a regular [`Iterator`].
///
/// ```
/// use ordtree::{Error, Tree};
///
/// let t: Tree<i32> = [2, 1, 3].into_iter().collect();
/// let mut iter = t.iter();
///
/// assert_eq!(iter.current(), Ok(&1));
/// iter.advance();
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), Some(&3));
///
/// assert!(iter.is_exhausted());
/// assert_eq!(iter.current(), Err(Error::Exhausted));
///
/// iter.restart();
/// assert_eq!(iter.collect::<Vec<_>>(), [&1, &2, &3]);
/// ```
#[derive(Debug)]
pub struct Iter<'a, T> {
    root: Option<&'a Node<T>>,
    order: Traversal,
    stack: Vec<Pending<'a, T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root,
            order: self.order,
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, order: Traversal) -> Self {
        let mut this = Self {
            root,
            order,
            stack: vec![],
        };

        this.restart();
        this
    }

    /// The order this iterator visits nodes in.
    pub fn order(&self) -> Traversal {
        self.order
    }

    /// Return the value the iterator is positioned at without advancing.
    ///
    /// Returns [`Error::Exhausted`] once every value has been visited.
    pub fn current(&self) -> Result<&'a T, Error> {
        self.stack
            .last()
            .map(|v| v.node.value())
            .ok_or(Error::Exhausted)
    }

    /// Returns true when no values remain.
    pub fn is_exhausted(&self) -> bool {
        self.stack.is_empty()
    }

    /// Move past the current value. Advancing an exhausted iterator does
    /// nothing.
    pub fn advance(&mut self) {
        let Some(v) = self.stack.pop() else {
            return;
        };

        match self.order {
            Traversal::InOrder => {
                // Descend down the left side of the right hand child of this
                // node, if any.
                if let Some(right) = v.node.right() {
                    self.push_subtree(right);
                }
            }
            Traversal::PreOrder => {
                // Push right before left so the left subtree is visited first.
                self.push(v.node.right());
                self.push(v.node.left());
            }
            Traversal::PostOrder => self.settle(),
        }
    }

    /// Rewind the iterator to the first value of the tree it was created
    /// over.
    pub fn restart(&mut self) {
        self.stack.clear();

        let Some(root) = self.root else {
            return;
        };

        match self.order {
            // Descend down the left side of the tree.
            Traversal::InOrder => self.push_subtree(root),
            Traversal::PreOrder => self.push(Some(root)),
            Traversal::PostOrder => {
                self.push(Some(root));
                self.settle();
            }
        }
    }

    fn push(&mut self, node: Option<&'a Node<T>>) {
        self.stack.extend(node.map(|node| Pending {
            node,
            expanded: false,
        }));
    }

    fn push_subtree(&mut self, subtree_root: &'a Node<T>) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            self.push(Some(v));
            ptr = v.left();
        }
    }

    /// Expand post-order frames until the top of the stack is a node whose
    /// children have all been visited.
    fn settle(&mut self) {
        while let Some(top) = self.stack.last_mut() {
            if top.expanded {
                break;
            }
            top.expanded = true;

            let node = top.node;
            self.push(node.right());
            self.push(node.left());
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.current().ok()?;
        self.advance();
        Some(v)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
