use std::cmp::Ordering;

use crate::{compare::Comparator, path::Direction, Error};

/// An owning pointer to an optional child [`Node`].
pub(crate) type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    /// Child nodes pointers.
    left: Link<T>,
    right: Link<T>,

    value: T,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub(crate) fn with_children(value: T, left: Link<T>, right: Link<T>) -> Self {
        Self { value, left, right }
    }

    /// Insert `value` into the subtree rooted at `self`, returning false if an
    /// equivalent value is already present.
    pub(crate) fn insert<C>(self: &mut Box<Self>, value: T, cmp: &C) -> bool
    where
        C: Comparator<T>,
    {
        let child = match cmp.compare(&value, &self.value) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => return false,
            Ordering::Greater => &mut self.right,
        };

        match child {
            Some(v) => v.insert(value, cmp),
            None => {
                // Link the value as a new leaf.
                *child = Some(Box::new(Self::new(value)));
                true
            }
        }
    }

    /// Descend the subtree rooted at `self` to the node holding a value
    /// equivalent to `value`, if any.
    pub(crate) fn get<C>(&self, value: &T, cmp: &C) -> Option<&Self>
    where
        C: Comparator<T>,
    {
        let node = match cmp.compare(value, &self.value) {
            Ordering::Less => self.left(),
            Ordering::Equal => return Some(self),
            Ordering::Greater => self.right(),
        }?;

        node.get(value, cmp)
    }

    /// Follow `path` from this node, returning the node at the end of it.
    pub(crate) fn walk(&self, path: &[Direction]) -> Result<&Self, Error> {
        let mut node = self;
        for (depth, step) in path.iter().enumerate() {
            let next = match step {
                Direction::Left => node.left(),
                Direction::Right => node.right(),
            };
            node = next.ok_or(Error::NoNodeAtPath { depth })?;
        }

        Ok(node)
    }

    /// Return the left-most (minimum) node of the subtree rooted at `self`.
    pub(crate) fn find_min(&self) -> &Self {
        let mut node = self;
        while let Some(v) = node.left() {
            node = v;
        }
        node
    }

    /// Return the right-most (maximum) node of the subtree rooted at `self`.
    pub(crate) fn find_max(&self) -> &Self {
        let mut node = self;
        while let Some(v) = node.right() {
            node = v;
        }
        node
    }

    /// The number of levels in the subtree rooted at `self`. A leaf has a
    /// height of 1.
    pub(crate) fn height(&self) -> usize {
        1 + height(self.left()).max(height(self.right()))
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }
}

pub(crate) fn height<T>(n: Option<&Node<T>>) -> usize {
    n.map(|v| v.height()).unwrap_or_default()
}

/// Recurse into `node`, removing the value equivalent to `value` from the
/// subtree rooted at `node`, if it exists.
///
/// Returns [`None`] if the value is not found, otherwise the value that was
/// stored in the tree.
///
/// A removed node with at most one child is unlinked and replaced by that
/// child. A node with two children keeps its position in the tree and takes
/// the value of its in-order successor, which is unlinked from the right
/// subtree instead.
pub(crate) fn remove_recurse<T, C>(node: &mut Link<T>, value: &T, cmp: &C) -> Option<T>
where
    C: Comparator<T>,
{
    let n = node.as_mut()?;

    match cmp.compare(value, &n.value) {
        Ordering::Less => return remove_recurse(&mut n.left, value, cmp),
        Ordering::Greater => return remove_recurse(&mut n.right, value, cmp),
        Ordering::Equal => {}
    }

    // This node may have 0, 1 or 2 child node(s):
    //
    //                          +----------+
    //                          |  parent  |
    //                          +----------+
    //                                |
    //                                v
    //                          +----------+
    //                     +----|   self   |----+
    //                     |    +----------+    |
    //                     |                    |
    //                     v                    v
    //               +-----------+       +------------+
    //               | self.left |       | self.right |
    //               +-----------+       +------------+
    //
    if n.left.is_some() && n.right.is_some() {
        // The successor is the minimum of the right subtree, and by
        // definition has no left child, so unlinking it is one of the two
        // simple cases.
        let successor = take_min(&mut n.right)?;
        debug_assert!(successor.left.is_none());
        debug_assert!(successor.right.is_none());

        log::trace!("promoting in-order successor into two-child node");
        return Some(std::mem::replace(&mut n.value, successor.value));
    }

    // Zero or one child: the surviving child (if any) takes the place of the
    // removed node in its parent.
    let mut old = node.take()?;
    *node = old.left.take().or_else(|| old.right.take());

    Some(old.value)
}

/// Unlink the minimum node of the subtree at `link`, linking its right subtree
/// (if any) in its place.
///
/// The returned node has no children.
pub(crate) fn take_min<T>(mut link: &mut Link<T>) -> Option<Box<Node<T>>> {
    // Descend the left edge.
    while link.as_ref().is_some_and(|v| v.left.is_some()) {
        link = &mut link.as_mut()?.left;
    }

    let mut min = link.take()?;
    *link = min.right.take();
    Some(min)
}

/// Returns true when the shape and values of `candidate` match the top of the
/// subtree rooted at `node`.
///
/// An absent candidate matches anything, a present candidate requires a
/// present node holding an equivalent value with matching children.
pub(crate) fn matches_shape<T, C>(
    node: Option<&Node<T>>,
    candidate: Option<&Node<T>>,
    cmp: &C,
) -> bool
where
    C: Comparator<T>,
{
    let (n, c) = match (node, candidate) {
        (_, None) => return true,
        (None, Some(_)) => return false,
        (Some(n), Some(c)) => (n, c),
    };

    cmp.equivalent(&n.value, &c.value)
        && matches_shape(n.left(), c.left(), cmp)
        && matches_shape(n.right(), c.right(), cmp)
}

/// Returns true when both subtrees have the same shape, and equal values at
/// every position.
pub(crate) fn same_shape<T>(a: Option<&Node<T>>, b: Option<&Node<T>>) -> bool
where
    T: PartialEq,
{
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.value == b.value
                && same_shape(a.left(), b.left())
                && same_shape(a.right(), b.right())
        }
        _ => false,
    }
}

/// Free the subtree at `link` using an explicit stack, so that degenerate trees
/// do not exhaust the call stack.
pub(crate) fn drop_iterative<T>(link: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();

    while let Some(mut n) = stack.pop() {
        stack.extend(n.left.take());
        stack.extend(n.right.take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Natural;

    fn add_left<T>(n: &mut Node<T>, v: T) -> &mut Node<T> {
        assert!(n.left.is_none());
        n.left = Some(Box::new(Node::new(v)));
        n.left.as_mut().unwrap()
    }

    fn add_right<T>(n: &mut Node<T>, v: T) -> &mut Node<T> {
        assert!(n.right.is_none());
        n.right = Some(Box::new(Node::new(v)));
        n.right.as_mut().unwrap()
    }

    #[test]
    fn test_take_min() {
        //
        //          6
        //         / \
        //        4   7
        //       / \
        //      2   5
        //     / \
        //    1   3
        //
        let mut t = Node::new(6);
        add_right(&mut t, 7);
        let v = add_left(&mut t, 4);
        add_right(v, 5);
        let v = add_left(v, 2);
        add_right(v, 3);
        add_left(v, 1);

        let mut link = Some(Box::new(t));
        for want in [1, 2, 3, 4, 5, 6, 7] {
            let n = take_min(&mut link).unwrap();
            assert_eq!(n.value, want);
            assert!(n.left.is_none());
            assert!(n.right.is_none());
        }

        assert!(link.is_none());
        assert!(take_min(&mut link).is_none());
    }

    #[test]
    fn test_remove_two_children_keeps_position() {
        //
        //          4
        //         / \
        //        2   6
        //           / \
        //          5   7
        //
        let mut t = Node::new(4);
        add_left(&mut t, 2);
        let v = add_right(&mut t, 6);
        add_left(v, 5);
        add_right(v, 7);

        let mut link = Some(Box::new(t));
        assert_eq!(remove_recurse(&mut link, &4, &Natural), Some(4));

        // The successor 5 moved into the root slot, and the old 5 leaf is gone.
        let root = link.as_deref().unwrap();
        assert_eq!(root.value, 5);
        assert_eq!(root.left().unwrap().value, 2);

        let right = root.right().unwrap();
        assert_eq!(right.value, 6);
        assert!(right.left().is_none());
        assert_eq!(right.right().unwrap().value, 7);
    }

    #[test]
    fn test_remove_one_child_relinks() {
        //
        //      3
        //     /
        //    1
        //     \
        //      2
        //
        let mut t = Node::new(3);
        let v = add_left(&mut t, 1);
        add_right(v, 2);

        let mut link = Some(Box::new(t));
        assert_eq!(remove_recurse(&mut link, &1, &Natural), Some(1));

        let root = link.as_deref().unwrap();
        assert_eq!(root.value, 3);
        assert_eq!(root.left().unwrap().value, 2);
        assert!(root.right().is_none());

        assert_eq!(remove_recurse(&mut link, &42, &Natural), None);
    }

    #[test]
    fn test_walk() {
        let mut t = Node::new(4);
        let v = add_left(&mut t, 2);
        add_right(v, 3);

        let got = t.walk(&[Direction::Left, Direction::Right]).unwrap();
        assert_eq!(got.value, 3);

        assert_eq!(t.walk(&[]).unwrap().value, 4);
        assert_eq!(
            t.walk(&[Direction::Left, Direction::Left]).unwrap_err(),
            Error::NoNodeAtPath { depth: 1 }
        );
    }

    #[test]
    fn test_matches_shape() {
        let mut t = Node::new(4);
        add_left(&mut t, 2);
        add_right(&mut t, 6);

        let candidate = Node::new(4);
        assert!(matches_shape(Some(&t), Some(&candidate), &Natural));

        let mut candidate = Node::new(4);
        add_right(&mut candidate, 5);
        assert!(!matches_shape(Some(&t), Some(&candidate), &Natural));

        assert!(matches_shape::<i32, _>(None, None, &Natural));
        assert!(!matches_shape(None, Some(&t), &Natural));
    }

    #[test]
    fn test_drop_deep_chain() {
        // Build a degenerate, list-shaped tree deeper than a recursive drop
        // could handle.
        let mut link: Link<u32> = None;
        for v in (0..200_000).rev() {
            link = Some(Box::new(Node::with_children(v, None, link)));
        }

        assert_eq!(link.as_deref().unwrap().find_max().value, 199_999);
        drop_iterative(link);
    }
}
