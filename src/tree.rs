use std::{
    fmt::{self, Debug, Display},
    str::FromStr,
};

use crate::{
    compare::{Comparator, Natural},
    dot::Dot,
    iter::{IntoIter, Iter, Traversal},
    node::{self, drop_iterative, matches_shape, remove_recurse, same_shape, Link, Node},
    path::Direction,
    serial, transform, Error,
};

/// An ordered set of `T` stored in an unbalanced binary search tree, ordered
/// by the comparator `C`.
///
/// Values are unique under `C`: inserting a value equivalent to one already in
/// the tree leaves the tree unchanged. The tree does not rebalance itself, so
/// its height (and the recursion depth of most operations) depends on the
/// insertion order and may reach `len()` for sorted input.
///
/// ```
/// use ordtree::Tree;
///
/// let mut t = Tree::new();
/// for v in [50, 30, 70, 20, 40, 60, 80] {
///     t.insert(v);
/// }
///
/// assert_eq!(t.in_order(), [20, 30, 40, 50, 60, 70, 80]);
///
/// // Removing a node with two children promotes its in-order successor.
/// assert!(t.remove(&50));
/// assert_eq!(t.pre_order()[0], 60);
/// ```
pub struct Tree<T, C = Natural> {
    root: Link<T>,
    len: usize,
    cmp: C,
}

impl<T> Tree<T> {
    /// Construct an empty tree ordered by the natural ordering of `T`.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> Default for Tree<T, C>
where
    C: Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C> Drop for Tree<T, C> {
    fn drop(&mut self) {
        drop_iterative(self.root.take());
    }
}

impl<T, C> Tree<T, C> {
    /// Construct an empty tree ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: None,
            len: 0,
            cmp,
        }
    }

    /// The comparator ordering this tree.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of levels in the tree, 0 when empty.
    pub fn height(&self) -> usize {
        node::height(self.root())
    }

    /// Remove all values.
    pub fn clear(&mut self) {
        log::debug!("clearing tree of {} value(s)", self.len);

        drop_iterative(self.root.take());
        self.len = 0;
    }

    /// Iterate over the values in sorted (in-order) order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.iter_order(Traversal::InOrder)
    }

    /// Iterate over the values in the given traversal `order`.
    pub fn iter_order(&self, order: Traversal) -> Iter<'_, T> {
        Iter::new(self.root(), order)
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        self.root().map(|v| v.find_min().value())
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        self.root().map(|v| v.find_max().value())
    }

    /// Clone the values into a [`Vec`] in sorted order.
    pub fn in_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.collect_order(Traversal::InOrder)
    }

    /// Clone the values into a [`Vec`], each node before its subtrees.
    pub fn pre_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.collect_order(Traversal::PreOrder)
    }

    /// Clone the values into a [`Vec`], each node after its subtrees.
    pub fn post_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.collect_order(Traversal::PostOrder)
    }

    /// Clone the values into a sorted [`Vec`].
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.in_order()
    }

    fn collect_order(&self, order: Traversal) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        collect_recurse(self.root(), order, &mut out);
        out
    }

    /// Return the value found by following `path` from the root.
    ///
    /// An empty path yields the root value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoNodeAtPath`] if the tree is empty or a step leads to
    /// an absent child.
    ///
    /// ```
    /// use ordtree::{Direction, Tree};
    ///
    /// let t: Tree<_> = [50, 30, 70, 40].into_iter().collect();
    /// let path = Direction::parse_path("LR")?;
    ///
    /// assert_eq!(t.find_node_by_path(&path), Ok(&40));
    /// assert!(t.find_node_by_path(&[Direction::Left, Direction::Left]).is_err());
    /// # Ok::<(), ordtree::Error>(())
    /// ```
    pub fn find_node_by_path(&self, path: &[Direction]) -> Result<&T, Error> {
        self.root()
            .ok_or(Error::NoNodeAtPath { depth: 0 })?
            .walk(path)
            .map(Node::value)
    }

    /// Write the tree as a token stream in the given `order`, with a sentinel
    /// token marking every absent child.
    ///
    /// Only [`Traversal::PreOrder`] output can be read back with
    /// [`Tree::deserialize()`].
    ///
    /// Each value is written as the [`Display`] output of the value, escaped
    /// so that it forms exactly one token distinct from [`SENTINEL`]:
    /// backslashes are doubled, whitespace is written as `\s`, `\t`, `\n`,
    /// `\r` or `\u{hex}`, a value displayed as the sentinel is written as
    /// `\#`, and an empty value as `\e`. [`Tree::deserialize()`] reverses the
    /// escaping before parsing each value.
    ///
    /// [`SENTINEL`]: crate::SENTINEL
    ///
    /// ```
    /// use ordtree::{Traversal, Tree};
    ///
    /// let t: Tree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(t.serialize(Traversal::PreOrder), "2 1 # # 3 # #");
    /// assert_eq!(t.serialize(Traversal::InOrder), "# 1 # 2 # 3 #");
    ///
    /// let s: Tree<String> = ["a b".to_string(), "#".to_string()].into_iter().collect();
    /// assert_eq!(s.serialize(Traversal::PreOrder), r"a\sb \# # # #");
    /// ```
    pub fn serialize(&self, order: Traversal) -> String
    where
        T: Display,
    {
        serial::serialize(self.root(), order)
    }

    /// Build a new tree holding `f(v)` for every value `v`, ordered by the
    /// natural ordering of `U`.
    ///
    /// Outputs that are equivalent to an earlier output collapse into a single
    /// value.
    pub fn map<U, F>(&self, f: F) -> Tree<U>
    where
        U: PartialOrd,
        F: FnMut(&T) -> U,
    {
        transform::map(self, Natural, f)
    }

    /// Build a new tree holding `f(v)` for every value `v`, ordered by `cmp`.
    pub fn map_with<U, D, F>(&self, cmp: D, f: F) -> Tree<U, D>
    where
        D: Comparator<U>,
        F: FnMut(&T) -> U,
    {
        transform::map(self, cmp, f)
    }

    /// Build a new tree holding the values for which `predicate` returns
    /// true.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        T: Clone,
        C: Comparator<T> + Clone,
        P: FnMut(&T) -> bool,
    {
        transform::filter(self, predicate)
    }

    /// Fold the values in sorted order, starting from `initial`.
    pub fn reduce<U, F>(&self, initial: U, f: F) -> U
    where
        F: FnMut(U, &T) -> U,
    {
        transform::reduce(self, initial, f)
    }

    /// Render the shape of the tree as a Graphviz DOT graph.
    pub fn dot(&self) -> Dot<'_, T> {
        Dot::new(self.root())
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    fn node(&self, value: &T) -> Option<&Node<T>>
    where
        C: Comparator<T>,
    {
        self.root().and_then(|v| v.get(value, &self.cmp))
    }
}

impl<T, C> Tree<T, C>
where
    C: Comparator<T>,
{
    /// Insert `value`, returning false (and leaving the tree unchanged) if an
    /// equivalent value is already present.
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = match self.root {
            Some(ref mut v) => v.insert(value, &self.cmp),
            None => {
                self.root = Some(Box::new(Node::new(value)));
                true
            }
        };

        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// An alias of [`Tree::insert()`].
    pub fn add(&mut self, value: T) -> bool {
        self.insert(value)
    }

    /// Returns true if a value equivalent to `value` is in the tree.
    pub fn find(&self, value: &T) -> bool {
        self.node(value).is_some()
    }

    /// An alias of [`Tree::find()`].
    pub fn contains(&self, value: &T) -> bool {
        self.find(value)
    }

    /// Return the stored value equivalent to `value`, if any.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.node(value).map(Node::value)
    }

    /// Remove the value equivalent to `value`, returning true if it was
    /// present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Remove and return the stored value equivalent to `value`, if any.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let v = remove_recurse(&mut self.root, value, &self.cmp)?;
        self.len -= 1;
        Some(v)
    }

    /// Insert a copy of every value in `other`, skipping values already
    /// present. `other` is left unchanged.
    pub fn merge<D>(&mut self, other: &Tree<T, D>)
    where
        T: Clone,
    {
        let before = self.len;
        for v in other.iter_order(Traversal::PreOrder) {
            self.insert(v.clone());
        }

        log::debug!(
            "merged {} of {} value(s) into tree",
            self.len - before,
            other.len()
        );
    }

    /// Copy the subtree rooted at the node holding `value` into a new tree.
    ///
    /// Returns an empty tree if `value` is not present.
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let t: Tree<_> = [50, 30, 70, 20, 40].into_iter().collect();
    ///
    /// let sub = t.extract_subtree(&30);
    /// assert_eq!(sub.pre_order(), [30, 20, 40]);
    /// assert!(t.contains_subtree(&sub));
    ///
    /// assert!(t.extract_subtree(&99).is_empty());
    /// ```
    pub fn extract_subtree(&self, value: &T) -> Self
    where
        T: Clone,
        C: Clone,
    {
        let mut out = Self::with_comparator(self.cmp.clone());

        if let Some(n) = self.node(value) {
            out.len = Iter::new(Some(n), Traversal::PreOrder).count();
            out.root = Some(Box::new(n.clone()));
        }

        out
    }

    /// Returns true when the shape and values of `candidate` appear as a
    /// rooted subtree of this tree.
    ///
    /// The node holding the candidate's root value must have children
    /// matching the candidate's children at every position, where an absent
    /// candidate child matches anything. An empty candidate is always
    /// contained.
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let t: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// // The same values in a different shape are not contained.
    /// let other: Tree<_> = [1, 2, 3].into_iter().collect();
    /// assert!(!t.contains_subtree(&other));
    /// assert!(t.contains_subtree(&t.clone()));
    /// ```
    pub fn contains_subtree<D>(&self, candidate: &Tree<T, D>) -> bool {
        let Some(c) = candidate.root() else {
            return true;
        };

        match self.node(c.value()) {
            Some(n) => matches_shape(Some(n), Some(c), &self.cmp),
            None => false,
        }
    }

    /// Return the value found by following `path` from the node holding
    /// `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StartNotFound`] if `start` is not in the tree, or
    /// [`Error::NoNodeAtPath`] if a step leads to an absent child.
    pub fn find_node_by_relative_path(&self, start: &T, path: &[Direction]) -> Result<&T, Error> {
        self.node(start)
            .ok_or(Error::StartNotFound)?
            .walk(path)
            .map(Node::value)
    }

    /// Replace the contents of this tree with the tree described by `text`,
    /// a [`Tree::serialize()`] output in the given `order`.
    ///
    /// Only [`Traversal::PreOrder`] input is supported, as the other orders
    /// cannot describe the shape of the tree unambiguously. Empty input yields
    /// an empty tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if `text` is malformed, names values that
    /// break the ordering of the tree, or `order` is unsupported. The tree is
    /// left unchanged on error.
    ///
    /// ```
    /// use ordtree::{Traversal, Tree};
    ///
    /// let mut t = Tree::<i32>::new();
    /// t.deserialize("2 1 # # 3 # #", Traversal::PreOrder)?;
    /// assert_eq!(t.in_order(), [1, 2, 3]);
    ///
    /// // 5 cannot be the left child of 2.
    /// assert!(t.deserialize("2 5 # # #", Traversal::PreOrder).is_err());
    /// assert_eq!(t.len(), 3);
    /// # Ok::<(), ordtree::Error>(())
    /// ```
    pub fn deserialize(&mut self, text: &str, order: Traversal) -> Result<(), Error>
    where
        T: FromStr,
        T::Err: Display,
    {
        let (root, len) = serial::deserialize(text, order, &self.cmp)?;

        drop_iterative(std::mem::replace(&mut self.root, root));
        self.len = len;

        log::debug!("rebuilt tree of {len} value(s) from {order} input");
        Ok(())
    }
}

/// Push clones of the values of the subtree at `node` onto `out` in the given
/// `order`.
fn collect_recurse<T>(node: Option<&Node<T>>, order: Traversal, out: &mut Vec<T>)
where
    T: Clone,
{
    let Some(n) = node else {
        return;
    };

    if order == Traversal::PreOrder {
        out.push(n.value().clone());
    }
    collect_recurse(n.left(), order, out);
    if order == Traversal::InOrder {
        out.push(n.value().clone());
    }
    collect_recurse(n.right(), order, out);
    if order == Traversal::PostOrder {
        out.push(n.value().clone());
    }
}

impl<T, C> Clone for Tree<T, C>
where
    T: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
            cmp: self.cmp.clone(),
        }
    }
}

impl<T, C> Debug for Tree<T, C>
where
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

/// Trees are equal when they have the same shape and equal values at every
/// position, regardless of their comparators.
impl<T, C, D> PartialEq<Tree<T, D>> for Tree<T, C>
where
    T: PartialEq,
{
    fn eq(&self, other: &Tree<T, D>) -> bool {
        self.len == other.len && same_shape(self.root(), other.root())
    }
}

impl<T, C> Eq for Tree<T, C> where T: Eq {}

/// Writes the [`Traversal::PreOrder`] serialization of the tree.
impl<T, C> Display for Tree<T, C>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        serial::write_tokens(f, self.root(), Traversal::PreOrder)
    }
}

/// Parses the [`Traversal::PreOrder`] serialization of a tree.
impl<T, C> FromStr for Tree<T, C>
where
    T: FromStr,
    T::Err: Display,
    C: Comparator<T> + Default,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut t = Self::default();
        t.deserialize(s, Traversal::PreOrder)?;
        Ok(t)
    }
}

impl<T, C> Extend<T> for Tree<T, C>
where
    C: Comparator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<T, C> FromIterator<T> for Tree<T, C>
where
    C: Comparator<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}

impl<T, C> IntoIterator for Tree<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.root.take(), self.len)
    }
}

impl<'a, T, C> IntoIterator for &'a Tree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
