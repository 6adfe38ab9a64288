//! Functional transforms producing new trees or folded values.
//!
//! These are free functions so that the input and output element types and
//! comparators can all differ. The [`Tree`] methods of the same name delegate
//! here.

use crate::{compare::Comparator, iter::Traversal, Tree};

/// Build a new tree ordered by `cmp`, holding `f(v)` for every value `v` of
/// `tree`.
///
/// The source is visited in pre-order, so the shape of the output depends on
/// the shape of the source, but its contents never do: outputs equivalent
/// under `cmp` collapse into the first one inserted.
///
/// ```
/// use ordtree::{transform, Reverse, Natural, Tree};
///
/// let t: Tree<i32> = [-2, 1, 2, 3].into_iter().collect();
///
/// // Squaring maps -2 and 2 onto the same value.
/// let squares = transform::map(&t, Reverse(Natural), |v| v * v);
/// assert_eq!(squares.in_order(), [9, 4, 1]);
/// ```
pub fn map<T, C, U, D, F>(tree: &Tree<T, C>, cmp: D, mut f: F) -> Tree<U, D>
where
    D: Comparator<U>,
    F: FnMut(&T) -> U,
{
    let mut out = Tree::with_comparator(cmp);
    for v in tree.iter_order(Traversal::PreOrder) {
        out.insert(f(v));
    }
    out
}

/// Build a new tree with the same comparator as `tree`, holding copies of the
/// values for which `predicate` returns true.
pub fn filter<T, C, P>(tree: &Tree<T, C>, mut predicate: P) -> Tree<T, C>
where
    T: Clone,
    C: Comparator<T> + Clone,
    P: FnMut(&T) -> bool,
{
    let mut out = Tree::with_comparator(tree.comparator().clone());
    for v in tree.iter_order(Traversal::PreOrder) {
        if predicate(v) {
            out.insert(v.clone());
        }
    }
    out
}

/// Fold the values of `tree` in sorted (in-order) order.
///
/// As the in-order sequence depends only on the values in the tree, the result
/// does not depend on the order in which they were inserted.
pub fn reduce<T, C, U, F>(tree: &Tree<T, C>, initial: U, f: F) -> U
where
    F: FnMut(U, &T) -> U,
{
    tree.iter().fold(initial, f)
}
