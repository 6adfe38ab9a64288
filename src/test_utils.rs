use std::fmt::Debug;

use proptest::prelude::*;

use crate::{compare::Comparator, Tree};

/// The exclusive upper bound of values generated for property tests.
///
/// Kept small so that generated operations frequently hit values already in
/// the tree.
pub(crate) const N_VALUES: usize = 50;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Op {
    Insert(usize),
    Find(usize),
    Remove(usize),
    Iter,
}

pub(crate) fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..N_VALUES).prop_map(Op::Insert),
        (0..N_VALUES).prop_map(Op::Find),
        (0..N_VALUES).prop_map(Op::Remove),
        Just(Op::Iter),
    ]
}

/// Assert the ordering and count invariants of `t`:
///
///   * every left child orders before its parent, and every right child
///     after it, under the tree comparator.
///   * the in-order sequence of values is strictly increasing.
///   * the number of nodes matches `t.len()`.
///
pub(crate) fn validate_tree_structure<T, C>(t: &Tree<T, C>)
where
    T: Debug,
    C: Comparator<T>,
{
    let cmp = t.comparator();

    // Pre-order walk checking each parent / child pair.
    let mut n_nodes = 0;
    let mut stack = t.root().into_iter().collect::<Vec<_>>();
    while let Some(n) = stack.pop() {
        n_nodes += 1;

        if let Some(left) = n.left() {
            assert!(
                cmp.less(left.value(), n.value()),
                "left child {:?} does not order before parent {:?}",
                left.value(),
                n.value()
            );
            stack.push(left);
        }

        if let Some(right) = n.right() {
            assert!(
                cmp.less(n.value(), right.value()),
                "right child {:?} does not order after parent {:?}",
                right.value(),
                n.value()
            );
            stack.push(right);
        }
    }

    assert_eq!(n_nodes, t.len(), "node count does not match len()");

    // The parent / child checks are local; the in-order sequence catches a
    // value placed on the wrong side of a more distant ancestor.
    let values = t.iter().collect::<Vec<_>>();
    for w in values.windows(2) {
        assert!(
            cmp.less(w[0], w[1]),
            "in-order values {:?} and {:?} are not strictly increasing",
            w[0],
            w[1]
        );
    }

    assert_eq!(t.is_empty(), t.len() == 0);
}
