use std::cmp::Ordering;

/// A strict weak ordering over `T`.
///
/// Two values are considered equivalent (and therefore the same element of a
/// [`Tree`](crate::Tree)) when neither is [`less`](Comparator::less) than the
/// other.
///
/// Any `Fn(&T, &T) -> bool` closure is a [`Comparator`], which makes ordering
/// by a projection straightforward:
///
/// ```
/// use ordtree::Tree;
///
/// let mut t = Tree::with_comparator(|a: &(u32, char), b: &(u32, char)| a.0 < b.0);
/// t.insert((2, 'b'));
/// t.insert((1, 'p'));
///
/// // Only the id takes part in the ordering.
/// assert!(t.find(&(2, '?')));
/// assert_eq!(t.get(&(1, '?')), Some(&(1, 'p')));
/// ```
///
/// Implementations that are not strict weak orderings (for example, a
/// non-transitive relation) leave the tree in an unspecified (but memory safe)
/// state.
pub trait Comparator<T: ?Sized> {
    /// Returns true when `a` strictly precedes `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Derive a total [`Ordering`] from [`Comparator::less`].
    fn compare(&self, a: &T, b: &T) -> Ordering {
        if self.less(a, b) {
            Ordering::Less
        } else if self.less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Returns true when neither value precedes the other.
    fn equivalent(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

/// Orders values by their [`PartialOrd`] implementation.
///
/// This is the default comparator of a [`Tree`](crate::Tree).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<T> Comparator<T> for Natural
where
    T: PartialOrd + ?Sized,
{
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Inverts the ordering of the wrapped comparator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reverse<C>(pub C);

impl<T, C> Comparator<T> for Reverse<C>
where
    C: Comparator<T>,
    T: ?Sized,
{
    fn less(&self, a: &T, b: &T) -> bool {
        self.0.less(b, a)
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
    T: ?Sized,
{
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
