use std::cmp::Ordering;

/// A strategy that defines the order of values in a search tree.
///
/// Any closure `Fn(&T, &T) -> Ordering` is a comparator,
/// and [NaturalOrder](NaturalOrder) uses the `Ord` implementation of `T`.
pub trait Comparator<T: ?Sized> {
    /// Compares two values.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns true if `a` is ordered strictly before `b`.
    #[inline]
    fn is_less(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// A comparator that orders values by their `Ord` implementation.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// A comparator that reverses the order of another comparator.
#[derive(Debug, Default, Clone, Copy)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Comparator<T> for F {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use crate::compare::{Comparator, NaturalOrder, Reversed};
    use std::cmp::Ordering;

    #[test]
    fn test_natural_and_reversed_order() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(Reversed(NaturalOrder).compare(&1, &2), Ordering::Greater);
        assert!(NaturalOrder.is_less("a", "b"));
    }

    #[test]
    fn test_closure_comparator() {
        let by_length = |a: &&str, b: &&str| a.len().cmp(&b.len());
        assert_eq!(by_length.compare(&"abc", &"de"), Ordering::Greater);
    }
}
