//! Comparison rules used to order elements.
//!
//! A tree is parameterized by a [`Comparator`]. The default, [`OrdComparator`],
//! defers to `Ord`. Closures can be supplied either as a three-way comparison
//! ([`FnComparator`]) or as a strict less-than predicate ([`LessThan`]).

use std::cmp::Ordering;

/// Three-way comparison between two elements.
///
/// Implementations must describe a total order. Two elements comparing
/// `Equal` are treated as the same key.
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders elements by their `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrdComparator;

impl<T: Ord> Comparator<T> for OrdComparator {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders elements with a three-way comparison closure.
#[derive(Clone, Copy)]
pub struct FnComparator<F>(pub F);

impl<T, F> Comparator<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

/// Orders elements with a strict less-than predicate.
///
/// Equality is derived: neither element is less than the other.
#[derive(Clone, Copy)]
pub struct LessThan<F>(pub F);

impl<T, F> Comparator<T> for LessThan<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        if (self.0)(b, a) {
            Ordering::Greater
        } else if (self.0)(a, b) {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }
}

/// Inverts another comparator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseComparator<C>(pub C);

impl<T, C: Comparator<T>> Comparator<T> for ReverseComparator<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

impl<F> std::fmt::Debug for FnComparator<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnComparator")
    }
}

impl<F> std::fmt::Debug for LessThan<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("LessThan")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ord_comparator() {
        assert_eq!(OrdComparator.compare(&1, &2), Ordering::Less);
        assert_eq!(OrdComparator.compare(&2, &2), Ordering::Equal);
        assert_eq!(OrdComparator.compare(&3, &2), Ordering::Greater);
    }

    #[test]
    fn test_less_than_derives_three_way() {
        let cmp = LessThan(|a: &i32, b: &i32| a < b);
        assert_eq!(cmp.compare(&1, &2), Ordering::Less);
        assert_eq!(cmp.compare(&2, &2), Ordering::Equal);
        assert_eq!(cmp.compare(&3, &2), Ordering::Greater);
    }

    #[test]
    fn test_less_than_on_projection() {
        // Only the first field takes part in ordering.
        let cmp = LessThan(|a: &(i32, &str), b: &(i32, &str)| a.0 < b.0);
        assert_eq!(cmp.compare(&(1, "x"), &(1, "y")), Ordering::Equal);
    }

    #[test]
    fn test_fn_and_reverse_comparators() {
        let by_len = FnComparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
        assert_eq!(by_len.compare(&"ab", &"abc"), Ordering::Less);

        let reversed = ReverseComparator(by_len);
        assert_eq!(reversed.compare(&"ab", &"abc"), Ordering::Greater);
    }
}
