//! Total orders over keys
//!
//! A [`BSTMap`](crate::BSTMap) never compares keys directly. Instead it asks its [`TotalOrder`],
//! which is supplied once at construction and never changes for the lifetime of the map.

use std::fmt;
use std::cmp::Ordering;

/// A strict total order over keys of type `K`
///
/// For any two keys exactly one of `Less`, `Equal` or `Greater` must hold, and the order must be
/// transitive. Keys that compare `Equal` are considered the same key by the map.
///
/// Any closure of type `Fn(&K, &K) -> Ordering` is a `TotalOrder<K>`.
///
/// # Examples
///
/// ```
/// use bstmap::BSTMap;
///
/// // Order strings by length first, then lexicographically
/// let mut map = BSTMap::with_order(|a: &String, b: &String| {
///     a.len().cmp(&b.len()).then_with(|| a.cmp(b))
/// });
/// map.insert("ccc".to_string(), 3);
/// map.insert("a".to_string(), 1);
/// map.insert("bb".to_string(), 2);
///
/// let keys: Vec<_> = map.keys().map(String::as_str).collect();
/// assert_eq!(keys, ["a", "bb", "ccc"]);
/// ```
pub trait TotalOrder<K: ?Sized> {
    /// Compares two keys
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

impl<K: ?Sized, F> TotalOrder<K> for F
    where F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// Orders keys by their [`Ord`] implementation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> TotalOrder<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Orders keys by comparing their [`Display`](fmt::Display) renderings as strings
///
/// This is a convenience fallback for key types without a meaningful order of their own. Note that
/// two distinct keys that render to the same string are treated as the same key, and that numbers
/// are ordered lexicographically (`"10" < "9"`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayOrder;

impl<K: fmt::Display + ?Sized> TotalOrder<K> for DisplayOrder {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.to_string().cmp(&b.to_string())
    }
}

/// Reverses another order
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReverseOrder<O>(pub O);

impl<K: ?Sized, O: TotalOrder<K>> TotalOrder<K> for ReverseOrder<O> {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self.0.compare(b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_order() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&2, &2), Ordering::Equal);
        assert_eq!(NaturalOrder.compare("b", "a"), Ordering::Greater);
    }

    #[test]
    fn display_order_is_lexicographic() {
        assert_eq!(DisplayOrder.compare(&10, &9), Ordering::Less);
        assert_eq!(DisplayOrder.compare(&"abc", &"abc"), Ordering::Equal);
        assert_eq!(DisplayOrder.compare(&'z', &'a'), Ordering::Greater);
    }

    #[test]
    fn reverse_order() {
        let order = ReverseOrder(NaturalOrder);
        assert_eq!(order.compare(&1, &2), Ordering::Greater);
        assert_eq!(order.compare(&3, &3), Ordering::Equal);

        // Reversing twice gets back the original order
        let order = ReverseOrder(ReverseOrder(NaturalOrder));
        assert_eq!(order.compare(&1, &2), Ordering::Less);
    }

    #[test]
    fn closure_order() {
        let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
        assert_eq!(by_abs.compare(&-5, &3), Ordering::Greater);
        assert_eq!(by_abs.compare(&-3, &3), Ordering::Equal);
    }
}
