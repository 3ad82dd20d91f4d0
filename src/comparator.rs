//! Key ordering.
//!
//! A [`TreeMap`](crate::TreeMap) orders its keys with a [`Comparator`]. The default,
//! [`NaturalOrder`], uses the key's [`Ord`] instance and never fails. [`PartialOrder`] accepts
//! keys that are only [`PartialOrd`] (floats, for example) and reports incomparable pairs,
//! which the map surfaces as [`MapError::Incomparable`](crate::MapError::Incomparable).
//! [`FnOrder`] wraps a caller-supplied total order.

use std::cmp::Ordering;

/// A total order over keys.
///
/// Returning `None` means the two keys cannot be compared; the map operation that asked
/// fails without modifying the map.
pub trait Comparator<K: ?Sized> {
    fn compare(&self, a: &K, b: &K) -> Option<Ordering>;
}

/// Orders keys by their [`Ord`] instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        Some(a.cmp(b))
    }
}

/// Orders keys by their [`PartialOrd`] instance, rejecting pairs it cannot order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PartialOrder;

impl<K: PartialOrd + ?Sized> Comparator<K> for PartialOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        a.partial_cmp(b)
    }
}

/// Orders keys by a caller-supplied function.
///```
/// use arbor::{FnOrder, TreeMap, Unbalanced};
///
/// let mut map: TreeMap<i32, (), Unbalanced, _> =
///     TreeMap::with_comparator(FnOrder(|a: &i32, b: &i32| b.cmp(a)));
/// for k in 1..=3 {
///     map.put(k, ()).unwrap();
/// }
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
///```
#[derive(Clone, Copy)]
pub struct FnOrder<F>(pub F);

impl<K: ?Sized, F> Comparator<K> for FnOrder<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        Some((self.0)(a, b))
    }
}

impl<F> std::fmt::Debug for FnOrder<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnOrder(..)")
    }
}
