//! A sorted set built on [`TreapMap`].

use super::{IntoIter as MapIntoIter, Iter as MapIter, Range as MapRange, TreapMap};
use crate::error::Result;
use std::borrow::Borrow;
use std::fmt::{Debug, Formatter};
use std::iter::FusedIterator;
use std::ops::RangeBounds;

/// A sorted set of values.
///
/// The implementation is a thin wrapper around [`TreapMap`].
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TreapSet<T> {
    map: TreapMap<T, ()>,
}

impl<T> TreapSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        TreapSet {
            map: TreapMap::new(),
        }
    }

    /// Removes all the entries from self.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns the least value in the set.
    pub fn first(&self) -> Option<&T> {
        self.map.first_key_value().map(|(k, _)| k)
    }

    /// Returns the greatest value in the set.
    pub fn last(&self) -> Option<&T> {
        self.map.last_key_value().map(|(k, _)| k)
    }

    /// Returns true if the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns an iterator over the set's values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            iter: self.map.iter(),
        }
    }
}

impl<T: Ord> TreapSet<T> {
    /// Moves all elements from other into self and leaves other empty.
    pub fn append(&mut self, other: &mut Self) {
        self.map.append(&mut other.map);
    }

    /// Validates the underlying tree.  See [`TreapMap::check`].
    pub fn check(&self) -> Result<()> {
        self.map.check()
    }

    /// Tests if self contains the given value.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.contains(value)
    }

    /// Returns a reference to the element matching value, if it exists.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.find(value).key()
    }

    /// Adds a value to the set.  Returns true if the value was not already
    /// present.
    ///
    /// # Examples
    /// ```
    /// use treap_collections::TreapSet;
    ///
    /// let mut s = TreapSet::new();
    /// assert!(s.insert(3));
    /// assert!(!s.insert(3));
    /// assert_eq!(s.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        self.map.insert(value, ())
    }

    /// Removes a value from the set.  Returns true if the value was present.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.remove(value).is_some()
    }

    /// Returns an iterator over the values in the given range, in ascending
    /// order.
    ///
    /// # Examples
    /// ```
    /// use treap_collections::TreapSet;
    ///
    /// let s = TreapSet::from([5, 1, 3, 9, 7]);
    /// let v: Vec<_> = s.range(3..8).copied().collect();
    /// assert_eq!(v, vec![3, 5, 7]);
    /// ```
    pub fn range<Q, R>(&self, range: R) -> Range<'_, T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
        R: RangeBounds<Q>,
    {
        Range {
            iter: self.map.range(range),
        }
    }

    /// Moves every value greater than or equal to `value` into a new set.
    pub fn split_off<Q>(&mut self, value: &Q) -> Self
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        TreapSet {
            map: self.map.split_off(value),
        }
    }
}

impl<T> Default for TreapSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for TreapSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> Extend<T> for TreapSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.map.extend(iter.into_iter().map(|x| (x, ())));
    }
}

impl<T: Ord> FromIterator<T> for TreapSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut s = TreapSet::new();
        s.extend(iter);
        s
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for TreapSet<T> {
    fn from(vs: [T; N]) -> Self {
        TreapSet::from_iter(vs)
    }
}

impl<'a, T> IntoIterator for &'a TreapSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for TreapSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            iter: self.map.into_iter(),
        }
    }
}

/// An iterator over the values of a [`TreapSet`], in ascending order.
pub struct Iter<'a, T> {
    iter: MapIter<'a, T, ()>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// An iterator over the values of a [`TreapSet`] within a range.
pub struct Range<'a, T> {
    iter: MapRange<'a, T, ()>,
}

impl<'a, T> Iterator for Range<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(k, _)| k)
    }
}

impl<'a, T> FusedIterator for Range<'a, T> {}

/// An owning iterator over the values of a [`TreapSet`], in ascending order.
pub struct IntoIter<T> {
    iter: MapIntoIter<T, ()>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
