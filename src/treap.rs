//! The treap behind [`TreapMap`] and [`TreapSet`](treap_set::TreapSet), with
//! its cursors and iterators.

#![warn(missing_docs)]
use std::borrow::Borrow;
use std::cmp::Ordering::*;
use std::fmt::{Debug, Formatter};
use std::mem::{replace, take};
use std::ops::{Bound, RangeBounds};

use log::{trace, warn};

use crate::error::{Error, Result};
use crate::priority;

mod cursor;
pub use cursor::{Cursor, IntoIter, Iter, IterMut, Range};

pub mod treap_set;

type OptNode<K, V> = Option<Box<Node<K, V>>>;

#[derive(Clone)]
struct Node<K, V> {
    key: K,
    val: V,
    prio: u64,
    left: OptNode<K, V>,
    right: OptNode<K, V>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, val: V, prio: u64) -> Self {
        Node {
            key,
            val,
            prio,
            left: None,
            right: None,
        }
    }
}

impl<K: Debug, V: Debug> Debug for Node<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("({{{:?}: {:?}}} ", self.key, self.val))?;

        match &self.left {
            None => f.write_str(".")?,
            Some(lf) => lf.fmt(f)?,
        }

        f.write_str(" ")?;

        match &self.right {
            None => f.write_str(".")?,
            Some(rt) => rt.fmt(f)?,
        }

        f.write_str(")")
    }
}

fn len<K, V>(opt_node: &OptNode<K, V>) -> usize {
    opt_node
        .as_ref()
        .map_or(0, |n| len(&n.left) + 1 + len(&n.right))
}

#[cfg(test)]
fn height<K, V>(opt_node: &OptNode<K, V>) -> usize {
    opt_node
        .as_ref()
        .map_or(0, |n| height(&n.left).max(height(&n.right)) + 1)
}

// Partitions the tree into keys less than k and keys greater than or equal to
// k.  Every node ends up in exactly one of the two results.
fn split<K, V, Q>(opt_root: OptNode<K, V>, k: &Q) -> (OptNode<K, V>, OptNode<K, V>)
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let Some(mut n) = opt_root else {
        return (None, None);
    };

    if n.key.borrow() < k {
        // n(x, y) with n < k  =>  (n(x, y_lo), y_hi)
        let (lo, hi) = split(n.right.take(), k);
        n.right = lo;
        (Some(n), hi)
    } else {
        // n(x, y) with k <= n  =>  (x_lo, n(x_hi, y))
        let (lo, hi) = split(n.left.take(), k);
        n.left = hi;
        (lo, Some(n))
    }
}

// Three-way split: keys less than k, the node holding k (if any, detached from
// its children), and keys greater than k.
#[allow(clippy::type_complexity)]
fn split_at<K, V, Q>(
    opt_root: OptNode<K, V>,
    k: &Q,
) -> (OptNode<K, V>, OptNode<K, V>, OptNode<K, V>)
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let Some(mut n) = opt_root else {
        return (None, None, None);
    };

    match k.cmp(n.key.borrow()) {
        Equal => {
            let lt = n.left.take();
            let gt = n.right.take();
            (lt, Some(n), gt)
        }

        Less => {
            let (lt, eq, gt) = split_at(n.left.take(), k);
            n.left = gt;
            (lt, eq, Some(n))
        }

        Greater => {
            let (lt, eq, gt) = split_at(n.right.take(), k);
            n.right = lt;
            (Some(n), eq, gt)
        }
    }
}

// Combines two trees where every key in lhs is less than every key in rhs.
// The root with the higher priority wins; on a tie the rhs root wins.
fn merge<K, V>(lhs: OptNode<K, V>, rhs: OptNode<K, V>) -> OptNode<K, V> {
    match (lhs, rhs) {
        (None, rhs) => rhs,
        (lhs, None) => lhs,

        (Some(mut l), Some(mut r)) => {
            if l.prio > r.prio {
                // l(x, y) + r  =>  l(x, y + r)
                l.right = merge(l.right.take(), Some(r));
                Some(l)
            } else {
                // l + r(x, y)  =>  r(l + x, y)
                r.left = merge(Some(l), r.left.take());
                Some(r)
            }
        }
    }
}

// Walks the tree in order, validating key order and heap order.  `pos` counts
// the nodes visited so far.
fn chk<'a, K: Ord, V>(
    opt_node: &'a OptNode<K, V>,
    greatest: &mut Option<&'a K>,
    pos: &mut usize,
) -> Result<()> {
    let Some(n) = opt_node else {
        return Ok(());
    };

    chk(&n.left, greatest, pos)?;

    if greatest.is_some_and(|g| *g >= n.key) {
        return Err(Error::Unordered(*pos));
    }

    let kids = [&n.left, &n.right];
    if kids.into_iter().flatten().any(|kid| kid.prio > n.prio) {
        return Err(Error::HeapOrder(*pos));
    }

    *greatest = Some(&n.key);
    *pos += 1;

    chk(&n.right, greatest, pos)
}

/// A map from keys to values sorted by key.
///
/// The map is a [treap](https://en.wikipedia.org/wiki/Treap): a binary search
/// tree on the keys that is simultaneously a max-heap on random priorities
/// assigned when entries are created.  The random priorities keep the expected
/// depth of the tree logarithmic without any rotation-based rebalancing.  Every
/// update is built from two primitives, a `split` of the tree around a key and
/// a `merge` of two trees whose key ranges do not overlap.
///
/// Besides the usual [`Iterator`]s, the map offers C++-style [`Cursor`]s:
/// [`begin`](#method.begin), [`end`](#method.end), [`find`](#method.find),
/// [`lower_bound`](#method.lower_bound) and
/// [`upper_bound`](#method.upper_bound).  Cursors borrow the map, so it cannot
/// be modified while any of them is alive.
///
/// Unlike [`std::collections::BTreeMap::insert`], [`insert`](#method.insert)
/// never overwrites the value of a key that is already present.
#[derive(Clone)]
pub struct TreapMap<K, V> {
    len: usize,
    root: OptNode<K, V>,
}

impl<K: Debug, V: Debug> Debug for TreapMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.root {
            None => f.write_str("TreapMap(EMPTY)"),
            Some(n) => {
                // use Node's Debug formatter
                f.write_fmt(format_args!("TreapMap(#{}, {:?})", self.len, n))
            }
        }
    }
}

impl<K, V> PartialEq for TreapMap<K, V>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().zip(other.iter()).all(|(x, y)| x == y)
    }
}

impl<K: Eq, V: Eq> Eq for TreapMap<K, V> {}

impl<K, V> PartialOrd for TreapMap<K, V>
where
    K: PartialOrd,
    V: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<K: Ord, V: Ord> Ord for TreapMap<K, V> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<K, V> std::hash::Hash for TreapMap<K, V>
where
    K: std::hash::Hash,
    V: std::hash::Hash,
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for (k, v) in self.iter() {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl<K, Q, V> std::ops::Index<&Q> for TreapMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Output = V;

    fn index(&self, index: &Q) -> &Self::Output {
        match self.get(index) {
            Some(v) => v,
            None => panic!("Key not found in TreapMap"),
        }
    }
}

impl<K, V> TreapMap<K, V> {
    /// Creates a new, empty map.
    /// # Examples
    /// ```
    /// use treap_collections::TreapMap;
    /// let m: TreapMap<usize, usize> = TreapMap::new();
    /// assert!(m.is_empty());
    /// ```
    pub fn new() -> Self {
        TreapMap { len: 0, root: None }
    }

    /// Drops all elements from the map.
    pub fn clear(&mut self) {
        self.len = 0;
        self.root = None;
    }

    /// Returns true if self contains no entries, false otherwise.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of entries in self.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Creates an iterator over the map entries, sorted by key.
    ///
    /// # Examples
    /// ```
    /// use treap_collections::TreapMap;
    ///
    /// let m = TreapMap::from([(0, 1), (1, 2), (2, 3)]);
    /// for (i, (k, v)) in m.iter().enumerate() {
    ///     assert_eq!(&i, k);
    ///     assert_eq!(&(i + 1), v);
    /// }
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.begin(), self.len)
    }

    /// Returns an iterator of the map's entries, sorted by key, with a mutable
    /// reference to each value.
    ///
    /// # Examples
    /// ```
    /// use treap_collections::TreapMap;
    ///
    /// let mut m = TreapMap::from([(0, 0), (1, 1), (2, 2)]);
    /// for (k, v) in m.iter_mut() {
    ///     *v += k;
    /// }
    /// assert_eq!(m.get(&2), Some(&4));
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(self.root.as_deref_mut(), self.len)
    }

    /// Produces an iterator over the keys of the map, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|p| p.0)
    }

    /// Produces an iterator over the values of the map, ordered by their keys.
    ///
    /// # Examples
    /// ```
    /// use treap_collections::TreapMap;
    ///
    /// let m = TreapMap::from([(0, 0), (1, 1), (2, 2)]);
    /// let sum_values: u32 = m.values().sum();
    /// assert_eq!(sum_values, 3);
    /// ```
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|p| p.1)
    }

    /// Produces an iterator of mutable references to the map's values, ordered
    /// by their keys.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.iter_mut().map(|p| p.1)
    }

    /// Returns a cursor at the entry with the least key, or the end cursor if
    /// the map is empty.
    pub fn begin(&self) -> Cursor<'_, K, V> {
        let mut cursor = Cursor::end();
        if let Some(n) = self.root.as_deref() {
            cursor.descend_left(n);
        }
        cursor
    }

    /// Returns the end cursor, the position one past the greatest key.
    pub fn end(&self) -> Cursor<'_, K, V> {
        Cursor::end()
    }

    /// Returns the key-value pair with the least key.
    ///
    /// # Examples
    /// ```
    /// use treap_collections::TreapMap;
    /// let m = TreapMap::from([(2, 0), (1, 0)]);
    /// assert_eq!(m.first_key_value(), Some((&1, &0)));
    /// ```
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        let mut curr = self.root.as_deref()?;
        while let Some(n) = curr.left.as_deref() {
            curr = n;
        }
        Some((&curr.key, &curr.val))
    }

    /// Returns the key-value pair with the greatest key.
    ///
    /// # Examples
    /// ```
    /// use treap_collections::TreapMap;
    /// let m = TreapMap::from([(2, 0), (1, 0)]);
    /// assert_eq!(m.last_key_value(), Some((&2, &0)));
    /// ```
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        let mut curr = self.root.as_deref()?;
        while let Some(n) = curr.right.as_deref() {
            curr = n;
        }
        Some((&curr.key, &curr.val))
    }

    #[cfg(test)]
    fn height(&self) -> usize {
        height(&self.root)
    }
}

impl<K: Ord, V> TreapMap<K, V> {
    /// Inserts a key-value pair if the key is absent.
    ///
    /// Returns true if the entry was added.  If the key is already present,
    /// the map is left untouched, including the stored value.
    ///
    /// # Examples
    /// ```
    /// use treap_collections::TreapMap;
    ///
    /// let mut m = TreapMap::new();
    /// assert!(m.insert(0, "a"));
    /// assert!(!m.insert(0, "b"));
    /// assert_eq!(m.get(&0), Some(&"a"));
    /// ```
    pub fn insert(&mut self, key: K, val: V) -> bool {
        if self.contains(&key) {
            return false;
        }

        let (lo, hi) = split(self.root.take(), &key);
        let n = Box::new(Node::new(key, val, priority::draw()));
        self.root = merge(lo, merge(Some(n), hi));
        self.len += 1;
        true
    }

    /// Removes a key from the map and returns its value, if it was present.
    ///
    /// # Examples
    /// ```
    /// use treap_collections::TreapMap;
    ///
    /// let mut m = TreapMap::new();
    /// m.insert(1, 2);
    /// m.insert(2, 3);
    /// assert_eq!(m.remove(&2), Some(3));
    /// assert_eq!(m.remove(&2), None);
    /// ```
    #[doc(alias = "erase")]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (lt, eq, gt) = split_at(self.root.take(), key);
        self.root = merge(lt, gt);
        eq.map(|n| {
            self.len -= 1;
            n.val
        })
    }

    /// Tests if self contains an entry for the given key.
    #[doc(alias = "is_present")]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns a reference to the value associated with k.
    ///
    /// # Example
    /// ```
    /// use treap_collections::TreapMap;
    ///
    /// let mut m = TreapMap::new();
    /// m.insert(0, 100);
    /// assert_eq!(m.get(&0), Some(&100));
    /// ```
    pub fn get<Q>(&self, k: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut curr = &self.root;
        while let Some(n) = curr {
            match k.cmp(n.key.borrow()) {
                Less => curr = &n.left,
                Equal => return Some(&n.val),
                Greater => curr = &n.right,
            }
        }

        None
    }

    /// Returns a mutable reference to the value associated with k.
    ///
    /// # Example
    /// ```
    /// use treap_collections::TreapMap;
    ///
    /// let mut m = TreapMap::new();
    /// m.insert(1, 7);
    /// if let Some(v) = m.get_mut(&1) {
    ///     *v = 2;
    /// }
    /// assert_eq!(m.get(&1), Some(&2));
    /// ```
    pub fn get_mut<Q>(&mut self, k: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut curr = &mut self.root;
        while let Some(n) = curr {
            match k.cmp(n.key.borrow()) {
                Less => curr = &mut n.left,
                Equal => return Some(&mut n.val),
                Greater => curr = &mut n.right,
            }
        }

        None
    }

    /// Returns a cursor at the entry for the given key, or the end cursor if
    /// the key is absent.
    ///
    /// # Examples
    /// ```
    /// use treap_collections::TreapMap;
    ///
    /// let m = TreapMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
    /// let mut c = m.find(&2);
    /// assert_eq!(c.get(), Ok((2, 'b')));
    /// c.advance().unwrap();
    /// assert_eq!(c.get(), Ok((3, 'c')));
    /// assert!(m.find(&7).is_end());
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Cursor<'_, K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut spine = Vec::new();
        let mut curr = self.root.as_deref();
        while let Some(n) = curr {
            match key.cmp(n.key.borrow()) {
                Less => {
                    spine.push(n);
                    curr = n.left.as_deref();
                }
                Equal => return Cursor::new(Some(n), spine),
                Greater => curr = n.right.as_deref(),
            }
        }

        Cursor::end()
    }

    /// Returns a cursor at the first entry whose key is not less than `key`.
    ///
    /// # Examples
    /// ```
    /// use treap_collections::TreapMap;
    ///
    /// let m = TreapMap::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(m.lower_bound(&20).key(), Some(&20));
    /// assert_eq!(m.lower_bound(&21).key(), Some(&30));
    /// assert!(m.lower_bound(&31).is_end());
    /// ```
    pub fn lower_bound<Q>(&self, key: &Q) -> Cursor<'_, K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.bound(key, true)
    }

    /// Returns a cursor at the first entry whose key is greater than `key`.
    ///
    /// # Examples
    /// ```
    /// use treap_collections::TreapMap;
    ///
    /// let m = TreapMap::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(m.upper_bound(&20).key(), Some(&30));
    /// assert_eq!(m.upper_bound(&9).key(), Some(&10));
    /// assert!(m.upper_bound(&30).is_end());
    /// ```
    pub fn upper_bound<Q>(&self, key: &Q) -> Cursor<'_, K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.bound(key, false)
    }

    // Every node we turn left at is a candidate, and each later candidate is
    // smaller than the ones before it, so the best candidate is always on top
    // of the spine.
    fn bound<Q>(&self, key: &Q, inclusive: bool) -> Cursor<'_, K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut spine = Vec::new();
        let mut curr = self.root.as_deref();
        while let Some(n) = curr {
            match key.cmp(n.key.borrow()) {
                Less => {
                    spine.push(n);
                    curr = n.left.as_deref();
                }
                Equal if inclusive => return Cursor::new(Some(n), spine),
                Equal | Greater => curr = n.right.as_deref(),
            }
        }

        let best = spine.pop();
        Cursor::new(best, spine)
    }

    /// Returns an iterator over the entries whose keys fall in the given range.
    ///
    /// For a half-open range `a..b` the iterator runs from `lower_bound(a)` up
    /// to, but not including, `lower_bound(b)`.  A range whose start is past
    /// its end is empty.  The returned [`Range`] is lazy; cloning it gives an
    /// independent traversal.
    ///
    /// # Examples
    /// ```
    /// use treap_collections::TreapMap;
    ///
    /// let m = TreapMap::from([(1, 1), (2, 2), (3, 6), (4, 24)]);
    /// let v: Vec<_> = m.range(1..3).collect();
    /// assert_eq!(v, vec![(&1, &1), (&2, &2)]);
    /// assert_eq!(m.range(3..).count(), 2);
    /// ```
    pub fn range<Q, R>(&self, range: R) -> Range<'_, K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        R: RangeBounds<Q>,
    {
        let front = match range.start_bound() {
            Bound::Included(k) => self.lower_bound(k),
            Bound::Excluded(k) => self.upper_bound(k),
            Bound::Unbounded => self.begin(),
        };

        let back = match range.end_bound() {
            Bound::Included(k) => self.upper_bound(k),
            Bound::Excluded(k) => self.lower_bound(k),
            Bound::Unbounded => self.end(),
        };

        match (front.key(), back.key()) {
            (Some(lo), Some(hi)) if lo > hi => Range::new(back.clone(), back),
            _ => Range::new(front, back),
        }
    }

    /// Moves every entry with a key greater than or equal to `key` into a new
    /// map and returns it.
    ///
    /// # Examples
    /// ```
    /// use treap_collections::TreapMap;
    ///
    /// let mut m: TreapMap<_, _> = (0..10).map(|i| (i, i * 2)).collect();
    /// let high = m.split_off(&5);
    /// assert_eq!(m.len(), 5);
    /// assert_eq!(high.first_key_value(), Some((&5, &10)));
    /// ```
    pub fn split_off<Q>(&mut self, key: &Q) -> Self
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (lo, hi) = split(self.root.take(), key);
        let hi_len = len(&hi);
        trace!("split_off moved {} of {} entries", hi_len, self.len);

        self.len -= hi_len;
        self.root = lo;

        TreapMap {
            len: hi_len,
            root: hi,
        }
    }

    /// Moves all entries of other into self and leaves other empty.
    ///
    /// Keys already present in self keep their current values.  When every
    /// key of one map is less than every key of the other, the two trees are
    /// merged directly.
    ///
    /// # Examples
    /// ```
    /// use treap_collections::TreapMap;
    ///
    /// let mut a = TreapMap::from([(1, 'a'), (2, 'b')]);
    /// let mut b = TreapMap::from([(2, 'x'), (3, 'c')]);
    /// a.append(&mut b);
    /// assert!(b.is_empty());
    /// assert_eq!(a.get(&2), Some(&'b'));
    /// assert_eq!(a.len(), 3);
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        let other_len = replace(&mut other.len, 0);

        if precedes(self, other) {
            trace!("append: merging {} entries above", other_len);
            self.root = merge(self.root.take(), other.root.take());
            self.len += other_len;
        } else if precedes(other, self) {
            trace!("append: merging {} entries below", other_len);
            self.root = merge(other.root.take(), self.root.take());
            self.len += other_len;
        } else {
            trace!("append: interleaved keys, inserting {} entries", other_len);
            let other = TreapMap {
                len: other_len,
                root: other.root.take(),
            };
            self.extend(other);
        }
    }

    /// Validates the tree: keys strictly increasing in order, priorities in
    /// heap order, and the cached length matching the number of nodes.
    ///
    /// # Examples
    /// ```
    /// use treap_collections::TreapMap;
    ///
    /// let m: TreapMap<_, _> = (0..100).map(|i| (i, ())).collect();
    /// assert_eq!(m.check(), Ok(()));
    /// ```
    pub fn check(&self) -> Result<()> {
        let mut pos = 0;
        let res = chk(&self.root, &mut None, &mut pos).and_then(|_| {
            if pos == self.len {
                Ok(())
            } else {
                Err(Error::LenMismatch {
                    recorded: self.len,
                    actual: pos,
                })
            }
        });

        if let Err(e) = &res {
            warn!("TreapMap failed validation: {}", e);
        }

        res
    }
}

// Is every key of lhs less than every key of rhs?
fn precedes<K: Ord, V>(lhs: &TreapMap<K, V>, rhs: &TreapMap<K, V>) -> bool {
    match (lhs.last_key_value(), rhs.first_key_value()) {
        (Some((l, _)), Some((r, _))) => l < r,
        _ => true,
    }
}

impl<K, V> Default for TreapMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> Extend<(K, V)> for TreapMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for TreapMap<K, V> {
    fn from(vs: [(K, V); N]) -> Self {
        TreapMap::from_iter(vs)
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for TreapMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut m = TreapMap::new();
        m.extend(iter);
        m
    }
}

impl<'a, K, V> IntoIterator for &'a TreapMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut TreapMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V> IntoIterator for TreapMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.root.take(), take(&mut self.len))
    }
}
