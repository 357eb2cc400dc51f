use std::fmt::{Debug, Formatter};
use std::iter::FusedIterator;

use super::{Node, OptNode};
use crate::error::{Error, Result};

/// A position in the in-order traversal of a [`TreapMap`](super::TreapMap).
///
/// A cursor is either positioned at an entry or at the end, one past the
/// greatest key.  It remembers the ancestors whose right subtrees it has yet to
/// visit, so [`advance`](#method.advance) never needs parent links.
///
/// Cursors borrow their map, so the map cannot change while one is alive.
/// Two cursors are equal if both are at the end or both are positioned at
/// equal keys.  Comparing cursors from different maps is meaningless.
pub struct Cursor<'a, K, V> {
    curr: Option<&'a Node<K, V>>,
    spine: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Cursor<'a, K, V> {
    pub(super) fn new(curr: Option<&'a Node<K, V>>, spine: Vec<&'a Node<K, V>>) -> Self {
        // an end cursor never keeps ancestors around
        let spine = if curr.is_some() { spine } else { Vec::new() };
        Cursor { curr, spine }
    }

    pub(super) fn end() -> Self {
        Cursor {
            curr: None,
            spine: Vec::new(),
        }
    }

    // Moves to the least node of the subtree rooted at n.
    pub(super) fn descend_left(&mut self, mut n: &'a Node<K, V>) {
        while let Some(lf) = n.left.as_deref() {
            self.spine.push(n);
            n = lf;
        }
        self.curr = Some(n);
    }

    // Moves to the in-order successor; a no-op at the end.
    fn step(&mut self) {
        if let Some(n) = self.curr {
            match n.right.as_deref() {
                Some(rt) => self.descend_left(rt),
                None => self.curr = self.spine.pop(),
            }
        }
    }

    /// Is the cursor past the last entry?
    pub fn is_end(&self) -> bool {
        self.curr.is_none()
    }

    /// Returns the key at the cursor, or `None` at the end.
    pub fn key(&self) -> Option<&'a K> {
        self.curr.map(|n| &n.key)
    }

    /// Returns references to the entry at the cursor, or `None` at the end.
    pub fn peek(&self) -> Option<(&'a K, &'a V)> {
        self.curr.map(|n| (&n.key, &n.val))
    }

    /// Returns a copy of the entry at the cursor.
    ///
    /// The copy is detached from the map; changing it does not change the map.
    ///
    /// # Errors
    /// Returns [`Error::DerefEnd`] if the cursor is at the end.
    #[doc(alias = "deref")]
    pub fn get(&self) -> Result<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.peek()
            .map(|(k, v)| (k.clone(), v.clone()))
            .ok_or(Error::DerefEnd)
    }

    /// Moves the cursor to the next entry in key order, or to the end if it
    /// was at the last entry.
    ///
    /// # Errors
    /// Returns [`Error::AdvanceEnd`] if the cursor is already at the end.
    ///
    /// # Examples
    /// ```
    /// use treap_collections::{Error, TreapMap};
    ///
    /// let m = TreapMap::from([(1, ())]);
    /// let mut c = m.begin();
    /// assert_eq!(c.advance(), Ok(()));
    /// assert!(c.is_end());
    /// assert_eq!(c.advance(), Err(Error::AdvanceEnd));
    /// ```
    pub fn advance(&mut self) -> Result<()> {
        if self.is_end() {
            return Err(Error::AdvanceEnd);
        }
        self.step();
        Ok(())
    }

    // Do both cursors sit on the same node (or both at the end)?
    fn same_node(&self, other: &Self) -> bool {
        match (self.curr, other.curr) {
            (Some(a), Some(b)) => std::ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<'a, K, V> Clone for Cursor<'a, K, V> {
    fn clone(&self) -> Self {
        Cursor {
            curr: self.curr,
            spine: self.spine.clone(),
        }
    }
}

impl<'a, K: PartialEq, V> PartialEq for Cursor<'a, K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<'a, K: Debug, V> Debug for Cursor<'a, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.key() {
            None => f.write_str("Cursor(END)"),
            Some(k) => f.write_fmt(format_args!("Cursor({:?})", k)),
        }
    }
}

/// An iterator over the entries of a map, sorted by key.
pub struct Iter<'a, K, V> {
    cursor: Cursor<'a, K, V>,
    len: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(super) fn new(cursor: Cursor<'a, K, V>, len: usize) -> Self {
        Iter { cursor, len }
    }
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter {
            cursor: self.cursor.clone(),
            len: self.len,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.cursor.peek()?;
        self.cursor.step();
        self.len -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

/// A lazy iterator over the entries of a map whose keys fall in a range.
///
/// The range is the span between two cursors: iteration starts at the front
/// cursor and stops on reaching the back cursor.
pub struct Range<'a, K, V> {
    front: Cursor<'a, K, V>,
    back: Cursor<'a, K, V>,
}

impl<'a, K, V> Range<'a, K, V> {
    pub(super) fn new(front: Cursor<'a, K, V>, back: Cursor<'a, K, V>) -> Self {
        Range { front, back }
    }

    /// Returns the pair of cursors delimiting the range: the first entry
    /// included and the first entry past the range.
    pub fn cursors(&self) -> (&Cursor<'a, K, V>, &Cursor<'a, K, V>) {
        (&self.front, &self.back)
    }
}

impl<'a, K, V> Clone for Range<'a, K, V> {
    fn clone(&self) -> Self {
        Range {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<'a, K: Debug, V> Debug for Range<'a, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("treap_collections::Range")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

impl<'a, K, V> Iterator for Range<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front.same_node(&self.back) {
            return None;
        }

        let entry = self.front.peek()?;
        self.front.step();
        Some(entry)
    }
}

impl<'a, K, V> FusedIterator for Range<'a, K, V> {}

enum IterMutAction<'a, K, V> {
    Descend(&'a mut Node<K, V>),
    Return((&'a K, &'a mut V)),
}

/// An iterator over the entries of a map, sorted by key, with mutable
/// references to the values.
pub struct IterMut<'a, K, V> {
    work: Vec<IterMutAction<'a, K, V>>,
    len: usize,
}

impl<'a, K, V> IterMut<'a, K, V> {
    pub(super) fn new(root: Option<&'a mut Node<K, V>>, len: usize) -> Self {
        let work = match root {
            Some(n) => vec![IterMutAction::Descend(n)],
            None => Vec::new(),
        };

        IterMut { work, len }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        use IterMutAction::*;

        let mut n = match self.work.pop() {
            Some(Descend(n)) => n,

            Some(Return(ret)) => {
                self.len -= 1;
                return Some(ret); // *** EARLY RETURN ***
            }

            None => {
                assert_eq!(self.len, 0);
                return None;
            }
        };

        loop {
            let Node {
                key,
                val,
                left,
                right,
                ..
            } = n;

            if let Some(rt) = right.as_deref_mut() {
                self.work.push(Descend(rt));
            }

            match left.as_deref_mut() {
                Some(lf) => {
                    self.work.push(Return((&*key, val)));
                    n = lf;
                }

                None => {
                    self.len -= 1;
                    return Some((&*key, val));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, K, V> FusedIterator for IterMut<'a, K, V> {}

/// An owning iterator over the entries of a map, sorted by key.
pub struct IntoIter<K, V> {
    // each node on the stack has already lost its left subtree
    work: Vec<Box<Node<K, V>>>,
    len: usize,
}

impl<K, V> IntoIter<K, V> {
    pub(super) fn new(root: OptNode<K, V>, len: usize) -> Self {
        let mut iter = IntoIter {
            work: Vec::new(),
            len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut curr: OptNode<K, V>) {
        while let Some(mut n) = curr {
            curr = n.left.take();
            self.work.push(n);
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let mut n = self.work.pop()?;
        self.push_left_spine(n.right.take());
        self.len -= 1;

        let Node { key, val, .. } = *n;
        Some((key, val))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}
