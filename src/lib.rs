//! # Ordered collections backed by a randomized treap
//!
//! `treap_collections` provides [`TreapMap`], a map sorted by key, and
//! [`TreapSet`], a sorted set.  Both keep their entries in a treap, a binary
//! search tree whose nodes also carry random priorities kept in heap order.
//! The priorities give the tree an expected logarithmic depth, so lookups,
//! insertions and removals run in expected `O(log n)` time.
//!
//! Beyond the usual iterators, maps hand out [`Cursor`]s in the style of C++
//! ordered containers: [`TreapMap::begin`], [`TreapMap::find`],
//! [`TreapMap::lower_bound`] and [`TreapMap::upper_bound`].
//!
//! ```
//! use treap_collections::TreapMap;
//!
//! let mut m = TreapMap::new();
//! m.insert(1, 1);
//! m.insert(2, 2);
//! m.insert(3, 6);
//! m.insert(4, 24);
//!
//! assert_eq!(m.lower_bound(&3).get(), Ok((3, 6)));
//! assert_eq!(m.upper_bound(&3).get(), Ok((4, 24)));
//! assert!(m.range(1..3).eq([(&1, &1), (&2, &2)]));
//! ```
//!
//! Priorities come from a per-thread generator seeded from OS entropy.  They
//! only shape the trees; the contents and ordering of a map never depend on
//! them.

mod error;
pub use error::{Error, Result};

mod priority;

pub mod treap;
pub use treap::treap_set::TreapSet;
pub use treap::{Cursor, Range, TreapMap};
