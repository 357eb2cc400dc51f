//! The source of node priorities.
//!
//! Every node gets a priority drawn from one generator per thread, not one per
//! process, so drawing never takes a lock.  A single-threaded program sees
//! exactly one generator.
//!
//! Each generator is seeded from OS entropy the first time its thread creates
//! a node and is never reseeded.  Priorities only shape the tree; they never
//! affect which entries a map holds or the order it yields them in.

use std::cell::RefCell;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

thread_local! {
    static SOURCE: RefCell<StdRng> = RefCell::new(seeded());
}

fn seeded() -> StdRng {
    debug!("seeding treap priority source from OS entropy");
    StdRng::from_entropy()
}

/// Draws a fresh priority, uniform over all of `u64`.
pub(crate) fn draw() -> u64 {
    SOURCE.with(|rng| rng.borrow_mut().gen())
}
