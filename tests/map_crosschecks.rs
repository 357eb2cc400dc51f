use proptest::prelude::*;
use std::collections::BTreeMap as StdMap;
use std::ops::Bound;
use treap_collections::TreapMap;
use Bound::*;

mod common;
use common::*;

#[derive(Clone)]
struct Maps<K, V> {
    treap_map: TreapMap<K, V>,
    std_map: StdMap<K, V>, // std::collections::BTreeMap
}

impl<K, V> Maps<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    fn new(v: Vec<(K, V)>) -> Maps<K, V> {
        Maps {
            treap_map: TreapMap::from_iter(v.clone()),
            std_map: std_map_from(v),
        }
    }

    fn chk(&self)
    where
        K: Eq + std::fmt::Debug,
        V: Eq + std::fmt::Debug,
    {
        assert_eq!(self.treap_map.len(), self.std_map.len());
        assert_eq_iters(self.treap_map.iter(), self.std_map.iter());
        self.treap_map.check().unwrap();
    }
}

fn check_insert(v: SmallIntPairs, w: SmallIntPairs) {
    let mut m = Maps::new(v);

    for (k, v) in w {
        let fresh = !m.std_map.contains_key(&k);
        m.std_map.entry(k).or_insert(v);
        assert_eq!(m.treap_map.insert(k, v), fresh);
    }

    m.chk();
}

fn check_insert_keeps_first_value(v: SmallIntPairs) {
    let mut m = Maps::new(v.clone());

    // reinserting every key with a new value must not change anything
    for (k, v) in v {
        assert!(!m.treap_map.insert(k, v ^ 0xFFFF));
    }

    m.chk();
}

fn check_remove(v: SmallIntPairs, w: Vec<u16>) {
    let mut m = Maps::new(v);

    for k in w {
        assert_eq!(m.treap_map.remove(&k), m.std_map.remove(&k));
        assert!(!m.treap_map.contains(&k));
    }

    m.chk();
}

fn check_contains(v: SmallIntPairs) {
    let m = Maps::new(v);

    for i in 0..1024 {
        assert_eq!(m.treap_map.contains(&i), m.std_map.contains_key(&i));
        assert_eq!(m.treap_map.get(&i), m.std_map.get(&i));
    }
}

fn check_find(v: SmallIntPairs) {
    let m = Maps::new(v);

    for (k, v) in m.std_map.iter() {
        let c = m.treap_map.find(k);
        assert!(!c.is_end());
        assert_eq!(c.get(), Ok((*k, *v)));
    }

    for i in 0..1024 {
        if !m.std_map.contains_key(&i) {
            assert!(m.treap_map.find(&i).is_end());
        }
    }
}

fn check_bounds(v: SmallIntPairs, k: u16) {
    let m = Maps::new(v);

    let lb = m.std_map.range(k..).next();
    assert_eq!(m.treap_map.lower_bound(&k).peek(), lb);

    let ub = m.std_map.range((Excluded(k), Unbounded)).next();
    assert_eq!(m.treap_map.upper_bound(&k).peek(), ub);
}

fn check_range(v: SmallIntPairs, r: (Bound<u16>, Bound<u16>)) {
    let m = Maps::new(v);
    assert_eq_iters(m.treap_map.range(r), m.std_map.range(r));
}

fn check_half_open_range(v: SmallIntPairs, a: u16, b: u16) {
    let m = Maps::new(v);

    let expected: Vec<_> =
        m.std_map.iter().filter(|(k, _)| a <= **k && **k < b).collect();
    let range: Vec<_> = m.treap_map.range(a..b).collect();
    assert_eq!(range, expected);

    // the range is exactly the span between the two lower bounds
    let mut front = m.treap_map.lower_bound(&a);
    let back = m.treap_map.lower_bound(&b);
    let mut walked = Vec::new();
    if a <= b {
        while front != back {
            walked.push(front.peek().unwrap());
            front.advance().unwrap();
        }
    }
    assert_eq!(walked, expected);
}

fn check_iter_mut(v: SmallIntPairs) {
    let mut m = Maps::new(v);

    m.treap_map.iter_mut().for_each(|(k, v)| *v = k ^ 0x5555);
    m.std_map.iter_mut().for_each(|(k, v)| *v = k ^ 0x5555);
    m.chk();

    m.treap_map.values_mut().for_each(|v| *v += 1);
    m.std_map.values_mut().for_each(|v| *v += 1);
    m.chk();
}

fn check_into_iter(v: Vec<(String, u16)>) {
    let m = Maps::new(v);
    assert_eq!(m.treap_map.len(), m.std_map.len());
    assert_eq_iters(m.treap_map.into_iter(), m.std_map.into_iter());
}

fn check_split_off(v: SmallIntPairs, k: u16) {
    let mut m = Maps::new(v);

    let mut hi = Maps {
        treap_map: m.treap_map.split_off(&k),
        std_map: m.std_map.split_off(&k),
    };

    m.chk();
    hi.chk();

    m.treap_map.append(&mut hi.treap_map);
    m.std_map.append(&mut hi.std_map);
    m.chk();
    hi.chk();
}

fn check_append(u: SmallIntPairs, v: SmallIntPairs) {
    let mut m1 = Maps::new(u);
    let mut m2 = Maps::new(v);

    m1.treap_map.append(&mut m2.treap_map);

    // keys already in m1 keep their values
    for (k, v) in std::mem::take(&mut m2.std_map) {
        m1.std_map.entry(k).or_insert(v);
    }

    m1.chk();
    m2.chk();
}

fn check_first_last(v: SmallIntPairs) {
    let m = Maps::new(v);
    assert_eq_all!(
        m.treap_map.first_key_value(),
        m.std_map.first_key_value(),
        m.treap_map.begin().peek(),
        m.treap_map.iter().next(),
    );
    assert_eq_all!(
        m.treap_map.last_key_value(),
        m.std_map.last_key_value(),
        m.treap_map.iter().last(),
    );
}

fn check_eq_and_ord(u: SmallIntPairs, v: SmallIntPairs) {
    let m1 = Maps::new(u);
    let m2 = Maps::new(v);

    assert_eq!(m1.treap_map == m2.treap_map, m1.std_map == m2.std_map);
    assert_eq!(
        m1.treap_map.cmp(&m2.treap_map),
        m1.std_map.cmp(&m2.std_map)
    );

    // insertion order changes the tree's shape but not equality
    let rev: TreapMap<_, _> =
        m1.std_map.iter().rev().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(rev, m1.treap_map);
}

#[test]
fn range_regr1() {
    check_range(vec![(248, 0), (249, 0), (0, 0)], (Unbounded, Excluded(248)));
}

#[test]
fn reversed_range_is_empty() {
    let m: TreapMap<_, _> = (0..10).map(|i| (i, i)).collect();
    assert_eq!(m.range(7..3).count(), 0);
    assert_eq!(m.range((Excluded(5), Excluded(5))).count(), 0);
    assert_eq!(m.range((Included(5), Included(5))).count(), 1);
}

proptest! {
    #[test]
    fn test_insert(v in small_int_pairs(), w in small_int_pairs()) {
        check_insert(v, w);
    }

    #[test]
    fn test_insert_keeps_first_value(v in small_int_pairs()) {
        check_insert_keeps_first_value(v);
    }

    #[test]
    fn test_remove(v in small_int_pairs(), w in small_ints()) {
        check_remove(v, w);
    }

    #[test]
    fn test_contains(v in small_int_pairs()) {
        check_contains(v);
    }

    #[test]
    fn test_find(v in small_int_pairs()) {
        check_find(v);
    }

    #[test]
    fn test_bounds(v in small_int_pairs(), k in 0u16..1100) {
        check_bounds(v, k);
    }

    #[test]
    fn test_range(v in small_int_pairs(), r in range_bounds_1k()) {
        check_range(v, r);
    }

    #[test]
    fn test_half_open_range(v in small_int_pairs(), a in 0u16..1100, b in 0u16..1100) {
        check_half_open_range(v, a, b);
    }

    #[test]
    fn test_iter_mut(v in small_int_pairs()) {
        check_iter_mut(v);
    }

    #[test]
    fn test_into_iter(v in string_u16_pairs()) {
        check_into_iter(v);
    }

    #[test]
    fn test_split_off(v in small_int_pairs(), k in 0u16..1100) {
        check_split_off(v, k);
    }

    #[test]
    fn test_append(u in small_int_pairs(), v in small_int_pairs()) {
        check_append(u, v);
    }

    #[test]
    fn test_first_last(v in small_int_pairs()) {
        check_first_last(v);
    }

    #[test]
    fn test_eq_and_ord(u in small_int_pairs(), v in small_int_pairs()) {
        check_eq_and_ord(u, v);
    }
}
