//!
//! test of SparseVector through the public api
//!
#[macro_use]
extern crate approx;

use fnv::FnvHashMap;
use infvec::bijection::{pair_from_nr, pair_nr, triple_nr};
use infvec::cursor::{count_if, equal};
use infvec::prelude::*;
use itertools::iproduct;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::collections::BTreeMap;
use test_case::test_case;

fn entries(n: i64) -> Vec<(i64, f64)> {
    (0..n).map(|i| (i * 37 % 1009 - 500, i as f64 / 8.0)).collect()
}

#[test_case(0 ; "seed 0")]
#[test_case(1 ; "seed 1")]
#[test_case(4 ; "seed 4")]
fn insertion_order_does_not_matter(seed: u64) {
    let sorted = entries(300);
    let mut shuffled = sorted.clone();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    shuffled.shuffle(&mut rng);

    let a: OrderedSparseVector<i64, f64> = sorted.iter().copied().collect();
    let b: OrderedSparseVector<i64, f64> = shuffled.iter().copied().collect();
    assert_eq!(a, b);
    assert!(equal(a.begin(), a.end(), b.begin()));
    assert!(a.iter().eq(b.iter()));

    // hashed vectors hold the same entries, in some order
    let h: HashedSparseVector<i64, f64> = shuffled.iter().copied().collect();
    assert_eq!(h.len(), a.len());
    assert_eq!(h.to_ordered(), a);
    assert!(h == a);
    let g: HashedSparseVector<i64, f64> = sorted.iter().copied().collect();
    assert_eq!(g, h);
    for (index, value) in h.iter() {
        assert_eq!(a.find(*index), Some(value));
    }
}

#[test_case(vec![] ; "empty")]
#[test_case(vec![(0, 0.0)] ; "explicit zero")]
#[test_case(vec![(5, 1.0), (-5, 2.0), (0, 3.0)] ; "three entries")]
fn ordered_and_hashed_agree(entries: Vec<(i64, f64)>) {
    let o: OrderedSparseVector<i64, f64> = entries.iter().copied().collect();
    let h: HashedSparseVector<i64, f64> = entries.iter().copied().collect();
    assert_eq!(o.len(), entries.len());
    assert_eq!(o.len(), h.len());
    assert_eq!(o.is_empty(), h.begin() == h.end());
    for i in -10..10 {
        assert_eq!(o.get(i), h.get(i));
        assert_eq!(o.contains(i), h.contains(i));
    }
    assert_eq!(o, h.to_ordered());
}

#[test]
fn reading_never_stores() {
    let mut v: HashedSparseVector<u64, u32> = SparseVector::new();
    v.set(3, 9);
    let total: u32 = (0..1000).map(|i| v.get(i)).sum();
    assert_eq!(total, 9);
    assert_eq!(v.len(), 1);
}

#[test]
fn count_entries() {
    let v: OrderedSparseVector<i64, f64> = vec![(42, 23.0), (123, 23.0), (0, 0.0)]
        .into_iter()
        .collect();
    assert_eq!(count_if(v.begin(), v.end(), |(_, value)| **value == 23.0), 2);
    assert_eq!(count_if(v.begin(), v.end(), |(_, value)| **value == 0.0), 1);
    assert_eq!(v.to_string(), "0: 0\n42: 23\n123: 23\n");
}

#[test]
fn approx_equal_after_conversion() {
    let v: OrderedSparseVector<u64, f64> = (0..50).map(|i| (i * i, 0.1 * i as f64)).collect();
    let w: OrderedSparseVector<u64, f64> = v
        .iter()
        .map(|(&index, &value)| (index, value + 1e-9))
        .collect();
    assert_abs_diff_eq!(v, w, epsilon = 1e-6);
    assert_abs_diff_eq!(v, v.to_hashed().to_ordered());
}

#[test]
fn composite_keys_without_collisions() {
    let n = 30;
    let mut pairs: SparseVector<FnvHashMap<u64, u64>, Pair> = SparseVector::new();
    for (j, k) in iproduct!(0..n, 0..n) {
        pairs.set(Pair::new(j, k), j * n + k);
    }
    assert_eq!(pairs.len() as u64, n * n);
    for (j, k) in iproduct!(0..n, 0..n) {
        assert_eq!(pairs.get(Pair::new(j, k)), j * n + k);
    }

    let mut triples: SparseVector<BTreeMap<u64, u64>, Triple> = SparseVector::new();
    for (j, k, l) in iproduct!(0..n, 0..n, 0..n) {
        triples.set(Triple::new(j, k, l), 1);
    }
    assert_eq!(triples.len() as u64, n * n * n);
    // the smallest number is the origin, and numbers are visited in increasing order
    assert_eq!(triples.begin().decoded_index(), Triple::new(0, 0, 0));
    let numbers: Vec<u64> = triples.iter().map(|(&nr, _)| nr).collect();
    assert!(numbers.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(numbers[1], triple_nr(0, 0, 1));
}

#[test]
fn pair_numbers_enumerate_diagonals() {
    let mut v: OrderedSparseVector<u64, Pair> = SparseVector::new();
    for (j, k) in iproduct!(0..5, 0..5) {
        v.set(pair_nr(j, k), Pair::new(j, k));
    }
    // diagonal j+k=s is visited from (0,s) to (s,0)
    let first: Vec<Pair> = v.iter().take(6).map(|(_, &p)| p).collect();
    assert_eq!(
        first,
        vec![
            Pair::new(0, 0),
            Pair::new(0, 1),
            Pair::new(1, 0),
            Pair::new(0, 2),
            Pair::new(1, 1),
            Pair::new(2, 0),
        ]
    );
    for (&nr, p) in v.iter() {
        assert_eq!(pair_from_nr(nr), (p.j, p.k));
    }
}

#[test]
fn iterate_backward() {
    let v: SparseVector<BTreeMap<DiagonalOrder<Pair>, i32>, Pair> =
        vec![(Pair::new(2, 0), 1), (Pair::new(0, 0), 2), (Pair::new(0, 1), 3)]
            .into_iter()
            .collect();
    let mut it = v.end();
    it.dec();
    assert_eq!(it.decoded_index(), Pair::new(2, 0));
    it.dec();
    assert_eq!(it.decoded_index(), Pair::new(0, 1));
    it.dec();
    assert!(it == v.begin());
    let values: Vec<i32> = v.iter().rev().map(|(_, &value)| value).collect();
    assert_eq!(values, vec![1, 3, 2]);
}
