//!
//! Composite keys made of non-negative integers
//!
//! `Pair` and `Triple` order lexicographically. Wrapping them in
//! `DiagonalOrder` orders them by their bijection number instead, which is the
//! order of the scalar keys they are mapped to.
//!
use crate::bijection::{pair_from_nr, pair_nr, triple_from_nr, triple_nr};
use crate::vector::Indexable;
use derive_new::new;
use std::cmp::Ordering;

/// Key `(j, k)`
#[derive(new, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair {
    pub j: u64,
    pub k: u64,
}

impl Pair {
    /// Position in the anti-diagonal enumeration
    pub fn nr(&self) -> u64 {
        pair_nr(self.j, self.k)
    }
    pub fn from_nr(n: u64) -> Pair {
        let (j, k) = pair_from_nr(n);
        Pair { j, k }
    }
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({},{})", self.j, self.k)
    }
}

/// Key `(j, k, l)`
#[derive(new, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    pub j: u64,
    pub k: u64,
    pub l: u64,
}

impl Triple {
    /// Position in the shell-by-shell enumeration
    pub fn nr(&self) -> u64 {
        triple_nr(self.j, self.k, self.l)
    }
    pub fn from_nr(n: u64) -> Triple {
        let (j, k, l) = triple_from_nr(n);
        Triple { j, k, l }
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({},{},{})", self.j, self.k, self.l)
    }
}

impl Indexable<u64> for Pair {
    #[inline]
    fn to_key(&self) -> u64 {
        self.nr()
    }
    #[inline]
    fn from_key(key: &u64) -> Self {
        Pair::from_nr(*key)
    }
}

impl Indexable<u64> for Triple {
    #[inline]
    fn to_key(&self) -> u64 {
        self.nr()
    }
    #[inline]
    fn from_key(key: &u64) -> Self {
        Triple::from_nr(*key)
    }
}

///
/// Composite key ordered by its bijection number.
///
/// Equality is unaffected, since the bijection maps distinct keys to
/// distinct numbers.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagonalOrder<K>(pub K);

impl<K: Indexable<u64> + Eq> Ord for DiagonalOrder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        Indexable::<u64>::to_key(&self.0).cmp(&Indexable::<u64>::to_key(&other.0))
    }
}

impl<K: Indexable<u64> + Eq> PartialOrd for DiagonalOrder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: std::fmt::Display> std::fmt::Display for DiagonalOrder<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl Indexable<DiagonalOrder<Pair>> for Pair {
    #[inline]
    fn to_key(&self) -> DiagonalOrder<Pair> {
        DiagonalOrder(*self)
    }
    #[inline]
    fn from_key(key: &DiagonalOrder<Pair>) -> Self {
        key.0
    }
}

impl Indexable<DiagonalOrder<Triple>> for Triple {
    #[inline]
    fn to_key(&self) -> DiagonalOrder<Triple> {
        DiagonalOrder(*self)
    }
    #[inline]
    fn from_key(key: &DiagonalOrder<Triple>) -> Self {
        key.0
    }
}
