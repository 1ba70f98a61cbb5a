//!
//! Primes up to `n` as a container walked by `ForwardCursor`
//!
//! This container has nothing sparse about it; it checks that the cursor
//! protocol and the generic algorithms in `crate::cursor` work for a container
//! whose cursor hands out items by value.
//!
use crate::cursor::{CursorRange, ForwardCursor};
use fixedbitset::FixedBitSet;
use log::debug;

///
/// Sieve of Eratosthenes for the natural numbers `1..=n`
///
#[derive(Clone, Debug)]
pub struct PrimeSieve {
    /// upper bound
    n: usize,
    /// bit k is set iff k is prime (0 <= k <= n)
    sieve: FixedBitSet,
    /// number of primes in `1..=n`
    n_primes: usize,
}

impl PrimeSieve {
    pub fn new(n: usize) -> PrimeSieve {
        let mut sieve = FixedBitSet::with_capacity(n + 1);
        if n >= 2 {
            sieve.insert_range(2..(n + 1));
        }
        let mut k = 2;
        while k * k <= n {
            if sieve.contains(k) {
                // unmark all multiples of k
                let mut m = k * k;
                while m <= n {
                    sieve.set(m, false);
                    m += k;
                }
            }
            k += 1;
        }
        let n_primes = sieve.count_ones(..);
        debug!("sieve n={} n_primes={}", n, n_primes);
        PrimeSieve { n, sieve, n_primes }
    }
    /// upper bound of this sieve
    pub fn limit(&self) -> usize {
        self.n
    }
    /// number of primes up to `limit()`
    pub fn len(&self) -> usize {
        self.n_primes
    }
    pub fn is_empty(&self) -> bool {
        self.n_primes == 0
    }
    /// `false` for numbers beyond `limit()`
    pub fn is_prime(&self, k: usize) -> bool {
        self.sieve.contains(k)
    }
    pub fn max_prime(&self) -> Option<usize> {
        self.sieve.ones().last()
    }
    /// smallest prime `>= k`, or `n+1` if there is none
    fn next_prime_from(&self, k: usize) -> usize {
        (k..=self.n)
            .find(|&p| self.is_prime(p))
            .unwrap_or(self.n + 1)
    }
    /// Cursor at the smallest prime
    pub fn begin(&self) -> PrimeCursor<'_> {
        PrimeCursor {
            sieve: self,
            k: self.next_prime_from(2),
        }
    }
    /// Cursor one past the largest prime
    pub fn end(&self) -> PrimeCursor<'_> {
        PrimeCursor {
            sieve: self,
            k: self.n + 1,
        }
    }
    pub fn iter(&self) -> CursorRange<PrimeCursor<'_>> {
        CursorRange::new(self.begin(), self.end())
    }
}

impl std::fmt::Display for PrimeSieve {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for p in self.iter() {
            write!(f, "{} ", p)?;
        }
        Ok(())
    }
}

/// Cursor on `PrimeSieve`, at a prime or at `n+1`
#[derive(Clone, Copy, Debug)]
pub struct PrimeCursor<'a> {
    /// reference of the sieve
    sieve: &'a PrimeSieve,
    /// current prime
    k: usize,
}

impl<'a> PartialEq for PrimeCursor<'a> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.sieve, other.sieve) && self.k == other.k
    }
}

impl<'a> ForwardCursor for PrimeCursor<'a> {
    type Item = usize;
    fn current(&self) -> usize {
        debug_assert!(self.k <= self.sieve.n, "dereferenced the end cursor");
        self.k
    }
    fn advance(&mut self) {
        debug_assert!(self.k <= self.sieve.n, "advanced the end cursor");
        self.k = self.sieve.next_prime_from(self.k + 1);
    }
}
