//!
//! Bijections between tuples of non-negative integers and non-negative integers
//!
//! ## Pairs
//! Each pair `(j, k)` sits on the anti-diagonal of all pairs with sum `j+k`.
//! There are `(j+k)(j+k+1)/2` pairs on the earlier anti-diagonals, so
//!
//! ```text
//! pair_nr(j, k) = (j+k)(j+k+1)/2 + j
//! ```
//!
//! gives `(0,0) -> 0`, `(0,1) -> 1`, `(1,0) -> 2`, `(0,2) -> 3`, ...
//!
//! ## Triples
//! The shell `{(j,k,l) | j+k+l = s}` has `(s+1)(s+2)/2` elements, so all shells
//! before `s` hold `(s^3 + 3s^2 + 2s)/6` triples (a tetrahedral number).
//! Inside a shell `l` is determined by `(j, k)`, and the pair number orders it:
//!
//! ```text
//! triple_nr(j, k, l) = (s^3 + 3s^2 + 2s)/6 + pair_nr(j, k)
//! ```
//!
//! gives `(0,0,0) -> 0`, `(0,0,1) -> 1`, `(0,1,0) -> 2`, `(1,0,0) -> 3`, `(0,0,2) -> 4`, ...
//!
//! All arithmetic is done on integers. The unchecked functions panic on `u64`
//! overflow in debug builds; use the `checked_*` variants when the components
//! can be large.
//!

///
/// `n(n+1)/2` computed without overflow of the intermediate product
///
#[inline]
fn triangular_wide(n: u64) -> u128 {
    let n = n as u128;
    n * (n + 1) / 2
}

///
/// `n(n+1)(n+2)/6` in u128, `None` if the product leaves u128
///
#[inline]
fn tetrahedral_wide(n: u64) -> Option<u128> {
    let n = n as u128;
    // the triple product leaves u128 once n is beyond about 5.5e12
    Some(n.checked_mul(n + 1)?.checked_mul(n + 2)? / 6)
}

/// n-th triangular number `n(n+1)/2`, the number of pairs with `j+k < n`.
#[inline]
pub fn triangular(n: u64) -> u64 {
    // one of n and n+1 is even
    if n % 2 == 0 {
        (n / 2) * (n + 1)
    } else {
        n * ((n + 1) / 2)
    }
}

/// n-th tetrahedral number `n(n+1)(n+2)/6`, the number of triples with `j+k+l < n`.
#[inline]
pub fn tetrahedral(n: u64) -> u64 {
    match tetrahedral_wide(n).and_then(|t| u64::try_from(t).ok()) {
        Some(t) => t,
        None => panic!("tetrahedral({}) overflows u64", n),
    }
}

///
/// Pair number of `(j, k)` in the anti-diagonal enumeration.
///
#[inline]
pub fn pair_nr(j: u64, k: u64) -> u64 {
    triangular(j + k) + j
}

///
/// Triple number of `(j, k, l)` in the shell-by-shell enumeration.
///
#[inline]
pub fn triple_nr(j: u64, k: u64, l: u64) -> u64 {
    tetrahedral(j + k + l) + pair_nr(j, k)
}

/// `pair_nr` that returns `None` instead of overflowing.
pub fn checked_pair_nr(j: u64, k: u64) -> Option<u64> {
    let d = j.checked_add(k)?;
    let t = u64::try_from(triangular_wide(d)).ok()?;
    t.checked_add(j)
}

/// `triple_nr` that returns `None` instead of overflowing.
pub fn checked_triple_nr(j: u64, k: u64, l: u64) -> Option<u64> {
    let s = j.checked_add(k)?.checked_add(l)?;
    let t = u64::try_from(tetrahedral_wide(s)?).ok()?;
    t.checked_add(checked_pair_nr(j, k)?)
}

///
/// The anti-diagonal `d` that contains pair number `n`,
/// i.e. the largest `d` with `triangular(d) <= n`.
///
fn diagonal_of(n: u64) -> u64 {
    // float estimate, then fixed up by exact comparisons
    let mut d = (((8.0 * n as f64 + 1.0).sqrt() - 1.0) / 2.0) as u64;
    while d > 0 && triangular_wide(d) > n as u128 {
        d -= 1;
    }
    while triangular_wide(d + 1) <= n as u128 {
        d += 1;
    }
    d
}

///
/// The shell `s` that contains triple number `n`,
/// i.e. the largest `s` with `tetrahedral(s) <= n`.
///
fn shell_of(n: u64) -> u64 {
    let mut s = (6.0 * n as f64).cbrt() as u64;
    while s > 0 && tetrahedral_wide(s).map_or(true, |t| t > n as u128) {
        s -= 1;
    }
    while tetrahedral_wide(s + 1).map_or(false, |t| t <= n as u128) {
        s += 1;
    }
    s
}

///
/// Inverse of `pair_nr`
///
/// ```
/// use infvec::bijection::{pair_from_nr, pair_nr};
/// assert_eq!(pair_from_nr(4), (1, 1));
/// assert_eq!(pair_nr(1, 1), 4);
/// ```
///
pub fn pair_from_nr(n: u64) -> (u64, u64) {
    let d = diagonal_of(n);
    let j = n - triangular(d);
    (j, d - j)
}

///
/// Inverse of `triple_nr`
///
pub fn triple_from_nr(n: u64) -> (u64, u64, u64) {
    let s = shell_of(n);
    let (j, k) = pair_from_nr(n - tetrahedral(s));
    (j, k, s - j - k)
}
