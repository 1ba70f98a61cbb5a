//!
//! Abstraction of types that can be used as an index of `SparseVector`
//!
//! The backing storage is keyed by `K`. An index type `Ix: Indexable<K>` is
//! converted to the storage key before every lookup and insertion, so a vector
//! indexed by tuples can be stored with scalar keys.
//!

pub trait Indexable<K>: Sized {
    /// Storage key of this index
    fn to_key(&self) -> K;
    /// Index that is stored under `key`
    fn from_key(key: &K) -> Self;
}

/// Every key type indexes storage keyed by itself.
impl<T: Clone> Indexable<T> for T {
    #[inline]
    fn to_key(&self) -> T {
        self.clone()
    }
    #[inline]
    fn from_key(key: &T) -> Self {
        key.clone()
    }
}
