//!
//! Iterator over the stored entries of a `SparseVector`
//!
//! `SparseVectorIterator` is a position, in the sense of `crate::cursor`: it is
//! created by `SparseVector::begin` and `SparseVector::end`, can be copied and
//! moved independently, and compares equal to another iterator at the same
//! entry of the same vector.
//!
use super::{BidirectionalStorageCursor, Indexable, SparseVector, Storage, StorageCursor};
use crate::cursor::{BidirectionalCursor, ForwardCursor};

/// Iterator on `SparseVector`, either at a stored entry or at the end
pub struct SparseVectorIterator<'a, S: Storage + 'a, Ix: 'a> {
    /// reference of the vector
    vector: &'a SparseVector<S, Ix>,
    /// current position in the storage
    cursor: S::Cursor<'a>,
}

impl<'a, S: Storage + 'a, Ix: 'a> SparseVectorIterator<'a, S, Ix> {
    pub(crate) fn new(
        vector: &'a SparseVector<S, Ix>,
        cursor: S::Cursor<'a>,
    ) -> SparseVectorIterator<'a, S, Ix> {
        SparseVectorIterator { vector, cursor }
    }
    /// The vector this iterator walks on
    pub fn vector(&self) -> &'a SparseVector<S, Ix> {
        self.vector
    }
    /// Check if this is the end iterator
    pub fn is_end(&self) -> bool {
        self.cursor.entry().is_none()
    }
    /// The (index, item) at this position, `None` at the end
    pub fn entry(&self) -> Option<(&'a S::Index, &'a S::Item)> {
        self.cursor.entry()
    }
    ///
    /// The (index, item) at this position.
    ///
    /// The references borrow the vector, not the iterator, so they stay valid
    /// after the iterator has moved on.
    ///
    /// # Panics
    /// Panics at the end.
    ///
    pub fn get(&self) -> (&'a S::Index, &'a S::Item) {
        match self.cursor.entry() {
            Some(entry) => entry,
            None => panic!("dereferenced the end iterator of a SparseVector"),
        }
    }
    /// Storage key of the current entry
    pub fn index(&self) -> &'a S::Index {
        self.get().0
    }
    /// Coefficient of the current entry
    pub fn value(&self) -> &'a S::Item {
        self.get().1
    }
    /// Move to the next entry (`++it`)
    pub fn inc(&mut self) -> &mut Self {
        debug_assert!(!self.is_end(), "incremented the end iterator");
        self.cursor.move_next();
        self
    }
    /// Move to the next entry, returning the position before the move (`it++`)
    pub fn post_inc(&mut self) -> Self {
        let before = self.clone();
        self.inc();
        before
    }
}

impl<'a, S, Ix> SparseVectorIterator<'a, S, Ix>
where
    S: Storage + 'a,
    Ix: 'a,
    S::Cursor<'a>: BidirectionalStorageCursor<'a>,
{
    /// Move to the previous entry (`--it`). From the end, move to the last entry.
    pub fn dec(&mut self) -> &mut Self {
        self.cursor.move_prev();
        debug_assert!(!self.is_end(), "decremented the begin iterator");
        self
    }
    /// Move to the previous entry, returning the position before the move (`it--`)
    pub fn post_dec(&mut self) -> Self {
        let before = self.clone();
        self.dec();
        before
    }
}

impl<'a, S, Ix> SparseVectorIterator<'a, S, Ix>
where
    S: Storage + 'a,
    Ix: Indexable<S::Index> + 'a,
{
    /// Index of the current entry, converted back from the storage key
    pub fn decoded_index(&self) -> Ix {
        Ix::from_key(self.index())
    }
}

impl<'a, S: Storage + 'a, Ix: 'a> Clone for SparseVectorIterator<'a, S, Ix> {
    fn clone(&self) -> Self {
        SparseVectorIterator {
            vector: self.vector,
            cursor: self.cursor.clone(),
        }
    }
}

/// Same position of the same vector
impl<'a, S: Storage + 'a, Ix: 'a> PartialEq for SparseVectorIterator<'a, S, Ix> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.vector, other.vector) && self.cursor == other.cursor
    }
}

impl<'a, S, Ix> std::fmt::Debug for SparseVectorIterator<'a, S, Ix>
where
    S: Storage + 'a,
    Ix: 'a,
    S::Index: std::fmt::Debug,
    S::Item: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("SparseVectorIterator")
            .field("entry", &self.entry())
            .finish()
    }
}

impl<'a, S: Storage + 'a, Ix: 'a> ForwardCursor for SparseVectorIterator<'a, S, Ix> {
    type Item = (&'a S::Index, &'a S::Item);
    #[inline]
    fn current(&self) -> Self::Item {
        self.get()
    }
    #[inline]
    fn advance(&mut self) {
        self.inc();
    }
}

impl<'a, S, Ix> BidirectionalCursor for SparseVectorIterator<'a, S, Ix>
where
    S: Storage + 'a,
    Ix: 'a,
    S::Cursor<'a>: BidirectionalStorageCursor<'a>,
{
    #[inline]
    fn retreat(&mut self) {
        self.dec();
    }
}

#[cfg(test)]
mod tests {
    use super::super::{HashedSparseVector, OrderedSparseVector};
    use super::*;
    use crate::key::Pair;
    use std::collections::BTreeMap;

    fn example() -> OrderedSparseVector<i64, f64> {
        let mut v = OrderedSparseVector::new();
        v.set(42, 23.0);
        v.set(-1, 0.5);
        v.set(123, 23.0);
        v
    }

    #[test]
    fn increment() {
        let v = example();
        let mut it = v.begin();
        assert_eq!(it.get(), (&-1, &0.5));
        assert_eq!(*it.index(), -1);
        assert_eq!(*it.value(), 0.5);

        // it++ returns the old position
        let old = it.post_inc();
        assert_eq!(*old.index(), -1);
        assert_eq!(*it.index(), 42);

        // ++it returns the new position
        assert_eq!(*it.inc().index(), 123);
        it.inc();
        assert!(it.is_end());
        assert!(it == v.end());
        assert_eq!(it.entry(), None);
    }

    #[test]
    fn decrement() {
        let v = example();
        let mut it = v.end();
        assert_eq!(*it.dec().index(), 123);
        let old = it.post_dec();
        assert_eq!(*old.index(), 123);
        assert_eq!(*it.index(), 42);
        it.dec();
        assert!(it == v.begin());
    }

    #[test]
    fn references_outlive_iterator() {
        let v = example();
        let (index, value) = {
            let it = v.begin();
            it.get()
        };
        assert_eq!((*index, *value), (-1, 0.5));
    }

    #[test]
    fn independent_copies() {
        let v = example();
        let a = v.begin();
        let mut b = a.clone();
        b.inc();
        assert!(a != b);
        assert_eq!(*a.index(), -1);
        assert_eq!(*b.index(), 42);
        let mut c = a.clone();
        c.inc();
        assert!(b == c);
    }

    #[test]
    fn iterators_of_different_vectors() {
        let v = example();
        let w = v.clone();
        assert!(v == w);
        assert!(v.begin() != w.begin());
        assert!(v.end() != w.end());
    }

    #[test]
    fn empty_vector() {
        let v: OrderedSparseVector<i64, f64> = OrderedSparseVector::new();
        assert!(v.begin() == v.end());
        assert!(v.begin().is_end());
        let h: HashedSparseVector<i64, f64> = HashedSparseVector::new();
        assert!(h.begin() == h.end());
    }

    #[test]
    #[should_panic]
    fn dereference_end() {
        let v = example();
        v.end().get();
    }

    #[test]
    fn hashed_forward_only() {
        let mut h: HashedSparseVector<i64, f64> = HashedSparseVector::new();
        h.set(1, 1.0);
        h.set(2, 2.0);
        let mut it = h.begin();
        let mut n = 0;
        while it != h.end() {
            n += 1;
            it.inc();
        }
        assert_eq!(n, 2);
    }

    #[test]
    fn decoded_pair_index() {
        let mut v: SparseVector<BTreeMap<u64, f64>, Pair> = SparseVector::new();
        v.set(Pair::new(1, 0), 1.0);
        v.set(Pair::new(0, 1), 2.0);
        let it = v.begin();
        assert_eq!(*it.index(), 1);
        assert_eq!(it.decoded_index(), Pair::new(0, 1));
        let mut it = it;
        it.inc();
        assert_eq!(*it.index(), 2);
        assert_eq!(it.decoded_index(), Pair::new(1, 0));
    }
}
