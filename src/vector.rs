//!
//! `SparseVector` Finitely supported sequence over a pluggable storage
//!
//! A `SparseVector` is a function from an index type to a coefficient type that
//! is zero everywhere except at finitely many indices. Only the explicitly set
//! entries are stored. Reading an index that was never set returns zero and
//! does not touch the storage.
//!
//! ```
//! use infvec::vector::SparseVector;
//! use std::collections::BTreeMap;
//!
//! let mut v: SparseVector<BTreeMap<u64, f64>> = SparseVector::new();
//! v.set(1, 2.5);
//! assert_eq!(v.get(1), 2.5);
//! assert_eq!(v.get(2), 0.0);
//! assert_eq!(v.len(), 1);
//! ```
//!
use approx::AbsDiffEq;
use fnv::FnvHashMap;
use log::debug;
use num_traits::Zero;
use std::collections::BTreeMap;
use std::hash::Hash;
use std::marker::PhantomData;
pub mod hashed;
pub mod index;
pub mod iterator;
pub mod ordered;
pub use hashed::HashedCursor;
pub use index::Indexable;
pub use iterator::SparseVectorIterator;
pub use ordered::OrderedCursor;

use crate::cursor::{equal_by, CursorRange};

/// Backend storage of `SparseVector`
/// an abstraction of an associative container of `(index, item)` entries.
///
/// * `len`
///     number of stored entries
/// * `find`
///     reference to the item stored at the index, if any
/// * `insert_or_assign`
///     store an item at the index, replacing the previous one
/// * `front` and `past_end`
///     cursors at the first entry and one past the last entry,
///     in the native iteration order of the container
///
/// A storage never creates entries on lookup.
///
pub trait Storage: Clone + Default {
    /// Key type of the container
    type Index;
    /// Item type that this storage stores
    type Item;
    /// Cursor into the native iteration order
    type Cursor<'a>: StorageCursor<'a, Index = Self::Index, Item = Self::Item>
    where
        Self: 'a;
    ///
    /// Get the number of stored entries
    fn len(&self) -> usize;
    ///
    /// Get the reference to the item at the given index, without inserting
    fn find(&self, index: &Self::Index) -> Option<&Self::Item>;
    ///
    /// Store `value` at `index` and return the previously stored item
    fn insert_or_assign(&mut self, index: Self::Index, value: Self::Item) -> Option<Self::Item>;
    ///
    /// Cursor at the first entry, or at the end if there is none
    fn front(&self) -> Self::Cursor<'_>;
    ///
    /// Cursor one past the last entry
    fn past_end(&self) -> Self::Cursor<'_>;
    ///
    /// Check if the native iteration order is the order of the index
    fn is_ordered() -> bool;
}

///
/// Cursor on a `Storage`, which is either at an entry or past the end.
///
/// Two cursors are equal iff they are at the same entry of the same container.
///
pub trait StorageCursor<'a>: Clone + PartialEq {
    type Index: 'a;
    type Item: 'a;
    ///
    /// The entry at the cursor, `None` if past the end
    fn entry(&self) -> Option<(&'a Self::Index, &'a Self::Item)>;
    ///
    /// Move to the next entry. No-op past the end.
    fn move_next(&mut self);
}

///
/// Cursor that can also move backwards.
/// Moving backwards from past the end arrives at the last entry.
///
pub trait BidirectionalStorageCursor<'a>: StorageCursor<'a> {
    fn move_prev(&mut self);
}

///
/// Whether two entries handed out by cursors are the same stored entry
/// (not only equal in value).
///
pub(crate) fn same_entry<I, C>(a: Option<(&I, &C)>, b: Option<(&I, &C)>) -> bool {
    match (a, b) {
        (Some((a, _)), Some((b, _))) => std::ptr::eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// `SparseVector` struct
///
/// It generalized of
///
/// 1. coefficient type `Storage::Item`
/// 2. backend storage `S: Storage`
/// 3. index type `Ix: Indexable<S::Index>`, by default the key type of the storage
///
#[derive(Clone, Debug)]
pub struct SparseVector<S: Storage, Ix = <S as Storage>::Index> {
    /// Backend storage of the SparseVector
    storage: S,
    /// Hidden marker of index type
    ty: PhantomData<Ix>,
}

/// `SparseVector` backed by `BTreeMap`, iterating in index order.
pub type OrderedSparseVector<I, C> = SparseVector<BTreeMap<I, C>>;

/// `SparseVector` backed by `FnvHashMap`, iterating in hash order.
pub type HashedSparseVector<I, C> = SparseVector<FnvHashMap<I, C>>;

impl<S: Storage, Ix> SparseVector<S, Ix> {
    /// Create a new SparseVector with no stored entries
    pub fn new() -> SparseVector<S, Ix> {
        SparseVector {
            storage: S::default(),
            ty: PhantomData,
        }
    }
    /// Create a SparseVector holding a copy of all entries of `storage`.
    /// Zero entries are copied as well.
    pub fn from_storage(storage: &S) -> SparseVector<S, Ix> {
        debug!("copying {} entries from storage", storage.len());
        SparseVector {
            storage: storage.clone(),
            ty: PhantomData,
        }
    }
    /// Get the number of stored entries
    pub fn len(&self) -> usize {
        self.storage.len()
    }
    /// Check if there is no stored entry
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Iterator at the first stored entry
    ///
    /// For a `BTreeMap` storage this and every step of the iterator is a range
    /// query, `O(log N)`, so a full traversal costs `O(N log N)`.
    pub fn begin(&self) -> SparseVectorIterator<'_, S, Ix> {
        SparseVectorIterator::new(self, self.storage.front())
    }
    /// Iterator one past the last stored entry
    pub fn end(&self) -> SparseVectorIterator<'_, S, Ix> {
        SparseVectorIterator::new(self, self.storage.past_end())
    }
    /// Get an iterator on (&key, &item) of the stored entries, in storage order.
    pub fn iter(&self) -> CursorRange<SparseVectorIterator<'_, S, Ix>> {
        CursorRange::new(self.begin(), self.end())
    }
    /// Read-only access to the backend storage
    pub fn storage(&self) -> &S {
        &self.storage
    }
    /// Unwrap into the backend storage
    pub fn into_storage(self) -> S {
        self.storage
    }
    /// Check if the iteration order is the order of the storage key
    pub fn is_ordered(&self) -> bool {
        S::is_ordered()
    }
    /// Convert to the BTreeMap-backed vector with the same entries.
    pub fn to_ordered(&self) -> SparseVector<BTreeMap<S::Index, S::Item>, Ix>
    where
        S::Index: Ord + Clone,
        S::Item: Clone,
    {
        debug!("converting {} entries into an ordered storage", self.len());
        let storage: BTreeMap<S::Index, S::Item> = self
            .iter()
            .map(|(index, value)| (index.clone(), value.clone()))
            .collect();
        SparseVector::from(storage)
    }
    /// Convert to the FnvHashMap-backed vector with the same entries.
    pub fn to_hashed(&self) -> SparseVector<FnvHashMap<S::Index, S::Item>, Ix>
    where
        S::Index: Eq + Hash + Clone,
        S::Item: Clone,
    {
        debug!("converting {} entries into a hashed storage", self.len());
        let storage: FnvHashMap<S::Index, S::Item> = self
            .iter()
            .map(|(index, value)| (index.clone(), value.clone()))
            .collect();
        SparseVector::from(storage)
    }
}

impl<S: Storage, Ix: Indexable<S::Index>> SparseVector<S, Ix> {
    /// Get the coefficient at `index`, zero if nothing is stored there.
    /// The storage is never modified.
    pub fn get(&self, index: Ix) -> S::Item
    where
        S::Item: Zero + Clone,
    {
        self.find(index).cloned().unwrap_or_else(<S::Item as Zero>::zero)
    }
    /// Get the reference to the stored coefficient at `index`
    pub fn find(&self, index: Ix) -> Option<&S::Item> {
        self.storage.find(&index.to_key())
    }
    /// Check if an entry is stored at `index`
    pub fn contains(&self, index: Ix) -> bool {
        self.find(index).is_some()
    }
    /// Store `value` at `index`, returning the previously stored coefficient.
    /// Zero is stored as is.
    pub fn set(&mut self, index: Ix, value: S::Item) -> Option<S::Item> {
        self.storage.insert_or_assign(index.to_key(), value)
    }
}

impl<S: Storage, Ix> Default for SparseVector<S, Ix> {
    fn default() -> Self {
        SparseVector::new()
    }
}

/// Take over a filled storage, without copying
impl<S: Storage, Ix> From<S> for SparseVector<S, Ix> {
    fn from(storage: S) -> Self {
        SparseVector {
            storage,
            ty: PhantomData,
        }
    }
}

/// Later entries overwrite earlier ones of the same index
impl<S: Storage, Ix: Indexable<S::Index>> FromIterator<(Ix, S::Item)> for SparseVector<S, Ix> {
    fn from_iter<T: IntoIterator<Item = (Ix, S::Item)>>(iter: T) -> Self {
        let mut v = SparseVector::new();
        v.extend(iter);
        v
    }
}

impl<S: Storage, Ix: Indexable<S::Index>> Extend<(Ix, S::Item)> for SparseVector<S, Ix> {
    fn extend<T: IntoIterator<Item = (Ix, S::Item)>>(&mut self, iter: T) {
        for (index, value) in iter {
            self.set(index, value);
        }
    }
}

impl<'a, S: Storage, Ix> IntoIterator for &'a SparseVector<S, Ix> {
    type Item = (&'a S::Index, &'a S::Item);
    type IntoIter = CursorRange<SparseVectorIterator<'a, S, Ix>>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Structural equality of two vectors
///
/// Both vectors must store the same set of (index, item), explicit zeros
/// included. Two ordered storages are walked side by side; if either storage
/// is unordered, every entry of `self` is looked up in `other` instead, so the
/// insertion history of a hash map does not matter.
impl<Sa, Sb, Ix> PartialEq<SparseVector<Sb, Ix>> for SparseVector<Sa, Ix>
where
    Sa: Storage,
    Sb: Storage<Index = Sa::Index>,
    Sa::Index: PartialEq,
    Sa::Item: PartialEq<Sb::Item>,
{
    fn eq(&self, other: &SparseVector<Sb, Ix>) -> bool {
        self.len() == other.len() && self.same_entries(other, |a, b| a == b)
    }
}

impl<S: Storage, Ix> SparseVector<S, Ix> {
    /// Whether `other` stores an item related by `eq` at every index of `self`,
    /// assuming both have the same number of entries.
    fn same_entries<T, Ixb, F>(&self, other: &SparseVector<T, Ixb>, mut eq: F) -> bool
    where
        T: Storage<Index = S::Index>,
        S::Index: PartialEq,
        F: FnMut(&S::Item, &T::Item) -> bool,
    {
        if S::is_ordered() && T::is_ordered() {
            equal_by(
                self.begin(),
                self.end(),
                other.begin(),
                |(ia, va), (ib, vb)| ia == ib && eq(va, vb),
            )
        } else {
            self.iter().all(|(index, va)| match other.storage.find(index) {
                Some(vb) => eq(va, vb),
                None => false,
            })
        }
    }
}

impl<S, Ix> Eq for SparseVector<S, Ix>
where
    S: Storage,
    S::Index: Eq,
    S::Item: Eq,
{
}

/// for approx `assert_abs_diff_eq`
///
/// Same entries as `==`, with coefficients compared up to `epsilon`.
impl<S, Ix> AbsDiffEq for SparseVector<S, Ix>
where
    S: Storage,
    S::Index: PartialEq,
    S::Item: AbsDiffEq,
    <S::Item as AbsDiffEq>::Epsilon: Clone,
{
    type Epsilon = <S::Item as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        S::Item::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.len() == other.len()
            && self.same_entries(other, |va, vb| va.abs_diff_eq(vb, epsilon.clone()))
    }
}

/// `0` for a vector without entries, one `index: item` line per entry otherwise.
impl<S, Ix> std::fmt::Display for SparseVector<S, Ix>
where
    S: Storage,
    S::Index: std::fmt::Display,
    S::Item: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.begin() == self.end() {
            writeln!(f, "0")
        } else {
            for (index, value) in self.iter() {
                writeln!(f, "{}: {}", index, value)?;
            }
            Ok(())
        }
    }
}
