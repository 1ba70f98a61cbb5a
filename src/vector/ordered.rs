//!
//! Ordered storage that uses `std::collections::BTreeMap`
//!
//! Entries are visited in increasing index order, and the cursor can move in
//! both directions. Moving a cursor costs `O(log N)`.
//!
use super::{same_entry, BidirectionalStorageCursor, Storage, StorageCursor};
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

impl<I, C> Storage for BTreeMap<I, C>
where
    I: Ord + Clone,
    C: Clone,
{
    type Index = I;
    type Item = C;
    type Cursor<'a> = OrderedCursor<'a, I, C> where Self: 'a;
    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
    #[inline]
    fn find(&self, index: &I) -> Option<&C> {
        self.get(index)
    }
    #[inline]
    fn insert_or_assign(&mut self, index: I, value: C) -> Option<C> {
        self.insert(index, value)
    }
    fn front(&self) -> OrderedCursor<'_, I, C> {
        OrderedCursor {
            map: self,
            current: self.iter().next(),
        }
    }
    fn past_end(&self) -> OrderedCursor<'_, I, C> {
        OrderedCursor {
            map: self,
            current: None,
        }
    }
    fn is_ordered() -> bool {
        true
    }
}

/// Cursor on `BTreeMap`
///
/// It holds the entry it points to, and finds the neighbouring entry by a
/// range query on the map.
pub struct OrderedCursor<'a, I, C> {
    /// reference of the map
    map: &'a BTreeMap<I, C>,
    /// current entry, `None` if past the end
    current: Option<(&'a I, &'a C)>,
}

impl<'a, I, C> Clone for OrderedCursor<'a, I, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, I, C> Copy for OrderedCursor<'a, I, C> {}

impl<'a, I, C> PartialEq for OrderedCursor<'a, I, C> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.map, other.map) && same_entry(self.current, other.current)
    }
}

impl<'a, I: Ord + 'a, C: 'a> StorageCursor<'a> for OrderedCursor<'a, I, C> {
    type Index = I;
    type Item = C;
    #[inline]
    fn entry(&self) -> Option<(&'a I, &'a C)> {
        self.current
    }
    fn move_next(&mut self) {
        if let Some((index, _)) = self.current {
            self.current = self.map.range::<I, _>((Excluded(index), Unbounded)).next();
        }
    }
}

impl<'a, I: Ord + 'a, C: 'a> BidirectionalStorageCursor<'a> for OrderedCursor<'a, I, C> {
    fn move_prev(&mut self) {
        self.current = match self.current {
            Some((index, _)) => self.map.range::<I, _>(..index).next_back(),
            None => self.map.iter().next_back(),
        };
    }
}
