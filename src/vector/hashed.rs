//!
//! Hashed storage that uses `std::collections::HashMap`
//!
//! Any default-constructible hasher can be used; `FnvHashMap` is the one used
//! throughout this crate. Entries are visited in the iteration order of the
//! hash map, which is stable as long as the map is not modified. The cursor
//! can only move forward.
//!
use super::{same_entry, Storage, StorageCursor};
use std::collections::hash_map::{self, HashMap};
use std::hash::{BuildHasher, Hash};

impl<I, C, H> Storage for HashMap<I, C, H>
where
    I: Eq + Hash + Clone,
    C: Clone,
    H: BuildHasher + Default + Clone,
{
    type Index = I;
    type Item = C;
    type Cursor<'a> = HashedCursor<'a, I, C, H> where Self: 'a;
    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }
    #[inline]
    fn find(&self, index: &I) -> Option<&C> {
        self.get(index)
    }
    #[inline]
    fn insert_or_assign(&mut self, index: I, value: C) -> Option<C> {
        self.insert(index, value)
    }
    fn front(&self) -> HashedCursor<'_, I, C, H> {
        let mut iter = self.iter();
        let current = iter.next();
        HashedCursor {
            map: self,
            iter,
            current,
        }
    }
    fn past_end(&self) -> HashedCursor<'_, I, C, H> {
        HashedCursor {
            map: self,
            iter: self.iter(),
            current: None,
        }
    }
    fn is_ordered() -> bool {
        false
    }
}

/// Forward-only cursor on `HashMap`
pub struct HashedCursor<'a, I, C, H> {
    /// reference of the map
    map: &'a HashMap<I, C, H>,
    /// native iterator, positioned just after `current`
    iter: hash_map::Iter<'a, I, C>,
    /// current entry, `None` if past the end
    current: Option<(&'a I, &'a C)>,
}

impl<'a, I, C, H> Clone for HashedCursor<'a, I, C, H> {
    fn clone(&self) -> Self {
        HashedCursor {
            map: self.map,
            iter: self.iter.clone(),
            current: self.current,
        }
    }
}

impl<'a, I, C, H> PartialEq for HashedCursor<'a, I, C, H> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.map, other.map) && same_entry(self.current, other.current)
    }
}

impl<'a, I: 'a, C: 'a, H: 'a> StorageCursor<'a> for HashedCursor<'a, I, C, H> {
    type Index = I;
    type Item = C;
    #[inline]
    fn entry(&self) -> Option<(&'a I, &'a C)> {
        self.current
    }
    fn move_next(&mut self) {
        if self.current.is_some() {
            self.current = self.iter.next();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnv::FnvHashMap;

    #[test]
    fn hashed_storage() {
        let mut s: FnvHashMap<u64, u32> = FnvHashMap::default();
        assert_eq!(s.insert_or_assign(10, 1), None);
        assert_eq!(s.insert_or_assign(10, 2), Some(1));
        s.insert_or_assign(3, 0);
        assert_eq!(Storage::len(&s), 2);
        assert_eq!(s.find(&10), Some(&2));
        assert_eq!(s.find(&3), Some(&0));
        assert_eq!(s.find(&4), None);
        assert_eq!(Storage::len(&s), 2);
        assert!(!<FnvHashMap<u64, u32> as Storage>::is_ordered());
    }

    #[test]
    fn hashed_cursor_visits_all_entries_once() {
        let s: FnvHashMap<u64, u32> = (0..100).map(|i| (i * 7, i as u32)).collect();
        let mut c = s.front();
        let end = s.past_end();
        let mut visited = vec![];
        while c != end {
            let (index, value) = c.entry().unwrap();
            assert_eq!(*index, (*value as u64) * 7);
            visited.push(*index);
            c.move_next();
        }
        // native order of the hash map
        let native: Vec<u64> = s.keys().copied().collect();
        assert_eq!(visited, native);
        visited.sort();
        let expected: Vec<u64> = (0..100).map(|i| i * 7).collect();
        assert_eq!(visited, expected);
    }

    #[test]
    fn hashed_cursor_identity() {
        let s: FnvHashMap<u64, u32> = vec![(1, 1), (2, 2)].into_iter().collect();
        let a = s.front();
        let mut b = a.clone();
        assert!(a == b);
        b.move_next();
        assert!(a != b);
        let mut c = a.clone();
        c.move_next();
        assert!(b == c);
        c.move_next();
        assert!(c == s.past_end());

        let t = s.clone();
        assert!(s.past_end() != t.past_end());
        let empty: FnvHashMap<u64, u32> = FnvHashMap::default();
        assert!(empty.front() == empty.past_end());
    }
}
