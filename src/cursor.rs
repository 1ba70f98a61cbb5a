//!
//! Cursor protocol and generic sequence algorithms over it
//!
//! A cursor is a position in a container. Two cursors `first` and `last` of the
//! same container describe the half-open range `[first, last)`, and the
//! algorithms below walk such ranges without knowing the container.
//!
//! * `ForwardCursor`
//!     read the item at the position, and move to the next position
//! * `BidirectionalCursor`
//!     additionally move to the previous position
//!
//! Reading at the past-the-end position, or moving beyond either end of the
//! range, is a precondition violation of the cursor.
//!

///
/// Position in a container that can move forward
///
pub trait ForwardCursor: Clone + PartialEq {
    /// Item read at a position.
    /// Containers that own their items should hand out references here, so that
    /// items of two containers can be compared without copying.
    type Item;
    ///
    /// Item at the current position
    fn current(&self) -> Self::Item;
    ///
    /// Move to the next position
    fn advance(&mut self);
}

///
/// Position in a container that can move both ways
///
pub trait BidirectionalCursor: ForwardCursor {
    ///
    /// Move to the previous position
    fn retreat(&mut self);
}

///
/// Half-open range `[front, back)` of cursors as a std `Iterator`
///
#[derive(Clone, Debug)]
pub struct CursorRange<C> {
    front: C,
    back: C,
}

impl<C: ForwardCursor> CursorRange<C> {
    pub fn new(front: C, back: C) -> CursorRange<C> {
        CursorRange { front, back }
    }
    /// Whether the range is exhausted
    pub fn is_empty(&self) -> bool {
        self.front == self.back
    }
}

impl<C: ForwardCursor> Iterator for CursorRange<C> {
    type Item = C::Item;
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            None
        } else {
            let item = self.front.current();
            self.front.advance();
            Some(item)
        }
    }
}

impl<C: BidirectionalCursor> DoubleEndedIterator for CursorRange<C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            None
        } else {
            self.back.retreat();
            Some(self.back.current())
        }
    }
}

impl<C: ForwardCursor> std::iter::FusedIterator for CursorRange<C> {}

///
/// Whether `[first1, last1)` and the range of the same length starting at
/// `first2` are element-wise related by `eq`.
///
/// The second range must hold at least as many items as the first.
///
pub fn equal_by<A, B, F>(mut first1: A, last1: A, mut first2: B, mut eq: F) -> bool
where
    A: ForwardCursor,
    B: ForwardCursor,
    F: FnMut(A::Item, B::Item) -> bool,
{
    while first1 != last1 {
        if !eq(first1.current(), first2.current()) {
            return false;
        }
        first1.advance();
        first2.advance();
    }
    true
}

///
/// `equal_by` with `==`
///
pub fn equal<A, B>(first1: A, last1: A, first2: B) -> bool
where
    A: ForwardCursor,
    B: ForwardCursor,
    A::Item: PartialEq<B::Item>,
{
    equal_by(first1, last1, first2, |a, b| a == b)
}

///
/// Number of items in `[first, last)` that satisfy `pred`
///
pub fn count_if<C, P>(mut first: C, last: C, mut pred: P) -> usize
where
    C: ForwardCursor,
    P: FnMut(&C::Item) -> bool,
{
    let mut n = 0;
    while first != last {
        if pred(&first.current()) {
            n += 1;
        }
        first.advance();
    }
    n
}

///
/// Number of steps from `first` to `last`
///
pub fn distance<C: ForwardCursor>(mut first: C, last: C) -> usize {
    let mut n = 0;
    while first != last {
        first.advance();
        n += 1;
    }
    n
}
