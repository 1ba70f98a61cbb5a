//!
//! globally-available parts
//!
pub use crate::cursor::{BidirectionalCursor, CursorRange, ForwardCursor};
pub use crate::key::{DiagonalOrder, Pair, Triple};
pub use crate::vector::{
    HashedSparseVector, Indexable, OrderedSparseVector, SparseVector, SparseVectorIterator,
    Storage,
};
