//! A singly linked list built around cursor-based splicing.
//!
//! # Purpose
//! This crate provides exactly one data structure: [`ForwardList`], a sequence with forward-only
//! traversal, `O(1)` insertion and removal at the front, and `O(1)` insertion and removal
//! immediately after any cursor position. That's deliberately all it does. A singly linked list is
//! small enough that the interesting engineering is entirely in the details: who owns each node,
//! when a cursor is allowed to exist, and what state the list is left in when something panics
//! partway through an operation.
//!
//! # Cursors instead of raw iterators
//! Positional mutation goes through [`Cursor`] and [`CursorMut`] rather than through the
//! [`Iterator`]s. A cursor borrows its list, which means the borrow checker enforces the classic
//! linked-list invalidation rules at compile time: you can't hold a read cursor across a mutation,
//! and a [`CursorMut`] is the only thing allowed to touch the structure while it exists. Both
//! cursor types support the position *before* the first element, which unifies "push at the front"
//! with "insert after a position" without a dummy node.
//!
//! # Error Handling
//! The container performs no I/O and swallows nothing. Operations that can trivially be asked of
//! an empty list ([`ForwardList::pop_front`], [`CursorMut::pop_next`]) return [`Option`] rather
//! than imposing preconditions. The one operation that cannot be given a sensible meaning,
//! inserting after the past-the-end position, panics; a singly linked list has no `O(1)` route to
//! the node before the end.
//!
//! # A note on linked lists
//! Modern hardware strongly favours contiguous collections; every full traversal here is a chain
//! of likely cache misses. Reach for this type when the cursor's `O(1)` splicing is the point, not
//! as a general-purpose sequence.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]

pub mod list;

pub(crate) mod util;

#[doc(inline)]
pub use list::{Cursor, CursorMut, ForwardList, IntoIter, Iter, IterMut};
