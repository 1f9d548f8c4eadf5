use derive_more::IsVariant;

use super::{ForwardList, ListState, Node, NodePtr};
use crate::util::option::OptionExtension;

/// A read-only cursor over a [`ForwardList`]. See [`ForwardList::cursor_before`] to create one.
///
/// A cursor rests either before the first element, on an element, or past the last element, and
/// only ever moves forward. Because it borrows the list for its whole lifetime, the usual linked
/// list invalidation hazards are ruled out at compile time: the list cannot be structurally
/// mutated while any `Cursor` into it exists.
pub struct Cursor<'a, T> {
    pub(crate) pos: CursorPosition<T>,
    pub(crate) list: &'a ForwardList<T>,
}

/// A mutating cursor over a [`ForwardList`]. See [`ForwardList::cursor_before_mut`] to create
/// one.
///
/// In addition to the traversal and reading offered by [`Cursor`], a `CursorMut` can mutate
/// elements in place and splice nodes in and out of the chain immediately after its position, in
/// `O(1)`. It holds the list's only live borrow, so every structural change goes through the
/// cursor itself and its position can never dangle.
pub struct CursorMut<'a, T> {
    pub(crate) pos: CursorPosition<T>,
    pub(crate) list: &'a mut ForwardList<T>,
}

#[derive(IsVariant)]
pub(crate) enum CursorPosition<T> {
    /// The ghost position before the first element.
    Before,
    /// On the node behind the pointer.
    Ptr(NodePtr<T>),
    /// The ghost position past the last element.
    End,
}

use CursorPosition::*;

impl<T> Clone for CursorPosition<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CursorPosition<T> {}

impl<T> PartialEq for CursorPosition<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Before, Before) | (End, End) => true,
            (Ptr(own), Ptr(other)) => own == other,
            _ => false,
        }
    }
}

impl<T> Eq for CursorPosition<T> {}

impl<'a, T> Cursor<'a, T> {
    /// Returns a reference to the element under the cursor, or [`None`] at either ghost
    /// position. The reference borrows the list, not the cursor, so it outlives further moves.
    pub fn read(&self) -> Option<&'a T> {
        match &self.pos {
            Before | End => None,
            Ptr(node) => Some(node.value()),
        }
    }

    /// Returns a reference to the element after the cursor without moving, or [`None`] if there
    /// is nothing there.
    pub fn read_next(&self) -> Option<&'a T> {
        match &self.pos {
            Before => match &self.list.state {
                ListState::Empty => None,
                ListState::Full(contents) => Some(contents.head.value()),
            },
            Ptr(node) => match node.next() {
                Some(next_node) => Some(next_node.value()),
                None => None,
            },
            End => None,
        }
    }

    /// Advances the cursor by one position. Stepping before the first element of an empty list,
    /// or off the last element, lands on the past-the-end position; moving further is a no-op.
    pub fn move_next(&mut self) -> &mut Self {
        self.pos = next_position(self.pos, self.list);
        self
    }

    /// Returns true if the cursor rests before the first element.
    pub const fn is_before(&self) -> bool {
        self.pos.is_before()
    }

    /// Returns true if the cursor rests past the last element.
    pub const fn is_end(&self) -> bool {
        self.pos.is_end()
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<'a, T> CursorMut<'a, T> {
    /// Returns a reference to the element under the cursor, or [`None`] at either ghost
    /// position.
    pub fn read(&self) -> Option<&T> {
        match &self.pos {
            Before | End => None,
            Ptr(node) => Some(node.value()),
        }
    }

    /// Returns a mutable reference to the element under the cursor, or [`None`] at either ghost
    /// position.
    pub fn read_mut(&mut self) -> Option<&mut T> {
        match &mut self.pos {
            Before | End => None,
            Ptr(node) => Some(node.value_mut()),
        }
    }

    /// Returns a reference to the element after the cursor without moving, or [`None`] if there
    /// is nothing there.
    pub fn read_next(&self) -> Option<&T> {
        self.as_cursor().read_next()
    }

    /// Returns a mutable reference to the element after the cursor without moving, or [`None`]
    /// if there is nothing there.
    pub fn read_next_mut(&mut self) -> Option<&mut T> {
        match &self.pos {
            Before => match &mut self.list.state {
                ListState::Empty => None,
                ListState::Full(contents) => Some(contents.head.value_mut()),
            },
            Ptr(node) => match node.next_mut() {
                Some(next_node) => Some(next_node.value_mut()),
                None => None,
            },
            End => None,
        }
    }

    /// Advances the cursor by one position, saturating at the past-the-end position.
    pub fn move_next(&mut self) -> &mut Self {
        self.pos = next_position(self.pos, self.list);
        self
    }

    /// Returns true if the cursor rests before the first element.
    pub const fn is_before(&self) -> bool {
        self.pos.is_before()
    }

    /// Returns true if the cursor rests past the last element.
    pub const fn is_end(&self) -> bool {
        self.pos.is_end()
    }

    /// Reborrows the cursor as a read-only [`Cursor`] at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            pos: self.pos,
            list: self.list,
        }
    }

    /// Inserts `value` into the list immediately after the cursor, in `O(1)`. The cursor stays
    /// where it is; the new element becomes its [`read_next`](CursorMut::read_next), so following
    /// up with [`move_next`](CursorMut::move_next) steps onto it.
    ///
    /// From the before-first position this is exactly
    /// [`push_front`](ForwardList::push_front).
    ///
    /// The node is fully constructed before any link in the list is rewritten, so a panic within
    /// this method leaves the list unchanged.
    ///
    /// # Panics
    /// Panics if the cursor rests past the last element: a singly linked list has no `O(1)` way
    /// to reach the node the new element would have to follow.
    pub fn push_next(&mut self, value: T) {
        match self.pos {
            Before => self.list.push_front(value),
            Ptr(node) => {
                // UNREACHABLE: A node position implies the list is non-empty.
                let contents = unsafe { self.list.state.contents_mut().unreachable() };
                contents.len = contents.len.checked_add(1).expect("Capacity overflow!");

                let new_node = NodePtr::from_node(Node {
                    value,
                    next: *node.next(),
                });

                *node.next_mut() = Some(new_node);
            },
            End => panic!("Cannot insert past the end of a ForwardList!"),
        }
    }

    /// Removes the element immediately after the cursor and returns it, in `O(1)`. Returns
    /// [`None`] when no such element exists: on the last element, past the end, or before the
    /// first element of an empty list. The cursor stays where it is, and the element that
    /// followed the removed one (if any) becomes its [`read_next`](CursorMut::read_next).
    pub fn pop_next(&mut self) -> Option<T> {
        match self.pos {
            Before => self.list.pop_front(),
            Ptr(node) => match *node.next() {
                Some(next_ptr) => {
                    // UNREACHABLE: A node position implies the list is non-empty.
                    let contents = unsafe { self.list.state.contents_mut().unreachable() };

                    let next_node = next_ptr.take_node();
                    *node.next_mut() = next_node.next;

                    // UNREACHABLE: The list held at least the cursor's node and the removed one,
                    // so the decremented length is still non-zero.
                    contents.len = unsafe { contents.len.checked_sub(1).unreachable() };

                    Some(next_node.value)
                },
                None => None,
            },
            End => None,
        }
    }
}

fn next_position<T>(pos: CursorPosition<T>, list: &ForwardList<T>) -> CursorPosition<T> {
    match pos {
        Before => match &list.state {
            ListState::Empty => End,
            ListState::Full(contents) => Ptr(contents.head),
        },
        Ptr(node) => match node.next() {
            Some(next_node) => Ptr(*next_node),
            None => End,
        },
        End => End,
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    /// Cursors are equal iff they rest at the same position: the identical node, both before the
    /// first element, or both past the end.
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialEq for CursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<T> Eq for CursorMut<'_, T> {}

impl<T> PartialEq<CursorMut<'_, T>> for Cursor<'_, T> {
    fn eq(&self, other: &CursorMut<'_, T>) -> bool {
        self.pos == other.pos
    }
}

impl<T> PartialEq<Cursor<'_, T>> for CursorMut<'_, T> {
    fn eq(&self, other: &Cursor<'_, T>) -> bool {
        self.pos == other.pos
    }
}
