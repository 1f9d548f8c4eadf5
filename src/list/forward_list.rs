use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;

use derive_more::IsVariant;

use super::{Cursor, CursorMut, CursorPosition, Iter, IterMut, Length, Node, NodePtr, ONE};
use crate::util::option::OptionExtension;

/// A singly linked list. See also: [`Cursor`] and [`CursorMut`] for traversal with `O(1)`
/// positional insertion and removal.
///
/// # Time Complexity
/// With `n` the number of items in the list:
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `swap` | `O(1)` |
/// | `clear` | `O(n)` |
/// | [`CursorMut::push_next`] | `O(1)` |
/// | [`CursorMut::pop_next`] | `O(1)` |
///
/// There is deliberately no indexed access and no tail insertion: both would be `O(n)` on a
/// singly linked structure, and anything that needs them is better served by a contiguous
/// collection.
pub struct ForwardList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default, IsVariant)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
}

impl<T> ForwardList<T> {
    /// Creates a new ForwardList with no elements.
    pub const fn new() -> ForwardList<T> {
        ForwardList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements in the list.
    pub const fn len(&self) -> usize {
        match self.state {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    /// Returns true if the list contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { mut head, .. }) => Some(head.value_mut()),
        }
    }

    /// Adds the provided element to the front of the list. No existing node is moved or
    /// reallocated by this call.
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head }) => {
                let node = head.take_node();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: The previous length was at least 2, so a second node exists.
                        let new_head = unsafe { node.next.unreachable() };
                        *head = new_head;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Removes every element from the list, releasing all of its nodes. This walks the chain
    /// iteratively, so arbitrarily long lists won't overflow the stack. Never panics.
    pub fn clear(&mut self) {
        if let Full(ListContents { head, .. }) = mem::take(&mut self.state) {
            let mut curr = Some(head);
            while let Some(ptr) = curr {
                // The node's value is dropped here; next is read out first.
                curr = ptr.take_node().next;
            }
        }
    }

    /// Exchanges the contents of two lists without copying or moving any element. `O(1)` and
    /// never panics.
    pub fn swap(&mut self, other: &mut ForwardList<T>) {
        mem::swap(&mut self.state, &mut other.state);
    }

    /// Returns a read-only cursor resting *before* the first element. The position itself holds
    /// no value; call [`Cursor::move_next`] to step onto the first element.
    pub const fn cursor_before(&self) -> Cursor<'_, T> {
        Cursor {
            pos: CursorPosition::Before,
            list: self,
        }
    }

    /// Returns a mutating cursor resting *before* the first element. From there,
    /// [`CursorMut::push_next`] is equivalent to [`push_front`](ForwardList::push_front).
    pub fn cursor_before_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            pos: CursorPosition::Before,
            list: self,
        }
    }

    /// Returns an iterator over references to the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to the elements, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T> ListContents<T> {
    pub(crate) fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).expect("Capacity overflow!");

        let node = NodePtr::from_node(Node {
            value,
            next: Some(self.head),
        });

        self.head = node;
    }
}

impl<T> ListState<T> {
    pub(crate) fn single(value: T) -> ListState<T> {
        Full(ListContents {
            len: ONE,
            head: NodePtr::from_node(Node { value, next: None }),
        })
    }

    pub(crate) fn contents_mut(&mut self) -> Option<&mut ListContents<T>> {
        match self {
            Empty => None,
            Full(contents) => Some(contents),
        }
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    /// Builds a list holding the items of the iterator in iteration order, by walking a cursor
    /// forward and inserting behind it.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ForwardList::new();
        let mut cursor = list.cursor_before_mut();
        for item in iter {
            cursor.push_next(item);
            cursor.move_next();
        }
        list
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    /// Deep-copies the list, preserving element order.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    // NOTE: clone_from is left at its default on purpose. Building the complete replacement
    // before dropping the old chain means a panicking element clone leaves self untouched.
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    /// Two lists are equal iff they have the same length and are element-wise equal in traversal
    /// order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: PartialOrd> PartialOrd for ForwardList<T> {
    /// Lexicographic comparison over traversal order.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for ForwardList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for ForwardList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self {
            item.hash(state);
        }
    }
}

impl<T: Debug> Debug for ForwardList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for ForwardList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        write!(f, "(")?;
        if let Some(first) = iter.next() {
            write!(f, "{first:?}")?;
            for item in iter {
                write!(f, ") -> ({item:?}")?;
            }
        }
        write!(f, ")")
    }
}
