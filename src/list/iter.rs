use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem;

use super::{ForwardList, Link, ListContents, ListState};

use ListState::*;

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = self.len();
        IntoIter {
            // The state is taken out so that the list's Drop doesn't free nodes now owned by the
            // iterator.
            curr: match mem::take(&mut self.state) {
                Empty => None,
                Full(ListContents { head, .. }) => Some(head),
            },
            index: 0,
            len,
            _phantom: PhantomData,
        }
    }
}

/// An owning iterator over the elements of a [`ForwardList`].
pub struct IntoIter<T> {
    pub(crate) curr: Link<T>,
    pub(crate) index: usize,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr.map(|ptr| {
            // Re-forming the box moves the value out and releases the node.
            let node = ptr.take_node();
            self.curr = node.next;
            self.index += 1;
            node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Any nodes the iterator didn't get around to are still owned by it.
        while self.next().is_some() {}
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a mut ForwardList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            curr: match self.state {
                Empty => None,
                Full(ListContents { head, .. }) => Some(head),
            },
            index: 0,
            len: self.len(),
            _phantom: PhantomData,
        }
    }
}

/// An iterator over mutable references to the elements of a [`ForwardList`].
pub struct IterMut<'a, T> {
    pub(crate) curr: Link<T>,
    pub(crate) index: usize,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr.map(|mut ptr| {
            self.curr = *ptr.next();
            self.index += 1;
            ptr.value_mut()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<T> Default for IterMut<'_, T> {
    /// A default iterator is empty, equivalent to one that has reached the end of its list.
    fn default() -> Self {
        IterMut {
            curr: None,
            index: 0,
            len: 0,
            _phantom: PhantomData,
        }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            curr: match self.state {
                Empty => None,
                Full(ListContents { head, .. }) => Some(head),
            },
            index: 0,
            len: self.len(),
            _phantom: PhantomData,
        }
    }
}

/// An iterator over references to the elements of a [`ForwardList`].
pub struct Iter<'a, T> {
    pub(crate) curr: Link<T>,
    pub(crate) index: usize,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr.map(|ptr| {
            self.curr = *ptr.next();
            self.index += 1;
            ptr.value()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<T> Default for Iter<'_, T> {
    /// A default iterator is empty, equivalent to one that has reached the end of its list.
    fn default() -> Self {
        Iter {
            curr: None,
            index: 0,
            len: 0,
            _phantom: PhantomData,
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
