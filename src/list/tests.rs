#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_new_list_is_empty() {
    let mut list = ForwardList::<u32>::new();
    assert_eq!(list.len(), 0, "A new list should have no elements.");
    assert!(list.is_empty(), "A new list should be empty.");
    assert_eq!(list.front(), None, "An empty list has no front element.");
    assert_eq!(
        list.pop_front(),
        None,
        "Popping from an empty list should report the absence rather than fail."
    );
    assert!(
        list.iter().next().is_none(),
        "Iterating an empty list should yield nothing."
    );
    assert_eq!(
        list,
        ForwardList::default(),
        "A new list should equal a defaulted one."
    );
}

#[test]
fn test_construction_preserves_order() {
    let list: ForwardList<usize> = (0..10).collect();
    assert_eq!(list.len(), 10, "Collecting 10 items should give a length of 10.");
    assert!(
        list.iter().copied().eq(0..10),
        "Front-to-back traversal should yield the construction sequence unchanged."
    );
    assert_eq!(
        list.iter().count(),
        list.len(),
        "The element count visited by iteration should match len."
    );

    let from_array = ForwardList::from([0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(
        list, from_array,
        "Construction from an array should agree with construction from an iterator."
    );
}

#[test]
fn test_push_pop_front() {
    let mut list = ForwardList::from([1, 2, 3]);

    list.push_front(0);
    assert_eq!(list.len(), 4);
    assert_eq!(list.front(), Some(&0), "push_front should place the value first.");

    assert_eq!(
        list.pop_front(),
        Some(0),
        "pop_front should remove exactly the value just pushed."
    );
    assert_eq!(
        list,
        ForwardList::from([1, 2, 3]),
        "A push_front / pop_front pair should leave the remaining elements unchanged."
    );

    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), Some(3));
    assert_eq!(list.pop_front(), None, "An emptied list has nothing left to pop.");
    assert!(list.is_empty());
}

#[test]
fn test_front_mut() {
    let mut list = ForwardList::from([5, 6]);
    if let Some(front) = list.front_mut() {
        *front = 50;
    }
    assert_eq!(
        list,
        ForwardList::from([50, 6]),
        "Mutating through front_mut should change only the first element."
    );
}

#[test]
fn test_clone_is_a_deep_copy() {
    let original = ForwardList::from([1, 2, 3]);
    let mut copy = original.clone();
    assert_eq!(original, copy, "A clone should compare equal to its source.");

    copy.push_front(0);
    *copy.iter_mut().last().unwrap() = 99;
    assert_eq!(
        original,
        ForwardList::from([1, 2, 3]),
        "Mutating a clone must not affect the original."
    );
    assert_eq!(copy, ForwardList::from([0, 1, 2, 99]));
}

#[test]
fn test_equality() {
    assert_eq!(
        ForwardList::from([1, 2, 3]),
        ForwardList::from([1, 2, 3]),
        "Lists built from the same sequence should be equal."
    );
    assert_ne!(
        ForwardList::from([1, 2, 3]),
        ForwardList::from([1, 2]),
        "Lists of different lengths should be unequal."
    );
    assert_ne!(
        ForwardList::from([1, 2, 3]),
        ForwardList::from([1, 2, 4]),
        "Lists differing in one element should be unequal."
    );
}

#[test]
fn test_lexicographic_ordering() {
    assert!(
        ForwardList::from([1, 2, 3]) < ForwardList::from([1, 2, 4]),
        "Comparison should be decided by the first differing element."
    );
    assert!(
        ForwardList::from([1, 2]) < ForwardList::from([1, 2, 3]),
        "A strict prefix should order before the longer sequence."
    );
    assert!(
        ForwardList::<i32>::from([]) < ForwardList::from([1]),
        "The empty list should order before any non-empty list."
    );

    let list = ForwardList::from([1, 2, 3]);
    assert!(list <= list, "Ordering should be reflexive for <=.");
    assert!(!(list < list), "No list should be strictly less than itself.");
    assert!(list >= list);
    assert!(!(list > list));
}

#[test]
fn test_hash_agrees_with_equality() {
    let state = RandomState::new();
    assert_eq!(
        state.hash_one(ForwardList::from([1, 2, 3])),
        state.hash_one(ForwardList::from([1, 2, 3])),
        "Equal lists should hash identically."
    );
}

#[test]
fn test_swap() {
    let mut first = ForwardList::from([1, 2]);
    let mut second = ForwardList::from([3, 4, 5]);

    first.swap(&mut second);

    assert_eq!(
        first,
        ForwardList::from([3, 4, 5]),
        "After swapping, the first list should hold the second's elements."
    );
    assert_eq!(second, ForwardList::from([1, 2]));
    assert_eq!(first.len(), 3, "Lengths should be exchanged along with the chains.");
    assert_eq!(second.len(), 2);
}

#[test]
fn test_cursor_traversal() {
    let list = ForwardList::from([1, 2, 3]);
    let mut cursor = list.cursor_before();

    assert!(cursor.is_before(), "A fresh cursor rests before the first element.");
    assert_eq!(cursor.read(), None, "The before-first position holds no value.");
    assert_eq!(cursor.read_next(), Some(&1), "read_next should peek at the first element.");

    let mut visited = Vec::new();
    cursor.move_next();
    while let Some(value) = cursor.read() {
        visited.push(*value);
        cursor.move_next();
    }
    assert_eq!(visited, [1, 2, 3], "Cursor traversal should agree with iteration.");

    assert!(cursor.is_end(), "Stepping off the last element should land past the end.");
    assert_eq!(cursor.read_next(), None);
    cursor.move_next();
    assert!(cursor.is_end(), "Moving past the end should saturate rather than wrap.");
}

#[test]
fn test_cursor_over_empty_list() {
    let list = ForwardList::<u32>::new();
    let mut cursor = list.cursor_before();
    assert_eq!(cursor.read_next(), None, "An empty list has no first element to peek.");

    cursor.move_next();
    assert!(
        cursor.is_end(),
        "Advancing from before-first over an empty list should reach past-the-end."
    );
}

#[test]
fn test_cursor_equality() {
    let list = ForwardList::from([1, 2]);
    let mut first = list.cursor_before();
    let mut second = list.cursor_before();
    assert!(first == second, "Two before-first cursors should be equal.");

    first.move_next();
    assert!(first != second, "Cursors at different positions should be unequal.");

    second.move_next();
    assert!(second == first, "Cursors on the identical node should be equal.");

    let copy = first;
    assert!(copy == first, "A copied cursor should remain equal to its source.");
}

#[test]
fn test_cursor_equality_across_mutability() {
    let list = ForwardList::from([1]);
    let mut other = ForwardList::from([2, 3]);

    let mut end = list.cursor_before();
    end.move_next();
    end.move_next();
    assert!(end.is_end());

    let mut end_mut = other.cursor_before_mut();
    end_mut.move_next();
    end_mut.move_next();
    end_mut.move_next();
    assert!(end_mut.is_end());

    assert!(
        end == end_mut,
        "Past-the-end cursors should compare equal across mutability, as both point nowhere."
    );
    assert!(end_mut == end, "Cross-mutability equality should be symmetric.");

    assert!(
        end_mut.as_cursor() == end_mut,
        "Reborrowing as a read-only cursor should preserve the position."
    );
}

#[test]
fn test_push_next_at_front_matches_push_front() {
    let mut pushed = ForwardList::from([1, 2]);
    pushed.push_front(0);

    let mut spliced = ForwardList::from([1, 2]);
    spliced.cursor_before_mut().push_next(0);

    assert_eq!(
        spliced, pushed,
        "Inserting after the before-first position should be exactly push_front."
    );
    assert_eq!(spliced.len(), pushed.len());
}

#[test]
fn test_push_next_splices_mid_list() {
    let mut list = ForwardList::from([1, 2, 3]);
    let mut cursor = list.cursor_before_mut();
    cursor.move_next();

    cursor.push_next(9);
    assert_eq!(cursor.read(), Some(&1), "push_next should leave the cursor in place.");
    assert_eq!(
        cursor.read_next(),
        Some(&9),
        "The inserted element should sit immediately after the cursor."
    );
    drop(cursor);

    assert_eq!(list, ForwardList::from([1, 9, 2, 3]));
    assert_eq!(list.len(), 4);
}

#[test]
fn test_push_next_at_last_node() {
    let mut list = ForwardList::from([1]);
    let mut cursor = list.cursor_before_mut();
    cursor.move_next();

    cursor.push_next(2);
    drop(cursor);
    assert_eq!(
        list,
        ForwardList::from([1, 2]),
        "Inserting after the last node should extend the chain."
    );
}

#[test]
fn test_push_next_past_the_end_panics() {
    assert_panics!(
        {
            let mut list = ForwardList::from([1]);
            let mut cursor = list.cursor_before_mut();
            cursor.move_next();
            cursor.move_next();
            cursor.push_next(2);
        },
        "Inserting past the end of the list should panic."
    );
}

#[test]
fn test_pop_next() {
    let mut list = ForwardList::from([1, 2, 3]);
    let mut cursor = list.cursor_before_mut();
    cursor.move_next();

    assert_eq!(
        cursor.pop_next(),
        Some(2),
        "pop_next should remove and return the element after the cursor."
    );
    assert_eq!(
        cursor.read_next(),
        Some(&3),
        "The element after the removed one should now follow the cursor."
    );

    cursor.push_next(2);
    drop(cursor);
    assert_eq!(
        list,
        ForwardList::from([1, 2, 3]),
        "Re-inserting the removed value at the same position should restore the sequence."
    );
    assert_eq!(list.len(), 3);
}

#[test]
fn test_pop_next_with_nothing_to_remove() {
    let mut empty = ForwardList::<u32>::new();
    assert_eq!(
        empty.cursor_before_mut().pop_next(),
        None,
        "pop_next before the first element of an empty list should report the absence."
    );
    assert!(empty.is_empty());

    let mut list = ForwardList::from([1]);
    let mut cursor = list.cursor_before_mut();
    cursor.move_next();
    assert_eq!(
        cursor.pop_next(),
        None,
        "pop_next on the last node should find nothing to remove."
    );
    cursor.move_next();
    assert_eq!(cursor.pop_next(), None, "pop_next past the end should find nothing.");
    drop(cursor);
    assert_eq!(list.len(), 1, "Failed removals must not disturb the length.");
}

#[test]
fn test_pop_next_emptying_the_list() {
    let mut list = ForwardList::from([1]);
    let mut cursor = list.cursor_before_mut();
    assert_eq!(cursor.pop_next(), Some(1));
    assert_eq!(
        cursor.read_next(),
        None,
        "The cursor should observe the list becoming empty."
    );
    drop(cursor);
    assert!(list.is_empty());
}

#[test]
fn test_read_mut_through_cursor() {
    let mut list = ForwardList::from([1, 2]);
    let mut cursor = list.cursor_before_mut();

    if let Some(value) = cursor.read_next_mut() {
        *value += 10;
    }
    cursor.move_next();
    if let Some(value) = cursor.read_mut() {
        *value += 100;
    }
    drop(cursor);

    assert_eq!(
        list,
        ForwardList::from([111, 2]),
        "read_mut and read_next_mut should both write through to the same element."
    );
}

#[test]
fn test_iter_mut() {
    let mut list = ForwardList::from([1, 2, 3]);
    for value in list.iter_mut() {
        *value *= 2;
    }
    assert_eq!(
        list,
        ForwardList::from([2, 4, 6]),
        "iter_mut should visit and update every element in order."
    );
}

#[test]
fn test_iterator_lengths() {
    let list = ForwardList::from([1, 2, 3]);

    let mut iter = list.iter();
    assert_eq!(iter.len(), 3, "A fresh iterator should report the full length.");
    iter.next();
    assert_eq!(iter.len(), 2, "Each step should shorten the reported length by one.");

    let cloned = iter.clone();
    assert!(
        cloned.eq(iter),
        "A cloned iterator should yield the same remaining elements."
    );

    assert_eq!(list.into_iter().len(), 3);
    assert_eq!(
        Iter::<u32>::default().len(),
        0,
        "A defaulted iterator is empty, just like one that has reached the end."
    );
    assert!(IterMut::<u32>::default().next().is_none());
}

#[test]
fn test_clear_releases_every_element() {
    let counter = CountedDrop::new(0);
    let mut list: ForwardList<CountedDrop> =
        iter::repeat_with(|| counter.clone()).take(5).collect();

    list.clear();
    assert_eq!(
        *counter.borrow(),
        5,
        "clear should drop each stored element exactly once."
    );
    assert!(list.is_empty());

    list.push_front(counter.clone());
    assert_eq!(list.len(), 1, "A cleared list should be fully usable again.");
}

#[test]
fn test_drop_releases_every_element() {
    let counter = CountedDrop::new(0);
    {
        let _list: ForwardList<CountedDrop> =
            iter::repeat_with(|| counter.clone()).take(4).collect();
    }
    assert_eq!(
        *counter.borrow(),
        4,
        "Dropping the list should drop each stored element exactly once."
    );
}

#[test]
fn test_into_iter_releases_unconsumed_elements() {
    let counter = CountedDrop::new(0);
    let list: ForwardList<CountedDrop> =
        iter::repeat_with(|| counter.clone()).take(4).collect();

    let mut into_iter = list.into_iter();
    drop(into_iter.next());
    drop(into_iter);
    assert_eq!(
        *counter.borrow(),
        4,
        "A partially consumed owning iterator should still release every element."
    );
}

#[test]
fn test_zst_support() {
    let mut list: ForwardList<ZeroSizedType> =
        iter::repeat(ZeroSizedType).take(3).collect();
    assert_eq!(list.len(), 3, "Zero-sized elements should still be counted.");
    assert_eq!(
        list.iter().count(),
        3,
        "Iteration should visit the right number of ZST instances."
    );
    assert_eq!(list.pop_front(), Some(ZeroSizedType));
    assert_eq!(list.len(), 2);
}

#[test]
fn test_display_and_debug() {
    let list = ForwardList::from([1, 2, 3]);
    assert_eq!(
        format!("{list}"),
        "(1) -> (2) -> (3)",
        "Display should render the chain of nodes."
    );
    assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    assert_eq!(
        format!("{}", ForwardList::<u32>::new()),
        "()",
        "An empty list should display as a single empty link."
    );
}
