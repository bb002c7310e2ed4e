#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_lifo_order() {
    let mut stack = Stack::new();
    for i in 0..100 {
        stack.push(i);
    }

    for i in (0..100).rev() {
        assert_eq!(stack.pop(), i, "Elements should be popped in reverse push order.");
    }
    assert!(stack.is_empty());
}

#[test]
fn test_count_invariant() {
    let mut stack = Stack::new();
    for k in 1..=20 {
        stack.push(k);
        assert_eq!(stack.len(), k, "Each push should add exactly one element.");
    }

    for j in 1..=20 {
        stack.pop();
        assert_eq!(stack.len(), 20 - j, "Each pop should remove exactly one element.");
    }
}

#[test]
fn test_idempotent_peek() {
    let mut stack = Stack::from([10, 20, 30]);

    for _ in 0..5 {
        assert_eq!(stack.peek_top(), Some(&30), "Peeking shouldn't change the top.");
        assert_eq!(stack.len(), 3, "Peeking shouldn't change the length.");
    }

    if let Some(top) = stack.peek_top_mut() {
        *top += 1;
    }
    assert_eq!(stack.pop(), 31, "A mutable peek should modify the top in place.");
    assert_eq!(stack.len(), 2);
}

#[test]
fn test_is_top() {
    let stack = Stack::from([1, 2, 3]);
    assert!(stack.is_top(&3));
    assert!(!stack.is_top(&2));
    assert!(!stack.is_top(&5));

    let empty: Stack<i32> = Stack::new();
    assert!(!empty.is_top(&0), "An empty Stack has no top to match.");
}

#[test]
fn test_empty_stack() {
    let mut stack: Stack<i32> = Stack::new();
    assert_eq!(stack.len(), 0);
    assert_eq!(stack.peek_top(), None);
    assert_eq!(stack.try_pop(), Err(EmptyContainerAccess));
    assert_eq!(
        stack.try_pop(),
        Err(EmptyContainerAccess),
        "Failed pops shouldn't change the Stack."
    );
    assert_eq!(stack.len(), 0);

    assert_panics!(
        {
            let mut stack: Stack<i32> = Stack::new();
            stack.pop()
        },
        message = "empty container"
    );
}

#[test]
fn test_string_scenario() {
    let mut stack = Stack::new();
    stack.push(String::from("uno"));
    stack.push(String::from("dos"));
    stack.push(String::from("tres"));
    stack.push(String::from("cuatro"));
    assert_eq!(stack.len(), 4);

    assert_eq!(stack.pop(), "cuatro");
    assert_eq!(stack.len(), 3);
    assert_eq!(stack.peek_top().map(String::as_str), Some("tres"));
}

#[test]
fn test_alternating_push_pop() {
    let mut stack = Stack::new();
    stack.push("a");
    stack.push("b");
    assert_eq!(stack.pop(), "b");
    stack.push("c");
    assert_eq!(stack.pop(), "c");
    assert_eq!(stack.pop(), "a");
    assert_eq!(stack.len(), 0);
}

#[test]
fn test_peek_nth() {
    let stack = Stack::from(["uno", "dos", "tres"]);
    assert_eq!(*stack.peek_nth(0), "tres");
    assert_eq!(*stack.peek_nth(1), "dos");
    assert_eq!(*stack.peek_nth(2), "uno");

    let err = stack.try_peek_nth(3).unwrap_err();
    assert!(err.is_index_out_of_bounds());
    assert_eq!(
        IndexOutOfBounds::try_from(err).ok(),
        Some(IndexOutOfBounds { index: 3, len: 3 })
    );

    let empty: Stack<&str> = Stack::new();
    assert!(empty.try_peek_nth(0).unwrap_err().is_empty_container_access());

    assert_panics!({ Stack::from([1, 2]).peek_nth(2); }, message = "out of bounds");
}

#[test]
fn test_growth() {
    let mut stack = Stack::new();
    assert_eq!(stack.cap(), 0, "A new Stack shouldn't allocate.");

    stack.push(0_u64);
    assert_eq!(stack.cap(), 2, "The first growth should reach the minimum capacity.");
    stack.push(1);
    stack.push(2);
    assert_eq!(stack.cap(), 4, "Growth should double the capacity.");
    stack.extend(3..5);
    assert_eq!(stack.cap(), 5, "Extending should reserve exactly the known extra length.");
    stack.push(5);
    assert_eq!(stack.cap(), 10);

    stack.shrink_to_fit();
    assert_eq!(stack.cap(), 6, "Shrinking should leave capacity equal to length.");
    assert_eq!(&*stack, &[0, 1, 2, 3, 4, 5], "Reallocation should keep every element.");

    stack.reserve(10);
    assert_eq!(stack.cap(), 16);
    stack.reserve(3);
    assert_eq!(stack.cap(), 16, "Reserving within capacity shouldn't reallocate.");

    let stack: Stack<u8> = Stack::with_cap(7);
    assert_eq!(stack.cap(), 7);
    assert!(stack.is_empty());

    assert_panics!({ Stack::<u64>::with_cap(usize::MAX) }, message = "Capacity overflow");
}

#[test]
fn test_zst_support() {
    let mut stack = Stack::new();
    for _ in 0..10 {
        stack.push(ZeroSizedType);
    }
    assert_eq!(stack.len(), 10);
    assert_eq!(stack.peek_top(), Some(&ZeroSizedType));
    assert_eq!(stack.iter().count(), 10);

    assert_eq!(stack.pop(), ZeroSizedType);
    assert_eq!(stack.len(), 9);

    let big: Stack<ZeroSizedType> = Stack::with_cap(usize::MAX);
    assert_eq!(big.cap(), usize::MAX, "Any capacity should be valid for a ZST.");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let stack = Stack::from_iter(iter::repeat_with(|| counter.clone()).take(10));
    drop(stack);
    assert_eq!(counter.drops(), 10, "10 elements should have been dropped.");

    let counter = CountedDrop::new();
    let mut stack = Stack::from_iter(iter::repeat_with(|| counter.clone()).take(10));
    drop(stack.pop());
    assert_eq!(counter.drops(), 1, "Only the popped element should have been dropped.");

    let cap = stack.cap();
    stack.clear();
    assert_eq!(counter.drops(), 10, "Clearing should drop the remaining elements.");
    assert_eq!(stack.cap(), cap, "Clearing shouldn't change the capacity.");

    drop(stack);
    assert_eq!(counter.drops(), 10, "Nothing should be dropped twice.");

    let counter = CountedDrop::new();
    let mut stack = Stack::new();
    for _ in 0..9 {
        stack.push(counter.clone());
    }
    assert_eq!(counter.drops(), 0, "Reallocation shouldn't drop any elements.");
    drop(stack);
    assert_eq!(counter.drops(), 9);
}

#[test]
fn test_iterators() {
    let stack = Stack::from([1, 2, 3, 4]);

    let bottom_up: Vec<_> = stack.iter().copied().collect();
    assert_eq!(bottom_up, [1, 2, 3, 4], "Borrowed iteration should run bottom to top.");

    let mut sum = 0;
    for i in &stack {
        sum += i;
    }
    assert_eq!(sum, 10);

    let mut iter = stack.clone().into_iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(4), "Owned iteration should start at the top.");
    assert_eq!(iter.next(), Some(3));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.collect::<Vec<_>>(), [2, 1]);

    let counter = CountedDrop::new();
    let stack = Stack::from_iter(iter::repeat_with(|| counter.clone()).take(10));
    let mut iter = stack.into_iter();
    drop(iter.next());
    drop(iter.next());
    assert_eq!(counter.drops(), 2);
    drop(iter);
    assert_eq!(
        counter.drops(),
        10,
        "Dropping an owned iterator should drop the remaining elements."
    );
}

#[test]
fn test_conversions() {
    let stack: Stack<_> = (1..=3).collect();
    assert!(stack.is_top(&3), "The last collected item should be on top.");
    assert_eq!(Vec::from(stack), [1, 2, 3], "Conversion should run bottom to top.");

    let stack = Stack::from(vec!["x", "y"]);
    assert_eq!(stack, Stack::from(["x", "y"]));
    assert_eq!(stack.as_slice(), &["x", "y"]);

    let counter = CountedDrop::new();
    let stack = Stack::from_iter(iter::repeat_with(|| counter.clone()).take(4));
    let vec = Vec::from(stack);
    assert_eq!(counter.drops(), 0, "Converting should move elements, not drop them.");
    drop(vec);
    assert_eq!(counter.drops(), 4);
}

#[test]
fn test_clone_is_independent() {
    let mut original = Stack::from([String::from("uno"), String::from("dos")]);
    let mut copy = original.clone();

    copy.push(String::from("tres"));
    original.pop();

    assert_eq!(original.len(), 1);
    assert_eq!(copy.len(), 3);
    assert!(copy.is_top(&String::from("tres")));
    assert!(original.is_top(&String::from("uno")));
}

#[test]
fn test_equality_and_hash() {
    let stack = Stack::from([0_usize, 1, 2]);
    assert_eq!(
        stack,
        (0..3).collect::<Stack<_>>(),
        "Different construction methods should be equal."
    );
    assert_ne!(stack, Stack::from([2_usize, 1, 0]), "Order should matter for equality.");

    let mut grown: Stack<usize> = Stack::with_cap(100);
    grown.extend(0..3);
    assert_eq!(stack, grown, "Capacity shouldn't affect equality.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&stack),
        state.hash_one(&grown),
        "Equal stacks should produce the same hash."
    );
    assert_eq!(
        state.hash_one(&stack),
        state.hash_one([0_usize, 1, 2].as_slice()),
        "Borrow hash equality should be upheld."
    );
}

#[test]
fn test_formatting() {
    let stack = Stack::from(["uno", "dos", "tres"]);
    assert_eq!(stack.to_string(), "[uno, dos, tres <- top]");
    assert_eq!(Stack::from([7]).to_string(), "[7 <- top]");
    assert_eq!(Stack::<i32>::new().to_string(), "[]");

    let mut stack = Stack::with_cap(4);
    stack.push(1);
    assert_eq!(format!("{stack:?}"), "Stack { contents: [1], len: 1, cap: 4 }");
}
