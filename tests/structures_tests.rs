// Integration tests for the bounded containers, list editor, and access demos

use algoscope::structures::access::{
    access_char, access_element, generate_array, validate_string, SizeError,
};
use algoscope::structures::list::SeqList;
use algoscope::structures::{BoundedQueue, BoundedStack, ContainerError, Status};

/// Pushing six values onto a capacity-5 stack: five succeed, the sixth is
/// one Overflow, and the size stays at 5.
#[test]
fn test_stack_overflow_after_five_pushes() {
    let mut stack = BoundedStack::new();
    let mut overflows = 0;
    for i in 0..6 {
        match stack.push(&i.to_string()) {
            Ok(size) => assert_eq!(size, i + 1),
            Err(ContainerError::Overflow) => overflows += 1,
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }
    assert_eq!(overflows, 1);
    assert_eq!(stack.len(), 5);
    assert_eq!(stack.status(), Status::Overflow);
    assert_eq!(stack.message(), "Stack Overflow");
}

/// Popping six times from a full stack: five values come back newest-first,
/// then one Underflow.
#[test]
fn test_stack_underflow_after_draining() {
    let mut stack = BoundedStack::new();
    for value in ["a", "b", "c", "d", "e"] {
        stack.push(value).expect("below capacity");
    }

    let mut popped = Vec::new();
    let mut underflows = 0;
    for _ in 0..6 {
        match stack.pop() {
            Ok(value) => popped.push(value),
            Err(ContainerError::Underflow) => underflows += 1,
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }
    assert_eq!(popped, vec!["e", "d", "c", "b", "a"]);
    assert_eq!(underflows, 1);
    assert_eq!(stack.message(), "Stack Underflow");
}

#[test]
fn test_stack_observable_state() {
    let mut stack = BoundedStack::new();
    stack.push("x").expect("push");
    stack.push("y").expect("push");

    assert_eq!(stack.top(), Some("y"));
    assert_eq!(stack.last_pushed(), Some("y"));
    assert_eq!(stack.message(), "Item y is pushed.");

    let popped = stack.pop().expect("pop");
    assert_eq!(popped, "y");
    assert_eq!(stack.top(), Some("x"));
    assert_eq!(stack.last_popped(), Some("y"));
    assert_eq!(stack.message(), "Item y is popped.");
    assert_eq!(stack.status(), Status::Ok);
}

#[test]
fn test_stack_rejects_empty_input_without_state_change() {
    let mut stack = BoundedStack::new();
    assert_eq!(stack.push(""), Err(ContainerError::EmptyInput));
    assert_eq!(stack.len(), 0);
    assert_eq!(stack.status(), Status::EmptyInput);
    assert_eq!(stack.message(), "Please enter a value.");
}

#[test]
fn test_stack_reset_clears_memory() {
    let mut stack = BoundedStack::new();
    stack.push("x").expect("push");
    stack.pop().expect("pop");
    stack.reset();

    assert!(stack.is_empty());
    assert_eq!(stack.last_pushed(), None);
    assert_eq!(stack.last_popped(), None);
    assert_eq!(stack.message(), "");
    assert_eq!(stack.status(), Status::Ok);
}

#[test]
fn test_queue_is_first_in_first_out() {
    let mut queue = BoundedQueue::new();
    for value in ["a", "b", "c"] {
        queue.enqueue(value).expect("below capacity");
    }

    assert_eq!(queue.front(), Some("a"));
    assert_eq!(queue.dequeue().expect("dequeue"), "a");
    assert_eq!(queue.dequeue().expect("dequeue"), "b");
    assert_eq!(queue.front(), Some("c"));
}

#[test]
fn test_queue_bounds_mirror_the_stack() {
    let mut queue = BoundedQueue::new();
    for i in 0..5 {
        queue.enqueue(&i.to_string()).expect("below capacity");
    }
    assert_eq!(queue.enqueue("overflow"), Err(ContainerError::Overflow));
    assert_eq!(queue.message(), "Queue Overflow");
    assert_eq!(queue.len(), 5);

    for _ in 0..5 {
        queue.dequeue().expect("non-empty");
    }
    assert_eq!(queue.dequeue(), Err(ContainerError::Underflow));
    assert_eq!(queue.message(), "Queue Underflow");
    assert_eq!(queue.status(), Status::Underflow);
}

#[test]
fn test_queue_observable_state_and_reset() {
    let mut queue = BoundedQueue::new();
    queue.enqueue("x").expect("enqueue");
    assert_eq!(queue.message(), "Item x is enqueued.");
    assert_eq!(queue.last_enqueued(), Some("x"));

    queue.dequeue().expect("dequeue");
    assert_eq!(queue.message(), "Item x is dequeued.");
    assert_eq!(queue.last_dequeued(), Some("x"));

    queue.reset();
    assert!(queue.is_empty());
    assert_eq!(queue.last_enqueued(), None);
    assert_eq!(queue.last_dequeued(), None);
}

#[test]
fn test_list_inserts_at_both_ends_and_index() {
    let mut list = SeqList::new();
    list.insert_at_end("b");
    list.insert_at_start("a");
    list.insert_at_end("d");
    list.insert_at(2, "c");

    assert_eq!(list.nodes(), &["a", "b", "c", "d"]);
}

#[test]
fn test_list_deletes_preserve_remaining_order() {
    let mut list = SeqList::new();
    for value in ["a", "b", "c", "d", "e"] {
        list.insert_at_end(value);
    }
    list.delete_at_start();
    list.delete_at_end();
    list.delete_at(1);

    assert_eq!(list.nodes(), &["b", "d"]);
}

/// Out-of-range indices are silently ignored, not errors.
#[test]
fn test_list_out_of_range_is_a_silent_no_op() {
    let mut list = SeqList::new();
    list.insert_at_end("a");

    list.insert_at(5, "x");
    list.delete_at(5);
    assert_eq!(list.nodes(), &["a"]);

    // Insert at len is valid (append); delete at len is not.
    list.insert_at(1, "b");
    assert_eq!(list.nodes(), &["a", "b"]);
    list.delete_at(2);
    assert_eq!(list.nodes(), &["a", "b"]);
}

#[test]
fn test_list_edits_on_empty_list_do_nothing() {
    let mut list = SeqList::new();
    list.delete_at_start();
    list.delete_at_end();
    list.delete_at(0);
    assert!(list.is_empty());
}

#[test]
fn test_array_generation_enforces_size_bounds() {
    assert_eq!(generate_array(0), Err(SizeError::ArraySize { got: 0 }));
    assert_eq!(generate_array(21), Err(SizeError::ArraySize { got: 21 }));

    let array = generate_array(20).expect("20 is within bounds");
    assert_eq!(array.len(), 20);
    assert_eq!(array.first(), Some(&1));
    assert_eq!(array.last(), Some(&20));
}

/// Out-of-range access highlights nothing rather than failing.
#[test]
fn test_array_access_out_of_range_returns_none() {
    let array = generate_array(3).expect("valid size");
    assert_eq!(access_element(&array, 1), Some(2));
    assert_eq!(access_element(&array, 3), None);
}

#[test]
fn test_string_validation_counts_characters() {
    assert!(validate_string("").is_ok());
    assert!(validate_string(&"x".repeat(30)).is_ok());
    assert_eq!(
        validate_string(&"x".repeat(31)),
        Err(SizeError::StringLength { got: 31 })
    );
}

#[test]
fn test_string_access_by_character_position() {
    assert_eq!(access_char("hello", 1), Some('e'));
    assert_eq!(access_char("hello", 5), None);
}
