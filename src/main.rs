use env_logger::Env;
use generic_stack::collections::traits::{Average, Container, all_items_match, find_index};
use generic_stack::collections::{EmptyContainerAccess, Stack};
use log::{info, warn};

/// Has no `PartialEq`, so a Stack of these has no `is_top`.
#[derive(Debug)]
struct NotEquatable;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("[Stack of strings]");
    let mut stack_of_strings = Stack::new();
    for word in ["uno", "dos", "tres", "cuatro"] {
        stack_of_strings.push(String::from(word));
    }
    info!("pushed four strings: {stack_of_strings}");

    let from_the_top = stack_of_strings.pop();
    info!("popped {from_the_top:?}, {} strings remain", stack_of_strings.len());

    if let Some(top_item) = stack_of_strings.peek_top() {
        info!("the top item on the stack is {top_item}");
    }

    info!("[Empty stack]");
    let mut empty: Stack<i32> = Stack::new();
    info!("len {}, peek_top {:?}", empty.len(), empty.peek_top());
    match empty.try_pop() {
        Ok(value) => info!("popped {value}"),
        Err(EmptyContainerAccess) => warn!("{}", EmptyContainerAccess),
    }

    info!("[Equatable elements]");
    let numbers = Stack::from([1, 2, 3]);
    info!("{numbers}: is_top(3) = {}, is_top(5) = {}", numbers.is_top(&3), numbers.is_top(&5));

    let mut opaque = Stack::new();
    opaque.push(NotEquatable);
    info!("{opaque:?} holds values that can't be compared, so it has no is_top");

    info!("[Alternating push and pop]");
    let mut letters = Stack::new();
    letters.push("a");
    letters.push("b");
    info!("pop -> {}", letters.pop());
    letters.push("c");
    info!("pop -> {}", letters.pop());
    info!("pop -> {}", letters.pop());
    info!("final len {}", letters.len());

    info!("[Containers]");
    let mut stack_for_where = Stack::new();
    stack_for_where.append("uno");
    stack_for_where.append("dos");
    stack_for_where.append("tres");
    let array_of_strings = vec!["uno", "dos", "tres"];
    if all_items_match(&stack_for_where, &array_of_strings) {
        info!("all items match");
    } else {
        info!("not all items match");
    }

    if vec![9, 9, 9].starts_with_item(&42) {
        info!("starts with 42");
    } else {
        info!("starts with something else");
    }

    info!("average: {}", vec![1260.0, 1200.0, 98.6, 37.0].average());

    let strings = ["cat", "dog", "llama", "parakeet", "terrapin"];
    if let Some(found_index) = find_index(&"llama", &strings) {
        info!("the index of llama is {found_index}");
    }
}
