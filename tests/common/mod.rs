//! Shared helpers for rpncalc integration tests

#[allow(unused_imports)]
pub use rpncalc::{LinkedList, Stack};

/// Build a list by appending the values in order.
#[allow(dead_code)]
pub fn list_of(values: &[i32]) -> LinkedList<i32> {
    values.iter().copied().collect()
}

/// Push every value onto the stack, in order.
#[allow(dead_code)]
pub fn push_all<S: Stack<i32>>(stack: &mut S, values: &[i32]) {
    for &value in values {
        stack.push(value);
    }
}
