//! Sequence combinators.
//!
//! Eager map/filter over fully materialized slices. Both are total
//! functions: order is preserved, the input is never mutated, and an empty
//! input yields an empty output.

use alloc::vec::Vec;

/// Apply `transform` to every element, producing a new sequence of the
/// same length.
pub fn map<T, U, F>(transform: F, items: &[T]) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    items.iter().map(transform).collect()
}

/// Keep exactly the elements for which `predicate` holds, in their
/// original relative order.
pub fn filter<T, F>(predicate: F, items: &[T]) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    items
        .iter()
        .filter(|item| predicate(item))
        .cloned()
        .collect()
}
