//! Module for all helper functions that are not related in particular to any
//! other module.

use std::collections::HashSet;
use std::hash::Hash;

/// Checks if the elements of a set match a list (more precisely, an iterator)
/// of elements, regardless of order.
///
/// [inspired from here](https://stackoverflow.com/questions/58615910/checking-two-hashmaps-for-identical-keyset-in-rust)
pub fn keys_match<'a, T: Eq + Hash + 'a>(
    set: &HashSet<T>,
    iter: impl Iterator<Item = &'a T>,
) -> bool {
    let mut len: usize = 0;
    for k in iter {
        if !set.contains(k) {
            return false;
        }
        len += 1;
    }
    set.len() == len
}

/// Alias for `Box::new()` to make it shorter and easier
/// to use in manually-created ASTs.
pub fn boxed<T>(t: T) -> Box<T> {
    Box::new(t)
}
