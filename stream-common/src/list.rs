//! # Finite Eager Lists
//!
//! The eager counterpart of a lazy stream. Whatever leaves the lazy world,
//! whether a bounded prefix or a window, arrives as a [`List`].
//!
//! `List<T>` is `im::Vector<T>`: cloning is O(1) and pushes share structure,
//! so windows that overlap (sliding windows) stay cheap.
//!
//! ## Example
//!
//! ```
//! use stream_common::list::{list_of, fold_right};
//!
//! let lst = list_of([1, 2, 3]);
//! assert_eq!(lst.len(), 3);
//!
//! let shown = fold_right(&lst, "nil".to_string(), |x, acc| format!("({x} . {acc})"));
//! assert_eq!(shown, "(1 . (2 . (3 . nil)))");
//! ```

use im::Vector;

/// A finite, ordered, persistent list.
pub type List<T> = Vector<T>;

/// Builds a list from any iterator, preserving order.
pub fn list_of<T, I>(items: I) -> List<T>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    items.into_iter().collect()
}

/// Right fold over a list.
///
/// # Example
/// ```
/// use stream_common::list::{list_of, fold_right};
/// let lst = list_of([1, 2, 3]);
/// assert_eq!(fold_right(&lst, Vec::new(), |x, mut acc| { acc.push(*x); acc }), vec![3, 2, 1]);
/// ```
pub fn fold_right<T, U, F>(list: &List<T>, init: U, f: F) -> U
where
    T: Clone,
    F: Fn(&T, U) -> U,
{
    list.iter().rev().fold(init, |acc, x| f(x, acc))
}
