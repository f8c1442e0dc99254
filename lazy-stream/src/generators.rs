//! Generators for infinite (and unfolded) sequences.
//!
//! Scheme builds these with self-referential `cons-stream` definitions:
//!
//! ```scheme
//! (define (integers-starting-from n)
//!   (cons-stream n (integers-starting-from (+ n 1))))
//! (define ones (cons-stream 1 ones))
//! ```
//!
//! Here the self-reference is a tail closure that rebuilds the generator
//! from the next state when forced.

use std::rc::Rc;

use crate::seq::{LazySeq, Thunk};

impl LazySeq<i64> {
    /// Integers counting up from `start`. Ends at `i64::MAX` instead of
    /// overflowing.
    ///
    /// ```
    /// use lazy_stream::LazySeq;
    ///
    /// let first: Vec<i64> = LazySeq::integers_from(1).iter().take(5).collect();
    /// assert_eq!(first, vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn integers_from(start: i64) -> Self {
        LazySeq::unfold(Some(start), |&current| {
            let value = current?;
            Some((value, value.checked_add(1)))
        })
    }
}

impl LazySeq<u64> {
    /// Fibonacci numbers starting `1, 1, 2, 3, ...`, built by unfolding a
    /// `(current, next)` pair. Ends once the next term no longer fits in a
    /// `u64`.
    ///
    /// ```
    /// use lazy_stream::LazySeq;
    ///
    /// let first: Vec<u64> = LazySeq::fibs().iter().take(8).collect();
    /// assert_eq!(first, vec![1, 1, 2, 3, 5, 8, 13, 21]);
    /// ```
    #[must_use]
    pub fn fibs() -> Self {
        LazySeq::unfold((Some(1u64), Some(1u64)), |&(current, next)| {
            let value = current?;
            let after = next.and_then(|n| value.checked_add(n));
            Some((value, (next, after)))
        })
    }
}

impl<T: Clone + 'static> LazySeq<T> {
    /// The same value, forever.
    pub fn repeat(value: T) -> Self {
        LazySeq::repeat_with(move || value.clone())
    }

    /// Calls `supplier` for every element, forever.
    pub fn repeat_with<F>(supplier: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        repeat_from(Rc::new(supplier))
    }

    /// `seed, f(seed), f(f(seed)), ...`
    ///
    /// `f` runs only when a tail is forced.
    pub fn iterate<F>(seed: T, f: F) -> Self
    where
        F: Fn(&T) -> T + 'static,
    {
        iterate_from(seed, Rc::new(f))
    }

    /// Unfolds a sequence from a state. `f` returns the next element and the
    /// next state, or `None` to end the sequence.
    ///
    /// `f` is applied to the initial state when the sequence is built, and
    /// to each later state when the corresponding tail is forced.
    ///
    /// ```
    /// use lazy_stream::LazySeq;
    ///
    /// let countdown = LazySeq::unfold(3, |n| (*n > 0).then(|| (*n, n - 1)));
    /// assert_eq!(countdown.iter().collect::<Vec<_>>(), vec![3, 2, 1]);
    /// ```
    pub fn unfold<S, F>(state: S, f: F) -> Self
    where
        S: 'static,
        F: Fn(&S) -> Option<(T, S)> + 'static,
    {
        unfold_from(&state, Rc::new(f))
    }
}

fn repeat_from<T: Clone + 'static>(supplier: Thunk<T>) -> LazySeq<T> {
    let again = Rc::clone(&supplier);
    LazySeq::Cell {
        head: supplier,
        tail: Rc::new(move || repeat_from(Rc::clone(&again))),
    }
}

fn iterate_from<T: Clone + 'static>(seed: T, f: Rc<dyn Fn(&T) -> T>) -> LazySeq<T> {
    let current = seed.clone();
    LazySeq::Cell {
        head: Rc::new(move || current.clone()),
        tail: Rc::new(move || iterate_from(f(&seed), Rc::clone(&f))),
    }
}

fn unfold_from<T, S>(state: &S, f: Rc<dyn Fn(&S) -> Option<(T, S)>>) -> LazySeq<T>
where
    T: Clone + 'static,
    S: 'static,
{
    match f(state) {
        None => LazySeq::Empty,
        Some((value, next)) => LazySeq::with_tail(
            value,
            Rc::new(move || unfold_from(&next, Rc::clone(&f))),
        ),
    }
}
