//! # The Lazy Core
//!
//! A [`LazySeq`] is either empty or a cell holding two suspended
//! computations: one for the head value and one for the rest of the
//! sequence. Building a cell never runs either closure, so a `LazySeq` can
//! describe an infinite sequence that only ever exists as a chain of
//! closures.
//!
//! Scheme writes this as `(cons-stream a b)`, with `delay`/`force` around
//! `b`. Here both halves are [`Thunk`]s, and forcing is an ordinary call.
//! Nothing is memoized: forcing the same thunk twice runs it twice.
//!
//! ## The one primitive
//!
//! Every transformation is derived from a lazy right fold
//! ([`LazySeq::fold_right_lazy`]). The combining function receives the rest
//! of the fold as a thunk, so it may decide never to evaluate it. That is
//! what lets `map`, `take_while` and `append` work on infinite input.
//! Operations that must skip an unknown number of elements (`filter`,
//! `drop_while`, `drop_at_most`) use explicit loops instead, so skipping
//! never grows the stack.
//!
//! ## Hazards
//!
//! `filter` and `drop_while` spin forever on an infinite sequence whose
//! elements never satisfy (or never stop satisfying) the predicate. That
//! cannot be detected in general and is not guarded against.
//!
//! This layer never catches panics raised by closures. Catching belongs to
//! [`crate::validated::ValidatedStream`].
//!
//! ## Example
//!
//! ```
//! use lazy_stream::LazySeq;
//!
//! let evens_squared = LazySeq::integers_from(1)
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n * n);
//!
//! let first: Vec<i64> = evens_squared.iter().take(4).collect();
//! assert_eq!(first, vec![4, 16, 36, 64]);
//! ```

use std::fmt;
use std::rc::Rc;

use stream_common::config::MAX_COMPARISON_SIZE;
use stream_common::list::{self, List};
use stream_common::size::PositiveSize;

/// A deferred, zero-argument computation.
pub type Thunk<T> = Rc<dyn Fn() -> T>;

/// Number of elements rendered by `Debug`.
const DEBUG_PREFIX: usize = 8;

/// A possibly-infinite, lazily evaluated sequence.
pub enum LazySeq<T> {
    Empty,
    Cell {
        head: Thunk<T>,
        tail: Thunk<LazySeq<T>>,
    },
}

// Manual implementation: cloning shares the closures and needs no `T: Clone`.
impl<T> Clone for LazySeq<T> {
    fn clone(&self) -> Self {
        match self {
            LazySeq::Empty => LazySeq::Empty,
            LazySeq::Cell { head, tail } => LazySeq::Cell {
                head: Rc::clone(head),
                tail: Rc::clone(tail),
            },
        }
    }
}

impl<T> Default for LazySeq<T> {
    fn default() -> Self {
        LazySeq::Empty
    }
}

impl<T> LazySeq<T> {
    #[must_use]
    pub fn empty() -> Self {
        LazySeq::Empty
    }

    /// True for the empty sequence. Never forces a thunk.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, LazySeq::Empty)
    }
}

impl<T: Clone + 'static> LazySeq<T> {
    /// Builds a cell from two suspended computations without running either.
    pub fn cell<H, R>(head: H, tail: R) -> Self
    where
        H: Fn() -> T + 'static,
        R: Fn() -> LazySeq<T> + 'static,
    {
        LazySeq::Cell {
            head: Rc::new(head),
            tail: Rc::new(tail),
        }
    }

    /// Prepends an already computed value to a deferred tail.
    ///
    /// ```
    /// use lazy_stream::LazySeq;
    ///
    /// let seq = LazySeq::cons(1, || LazySeq::cons(2, LazySeq::empty));
    /// assert_eq!(seq.iter().collect::<Vec<_>>(), vec![1, 2]);
    /// ```
    pub fn cons<R>(value: T, tail: R) -> Self
    where
        R: Fn() -> LazySeq<T> + 'static,
    {
        Self::with_tail(value, Rc::new(tail))
    }

    pub(crate) fn with_tail(value: T, tail: Thunk<LazySeq<T>>) -> Self {
        LazySeq::Cell {
            head: Rc::new(move || value.clone()),
            tail,
        }
    }

    /// Builds a finite sequence over the elements of a list.
    pub fn from_list(items: &List<T>) -> Self {
        list::fold_right(items, LazySeq::Empty, |value, rest| {
            LazySeq::cons(value.clone(), move || rest.clone())
        })
    }

    /// Forces the head, if any.
    #[must_use]
    pub fn head(&self) -> Option<T> {
        match self {
            LazySeq::Empty => None,
            LazySeq::Cell { head, .. } => Some(head()),
        }
    }

    /// Forces the tail, if any.
    #[must_use]
    pub fn tail(&self) -> Option<LazySeq<T>> {
        match self {
            LazySeq::Empty => None,
            LazySeq::Cell { tail, .. } => Some(tail()),
        }
    }

    /// Forces both the head and the tail.
    #[must_use]
    pub fn uncons(&self) -> Option<(T, LazySeq<T>)> {
        match self {
            LazySeq::Empty => None,
            LazySeq::Cell { head, tail } => Some((head(), tail())),
        }
    }

    /// Iterates by forcing one cell per call to `next`.
    ///
    /// The tail of the last yielded element is only forced when the next
    /// element is requested, so `iter().take(n)` never looks past `n`.
    #[must_use]
    pub fn iter(&self) -> Iter<T> {
        Iter {
            current: self.clone(),
            pending: None,
        }
    }

    // =========================================================================
    // Right folds
    // =========================================================================

    /// Lazy right fold; the primitive every derived operation is built on.
    ///
    /// For an empty sequence returns `final_value()`. For a cell returns
    /// `combine(head, rest)`, where `rest` folds the tail when called. Neither
    /// the head nor the tail is forced unless `combine` forces it.
    ///
    /// ```
    /// use lazy_stream::LazySeq;
    ///
    /// // Only the first element is ever looked at.
    /// let first = LazySeq::integers_from(7).fold_right_lazy(|| None, |head, _rest| Some(head()));
    /// assert_eq!(first, Some(7));
    /// ```
    pub fn fold_right_lazy<B, Z, F>(&self, final_value: Z, combine: F) -> B
    where
        B: 'static,
        Z: Fn() -> B + 'static,
        F: Fn(Thunk<T>, Thunk<B>) -> B + 'static,
    {
        fold_lazy(self.clone(), Rc::new(final_value), Rc::new(combine))
    }

    /// Right fold that forces each head before handing it to `combine`.
    ///
    /// ```
    /// use lazy_stream::LazySeq;
    ///
    /// let seq: LazySeq<i32> = [1, 2, 3].into_iter().collect();
    /// let sum = seq.fold_right(|| 0, |head, rest| head + rest());
    /// assert_eq!(sum, 6);
    /// ```
    pub fn fold_right<B, Z, F>(&self, final_value: Z, combine: F) -> B
    where
        B: 'static,
        Z: Fn() -> B + 'static,
        F: Fn(T, Thunk<B>) -> B + 'static,
    {
        self.fold_right_lazy(final_value, move |head, rest| combine(head(), rest))
    }

    // =========================================================================
    // Derived operations
    // =========================================================================

    /// Applies `f` to every element. Nothing is evaluated until forced.
    pub fn map<U, F>(&self, f: F) -> LazySeq<U>
    where
        U: Clone + 'static,
        F: Fn(T) -> U + 'static,
    {
        let f = Rc::new(f);
        self.fold_right_lazy(LazySeq::empty, move |head, rest| {
            let f = Rc::clone(&f);
            LazySeq::Cell {
                head: Rc::new(move || f(head())),
                tail: rest,
            }
        })
    }

    /// Maps while `f` returns `Some`, ending at the first `None`.
    pub fn map_while<U, F>(&self, f: F) -> LazySeq<U>
    where
        U: Clone + 'static,
        F: Fn(T) -> Option<U> + 'static,
    {
        self.fold_right(LazySeq::empty, move |value, rest| match f(value) {
            Some(mapped) => LazySeq::with_tail(mapped, rest),
            None => LazySeq::Empty,
        })
    }

    /// Keeps elements while `predicate` holds.
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.fold_right(LazySeq::empty, move |value, rest| {
            if predicate(&value) {
                LazySeq::with_tail(value, rest)
            } else {
                LazySeq::Empty
            }
        })
    }

    /// Concatenates `self` with a sequence produced on demand.
    pub fn append_lazy<R>(&self, other: R) -> Self
    where
        R: Fn() -> LazySeq<T> + 'static,
    {
        self.fold_right_lazy(other, |head, rest| LazySeq::Cell { head, tail: rest })
    }

    pub fn append(&self, other: LazySeq<T>) -> Self {
        self.append_lazy(move || other.clone())
    }

    /// Maps every element to a sequence and concatenates the results.
    ///
    /// A run of elements mapping to empty sequences is skipped recursively.
    pub fn flat_map<U, F>(&self, f: F) -> LazySeq<U>
    where
        U: Clone + 'static,
        F: Fn(T) -> LazySeq<U> + 'static,
    {
        self.fold_right(LazySeq::empty, move |value, rest| {
            f(value).append_lazy(move || rest())
        })
    }

    /// Keeps the elements satisfying `predicate`.
    ///
    /// Leading rejected elements are skipped in a loop when the result is
    /// built; the rest is filtered as the tail is forced.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        filter_from(self.clone(), Rc::new(predicate))
    }

    /// Skips the leading elements satisfying `predicate`.
    pub fn drop_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool,
    {
        let mut current = self.clone();
        loop {
            let (value, tail) = match &current {
                LazySeq::Empty => return LazySeq::Empty,
                LazySeq::Cell { head, tail } => (head(), Rc::clone(tail)),
            };
            if !predicate(&value) {
                return LazySeq::with_tail(value, tail);
            }
            current = tail();
        }
    }

    /// The first `n` elements, or fewer if the sequence ends first.
    ///
    /// The tail behind the `n`th element is never forced.
    #[must_use]
    pub fn take_at_most(&self, n: usize) -> Self {
        match self {
            LazySeq::Cell { head, tail } if n > 0 => {
                let tail = Rc::clone(tail);
                LazySeq::Cell {
                    head: Rc::clone(head),
                    tail: Rc::new(move || {
                        if n == 1 {
                            LazySeq::Empty
                        } else {
                            tail().take_at_most(n - 1)
                        }
                    }),
                }
            }
            _ => LazySeq::Empty,
        }
    }

    /// Drops up to `n` elements. Forces tails, never heads.
    #[must_use]
    pub fn drop_at_most(&self, n: usize) -> Self {
        let mut current = self.clone();
        for _ in 0..n {
            current = match current {
                LazySeq::Empty => return LazySeq::Empty,
                LazySeq::Cell { tail, .. } => tail(),
            };
        }
        current
    }

    /// Replaces the head of a non-empty sequence. An empty sequence stays empty.
    pub fn set_first_element<F>(&self, first: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        match self {
            LazySeq::Empty => LazySeq::Empty,
            LazySeq::Cell { tail, .. } => LazySeq::Cell {
                head: Rc::new(first),
                tail: Rc::clone(tail),
            },
        }
    }

    // =========================================================================
    // Strict operations
    // =========================================================================

    /// Forces up to `n` elements into a finite list.
    #[must_use]
    pub fn to_list(&self, n: usize) -> List<T> {
        let mut out = List::new();
        let mut current = self.clone();
        while out.len() < n {
            let LazySeq::Cell { head, tail } = current else {
                break;
            };
            out.push_back(head());
            if out.len() == n {
                break;
            }
            current = tail();
        }
        out
    }

    /// Forces up to `size` elements into a finite list.
    #[must_use]
    pub fn take_at_most_before_trigger(&self, size: PositiveSize) -> List<T> {
        self.to_list(size.get())
    }

    /// Equality over the first `bound` elements only.
    ///
    /// Two sequences are equal when they agree element by element until both
    /// end together or `bound` elements have been compared.
    ///
    /// ```
    /// use lazy_stream::LazySeq;
    ///
    /// let ones = LazySeq::repeat(1);
    /// let mostly_ones = LazySeq::repeat(1).take_at_most(10).append(LazySeq::repeat(2));
    /// assert!(ones.eq_within(&mostly_ones, 10));
    /// assert!(!ones.eq_within(&mostly_ones, 11));
    /// ```
    pub fn eq_within(&self, other: &LazySeq<T>, bound: usize) -> bool
    where
        T: PartialEq,
    {
        let mut left = self.iter();
        let mut right = other.iter();
        for _ in 0..bound {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if a == b => {}
                _ => return false,
            }
        }
        true
    }
}

fn fold_lazy<T, B>(
    seq: LazySeq<T>,
    final_value: Rc<dyn Fn() -> B>,
    combine: Rc<dyn Fn(Thunk<T>, Thunk<B>) -> B>,
) -> B
where
    T: 'static,
    B: 'static,
{
    match seq {
        LazySeq::Empty => final_value(),
        LazySeq::Cell { head, tail } => {
            let next_final = Rc::clone(&final_value);
            let next_combine = Rc::clone(&combine);
            let rest: Thunk<B> = Rc::new(move || {
                fold_lazy(tail(), Rc::clone(&next_final), Rc::clone(&next_combine))
            });
            combine(head, rest)
        }
    }
}

fn filter_from<T: Clone + 'static>(
    seq: LazySeq<T>,
    predicate: Rc<dyn Fn(&T) -> bool>,
) -> LazySeq<T> {
    let mut current = seq;
    loop {
        let (value, tail) = match &current {
            LazySeq::Empty => return LazySeq::Empty,
            LazySeq::Cell { head, tail } => (head(), Rc::clone(tail)),
        };
        if predicate(&value) {
            let predicate = Rc::clone(&predicate);
            return LazySeq::with_tail(
                value,
                Rc::new(move || filter_from(tail(), Rc::clone(&predicate))),
            );
        }
        current = tail();
    }
}

/// Iterator over a [`LazySeq`].
pub struct Iter<T> {
    current: LazySeq<T>,
    pending: Option<Thunk<LazySeq<T>>>,
}

impl<T> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if let Some(tail) = self.pending.take() {
            self.current = tail();
        }
        match &self.current {
            LazySeq::Empty => None,
            LazySeq::Cell { head, tail } => {
                self.pending = Some(Rc::clone(tail));
                Some(head())
            }
        }
    }
}

impl<T: Clone + 'static> IntoIterator for LazySeq<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        Iter {
            current: self,
            pending: None,
        }
    }
}

impl<T: Clone + 'static> IntoIterator for &LazySeq<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.iter()
    }
}

impl<T: Clone + 'static> FromIterator<T> for LazySeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        LazySeq::from_list(&iter.into_iter().collect())
    }
}

/// Equal up to [`MAX_COMPARISON_SIZE`] elements; see [`LazySeq::eq_within`].
impl<T: Clone + PartialEq + 'static> PartialEq for LazySeq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.eq_within(other, MAX_COMPARISON_SIZE)
    }
}

impl<T: Clone + fmt::Debug + 'static> fmt::Debug for LazySeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.to_list(DEBUG_PREFIX + 1);
        write!(f, "LazySeq")?;
        let mut list = f.debug_list();
        list.entries(shown.iter().take(DEBUG_PREFIX));
        if shown.len() > DEBUG_PREFIX {
            list.entry(&format_args!(".."));
        }
        list.finish()
    }
}
