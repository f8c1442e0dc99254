//! # The Validating Façade
//!
//! A [`ValidatedStream`] pairs a [`LazySeq`] with an outcome. Operations
//! that run user callbacks force a small prefix of their result (the
//! configured `validation_prefix`, 4 by default) so that a panicking or
//! null-producing callback fails at the call site instead of at some
//! distant point of consumption. The rest of the sequence stays lazy.
//!
//! ## States
//!
//! A stream is either valid or failed. Failure is sticky: every operation on
//! a failed stream returns a failed stream carrying the same error, without
//! touching the underlying lazy value. Nothing ever turns a failed stream
//! back into a valid one.
//!
//! ## Which operations force what
//!
//! | operations                                                   | on construction           |
//! |--------------------------------------------------------------|---------------------------|
//! | `integers_from`, `fibs`, `empty`, `from_list`                | nothing                   |
//! | `repeat_with`, `iterate`, `unfold`, `map`, `try_map`, `flat_map`, `filter`, `take_while`, `drop_while`, `set_first_element`, `from_lazy` | validation prefix |
//! | `take_at_most`, `drop_at_most`, windows, `append`, zips      | only what they need       |
//!
//! Every call into the Lazy Core runs under [`guard`], so no panic crosses
//! this boundary.
//!
//! ## Example
//!
//! ```
//! use lazy_stream::ValidatedStream;
//! use stream_common::{PositiveSize, StreamError};
//!
//! let reciprocals = ValidatedStream::integers_from(0).map(|n| 100 / n);
//! assert_eq!(
//!     reciprocals.error(),
//!     Some(&StreamError::RuntimeException { operation: "map" })
//! );
//!
//! let squares = ValidatedStream::integers_from(1).map(|n| n * n);
//! let first = squares.to_bounded_list(PositiveSize::new(4)?)?;
//! assert_eq!(first.into_iter().collect::<Vec<_>>(), vec![1, 4, 9, 16]);
//! # Ok::<(), StreamError>(())
//! ```

use std::fmt;

use tracing::{debug, trace};

use stream_common::config::StreamConfig;
use stream_common::console::Console;
use stream_common::error::{Outcome, StreamError};
use stream_common::list::List;
use stream_common::size::PositiveSize;

use crate::guard::{InvalidElement, guard};
use crate::seq::LazySeq;

/// How much of a freshly built sequence is forced before it is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Validation {
    /// Force the configured validation prefix.
    Prefix,
    /// Accept whatever construction itself forced.
    Guarded,
}

/// A lazy sequence together with a sticky success/failure outcome.
pub struct ValidatedStream<T> {
    outcome: Outcome<LazySeq<T>>,
    config: StreamConfig,
}

impl<T> Clone for ValidatedStream<T> {
    fn clone(&self) -> Self {
        Self {
            outcome: self.outcome.clone(),
            config: self.config,
        }
    }
}

impl ValidatedStream<i64> {
    /// Integers counting up from `start`, ending at `i64::MAX`. Always valid.
    #[must_use]
    pub fn integers_from(start: i64) -> Self {
        Self::valid(LazySeq::integers_from(start), StreamConfig::default())
    }
}

impl ValidatedStream<u64> {
    /// Fibonacci numbers `1, 1, 2, 3, ...`. Always valid.
    #[must_use]
    pub fn fibs() -> Self {
        Self::valid(LazySeq::fibs(), StreamConfig::default())
    }
}

impl<T: Clone + 'static> ValidatedStream<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    #[must_use]
    pub fn empty() -> Self {
        Self::valid(LazySeq::empty(), StreamConfig::default())
    }

    /// A finite stream over the elements of a list. Always valid.
    pub fn from_list(items: &List<T>) -> Self {
        Self::valid(LazySeq::from_list(items), StreamConfig::default())
    }

    /// Wraps an existing lazy sequence, validating its prefix.
    pub fn from_lazy(seq: LazySeq<T>) -> Self {
        Self::checked("from_lazy", seq, StreamConfig::default())
    }

    /// Calls `supplier` for every element, forever.
    pub fn repeat_with<F>(supplier: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        Self::generate("repeat", StreamConfig::default(), move || {
            LazySeq::repeat_with(supplier)
        })
    }

    /// `seed, f(seed), f(f(seed)), ...`
    pub fn iterate<F>(seed: T, f: F) -> Self
    where
        F: Fn(&T) -> T + 'static,
    {
        Self::generate("iterate", StreamConfig::default(), move || {
            LazySeq::iterate(seed, f)
        })
    }

    /// Unfolds a stream from a state; see [`LazySeq::unfold`].
    pub fn unfold<S, F>(state: S, f: F) -> Self
    where
        S: 'static,
        F: Fn(&S) -> Option<(T, S)> + 'static,
    {
        Self::generate("unfold", StreamConfig::default(), move || {
            LazySeq::unfold(state, f)
        })
    }

    /// Re-derives the outcome under a different configuration.
    ///
    /// A valid stream is validated again with the new prefix; a failed one
    /// stays failed.
    #[must_use]
    pub fn with_config(self, config: StreamConfig) -> Self {
        match self.outcome {
            Ok(seq) => Self::checked("with_config", seq, config),
            Err(error) => Self {
                outcome: Err(error),
                config,
            },
        }
    }

    fn valid(seq: LazySeq<T>, config: StreamConfig) -> Self {
        Self {
            outcome: Ok(seq),
            config,
        }
    }

    fn failed(error: StreamError, config: StreamConfig) -> Self {
        debug!(error = %error, "stream failed");
        Self {
            outcome: Err(error),
            config,
        }
    }

    fn checked(operation: &'static str, seq: LazySeq<T>, config: StreamConfig) -> Self {
        match guard(operation, || seq.to_list(config.validation_prefix)) {
            Ok(prefix) => {
                trace!(operation, forced = prefix.len(), "prefix validated");
                Self::valid(seq, config)
            }
            Err(error) => Self::failed(error, config),
        }
    }

    fn generate<B>(operation: &'static str, config: StreamConfig, build: B) -> Self
    where
        B: FnOnce() -> LazySeq<T>,
    {
        match guard(operation, build) {
            Ok(seq) => Self::checked(operation, seq, config),
            Err(error) => Self::failed(error, config),
        }
    }

    fn propagate<U>(&self, operation: &'static str, error: &StreamError) -> ValidatedStream<U> {
        trace!(operation, "skipped on failed stream");
        ValidatedStream {
            outcome: Err(error.clone()),
            config: self.config,
        }
    }

    fn derive<U, B>(
        &self,
        operation: &'static str,
        validation: Validation,
        build: B,
    ) -> ValidatedStream<U>
    where
        U: Clone + 'static,
        B: FnOnce(&LazySeq<T>) -> LazySeq<U>,
    {
        let seq = match &self.outcome {
            Ok(seq) => seq,
            Err(error) => return self.propagate(operation, error),
        };
        match guard(operation, || build(seq)) {
            Ok(next) if validation == Validation::Prefix => {
                ValidatedStream::checked(operation, next, self.config)
            }
            Ok(next) => ValidatedStream::valid(next, self.config),
            Err(error) => ValidatedStream::failed(error, self.config),
        }
    }

    fn combine<U, V, B>(
        &self,
        operation: &'static str,
        other: &ValidatedStream<U>,
        build: B,
    ) -> ValidatedStream<V>
    where
        V: Clone + 'static,
        B: FnOnce(&LazySeq<T>, &LazySeq<U>) -> LazySeq<V>,
    {
        if let Err(error) = &self.outcome {
            return self.propagate(operation, error);
        }
        let Ok(other_seq) = &other.outcome else {
            return ValidatedStream::failed(
                StreamError::UnprocessableArgument {
                    operation,
                    argument: "other",
                },
                self.config,
            );
        };
        self.derive(operation, Validation::Guarded, |seq| build(seq, other_seq))
    }

    // =========================================================================
    // Callback-driven transformations (prefix validated)
    // =========================================================================

    pub fn map<U, F>(&self, f: F) -> ValidatedStream<U>
    where
        U: Clone + 'static,
        F: Fn(T) -> U + 'static,
    {
        self.derive("map", Validation::Prefix, move |seq| seq.map(f))
    }

    /// Like [`map`](Self::map), but `None` marks an invalid element and
    /// fails the stream with [`StreamError::InvalidResult`].
    ///
    /// ```
    /// use lazy_stream::ValidatedStream;
    /// use stream_common::StreamError;
    ///
    /// let halves = ValidatedStream::integers_from(1)
    ///     .try_map(|n| (n % 2 == 0).then_some(n / 2));
    /// assert_eq!(halves.error(), Some(&StreamError::InvalidResult { operation: "try_map" }));
    /// ```
    pub fn try_map<U, F>(&self, f: F) -> ValidatedStream<U>
    where
        U: Clone + 'static,
        F: Fn(T) -> Option<U> + 'static,
    {
        self.derive("try_map", Validation::Prefix, move |seq| {
            seq.map(move |value| f(value).unwrap_or_else(|| InvalidElement::raise("try_map")))
        })
    }

    /// Maps every element to a stream and concatenates the results. An inner
    /// stream that is already failed counts as an invalid element.
    pub fn flat_map<U, F>(&self, f: F) -> ValidatedStream<U>
    where
        U: Clone + 'static,
        F: Fn(T) -> ValidatedStream<U> + 'static,
    {
        self.derive("flat_map", Validation::Prefix, move |seq| {
            seq.flat_map(move |value| match f(value).outcome {
                Ok(inner) => inner,
                Err(_) => InvalidElement::raise("flat_map"),
            })
        })
    }

    /// Keeps the elements satisfying `predicate`.
    ///
    /// Spins forever on an infinite stream with no further match.
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.derive("filter", Validation::Prefix, move |seq| seq.filter(predicate))
    }

    #[must_use]
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.derive("take_while", Validation::Prefix, move |seq| {
            seq.take_while(predicate)
        })
    }

    /// Skips leading elements satisfying `predicate`.
    ///
    /// Spins forever on an infinite stream where the predicate always holds.
    #[must_use]
    pub fn drop_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.derive("drop_while", Validation::Prefix, move |seq| {
            seq.drop_while(predicate)
        })
    }

    #[must_use]
    pub fn set_first_element<F>(&self, first: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        self.derive("set_first_element", Validation::Prefix, move |seq| {
            seq.set_first_element(first)
        })
    }

    // =========================================================================
    // Structural operations (guarded only)
    // =========================================================================

    #[must_use]
    pub fn take_at_most(&self, size: PositiveSize) -> Self {
        self.derive("take_at_most", Validation::Guarded, |seq| {
            seq.take_at_most(size.get())
        })
    }

    #[must_use]
    pub fn drop_at_most(&self, size: PositiveSize) -> Self {
        self.derive("drop_at_most", Validation::Guarded, |seq| {
            seq.drop_at_most(size.get())
        })
    }

    pub fn window_sliding(&self, size: PositiveSize) -> ValidatedStream<List<T>> {
        self.derive("window_sliding", Validation::Guarded, |seq| {
            seq.window_sliding(size)
        })
    }

    pub fn window_fixed(&self, size: PositiveSize) -> ValidatedStream<List<T>> {
        self.derive("window_fixed", Validation::Guarded, |seq| seq.window_fixed(size))
    }

    pub fn window_fixed_at_most(&self, size: PositiveSize) -> ValidatedStream<List<T>> {
        self.derive("window_fixed_at_most", Validation::Guarded, |seq| {
            seq.window_fixed_at_most(size)
        })
    }

    /// Concatenates two streams. Fails if `other` is already failed.
    #[must_use]
    pub fn append(&self, other: &ValidatedStream<T>) -> Self {
        self.combine("append", other, |seq, other| seq.append(other.clone()))
    }

    /// Pairs elements up to the end of the shorter stream. Fails if `other`
    /// is already failed.
    pub fn zip_as_possible<U: Clone + 'static>(
        &self,
        other: &ValidatedStream<U>,
    ) -> ValidatedStream<(T, U)> {
        self.combine("zip_as_possible", other, |seq, other| seq.zip(other))
    }

    /// Pairs elements until both streams end; see [`LazySeq::zip_all`].
    pub fn zip_all<U: Clone + 'static>(
        &self,
        other: &ValidatedStream<U>,
    ) -> ValidatedStream<(Option<T>, Option<U>)> {
        self.combine("zip_all", other, |seq, other| seq.zip_all(other))
    }

    // =========================================================================
    // Terminal operations
    // =========================================================================

    /// Forces up to `size` elements into a finite list.
    ///
    /// This is the way elements leave the lazy world. Errors that lie beyond
    /// the validated prefix surface here.
    pub fn to_bounded_list(&self, size: PositiveSize) -> Outcome<List<T>> {
        let seq = self.outcome.as_ref().map_err(Clone::clone)?;
        guard("to_bounded_list", || seq.take_at_most_before_trigger(size))
    }

    /// Forces the first element, if any.
    pub fn head_option(&self) -> Outcome<Option<T>> {
        let seq = self.outcome.as_ref().map_err(Clone::clone)?;
        guard("head_option", || seq.head())
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    #[must_use]
    pub fn error(&self) -> Option<&StreamError> {
        self.outcome.as_ref().err()
    }

    #[must_use]
    pub fn outcome(&self) -> &Outcome<LazySeq<T>> {
        &self.outcome
    }

    /// Unwraps the lazy value. Past this point nothing catches panics.
    pub fn into_lazy(self) -> Outcome<LazySeq<T>> {
        self.outcome
    }

    #[must_use]
    pub fn config(&self) -> StreamConfig {
        self.config
    }
}

impl<T: Clone + fmt::Debug + 'static> ValidatedStream<T> {
    /// Renders up to `size` elements, or the failure.
    #[must_use]
    pub fn describe(&self, size: PositiveSize) -> String {
        match self.to_bounded_list(size) {
            Ok(items) => {
                let shown: Vec<String> = items.iter().map(|item| format!("{item:?}")).collect();
                format!("[{}]", shown.join(", "))
            }
            Err(error) => format!("Failed({error})"),
        }
    }

    /// Prints [`describe`](Self::describe) to a console.
    pub fn print_prefix<C: Console>(&self, console: &mut C, size: PositiveSize) -> Outcome<()> {
        console.print_line(&self.describe(size))
    }
}

impl<T> fmt::Debug for ValidatedStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("ValidatedStream");
        match &self.outcome {
            Ok(_) => out.field("state", &"valid"),
            Err(error) => out.field("failed", error),
        };
        out.field("config", &self.config).finish()
    }
}

/// Failed streams are equal when their errors are. Valid streams are equal
/// over the first `comparison_bound` elements, taking the smaller bound of
/// the two; a panic while comparing makes them unequal.
impl<T: Clone + PartialEq + 'static> PartialEq for ValidatedStream<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.outcome, &other.outcome) {
            (Err(a), Err(b)) => a == b,
            (Ok(a), Ok(b)) => {
                let bound = self
                    .config
                    .comparison_bound
                    .min(other.config.comparison_bound);
                guard("eq", || a.eq_within(b, bound)).unwrap_or(false)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use stream_common::console::BufferConsole;
    use stream_common::list::list_of;

    fn size(n: i64) -> PositiveSize {
        PositiveSize::new(n).unwrap()
    }

    fn finite(items: &[i64]) -> ValidatedStream<i64> {
        ValidatedStream::from_list(&list_of(items.iter().copied()))
    }

    fn runtime(operation: &'static str) -> StreamError {
        StreamError::RuntimeException { operation }
    }

    #[test]
    fn test_generators_without_callbacks_are_valid() {
        assert!(ValidatedStream::integers_from(0).is_valid());
        assert!(ValidatedStream::fibs().is_valid());
        assert!(ValidatedStream::<i64>::empty().is_valid());
    }

    #[test]
    fn test_integers_from_max_stays_valid() {
        let last = ValidatedStream::integers_from(i64::MAX);
        assert!(last.is_valid());
        assert_eq!(
            last.to_bounded_list(size(3)).unwrap(),
            list_of([i64::MAX])
        );
    }

    #[test]
    fn test_fibs_bounded() {
        let fibs = ValidatedStream::fibs().to_bounded_list(size(8)).unwrap();
        assert_eq!(fibs, list_of([1, 1, 2, 3, 5, 8, 13, 21]));
    }

    #[test]
    fn test_map_fails_at_call_site() {
        let stream = ValidatedStream::integers_from(0).map(|n| {
            if n == 0 {
                panic!("division by zero");
            }
            100 / n
        });
        assert!(!stream.is_valid());
        assert_eq!(stream.error(), Some(&runtime("map")));
    }

    #[test]
    fn test_error_past_prefix_surfaces_at_terminal() {
        let stream = ValidatedStream::integers_from(0).map(|n| {
            assert!(n != 10, "late failure");
            n
        });
        assert!(stream.is_valid());
        assert_eq!(
            stream.to_bounded_list(size(5)).unwrap(),
            list_of([0, 1, 2, 3, 4])
        );
        assert_eq!(stream.to_bounded_list(size(20)), Err(runtime("to_bounded_list")));
    }

    #[test]
    fn test_map_forces_only_the_validation_prefix() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let stream = ValidatedStream::integers_from(0).map(move |n| {
            counter.set(counter.get() + 1);
            n * 2
        });
        assert_eq!(calls.get(), stream.config().validation_prefix);

        let taken = stream.to_bounded_list(size(10)).unwrap();
        assert_eq!(taken.len(), 10);
        assert_eq!(calls.get(), stream.config().validation_prefix + 10);
    }

    #[test]
    fn test_try_map_invalid_result() {
        let stream = finite(&[1, 2, 3]).try_map(|n| (n != 2).then_some(n));
        assert_eq!(
            stream.error(),
            Some(&StreamError::InvalidResult { operation: "try_map" })
        );

        let late = ValidatedStream::integers_from(0).try_map(|n| (n < 6).then_some(n));
        assert!(late.is_valid());
        assert_eq!(
            late.to_bounded_list(size(10)),
            Err(StreamError::InvalidResult { operation: "try_map" })
        );
    }

    #[test]
    fn test_generators_with_callbacks_are_validated() {
        let repeat = ValidatedStream::<i64>::repeat_with(|| panic!("no supply"));
        assert_eq!(repeat.error(), Some(&runtime("repeat")));

        let iterate = ValidatedStream::iterate(1i64, |n| {
            assert!(*n < 3, "too big");
            n + 1
        });
        assert_eq!(iterate.error(), Some(&runtime("iterate")));

        let unfold = ValidatedStream::unfold(0i64, |n| {
            assert!(*n < 2, "stop");
            Some((*n, n + 1))
        });
        assert_eq!(unfold.error(), Some(&runtime("unfold")));

        let ok = ValidatedStream::iterate(1i64, |n| n * 3);
        assert_eq!(ok.to_bounded_list(size(4)).unwrap(), list_of([1, 3, 9, 27]));
    }

    #[test]
    fn test_failure_is_sticky_and_untouched() {
        let calls = Rc::new(Cell::new(0));
        let failed = finite(&[1, 2]).map(|_| -> i64 { panic!("always") });
        let original = failed.error().cloned();

        let counter = Rc::clone(&calls);
        let derived = failed
            .map(move |n| {
                counter.set(counter.get() + 1);
                n
            })
            .filter(|_| true)
            .append(&finite(&[3]))
            .window_fixed(size(1));

        assert!(!derived.is_valid());
        assert_eq!(derived.error().cloned(), original);
        assert_eq!(calls.get(), 0);
        assert!(failed.with_config(StreamConfig::default()).error().is_some());
    }

    #[test]
    fn test_append_rejects_failed_argument() {
        let broken = finite(&[1]).map(|_| -> i64 { panic!("broken") });
        let appended = finite(&[1, 2]).append(&broken);
        assert_eq!(
            appended.error(),
            Some(&StreamError::UnprocessableArgument {
                operation: "append",
                argument: "other",
            })
        );

        let ok = finite(&[1, 2]).append(&finite(&[3]));
        assert_eq!(ok.to_bounded_list(size(10)).unwrap(), list_of([1, 2, 3]));
    }

    #[test]
    fn test_failed_receiver_reports_its_own_error() {
        let broken = finite(&[1]).map(|_| -> i64 { panic!("broken") });
        let appended = broken.append(&broken);
        assert_eq!(appended.error(), Some(&runtime("map")));
    }

    #[test]
    fn test_zip_as_possible() {
        let zipped = finite(&[1, 2, 3]).zip_as_possible(&ValidatedStream::repeat_with(|| "x"));
        assert_eq!(
            zipped.to_bounded_list(size(10)).unwrap(),
            list_of([(1, "x"), (2, "x"), (3, "x")])
        );

        let broken = ValidatedStream::<&str>::repeat_with(|| panic!("nope"));
        assert_eq!(
            finite(&[1]).zip_as_possible(&broken).error(),
            Some(&StreamError::UnprocessableArgument {
                operation: "zip_as_possible",
                argument: "other",
            })
        );

        assert!(finite(&[1, 2])
            .zip_as_possible(&ValidatedStream::<i64>::empty())
            .to_bounded_list(size(1))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_zip_all_through_facade() {
        let padded = finite(&[1, 2]).zip_all(&finite(&[9]));
        assert_eq!(
            padded.to_bounded_list(size(5)).unwrap(),
            list_of([(Some(1), Some(9)), (Some(2), None)])
        );
    }

    #[test]
    fn test_windows_through_facade() {
        let input = finite(&[1, 2, 3, 4, 5]);
        let fixed = input.window_fixed(size(2)).to_bounded_list(size(10)).unwrap();
        assert_eq!(fixed, list_of([list_of([1, 2]), list_of([3, 4])]));

        let at_most = input
            .window_fixed_at_most(size(2))
            .to_bounded_list(size(10))
            .unwrap();
        assert_eq!(
            at_most,
            list_of([list_of([1, 2]), list_of([3, 4]), list_of([5])])
        );

        let sliding = input.window_sliding(size(2)).to_bounded_list(size(10)).unwrap();
        assert_eq!(sliding.len(), 4);
        assert_eq!(sliding.back(), Some(&list_of([4, 5])));
    }

    #[test]
    fn test_filter_take_while_drop_while() {
        let nat = ValidatedStream::integers_from(1);
        assert_eq!(
            nat.filter(|n| n % 5 == 0).to_bounded_list(size(3)).unwrap(),
            list_of([5, 10, 15])
        );
        assert_eq!(
            nat.take_while(|n| *n <= 3).to_bounded_list(size(10)).unwrap(),
            list_of([1, 2, 3])
        );
        assert_eq!(
            nat.drop_while(|n| *n < 100).head_option().unwrap(),
            Some(100)
        );

        let panicking = nat.filter(|n| {
            assert!(*n != 2, "bad predicate");
            true
        });
        assert_eq!(panicking.error(), Some(&runtime("filter")));
    }

    #[test]
    fn test_empty_result_is_valid() {
        let none = finite(&[1, 3, 5]).filter(|n| n % 2 == 0);
        assert!(none.is_valid());
        assert_eq!(none.head_option(), Ok(None));
    }

    #[test]
    fn test_flat_map() {
        let doubled = finite(&[1, 2]).flat_map(|n| finite(&[n, n]));
        assert_eq!(
            doubled.to_bounded_list(size(10)).unwrap(),
            list_of([1, 1, 2, 2])
        );

        let broken = finite(&[1, 2]).flat_map(|n| {
            if n == 2 {
                finite(&[n]).map(|_| -> i64 { panic!("inner") })
            } else {
                finite(&[n])
            }
        });
        assert_eq!(
            broken.error(),
            Some(&StreamError::InvalidResult { operation: "flat_map" })
        );
    }

    #[test]
    fn test_set_first_element() {
        let replaced = finite(&[1, 2, 3]).set_first_element(|| 0);
        assert_eq!(
            replaced.to_bounded_list(size(3)).unwrap(),
            list_of([0, 2, 3])
        );
        let broken = finite(&[1]).set_first_element(|| panic!("no first"));
        assert_eq!(broken.error(), Some(&runtime("set_first_element")));
    }

    #[test]
    fn test_take_and_drop_at_most() {
        let nat = ValidatedStream::integers_from(0);
        let middle = nat.drop_at_most(size(5)).take_at_most(size(3));
        assert_eq!(middle.to_bounded_list(size(10)).unwrap(), list_of([5, 6, 7]));
    }

    #[test]
    fn test_with_config_changes_prefix() {
        let late = |n: i64| {
            assert!(n != 6, "late");
            n
        };

        let default = ValidatedStream::integers_from(0).map(late);
        assert!(default.is_valid());

        let deeper = ValidatedStream::integers_from(0)
            .with_config(StreamConfig::default().with_validation_prefix(10))
            .map(late);
        assert_eq!(deeper.error(), Some(&runtime("map")));

        let unchecked = ValidatedStream::integers_from(0)
            .with_config(StreamConfig::default().with_validation_prefix(0))
            .map(|_| -> i64 { panic!("immediately") });
        assert!(unchecked.is_valid());
        assert!(unchecked.head_option().is_err());
    }

    #[test]
    fn test_equality() {
        assert_eq!(finite(&[1, 2, 3]), finite(&[1, 2, 3]));
        assert_ne!(finite(&[1, 2, 3]), finite(&[1, 2]));

        let a = finite(&[1]).map(|_| -> i64 { panic!("a") });
        let b = finite(&[2]).map(|_| -> i64 { panic!("b") });
        assert_eq!(a, b);
        assert_ne!(a, finite(&[1]));

        let bounded = ValidatedStream::integers_from(0)
            .with_config(StreamConfig::default().with_comparison_bound(5).unwrap());
        let diverging = ValidatedStream::integers_from(0)
            .take_at_most(size(5))
            .append(&finite(&[-1]));
        assert_eq!(bounded, diverging);
        assert_eq!(diverging, bounded);
        assert_ne!(diverging, ValidatedStream::integers_from(0));
    }

    #[test]
    fn test_print_prefix() {
        let mut console = BufferConsole::new();
        ValidatedStream::fibs()
            .print_prefix(&mut console, size(5))
            .unwrap();
        finite(&[1])
            .map(|_| -> i64 { panic!("x") })
            .print_prefix(&mut console, size(5))
            .unwrap();
        assert_eq!(
            console.lines(),
            &[
                "[1, 1, 2, 3, 5]".to_string(),
                "Failed(runtime exception during operation `map`)".to_string(),
            ]
        );
    }
}
