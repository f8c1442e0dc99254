//! # Lazy Streams with Eager Error Detection
//!
//! Two layers, built bottom-up:
//!
//! - **Lazy Core** ([`LazySeq`]): an empty-or-cell sequence whose head and
//!   tail are suspended closures. Every transformation is derived from one
//!   lazy right fold, so infinite sequences cost only the closures that
//!   describe them.
//! - **Validating Façade** ([`ValidatedStream`]): wraps a `LazySeq` with a
//!   sticky outcome and forces a small prefix after every callback-driven
//!   operation, so a panicking or null-producing callback fails where it is
//!   introduced.
//!
//! Windowing ([`LazySeq::window_fixed`], [`LazySeq::window_sliding`],
//! [`LazySeq::window_fixed_at_most`]) and zipping ([`LazySeq::zip`],
//! [`LazySeq::zip_all`]) build on the core.
//!
//! Scheme's `delay`/`force` maps onto closures:
//! - `cons-stream` → [`LazySeq::cons`] / [`LazySeq::cell`]
//! - `stream-car` → [`LazySeq::head`]
//! - `stream-cdr` → [`LazySeq::tail`]
//! - `stream-map` → [`LazySeq::map`]
//! - `stream-filter` → [`LazySeq::filter`]
//!
//! ## Example
//!
//! ```
//! use lazy_stream::ValidatedStream;
//! use stream_common::PositiveSize;
//!
//! let pairs = ValidatedStream::fibs()
//!     .filter(|n| n % 2 == 0)
//!     .window_fixed(PositiveSize::new(2).unwrap());
//!
//! let first = pairs.to_bounded_list(PositiveSize::new(2).unwrap()).unwrap();
//! assert_eq!(first.len(), 2);
//! ```

pub mod generators;
pub mod guard;
pub mod seq;
pub mod validated;
pub mod window;
pub mod zip;

pub use guard::{InvalidElement, guard};
pub use seq::{Iter, LazySeq, Thunk};
pub use validated::ValidatedStream;
