//! Converts panics raised while forcing lazy values into [`StreamError`]s.
//!
//! User callbacks signal failure in two ways: by panicking, or by producing
//! a null-like element. The latter is raised inside the Lazy Core as an
//! [`InvalidElement`] panic payload, so it can travel through thunks that
//! only return `T`. [`guard`] is the single place where either kind is
//! caught.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use stream_common::error::{Outcome, StreamError};

/// Panic payload marking an element that a callback could not produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidElement {
    pub operation: &'static str,
}

impl InvalidElement {
    /// Aborts the current forcing with an invalid-element payload.
    pub fn raise(operation: &'static str) -> ! {
        panic::panic_any(InvalidElement { operation })
    }
}

/// Runs `f`, turning any panic into a failure attributed to `operation`.
///
/// An [`InvalidElement`] payload keeps the operation it was raised by.
pub fn guard<R>(operation: &'static str, f: impl FnOnce() -> R) -> Outcome<R> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| classify(operation, payload.as_ref()))
}

fn classify(operation: &'static str, payload: &(dyn Any + Send)) -> StreamError {
    match payload.downcast_ref::<InvalidElement>() {
        Some(invalid) => StreamError::InvalidResult {
            operation: invalid.operation,
        },
        None => StreamError::RuntimeException { operation },
    }
}
