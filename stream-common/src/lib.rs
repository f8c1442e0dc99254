//! # Stream Common Utilities
//!
//! Shared collaborators for the lazy stream engine. Everything here is eager
//! and finite; the lazy machinery lives in `lazy-stream` and only talks to
//! the rest of the world through these types.
//!
//! ## Modules
//!
//! - [`list`]: Finite, eager, persistent lists built on `im::Vector`
//! - [`size`]: Validated positive sizes for windowing and bounded takes
//! - [`error`]: The outcome type and its error taxonomy
//! - [`config`]: Tunable validation and comparison bounds
//! - [`console`]: A tiny console effect used for debug printing
//!
//! ## Design Principles
//!
//! 1. **Pure Functional**: Operations return new values instead of mutating
//! 2. **Explicit Outcomes**: Fallible operations return [`Outcome`], never panic
//! 3. **Validated Inputs**: Sizes are checked once, at the boundary

pub mod config;
pub mod console;
pub mod error;
pub mod list;
pub mod size;

// Re-export main types for convenience
pub use config::StreamConfig;
pub use console::{BufferConsole, Console, StdoutConsole};
pub use error::{Outcome, StreamError};
pub use list::List;
pub use size::PositiveSize;
