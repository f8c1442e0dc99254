//! # Stream Configuration
//!
//! Two bounds govern how much of a lazy stream is ever forced outside a
//! terminal operation:
//!
//! - `validation_prefix`: how many elements each callback-driven operation
//!   forces up front to surface errors at the call site.
//! - `comparison_bound`: how many elements equality looks at. Equality on
//!   infinite streams is undecidable, so two streams are "equal" when their
//!   first `comparison_bound` elements agree.
//!
//! ## Example
//!
//! ```
//! use stream_common::config::StreamConfig;
//!
//! let config = StreamConfig::from_toml("validation_prefix = 8").unwrap();
//! assert_eq!(config.validation_prefix, 8);
//! assert_eq!(config.comparison_bound, 1000);
//! ```

use serde::Deserialize;

use crate::error::{Outcome, StreamError};

/// Default number of elements forced by bounded-prefix validation.
pub const VALIDATION_PREFIX: usize = 4;

/// Default number of elements compared by bounded equality.
pub const MAX_COMPARISON_SIZE: usize = 1000;

/// Embedded default configuration.
pub static DEFAULT_CONFIG: &str = include_str!("defaults.toml");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    pub validation_prefix: usize,
    pub comparison_bound: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            validation_prefix: VALIDATION_PREFIX,
            comparison_bound: MAX_COMPARISON_SIZE,
        }
    }
}

impl StreamConfig {
    /// Parse a configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml(toml_str: &str) -> Outcome<Self> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| StreamError::Config(format!("failed to parse stream config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the embedded default configuration.
    pub fn default_config() -> Outcome<Self> {
        Self::from_toml(DEFAULT_CONFIG)
    }

    #[must_use]
    pub fn with_validation_prefix(self, validation_prefix: usize) -> Self {
        Self {
            validation_prefix,
            ..self
        }
    }

    /// Returns a copy with a different comparison bound. Zero is rejected.
    pub fn with_comparison_bound(self, comparison_bound: usize) -> Outcome<Self> {
        let config = Self {
            comparison_bound,
            ..self
        };
        config.validate()?;
        Ok(config)
    }

    // A zero validation prefix is allowed: it turns eager checking off.
    fn validate(&self) -> Outcome<()> {
        if self.comparison_bound == 0 {
            return Err(StreamError::Config(
                "comparison_bound must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
