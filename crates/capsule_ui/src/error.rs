//! # UI Error Types
//!
//! All errors that can occur while loading control configuration.
//!
//! Runtime widget operations never fail: malformed label input degrades to
//! zero segments and out-of-range selection requests are ignored. Errors
//! exist only at the config-loading boundary.

use thiserror::Error;

/// Errors that can occur while loading or applying configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// A color literal could not be parsed.
    #[error("invalid color literal {0:?}: expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    /// A configuration file could not be read.
    #[error("cannot read config {path}: {reason}")]
    ConfigRead {
        /// Path that failed to load.
        path: String,
        /// Underlying I/O failure, stringified to keep errors comparable.
        reason: String,
    },

    /// A configuration file was not valid TOML for [`crate::SegmentedConfig`].
    #[error("invalid configuration: {0}")]
    ConfigParse(String),
}

/// Result type for configuration operations.
pub type UiResult<T> = Result<T, UiError>;
