//! Error types for the bundlecfg library.
//!
//! This module provides the error hierarchy for property resolution, bundle
//! loading and tool configuration, using `thiserror` for ergonomic error
//! handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a bundlecfg error.
///
/// # Examples
///
/// ```
/// use bundlecfg::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the bundlecfg library.
///
/// Ordinary absence of a property is never an error; it resolves to the
/// descriptor's default value or to an absent value.
#[derive(Debug, Error)]
pub enum Error {
    /// A mandatory property was not found in its bundle.
    #[error("missing mandatory property '{key}' in bundle '{bundle}'")]
    MissingMandatoryProperty {
        /// The bundle that was searched.
        bundle: String,
        /// The key that was not found.
        key: String,
    },

    /// A resolved value could not be converted to the requested type.
    #[error("cannot convert property '{key}' in bundle '{bundle}' to {target}: '{value}'")]
    TypeCoercion {
        /// The bundle the value was resolved from.
        bundle: String,
        /// The property key.
        key: String,
        /// The raw value that failed to convert.
        value: String,
        /// Name of the requested type.
        target: &'static str,
    },

    /// A bundle backend failed to load or read a bundle.
    #[error("bundle '{bundle}' could not be read: {reason}")]
    BackingStore {
        /// The bundle being read.
        bundle: String,
        /// Description of the failure.
        reason: String,
    },

    /// A property name was not registered.
    #[error("unknown property: {name}")]
    UnknownProperty {
        /// The requested property name.
        name: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error is a missing mandatory property.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundlecfg::Error;
    ///
    /// let err = Error::MissingMandatoryProperty {
    ///     bundle: "config".to_string(),
    ///     key: "dbUrl".to_string(),
    /// };
    /// assert!(err.is_missing_mandatory());
    /// ```
    #[must_use]
    pub fn is_missing_mandatory(&self) -> bool {
        matches!(self, Self::MissingMandatoryProperty { .. })
    }

    /// Check if error is a type coercion failure.
    #[must_use]
    pub fn is_type_coercion(&self) -> bool {
        matches!(self, Self::TypeCoercion { .. })
    }

    /// Check if error was raised by a bundle backend.
    #[must_use]
    pub fn is_backing_store(&self) -> bool {
        matches!(self, Self::BackingStore { .. })
    }
}
