//! Property descriptors.
//!
//! A [`PropertyDescriptor`] declares a single configuration need: which
//! bundle to search, which key to look up, whether the key is mandatory, and
//! what to fall back to when it is not.

use serde::{Deserialize, Serialize};

/// Bundle searched when a descriptor does not name one.
pub const DEFAULT_BUNDLE: &str = "config";

/// Immutable declaration of one configuration property.
///
/// Fields are private; once built a descriptor cannot be changed.
///
/// # Examples
///
/// ```
/// use bundlecfg::PropertyDescriptor;
///
/// let descriptor = PropertyDescriptor::builder("retries")
///     .default_value("3")
///     .build();
///
/// assert_eq!(descriptor.bundle(), "config");
/// assert_eq!(descriptor.key(), "retries");
/// assert!(!descriptor.is_mandatory());
/// assert_eq!(descriptor.default_value(), "3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyDescriptor {
    #[serde(default = "default_bundle")]
    bundle: String,
    #[serde(default)]
    key: String,
    #[serde(default)]
    mandatory: bool,
    #[serde(default, rename = "default")]
    default_value: String,
}

fn default_bundle() -> String {
    DEFAULT_BUNDLE.to_string()
}

impl PropertyDescriptor {
    /// Creates an optional descriptor for `key` in the default bundle with an
    /// empty default value.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self::builder(key).build()
    }

    /// Starts building a descriptor for `key`.
    #[must_use]
    pub fn builder(key: impl Into<String>) -> DescriptorBuilder {
        DescriptorBuilder::new(key)
    }

    /// Returns the bundle name.
    #[must_use]
    pub fn bundle(&self) -> &str {
        &self.bundle
    }

    /// Returns the lookup key. May be empty.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns whether the key must be present in the bundle.
    #[must_use]
    pub const fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    /// Returns the fallback value.
    #[must_use]
    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    /// Returns the default value, or `None` when it is empty.
    #[must_use]
    pub fn default_or_absent(&self) -> Option<String> {
        if self.default_value.is_empty() {
            None
        } else {
            Some(self.default_value.clone())
        }
    }
}

impl Default for PropertyDescriptor {
    fn default() -> Self {
        Self::new("")
    }
}

impl std::fmt::Display for PropertyDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.bundle, self.key)?;
        if self.mandatory {
            write!(f, " (mandatory)")?;
        }
        Ok(())
    }
}

/// Builder for [`PropertyDescriptor`].
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    bundle: String,
    key: String,
    mandatory: bool,
    default_value: String,
}

impl DescriptorBuilder {
    /// Creates a builder for `key` with the default bundle.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            bundle: default_bundle(),
            key: key.into(),
            mandatory: false,
            default_value: String::new(),
        }
    }

    /// Sets the bundle name.
    #[must_use]
    pub fn bundle(mut self, bundle: impl Into<String>) -> Self {
        self.bundle = bundle.into();
        self
    }

    /// Sets whether the key is mandatory.
    #[must_use]
    pub const fn mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Builds the descriptor.
    #[must_use]
    pub fn build(self) -> PropertyDescriptor {
        PropertyDescriptor {
            bundle: self.bundle,
            key: self.key,
            mandatory: self.mandatory,
            default_value: self.default_value,
        }
    }
}
