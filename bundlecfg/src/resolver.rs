//! Property resolution.
//!
//! [`PropertyResolver`] turns a [`PropertyDescriptor`] into a raw string by
//! applying a fixed precedence:
//!
//! 1. An empty key resolves to the default value without touching the bundle.
//! 2. Otherwise the bundle is queried; a found value is returned verbatim.
//! 3. A missing key fails with `MissingMandatoryProperty` when the descriptor
//!    is mandatory, and resolves to the default value when it is not.
//!
//! A default value that is the empty string resolves as absent (`None`).
//! Values found in a bundle are always present, even when empty.

use crate::bundle::BundleLookup;
use crate::descriptor::PropertyDescriptor;
use crate::error::{Error, Result};
use crate::producer::FromProperty;

#[cfg(test)]
mod proptests;

/// Resolves descriptors against a bundle lookup.
///
/// The resolver holds no mutable state; one instance can serve any number of
/// threads when its lookup is shareable.
///
/// # Examples
///
/// ```
/// use bundlecfg::bundle::MemoryBundles;
/// use bundlecfg::{PropertyDescriptor, PropertyResolver};
///
/// let resolver = PropertyResolver::new(
///     MemoryBundles::new().with_entry("config", "greeting", "hello"),
/// );
///
/// let greeting = PropertyDescriptor::new("greeting");
/// assert_eq!(resolver.resolve_string(&greeting).unwrap().as_deref(), Some("hello"));
///
/// let db_url = PropertyDescriptor::builder("dbUrl").mandatory(true).build();
/// assert!(resolver.resolve_string(&db_url).unwrap_err().is_missing_mandatory());
/// ```
#[derive(Debug, Clone)]
pub struct PropertyResolver<L> {
    lookup: L,
}

impl<L: BundleLookup> PropertyResolver<L> {
    /// Creates a resolver over `lookup`.
    #[must_use]
    pub const fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Returns the underlying lookup.
    #[must_use]
    pub const fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Resolves the raw string for `descriptor`.
    ///
    /// # Errors
    ///
    /// Returns `MissingMandatoryProperty` when a mandatory key is absent
    /// from its bundle, and propagates any error raised by the lookup.
    pub fn resolve(&self, descriptor: &PropertyDescriptor) -> Result<Option<String>> {
        if descriptor.key().is_empty() {
            log::trace!(
                "Empty key in bundle '{}', using default value",
                descriptor.bundle()
            );
            return Ok(descriptor.default_or_absent());
        }

        if let Some(value) = self.lookup.lookup(descriptor.bundle(), descriptor.key())? {
            log::debug!("Resolved {descriptor} from bundle");
            return Ok(Some(value));
        }

        if descriptor.is_mandatory() {
            log::debug!("Mandatory property {descriptor} not found");
            return Err(Error::MissingMandatoryProperty {
                bundle: descriptor.bundle().to_string(),
                key: descriptor.key().to_string(),
            });
        }

        log::trace!("Property {descriptor} not found, using default value");
        Ok(descriptor.default_or_absent())
    }

    /// Resolves `descriptor` and converts the value to `T`.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`PropertyResolver::resolve`], plus
    /// `TypeCoercion` when a present value does not convert.
    pub fn resolve_as<T: FromProperty>(&self, descriptor: &PropertyDescriptor) -> Result<Option<T>> {
        let Some(raw) = self.resolve(descriptor)? else {
            return Ok(None);
        };

        T::from_property(&raw)
            .map(Some)
            .ok_or_else(|| Error::TypeCoercion {
                bundle: descriptor.bundle().to_string(),
                key: descriptor.key().to_string(),
                value: raw,
                target: T::TYPE_NAME,
            })
    }

    /// Resolves `descriptor` as a string.
    ///
    /// # Errors
    ///
    /// See [`PropertyResolver::resolve`].
    pub fn resolve_string(&self, descriptor: &PropertyDescriptor) -> Result<Option<String>> {
        self.resolve(descriptor)
    }

    /// Resolves `descriptor` as a base-10 signed integer.
    ///
    /// # Errors
    ///
    /// Returns `TypeCoercion` for a malformed number, in addition to the
    /// errors of [`PropertyResolver::resolve`].
    pub fn resolve_integer(&self, descriptor: &PropertyDescriptor) -> Result<Option<i64>> {
        self.resolve_as(descriptor)
    }

    /// Resolves `descriptor` as a boolean; see [`crate::parse_boolean`].
    ///
    /// # Errors
    ///
    /// See [`PropertyResolver::resolve`].
    pub fn resolve_boolean(&self, descriptor: &PropertyDescriptor) -> Result<Option<bool>> {
        self.resolve_as(descriptor)
    }
}
