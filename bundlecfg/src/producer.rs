//! Typed producers.
//!
//! The resolver yields raw strings; producers coerce them into the type a
//! caller asked for. Absent stays absent for every type.
//!
//! The free functions here are factory-style entry points for code that
//! assembles its dependencies explicitly:
//!
//! ```
//! use bundlecfg::bundle::MemoryBundles;
//! use bundlecfg::{integer_property, PropertyDescriptor};
//!
//! let bundles = MemoryBundles::new();
//! let retries = PropertyDescriptor::builder("retries").default_value("3").build();
//! assert_eq!(integer_property(&retries, &bundles).unwrap(), Some(3));
//! ```

use crate::bundle::BundleLookup;
use crate::descriptor::PropertyDescriptor;
use crate::error::Result;
use crate::resolver::PropertyResolver;

/// A type a resolved property string can be converted into.
pub trait FromProperty: Sized {
    /// Type name used in coercion error messages.
    const TYPE_NAME: &'static str;

    /// Converts a raw property value, or returns `None` if it does not parse.
    fn from_property(raw: &str) -> Option<Self>;
}

impl FromProperty for String {
    const TYPE_NAME: &'static str = "string";

    fn from_property(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl FromProperty for i64 {
    const TYPE_NAME: &'static str = "integer";

    fn from_property(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl FromProperty for i32 {
    const TYPE_NAME: &'static str = "integer";

    fn from_property(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl FromProperty for bool {
    const TYPE_NAME: &'static str = "boolean";

    fn from_property(raw: &str) -> Option<Self> {
        Some(parse_boolean(raw))
    }
}

/// Interprets a string as a boolean.
///
/// Only `"true"`, in any letter case, is true. Every other string, including
/// `"yes"`, `"1"` and typos, is false; this conversion never fails.
///
/// # Examples
///
/// ```
/// use bundlecfg::parse_boolean;
///
/// assert!(parse_boolean("TRUE"));
/// assert!(!parse_boolean("yes"));
/// assert!(!parse_boolean(""));
/// ```
#[must_use]
pub fn parse_boolean(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true")
}

/// Resolves `descriptor` as a string.
///
/// # Errors
///
/// Returns `MissingMandatoryProperty` or a backing-store error.
pub fn string_property<L: BundleLookup>(
    descriptor: &PropertyDescriptor,
    lookup: L,
) -> Result<Option<String>> {
    PropertyResolver::new(lookup).resolve_string(descriptor)
}

/// Resolves `descriptor` as a base-10 signed integer.
///
/// # Errors
///
/// Returns `MissingMandatoryProperty`, `TypeCoercion` for a malformed
/// number, or a backing-store error.
pub fn integer_property<L: BundleLookup>(
    descriptor: &PropertyDescriptor,
    lookup: L,
) -> Result<Option<i64>> {
    PropertyResolver::new(lookup).resolve_integer(descriptor)
}

/// Resolves `descriptor` as a boolean.
///
/// # Errors
///
/// Returns `MissingMandatoryProperty` or a backing-store error; never a
/// coercion error.
pub fn boolean_property<L: BundleLookup>(
    descriptor: &PropertyDescriptor,
    lookup: L,
) -> Result<Option<bool>> {
    PropertyResolver::new(lookup).resolve_boolean(descriptor)
}
