//! Bundle lookup backends.
//!
//! A bundle is a named collection of string key/value entries. The resolver
//! only sees the [`BundleLookup`] trait; the concrete backing store is
//! swappable:
//!
//! - [`MemoryBundles`]: entries assembled in code
//! - [`DirectoryBundles`]: `.properties` and flat `.yaml` files on disk, with
//!   locale-specific variants
//! - [`EnvironmentBundles`]: process environment variables
//!
//! # Examples
//!
//! ```
//! use bundlecfg::bundle::{BundleLookup, MemoryBundles};
//!
//! let bundles = MemoryBundles::new().with_entry("config", "greeting", "hello");
//! assert_eq!(bundles.lookup("config", "greeting").unwrap(), Some("hello".to_string()));
//! assert_eq!(bundles.lookup("config", "missing").unwrap(), None);
//! ```

pub mod directory;
pub mod environment;
pub mod locale;
pub mod memory;
pub mod properties;
pub(crate) mod yaml;

use std::sync::Arc;

use crate::error::Result;

pub use directory::DirectoryBundles;
pub use environment::EnvironmentBundles;
pub use locale::Locale;
pub use memory::MemoryBundles;
pub use properties::Properties;

/// Read access to named bundles of string properties.
///
/// `Ok(Some(value))` means the key was found, `Ok(None)` means it was not.
/// An `Err` is a failure of the backing store itself (unreadable or
/// malformed bundle) and is propagated by the resolver untouched.
///
/// Implementations must be safe for concurrent reads.
#[cfg_attr(test, mockall::automock)]
pub trait BundleLookup: Send + Sync {
    /// Looks up `key` in the bundle named `bundle`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn lookup(&self, bundle: &str, key: &str) -> Result<Option<String>>;
}

impl<T: BundleLookup + ?Sized> BundleLookup for &T {
    fn lookup(&self, bundle: &str, key: &str) -> Result<Option<String>> {
        (**self).lookup(bundle, key)
    }
}

impl<T: BundleLookup + ?Sized> BundleLookup for Box<T> {
    fn lookup(&self, bundle: &str, key: &str) -> Result<Option<String>> {
        (**self).lookup(bundle, key)
    }
}

impl<T: BundleLookup + ?Sized> BundleLookup for Arc<T> {
    fn lookup(&self, bundle: &str, key: &str) -> Result<Option<String>> {
        (**self).lookup(bundle, key)
    }
}
