//! In-memory bundles.

use std::collections::HashMap;

use crate::bundle::{BundleLookup, Properties};
use crate::error::Result;

/// Bundles held entirely in memory.
///
/// Useful for configuration assembled in code and for tests. Once shared,
/// the value is read-only, so concurrent lookups need no locking.
///
/// # Examples
///
/// ```
/// use bundlecfg::bundle::{BundleLookup, MemoryBundles};
///
/// let bundles = MemoryBundles::new()
///     .with_entry("config", "greeting", "hello")
///     .with_entry("database", "url", "postgres://localhost/app");
///
/// assert_eq!(bundles.lookup("database", "url").unwrap().as_deref(), Some("postgres://localhost/app"));
/// assert_eq!(bundles.lookup("other", "url").unwrap(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryBundles {
    bundles: HashMap<String, HashMap<String, String>>,
}

impl MemoryBundles {
    /// Creates an empty set of bundles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry and returns `self` for chaining.
    #[must_use]
    pub fn with_entry(
        mut self,
        bundle: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.insert(bundle, key, value);
        self
    }

    /// Adds or replaces an entry.
    pub fn insert(
        &mut self,
        bundle: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.bundles
            .entry(bundle.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Creates a set holding a single bundle built from parsed properties.
    #[must_use]
    pub fn from_properties(bundle: impl Into<String>, properties: &Properties) -> Self {
        let entries = properties
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut bundles = HashMap::new();
        bundles.insert(bundle.into(), entries);
        Self { bundles }
    }

    /// Returns true if a bundle with this name has at least one entry.
    #[must_use]
    pub fn contains_bundle(&self, bundle: &str) -> bool {
        self.bundles.contains_key(bundle)
    }
}

impl BundleLookup for MemoryBundles {
    fn lookup(&self, bundle: &str, key: &str) -> Result<Option<String>> {
        Ok(self
            .bundles
            .get(bundle)
            .and_then(|entries| entries.get(key))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bundles_find_nothing() {
        let bundles = MemoryBundles::new();
        assert_eq!(bundles.lookup("config", "a").unwrap(), None);
        assert!(!bundles.contains_bundle("config"));
    }

    #[test]
    fn test_insert_replaces() {
        let mut bundles = MemoryBundles::new();
        bundles.insert("config", "a", "1");
        bundles.insert("config", "a", "2");
        assert_eq!(bundles.lookup("config", "a").unwrap(), Some("2".to_string()));
    }

    #[test]
    fn test_bundles_are_isolated() {
        let bundles = MemoryBundles::new()
            .with_entry("one", "key", "first")
            .with_entry("two", "key", "second");
        assert_eq!(bundles.lookup("one", "key").unwrap().as_deref(), Some("first"));
        assert_eq!(bundles.lookup("two", "key").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_empty_value_is_found() {
        let bundles = MemoryBundles::new().with_entry("config", "blank", "");
        assert_eq!(bundles.lookup("config", "blank").unwrap(), Some(String::new()));
    }

    #[test]
    fn test_from_properties() {
        let props = Properties::parse("a=1\nb = two\n").unwrap();
        let bundles = MemoryBundles::from_properties("config", &props);
        assert_eq!(bundles.lookup("config", "b").unwrap().as_deref(), Some("two"));
        assert!(bundles.contains_bundle("config"));
    }
}
