//! Bundles backed by process environment variables.

use std::env;

use crate::bundle::BundleLookup;
use crate::error::{Error, Result};

/// Bundles read from environment variables.
///
/// The entry `key` of bundle `bundle` is read from the variable
/// `{PREFIX}_{BUNDLE}_{KEY}`, upper-cased, with every character that is not
/// an ASCII letter or digit replaced by `_`. Without a prefix the variable is
/// `{BUNDLE}_{KEY}`.
///
/// # Examples
///
/// ```
/// use bundlecfg::bundle::EnvironmentBundles;
///
/// let bundles = EnvironmentBundles::new("MYAPP");
/// assert_eq!(bundles.variable_name("config", "db.url"), "MYAPP_CONFIG_DB_URL");
///
/// let bare = EnvironmentBundles::unprefixed();
/// assert_eq!(bare.variable_name("config", "dbUrl"), "CONFIG_DBURL");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvironmentBundles {
    prefix: Option<String>,
}

impl EnvironmentBundles {
    /// Creates a backend whose variables start with `prefix`.
    ///
    /// An empty prefix behaves like [`EnvironmentBundles::unprefixed`].
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            prefix: (!prefix.is_empty()).then_some(prefix),
        }
    }

    /// Creates a backend without a variable prefix.
    #[must_use]
    pub fn unprefixed() -> Self {
        Self::default()
    }

    /// Returns the variable consulted for `(bundle, key)`.
    #[must_use]
    pub fn variable_name(&self, bundle: &str, key: &str) -> String {
        let mut name = String::new();
        if let Some(prefix) = &self.prefix {
            name.push_str(&sanitize(prefix));
            name.push('_');
        }
        name.push_str(&sanitize(bundle));
        name.push('_');
        name.push_str(&sanitize(key));
        name
    }
}

fn sanitize(part: &str) -> String {
    part.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

impl BundleLookup for EnvironmentBundles {
    fn lookup(&self, bundle: &str, key: &str) -> Result<Option<String>> {
        let name = self.variable_name(bundle, key);
        match env::var(&name) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(Error::BackingStore {
                bundle: bundle.to_string(),
                reason: format!("environment variable {name} is not valid UTF-8"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_variable_name_sanitizes() {
        let bundles = EnvironmentBundles::new("my-app");
        assert_eq!(
            bundles.variable_name("config", "http.port"),
            "MY_APP_CONFIG_HTTP_PORT"
        );
    }

    #[test]
    fn test_empty_prefix_is_unprefixed() {
        let bundles = EnvironmentBundles::new("");
        assert_eq!(bundles.variable_name("a", "b"), "A_B");
    }

    #[test]
    #[serial]
    fn test_lookup_present_and_absent() {
        let bundles = EnvironmentBundles::new("BUNDLECFG_UNIT");
        env::set_var("BUNDLECFG_UNIT_CONFIG_GREETING", "hello");
        env::remove_var("BUNDLECFG_UNIT_CONFIG_MISSING");

        assert_eq!(
            bundles.lookup("config", "greeting").unwrap().as_deref(),
            Some("hello")
        );
        assert_eq!(bundles.lookup("config", "missing").unwrap(), None);

        env::remove_var("BUNDLECFG_UNIT_CONFIG_GREETING");
    }

    #[test]
    #[serial]
    fn test_empty_variable_is_found() {
        let bundles = EnvironmentBundles::new("BUNDLECFG_UNIT");
        env::set_var("BUNDLECFG_UNIT_CONFIG_BLANK", "");
        assert_eq!(bundles.lookup("config", "blank").unwrap(), Some(String::new()));
        env::remove_var("BUNDLECFG_UNIT_CONFIG_BLANK");
    }
}
