//! Bundles stored as files in a directory.
//!
//! A bundle named `config` is read from `config.properties`, `config.yaml` or
//! `config.yml` in the root directory. With a locale configured, the
//! locale-specific files (`config_fr_FR.properties`, `config_fr.properties`)
//! are consulted first and the base file acts as their parent.
//!
//! Property files are read as UTF-8, or as ISO-8859-1 when they are not
//! valid UTF-8. YAML files must be UTF-8 and keep each scalar as written.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::bundle::{yaml, BundleLookup, Locale, Properties};
use crate::error::{Error, Result};

/// File extensions tried for each candidate bundle name, in order.
const EXTENSIONS: [&str; 3] = ["properties", "yaml", "yml"];

/// The files making up one bundle, most specific first.
#[derive(Debug, Default)]
struct BundleChain {
    files: Vec<(PathBuf, Properties)>,
}

impl BundleChain {
    fn get(&self, key: &str) -> Option<&str> {
        self.files.iter().find_map(|(_, props)| props.get(key))
    }
}

/// Bundles read from a directory of property files.
///
/// Each bundle is loaded on first use and cached, so every file is read at
/// most once per `DirectoryBundles`. A bundle with no files resolves every
/// key as not found.
///
/// # Examples
///
/// ```no_run
/// use bundlecfg::bundle::{BundleLookup, DirectoryBundles, Locale};
///
/// let bundles = DirectoryBundles::new("/etc/myapp")
///     .with_locale(Locale::parse("fr_FR").unwrap());
/// let greeting = bundles.lookup("messages", "greeting").unwrap();
/// ```
#[derive(Debug)]
pub struct DirectoryBundles {
    root: PathBuf,
    locale: Option<Locale>,
    cache: RwLock<HashMap<String, Arc<BundleChain>>>,
}

impl DirectoryBundles {
    /// Creates a backend reading bundles from `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            locale: None,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Sets the locale used to select locale-specific bundle files.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the configured locale, if any.
    #[must_use]
    pub fn locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    /// Returns the files that make up `bundle`, most specific first.
    ///
    /// # Errors
    ///
    /// Returns a `BackingStore` error if the bundle name is invalid or a
    /// bundle file cannot be read or parsed.
    pub fn bundle_files(&self, bundle: &str) -> Result<Vec<PathBuf>> {
        let chain = self.chain(bundle)?;
        Ok(chain.files.iter().map(|(path, _)| path.clone()).collect())
    }

    /// Returns every entry visible in `bundle`, sorted by key.
    ///
    /// A more specific file's value shadows the base file's value.
    ///
    /// # Errors
    ///
    /// Returns a `BackingStore` error if the bundle cannot be loaded.
    pub fn bundle_entries(&self, bundle: &str) -> Result<Properties> {
        let chain = self.chain(bundle)?;
        let mut merged = Properties::new();
        for (_, props) in chain.files.iter().rev() {
            for (key, value) in props.iter() {
                merged.insert(key, value);
            }
        }
        Ok(merged)
    }

    fn chain(&self, bundle: &str) -> Result<Arc<BundleChain>> {
        validate_bundle_name(bundle)?;

        {
            let cache = self.cache.read().map_err(|_| poisoned(bundle))?;
            if let Some(chain) = cache.get(bundle) {
                return Ok(Arc::clone(chain));
            }
        }

        let loaded = Arc::new(self.load_chain(bundle)?);

        let mut cache = self.cache.write().map_err(|_| poisoned(bundle))?;
        let chain = cache
            .entry(bundle.to_string())
            .or_insert_with(|| Arc::clone(&loaded));
        Ok(Arc::clone(chain))
    }

    fn load_chain(&self, bundle: &str) -> Result<BundleChain> {
        let names = match &self.locale {
            Some(locale) => locale.candidate_names(bundle),
            None => vec![bundle.to_string()],
        };

        let mut chain = BundleChain::default();
        for name in names {
            let Some(path) = self.find_file(&name) else {
                continue;
            };
            let props = load_file(bundle, &path)?;
            log::debug!(
                "Loaded bundle file {} ({} entries)",
                path.display(),
                props.len()
            );
            chain.files.push((path, props));
        }

        if chain.files.is_empty() {
            log::debug!(
                "No files found for bundle '{bundle}' in {}",
                self.root.display()
            );
        }

        Ok(chain)
    }

    fn find_file(&self, name: &str) -> Option<PathBuf> {
        EXTENSIONS
            .iter()
            .map(|ext| self.root.join(format!("{name}.{ext}")))
            .find(|path| path.is_file())
    }
}

impl BundleLookup for DirectoryBundles {
    fn lookup(&self, bundle: &str, key: &str) -> Result<Option<String>> {
        let chain = self.chain(bundle)?;
        Ok(chain.get(key).map(str::to_string))
    }
}

fn poisoned(bundle: &str) -> Error {
    Error::BackingStore {
        bundle: bundle.to_string(),
        reason: "bundle cache lock poisoned".into(),
    }
}

fn validate_bundle_name(bundle: &str) -> Result<()> {
    if bundle.is_empty()
        || bundle.contains(['/', '\\'])
        || bundle.contains("..")
        || bundle.contains('\0')
    {
        return Err(Error::BackingStore {
            bundle: bundle.to_string(),
            reason: "invalid bundle name".into(),
        });
    }
    Ok(())
}

fn load_file(bundle: &str, path: &Path) -> Result<Properties> {
    let backing = |reason: String| Error::BackingStore {
        bundle: bundle.to_string(),
        reason,
    };

    let bytes =
        fs::read(path).map_err(|e| backing(format!("failed to read {}: {e}", path.display())))?;

    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == "yaml" || e == "yml");

    if is_yaml {
        let contents = String::from_utf8(bytes)
            .map_err(|e| backing(format!("{}: {e}", path.display())))?;
        parse_flat_yaml(&contents).map_err(|e| backing(format!("{}: {e}", path.display())))
    } else {
        let contents = decode_properties(bytes);
        Properties::parse_lines(&contents).map_err(|e| backing(format!("{}: {e}", path.display())))
    }
}

/// Decodes a property file as UTF-8, falling back to ISO-8859-1.
fn decode_properties(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().iter().map(|&b| char::from(b)).collect(),
    }
}

fn parse_flat_yaml(contents: &str) -> serde_yaml::Result<Properties> {
    let mut props = Properties::new();
    for (key, value) in yaml::flat_scalars(contents)? {
        props.insert(key, value);
    }
    Ok(props)
}
