//! Named property registries.
//!
//! A [`PropertyRegistry`] maps logical names to typed descriptors. It is
//! assembled once at startup, either in code or from a YAML file, and
//! resolved eagerly with [`PropertyRegistry::resolve_all`] so that a missing
//! mandatory property stops initialization instead of surfacing at first
//! use.
//!
//! # Registry files
//!
//! ```yaml
//! properties:
//!   db_url:
//!     key: dbUrl
//!     mandatory: true
//!   retries:
//!     key: retries
//!     type: integer
//!     default: 3
//!   greeting:
//!     bundle: messages
//!     key: greeting
//! ```
//!
//! Entries resolve in the order they are declared.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::bundle::yaml::OrderedMap;
use crate::bundle::BundleLookup;
use crate::descriptor::{PropertyDescriptor, DEFAULT_BUNDLE};
use crate::error::{Error, Result};
use crate::resolver::PropertyResolver;

/// The type a registered property is produced as.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum PropertyType {
    /// Raw string value.
    #[default]
    String,
    /// Base-10 signed integer.
    Integer,
    /// Boolean, true only for "true" in any case.
    Boolean,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Integer => write!(f, "integer"),
            Self::Boolean => write!(f, "boolean"),
        }
    }
}

/// A resolved, typed property value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// A string value.
    String(String),
    /// An integer value.
    Integer(i64),
    /// A boolean value.
    Boolean(bool),
}

impl PropertyValue {
    /// Returns the type of this value.
    #[must_use]
    pub const fn property_type(&self) -> PropertyType {
        match self {
            Self::String(_) => PropertyType::String,
            Self::Integer(_) => PropertyType::Integer,
            Self::Boolean(_) => PropertyType::Boolean,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// A descriptor together with the type it is produced as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDefinition {
    /// What to look up.
    pub descriptor: PropertyDescriptor,
    /// How to convert it.
    pub property_type: PropertyType,
}

impl PropertyDefinition {
    /// Resolves this definition against `resolver`.
    ///
    /// # Errors
    ///
    /// Returns the resolver's errors for this definition's type.
    pub fn resolve<L: BundleLookup>(
        &self,
        resolver: &PropertyResolver<L>,
    ) -> Result<Option<PropertyValue>> {
        let d = &self.descriptor;
        Ok(match self.property_type {
            PropertyType::String => resolver.resolve_string(d)?.map(PropertyValue::String),
            PropertyType::Integer => resolver.resolve_integer(d)?.map(PropertyValue::Integer),
            PropertyType::Boolean => resolver.resolve_boolean(d)?.map(PropertyValue::Boolean),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryFile {
    #[serde(default)]
    properties: OrderedMap<DefinitionEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DefinitionEntry {
    bundle: Option<String>,
    #[serde(default)]
    key: String,
    #[serde(default)]
    mandatory: bool,
    default: Option<String>,
    #[serde(default, rename = "type")]
    property_type: PropertyType,
}

/// Named, ordered collection of property definitions.
///
/// # Examples
///
/// ```
/// use bundlecfg::bundle::MemoryBundles;
/// use bundlecfg::{PropertyDescriptor, PropertyRegistry, PropertyType};
///
/// let mut registry = PropertyRegistry::new();
/// registry
///     .register("retries", PropertyDescriptor::builder("retries").default_value("3").build(), PropertyType::Integer)
///     .unwrap();
///
/// let resolved = registry.resolve_all(&MemoryBundles::new()).unwrap();
/// assert_eq!(resolved.integer("retries").unwrap(), Some(3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertyRegistry {
    entries: Vec<(String, PropertyDefinition)>,
}

impl PropertyRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a property under `name`.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error if `name` is empty or already registered.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        descriptor: PropertyDescriptor,
        property_type: PropertyType,
    ) -> Result<&mut Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::Validation {
                field: "name".into(),
                message: "property name cannot be empty".into(),
            });
        }
        if self.get(&name).is_some() {
            return Err(Error::Validation {
                field: name,
                message: "property is already registered".into(),
            });
        }
        self.entries.push((
            name,
            PropertyDefinition {
                descriptor,
                property_type,
            },
        ));
        Ok(self)
    }

    /// Parses a registry from YAML.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error for invalid YAML, unknown fields or
    /// non-scalar defaults, and a `Validation` error for duplicate names.
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let file: RegistryFile = serde_yaml::from_str(contents)?;
        let mut registry = Self::new();

        for (name, entry) in file.properties.0 {
            let default_value = entry.default.unwrap_or_default();

            let descriptor = PropertyDescriptor::builder(entry.key)
                .bundle(entry.bundle.unwrap_or_else(|| DEFAULT_BUNDLE.to_string()))
                .mandatory(entry.mandatory)
                .default_value(default_value)
                .build();
            registry.register(name, descriptor, entry.property_type)?;
        }

        Ok(registry)
    }

    /// Loads a registry from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidPath` error if the file cannot be read, or the
    /// errors of [`PropertyRegistry::from_yaml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read registry file: {e}"),
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Returns the definition registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyDefinition> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, def)| def)
    }

    /// Iterates over definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyDefinition)> {
        self.entries.iter().map(|(n, d)| (n.as_str(), d))
    }

    /// Returns the number of registered properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves every property, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first `MissingMandatoryProperty`, `TypeCoercion` or
    /// backing-store error encountered.
    pub fn resolve_all<L: BundleLookup>(&self, lookup: L) -> Result<ResolvedProperties> {
        let resolver = PropertyResolver::new(lookup);
        let mut values = Vec::with_capacity(self.entries.len());
        for (name, def) in &self.entries {
            values.push((name.clone(), def.resolve(&resolver)?));
        }
        log::debug!("Resolved {} registered properties", values.len());
        Ok(ResolvedProperties { values })
    }

    /// Resolves every property and reports each outcome.
    #[must_use]
    pub fn check_all<L: BundleLookup>(&self, lookup: L) -> Vec<PropertyCheck> {
        let resolver = PropertyResolver::new(lookup);
        self.entries
            .iter()
            .map(|(name, def)| PropertyCheck {
                name: name.clone(),
                outcome: def.resolve(&resolver),
            })
            .collect()
    }
}

/// Outcome of resolving one registered property.
#[derive(Debug)]
pub struct PropertyCheck {
    /// The registered name.
    pub name: String,
    /// The resolved value, absent, or the failure.
    pub outcome: Result<Option<PropertyValue>>,
}

/// Values produced by [`PropertyRegistry::resolve_all`].
///
/// Serializes as a map from name to value, with absent values as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedProperties {
    values: Vec<(String, Option<PropertyValue>)>,
}

impl ResolvedProperties {
    /// Returns the value for `name`, `None` if it resolved as absent.
    ///
    /// # Errors
    ///
    /// Returns `UnknownProperty` if `name` was not registered.
    pub fn get(&self, name: &str) -> Result<Option<&PropertyValue>> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_ref())
            .ok_or_else(|| Error::UnknownProperty {
                name: name.to_string(),
            })
    }

    /// Returns a string property.
    ///
    /// # Errors
    ///
    /// Returns `UnknownProperty`, or `Validation` if the property has
    /// another type.
    pub fn string(&self, name: &str) -> Result<Option<&str>> {
        match self.get(name)? {
            None => Ok(None),
            Some(PropertyValue::String(s)) => Ok(Some(s)),
            Some(other) => Err(type_mismatch(name, other, PropertyType::String)),
        }
    }

    /// Returns an integer property.
    ///
    /// # Errors
    ///
    /// Returns `UnknownProperty`, or `Validation` if the property has
    /// another type.
    pub fn integer(&self, name: &str) -> Result<Option<i64>> {
        match self.get(name)? {
            None => Ok(None),
            Some(PropertyValue::Integer(n)) => Ok(Some(*n)),
            Some(other) => Err(type_mismatch(name, other, PropertyType::Integer)),
        }
    }

    /// Returns a boolean property.
    ///
    /// # Errors
    ///
    /// Returns `UnknownProperty`, or `Validation` if the property has
    /// another type.
    pub fn boolean(&self, name: &str) -> Result<Option<bool>> {
        match self.get(name)? {
            None => Ok(None),
            Some(PropertyValue::Boolean(b)) => Ok(Some(*b)),
            Some(other) => Err(type_mismatch(name, other, PropertyType::Boolean)),
        }
    }

    /// Iterates over values in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&PropertyValue>)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v.as_ref()))
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn type_mismatch(name: &str, actual: &PropertyValue, requested: PropertyType) -> Error {
    Error::Validation {
        field: name.to_string(),
        message: format!(
            "property is a {}, not a {requested}",
            actual.property_type()
        ),
    }
}

impl Serialize for ResolvedProperties {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in &self.values {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
