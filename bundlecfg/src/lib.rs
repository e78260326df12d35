#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # bundlecfg
//!
//! A library for resolving typed configuration properties from named
//! bundles.
//!
//! A property is described by a [`PropertyDescriptor`]: the bundle to read,
//! the key inside it, whether the key must be present, and a textual
//! default. A [`PropertyResolver`] applies the resolution precedence over
//! any [`BundleLookup`] backend and converts the result to a string,
//! integer or boolean.
//!
//! ## Core Types
//!
//! - [`PropertyDescriptor`]: what to look up
//! - [`PropertyResolver`]: the resolution precedence and typed producers
//! - [`BundleLookup`]: the read-only backing store seam
//! - [`PropertyRegistry`]: named, typed descriptors resolved together
//! - [`Config`] and [`ConfigBuilder`]: where bundles come from
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use bundlecfg::bundle::MemoryBundles;
//! use bundlecfg::{PropertyDescriptor, PropertyResolver};
//!
//! let bundles = MemoryBundles::new().with_entry("database", "url", "jdbc:x");
//! let resolver = PropertyResolver::new(bundles);
//!
//! let url = PropertyDescriptor::builder("url").bundle("database").mandatory(true).build();
//! assert_eq!(resolver.resolve_string(&url).unwrap(), Some("jdbc:x".to_string()));
//!
//! let retries = PropertyDescriptor::builder("retries").default_value("3").build();
//! assert_eq!(resolver.resolve_integer(&retries).unwrap(), Some(3));
//! ```

pub mod bundle;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod logging;
pub mod producer;
pub mod registry;
pub mod resolver;

// Re-export key types at crate root for convenience
pub use bundle::BundleLookup;
pub use config::{Config, ConfigBuilder};
pub use descriptor::{DescriptorBuilder, PropertyDescriptor, DEFAULT_BUNDLE};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use producer::{boolean_property, integer_property, parse_boolean, string_property, FromProperty};
pub use registry::{
    PropertyCheck, PropertyDefinition, PropertyRegistry, PropertyType, PropertyValue,
    ResolvedProperties,
};
pub use resolver::PropertyResolver;
