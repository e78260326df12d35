//! Locale tags and bundle-name fallback chains.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A locale identifier: language with optional country and variant.
///
/// # Examples
///
/// ```
/// use bundlecfg::bundle::Locale;
///
/// let locale: Locale = "fr_FR".parse().unwrap();
/// assert_eq!(
///     locale.candidate_names("config"),
///     vec!["config_fr_FR".to_string(), "config_fr".to_string(), "config".to_string()]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    country: Option<String>,
    variant: Option<String>,
}

impl Locale {
    /// Parses a tag such as `fr`, `fr_FR`, `fr-FR` or `en_US_POSIX`.
    ///
    /// The language is lower-cased and the country upper-cased; the variant
    /// is kept as given.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error if the tag is empty, has empty or
    /// non-alphanumeric parts, or has more than three parts.
    pub fn parse(tag: &str) -> Result<Self> {
        let invalid = |message: &str| Error::Validation {
            field: "locale".into(),
            message: format!("{message}: '{tag}'"),
        };

        let parts: Vec<&str> = tag.split(['_', '-']).collect();
        if parts.len() > 3 {
            return Err(invalid("too many components"));
        }
        if parts
            .iter()
            .any(|p| p.is_empty() || !p.chars().all(|c| c.is_ascii_alphanumeric()))
        {
            return Err(invalid("invalid locale tag"));
        }

        Ok(Self {
            language: parts[0].to_ascii_lowercase(),
            country: parts.get(1).map(|c| c.to_ascii_uppercase()),
            variant: parts.get(2).map(|v| (*v).to_string()),
        })
    }

    /// Returns the language code.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the country code, if any.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Returns the variant, if any.
    #[must_use]
    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    /// Returns the bundle names to try for `base`, most specific first.
    ///
    /// The last entry is always `base` itself.
    #[must_use]
    pub fn candidate_names(&self, base: &str) -> Vec<String> {
        let mut names = Vec::with_capacity(4);
        let mut suffix = format!("_{}", self.language);
        let mut specific = vec![suffix.clone()];

        if let Some(country) = &self.country {
            suffix = format!("{suffix}_{country}");
            specific.push(suffix.clone());
            if let Some(variant) = &self.variant {
                specific.push(format!("{suffix}_{variant}"));
            }
        }

        for s in specific.iter().rev() {
            names.push(format!("{base}{s}"));
        }
        names.push(base.to_string());
        names
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.language)?;
        if let Some(country) = &self.country {
            write!(f, "_{country}")?;
        }
        if let Some(variant) = &self.variant {
            write!(f, "_{variant}")?;
        }
        Ok(())
    }
}
