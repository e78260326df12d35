//! Parser for line-oriented `key=value` property files.
//!
//! The format is the one used by resource bundles:
//!
//! - `#` and `!` start comment lines; blank lines are ignored
//! - the key ends at the first unescaped `=`, `:` or whitespace
//! - a line ending in an unescaped backslash continues on the next line
//! - `\t`, `\n`, `\r`, `\f` and `\uXXXX` escapes are decoded; any other
//!   escaped character stands for itself
//! - a UTF-16 surrogate pair written as two `\u` escapes decodes to one
//!   character

use std::collections::BTreeMap;
use std::str::Chars;

use crate::error::{Error, Result};

/// A parsed set of properties.
///
/// Keys are kept sorted; when a key repeats, the last occurrence wins.
///
/// # Examples
///
/// ```
/// use bundlecfg::bundle::Properties;
///
/// let props = Properties::parse("# settings\ngreeting = hello world\nretries: 3\n").unwrap();
/// assert_eq!(props.get("greeting"), Some("hello world"));
/// assert_eq!(props.get("retries"), Some("3"));
/// assert_eq!(props.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

/// A parse failure, reported with the 1-based line where the logical line starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Line number of the offending entry.
    pub line: usize,
    /// What went wrong.
    pub message: String,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}

impl Properties {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses property file contents.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error naming the line of a malformed `\u`
    /// escape.
    pub fn parse(contents: &str) -> Result<Self> {
        Self::parse_lines(contents).map_err(|e| Error::Validation {
            field: "properties".into(),
            message: e.to_string(),
        })
    }

    /// Parses property file contents, returning the raw [`ParseError`].
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed `\u` escape.
    pub fn parse_lines(contents: &str) -> std::result::Result<Self, ParseError> {
        let mut entries = BTreeMap::new();

        for (line, logical) in logical_lines(contents) {
            let (raw_key, raw_value) = split_entry(&logical);
            let key = unescape(raw_key).map_err(|message| ParseError { line, message })?;
            let value = unescape(raw_value).map_err(|message| ParseError { line, message })?;
            entries.insert(key, value);
        }

        Ok(Self { entries })
    }

    /// Returns the value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Inserts or replaces an entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Joins continuation lines and drops comments and blank lines.
///
/// Yields `(starting line number, logical line)` with leading whitespace
/// already removed.
fn logical_lines(contents: &str) -> Vec<(usize, String)> {
    let mut result = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (index, raw) in contents.lines().enumerate() {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        let trimmed = raw.trim_start_matches(is_blank);

        let (start, mut buffer) = match pending.take() {
            Some(p) => p,
            None => {
                if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                    continue;
                }
                (index + 1, String::new())
            }
        };

        let trailing = trimmed.chars().rev().take_while(|&c| c == '\\').count();
        if trailing % 2 == 1 {
            buffer.push_str(&trimmed[..trimmed.len() - 1]);
            pending = Some((start, buffer));
        } else {
            buffer.push_str(trimmed);
            result.push((start, buffer));
        }
    }

    if let Some(p) = pending {
        result.push(p);
    }

    result
}

/// Splits a logical line into its raw (still escaped) key and value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    let mut separator = None;

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                separator = Some(c);
                break;
            }
            c if is_blank(c) => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let mut rest = &line[key_end..];

    if separator.is_some() {
        rest = &rest[1..];
        rest = rest.trim_start_matches(is_blank);
    } else {
        rest = rest.trim_start_matches(is_blank);
        if let Some(stripped) = rest.strip_prefix(['=', ':']) {
            rest = stripped.trim_start_matches(is_blank);
        }
    }

    (key, rest)
}

fn unescape(raw: &str) -> std::result::Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => out.push(unicode_escape(&mut chars)?),
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}

/// Decodes the code unit after `\u`, joining a UTF-16 surrogate pair
/// written as two consecutive escapes.
fn unicode_escape(chars: &mut Chars<'_>) -> std::result::Result<char, String> {
    let high = code_unit(chars)?;
    let code = if (0xD800..=0xDBFF).contains(&high) {
        let low = match (chars.next(), chars.next()) {
            (Some('\\'), Some('u')) => code_unit(chars)?,
            _ => return Err(format!("unpaired surrogate \\u{high:04X}")),
        };
        if !(0xDC00..=0xDFFF).contains(&low) {
            return Err(format!("unpaired surrogate \\u{high:04X}"));
        }
        0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
    } else {
        high
    };
    char::from_u32(code).ok_or_else(|| format!("unpaired surrogate \\u{code:04X}"))
}

fn code_unit(chars: &mut Chars<'_>) -> std::result::Result<u32, String> {
    let hex: String = chars.by_ref().take(4).collect();
    (hex.len() == 4)
        .then(|| u32::from_str_radix(&hex, 16).ok())
        .flatten()
        .ok_or_else(|| format!("malformed \\u escape: \\u{hex}"))
}
