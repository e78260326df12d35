//! YAML mappings read with every scalar kept as written.
//!
//! Scalars are deserialized straight into `String`, so `1.10`, `0x1F` and
//! `True` keep their source text instead of being re-rendered from a parsed
//! number or boolean. `null`, `~` and an empty value read as absent.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// A mapping with string keys, in document order.
///
/// Keys are taken as their source text; a repeated key is kept twice and
/// consumers decide which occurrence wins.
#[derive(Debug)]
pub(crate) struct OrderedMap<V>(pub(crate) Vec<(String, V)>);

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<'de, V> Deserialize<'de> for OrderedMap<V>
where
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V> Visitor<'de> for EntriesVisitor<V>
        where
            V: Deserialize<'de>,
        {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of keys to values")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, V>()? {
                    entries.push(entry);
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

/// Parses a document that must be a flat mapping of scalars.
///
/// Null values read as empty strings. An empty document is an empty mapping.
pub(crate) fn flat_scalars(contents: &str) -> serde_yaml::Result<Vec<(String, String)>> {
    let map: OrderedMap<Option<String>> = serde_yaml::from_str(contents)?;
    Ok(map
        .0
        .into_iter()
        .map(|(key, value)| (key, value.unwrap_or_default()))
        .collect())
}
