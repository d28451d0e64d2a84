//! settings::tokens
//!
//! User token mapping with deterministic iteration order.
//!
//! # Design
//!
//! grate substitutes user tokens into migration scripts, and each token becomes
//! its own `--usertokens=key=value` flag. The underlying map type must not leak
//! its iteration order into the argument list, so this module owns a single
//! insertion-ordered mapping with one mutation entry point.
//!
//! # Ordering
//!
//! Tokens iterate in first-insertion order. Overwriting an existing key keeps
//! its original position; only the value changes. This makes repeated argument
//! builds over the same settings byte-identical.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An insertion-ordered user token mapping.
///
/// # Example
///
/// ```
/// use grate_runner::settings::UserTokens;
///
/// let mut tokens = UserTokens::new();
/// tokens.set("environment", "staging");
/// tokens.set("owner", "platform-team");
/// tokens.set("environment", "production"); // overwrites, keeps position
///
/// let entries: Vec<_> = tokens.iter().collect();
/// assert_eq!(entries, vec![("environment", "production"), ("owner", "platform-team")]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserTokens {
    entries: Vec<(String, String)>,
}

impl UserTokens {
    /// Create an empty token mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token, overwriting the value if the key already exists.
    ///
    /// Last write wins for a given key. An overwritten key retains its
    /// first-insertion position in iteration order.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a token value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over tokens in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for UserTokens {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tokens = UserTokens::new();
        for (key, value) in iter {
            tokens.set(key, value);
        }
        tokens
    }
}

impl Serialize for UserTokens {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for UserTokens {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TokensVisitor;

        impl<'de> Visitor<'de> for TokensVisitor {
            type Value = UserTokens;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of token names to token values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut tokens = UserTokens::new();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    tokens.set(key, value);
                }
                Ok(tokens)
            }
        }

        deserializer.deserialize_map(TokensVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_inserts_in_order() {
        let mut tokens = UserTokens::new();
        tokens.set("a", "apple");
        tokens.set("b", "banana");
        tokens.set("c", "cherry");

        let entries: Vec<_> = tokens.iter().collect();
        assert_eq!(
            entries,
            vec![("a", "apple"), ("b", "banana"), ("c", "cherry")]
        );
    }

    #[test]
    fn set_overwrites_existing_key_in_place() {
        let mut tokens = UserTokens::new();
        tokens.set("a", "apple");
        tokens.set("b", "banana");
        tokens.set("a", "apricot");

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens.get("a"), Some("apricot"));

        let entries: Vec<_> = tokens.iter().collect();
        assert_eq!(entries, vec![("a", "apricot"), ("b", "banana")]);
    }

    #[test]
    fn get_missing_key_is_none() {
        let tokens = UserTokens::new();
        assert_eq!(tokens.get("missing"), None);
        assert!(tokens.is_empty());
    }

    #[test]
    fn from_iterator_collects_pairs() {
        let tokens: UserTokens = vec![("a", "apple"), ("b", "banana")].into_iter().collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens.get("b"), Some("banana"));
    }

    #[test]
    fn toml_roundtrip_preserves_entries() {
        let mut tokens = UserTokens::new();
        tokens.set("a", "apple");
        tokens.set("b", "banana");

        let text = toml::to_string(&tokens).unwrap();
        let parsed: UserTokens = toml::from_str(&text).unwrap();
        assert_eq!(parsed.get("a"), Some("apple"));
        assert_eq!(parsed.get("b"), Some("banana"));
    }
}
