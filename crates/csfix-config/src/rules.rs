//! Rule configuration model
//!
//! A rule is configured with `true` (enable with defaults), `false`
//! (disable), or a map of option name to option value. Rule names prefixed
//! with `@` refer to presets and are expanded before validation.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Value of a single rule option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<String>),
    Map(BTreeMap<String, String>),
}

impl OptionValue {
    /// Build a list value from anything yielding string-likes
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OptionValue::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a map value from string pairs
    pub fn map<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        OptionValue::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

/// Configuration state of a single rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    /// `true` enables the rule with defaults, `false` disables it
    Flag(bool),
    /// Enable the rule with explicit options
    Configured(BTreeMap<String, OptionValue>),
}

impl RuleValue {
    pub fn enabled() -> Self {
        RuleValue::Flag(true)
    }

    pub fn disabled() -> Self {
        RuleValue::Flag(false)
    }

    /// Enable a rule with an explicit option map
    pub fn configured<I, K, V>(options: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OptionValue>,
    {
        RuleValue::Configured(
            options
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, RuleValue::Flag(false))
    }

    /// Option map when the rule is enabled with explicit options
    pub fn options(&self) -> Option<&BTreeMap<String, OptionValue>> {
        match self {
            RuleValue::Configured(options) => Some(options),
            RuleValue::Flag(_) => None,
        }
    }
}

/// Declaration-ordered map of rule name to configuration value
///
/// Insertion of an existing key replaces its value but keeps the original
/// position, matching the merge semantics of the engine's own rule arrays.
/// Backed by an entry vector plus a name index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleMap {
    entries: Vec<(String, RuleValue)>,
    index: HashMap<String, usize>,
}

impl RuleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or override a rule, last write wins
    pub fn insert(&mut self, name: impl Into<String>, value: RuleValue) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&idx) => self.entries[idx].1 = value,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&RuleValue> {
        self.index.get(name).map(|&idx| &self.entries[idx].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Rule names in declaration order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge another map into this one, the other map's entries winning
    pub fn merge(&mut self, other: RuleMap) {
        for (name, value) in other.entries {
            self.insert(name, value);
        }
    }

    /// Consuming variant of [`RuleMap::merge`]
    pub fn merged(mut self, other: RuleMap) -> Self {
        self.merge(other);
        self
    }

    /// Parse a rule map from a TOML document, preserving declaration order
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a rule map from a TOML file, e.g. a project override file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

impl<K: Into<String>> FromIterator<(K, RuleValue)> for RuleMap {
    fn from_iter<I: IntoIterator<Item = (K, RuleValue)>>(iter: I) -> Self {
        let mut map = RuleMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

impl<K: Into<String>> Extend<(K, RuleValue)> for RuleMap {
    fn extend<I: IntoIterator<Item = (K, RuleValue)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl Serialize for RuleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RuleMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RuleMapVisitor;

        impl<'de> Visitor<'de> for RuleMapVisitor {
            type Value = RuleMap;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of rule name to rule value")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = RuleMap::new();
                while let Some((name, value)) = access.next_entry::<String, RuleValue>()? {
                    map.insert(name, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(RuleMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_declaration_order() {
        let mut rules = RuleMap::new();
        rules.insert("b_rule", RuleValue::enabled());
        rules.insert("a_rule", RuleValue::disabled());

        assert_eq!(rules.names(), vec!["b_rule", "a_rule"]);
    }

    #[test]
    fn test_override_keeps_original_position() {
        let mut rules = RuleMap::new();
        rules.insert("first", RuleValue::enabled());
        rules.insert("second", RuleValue::enabled());
        rules.insert("first", RuleValue::disabled());

        assert_eq!(rules.names(), vec!["first", "second"]);
        assert_eq!(rules.get("first"), Some(&RuleValue::disabled()));
    }

    #[test]
    fn test_merge_last_write_wins() {
        let base: RuleMap = [
            ("a", RuleValue::enabled()),
            ("b", RuleValue::disabled()),
        ]
        .into_iter()
        .collect();
        let overrides: RuleMap = [("b", RuleValue::enabled())].into_iter().collect();

        let merged = base.merged(overrides);

        assert_eq!(merged.get("a"), Some(&RuleValue::enabled()));
        assert_eq!(merged.get("b"), Some(&RuleValue::enabled()));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_configured_options() {
        let value = RuleValue::configured([("syntax", "short")]);
        let options = value.options().unwrap();

        assert_eq!(options.get("syntax"), Some(&OptionValue::from("short")));
        assert!(!value.is_disabled());
    }

    #[test]
    fn test_from_toml_preserves_order() {
        let rules = RuleMap::from_toml_str(
            r#"
            single_quote = true
            array_syntax = { syntax = "short" }
            header_comment = false
            "#,
        )
        .unwrap();

        assert_eq!(
            rules.names(),
            vec!["single_quote", "array_syntax", "header_comment"]
        );
        assert_eq!(rules.get("header_comment"), Some(&RuleValue::disabled()));
        assert_eq!(
            rules.get("array_syntax"),
            Some(&RuleValue::configured([("syntax", "short")]))
        );
    }

    #[test]
    fn test_from_toml_option_kinds() {
        let rules = RuleMap::from_toml_str(
            r#"
            ordered_imports = { sort_algorithm = "alpha", imports_order = ["class", "function", "const"] }
            "#,
        )
        .unwrap();

        let options = rules.get("ordered_imports").unwrap().options().unwrap();
        assert_eq!(
            options.get("imports_order"),
            Some(&OptionValue::list(["class", "function", "const"]))
        );
        assert_eq!(
            options.get("sort_algorithm"),
            Some(&OptionValue::from("alpha"))
        );
    }
}
