//! Key-name resolvers: symbolic key → persistence key.
//!
//! [`DefaultKeyNames`] uses each key's symbolic name unchanged.
//! [`KeyNameTable`] overrides selected names, typically loaded from TOML,
//! and falls back to the symbolic name for everything else:
//!
//! ```toml
//! window_height = "window_height_v2"
//! hangup_keyword = "hangup_keyword_key"
//! ```

use std::borrow::Cow;
use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use callerinfo_core::{KeyNameResolver, SettingKey};

/// Error type for loading a key-name table.
#[derive(Debug, Error)]
pub enum KeyNameError {
    /// The TOML content could not be parsed.
    #[error("failed to parse key-name table: {0}")]
    Parse(#[from] toml::de::Error),

    /// The table names a key that does not exist.
    #[error("unknown setting key `{0}` in key-name table")]
    UnknownKey(String),
}

/// Resolves every key to its symbolic name.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultKeyNames;

impl KeyNameResolver for DefaultKeyNames {
    fn resolve(&self, key: SettingKey) -> Cow<'_, str> {
        Cow::Borrowed(key.name())
    }
}

/// Resolver with per-key overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyNameTable {
    overrides: HashMap<SettingKey, String>,
}

#[derive(Deserialize)]
#[serde(transparent)]
struct RawTable(HashMap<String, String>);

impl KeyNameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the persistence key of `key`.
    pub fn with(mut self, key: SettingKey, name: impl Into<String>) -> Self {
        self.overrides.insert(key, name.into());
        self
    }

    /// Parses a flat TOML table of `symbolic_name = "persistence_key"` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNameError::Parse`] for malformed TOML and
    /// [`KeyNameError::UnknownKey`] when a symbolic name is not recognized.
    pub fn from_toml_str(content: &str) -> Result<Self, KeyNameError> {
        let RawTable(raw) = toml::from_str(content)?;
        let mut table = Self::new();
        for (name, persisted) in raw {
            let key = SettingKey::from_name(&name).ok_or(KeyNameError::UnknownKey(name))?;
            table.overrides.insert(key, persisted);
        }
        Ok(table)
    }
}

impl KeyNameResolver for KeyNameTable {
    fn resolve(&self, key: SettingKey) -> Cow<'_, str> {
        match self.overrides.get(&key) {
            Some(name) => Cow::Borrowed(name.as_str()),
            None => Cow::Borrowed(key.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names_are_symbolic_names() {
        assert_eq!(DefaultKeyNames.resolve(SettingKey::Uid), "uid");
        assert_eq!(
            DefaultKeyNames.resolve(SettingKey::PaddingMarkNumbers),
            "padding_mark_numbers"
        );
    }

    #[test]
    fn test_table_overrides_and_falls_back() {
        // Arrange
        let toml_str = r#"
window_height = "window_height_v2"
"#;

        // Act
        let table = KeyNameTable::from_toml_str(toml_str).expect("parse");

        // Assert
        assert_eq!(table.resolve(SettingKey::WindowHeight), "window_height_v2");
        assert_eq!(table.resolve(SettingKey::WindowTextSize), "window_text_size");
    }

    #[test]
    fn test_table_rejects_unknown_symbolic_name() {
        let result = KeyNameTable::from_toml_str(r#"not_a_key = "x""#);
        assert!(matches!(result, Err(KeyNameError::UnknownKey(name)) if name == "not_a_key"));
    }

    #[test]
    fn test_table_rejects_malformed_toml() {
        assert!(matches!(
            KeyNameTable::from_toml_str("[[[ nope"),
            Err(KeyNameError::Parse(_))
        ));
    }

    #[test]
    fn test_builder_matches_parsed_table() {
        let built = KeyNameTable::new().with(SettingKey::Uid, "device_uid");
        let parsed = KeyNameTable::from_toml_str(r#"uid = "device_uid""#).expect("parse");
        assert_eq!(built, parsed);
    }
}
