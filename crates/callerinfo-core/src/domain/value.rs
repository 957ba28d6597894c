//! The value model stored in a preference namespace.
//!
//! A namespace maps string keys to one of four scalar kinds.  The enum is
//! serialized untagged so a namespace persists as a plain TOML table:
//!
//! ```toml
//! eula = true
//! window_height = 135
//! uid = "3f1c..."
//! ```
//!
//! # Width after a round trip
//!
//! TOML has a single integer type, so a `Long` that happens to fit in 32 bits
//! comes back from disk as an `Int`.  The typed accessors below therefore
//! widen `Int` to `i64` and narrow a `Long` to `i32` when it fits.  Any other
//! mismatch is reported as `None` and the caller falls back to its default.

use serde::{Deserialize, Serialize};

/// A single persisted preference value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Int(i32),
    Long(i64),
    Str(String),
}

impl PrefValue {
    /// Returns the boolean payload, or `None` for any other kind.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as an `i32` when it is an integer that fits.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Long(l) => i32::try_from(*l).ok(),
            _ => None,
        }
    }

    /// Returns the value as an `i64` when it is any integer kind.
    pub fn as_long(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(i64::from(*i)),
            Self::Long(l) => Some(*l),
            _ => None,
        }
    }

    /// Returns the string payload, or `None` for any other kind.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the stored kind, used in log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Long(_) => "long",
            Self::Str(_) => "string",
        }
    }
}

impl From<bool> for PrefValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for PrefValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for PrefValue {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<String> for PrefValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for PrefValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_int_narrows_long_that_fits() {
        assert_eq!(PrefValue::Long(42).as_int(), Some(42));
    }

    #[test]
    fn test_as_int_rejects_long_out_of_range() {
        assert_eq!(PrefValue::Long(i64::from(i32::MAX) + 1).as_int(), None);
    }

    #[test]
    fn test_as_long_widens_int() {
        assert_eq!(PrefValue::Int(-1).as_long(), Some(-1));
    }

    #[test]
    fn test_accessors_return_none_on_kind_mismatch() {
        let v = PrefValue::Str("true".to_string());
        assert_eq!(v.as_bool(), None);
        assert_eq!(v.as_int(), None);
        assert_eq!(v.as_long(), None);
        assert_eq!(PrefValue::Bool(true).as_str(), None);
    }

    #[test]
    fn test_untagged_serde_keeps_plain_json_shape() {
        // Arrange
        let values = vec![
            PrefValue::Bool(true),
            PrefValue::Int(7),
            PrefValue::Str("abc".to_string()),
        ];

        // Act
        let json = serde_json::to_string(&values).expect("serialize");

        // Assert
        assert_eq!(json, r#"[true,7,"abc"]"#);
    }

    #[test]
    fn test_untagged_deserialize_picks_long_for_large_integers() {
        let v: PrefValue = serde_json::from_str("1700000000000").expect("deserialize");
        assert_eq!(v, PrefValue::Long(1_700_000_000_000));
    }
}
