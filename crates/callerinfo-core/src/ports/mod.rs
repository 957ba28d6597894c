//! Ports: the narrow interfaces the settings facade consumes.
//!
//! Every collaborator that belongs to the host runtime is reached through
//! one of these traits so the facade can be built and tested without it.
//!
//! | Trait                       | Host responsibility                          |
//! |-----------------------------|----------------------------------------------|
//! | [`KeyValueStore`]           | one preference namespace (general or window) |
//! | [`DisplayMetricsProvider`]  | current screen size                          |
//! | [`StringListCodec`]         | list <-> JSON string                         |
//! | [`DeviceIdentifierGenerator`] | fresh device identifier                    |
//! | [`KeyNameResolver`]         | symbolic key -> persistence key              |
//! | [`CategoryClassifier`]      | category name -> integer type code           |

use std::borrow::Cow;

use tracing::warn;

use crate::domain::keys::SettingKey;
use crate::domain::value::PrefValue;
use crate::error::StoreError;

// ── Key-value namespace ───────────────────────────────────────────────────────

/// A single preference namespace.
///
/// `put` and `remove` stage a change; `commit` makes every staged change
/// durable.  Whether staged changes are visible to `get` before `commit` is
/// up to the implementation, but every implementation in this workspace
/// makes them visible immediately.
///
/// Individual calls must be safe from multiple threads.  Sequences of calls
/// are not atomic.
pub trait KeyValueStore: Send + Sync {
    /// Returns the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<PrefValue>;

    /// Returns `true` when `key` has a stored value.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Stages `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: PrefValue);

    /// Stages removal of `key`.  Removing an absent key is a no-op.
    fn remove(&self, key: &str);

    /// Flushes staged changes to durable storage.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the namespace cannot be persisted.
    fn commit(&self) -> Result<(), StoreError>;
}

/// Typed reads with default fallback, available on every [`KeyValueStore`].
///
/// A stored value of the wrong kind is treated as absent: the default is
/// returned and the mismatch is logged.
pub trait KeyValueStoreExt: KeyValueStore {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        typed(self.get(key), key, default, |v| v.as_bool())
    }

    fn get_int(&self, key: &str, default: i32) -> i32 {
        typed(self.get(key), key, default, |v| v.as_int())
    }

    fn get_long(&self, key: &str, default: i64) -> i64 {
        typed(self.get(key), key, default, |v| v.as_long())
    }

    fn get_string(&self, key: &str, default: &str) -> String {
        typed(self.get(key), key, default.to_string(), |v| {
            v.as_str().map(str::to_string)
        })
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStoreExt for T {}

fn typed<T>(
    stored: Option<PrefValue>,
    key: &str,
    default: T,
    extract: impl FnOnce(&PrefValue) -> Option<T>,
) -> T {
    match stored {
        None => default,
        Some(value) => match extract(&value) {
            Some(v) => v,
            None => {
                warn!(key, kind = value.kind(), "stored preference has unexpected type; using default");
                default
            }
        },
    }
}

// ── Display metrics ───────────────────────────────────────────────────────────

/// Screen size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMetrics {
    pub width: i32,
    pub height: i32,
}

/// Source of the current screen size.
///
/// The settings facade queries this exactly once, at construction.
pub trait DisplayMetricsProvider: Send + Sync {
    fn current_screen_size(&self) -> DisplayMetrics;
}

// ── Codec ─────────────────────────────────────────────────────────────────────

/// Encodes a list of strings to and from the single string a namespace stores.
pub trait StringListCodec: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the list cannot be serialized.
    fn encode(&self, list: &[String]) -> Result<String, serde_json::Error>;

    /// # Errors
    ///
    /// Returns an error if `raw` is not an encoded list of strings.
    fn decode(&self, raw: &str) -> Result<Vec<String>, serde_json::Error>;
}

// ── Identifier generation ─────────────────────────────────────────────────────

/// Produces a fresh device identifier.
///
/// The facade calls this at most once per namespace lifetime: the first
/// result is persisted and returned from then on.
pub trait DeviceIdentifierGenerator: Send + Sync {
    fn generate(&self) -> String;
}

// ── Key names ─────────────────────────────────────────────────────────────────

/// Maps a symbolic key to the string used as the persistence key.
pub trait KeyNameResolver: Send + Sync {
    fn resolve(&self, key: SettingKey) -> Cow<'_, str>;
}

// ── Category classification ───────────────────────────────────────────────────

/// Maps a human-readable category name (e.g. a caller-ID tag) to its type code.
pub trait CategoryClassifier: Send + Sync {
    fn classify(&self, name: &str) -> i32;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MapStore(Mutex<HashMap<String, PrefValue>>);

    impl KeyValueStore for MapStore {
        fn get(&self, key: &str) -> Option<PrefValue> {
            self.0.lock().unwrap().get(key).cloned()
        }
        fn put(&self, key: &str, value: PrefValue) {
            self.0.lock().unwrap().insert(key.to_string(), value);
        }
        fn remove(&self, key: &str) {
            self.0.lock().unwrap().remove(key);
        }
        fn commit(&self) -> Result<(), StoreError> {
            Ok(())
        }
    }

    #[test]
    fn test_typed_reads_return_default_when_absent() {
        let store = MapStore::default();
        assert!(store.get_bool("a", true));
        assert_eq!(store.get_int("b", 20), 20);
        assert_eq!(store.get_long("c", 0), 0);
        assert_eq!(store.get_string("d", "x"), "x");
        assert!(!store.contains("a"));
    }

    #[test]
    fn test_typed_reads_return_stored_value() {
        let store = MapStore::default();
        store.put("a", PrefValue::Bool(false));
        store.put("b", PrefValue::Int(7));
        store.put("c", PrefValue::Long(1_700_000_000_000));
        store.put("d", PrefValue::from("y"));

        assert!(!store.get_bool("a", true));
        assert_eq!(store.get_int("b", 20), 7);
        assert_eq!(store.get_long("c", 0), 1_700_000_000_000);
        assert_eq!(store.get_string("d", "x"), "y");
    }

    #[test]
    fn test_typed_read_of_wrong_kind_falls_back_to_default() {
        let store = MapStore::default();
        store.put("a", PrefValue::Int(1));
        assert!(store.get_bool("a", true));
        assert!(store.contains("a"));
    }

    #[test]
    fn test_get_long_accepts_narrow_int() {
        let store = MapStore::default();
        store.put("t", PrefValue::Int(5));
        assert_eq!(store.get_long("t", 0), 5);
    }
}
