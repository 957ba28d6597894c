//! TOML-file-backed preference namespace.
//!
//! Each namespace is one flat TOML table in the platform-appropriate
//! config directory:
//! - Windows:  `%APPDATA%\CallerInfo\<namespace>.toml`
//! - Linux:    `~/.config/callerinfo/<namespace>.toml`
//! - macOS:    `~/Library/Application Support/CallerInfo/<namespace>.toml`
//!
//! ```toml
//! eula = true
//! eula_version = 1
//! padding_mark_numbers = '["10086"]'
//! window_height = 135
//! ```
//!
//! The whole table is loaded when the store is opened.  `put` and `remove`
//! change the in-memory copy and mark it dirty; `commit` rewrites the file.
//! A missing file is an empty namespace, which is what a first run sees.
//!
//! # Values the namespace cannot hold
//!
//! A hand-edited file may contain floats, arrays, datetimes, or nested
//! tables.  Those keys are not readable through the store (`get` returns
//! `None`, so the setting falls back to its default) and a warning names
//! each one.  They are kept as-is and written back on commit unless the
//! key is overwritten or removed.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use callerinfo_core::{KeyValueStore, PrefValue, StoreError};

/// Name of the general preferences namespace file (without extension).
pub const GENERAL_NAMESPACE: &str = "general";
/// Name of the window position namespace file (without extension).
pub const WINDOW_NAMESPACE: &str = "window";

#[derive(Default)]
struct Table {
    values: BTreeMap<String, PrefValue>,
    /// Entries of a kind `PrefValue` cannot represent, preserved for rewrite.
    foreign: BTreeMap<String, toml::Value>,
    dirty: bool,
}

impl Table {
    fn parse(content: &str) -> Result<Self, StoreError> {
        let raw: toml::Table =
            toml::from_str(content).map_err(|e| StoreError::Parse(e.to_string()))?;
        let mut table = Self::default();
        for (key, value) in raw {
            match to_pref_value(&value) {
                Some(pref) => {
                    table.values.insert(key, pref);
                }
                None => {
                    warn!(key = %key, kind = value.type_str(), "unsupported preference value; ignoring key");
                    table.foreign.insert(key, value);
                }
            }
        }
        Ok(table)
    }

    fn to_toml(&self) -> toml::Table {
        let mut out: toml::Table = self
            .foreign
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        for (key, value) in &self.values {
            out.insert(key.clone(), from_pref_value(value));
        }
        out
    }
}

fn to_pref_value(value: &toml::Value) -> Option<PrefValue> {
    match value {
        toml::Value::Boolean(b) => Some(PrefValue::Bool(*b)),
        toml::Value::Integer(i) => Some(match i32::try_from(*i) {
            Ok(narrow) => PrefValue::Int(narrow),
            Err(_) => PrefValue::Long(*i),
        }),
        toml::Value::String(s) => Some(PrefValue::Str(s.clone())),
        _ => None,
    }
}

fn from_pref_value(value: &PrefValue) -> toml::Value {
    match value {
        PrefValue::Bool(b) => toml::Value::Boolean(*b),
        PrefValue::Int(i) => toml::Value::Integer(i64::from(*i)),
        PrefValue::Long(l) => toml::Value::Integer(*l),
        PrefValue::Str(s) => toml::Value::String(s.clone()),
    }
}

/// A preference namespace persisted as a TOML file.
pub struct TomlFileStore {
    path: PathBuf,
    table: Mutex<Table>,
}

impl TomlFileStore {
    /// Opens the namespace stored at `path`, loading its current content.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] for file-system errors other than "not
    /// found", and [`StoreError::Parse`] if the file is not valid TOML.
    /// Individual values of an unsupported kind do not fail the open.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let table = match std::fs::read_to_string(&path) {
            Ok(content) => Table::parse(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Table::default(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        debug!(
            path = %path.display(),
            keys = table.values.len(),
            ignored = table.foreign.len(),
            "preference namespace loaded"
        );
        Ok(Self {
            path,
            table: Mutex::new(table),
        })
    }

    /// Opens `<dir>/<namespace>.toml`.
    ///
    /// # Errors
    ///
    /// Same as [`TomlFileStore::open`].
    pub fn open_in(dir: &Path, namespace: &str) -> Result<Self, StoreError> {
        Self::open(dir.join(format!("{namespace}.toml")))
    }

    /// Opens `namespace` under the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoPlatformConfigDir`] if the directory cannot be
    /// determined, otherwise the same as [`TomlFileStore::open`].
    pub fn open_namespace(namespace: &str) -> Result<Self, StoreError> {
        Self::open_in(&config_dir()?, namespace)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn table(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for TomlFileStore {
    fn get(&self, key: &str) -> Option<PrefValue> {
        self.table().values.get(key).cloned()
    }

    fn contains(&self, key: &str) -> bool {
        self.table().values.contains_key(key)
    }

    fn put(&self, key: &str, value: PrefValue) {
        let mut table = self.table();
        table.foreign.remove(key);
        table.values.insert(key.to_string(), value);
        table.dirty = true;
    }

    fn remove(&self, key: &str) {
        let mut table = self.table();
        let had_value = table.values.remove(key).is_some();
        let had_foreign = table.foreign.remove(key).is_some();
        if had_value || had_foreign {
            table.dirty = true;
        }
    }

    /// Rewrites the namespace file when anything changed since the last commit.
    ///
    /// Creates the parent directory if it does not exist.
    fn commit(&self) -> Result<(), StoreError> {
        let mut table = self.table();
        if !table.dirty {
            return Ok(());
        }

        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|source| StoreError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string_pretty(&table.to_toml())
            .map_err(|e| StoreError::Serialize(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        table.dirty = false;
        debug!(path = %self.path.display(), "preference namespace committed");
        Ok(())
    }
}

/// Determines the platform-appropriate directory for the namespace files.
///
/// # Errors
///
/// Returns [`StoreError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, StoreError> {
    platform_config_dir().ok_or(StoreError::NoPlatformConfigDir)
}

fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("CallerInfo"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("callerinfo"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("CallerInfo")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}
