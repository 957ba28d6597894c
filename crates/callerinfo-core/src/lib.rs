//! # callerinfo-core
//!
//! Shared foundation for the CallerInfo settings layer: the preference value
//! model, the table of persisted keys with their defaults, the narrow ports
//! through which the settings facade reaches its host, and the small pure
//! transforms applied to stored values.
//!
//! It has zero dependencies on file systems, display servers, or any host
//! runtime.  Adapters for those live in `callerinfo-settings`.
//!
//! # Architecture overview
//!
//! - **`domain`** – Pure business logic.  `PrefValue` is what a namespace
//!   stores; `SettingKey` names every resolvable key; `PaddingMarks` is the
//!   duplicate-free number list; `pattern` turns user input into regex
//!   fragments and keyword strings.
//!
//! - **`ports`** – Traits for every collaborator the settings facade
//!   consumes: key-value namespaces, display metrics, identifier generation,
//!   key-name resolution, category classification, and list encoding.
//!
//! - **`error`** – The error taxonomy shared by both crates.

pub mod domain;
pub mod error;
pub mod ports;

// Re-export the most-used types at the crate root so callers can write
// `callerinfo_core::PrefValue` instead of `callerinfo_core::domain::value::PrefValue`.
pub use domain::keys::SettingKey;
pub use domain::padding::{JsonStringListCodec, PaddingMarks};
pub use domain::value::PrefValue;
pub use error::{SettingsError, StoreError};
pub use ports::{
    CategoryClassifier, DeviceIdentifierGenerator, DisplayMetrics, DisplayMetricsProvider,
    KeyNameResolver, KeyValueStore, KeyValueStoreExt, StringListCodec,
};
