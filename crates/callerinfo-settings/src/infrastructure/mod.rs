//! Infrastructure layer for the settings crate.
//!
//! Contains adapters for the host collaborators the settings store consumes.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `callerinfo_core`, but MUST NOT be imported by the `application` layer.
//!
//! # Sub-modules
//!
//! - **`storage`** – preference namespaces: in-memory and TOML file.
//! - **`display`** – fixed display metrics provider.
//! - **`device_id`** – UUID-based device identifier generator.
//! - **`classifier`** – category name → type code table.
//! - **`key_names`** – symbolic key → persistence key resolvers.

use std::sync::Arc;

use callerinfo_core::{DisplayMetricsProvider, JsonStringListCodec, KeyValueStore};

use crate::application::settings_store::HostContext;

pub mod classifier;
pub mod device_id;
pub mod display;
pub mod key_names;
pub mod storage;

/// Builds a [`HostContext`] from the two namespaces and a display provider,
/// using the default adapter for every other collaborator.
pub fn default_host_context(
    general: Arc<dyn KeyValueStore>,
    window: Arc<dyn KeyValueStore>,
    display: Arc<dyn DisplayMetricsProvider>,
) -> HostContext {
    HostContext {
        general,
        window,
        display,
        id_generator: Arc::new(device_id::UuidGenerator),
        key_names: Arc::new(key_names::DefaultKeyNames),
        classifier: Arc::new(classifier::TableClassifier::default()),
        codec: Arc::new(JsonStringListCodec),
        build_version: build_version_code(),
    }
}

/// Integer build version derived from the crate version: `major * 10000 +
/// minor * 100 + patch`.
pub fn build_version_code() -> i32 {
    let part = |s: &str| s.parse::<i32>().unwrap_or(0);
    part(env!("CARGO_PKG_VERSION_MAJOR")) * 10_000
        + part(env!("CARGO_PKG_VERSION_MINOR")) * 100
        + part(env!("CARGO_PKG_VERSION_PATCH"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_version_code_matches_crate_version() {
        // Workspace version is 0.1.0.
        assert_eq!(build_version_code(), 100);
    }
}
