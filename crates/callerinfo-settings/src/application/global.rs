//! The process-wide settings instance.
//!
//! Initialization is explicit: the host calls [`init`] once during startup
//! with its collaborators, and everything else fetches the store with
//! [`instance`].  The two calls are intentionally asymmetric:
//!
//! - Calling `init` again is a silent no-op; the first store stays in place.
//! - Calling `instance` before `init` is an error, so a setup-ordering bug
//!   surfaces immediately instead of being hidden behind default values.
//!
//! The store lives until the process exits.

use std::sync::OnceLock;

use tracing::{debug, info};

use callerinfo_core::SettingsError;

use super::settings_store::{HostContext, SettingsStore};

static INSTANCE: OnceLock<SettingsStore> = OnceLock::new();

/// Builds the process-wide store from `ctx` unless one already exists.
///
/// Returns the installed store either way.  When a store already exists,
/// `ctx` is dropped without querying any of its collaborators.
pub fn init(ctx: HostContext) -> &'static SettingsStore {
    let mut created = false;
    let store = INSTANCE.get_or_init(|| {
        created = true;
        SettingsStore::new(ctx)
    });
    if created {
        info!("settings initialized");
    } else {
        debug!("settings already initialized; ignoring repeated init");
    }
    store
}

/// Returns the process-wide store.
///
/// # Errors
///
/// Returns [`SettingsError::NotInitialized`] if [`init`] has not run yet.
pub fn instance() -> Result<&'static SettingsStore, SettingsError> {
    INSTANCE.get().ok_or(SettingsError::NotInitialized)
}
