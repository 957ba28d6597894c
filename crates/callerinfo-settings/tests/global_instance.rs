//! Integration test for the process-wide settings instance.
//!
//! Kept in its own test binary, and as a single test, because the instance
//! is global to the process: the "before init" assertion must run first.

use std::sync::Arc;

use callerinfo_core::{KeyValueStore, PrefValue, SettingsError};
use callerinfo_settings::infrastructure::default_host_context;
use callerinfo_settings::infrastructure::display::FixedDisplayMetrics;
use callerinfo_settings::infrastructure::storage::memory::MemoryStore;
use callerinfo_settings::{init, instance, Settings};

#[test]
fn test_instance_fails_before_init_and_repeated_init_is_ignored() {
    // Before init: hard failure, no silent default store.
    assert!(matches!(instance(), Err(SettingsError::NotInitialized)));

    // First init installs the store.
    let general = Arc::new(MemoryStore::new());
    general.put("window_text_size", PrefValue::Int(24));
    let first = init(default_host_context(
        general,
        Arc::new(MemoryStore::new()),
        Arc::new(FixedDisplayMetrics::new(1080, 1000)),
    ));
    assert_eq!(first.default_height(), 125);
    assert_eq!(first.text_size(), 24);

    // Second init is a no-op: the original store and its metrics stay.
    let second = init(default_host_context(
        Arc::new(MemoryStore::new()),
        Arc::new(MemoryStore::new()),
        Arc::new(FixedDisplayMetrics::new(1080, 8)),
    ));
    assert!(std::ptr::eq(first, second));
    assert_eq!(second.default_height(), 125);

    // instance() now returns the same store.
    let fetched = instance().expect("initialized");
    assert!(std::ptr::eq(first, fetched));
    assert_eq!(fetched.text_size(), 24);
}
