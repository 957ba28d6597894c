//! Integration tests: typed reads through the public `callerinfo_core` API,
//! against a mocked namespace.

use callerinfo_core::{KeyValueStore, KeyValueStoreExt, PrefValue, StoreError};
use mockall::mock;

mock! {
    Namespace {}
    impl KeyValueStore for Namespace {
        fn get(&self, key: &str) -> Option<PrefValue>;
        fn contains(&self, key: &str) -> bool;
        fn put(&self, key: &str, value: PrefValue);
        fn remove(&self, key: &str);
        fn commit(&self) -> Result<(), StoreError>;
    }
}

#[test]
fn test_get_int_reads_key_once_and_returns_stored_value() {
    // Arrange
    let mut ns = MockNamespace::new();
    ns.expect_get()
        .withf(|key| key == "window_text_size")
        .times(1)
        .returning(|_| Some(PrefValue::Int(24)));

    // Act / Assert
    assert_eq!(ns.get_int("window_text_size", 20), 24);
}

#[test]
fn test_get_string_of_absent_key_returns_default() {
    let mut ns = MockNamespace::new();
    ns.expect_get().returning(|_| None);

    assert_eq!(ns.get_string("ignore_regex", ""), "");
}
