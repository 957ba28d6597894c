//! Integration tests: the settings store over TOML-file namespaces.
//!
//! These exercise the full path a host takes at startup: open both
//! namespace files, build the store, write through it, and read the values
//! back from a freshly opened store.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use uuid::Uuid;

use callerinfo_core::{DeviceIdentifierGenerator, KeyValueStore};
use callerinfo_settings::infrastructure::default_host_context;
use callerinfo_settings::infrastructure::display::FixedDisplayMetrics;
use callerinfo_settings::infrastructure::storage::toml_file::{
    TomlFileStore, GENERAL_NAMESPACE, WINDOW_NAMESPACE,
};
use callerinfo_settings::{Settings, SettingsStore};

struct CountingGenerator(std::sync::atomic::AtomicUsize);

impl DeviceIdentifierGenerator for CountingGenerator {
    fn generate(&self) -> String {
        let n = self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        format!("generated-{n}")
    }
}

fn temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("callerinfo_it_{}", Uuid::new_v4()))
}

fn open_store(dir: &Path, generator: Arc<CountingGenerator>) -> SettingsStore {
    let general = TomlFileStore::open_in(dir, GENERAL_NAMESPACE).expect("open general");
    let window = TomlFileStore::open_in(dir, WINDOW_NAMESPACE).expect("open window");
    let mut ctx = default_host_context(
        Arc::new(general),
        Arc::new(window),
        Arc::new(FixedDisplayMetrics::single_1080p()),
    );
    ctx.id_generator = generator;
    SettingsStore::new(ctx)
}

#[test]
fn test_written_settings_survive_reopening() {
    // Arrange
    let dir = temp_dir();
    let generator = Arc::new(CountingGenerator(Default::default()));
    let store = open_store(&dir, Arc::clone(&generator));

    // Act
    store.set_eula().expect("eula");
    store.set_window(10, 20).expect("window");
    store.add_padding_mark("10086").expect("add");
    store.add_padding_mark("95555").expect("add");
    store.remove_padding_mark("10086").expect("remove");
    store.update_last_schedule_time(1_700_000_000_000).expect("schedule");
    let uid = store.uid().expect("uid");
    drop(store);

    let reopened = open_store(&dir, Arc::clone(&generator));

    // Assert
    assert!(reopened.is_eula_set());
    assert_eq!(reopened.window_x(), 10);
    assert_eq!(reopened.window_y(), 20);
    assert_eq!(reopened.padding_marks().expect("marks"), vec!["95555"]);
    assert_eq!(reopened.last_schedule_time(), 1_700_000_000_000);
    assert_eq!(reopened.uid().expect("uid"), uid);
    assert_eq!(
        generator.0.load(std::sync::atomic::Ordering::SeqCst),
        1,
        "identifier must be generated once across both stores"
    );

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_window_position_is_written_to_its_own_file() {
    let dir = temp_dir();
    let store = open_store(&dir, Arc::new(CountingGenerator(Default::default())));

    store.set_window(3, 4).expect("window");

    let general = TomlFileStore::open_in(&dir, GENERAL_NAMESPACE).expect("general");
    let window = TomlFileStore::open_in(&dir, WINDOW_NAMESPACE).expect("window");
    assert!(!general.contains("x"));
    assert!(window.contains("x"));
    assert!(window.contains("y"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_hand_edited_file_values_are_read_as_is() {
    // Arrange: a settings screen (or a user) wrote the file directly.
    let dir = temp_dir();
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("general.toml"),
        r#"
window_height = 300
ignore_regex = "1* 2*"
hangup_keyword = "   "
auto_report = false
"#,
    )
    .unwrap();

    // Act
    let store = open_store(&dir, Arc::new(CountingGenerator(Default::default())));

    // Assert
    assert_eq!(store.window_height(), 300);
    assert_eq!(store.ignore_regex(), "1[0-9]|2[0-9]");
    assert_eq!(
        store.keywords(),
        callerinfo_core::domain::keys::DEFAULT_HANGUP_KEYWORDS
    );
    assert!(!store.is_auto_report_enabled());
    assert_eq!(store.default_height(), 240);

    std::fs::remove_dir_all(&dir).ok();
}
