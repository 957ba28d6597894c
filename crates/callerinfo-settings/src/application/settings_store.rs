//! SettingsStore: typed access to the general and window namespaces.
//!
//! # Read policy
//!
//! Every getter resolves its key, reads it from the namespace, and returns
//! the field's canonical default when the key is absent (or holds a value
//! of the wrong kind).  Nothing is validated beyond that: a value written by
//! another collaborator, such as the settings screen, is trusted as-is.
//!
//! Two keys use an explicit presence check instead of a typed default:
//! the padding-mark list (absent means an empty list) and the device
//! identifier (absent means "generate one now").  A stored identifier that
//! is not a non-blank string counts as absent and is replaced.
//!
//! # Write policy
//!
//! A logical update stages all of its keys with `put` and then commits once.
//! `set_eula` writes three keys and `set_window` writes two; neither is
//! atomic across keys beyond what the namespace's own `commit` provides.
//!
//! # Read-modify-write sequences
//!
//! Adding or removing a padding mark decodes the whole list, edits it, and
//! writes the whole blob back.  Fetching the identifier for the first time
//! checks, generates, and persists.  Both sequences run under one
//! store-wide mutex, so two callers sharing this store cannot lose an
//! update or persist two identifiers.  Writers that bypass this store and
//! touch the namespace directly are not covered.
//!
//! When the commit at the end of either sequence fails, the staged value is
//! rolled back so the namespace still holds what it held before the call.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use callerinfo_core::domain::keys::{
    self, SettingKey, BUILD_VERSION_KEY, DEFAULT_HANGUP_KEYWORDS, EULA_KEY, EULA_VERSION,
    EULA_VERSION_KEY, UNSET_WINDOW_COORD, WINDOW_X_KEY, WINDOW_Y_KEY,
};
use callerinfo_core::domain::pattern::{ignore_pattern_to_regex, keywords_or_default};
use callerinfo_core::{
    CategoryClassifier, DeviceIdentifierGenerator, DisplayMetrics, DisplayMetricsProvider,
    KeyNameResolver, KeyValueStore, KeyValueStoreExt, PaddingMarks, PrefValue, SettingsError,
    StringListCodec,
};

// ── Accessor contract ─────────────────────────────────────────────────────────

/// The full settings accessor surface.
///
/// Callers depend on this trait rather than on [`SettingsStore`] so they can
/// be tested against a mock.
pub trait Settings: Send + Sync {
    /// Screen width captured when the store was built.
    fn screen_width(&self) -> i32;
    /// Screen height captured when the store was built.
    fn screen_height(&self) -> i32;

    fn is_eula_set(&self) -> bool;
    /// Records EULA acceptance together with the EULA revision and build version.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Store`] if the commit fails.
    fn set_eula(&self) -> Result<(), SettingsError>;

    /// Floating window height, defaulting to [`Settings::default_height`].
    fn window_height(&self) -> i32;
    /// One eighth of the screen height, truncated.
    fn default_height(&self) -> i32;
    fn is_show_close_anim(&self) -> bool;
    fn is_trans_back_only(&self) -> bool;
    fn is_enable_text_color(&self) -> bool;
    fn text_padding(&self) -> i32;
    fn text_alignment(&self) -> i32;
    fn text_size(&self) -> i32;
    fn window_transparent(&self) -> i32;
    fn is_disable_move(&self) -> bool;
    fn is_auto_report_enabled(&self) -> bool;
    fn is_marking_enabled(&self) -> bool;

    /// Adds `number` to the padding-mark list unless it is already there.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Decode`] if the stored list is malformed (the
    /// blob is left untouched) or [`SettingsError::Store`] if the commit fails.
    fn add_padding_mark(&self, number: &str) -> Result<(), SettingsError>;
    /// Removes `number` from the padding-mark list if present.
    ///
    /// # Errors
    ///
    /// Same as [`Settings::add_padding_mark`].
    fn remove_padding_mark(&self, number: &str) -> Result<(), SettingsError>;
    /// The padding-mark list, empty when never written.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Decode`] if the stored list is malformed.
    fn padding_marks(&self) -> Result<Vec<String>, SettingsError>;

    /// The device identifier, generated and persisted on first access.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Store`] if persisting a fresh identifier
    /// fails; nothing is left staged in that case.
    fn uid(&self) -> Result<String, SettingsError>;

    /// Integer type code for a category name.
    fn type_from_name(&self, name: &str) -> i32;

    /// # Errors
    ///
    /// Returns [`SettingsError::Store`] if the commit fails.
    fn update_last_schedule_time(&self, timestamp_ms: i64) -> Result<(), SettingsError>;
    /// Same as [`Settings::update_last_schedule_time`] with the current wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Store`] if the commit fails.
    fn update_last_schedule_time_now(&self) -> Result<(), SettingsError> {
        self.update_last_schedule_time(chrono::Utc::now().timestamp_millis())
    }
    /// Milliseconds since the epoch of the last scheduled run; `0` means never.
    fn last_schedule_time(&self) -> i64;

    fn is_hiding_when_touch(&self) -> bool;
    /// The stored ignore pattern as a regex fragment (`*` -> `[0-9]`, space -> `|`).
    fn ignore_regex(&self) -> String;
    fn is_hiding_off_hook(&self) -> bool;
    fn is_showing_on_outgoing(&self) -> bool;
    fn is_ignore_known_contact(&self) -> bool;
    fn is_showing_contact_offline(&self) -> bool;
    fn is_auto_hangup(&self) -> bool;
    fn is_adding_call_log(&self) -> bool;
    fn is_catch_crash(&self) -> bool;
    fn is_force_chinese(&self) -> bool;
    /// Auto-hangup keywords, trimmed; blank falls back to the default keywords.
    fn keywords(&self) -> String;
    fn geo_keyword(&self) -> String;
    fn number_keyword(&self) -> String;

    /// Window x coordinate, `-1` when never positioned.
    fn window_x(&self) -> i32;
    /// Window y coordinate, `-1` when never positioned.
    fn window_y(&self) -> i32;
    /// Stores both window coordinates in one commit.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Store`] if the commit fails.
    fn set_window(&self, x: i32, y: i32) -> Result<(), SettingsError>;
}

// ── Host context ──────────────────────────────────────────────────────────────

/// Every host collaborator the store needs, handed over at construction.
///
/// `infrastructure::default_host_context` fills in the adapters that have a
/// sensible default and leaves the namespaces and display to the caller.
#[derive(Clone)]
pub struct HostContext {
    /// General preferences namespace.
    pub general: Arc<dyn KeyValueStore>,
    /// Window position namespace.
    pub window: Arc<dyn KeyValueStore>,
    pub display: Arc<dyn DisplayMetricsProvider>,
    pub id_generator: Arc<dyn DeviceIdentifierGenerator>,
    pub key_names: Arc<dyn KeyNameResolver>,
    pub classifier: Arc<dyn CategoryClassifier>,
    pub codec: Arc<dyn StringListCodec>,
    /// Build version recorded when the EULA is accepted.
    pub build_version: i32,
}

// ── SettingsStore ─────────────────────────────────────────────────────────────

/// Typed facade over the general and window preference namespaces.
pub struct SettingsStore {
    general: Arc<dyn KeyValueStore>,
    window: Arc<dyn KeyValueStore>,
    id_generator: Arc<dyn DeviceIdentifierGenerator>,
    key_names: Arc<dyn KeyNameResolver>,
    classifier: Arc<dyn CategoryClassifier>,
    codec: Arc<dyn StringListCodec>,
    build_version: i32,
    /// Captured once; rotation is not tracked.
    metrics: DisplayMetrics,
    /// Serializes the read-modify-write sequences.
    mutation: Mutex<()>,
}

impl SettingsStore {
    /// Builds a store, querying the display metrics exactly once.
    pub fn new(ctx: HostContext) -> Self {
        let metrics = ctx.display.current_screen_size();
        debug!(width = metrics.width, height = metrics.height, "settings store created");
        Self {
            general: ctx.general,
            window: ctx.window,
            id_generator: ctx.id_generator,
            key_names: ctx.key_names,
            classifier: ctx.classifier,
            codec: ctx.codec,
            build_version: ctx.build_version,
            metrics,
            mutation: Mutex::new(()),
        }
    }

    fn key(&self, key: SettingKey) -> String {
        self.key_names.resolve(key).into_owned()
    }

    fn flag(&self, key: SettingKey) -> bool {
        let default = key.default_bool().unwrap_or(false);
        self.general.get_bool(&self.key(key), default)
    }

    fn int(&self, key: SettingKey, default: i32) -> i32 {
        self.general.get_int(&self.key(key), default)
    }

    fn string(&self, key: SettingKey) -> String {
        self.general.get_string(&self.key(key), "")
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        // The guard protects no data, so a poisoned lock is still usable.
        self.mutation.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn load_padding_marks(&self, key: &str) -> Result<PaddingMarks, SettingsError> {
        if !self.general.contains(key) {
            return Ok(PaddingMarks::new());
        }
        let raw = self.general.get_string(key, "");
        if raw.trim().is_empty() {
            return Ok(PaddingMarks::new());
        }
        let decoded = self.codec.decode(&raw)?;
        Ok(PaddingMarks::from_decoded(decoded))
    }

    fn store_padding_marks(&self, key: &str, marks: &PaddingMarks) -> Result<(), SettingsError> {
        let encoded = self.codec.encode(marks.as_slice())?;
        self.put_and_commit(key, PrefValue::Str(encoded))
    }

    /// Writes one general key and commits, restoring the previous value if
    /// the commit fails.
    fn put_and_commit(&self, key: &str, value: PrefValue) -> Result<(), SettingsError> {
        let previous = self.general.get(key);
        self.general.put(key, value);
        if let Err(e) = self.general.commit() {
            match previous {
                Some(old) => self.general.put(key, old),
                None => self.general.remove(key),
            }
            warn!(key, error = %e, "commit failed; staged value rolled back");
            return Err(e.into());
        }
        Ok(())
    }
}

impl Settings for SettingsStore {
    fn screen_width(&self) -> i32 {
        self.metrics.width
    }

    fn screen_height(&self) -> i32 {
        self.metrics.height
    }

    fn is_eula_set(&self) -> bool {
        self.general.get_bool(EULA_KEY, false)
    }

    fn set_eula(&self) -> Result<(), SettingsError> {
        self.general.put(EULA_KEY, PrefValue::Bool(true));
        self.general.put(EULA_VERSION_KEY, PrefValue::Int(EULA_VERSION));
        self.general.put(BUILD_VERSION_KEY, PrefValue::Int(self.build_version));
        self.general.commit()?;
        debug!(build_version = self.build_version, "EULA accepted");
        Ok(())
    }

    fn window_height(&self) -> i32 {
        self.int(SettingKey::WindowHeight, self.default_height())
    }

    fn default_height(&self) -> i32 {
        self.metrics.height / keys::DEFAULT_HEIGHT_DIVISOR
    }

    fn is_show_close_anim(&self) -> bool {
        self.flag(SettingKey::WindowCloseAnim)
    }

    fn is_trans_back_only(&self) -> bool {
        self.flag(SettingKey::WindowTransBackOnly)
    }

    fn is_enable_text_color(&self) -> bool {
        self.flag(SettingKey::WindowTextColor)
    }

    fn text_padding(&self) -> i32 {
        self.int(SettingKey::WindowTextPadding, keys::DEFAULT_TEXT_PADDING)
    }

    fn text_alignment(&self) -> i32 {
        self.int(SettingKey::WindowTextAlignment, keys::DEFAULT_TEXT_ALIGNMENT)
    }

    fn text_size(&self) -> i32 {
        self.int(SettingKey::WindowTextSize, keys::DEFAULT_TEXT_SIZE)
    }

    fn window_transparent(&self) -> i32 {
        self.int(SettingKey::WindowTransparent, keys::DEFAULT_WINDOW_TRANSPARENT)
    }

    fn is_disable_move(&self) -> bool {
        self.flag(SettingKey::DisableMove)
    }

    fn is_auto_report_enabled(&self) -> bool {
        self.flag(SettingKey::AutoReport)
    }

    fn is_marking_enabled(&self) -> bool {
        self.flag(SettingKey::EnableMarking)
    }

    fn add_padding_mark(&self, number: &str) -> Result<(), SettingsError> {
        let key = self.key(SettingKey::PaddingMarkNumbers);
        let _guard = self.lock();
        let mut marks = self.load_padding_marks(&key)?;
        if !marks.insert(number) {
            return Ok(());
        }
        self.store_padding_marks(&key, &marks)?;
        debug!(number, count = marks.len(), "padding mark added");
        Ok(())
    }

    fn remove_padding_mark(&self, number: &str) -> Result<(), SettingsError> {
        let key = self.key(SettingKey::PaddingMarkNumbers);
        let _guard = self.lock();
        let mut marks = self.load_padding_marks(&key)?;
        if !marks.remove(number) {
            return Ok(());
        }
        self.store_padding_marks(&key, &marks)?;
        debug!(number, count = marks.len(), "padding mark removed");
        Ok(())
    }

    fn padding_marks(&self) -> Result<Vec<String>, SettingsError> {
        let key = self.key(SettingKey::PaddingMarkNumbers);
        Ok(self.load_padding_marks(&key)?.into_vec())
    }

    fn uid(&self) -> Result<String, SettingsError> {
        let key = self.key(SettingKey::Uid);
        let _guard = self.lock();
        match self.general.get(&key) {
            Some(PrefValue::Str(stored)) if !stored.trim().is_empty() => return Ok(stored),
            Some(other) => warn!(key = %key, stored = ?other, "unusable device identifier; regenerating"),
            None => {}
        }
        let uid = self.id_generator.generate();
        self.put_and_commit(&key, PrefValue::Str(uid.clone()))?;
        debug!("device identifier generated and persisted");
        Ok(uid)
    }

    fn type_from_name(&self, name: &str) -> i32 {
        self.classifier.classify(name)
    }

    fn update_last_schedule_time(&self, timestamp_ms: i64) -> Result<(), SettingsError> {
        let key = self.key(SettingKey::LastScheduleTime);
        self.general.put(&key, PrefValue::Long(timestamp_ms));
        self.general.commit()?;
        Ok(())
    }

    fn last_schedule_time(&self) -> i64 {
        self.general.get_long(
            &self.key(SettingKey::LastScheduleTime),
            keys::DEFAULT_LAST_SCHEDULE_TIME,
        )
    }

    fn is_hiding_when_touch(&self) -> bool {
        self.flag(SettingKey::HideWhenTouch)
    }

    fn ignore_regex(&self) -> String {
        ignore_pattern_to_regex(&self.string(SettingKey::IgnoreRegex))
    }

    fn is_hiding_off_hook(&self) -> bool {
        self.flag(SettingKey::HideWhenOffHook)
    }

    fn is_showing_on_outgoing(&self) -> bool {
        self.flag(SettingKey::DisplayOnOutgoing)
    }

    fn is_ignore_known_contact(&self) -> bool {
        self.flag(SettingKey::IgnoreKnownContact)
    }

    fn is_showing_contact_offline(&self) -> bool {
        self.flag(SettingKey::ContactOffline)
    }

    fn is_auto_hangup(&self) -> bool {
        self.flag(SettingKey::AutoHangup)
    }

    fn is_adding_call_log(&self) -> bool {
        self.flag(SettingKey::AddCallLog)
    }

    fn is_catch_crash(&self) -> bool {
        self.flag(SettingKey::CatchCrash)
    }

    fn is_force_chinese(&self) -> bool {
        self.flag(SettingKey::ForceChinese)
    }

    fn keywords(&self) -> String {
        let raw = self
            .general
            .get_string(&self.key(SettingKey::HangupKeyword), DEFAULT_HANGUP_KEYWORDS);
        keywords_or_default(&raw, DEFAULT_HANGUP_KEYWORDS)
    }

    fn geo_keyword(&self) -> String {
        self.string(SettingKey::HangupGeoKeyword).trim().to_string()
    }

    fn number_keyword(&self) -> String {
        self.string(SettingKey::HangupNumberKeyword).trim().to_string()
    }

    fn window_x(&self) -> i32 {
        self.window.get_int(WINDOW_X_KEY, UNSET_WINDOW_COORD)
    }

    fn window_y(&self) -> i32 {
        self.window.get_int(WINDOW_Y_KEY, UNSET_WINDOW_COORD)
    }

    fn set_window(&self, x: i32, y: i32) -> Result<(), SettingsError> {
        self.window.put(WINDOW_X_KEY, PrefValue::Int(x));
        self.window.put(WINDOW_Y_KEY, PrefValue::Int(y));
        self.window.commit()?;
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
