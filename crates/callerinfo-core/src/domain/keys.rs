//! Persisted key names and their canonical defaults.
//!
//! Most keys are *resolvable*: the settings facade asks a
//! [`KeyNameResolver`](crate::ports::KeyNameResolver) for the persistence key
//! of a [`SettingKey`], so the stored names can be versioned independently
//! of the code.  A handful of keys are fixed literals that never go through
//! the resolver; they are the `*_KEY` constants below.
//!
//! | Namespace | Key                      | Type   | Default             |
//! |-----------|--------------------------|--------|---------------------|
//! | general   | `eula`                   | bool   | `false`             |
//! | general   | `window_height`          | int    | screen height / 8   |
//! | general   | `window_close_anim`      | bool   | `true`              |
//! | general   | `window_trans_back_only` | bool   | `true`              |
//! | general   | `window_text_color`      | bool   | `false`             |
//! | general   | `window_text_padding`    | int    | `0`                 |
//! | general   | `window_text_alignment`  | int    | `1`                 |
//! | general   | `window_text_size`       | int    | `20`                |
//! | general   | `window_transparent`     | int    | `80`                |
//! | general   | `last_schedule_time`     | long   | `0`                 |
//! | general   | `hangup_keyword`         | string | [`DEFAULT_HANGUP_KEYWORDS`] |
//! | window    | `x`, `y`                 | int    | `-1`                |

/// Literal key of the EULA acceptance flag (general namespace).
pub const EULA_KEY: &str = "eula";
/// Literal key of the accepted EULA revision (general namespace).
pub const EULA_VERSION_KEY: &str = "eula_version";
/// Literal key of the build version that accepted the EULA (general namespace).
pub const BUILD_VERSION_KEY: &str = "version";
/// Literal key of the floating window's x coordinate (window namespace).
pub const WINDOW_X_KEY: &str = "x";
/// Literal key of the floating window's y coordinate (window namespace).
pub const WINDOW_Y_KEY: &str = "y";

/// EULA revision written alongside the acceptance flag.
pub const EULA_VERSION: i32 = 1;

/// Window coordinate meaning "never positioned".
pub const UNSET_WINDOW_COORD: i32 = -1;

/// Divisor applied to the screen height to get the default window height.
pub const DEFAULT_HEIGHT_DIVISOR: i32 = 8;

/// Keywords used by auto-hangup when the user leaves the field blank.
pub const DEFAULT_HANGUP_KEYWORDS: &str = "推销 广告 骚扰 诈骗";

/// Caller-ID window text padding when unset.
pub const DEFAULT_TEXT_PADDING: i32 = 0;
/// Caller-ID window text alignment code when unset.
pub const DEFAULT_TEXT_ALIGNMENT: i32 = 1;
/// Caller-ID window text size when unset.
pub const DEFAULT_TEXT_SIZE: i32 = 20;
/// Caller-ID window transparency percentage when unset.
pub const DEFAULT_WINDOW_TRANSPARENT: i32 = 80;
/// Last schedule time, in epoch milliseconds, before any run was recorded.
pub const DEFAULT_LAST_SCHEDULE_TIME: i64 = 0;

/// Every key whose persistence name is supplied by a resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingKey {
    WindowHeight,
    WindowCloseAnim,
    WindowTransBackOnly,
    WindowTextColor,
    WindowTextPadding,
    WindowTextAlignment,
    WindowTextSize,
    WindowTransparent,
    DisableMove,
    AutoReport,
    EnableMarking,
    PaddingMarkNumbers,
    Uid,
    LastScheduleTime,
    HideWhenTouch,
    IgnoreRegex,
    HideWhenOffHook,
    DisplayOnOutgoing,
    IgnoreKnownContact,
    ContactOffline,
    AutoHangup,
    AddCallLog,
    CatchCrash,
    ForceChinese,
    HangupKeyword,
    HangupGeoKeyword,
    HangupNumberKeyword,
}

impl SettingKey {
    /// All resolvable keys, in table order.
    pub const ALL: [SettingKey; 27] = [
        Self::WindowHeight,
        Self::WindowCloseAnim,
        Self::WindowTransBackOnly,
        Self::WindowTextColor,
        Self::WindowTextPadding,
        Self::WindowTextAlignment,
        Self::WindowTextSize,
        Self::WindowTransparent,
        Self::DisableMove,
        Self::AutoReport,
        Self::EnableMarking,
        Self::PaddingMarkNumbers,
        Self::Uid,
        Self::LastScheduleTime,
        Self::HideWhenTouch,
        Self::IgnoreRegex,
        Self::HideWhenOffHook,
        Self::DisplayOnOutgoing,
        Self::IgnoreKnownContact,
        Self::ContactOffline,
        Self::AutoHangup,
        Self::AddCallLog,
        Self::CatchCrash,
        Self::ForceChinese,
        Self::HangupKeyword,
        Self::HangupGeoKeyword,
        Self::HangupNumberKeyword,
    ];

    /// The symbolic name, also used as the persistence key by the default resolver.
    pub fn name(self) -> &'static str {
        match self {
            Self::WindowHeight => "window_height",
            Self::WindowCloseAnim => "window_close_anim",
            Self::WindowTransBackOnly => "window_trans_back_only",
            Self::WindowTextColor => "window_text_color",
            Self::WindowTextPadding => "window_text_padding",
            Self::WindowTextAlignment => "window_text_alignment",
            Self::WindowTextSize => "window_text_size",
            Self::WindowTransparent => "window_transparent",
            Self::DisableMove => "disable_move",
            Self::AutoReport => "auto_report",
            Self::EnableMarking => "enable_marking",
            Self::PaddingMarkNumbers => "padding_mark_numbers",
            Self::Uid => "uid",
            Self::LastScheduleTime => "last_schedule_time",
            Self::HideWhenTouch => "hide_when_touch",
            Self::IgnoreRegex => "ignore_regex",
            Self::HideWhenOffHook => "hide_when_off_hook",
            Self::DisplayOnOutgoing => "display_on_outgoing",
            Self::IgnoreKnownContact => "ignore_known_contact",
            Self::ContactOffline => "contact_offline",
            Self::AutoHangup => "auto_hangup",
            Self::AddCallLog => "add_call_log",
            Self::CatchCrash => "catch_crash",
            Self::ForceChinese => "force_chinese",
            Self::HangupKeyword => "hangup_keyword",
            Self::HangupGeoKeyword => "hangup_geo_keyword",
            Self::HangupNumberKeyword => "hangup_number_keyword",
        }
    }

    /// Looks a key up by its symbolic name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }

    /// Canonical default for boolean toggles; `None` for non-boolean keys.
    pub fn default_bool(self) -> Option<bool> {
        match self {
            Self::WindowCloseAnim | Self::WindowTransBackOnly => Some(true),
            Self::AutoReport | Self::EnableMarking => Some(true),
            Self::WindowTextColor
            | Self::DisableMove
            | Self::HideWhenTouch
            | Self::HideWhenOffHook
            | Self::DisplayOnOutgoing
            | Self::IgnoreKnownContact
            | Self::ContactOffline
            | Self::AutoHangup
            | Self::AddCallLog
            | Self::CatchCrash
            | Self::ForceChinese => Some(false),
            _ => None,
        }
    }
}

impl std::fmt::Display for SettingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
