//! CallerInfo settings inspector — entry point.
//!
//! Opens the general and window namespaces from the config directory,
//! initializes the process-wide settings store over them, and prints every
//! resolved setting as JSON.  Useful for checking what a host will see
//! without starting the host.
//!
//! # Usage
//!
//! ```text
//! callerinfo-settings [OPTIONS]
//!
//! Options:
//!   --config-dir    <DIR>  Directory holding general.toml / window.toml
//!                          [default: platform config directory]
//!   --key-names     <FILE> TOML table overriding persistence key names
//!   --screen-width  <PX>   Screen width reported to the store [default: 1080]
//!   --screen-height <PX>   Screen height reported to the store [default: 1920]
//!   --uid                  Also resolve the device identifier (generates and
//!                          persists one on first run)
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable                    | Description                  |
//! |-----------------------------|------------------------------|
//! | `CALLERINFO_CONFIG_DIR`     | Namespace directory          |
//! | `CALLERINFO_SCREEN_WIDTH`   | Screen width in pixels       |
//! | `CALLERINFO_SCREEN_HEIGHT`  | Screen height in pixels      |
//! | `RUST_LOG`                  | `tracing` filter (`info`)    |

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use callerinfo_settings::infrastructure::default_host_context;
use callerinfo_settings::infrastructure::display::FixedDisplayMetrics;
use callerinfo_settings::infrastructure::key_names::KeyNameTable;
use callerinfo_settings::infrastructure::storage::toml_file::{
    self, TomlFileStore, GENERAL_NAMESPACE, WINDOW_NAMESPACE,
};
use callerinfo_settings::{init, Settings};

/// Print the resolved CallerInfo settings as JSON.
#[derive(Debug, Parser)]
#[command(
    name = "callerinfo-settings",
    about = "Inspect resolved CallerInfo settings",
    version
)]
struct Cli {
    /// Directory holding the namespace files.
    #[arg(long, env = "CALLERINFO_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// TOML file overriding persistence key names.
    #[arg(long)]
    key_names: Option<PathBuf>,

    #[arg(long, default_value_t = 1080, env = "CALLERINFO_SCREEN_WIDTH")]
    screen_width: i32,

    #[arg(long, default_value_t = 1920, env = "CALLERINFO_SCREEN_HEIGHT")]
    screen_height: i32,

    /// Also resolve the device identifier.
    #[arg(long)]
    uid: bool,
}

/// Serializable view of every resolved setting.
#[derive(Debug, Serialize)]
struct Snapshot {
    screen_width: i32,
    screen_height: i32,
    eula: bool,
    window_height: i32,
    default_height: i32,
    window_close_anim: bool,
    window_trans_back_only: bool,
    window_text_color: bool,
    window_text_padding: i32,
    window_text_alignment: i32,
    window_text_size: i32,
    window_transparent: i32,
    disable_move: bool,
    auto_report: bool,
    enable_marking: bool,
    padding_mark_numbers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    uid: Option<String>,
    last_schedule_time: i64,
    hide_when_touch: bool,
    ignore_regex: String,
    hide_when_off_hook: bool,
    display_on_outgoing: bool,
    ignore_known_contact: bool,
    contact_offline: bool,
    auto_hangup: bool,
    add_call_log: bool,
    catch_crash: bool,
    force_chinese: bool,
    hangup_keyword: String,
    hangup_geo_keyword: String,
    hangup_number_keyword: String,
    window_x: i32,
    window_y: i32,
}

impl Snapshot {
    fn capture(s: &dyn Settings, with_uid: bool) -> anyhow::Result<Self> {
        let uid = if with_uid {
            Some(s.uid().context("resolving device identifier")?)
        } else {
            None
        };
        Ok(Self {
            screen_width: s.screen_width(),
            screen_height: s.screen_height(),
            eula: s.is_eula_set(),
            window_height: s.window_height(),
            default_height: s.default_height(),
            window_close_anim: s.is_show_close_anim(),
            window_trans_back_only: s.is_trans_back_only(),
            window_text_color: s.is_enable_text_color(),
            window_text_padding: s.text_padding(),
            window_text_alignment: s.text_alignment(),
            window_text_size: s.text_size(),
            window_transparent: s.window_transparent(),
            disable_move: s.is_disable_move(),
            auto_report: s.is_auto_report_enabled(),
            enable_marking: s.is_marking_enabled(),
            padding_mark_numbers: s.padding_marks().context("reading padding marks")?,
            uid,
            last_schedule_time: s.last_schedule_time(),
            hide_when_touch: s.is_hiding_when_touch(),
            ignore_regex: s.ignore_regex(),
            hide_when_off_hook: s.is_hiding_off_hook(),
            display_on_outgoing: s.is_showing_on_outgoing(),
            ignore_known_contact: s.is_ignore_known_contact(),
            contact_offline: s.is_showing_contact_offline(),
            auto_hangup: s.is_auto_hangup(),
            add_call_log: s.is_adding_call_log(),
            catch_crash: s.is_catch_crash(),
            force_chinese: s.is_force_chinese(),
            hangup_keyword: s.keywords(),
            hangup_geo_keyword: s.geo_keyword(),
            hangup_number_keyword: s.number_keyword(),
            window_x: s.window_x(),
            window_y: s.window_y(),
        })
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let dir = match cli.config_dir {
        Some(dir) => dir,
        None => toml_file::config_dir().context("resolving config directory")?,
    };
    info!(dir = %dir.display(), "opening preference namespaces");

    let general = TomlFileStore::open_in(&dir, GENERAL_NAMESPACE)
        .context("opening general namespace")?;
    let window =
        TomlFileStore::open_in(&dir, WINDOW_NAMESPACE).context("opening window namespace")?;

    let mut ctx = default_host_context(
        Arc::new(general),
        Arc::new(window),
        Arc::new(FixedDisplayMetrics::new(cli.screen_width, cli.screen_height)),
    );
    if let Some(path) = cli.key_names {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("reading key-name table {}", path.display()))?;
        ctx.key_names = Arc::new(KeyNameTable::from_toml_str(&content)?);
    }

    let settings = init(ctx);
    let snapshot = Snapshot::capture(settings, cli.uid)?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
