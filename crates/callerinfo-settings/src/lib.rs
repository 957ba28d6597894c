//! callerinfo-settings library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does this crate do?
//!
//! It centralizes every read and write of CallerInfo's user preferences:
//! floating-window geometry and look, call-filtering rules, feature toggles,
//! the device identifier, and the list of padding-mark numbers.  Values
//! live in two independent key-value namespaces owned by the host:
//!
//! - **general** – every preference except the window position.
//! - **window**  – the floating window's `x`/`y` coordinates.
//!
//! A single [`SettingsStore`] is set up once per process with [`init`] and
//! fetched anywhere with [`instance`].  Reading an unset key never fails; it
//! returns that field's canonical default.

/// Application layer: the settings facade and its process-wide instance.
pub mod application;

/// Infrastructure layer: adapters for the host collaborators.
pub mod infrastructure;

pub use application::global::{init, instance};
pub use application::settings_store::{HostContext, Settings, SettingsStore};
