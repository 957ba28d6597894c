//! Application layer of the settings crate.
//!
//! - **`settings_store`** – The [`Settings`](settings_store::Settings) accessor
//!   contract and its implementation, [`SettingsStore`](settings_store::SettingsStore),
//!   which reads and writes the two preference namespaces through the ports
//!   defined in `callerinfo_core`.
//!
//! - **`global`** – The process-wide instance: explicit `init`, then
//!   `instance` from anywhere.
//!
//! **Dependency rule**: this layer depends on `callerinfo_core` only.  The
//! concrete adapters in `infrastructure` are handed in through
//! [`HostContext`](settings_store::HostContext).

pub mod global;
pub mod settings_store;
