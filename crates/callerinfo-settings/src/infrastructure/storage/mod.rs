//! Storage infrastructure: preference namespace adapters.
//!
//! - **`memory`** – [`MemoryStore`](memory::MemoryStore), a namespace that
//!   lives only in memory.  Used by tests and by hosts that persist
//!   elsewhere.
//! - **`toml_file`** – [`TomlFileStore`](toml_file::TomlFileStore), a
//!   namespace persisted as one TOML file in the platform config directory.

pub mod memory;
pub mod toml_file;
