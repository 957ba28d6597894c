//! Domain entities for the settings layer.
//!
//! Pure logic only: nothing in here touches a file, a display, or a clock.
//! Outer layers depend on these types; these types never depend on them.

/// Persisted key names and their canonical defaults.
pub mod keys;

/// Duplicate-free padding-mark number list and its JSON codec.
pub mod padding;

/// Textual transforms applied to user-entered filter strings.
pub mod pattern;

/// The value model stored in a preference namespace.
pub mod value;
