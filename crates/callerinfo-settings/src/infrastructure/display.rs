//! Display metrics adapters.
//!
//! The settings store reads the screen size once, when it is built, to
//! derive the default floating-window height.  The real size comes from the
//! host's window manager; this module provides the fixed provider used by
//! tests, the diagnostic binary, and hosts that already know their size.

use callerinfo_core::{DisplayMetrics, DisplayMetricsProvider};

/// A provider that always reports the size given at construction.
///
/// # Example
///
/// ```ignore
/// let display = FixedDisplayMetrics::single_1080p();
/// assert_eq!(display.current_screen_size().height, 1920);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedDisplayMetrics {
    metrics: DisplayMetrics,
}

impl FixedDisplayMetrics {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            metrics: DisplayMetrics { width, height },
        }
    }

    /// A 1080×1920 portrait phone screen, the most common test fixture.
    pub fn single_1080p() -> Self {
        Self::new(1080, 1920)
    }
}

impl DisplayMetricsProvider for FixedDisplayMetrics {
    fn current_screen_size(&self) -> DisplayMetrics {
        self.metrics
    }
}
