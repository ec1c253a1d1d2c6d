//! Wall-clock access for cache staleness stamps.
//!
//! Staleness math itself lives on [`crate::state::cache::RemoteCache`] and
//! takes explicit timestamps; this shim only supplies "now" at the action
//! boundary, from `Date.now()` in the browser and `SystemTime` elsewhere.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Current wall-clock time in milliseconds since the Unix epoch.
///
/// Millisecond `f64` is the browser's native timestamp unit; the native
/// fallback keeps SSR and test builds on the same scale.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| {
                #[allow(clippy::cast_precision_loss)]
                {
                    elapsed.as_millis() as f64
                }
            })
            .unwrap_or(0.0)
    }
}
