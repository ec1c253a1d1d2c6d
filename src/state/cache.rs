//! Fetch-cache bookkeeping shared by the remote-backed stores.
//!
//! DESIGN
//! ======
//! Every cacheable store holds the same four fields: the value, a loading
//! flag, the last error, and the time of the last successful fetch. The
//! transitions here are pure so the gate/outcome rules can be tested without
//! a network or a reactive runtime; the async actions in each store module
//! compose them around one `net::api` call.
//!
//! The loading flag doubles as the duplicate-fetch guard. Actions run the
//! gate synchronously (before their first await point), and the browser's
//! cooperative scheduling guarantees nothing runs between the check and the
//! flag being set, so no atomic check-and-set is needed.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

/// A remote-backed value with fetch bookkeeping.
///
/// `value` survives failed refreshes: a fetch that errors records a message
/// and leaves the previous value (and its stamp) untouched.
#[derive(Clone, Debug)]
pub struct RemoteCache<T> {
    /// Cached payload; `None` until the first successful fetch.
    pub value: Option<T>,
    /// True only while a fetch is in flight.
    pub loading: bool,
    /// Human-readable message from the most recent failed fetch.
    pub error: Option<String>,
    /// Unix-epoch milliseconds of the last successful fetch.
    pub last_fetch_ms: Option<f64>,
}

impl<T> Default for RemoteCache<T> {
    fn default() -> Self {
        Self {
            value: None,
            loading: false,
            error: None,
            last_fetch_ms: None,
        }
    }
}

impl<T> RemoteCache<T> {
    /// Whether the cached value is older than `max_age_ms`.
    ///
    /// Never-fetched counts as stale.
    #[must_use]
    pub fn is_stale(&self, now_ms: f64, max_age_ms: f64) -> bool {
        match self.last_fetch_ms {
            None => true,
            Some(stamp) => now_ms - stamp > max_age_ms,
        }
    }

    /// Whether an `ensure` action should trigger a fetch: no value yet, or
    /// the value has gone stale.
    #[must_use]
    pub fn needs_refresh(&self, now_ms: f64, max_age_ms: f64) -> bool {
        self.value.is_none() || self.is_stale(now_ms, max_age_ms)
    }

    /// Arm a fetch unless one is already in flight.
    ///
    /// Returns whether the caller should proceed. On `true`, `loading` is
    /// set and the previous error is cleared; the caller must finish with
    /// exactly one of [`complete`](Self::complete) or [`fail`](Self::fail).
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// Arm a fetch unless one is in flight or, when not forced, a non-stale
    /// value is already cached.
    pub fn begin_unless_fresh(&mut self, force: bool, now_ms: f64, max_age_ms: f64) -> bool {
        if !force && self.value.is_some() && !self.is_stale(now_ms, max_age_ms) {
            return false;
        }
        self.begin()
    }

    /// Record a successful fetch: replace the value, stamp the fetch time,
    /// and return to idle.
    pub fn complete(&mut self, value: T, now_ms: f64) {
        self.value = Some(value);
        self.last_fetch_ms = Some(now_ms);
        self.loading = false;
    }

    /// Record a failed fetch: keep the previous value and stamp, surface the
    /// message, and return to idle.
    pub fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }
}
