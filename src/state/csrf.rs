//! CSRF-token cache.
//!
//! DESIGN
//! ======
//! The backend rejects state-changing requests without a valid anti-forgery
//! token, so mutation flows call [`ensure_csrf`] first and read the token
//! from the cache. Tokens are short-lived; the staleness window refreshes
//! them comfortably before the backend stops honoring them.

#[cfg(test)]
#[path = "csrf_test.rs"]
mod csrf_test;

use leptos::prelude::*;

use super::cache::RemoteCache;
use crate::net::api;
use crate::util::time;

/// CSRF store state: a cached token string with fetch bookkeeping.
pub type CsrfState = RemoteCache<String>;

/// How long a fetched token is trusted before `ensure_csrf` refreshes it.
pub const CSRF_MAX_AGE_MS: f64 = 50.0 * 60.0 * 1000.0;

/// Fetch a fresh token from `/api/csrf`.
///
/// Skips when a fetch is already in flight, or when `force` is false and the
/// cached token is still inside the staleness window.
pub async fn fetch_csrf(csrf: RwSignal<CsrfState>, force: bool) {
    let now_ms = time::now_ms();
    let proceed = csrf
        .try_update(|cache| cache.begin_unless_fresh(force, now_ms, CSRF_MAX_AGE_MS))
        .unwrap_or(false);
    if !proceed {
        return;
    }
    match api::fetch_csrf_token().await {
        Ok(token) => csrf.update(|cache| cache.complete(token, time::now_ms())),
        Err(message) => {
            leptos::logging::warn!("csrf refresh failed: {message}");
            csrf.update(|cache| cache.fail(message));
        }
    }
}

/// Make sure a usable token is cached, fetching one if missing or stale.
pub async fn ensure_csrf(csrf: RwSignal<CsrfState>) {
    let now_ms = time::now_ms();
    if csrf.with_untracked(|cache| cache.needs_refresh(now_ms, CSRF_MAX_AGE_MS)) {
        fetch_csrf(csrf, true).await;
    }
}
