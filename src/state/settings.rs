//! User-settings state (birthday preferences).
//!
//! Settings are small and rarely shown, so there is no staleness window:
//! the fetch is gated only on an in-flight fetch, and views call it when
//! they need the payload.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use super::cache::RemoteCache;
use crate::net::api;
use crate::net::types::{UserBirthdaySettings, UserSettings};
use crate::util::time;

/// Settings store state: the cached preference payload with fetch
/// bookkeeping.
pub type SettingsState = RemoteCache<UserSettings>;

/// Fetch the settings payload from `/api/me/settings`.
///
/// Skips when a fetch is already in flight.
pub async fn fetch_settings(settings: RwSignal<SettingsState>) {
    let proceed = settings.try_update(|cache| cache.begin()).unwrap_or(false);
    if !proceed {
        return;
    }
    match api::fetch_settings().await {
        Ok(payload) => settings.update(|cache| cache.complete(payload, time::now_ms())),
        Err(message) => {
            leptos::logging::warn!("settings fetch failed: {message}");
            settings.update(|cache| cache.fail(message));
        }
    }
}

/// Apply a birthday change locally, pretending the backend accepted it.
///
/// Holds `loading` through a one-second simulated round-trip (browser builds
/// only), then overwrites the cached birthday when a settings payload is
/// present. Returns whether the save "succeeded", which is currently always
/// true.
pub async fn save_birthday(
    settings: RwSignal<SettingsState>,
    birthday: UserBirthdaySettings,
) -> bool {
    settings.update(|cache| cache.loading = true);

    // TODO: replace the simulated round-trip with a real write once the
    // backend exposes a settings mutation endpoint.
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;

    settings.update(|cache| {
        if let Some(current) = cache.value.as_mut() {
            current.birthday = Some(birthday);
        }
        cache.loading = false;
    });
    true
}
