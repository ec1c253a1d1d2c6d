//! Guild-list state for the dashboard's guild picker.
//!
//! DESIGN
//! ======
//! The raw list is cached as fetched; ordering is a derived view recomputed
//! on read, so a refresh never has to re-derive anything. Selection is keyed
//! by guild id rather than list position, which keeps it meaningful across
//! refreshes that replace the underlying `Guild` values.

#[cfg(test)]
#[path = "guilds_test.rs"]
mod guilds_test;

use leptos::prelude::*;

use super::cache::RemoteCache;
use crate::net::api;
use crate::net::types::Guild;
use crate::util::time;

/// How long a fetched guild list is trusted before `ensure_guilds` refreshes
/// it. Memberships change rarely; five minutes keeps the picker honest
/// without hammering the backend.
pub const GUILD_MAX_AGE_MS: f64 = 5.0 * 60.0 * 1000.0;

/// Guild-list store state: the cached memberships plus the picker selection.
#[derive(Clone, Debug, Default)]
pub struct GuildListState {
    pub cache: RemoteCache<Vec<Guild>>,
    /// Id of the currently selected guild, if any.
    pub selected_id: Option<String>,
}

impl GuildListState {
    /// The cached list ordered for display: guilds where the bot is furthest
    /// along first, then by name. `None` until the first successful fetch.
    #[must_use]
    pub fn sorted(&self) -> Option<Vec<Guild>> {
        let mut list = self.cache.value.clone()?;
        list.sort_by(|a, b| {
            bot_presence_score(b)
                .cmp(&bot_presence_score(a))
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        Some(list)
    }

    /// Toggle the selection: selecting the selected guild clears it, any
    /// other guild replaces it.
    pub fn select(&mut self, guild_id: &str) {
        if self.selected_id.as_deref() == Some(guild_id) {
            self.selected_id = None;
        } else {
            self.selected_id = Some(guild_id.to_owned());
        }
    }

    /// Resolve the selected id against the cached list.
    ///
    /// `None` when nothing is selected or the guild has vanished from the
    /// most recent fetch.
    #[must_use]
    pub fn selected(&self) -> Option<&Guild> {
        let selected_id = self.selected_id.as_deref()?;
        self.cache
            .value
            .as_ref()?
            .iter()
            .find(|guild| guild.id == selected_id)
    }
}

/// How far along the bot is in a guild: present, active, and invitable each
/// count for one. Drives the default picker ordering.
fn bot_presence_score(guild: &Guild) -> u8 {
    u8::from(guild.has_bot) + u8::from(guild.is_active) + u8::from(guild.can_add_bot)
}

/// Fetch the guild list from `/api/guilds`.
///
/// Skips when a fetch is already in flight, or when `force` is false and the
/// cached list is still inside the staleness window.
pub async fn fetch_guilds(guilds: RwSignal<GuildListState>, force: bool) {
    let now_ms = time::now_ms();
    let proceed = guilds
        .try_update(|state| state.cache.begin_unless_fresh(force, now_ms, GUILD_MAX_AGE_MS))
        .unwrap_or(false);
    if !proceed {
        return;
    }
    match api::fetch_guilds().await {
        Ok(list) => guilds.update(|state| state.cache.complete(list, time::now_ms())),
        Err(message) => {
            leptos::logging::warn!("guild list refresh failed: {message}");
            guilds.update(|state| state.cache.fail(message));
        }
    }
}

/// Make sure a usable guild list is cached, fetching if missing or stale.
pub async fn ensure_guilds(guilds: RwSignal<GuildListState>) {
    let now_ms = time::now_ms();
    if guilds.with_untracked(|state| state.cache.needs_refresh(now_ms, GUILD_MAX_AGE_MS)) {
        fetch_guilds(guilds, true).await;
    }
}
