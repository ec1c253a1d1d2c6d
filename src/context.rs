//! Store creation and Leptos context wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! The consuming app calls [`provide_stores`] once in its root component;
//! pages and components then reach the signals through [`expect_stores`] or
//! `expect_context` on an individual signal type. Keeping construction in
//! one explicit object (instead of scattered globals) makes app startup and
//! tests deterministic.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::csrf::CsrfState;
use crate::state::guilds::GuildListState;
use crate::state::settings::SettingsState;

/// The four store signals, created together at app startup.
#[derive(Clone, Copy)]
pub struct Stores {
    pub auth: RwSignal<AuthState>,
    pub csrf: RwSignal<CsrfState>,
    pub guilds: RwSignal<GuildListState>,
    pub settings: RwSignal<SettingsState>,
}

impl Stores {
    /// Create all store signals with default (empty, idle) state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            auth: RwSignal::new(AuthState::default()),
            csrf: RwSignal::new(CsrfState::default()),
            guilds: RwSignal::new(GuildListState::default()),
            settings: RwSignal::new(SettingsState::default()),
        }
    }
}

impl Default for Stores {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the stores and provide them through Leptos context, both as an
/// aggregate and as individual signals. Call once at the app root; reach the
/// result with [`expect_stores`] or `expect_context` on a signal type.
pub fn provide_stores() {
    let stores = Stores::new();
    provide_context(stores.auth);
    provide_context(stores.csrf);
    provide_context(stores.guilds);
    provide_context(stores.settings);
    provide_context(stores);
}

/// Fetch the store aggregate from context.
///
/// # Panics
///
/// Panics when called outside a tree that ran [`provide_stores`], like any
/// `expect_context` lookup.
#[must_use]
pub fn expect_stores() -> Stores {
    expect_context::<Stores>()
}
