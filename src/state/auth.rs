//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. All identity decisions belong
//! to the backend: this store only mirrors what `/api/me` last said.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// There is deliberately no error field: "not authenticated" and "could not
/// reach the backend" both present as an absent user.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Whether a signed-in user is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Display name for header chrome; empty when signed out or nameless.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|user| user.username.as_deref())
            .unwrap_or("")
    }
}

/// Refresh the current user from `/api/me`.
///
/// Always fetches: session checks are cheap and identity must win over any
/// cached impression. Any failure clears the user.
pub async fn fetch_user(auth: RwSignal<AuthState>) {
    auth.update(|state| state.loading = true);
    let user = api::fetch_current_user().await;
    auth.update(|state| {
        state.user = user;
        state.loading = false;
    });
}

/// Start the backend login flow by navigating the browser to it.
///
/// No local state changes here; the flow ends with the backend setting the
/// session cookie and redirecting back into the app.
pub fn login() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/api/auth/login");
        }
    }
}

/// Log out: tell the backend (best effort), then clear the local user and
/// leave for the login page.
///
/// The local clear is unconditional: a logout with the network down still
/// signs this tab out.
pub async fn logout(auth: RwSignal<AuthState>) {
    api::logout().await;
    auth.update(|state| state.user = None);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}
