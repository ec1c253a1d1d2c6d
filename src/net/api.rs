//! REST API helpers for communicating with the dashboard backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always with
//! `credentials: include` so the session cookie rides along.
//! Server-side (SSR) and native tests: stubs returning `None`/error since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result<_, String>` outputs instead of panics so a
//! dead backend degrades store state without crashing hydration. Non-OK
//! statuses and transport/parse failures surface as the same string channel;
//! only the message text differs.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Guild, User, UserSettings};
#[cfg(feature = "hydrate")]
use serde::Deserialize;

#[cfg(any(test, feature = "hydrate"))]
fn csrf_request_failed_message(status: u16, status_text: &str) -> String {
    format!("csrf token request failed: {status} {status_text}")
}

#[cfg(any(test, feature = "hydrate"))]
fn guilds_request_failed_message(status: u16, status_text: &str) -> String {
    format!("guild list request failed: {status} {status_text}")
}

#[cfg(any(test, feature = "hydrate"))]
fn settings_request_failed_message(status: u16, status_text: &str) -> String {
    format!("settings request failed: {status} {status_text}")
}

/// Fetch the currently authenticated user from `/api/me`.
///
/// Returns `None` when the session is missing or expired, on any transport
/// error, or on the server; callers cannot tell those apart, by contract.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/me")
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current session via `GET /api/auth/logout`.
///
/// The response is deliberately ignored: local session state is cleared by
/// the caller whether or not the backend heard us.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::get("/api/auth/logout")
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await;
    }
}

/// Fetch a fresh anti-forgery token from `/api/csrf`.
///
/// # Errors
///
/// Returns a human-readable message when the request fails, the server
/// responds non-OK, or the body cannot be parsed.
pub async fn fetch_csrf_token() -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/csrf")
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(csrf_request_failed_message(resp.status(), &resp.status_text()));
        }
        #[derive(Deserialize)]
        struct CsrfEnvelope {
            csrf_token: String,
        }
        let body: CsrfEnvelope = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.csrf_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the user's guild memberships from `/api/guilds`.
///
/// # Errors
///
/// Returns a human-readable message when the request fails, the server
/// responds non-OK, or the body cannot be parsed.
pub async fn fetch_guilds() -> Result<Vec<Guild>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/guilds")
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(guilds_request_failed_message(resp.status(), &resp.status_text()));
        }
        #[derive(Deserialize)]
        struct GuildsEnvelope {
            guilds: Vec<Guild>,
        }
        let body: GuildsEnvelope = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.guilds)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the user's settings payload from `/api/me/settings`.
///
/// # Errors
///
/// Returns a human-readable message when the request fails, the server
/// responds non-OK, or the body cannot be parsed.
pub async fn fetch_settings() -> Result<UserSettings, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/me/settings")
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(settings_request_failed_message(resp.status(), &resp.status_text()));
        }
        #[derive(Deserialize)]
        struct SettingsEnvelope {
            settings: UserSettings,
        }
        let body: SettingsEnvelope = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.settings)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
