//! # guildboard
//!
//! Client-side state stores for the guild-bot web dashboard. Each store owns
//! one slice of remote-backed state (the signed-in user, the CSRF token, the
//! guild list, and user settings), fetched lazily from the backend REST API
//! and cached in memory with a short staleness window.
//!
//! This crate contains no pages or components: the consuming Leptos app calls
//! [`context::provide_stores`] once at the root and drives the async actions
//! in each `state` module from its own views. Network access is gated behind
//! the `hydrate` feature; SSR and native test builds see inert stubs instead.

pub mod context;
pub mod net;
pub mod state;
pub mod util;
