//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `csrf`, `guilds`, `settings`) so
//! individual components can depend on small focused models. The stores are
//! structurally independent (none reads or writes another) and the
//! remote-backed ones share the `cache` bookkeeping.

pub mod auth;
pub mod cache;
pub mod csrf;
pub mod guilds;
pub mod settings;
