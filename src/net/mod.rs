//! Networking modules for the dashboard REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps one helper per backend endpoint and `types` defines the wire
//! schema those endpoints speak. Stores never touch HTTP directly.

pub mod api;
pub mod types;
