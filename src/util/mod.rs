//! Utility helpers shared across store modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Isolates browser/environment concerns (wall-clock access) so store logic
//! stays pure and testable with injected timestamps.

pub mod time;
