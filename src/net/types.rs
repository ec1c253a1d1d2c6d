//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's serialized response bodies field for
//! field so serde round-trips stay lossless. Presentation concerns (avatar
//! URLs, display ordering) belong to the stores and views, not here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user as returned by `/api/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (snowflake string).
    pub id: String,
    /// Display name, if the backend has one on record.
    pub username: Option<String>,
    /// Avatar image hash, if the user has an avatar set.
    pub avatar_hash: Option<String>,
}

/// A guild membership as returned by `/api/guilds`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guild {
    /// Unique guild identifier (snowflake string).
    pub id: String,
    /// Guild display name.
    pub name: String,
    /// Guild icon hash, if the guild has an icon set.
    pub icon_hash: Option<String>,
    /// Whether the bot is already a member of this guild.
    pub has_bot: bool,
    /// Whether the bot is active (configured and running) in this guild.
    pub is_active: bool,
    /// Whether the current user may invite the bot to this guild.
    pub can_add_bot: bool,
}

/// Per-user preference payload as returned by `/api/me/settings`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Birthday preference, absent until the user sets one.
    pub birthday: Option<UserBirthdaySettings>,
}

/// A user's stored birthday.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBirthdaySettings {
    /// Day of month, 1–31.
    pub day: i16,
    /// Month of year, 1–12.
    pub month: i16,
    /// Optional birth year; omitted when the user declined to share it.
    pub year: Option<i16>,
    /// Unix-epoch seconds of the last change, used by the backend to limit
    /// how often a birthday may be edited.
    pub updated_at: i64,
}
