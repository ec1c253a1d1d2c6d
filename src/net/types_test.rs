use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_guild(name: &str) -> Guild {
    Guild {
        id: "g-1".to_owned(),
        name: name.to_owned(),
        icon_hash: Some("1c0n".to_owned()),
        has_bot: true,
        is_active: false,
        can_add_bot: false,
    }
}

// =============================================================
// User wire shape
// =============================================================

#[test]
fn user_deserializes_from_me_response_body() {
    let body = r#"{"id":"42","username":"aki","avatar_hash":"a1b2c3"}"#;
    let user: User = serde_json::from_str(body).unwrap();
    assert_eq!(user.id, "42");
    assert_eq!(user.username.as_deref(), Some("aki"));
    assert_eq!(user.avatar_hash.as_deref(), Some("a1b2c3"));
}

#[test]
fn user_tolerates_null_optional_fields() {
    let body = r#"{"id":"42","username":null,"avatar_hash":null}"#;
    let user: User = serde_json::from_str(body).unwrap();
    assert!(user.username.is_none());
    assert!(user.avatar_hash.is_none());
}

#[test]
fn user_tolerates_missing_optional_fields() {
    let body = r#"{"id":"42"}"#;
    let user: User = serde_json::from_str(body).unwrap();
    assert_eq!(user.id, "42");
    assert!(user.username.is_none());
    assert!(user.avatar_hash.is_none());
}

// =============================================================
// Guild wire shape
// =============================================================

#[test]
fn guild_round_trips_through_json() {
    let guild = make_guild("Rust Hideout");
    let json = serde_json::to_string(&guild).unwrap();
    let back: Guild = serde_json::from_str(&json).unwrap();
    assert_eq!(back, guild);
}

#[test]
fn guild_deserializes_from_list_entry_body() {
    let body = r#"{
        "id": "77",
        "name": "Alpha",
        "icon_hash": null,
        "has_bot": true,
        "is_active": true,
        "can_add_bot": false
    }"#;
    let guild: Guild = serde_json::from_str(body).unwrap();
    assert_eq!(guild.name, "Alpha");
    assert!(guild.icon_hash.is_none());
    assert!(guild.has_bot);
    assert!(guild.is_active);
    assert!(!guild.can_add_bot);
}

// =============================================================
// UserSettings wire shape
// =============================================================

#[test]
fn settings_deserialize_with_birthday() {
    let body = r#"{"birthday":{"day":29,"month":2,"year":null,"updated_at":1700000000}}"#;
    let settings: UserSettings = serde_json::from_str(body).unwrap();
    let birthday = settings.birthday.unwrap();
    assert_eq!(birthday.day, 29);
    assert_eq!(birthday.month, 2);
    assert!(birthday.year.is_none());
    assert_eq!(birthday.updated_at, 1_700_000_000);
}

#[test]
fn settings_deserialize_without_birthday() {
    let body = r#"{"birthday":null}"#;
    let settings: UserSettings = serde_json::from_str(body).unwrap();
    assert!(settings.birthday.is_none());
}

#[test]
fn birthday_with_year_round_trips() {
    let birthday = UserBirthdaySettings {
        day: 7,
        month: 11,
        year: Some(1993),
        updated_at: 1_700_000_000,
    };
    let json = serde_json::to_string(&birthday).unwrap();
    let back: UserBirthdaySettings = serde_json::from_str(&json).unwrap();
    assert_eq!(back, birthday);
}
