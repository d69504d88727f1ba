//! Canonical user record and the payload normalizer.
//!
//! DESIGN
//! ======
//! Different endpoints return the current user with different field names
//! (`username` vs `user_name`, `name` vs `full_name`) and varying subsets
//! of fields. [`normalize`] is the only function that turns such a
//! [`RawUser`] into the canonical [`User`]; a payload without a stable
//! `uuid` is rejected outright. The function is pure and cannot panic —
//! callers treat `None` as "cannot authenticate".

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::net::types::RawUser;

/// Role a user registered as. Unknown or absent values fall back to `User`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Worker,
    Employer,
    Admin,
    #[default]
    User,
}

impl UserType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Worker => "worker",
            Self::Employer => "employer",
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("worker") => Self::Worker,
            Some("employer") => Self::Employer,
            Some("admin") => Self::Admin,
            _ => Self::User,
        }
    }
}

/// The canonical user shape every screen consumes.
///
/// Owned exclusively by the session controller; pages receive read-only
/// clones through the session context. `avatar` and `avatar_url` are kept
/// mutually in sync by [`normalize`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_preferences: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy_settings: Option<Value>,
    /// Free-form backend fields carried through untouched (bio, skills,
    /// hourly_rate, verification flags, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Display label: name, then username, then a fixed fallback.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or("用户")
    }

    /// Serialize back to the raw superset shape for merging.
    pub fn to_raw(&self) -> RawUser {
        RawUser(serde_json::to_value(self).unwrap_or(Value::Null))
    }
}

/// Keys consumed into dedicated [`User`] fields; everything else lands in
/// `extra`.
const CANONICAL_KEYS: [&str; 10] = [
    "uuid",
    "username",
    "user_name",
    "name",
    "full_name",
    "user_type",
    "avatar",
    "avatar_url",
    "notification_preferences",
    "privacy_settings",
];

/// Convert a raw payload into the canonical user record.
///
/// Returns `None` when the payload is not an object or carries no `uuid`.
pub fn normalize(raw: &RawUser) -> Option<User> {
    let object = raw.0.as_object()?;
    let uuid = object
        .get("uuid")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())?
        .to_owned();

    let username = string_field(object, &["username", "user_name"]);
    let name = string_field(object, &["name", "full_name"]).or_else(|| username.clone());

    // Whichever avatar field is populated wins; both end up equal.
    let avatar = string_field(object, &["avatar"]);
    let avatar_url = string_field(object, &["avatar_url"]);
    let avatar = avatar.or_else(|| avatar_url.clone());
    let avatar_url = avatar_url.or_else(|| avatar.clone());

    let user_type = UserType::parse(object.get("user_type").and_then(Value::as_str));

    let extra = object
        .iter()
        .filter(|(key, _)| !CANONICAL_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Some(User {
        uuid,
        username,
        name,
        user_type,
        avatar,
        avatar_url,
        notification_preferences: json_field(object, "notification_preferences"),
        privacy_settings: json_field(object, "privacy_settings"),
        extra,
    })
}

/// Overlay `partial`'s top-level fields onto `base`'s raw form.
pub fn merge_raw(base: &RawUser, partial: &Value) -> RawUser {
    let mut merged = base.0.clone();
    if let (Some(target), Some(fields)) = (merged.as_object_mut(), partial.as_object()) {
        for (key, value) in fields {
            target.insert(key.clone(), value.clone());
        }
    }
    RawUser(merged)
}

fn string_field(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        object
            .get(*key)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
    })
}

fn json_field(object: &Map<String, Value>, key: &str) -> Option<Value> {
    object.get(key).filter(|value| !value.is_null()).cloned()
}
