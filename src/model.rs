//! Person profile model and display helpers.
//!
//! The wire payload mirrors the external provider's flat user schema and is
//! mapped into [`Person`] immediately after decoding; the rest of the app
//! never sees provider field names.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// A generated person profile. Immutable once constructed; history identity
/// is positional, so no id field exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birthday: String,
    pub password: String,
    pub image: Option<String>,
}

/// Wire shape of one user from the provider (Random Data API `/api/v2/users`).
/// `avatar` is decoded leniently: missing, `null`, or a non-string value all
/// become `None` rather than a decode failure.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: String,
    pub password: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub avatar: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}

impl From<UserPayload> for Person {
    fn from(payload: UserPayload) -> Self {
        Person {
            name: format!("{} {}", payload.first_name, payload.last_name),
            email: payload.email,
            phone: payload.phone_number,
            birthday: payload.date_of_birth,
            password: payload.password,
            image: payload.avatar,
        }
    }
}

impl Person {
    /// First character of the name, used by the fallback avatar.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

/// Format an ISO `YYYY-MM-DD` birthday as e.g. "May 14, 1990".
/// Unparseable input is returned unchanged; the user never sees a date error.
pub fn format_birthday(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%B %d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
