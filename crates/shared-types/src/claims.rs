use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

use crate::Role;

/// User identifier as carried in the token. The API has issued both
/// numeric and string ids over time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SubjectId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectId::Number(n) => write!(f, "{n}"),
            SubjectId::Text(s) => f.write_str(s),
        }
    }
}

/// Decoded token payload. Never persisted on its own; it is re-derived
/// from the stored token whenever it is needed.
///
/// Any JSON object deserializes: claims with an unexpected shape are
/// read as absent instead of failing the whole payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(from = "Map<String, Value>")]
pub struct Claims {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<SubjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Expiry (seconds since epoch). Informational only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Claims this client does not interpret.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Keys tried for the subject, in order.
const ID_KEYS: &[&str] = &["id", "_id", "sub"];
const KNOWN_KEYS: &[&str] = &["id", "_id", "sub", "role", "email", "exp", "iat"];

fn subject_id(value: &Value) -> Option<SubjectId> {
    match value {
        Value::Number(n) => n.as_i64().map(SubjectId::Number),
        Value::String(s) => Some(SubjectId::Text(s.clone())),
        _ => None,
    }
}

/// Whole seconds; fractional timestamps are truncated.
fn timestamp(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|secs| secs.is_finite())
            .map(|secs| secs as i64)
    })
}

fn text(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

impl From<Map<String, Value>> for Claims {
    fn from(mut map: Map<String, Value>) -> Self {
        let id = ID_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(subject_id));
        let claims = Claims {
            id,
            role: map.get("role").and_then(text),
            email: map.get("email").and_then(text),
            exp: map.get("exp").and_then(timestamp),
            iat: map.get("iat").and_then(timestamp),
            extra: HashMap::new(),
        };
        map.retain(|key, _| !KNOWN_KEYS.contains(&key.as_str()));
        Claims {
            extra: map.into_iter().collect(),
            ..claims
        }
    }
}

impl Claims {
    /// Role derived from the `role` claim (`Applicant` when absent).
    pub fn role(&self) -> Role {
        Role::from_claim(self.role.as_deref())
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    /// Whether `exp` lies before `now`. Tokens are never rejected on this
    /// basis client-side; the API answers 401 for stale tokens.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().map(|exp| exp <= now).unwrap_or(false)
    }
}
