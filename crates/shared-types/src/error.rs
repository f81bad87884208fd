use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of errors surfaced to pages by the API clients.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Conflict,
    Unauthorized,
    Forbidden,
    RateLimited,
    /// The request never produced an HTTP response (DNS, TLS, offline).
    Network,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Conflict => write!(f, "Conflict"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::RateLimited => write!(f, "RateLimited"),
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

impl AppErrorKind {
    /// Map a non-success HTTP status from the remote API to an error kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => AppErrorKind::BadRequest,
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            409 => AppErrorKind::Conflict,
            422 => AppErrorKind::ValidationError,
            429 => AppErrorKind::RateLimited,
            _ => AppErrorKind::InternalError,
        }
    }
}

/// Structured error returned by the API clients to page components.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

/// Error body shapes the remote API is known to return.
#[derive(Debug, Deserialize)]
struct RemoteErrorBody {
    #[serde(default, alias = "error", alias = "msg")]
    message: Option<String>,
    #[serde(default)]
    errors: Option<RemoteFieldErrors>,
}

/// `errors` arrives either keyed by field or as a list of
/// `{msg, param}` entries. Other shapes are ignored.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RemoteFieldErrors {
    Keyed(HashMap<String, String>),
    Listed(Vec<RemoteFieldError>),
    Unknown(serde_json::Value),
}

#[derive(Debug, Deserialize)]
struct RemoteFieldError {
    #[serde(alias = "message")]
    msg: String,
    #[serde(default, alias = "path", alias = "field")]
    param: Option<String>,
}

impl RemoteFieldErrors {
    /// First message per field; entries without a field are dropped.
    fn into_map(self) -> HashMap<String, String> {
        match self {
            RemoteFieldErrors::Keyed(map) => map,
            RemoteFieldErrors::Listed(list) => {
                let mut map = HashMap::new();
                for entry in list {
                    if let Some(param) = entry.param {
                        map.entry(param).or_insert(entry.msg);
                    }
                }
                map
            }
            RemoteFieldErrors::Unknown(_) => HashMap::new(),
        }
    }
}

impl AppError {
    fn with_kind(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Forbidden, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Network, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::InternalError, message)
    }

    /// Build an error from a non-success response of the remote API.
    ///
    /// The body is parsed as `{"message": ..., "errors": ...}` (with
    /// `error`/`msg` accepted for the message and `errors` keyed by field
    /// or listed). Anything else falls back to
    /// the raw body text, or the status code when the body is empty.
    pub fn from_response(status: u16, body: &str) -> Self {
        let kind = AppErrorKind::from_status(status);
        match serde_json::from_str::<RemoteErrorBody>(body) {
            Ok(parsed) => Self {
                kind,
                message: parsed
                    .message
                    .unwrap_or_else(|| format!("Request failed with status {status}")),
                field_errors: parsed
                    .errors
                    .map(RemoteFieldErrors::into_map)
                    .unwrap_or_default(),
            },
            Err(_) if body.trim().is_empty() => {
                Self::with_kind(kind, format!("Request failed with status {status}"))
            }
            Err(_) => Self::with_kind(kind, body.trim().to_string()),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == AppErrorKind::Unauthorized
    }

    /// Message suitable for showing to the user.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::Network => "Unable to reach the server. Please try again.".to_string(),
            AppErrorKind::InternalError => "Something went wrong. Please try again.".to_string(),
            AppErrorKind::Unauthorized if self.message.is_empty() => {
                "Your session has expired. Please sign in again.".to_string()
            }
            _ => self.message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
