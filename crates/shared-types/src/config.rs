use serde::{Deserialize, Serialize};

/// Where and under which key the session token is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// Local storage key holding the compact token.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Route the guard redirects to on logout or a rejected token.
    #[serde(default = "default_login_route")]
    pub login_route: String,
    /// Key/value file used as local storage on native targets.
    #[serde(default = "default_store_path")]
    pub store_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            login_route: default_login_route(),
            store_path: default_store_path(),
        }
    }
}

/// Base URLs of the two remote API clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_core_base_url")]
    pub core_base_url: String,
    #[serde(default = "default_auth_base_url")]
    pub auth_base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            core_base_url: default_core_base_url(),
            auth_base_url: default_auth_base_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
///
/// Every section and field has a default so that a missing or partial
/// file still yields a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

fn default_storage_key() -> String {
    "token".to_string()
}

fn default_login_route() -> String {
    "/login".to_string()
}

fn default_store_path() -> String {
    ".portal-storage.json".to_string()
}

fn default_core_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_auth_base_url() -> String {
    "http://localhost:5000/api/auth".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
