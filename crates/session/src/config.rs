use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

pub const ENV_CORE_API_URL: &str = "PORTAL_CORE_API_URL";
pub const ENV_AUTH_API_URL: &str = "PORTAL_AUTH_API_URL";
pub const ENV_LOG_LEVEL: &str = "PORTAL_LOG_LEVEL";

/// Read `config.toml`, apply environment overrides and store the result in
/// the global `OnceLock`. Only the first call has effect.
///
/// Runs before the logger is installed, so problems go to stderr. A missing
/// or unparseable file yields the defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let mut config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                eprintln!("[config] {CONFIG_PATH} not readable ({e}), using defaults");
                AppConfig::default()
            }
        };
        apply_env_overrides(&mut config, |key| std::env::var(key).ok());
        config
    })
}

/// The loaded config, or defaults if `load_config()` hasn't run yet.
pub fn config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}

pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        eprintln!("[config] Failed to parse {CONFIG_PATH}: {e}, using defaults");
        AppConfig::default()
    })
}

/// Override API base URLs and log level from the environment. Blank values
/// are ignored.
pub fn apply_env_overrides(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    if let Some(url) = get(ENV_CORE_API_URL) {
        config.api.core_base_url = url;
    }
    if let Some(url) = get(ENV_AUTH_API_URL) {
        config.api.auth_base_url = url;
    }
    if let Some(level) = get(ENV_LOG_LEVEL) {
        config.log.level = level;
    }
}

/// Parse the configured level, defaulting to `INFO` for unknown names.
pub fn log_level(config: &AppConfig) -> tracing::Level {
    config
        .log
        .level
        .trim()
        .parse()
        .unwrap_or(tracing::Level::INFO)
}
