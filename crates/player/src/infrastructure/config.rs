//! Player configuration
//!
//! Desktop builds read the environment (optionally seeded from a `.env` file
//! by [`load_dotenv`]).
//! Web builds read `window.APP_CONFIG.API_BASE_URL` and otherwise talk to the
//! origin that served the page.

/// Default fights API location for local development.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8082";

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Base URL of the fights REST API, without a trailing slash
    pub api_base_url: String,
    /// Only honoured by the desktop client; browsers apply their own limits
    pub request_timeout_secs: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl PlayerConfig {
    /// Build a config from raw lookups. `lookup` returns the value of a
    /// variable if it is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base_url = lookup("FIGHT_API_BASE_URL")
            .or_else(|| lookup("API_BASE_URL"))
            .map(|url| normalize_base_url(&url))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let request_timeout_secs = match lookup("FIGHT_API_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    value = %raw,
                    "Invalid FIGHT_API_TIMEOUT_SECS, using {}s",
                    DEFAULT_REQUEST_TIMEOUT_SECS
                );
                DEFAULT_REQUEST_TIMEOUT_SECS
            }),
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Self {
            api_base_url,
            request_timeout_secs,
        }
    }

    /// Load configuration from the process environment.
    ///
    /// Call [`load_dotenv`] first so that `.env` values are visible.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from the hosting page.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        use wasm_bindgen::JsValue;

        let Some(window) = web_sys::window() else {
            return Self::default();
        };

        let configured = js_sys::Reflect::get(&window, &JsValue::from_str("APP_CONFIG"))
            .ok()
            .filter(|config| config.is_object())
            .and_then(|config| {
                js_sys::Reflect::get(&config, &JsValue::from_str("API_BASE_URL")).ok()
            })
            .and_then(|url| url.as_string());

        // Same origin when the page does not say otherwise.
        let api_base_url = configured
            .or_else(|| window.location().origin().ok())
            .unwrap_or_default();

        Self {
            api_base_url: normalize_base_url(&api_base_url),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Seed the process environment from a `.env` file in the working directory
/// (or any parent). A missing file is not an error.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() -> Result<Option<std::path::PathBuf>, dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = PlayerConfig::from_lookup(lookup_from(&[]));

        assert_eq!(config, PlayerConfig::default());
    }

    #[test]
    fn specific_variable_wins_over_generic_one() {
        let config = PlayerConfig::from_lookup(lookup_from(&[
            ("FIGHT_API_BASE_URL", "http://fights:8080/"),
            ("API_BASE_URL", "http://other:1234"),
        ]));

        assert_eq!(config.api_base_url, "http://fights:8080");
    }

    #[test]
    fn generic_variable_is_a_fallback() {
        let config =
            PlayerConfig::from_lookup(lookup_from(&[("API_BASE_URL", " http://other:1234// ")]));

        assert_eq!(config.api_base_url, "http://other:1234");
    }

    #[test]
    fn invalid_timeout_falls_back_to_default() {
        let config =
            PlayerConfig::from_lookup(lookup_from(&[("FIGHT_API_TIMEOUT_SECS", "soon")]));

        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);

        let config = PlayerConfig::from_lookup(lookup_from(&[("FIGHT_API_TIMEOUT_SECS", "30")]));

        assert_eq!(config.request_timeout_secs, 30);
    }
}
