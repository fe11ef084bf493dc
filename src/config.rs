//! Configuration and settings management
//!
//! Loads settings from environment variables and defines request defaults.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Application settings loaded from environment variables
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Telegram Bot API token
    pub telegram_token: String,

    /// BPS WebAPI key
    pub bps_api_key: String,

    /// Base URL of the BPS WebAPI list endpoint
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// BPS domain (tenant) id the searches are scoped to
    #[serde(default = "default_bps_domain")]
    pub bps_domain: String,

    /// Language of the upstream catalogue
    #[serde(default = "default_api_lang")]
    pub api_lang: String,
}

fn default_api_base_url() -> String {
    "https://webapi.bps.go.id/v1/api/list".to_string()
}

// The bare-environment source lowercases every ambient env var, so field
// names need a bps_/api_ prefix; an unprefixed `lang` would be clobbered
// by the shell's LANG.
fn default_bps_domain() -> String {
    "3320".to_string()
}

fn default_api_lang() -> String {
    "ind".to_string()
}

impl Settings {
    /// Create new settings by loading from environment and files
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use infografis_bot::config::Settings;
    ///
    /// let settings = Settings::new().expect("Failed to load configuration");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if loading fails.
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(File::with_name("config/default").required(false))
            // Add in the current environment file
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked into git
            .add_source(File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of APP)
            .add_source(Environment::with_prefix("APP").separator("__"))
            // Also add settings from environment variables directly (without prefix)
            // Note: Environment::default() auto-converts UPPER_SNAKE_CASE to snake_case
            .add_source(Environment::default().ignore_empty(true))
            .build()?;

        s.try_deserialize()
    }
}

/// Default page requested when the user gives none
pub const DEFAULT_PAGE: i64 = 1;
/// Default number of infographics shown per request
pub const DEFAULT_COUNT: usize = 5;
/// Hard cap on infographics per request
pub const MAX_COUNT: i64 = 10;
/// Timeout for one request to the search API
pub const SEARCH_HTTP_TIMEOUT_SECS: u64 = 30;

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    // Runs as a single test to avoid environment variable race conditions
    #[test]
    fn test_config_env_loading() -> Result<(), Box<dyn std::error::Error>> {
        env::set_var("TELEGRAM_TOKEN", "dummy_token");
        env::set_var("BPS_API_KEY", "dummy_key");
        // Ambient shell variables must not bleed into the settings; LANG is
        // set in virtually every environment.
        env::set_var("LANG", "C.UTF-8");

        let settings = Settings::new()?;
        assert_eq!(settings.telegram_token, "dummy_token");
        assert_eq!(settings.bps_api_key, "dummy_key");
        // Defaults kick in when the env says nothing
        assert_eq!(
            settings.api_base_url,
            "https://webapi.bps.go.id/v1/api/list"
        );
        assert_eq!(settings.bps_domain, "3320");
        assert_eq!(settings.api_lang, "ind");

        // Explicit overrides win over the defaults
        env::set_var("API_BASE_URL", "https://example.com/api/list");
        env::set_var("BPS_DOMAIN", "1100");
        env::set_var("API_LANG", "eng");

        let settings = Settings::new()?;
        assert_eq!(settings.api_base_url, "https://example.com/api/list");
        assert_eq!(settings.bps_domain, "1100");
        assert_eq!(settings.api_lang, "eng");

        env::remove_var("TELEGRAM_TOKEN");
        env::remove_var("BPS_API_KEY");
        env::remove_var("API_BASE_URL");
        env::remove_var("BPS_DOMAIN");
        env::remove_var("API_LANG");
        Ok(())
    }
}
