//! Client configuration.
//!
//! A browser build has no process environment, so values are captured from the build
//! environment at compile time and parsed once at startup.

use std::str::FromStr;

use dioxus_logger::tracing::Level;

use crate::client::error::ConfigError;

pub const API_BASE_VAR: &str = "STOREFRONT_API_BASE";
pub const LOG_LEVEL_VAR: &str = "STOREFRONT_LOG_LEVEL";
pub const ADMIN_QUICK_NAV_VAR: &str = "STOREFRONT_ADMIN_QUICK_NAV";

pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Prefix of every API request, without a trailing slash
    pub api_base: String,
    pub log_level: Level,
    /// Show the admin quick navigation bar inside the admin layout
    pub admin_quick_nav: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_level: Level::INFO,
            admin_quick_nav: false,
        }
    }
}

impl Config {
    /// Loads the configuration captured from the build environment
    pub fn from_build_env() -> Result<Self, ConfigError> {
        let api_base = option_env!("STOREFRONT_API_BASE");
        let log_level = option_env!("STOREFRONT_LOG_LEVEL");
        let admin_quick_nav = option_env!("STOREFRONT_ADMIN_QUICK_NAV");

        Self::from_lookup(|var| {
            match var {
                API_BASE_VAR => api_base,
                LOG_LEVEL_VAR => log_level,
                ADMIN_QUICK_NAV_VAR => admin_quick_nav,
                _ => None,
            }
            .map(str::to_string)
        })
    }

    /// Builds the configuration from a variable lookup, unset variables fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(api_base) = lookup(API_BASE_VAR) {
            config.api_base = parse_api_base(&api_base)?;
        }

        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.log_level = Level::from_str(level.trim()).map_err(|e| invalid(LOG_LEVEL_VAR, e))?;
        }

        if let Some(flag) = lookup(ADMIN_QUICK_NAV_VAR) {
            config.admin_quick_nav = parse_flag(ADMIN_QUICK_NAV_VAR, &flag)?;
        }

        Ok(config)
    }
}

fn invalid(var: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_api_base(value: &str) -> Result<String, ConfigError> {
    let value = value.trim().trim_end_matches('/');

    if value.starts_with('/') || value.starts_with("http://") || value.starts_with("https://") {
        Ok(value.to_string())
    } else {
        Err(invalid(
            API_BASE_VAR,
            "must be an absolute path or an http(s) URL",
        ))
    }
}

fn parse_flag(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(invalid(var, format!("expected a boolean, got {:?}", other))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use dioxus_logger::tracing::Level;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |key| vars.get(key).cloned()
    }

    /// Expect defaults when no variables are set
    #[test]
    fn test_from_lookup_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.api_base, "/api");
        assert_eq!(config.log_level, Level::INFO);
        assert!(!config.admin_quick_nav);
    }

    /// Tests reading every variable.
    ///
    /// Verifies that each variable overrides its default and that a trailing slash is
    /// stripped from the API base.
    ///
    /// Expected: all three fields overridden
    #[test]
    fn test_from_lookup_overrides() {
        let config = Config::from_lookup(lookup(&[
            (API_BASE_VAR, "https://shop.example.com/api/"),
            (LOG_LEVEL_VAR, "debug"),
            (ADMIN_QUICK_NAV_VAR, "true"),
        ]))
        .unwrap();

        assert_eq!(config.api_base, "https://shop.example.com/api");
        assert_eq!(config.log_level, Level::DEBUG);
        assert!(config.admin_quick_nav);
    }

    /// Expect a relative API base to be rejected
    #[test]
    fn test_from_lookup_rejects_relative_api_base() {
        let result = Config::from_lookup(lookup(&[(API_BASE_VAR, "api")]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue { ref var, .. }) if var == API_BASE_VAR
        ));
    }

    /// Expect an unknown log level to be rejected
    #[test]
    fn test_from_lookup_rejects_unknown_log_level() {
        let result = Config::from_lookup(lookup(&[(LOG_LEVEL_VAR, "loud")]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue { ref var, .. }) if var == LOG_LEVEL_VAR
        ));
    }

    /// Expect a non-boolean quick navigation flag to be rejected
    #[test]
    fn test_from_lookup_rejects_bad_flag() {
        let result = Config::from_lookup(lookup(&[(ADMIN_QUICK_NAV_VAR, "maybe")]));

        assert!(result.is_err());
    }
}
