//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Listen address and site paths come from `[package.metadata.leptos]` and the
//! usual `LEPTOS_*` overrides, not from here.

use crate::core::seo::SiteUrl;

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Public URL used for canonical links and Open Graph tags (`SITE_URL`)
    pub site_url: SiteUrl,

    /// `tracing-subscriber` filter directive (`RUST_LOG`)
    /// Example: info,webly_landing=debug
    pub log_filter: String,

    /// Whether responses are brotli/gzip compressed (`COMPRESSION`)
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let site_url = lookup("SITE_URL").map(SiteUrl::new).unwrap_or_default();
        let log_filter = lookup("RUST_LOG")
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let compression = lookup("COMPRESSION")
            .map(|value| parse_flag(&value))
            .unwrap_or(true);

        Self {
            site_url,
            log_filter,
            compression,
        }
    }
}

/// Anything except an explicit "off" value enables the flag.
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    // ========================================================================
    // Lookup-based tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));

        assert_eq!(config.site_url, SiteUrl::default());
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(config.compression);
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = Config::from_lookup(lookup_from(&[
            ("SITE_URL", "https://staging.webly.ai/"),
            ("RUST_LOG", "debug"),
            ("COMPRESSION", "off"),
        ]));

        assert_eq!(config.site_url.as_str(), "https://staging.webly.ai");
        assert_eq!(config.log_filter, "debug");
        assert!(!config.compression);
    }

    #[test]
    fn test_blank_log_filter_uses_default() {
        let config = Config::from_lookup(lookup_from(&[("RUST_LOG", "  ")]));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_parse_flag() {
        for off in ["0", "false", "FALSE", " off ", "no"] {
            assert!(!parse_flag(off), "{off:?} should disable");
        }
        for on in ["1", "true", "on", "yes", ""] {
            assert!(parse_flag(on), "{on:?} should enable");
        }
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so we don't assert specific values
        let config = Config::from_env();
        assert!(!config.log_filter.is_empty());
        assert!(!config.site_url.as_str().is_empty());
    }

    #[test]
    fn test_config_debug() {
        let config = Config::from_lookup(lookup_from(&[("SITE_URL", "https://example.com")]));
        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("site_url"));
        assert!(debug_str.contains("https://example.com"));
    }
}
