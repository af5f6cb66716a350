//! Configuration module for the directory client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;

/// Default number of members per page, matching the backend's page size.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the community backend
    pub backend_url: String,
    /// Base URL for resolving avatar references (defaults to backend_url)
    pub asset_base: String,
    /// Bearer token for authenticated requests, if any
    pub token: Option<String>,
    /// Number of members requested per page
    pub page_size: usize,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let backend_url = env::var("COMMUNITY_BACKEND_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        let asset_base =
            env::var("COMMUNITY_ASSET_BASE").unwrap_or_else(|_| backend_url.clone());

        let token = env::var("COMMUNITY_TOKEN").ok().filter(|t| !t.is_empty());

        let page_size = env::var("COMMUNITY_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&s| s > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let log_level = env::var("COMMUNITY_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            backend_url,
            asset_base,
            token,
            page_size,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("COMMUNITY_BACKEND_URL");
        env::remove_var("COMMUNITY_ASSET_BASE");
        env::remove_var("COMMUNITY_TOKEN");
        env::remove_var("COMMUNITY_PAGE_SIZE");
        env::remove_var("COMMUNITY_LOG_LEVEL");

        let config = Config::from_env();

        assert_eq!(config.backend_url, "http://localhost:3000");
        assert_eq!(config.asset_base, config.backend_url);
        assert!(config.token.is_none());
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_page_size_falls_back() {
        env::set_var("COMMUNITY_PAGE_SIZE", "0");
        let config = Config::from_env();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        env::remove_var("COMMUNITY_PAGE_SIZE");
    }
}
