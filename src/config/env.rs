// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 8080)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Google Places API key
    pub google_api_key: String,

    /// WordPress site base URL (e.g., "https://www.example.com")
    pub wp_base_url: String,

    /// WordPress username owning the application password
    pub wp_user: String,

    /// WordPress application password
    pub wp_app_pass: String,

    /// Listing cache TTL in seconds
    pub cache_ttl_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenv().ok();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            google_api_key: env::var("GOOGLE_API_KEY").unwrap_or_else(|_| String::new()),

            wp_base_url: env::var("WP_BASE_URL").unwrap_or_else(|_| String::new()),

            wp_user: env::var("WP_USER").unwrap_or_else(|_| String::new()),

            wp_app_pass: env::var("WP_APP_PASS").unwrap_or_else(|_| String::new()),

            cache_ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()
                .unwrap_or(3600),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Missing secrets only disable the action that needs
    /// them; a malformed WordPress URL is the one hard failure
    pub fn validate(&self) -> Result<(), String> {
        if !self.wp_base_url.is_empty()
            && !self.wp_base_url.starts_with("http://")
            && !self.wp_base_url.starts_with("https://")
        {
            return Err(format!(
                "WP_BASE_URL must start with http:// or https:// (got '{}')",
                self.wp_base_url
            ));
        }

        if self.google_api_key.is_empty() {
            log::warn!("GOOGLE_API_KEY not configured - fetching listings will not work");
        }

        if !self.wordpress_configured() {
            log::warn!("WP_BASE_URL/WP_USER/WP_APP_PASS not fully configured - publishing will not work");
        }

        Ok(())
    }

    /// Whether the Places search can run
    pub fn places_configured(&self) -> bool {
        !self.google_api_key.is_empty()
    }

    /// Whether draft publishing can run
    pub fn wordpress_configured(&self) -> bool {
        !self.wp_base_url.is_empty() && !self.wp_user.is_empty() && !self.wp_app_pass.is_empty()
    }
}
