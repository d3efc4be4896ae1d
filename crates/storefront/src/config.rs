//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional; the defaults are the constants the page has always
//! used.
//!
//! - `LUMIERE_CART_KEY` - Storage key for the cart payload (default: `cart`)
//! - `LUMIERE_FAVORITES_KEY` - Storage key for the favorite set (default: `favorites`)
//! - `LUMIERE_CART_TOAST_MS` - Cart toast display time (default: 2000)
//! - `LUMIERE_NEWSLETTER_TOAST_MS` - Newsletter toast display time (default: 3000)
//! - `LUMIERE_SLIDE_INTERVAL_MS` - Hero slider cadence (default: 5000)

use std::time::Duration;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Storage key for the cart payload.
    pub cart_key: String,
    /// Storage key for the favorite set.
    pub favorites_key: String,
    /// How long the cart toast stays on screen.
    pub cart_toast: Duration,
    /// How long the newsletter toast stays on screen.
    pub newsletter_toast: Duration,
    /// Auto-advance cadence of the hero slider.
    pub slide_interval: Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            cart_key: "cart".to_owned(),
            favorites_key: "favorites".to_owned(),
            cart_toast: Duration::from_millis(2_000),
            newsletter_toast: Duration::from_millis(3_000),
            slide_interval: Duration::from_millis(5_000),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a duration variable is present but not a
    /// millisecond count.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        Ok(Self {
            cart_key: get_env_or("LUMIERE_CART_KEY", defaults.cart_key),
            favorites_key: get_env_or("LUMIERE_FAVORITES_KEY", defaults.favorites_key),
            cart_toast: get_millis_or("LUMIERE_CART_TOAST_MS", defaults.cart_toast)?,
            newsletter_toast: get_millis_or(
                "LUMIERE_NEWSLETTER_TOAST_MS",
                defaults.newsletter_toast,
            )?,
            slide_interval: get_millis_or("LUMIERE_SLIDE_INTERVAL_MS", defaults.slide_interval)?,
        })
    }
}

/// Get an environment variable or a default value.
fn get_env_or(key: &str, default: String) -> String {
    std::env::var(key).unwrap_or(default)
}

/// Get a millisecond-count environment variable as a `Duration`.
fn get_millis_or(key: &str, default: Duration) -> Result<Duration, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_owned(), e.to_string())),
        Err(_) => Ok(default),
    }
}
