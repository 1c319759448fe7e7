//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `STORE_NAME` - Store display name (default: Ember North)
//! - `STORE_CURRENCY` - ISO 4217 code for catalog prices (default: CAD)
//! - `STORE_FEATURED_COUNT` - Products featured on the home page (default: 3)
//! - `STORE_CONFIRMATION_MS` - How long the "added to cart" confirmation
//!   stays visible, in milliseconds (default: 2000)

use std::time::Duration;

use thiserror::Error;

use ember_north_core::CurrencyCode;

const DEFAULT_STORE_NAME: &str = "Ember North";
const DEFAULT_FEATURED_COUNT: usize = 3;
const DEFAULT_CONFIRMATION_MS: u64 = 2000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Store display name shown in the navigation bar.
    pub store_name: String,
    /// Currency used for catalog prices.
    pub currency: CurrencyCode,
    /// Number of catalog products featured on the home page.
    pub featured_count: usize,
    /// How long the "added to cart" confirmation stays visible.
    pub confirmation_window: Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            store_name: DEFAULT_STORE_NAME.to_owned(),
            currency: CurrencyCode::CAD,
            featured_count: DEFAULT_FEATURED_COUNT,
            confirmation_window: Duration::from_millis(DEFAULT_CONFIRMATION_MS),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse. Unset
    /// variables fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            store_name: get_env_or_default("STORE_NAME", DEFAULT_STORE_NAME),
            currency: parse_env_or("STORE_CURRENCY", CurrencyCode::CAD)?,
            featured_count: parse_env_or("STORE_FEATURED_COUNT", DEFAULT_FEATURED_COUNT)?,
            confirmation_window: Duration::from_millis(parse_env_or(
                "STORE_CONFIRMATION_MS",
                DEFAULT_CONFIRMATION_MS,
            )?),
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_owned(), e.to_string())),
        Err(_) => Ok(default),
    }
}
