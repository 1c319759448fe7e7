//! Application error type.
//!
//! Most "failures" in this app are rendered states, not errors: an
//! unknown product id or an unmatched path produces a not-found page, a
//! rejected payment or sign-in is echoed on the page that caused it.
//! `AppError` covers what genuinely cannot be rendered around.

use thiserror::Error;

use crate::config::ConfigError;

/// Application-level error for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration failed to load.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Template rendering failed.
    #[error("render error: {0}")]
    Render(#[from] askama::Error),

    /// Terminal I/O failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
