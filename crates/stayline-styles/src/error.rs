//! Error types for the styles system
//!
//! All fallible operations in this crate return [`Result<T>`], an alias for
//! `std::result::Result<T, StyleError>`. The dispatcher performs no local
//! recovery: registry and style failures propagate unchanged to the caller.

use thiserror::Error;

/// Errors that can occur while registering styles or formatting events
#[derive(Debug, Error)]
pub enum StyleError {
    /// No style with the given id exists in the registry.
    #[error("Style not found: {0}")]
    StyleNotFound(String),

    /// A style with the given id is already registered.
    ///
    /// Registration is an init-time, deliberate act; silently replacing an
    /// existing style would hide wiring mistakes.
    #[error("Style already registered: {0}")]
    AlreadyRegistered(String),

    /// Formatting was requested but the registry holds no styles.
    #[error("No event styles registered")]
    NoStylesRegistered,

    /// A style's `format` call failed.
    ///
    /// Concrete styles define their own failure conditions; this variant
    /// carries whatever context the style reported.
    #[error("Style formatting failed: {0}")]
    FormatFailed(String),

    /// Registry storage error (e.g. a poisoned lock).
    #[error("Registry error: {0}")]
    Registry(String),

    /// Formatter configuration was semantically invalid.
    #[error("Invalid formatter configuration: {0}")]
    Config(String),

    /// IO error while reading configuration.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML configuration parse error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON error while building a formatted result.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for style operations
pub type Result<T> = std::result::Result<T, StyleError>;
