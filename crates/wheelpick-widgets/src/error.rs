//! Error types for wheelpick-widgets.

use std::path::PathBuf;
use thiserror::Error;
use wheelpick_core::ColorParseError;

/// Errors raised while loading a picker configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The TOML did not parse or did not match the schema.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A color field is not a valid hex string.
    #[error("invalid color for '{field}': {source}")]
    Color {
        /// Field name
        field: &'static str,
        /// Parse failure
        source: ColorParseError,
    },

    /// Explicit height is zero, negative or not finite.
    #[error("height must be a positive number, got {0}")]
    InvalidHeight(f32),
}

/// Top-level error for applications embedding the wheel.
#[derive(Debug, Error)]
pub enum WheelError {
    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// A requested index names no item.
    #[error("index {index} out of range for {len} items")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Item count
        len: usize,
    },
}

/// Result alias for wheel operations; defaults the error to [`WheelError`].
pub type Result<T, E = WheelError> = std::result::Result<T, E>;
