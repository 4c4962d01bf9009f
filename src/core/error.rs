//! Error handling for the pathgen library.
//!
//! This module defines the main error type `Error` used by the loading,
//! rendering and output layers, along with a convenient `Result` type alias.
//! Validation failures keep their own type ([`ValidationError`]) so callers
//! can inspect the offending endpoint; they convert into `Error` with `?`.
//!
//! # Examples
//!
//! ```
//! use pathgen::core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::config("output_dir is not a directory"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use thiserror::Error;

use crate::codegen::ValidationError;

/// Result type for pathgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for pathgen operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Template error
    #[error("Template error: {0}")]
    Template(String),

    /// Template engine error
    #[error("Template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The endpoint failed validation and was not rendered
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new template error
    pub fn template<S: Into<String>>(msg: S) -> Self {
        Self::Template(msg.into())
    }

    /// Whether this error comes from validation rather than I/O or rendering.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
