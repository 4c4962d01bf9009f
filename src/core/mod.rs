//! Shared plumbing: errors, configuration and string helpers.

pub mod config;
pub mod error;
pub mod utils;

pub use config::Config;
pub use error::{Error, Result};
