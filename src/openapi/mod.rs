//! OpenAPI document loading.
//!
//! Documents may be JSON or YAML; the format is detected from the content
//! rather than the file extension.

pub mod types;

pub use types::*;

use std::path::Path;

use tracing::debug;

use crate::core::error::Result;

/// Parse an OpenAPI document from a string.
///
/// Content whose first non-whitespace character is `{` is parsed as JSON,
/// anything else as YAML.
pub fn parse_document(content: &str) -> Result<OpenApiDocument> {
    if content.trim_start().starts_with('{') {
        return Ok(serde_json::from_str(content)?);
    }
    Ok(serde_yaml::from_str(content)?)
}

/// Load an OpenAPI document from a file.
pub async fn load_document(path: &Path) -> Result<OpenApiDocument> {
    let content = tokio::fs::read_to_string(path).await?;
    let document = parse_document(&content)?;
    debug!(
        path = %path.display(),
        paths = document.paths.len(),
        "Loaded OpenAPI document"
    );
    Ok(document)
}
