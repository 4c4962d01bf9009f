//! Generator configuration.
//!
//! A [`Config`] can be read from a TOML (`.toml`) or YAML (`.yml`, `.yaml`)
//! file. Every field is optional in the file; missing values fall back to
//! [`Config::default`]. The binary layers CLI flags on top.
//!
//! ```toml
//! output_dir = "out"
//! template_dir = "templates"
//! generate_docs = true
//!
//! [endpoints]
//! "/transform/role/{name}" = "resource"
//! "/transform/decode/{role_name}" = "data_source"
//! ```

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codegen::{EndpointRegistry, TemplateKind};
use crate::core::error::{Error, Result};

/// Environment variable consulted for the template directory when neither the
/// CLI nor the config file sets one.
pub const TEMPLATE_DIR_ENV: &str = "PATHGEN_TEMPLATE_DIR";

/// Settings for a generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root that the `generated/` and `website/` trees are written under
    pub output_dir: PathBuf,
    /// Directory of `.tera` templates replacing the built-in ones
    pub template_dir: Option<PathBuf>,
    /// Whether documentation files are rendered next to the code files
    pub generate_docs: bool,
    /// Endpoints to generate and the template kind for each.
    /// Empty means "use the built-in registry".
    pub endpoints: IndexMap<String, TemplateKind>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            template_dir: None,
            generate_docs: true,
            endpoints: IndexMap::new(),
        }
    }
}

impl Config {
    /// Load a config file, choosing the format from its extension.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::config(format!("Failed to read config {}: {e}", path.display()))
        })?;
        debug!(path = %path.display(), "Loaded config file");
        Self::parse(path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(toml::from_str(content)?),
            Some("yml") | Some("yaml") => Ok(serde_yaml::from_str(content)?),
            _ => Err(Error::config(format!(
                "Unsupported config format for {} (expected .toml, .yml or .yaml)",
                path.display()
            ))),
        }
    }

    /// Fill `template_dir` from [`TEMPLATE_DIR_ENV`] if it is still unset.
    pub fn with_env_template_dir(mut self) -> Self {
        if self.template_dir.is_none() {
            self.template_dir = std::env::var_os(TEMPLATE_DIR_ENV).map(PathBuf::from);
        }
        self
    }

    /// The endpoint registry this config selects.
    pub fn registry(&self) -> EndpointRegistry {
        if self.endpoints.is_empty() {
            EndpointRegistry::default()
        } else {
            EndpointRegistry::from_entries(self.endpoints.clone())
        }
    }
}
