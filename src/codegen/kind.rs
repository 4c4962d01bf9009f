//! Template kind definitions.
//!
//! A [`TemplateKind`] selects the generation intent for an endpoint (a
//! managed resource or a read-only data source). An [`ArtifactKind`]
//! selects which file is rendered for it (source code or documentation).
//!
//! # Examples
//!
//! ```
//! use pathgen::codegen::TemplateKind;
//! use std::str::FromStr;
//!
//! let kind = TemplateKind::from_str("data-source").unwrap();
//! assert_eq!(kind, TemplateKind::DataSource);
//! assert_eq!(kind.as_str(), "data_source");
//! assert_eq!(kind.dir_name(), "datasources");
//!
//! // The default kind is Resource
//! assert_eq!(TemplateKind::default(), TemplateKind::Resource);
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::str::FromStr;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};

/// Generation intent for an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// A resource supporting create/read/update/delete
    #[default]
    #[serde(alias = "resources")]
    Resource,
    /// A read-only data source
    #[serde(alias = "datasource", alias = "datasources", alias = "data-source")]
    DataSource,
}

impl TemplateKind {
    /// Returns the kind identifier as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resource => "resource",
            Self::DataSource => "data_source",
        }
    }

    /// Directory the kind's generated files live under
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Resource => "resources",
            Self::DataSource => "datasources",
        }
    }

    /// Returns an iterator over all template kinds
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::Resource, Self::DataSource].into_iter()
    }
}

impl FromStr for TemplateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "resource" | "resources" => Ok(Self::Resource),
            "data_source" | "datasource" | "datasources" | "data-source" => Ok(Self::DataSource),
            _ => Err(format!("Unknown template kind: {s}")),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which file is rendered for an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Generated provider source
    Code,
    /// Generated documentation page
    Doc,
}

impl ArtifactKind {
    /// Returns an iterator over all artifact kinds, code first
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::Code, Self::Doc].into_iter()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Doc => "doc",
        }
    }

    pub fn file_extension(&self) -> &'static str {
        match self {
            Self::Code => "go",
            Self::Doc => "md",
        }
    }

    /// Name of the template rendering this artifact for `kind`,
    /// e.g. `resources/code.tera`.
    pub fn template_name(&self, kind: TemplateKind) -> String {
        format!("{}/{}.tera", kind.dir_name(), self.as_str())
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
