//! Where rendered files go.
//!
//! Code for an endpoint lands at
//! `<root>/generated/<kind dir>/<endpoint>.go` and its documentation at
//! `<root>/website/docs/generated/<kind dir>/<endpoint>.md`, with the curly
//! braces of positional markers removed from the endpoint. For
//! `/transform/role/{name}` as a resource that is
//! `generated/resources/transform/role/name.go`.

pub mod filesystem_output;

pub use filesystem_output::FileSystemOutput;

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::codegen::{ArtifactKind, TemplateKind};
use crate::core::error::Result;

/// Directory (under the output root) holding generated code
pub const CODE_DIR: &str = "generated";

/// Directory (under the output root) holding generated documentation
pub const DOC_DIR: &str = "website/docs/generated";

/// A rendered file and its destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

/// Destination for rendered artifacts
#[async_trait]
pub trait OutputSink: Send + Sync {
    /// Write one artifact, creating parent directories as needed.
    async fn write_artifact(&self, artifact: &Artifact) -> Result<()>;
}

/// Path of the `artifact` file for `endpoint` under `root`.
pub fn artifact_path(
    root: &Path,
    kind: TemplateKind,
    artifact: ArtifactKind,
    endpoint: &str,
) -> PathBuf {
    let base = match artifact {
        ArtifactKind::Code => CODE_DIR,
        ArtifactKind::Doc => DOC_DIR,
    };

    let mut path = root.join(base).join(kind.dir_name());
    let mut segments = endpoint
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(strip_braces)
        .peekable();
    while let Some(segment) = segments.next() {
        if segments.peek().is_some() {
            path.push(segment);
        } else {
            // Dots in the last segment belong to the name
            path.push(format!("{segment}.{}", artifact.file_extension()));
        }
    }
    path
}

/// Path of the generated code file for `endpoint`.
pub fn code_file_path(root: &Path, kind: TemplateKind, endpoint: &str) -> PathBuf {
    artifact_path(root, kind, ArtifactKind::Code, endpoint)
}

/// Path of the generated documentation file for `endpoint`.
pub fn doc_file_path(root: &Path, kind: TemplateKind, endpoint: &str) -> PathBuf {
    artifact_path(root, kind, ArtifactKind::Doc, endpoint)
}

fn strip_braces(segment: &str) -> String {
    segment.replace(['{', '}'], "")
}
