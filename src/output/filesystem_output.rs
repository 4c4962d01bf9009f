//! Filesystem-based output sink

use async_trait::async_trait;
use tokio::fs;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::debug;

use super::{Artifact, OutputSink};
use crate::core::error::{Error, Result};

/// Output sink that writes artifacts to the filesystem, replacing any
/// existing file at the same path
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemOutput;

impl FileSystemOutput {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OutputSink for FileSystemOutput {
    async fn write_artifact(&self, artifact: &Artifact) -> Result<()> {
        if let Some(parent) = artifact.path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                Error::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create directory {}: {e}", parent.display()),
                ))
            })?;
        }

        let file = fs::File::create(&artifact.path).await.map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create file {}: {e}", artifact.path.display()),
            ))
        })?;

        let mut writer = BufWriter::new(file);
        writer.write_all(artifact.content.as_bytes()).await?;
        writer.flush().await?;

        debug!(
            path = %artifact.path.display(),
            bytes = artifact.content.len(),
            "Wrote artifact"
        );
        Ok(())
    }
}
