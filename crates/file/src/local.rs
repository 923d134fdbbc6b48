//! Local filesystem writer implementation

use crate::FILE_EXTENSION;
use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Ensure the destination folder exists, creating it (and any missing parents)
/// when absent.
///
/// Fails if the path exists but is not a directory. Existing content of the
/// folder is left untouched.
pub async fn prepare_destination(path: &Path) -> Result<()> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) if metadata.is_dir() => {
            tracing::debug!("Destination folder already exists: {}", path.display());
        }
        Ok(_) => {
            anyhow::bail!(
                "Destination {} exists but is not a directory",
                path.display()
            );
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tokio::fs::create_dir_all(path)
                .await
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            tracing::info!("Created destination folder: {}", path.display());
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to inspect destination: {}", path.display()));
        }
    }
    Ok(())
}

/// Writes message values to `<dir>/<n>.json`
#[derive(Debug, Clone)]
pub struct MessageFileWriter {
    dir: PathBuf,
}

impl MessageFileWriter {
    /// Prepare `dir` and return a writer targeting it
    pub async fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        prepare_destination(&dir).await?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding message number `number`
    pub fn path_for(&self, number: u64) -> PathBuf {
        self.dir.join(format!("{number}.{FILE_EXTENSION}"))
    }

    /// Write `contents` verbatim as message number `number`, replacing any
    /// previous file of the same name.
    pub async fn write(&self, number: u64, contents: &[u8]) -> Result<PathBuf> {
        let path = self.path_for(number);
        tokio::fs::write(&path, contents)
            .await
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        tracing::trace!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(path)
    }
}
