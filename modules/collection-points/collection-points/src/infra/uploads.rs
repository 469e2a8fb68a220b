//! Local storage for uploaded point images.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

const FALLBACK_FILE_NAME: &str = "image";

/// Writes uploaded images into a single directory under collision-resistant names.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    /// Use `dir` for uploads, creating it if needed.
    ///
    /// # Errors
    /// Returns the I/O error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist `bytes` and return the stored file name.
    ///
    /// # Errors
    /// Returns the I/O error if the file cannot be written.
    pub async fn store(&self, original_name: &str, bytes: &[u8]) -> io::Result<String> {
        let name = stored_file_name(original_name);
        tokio::fs::write(self.dir.join(&name), bytes).await?;
        debug!(file = %name, size = bytes.len(), "Stored uploaded image");
        Ok(name)
    }

    /// Write a bundled asset under its fixed `name` unless a file of that
    /// name already exists, so operators can replace it. Returns whether
    /// the file was written.
    ///
    /// # Errors
    /// Returns the I/O error if the file cannot be checked or written.
    pub async fn install(&self, name: &str, bytes: &[u8]) -> io::Result<bool> {
        let path = self.dir.join(name);
        if tokio::fs::try_exists(&path).await? {
            return Ok(false);
        }
        tokio::fs::write(&path, bytes).await?;
        debug!(file = %name, "Installed bundled asset");
        Ok(true)
    }

    /// Remove a stored image. Failures are logged, not returned.
    pub async fn discard(&self, name: &str) {
        if let Err(e) = tokio::fs::remove_file(self.dir.join(name)).await {
            warn!(file = %name, error = %e, "Failed to remove orphaned image");
        }
    }
}

/// `<12 hex chars>-<original base name>` with anything outside
/// `[A-Za-z0-9._-]` replaced by `_`.
fn stored_file_name(original_name: &str) -> String {
    let prefix = hex::encode(rand::random::<[u8; 6]>());

    let base = Path::new(original_name)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .unwrap_or(FALLBACK_FILE_NAME);

    let sanitized: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!("{prefix}-{sanitized}")
}
