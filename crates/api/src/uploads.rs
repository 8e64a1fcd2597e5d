//! Filesystem store for uploaded character images.
//!
//! Files live under `<root>/<character_id>/<filename>`, so a character's
//! uploads can be served statically from a predictable path and removed as
//! one directory when the character is deleted.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use guidebook_core::types::DbId;

/// Handle to the upload directory. Cheap to clone; constructed once at
/// startup and injected through `AppState`.
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: Arc<PathBuf>,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    /// Root directory that static file serving mounts.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root directory if it does not exist yet.
    pub async fn init(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(self.root.as_path()).await
    }

    /// Directory holding one character's uploads.
    pub fn character_dir(&self, character_id: DbId) -> PathBuf {
        self.root.join(character_id.to_string())
    }

    /// Path of a single stored upload.
    pub fn file_path(&self, character_id: DbId, filename: &str) -> PathBuf {
        self.character_dir(character_id).join(filename)
    }

    /// Persist an upload, creating the character directory on first use.
    pub async fn save(
        &self,
        character_id: DbId,
        filename: &str,
        bytes: &[u8],
    ) -> std::io::Result<()> {
        let dir = self.character_dir(character_id);
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(filename), bytes).await
    }

    /// Remove a single stored upload.
    pub async fn remove_file(&self, character_id: DbId, filename: &str) -> std::io::Result<()> {
        tokio::fs::remove_file(self.file_path(character_id, filename)).await
    }

    /// Remove a character's entire upload directory. A missing directory
    /// (character never had uploads) is not an error.
    pub async fn remove_character_dir(&self, character_id: DbId) -> std::io::Result<()> {
        match tokio::fs::remove_dir_all(self.character_dir(character_id)).await {
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}
