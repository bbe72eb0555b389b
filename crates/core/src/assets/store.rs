//! Local filesystem blob store for image assets.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::mime::extension_for_mime;
use super::AssetError;
use crate::types::DbId;

/// Stores image bytes under a root directory, one sub-directory per book.
#[derive(Debug, Clone)]
pub struct LocalAssetStore {
    root: PathBuf,
}

impl LocalAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding every asset of a book.
    pub fn book_dir(&self, book_id: DbId) -> PathBuf {
        self.root.join(book_id.to_string())
    }

    /// `{root}/{book_id}/{image_id}.{ext}` for the given MIME type.
    pub fn path_for(&self, book_id: DbId, image_id: DbId, mime_type: &str) -> PathBuf {
        self.book_dir(book_id)
            .join(format!("{image_id}.{}", extension_for_mime(mime_type)))
    }

    /// Write a blob, creating the book directory if needed.
    pub async fn write(
        &self,
        book_id: DbId,
        image_id: DbId,
        mime_type: &str,
        bytes: &[u8],
    ) -> Result<PathBuf, AssetError> {
        tokio::fs::create_dir_all(self.book_dir(book_id)).await?;
        let path = self.path_for(book_id, image_id, mime_type);
        tokio::fs::write(&path, bytes).await?;
        Ok(path)
    }

    /// Read a blob. A missing file is reported as [`AssetError::FileMissing`].
    pub async fn read(
        &self,
        book_id: DbId,
        image_id: DbId,
        mime_type: &str,
    ) -> Result<Vec<u8>, AssetError> {
        let path = self.path_for(book_id, image_id, mime_type);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(AssetError::FileMissing(image_id.to_string()))
            }
            Err(e) => Err(AssetError::Io(e)),
        }
    }

    /// Delete a blob. Returns `false` if it was already gone.
    pub async fn delete(
        &self,
        book_id: DbId,
        image_id: DbId,
        mime_type: &str,
    ) -> Result<bool, AssetError> {
        let path = self.path_for(book_id, image_id, mime_type);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AssetError::Io(e)),
        }
    }

    /// Remove a book's whole asset directory. Returns `false` if absent.
    pub async fn remove_book_dir(&self, book_id: DbId) -> Result<bool, AssetError> {
        match tokio::fs::remove_dir_all(self.book_dir(book_id)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AssetError::Io(e)),
        }
    }
}
