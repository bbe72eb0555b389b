//! Image asset handling.
//!
//! Image metadata lives in the database; the bytes live on disk under
//! `{root}/{book_id}/{image_id}.{ext}`, where the extension is derived from
//! the declared MIME type. This module owns that path convention and the
//! file I/O. Database writes are performed by the caller.

pub mod mime;
pub mod store;

pub use mime::extension_for_mime;
pub use store::LocalAssetStore;

/// Asset-storage error type.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// Metadata exists but the blob is missing on disk.
    #[error("File missing for asset {0}")]
    FileMissing(String),

    #[error("Asset I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
