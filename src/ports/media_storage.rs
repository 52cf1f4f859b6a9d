//! Media storage port.

use async_trait::async_trait;

use crate::domain::course::MediaAsset;
use crate::domain::foundation::DomainError;

/// A file received from a multipart upload, ready to push to storage.
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    /// Storage folder to place the asset under.
    pub folder: String,
}

/// Port for the external media storage service.
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Upload a file, returning its storage id and servable URL.
    async fn upload(&self, upload: MediaUpload) -> Result<MediaAsset, DomainError>;

    /// Delete an asset by its storage id.
    async fn delete(&self, public_id: &str) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_storage_is_object_safe() {
        fn _accepts_dyn(_storage: &dyn MediaStorage) {}
    }
}
