//! Blob store contract.

use async_trait::async_trait;
use mockall::automock;

use crate::{blobs::BlobStoreError, keys::ImageRef};

#[automock]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `bytes` under `key`, replacing anything already there.
    async fn put_blob(&self, key: &str, bytes: Vec<u8>) -> Result<ImageRef, BlobStoreError>;

    /// Fetch a stored blob, `None` when nothing is stored under the reference.
    async fn get_blob(&self, reference: &ImageRef) -> Result<Option<Vec<u8>>, BlobStoreError>;
}
