//! Filesystem-backed blob store.

use std::{
    io::ErrorKind,
    path::{Component, Path, PathBuf},
};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::{
    blobs::{BlobStore, BlobStoreError},
    keys::ImageRef,
};

/// Stores blobs as files below a root directory.
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve `key` below the root. Keys must be relative and may not climb
    /// out of the root directory.
    fn resolve(&self, key: &str) -> Result<PathBuf, BlobStoreError> {
        let relative = Path::new(key);

        let is_plain = !key.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));

        if !is_plain {
            return Err(BlobStoreError::InvalidKey(key.to_owned()));
        }

        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn put_blob(&self, key: &str, bytes: Vec<u8>) -> Result<ImageRef, BlobStoreError> {
        let path = self.resolve(key)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        // Write to a sibling file first so readers never observe a partial image.
        let staging = path.with_extension("partial");

        fs::write(&staging, &bytes).await?;
        fs::rename(&staging, &path).await?;

        debug!(key, size = bytes.len(), "stored blob");

        Ok(ImageRef::new(key))
    }

    async fn get_blob(&self, reference: &ImageRef) -> Result<Option<Vec<u8>>, BlobStoreError> {
        let path = self.resolve(reference.as_str())?;

        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }
}
