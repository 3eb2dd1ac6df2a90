//! Blob store errors.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlobStoreError {
    #[error("invalid blob key: {0:?}")]
    InvalidKey(String),

    #[error("blob storage error")]
    Io(#[from] io::Error),
}
