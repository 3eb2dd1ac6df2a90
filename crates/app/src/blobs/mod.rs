//! Blob Store
//!
//! Raw enrollment images are kept outside the database, addressed by a
//! relative key such as `registration/E-1.jpg`.

mod errors;
mod filesystem;
mod store;

pub use errors::BlobStoreError;
pub use filesystem::FsBlobStore;
pub use store::*;
