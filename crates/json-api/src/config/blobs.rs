//! Blob Store Config

use std::path::PathBuf;

use clap::Args;

/// Enrollment image storage settings.
#[derive(Debug, Args)]
pub struct BlobStoreConfig {
    /// Directory enrollment images are written under
    #[arg(long, env = "BLOB_STORE_DIR", default_value = "./uploads")]
    pub blob_store_dir: PathBuf,
}
