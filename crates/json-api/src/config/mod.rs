//! Server configuration module

use clap::Parser;

use crate::config::{
    blobs::BlobStoreConfig,
    db::DatabaseConfig,
    matching::MatchingConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod blobs;
pub(crate) mod db;
pub(crate) mod matching;
pub(crate) mod observability;
pub(crate) mod server;

/// Facegate JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "facegate-json", about = "Facegate JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Observability (traces/metrics) settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Matching service settings.
    #[command(flatten)]
    pub matching: MatchingConfig,

    /// Enrollment image storage settings.
    #[command(flatten)]
    pub blobs: BlobStoreConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Application wiring settings derived from this configuration.
    #[must_use]
    pub fn app_config(&self) -> facegate_app::context::AppConfig {
        facegate_app::context::AppConfig {
            database_url: self.database.database_url.clone(),
            matcher: self.matching.matcher_config(),
            collection: self.matching.collection_id.clone(),
            blob_dir: self.blobs.blob_store_dir.clone(),
        }
    }
}
