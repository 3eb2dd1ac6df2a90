//! Server Config

use clap::Args;

/// Server runtime network settings.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Server host address
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(short, long, env = "SERVER_PORT", default_value = "4999")]
    pub port: u16,

    /// Largest accepted request body, in bytes. Images arrive base64 encoded
    /// inside JSON, so this bounds the image size too.
    #[arg(long, env = "MAX_REQUEST_BODY_BYTES", default_value_t = 10 * 1024 * 1024)]
    pub max_request_body_bytes: u64,

    /// Allowed CORS origins, comma separated, or `*` for any
    #[arg(long, env = "CORS_ALLOW_ORIGIN", default_value = "*")]
    pub cors_allow_origin: String,

    /// Requests slower than this many milliseconds are logged as slow.
    /// Face searches include a matching service round trip.
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 2_500_u64)]
    pub slow_request_threshold_ms: u64,
}

impl ServerRuntimeConfig {
    /// Get the socket address for binding.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
