//! Matching Service Config

use std::time::Duration;

use clap::Args;

use facegate_app::matching::FaceMatcherConfig;

/// Matching service settings.
#[derive(Debug, Args)]
pub struct MatchingConfig {
    /// Matching service base address
    #[arg(long = "face-matcher-url", env = "FACE_MATCHER_URL")]
    pub matcher_url: String,

    /// Matching service API key
    #[arg(long = "face-matcher-api-key", env = "FACE_MATCHER_API_KEY", hide_env_values = true)]
    pub matcher_api_key: Option<String>,

    /// Face collection searched and indexed into
    #[arg(long, env = "FACE_COLLECTION_ID", default_value = "face-collection")]
    pub collection_id: String,

    /// Minimum similarity (0-100) for a search result to count as a match
    #[arg(
        long,
        env = "FACE_MATCH_THRESHOLD",
        default_value_t = 80.0_f32,
        value_parser = parse_match_threshold
    )]
    pub match_threshold: f32,

    /// Matching service request timeout in seconds
    #[arg(long = "face-matcher-timeout-seconds", env = "FACE_MATCHER_TIMEOUT_SECONDS", default_value_t = 10_u64)]
    pub matcher_timeout_seconds: u64,
}

impl MatchingConfig {
    /// Client settings for the matching service.
    #[must_use]
    pub fn matcher_config(&self) -> FaceMatcherConfig {
        FaceMatcherConfig {
            addr: self.matcher_url.clone(),
            api_key: self
                .matcher_api_key
                .clone()
                .filter(|key| !key.trim().is_empty()),
            threshold: self.match_threshold,
            timeout: Duration::from_secs(self.matcher_timeout_seconds),
        }
    }
}

/// Parses a similarity percentage, refusing anything non-finite or outside 0-100.
fn parse_match_threshold(value: &str) -> Result<f32, String> {
    let threshold: f32 = value
        .trim()
        .parse()
        .map_err(|_ignored| format!("`{value}` is not a number"))?;

    if !(0.0..=100.0).contains(&threshold) {
        return Err(format!("`{value}` is not a similarity between 0 and 100"));
    }

    Ok(threshold)
}
