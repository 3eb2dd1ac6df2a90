//! HTTP client for the matching service.

use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::{
    keys::{ImageRef, PersonId},
    matching::{
        FaceMatcher, FaceMatcherError,
        models::{FaceCandidate, IndexedFace, rank_candidates},
    },
};

const API_KEY_HEADER: &str = "X-Api-Key";

/// Configuration for connecting to the matching service.
#[derive(Debug, Clone)]
pub struct FaceMatcherConfig {
    /// Service base address, e.g. `"http://localhost:8500"`.
    pub addr: String,

    /// Optional API key sent as `X-Api-Key`.
    pub api_key: Option<String>,

    /// Minimum similarity (0–100) for a search result to count as a match.
    pub threshold: f32,

    /// Per-request timeout.
    pub timeout: Duration,
}

/// JSON-over-HTTP matching service client.
#[derive(Debug, Clone)]
pub struct HttpFaceMatcher {
    config: FaceMatcherConfig,
    http: Client,
}

impl HttpFaceMatcher {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(config: FaceMatcherConfig) -> Result<Self, FaceMatcherError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, http })
    }

    fn collection_url(&self, collection: &str, action: &str) -> String {
        format!(
            "{}/collections/{collection}/{action}",
            self.config.addr.trim_end_matches('/')
        )
    }

    async fn post_json<B, R>(&self, url: &str, body: &B) -> Result<R, FaceMatcherError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let mut request = self.http.post(url).json(body);

        if let Some(api_key) = &self.config.api_key {
            request = request.header(API_KEY_HEADER, api_key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(FaceMatcherError::UnexpectedResponse(format!(
                "{url} failed with status {status}: {text}"
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl FaceMatcher for HttpFaceMatcher {
    async fn index_face(
        &self,
        collection: &str,
        label: &PersonId,
        reference: &ImageRef,
        image: &[u8],
    ) -> Result<Option<IndexedFace>, FaceMatcherError> {
        let url = self.collection_url(collection, "faces");

        let body = IndexRequest {
            label: label.as_str(),
            reference: reference.as_str(),
            image: BASE64.encode(image),
        };

        let parsed: IndexResponse = self.post_json(&url, &body).await?;

        debug!(
            collection,
            label = %label,
            faces = parsed.faces.len(),
            "index request completed"
        );

        Ok(parsed.into_first_face())
    }

    async fn search_faces(
        &self,
        collection: &str,
        image: &[u8],
        max_candidates: usize,
    ) -> Result<Vec<FaceCandidate>, FaceMatcherError> {
        let url = self.collection_url(collection, "search");

        let body = SearchRequest {
            image: BASE64.encode(image),
            max_candidates,
            threshold: self.config.threshold,
        };

        let parsed: SearchResponse = self.post_json(&url, &body).await?;

        debug!(
            collection,
            matches = parsed.matches.len(),
            "search request completed"
        );

        Ok(rank_candidates(
            parsed.matches,
            self.config.threshold,
            max_candidates,
        ))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct IndexRequest<'a> {
    label: &'a str,
    reference: &'a str,
    image: String,
}

#[derive(Debug, Deserialize)]
struct IndexResponse {
    #[serde(default)]
    faces: Vec<IndexedFace>,
}

impl IndexResponse {
    fn into_first_face(self) -> Option<IndexedFace> {
        self.faces.into_iter().next()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest {
    image: String,
    max_candidates: usize,
    threshold: f32,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    matches: Vec<FaceCandidate>,
}
