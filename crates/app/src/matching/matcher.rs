//! Matching service contract.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    keys::{ImageRef, PersonId},
    matching::{
        FaceMatcherError,
        models::{FaceCandidate, IndexedFace},
    },
};

#[automock]
#[async_trait]
pub trait FaceMatcher: Send + Sync {
    /// Index the face in `image` into `collection`, labelled with `label`.
    ///
    /// `reference` is the blob key the image was stored under. Returns `None`
    /// when the service found no usable face.
    async fn index_face(
        &self,
        collection: &str,
        label: &PersonId,
        reference: &ImageRef,
        image: &[u8],
    ) -> Result<Option<IndexedFace>, FaceMatcherError>;

    /// Search `collection` for faces similar to `image`.
    ///
    /// Returns at most `max_candidates` results above the configured
    /// similarity threshold, best first.
    async fn search_faces(
        &self,
        collection: &str,
        image: &[u8],
        max_candidates: usize,
    ) -> Result<Vec<FaceCandidate>, FaceMatcherError>;
}
