//! Enrollment service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{info, warn};

use crate::{
    blobs::BlobStore,
    domain::{
        enrollment::{data::NewEnrollment, errors::EnrollmentError},
        identities::{IdentitiesService, records::IdentityRecord},
    },
    matching::FaceMatcher,
};

/// Candidates requested when checking whether a face is already enrolled.
const DUPLICATE_FACE_CANDIDATES: usize = 1;

/// Enrollment backed by the identity store, the matching service and the
/// blob store.
///
/// Side effects happen in a fixed order: blob write, face index, identity
/// commit. The identity commit comes last, so any earlier failure leaves no
/// identity behind.
#[derive(Clone)]
pub struct FaceEnrollmentService {
    identities: Arc<dyn IdentitiesService>,
    matcher: Arc<dyn FaceMatcher>,
    blobs: Arc<dyn BlobStore>,
    collection: String,
}

impl FaceEnrollmentService {
    #[must_use]
    pub fn new(
        identities: Arc<dyn IdentitiesService>,
        matcher: Arc<dyn FaceMatcher>,
        blobs: Arc<dyn BlobStore>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            identities,
            matcher,
            blobs,
            collection: collection.into(),
        }
    }
}

fn validate(enrollment: &NewEnrollment) -> Result<(), EnrollmentError> {
    if enrollment.person_id.is_blank() {
        return Err(EnrollmentError::Malformed("employee id is required"));
    }

    if enrollment
        .person_id
        .as_str()
        .chars()
        .any(|c| matches!(c, '/' | '\\') || c.is_control())
    {
        return Err(EnrollmentError::Malformed(
            "employee id may not contain path separators or control characters",
        ));
    }

    if enrollment.image.is_empty() {
        return Err(EnrollmentError::Malformed("image is required"));
    }

    Ok(())
}

#[async_trait]
impl EnrollmentService for FaceEnrollmentService {
    async fn enroll(&self, enrollment: NewEnrollment) -> Result<IdentityRecord, EnrollmentError> {
        validate(&enrollment)?;

        let person = enrollment.person_id.clone();

        if self.identities.get_identity(&person).await?.is_some() {
            info!(person = %person, "enrollment rejected: person already enrolled");

            return Err(EnrollmentError::DuplicatePerson);
        }

        let existing = self
            .matcher
            .search_faces(&self.collection, &enrollment.image, DUPLICATE_FACE_CANDIDATES)
            .await?;

        if let Some(candidate) = existing.first() {
            info!(
                person = %person,
                face_token = %candidate.face_token,
                similarity = candidate.similarity,
                "enrollment rejected: face already enrolled"
            );

            return Err(EnrollmentError::DuplicateFace);
        }

        let image_ref = self
            .blobs
            .put_blob(&enrollment.image_key(), enrollment.image.clone())
            .await?;

        let Some(face) = self
            .matcher
            .index_face(&self.collection, &person, &image_ref, &enrollment.image)
            .await?
        else {
            warn!(person = %person, image = %image_ref, "no face detected in enrollment image");

            return Err(EnrollmentError::NoFaceDetected);
        };

        let face_token = face.face_token.clone();

        let identity = self
            .identities
            .create_identity(enrollment.into_identity(image_ref, face.face_token))
            .await
            .map_err(|error| {
                // The indexed face stays in the collection.
                warn!(
                    person = %person,
                    face_token = %face_token,
                    error = %error,
                    "identity commit failed after indexing; face token orphaned"
                );

                EnrollmentError::from(error)
            })?;

        info!(
            person = %identity.person_id,
            face_token = %identity.face_token,
            "identity enrolled"
        );

        Ok(identity)
    }
}

#[automock]
#[async_trait]
pub trait EnrollmentService: Send + Sync {
    /// Enroll a new person.
    ///
    /// Fails with [`EnrollmentError::DuplicatePerson`] when the person id is
    /// taken and [`EnrollmentError::DuplicateFace`] when the face already
    /// matches someone in the collection.
    async fn enroll(&self, enrollment: NewEnrollment) -> Result<IdentityRecord, EnrollmentError>;
}
