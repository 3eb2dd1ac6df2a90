//! Enrollment errors.

use thiserror::Error;

use crate::{
    blobs::BlobStoreError, domain::identities::IdentitiesServiceError,
    matching::FaceMatcherError,
};

#[derive(Debug, Error)]
pub enum EnrollmentError {
    #[error("malformed enrollment: {0}")]
    Malformed(&'static str),

    #[error("person is already enrolled")]
    DuplicatePerson,

    #[error("face is already enrolled under another person")]
    DuplicateFace,

    #[error("no face detected in enrollment image")]
    NoFaceDetected,

    #[error("identity store unavailable")]
    Identities(#[source] IdentitiesServiceError),

    #[error("matching service unavailable")]
    Matcher(#[from] FaceMatcherError),

    #[error("blob store unavailable")]
    Blobs(#[from] BlobStoreError),
}

impl From<IdentitiesServiceError> for EnrollmentError {
    fn from(error: IdentitiesServiceError) -> Self {
        match error {
            IdentitiesServiceError::AlreadyExists => Self::DuplicatePerson,
            IdentitiesServiceError::FaceTokenTaken => Self::DuplicateFace,
            IdentitiesServiceError::MissingRequiredData | IdentitiesServiceError::InvalidData => {
                Self::Malformed("identity fields rejected by the store")
            }
            IdentitiesServiceError::Sql(_) => Self::Identities(error),
        }
    }
}
