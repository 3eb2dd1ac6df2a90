//! Identities service errors.

use sqlx::{Error, error::ErrorKind};
use thiserror::Error;

/// Name of the unique constraint backing face-token lookups.
const FACE_TOKEN_CONSTRAINT: &str = "identities_face_token_key";

#[derive(Debug, Error)]
pub enum IdentitiesServiceError {
    #[error("identity already exists")]
    AlreadyExists,

    #[error("face token already bound to another identity")]
    FaceTokenTaken,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for IdentitiesServiceError {
    fn from(error: Error) -> Self {
        let Some(database_error) = error.as_database_error() else {
            return Self::Sql(error);
        };

        match database_error.kind() {
            ErrorKind::UniqueViolation
                if database_error.constraint() == Some(FACE_TOKEN_CONSTRAINT) =>
            {
                Self::FaceTokenTaken
            }
            ErrorKind::UniqueViolation => Self::AlreadyExists,
            ErrorKind::NotNullViolation => Self::MissingRequiredData,
            ErrorKind::CheckViolation => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}
