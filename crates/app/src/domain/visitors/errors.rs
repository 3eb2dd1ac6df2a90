//! Visitors service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VisitorsServiceError {
    #[error("visit already recorded")]
    AlreadyExists,

    #[error("invalid data")]
    InvalidData,

    #[error("unknown attendance status: {0:?}")]
    UnknownAttendance(String),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for VisitorsServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::CheckViolation | ErrorKind::NotNullViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
