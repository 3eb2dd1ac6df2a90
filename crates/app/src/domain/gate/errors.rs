//! Match gate errors.

use thiserror::Error;

use crate::{
    domain::{identities::IdentitiesServiceError, visitors::VisitorsServiceError},
    matching::FaceMatcherError,
};

#[derive(Debug, Error)]
pub enum MatchGateError {
    #[error("malformed request: {0}")]
    Malformed(&'static str),

    #[error("matching service failed")]
    Matcher(#[from] FaceMatcherError),

    #[error("identity lookup failed")]
    Identities(#[from] IdentitiesServiceError),

    #[error("failed to record visit")]
    Visitors(#[from] VisitorsServiceError),
}
