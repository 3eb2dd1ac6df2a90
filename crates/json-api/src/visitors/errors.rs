//! Match Gate Errors

use salvo::http::StatusError;
use tracing::error;

use facegate_app::domain::gate::MatchGateError;

pub(crate) fn into_status_error(error: MatchGateError) -> StatusError {
    match error {
        MatchGateError::Malformed(reason) => StatusError::bad_request()
            .brief(format!("Invalid search payload: {reason}"))
            .detail("malformed"),
        MatchGateError::Matcher(source) => {
            error!("matching service failed during search: {source}");

            StatusError::internal_server_error()
        }
        MatchGateError::Identities(source) => {
            error!("failed to resolve matched face: {source}");

            StatusError::internal_server_error()
        }
        MatchGateError::Visitors(source) => {
            error!("failed to record visit: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn ambiguous() -> StatusError {
    StatusError::bad_request()
        .brief("Multiple matching faces found.")
        .detail("ambiguous")
}
