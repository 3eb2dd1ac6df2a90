//! Enrollment Errors

use salvo::http::StatusError;
use tracing::error;

use facegate_app::domain::enrollment::EnrollmentError;

pub(crate) fn into_status_error(error: EnrollmentError) -> StatusError {
    match error {
        EnrollmentError::DuplicatePerson => StatusError::bad_request()
            .brief("Unable to submit the form. Employee ID already exists.")
            .detail("duplicate_person"),
        EnrollmentError::DuplicateFace => StatusError::bad_request()
            .brief("Unable to submit the form. Face is already registered.")
            .detail("duplicate_face"),
        EnrollmentError::Malformed(reason) => StatusError::bad_request()
            .brief(format!("Invalid enrollment payload: {reason}"))
            .detail("malformed"),
        EnrollmentError::NoFaceDetected => StatusError::internal_server_error()
            .brief("Unable to add face to the collection")
            .detail("no_face_detected"),
        EnrollmentError::Identities(source) => {
            error!("failed to store identity: {source}");

            StatusError::internal_server_error()
        }
        EnrollmentError::Matcher(source) => {
            error!("matching service failed during enrollment: {source}");

            StatusError::internal_server_error()
        }
        EnrollmentError::Blobs(source) => {
            error!("failed to store enrollment image: {source}");

            StatusError::internal_server_error()
        }
    }
}
