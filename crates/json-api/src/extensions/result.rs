//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::error;

pub(crate) trait ResultExt<T> {
    /// Log the error with `context` and collapse it into an opaque 500.
    fn or_500(self, context: &str) -> Result<T, StatusError>;

    /// Report the error as a 400 with `brief` as the message.
    fn or_400(self, brief: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }

    fn or_400(self, brief: &str) -> Result<T, StatusError> {
        self.map_err(|_ignored| StatusError::bad_request().brief(brief))
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn or_500_hides_the_source_error() {
        let result: Result<(), &str> = Err("connection reset by peer");

        let status = result.or_500("failed to list visits").err();

        assert_eq!(
            status.map(|s| (s.code, s.brief.contains("connection reset"))),
            Some((StatusCode::INTERNAL_SERVER_ERROR, false))
        );
    }

    #[test]
    fn or_400_uses_the_given_brief() {
        let result: Result<(), &str> = Err("bad base64");

        let status = result.or_400("Invalid image data").err();

        assert_eq!(
            status.map(|s| (s.code, s.brief)),
            Some((StatusCode::BAD_REQUEST, "Invalid image data".to_owned()))
        );
    }
}
