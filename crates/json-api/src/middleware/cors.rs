//! CORS policy.

use salvo::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Cors, CorsHandler},
    http::{
        Method,
        header::{HeaderValue, InvalidHeaderValue},
    },
};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum CorsConfigError {
    #[error("invalid CORS origin {origin:?}: {source}")]
    InvalidOrigin {
        origin: String,
        #[source]
        source: InvalidHeaderValue,
    },
}

fn allow_origin(origins: &str) -> Result<AllowOrigin, CorsConfigError> {
    if origins.trim() == "*" {
        return Ok(AllowOrigin::any());
    }

    let origins = origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|source| CorsConfigError::InvalidOrigin {
                origin: origin.to_owned(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AllowOrigin::list(origins))
}

/// CORS handler answering preflight requests ahead of routing.
///
/// `origins` is `*` or a comma separated origin list.
///
/// # Errors
///
/// Returns an error when a configured origin is not a valid header value.
pub(crate) fn cors_handler(origins: &str) -> Result<CorsHandler, CorsConfigError> {
    Ok(Cors::new()
        .allow_origin(allow_origin(origins)?)
        .allow_methods(AllowMethods::list([Method::GET, Method::POST, Method::OPTIONS]))
        .allow_headers(AllowHeaders::any())
        .into_handler())
}
