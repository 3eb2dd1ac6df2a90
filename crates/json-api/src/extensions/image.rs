//! Image payload decoding and encoding.
//!
//! Browsers post images as base64, usually as a data URI taken straight from
//! a canvas (`data:image/jpeg;base64,...`). Only the payload after the first
//! comma is decoded.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use salvo::prelude::StatusError;

use crate::extensions::*;

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G'];

pub(crate) trait ImagePayloadExt {
    /// Decode a base64 or data URI image into raw bytes.
    ///
    /// Empty or undecodable payloads are reported as 400 `malformed`.
    fn decode_image(&self) -> Result<Vec<u8>, StatusError>;
}

impl ImagePayloadExt for str {
    fn decode_image(&self) -> Result<Vec<u8>, StatusError> {
        let payload = self
            .split_once(',')
            .map_or(self, |(_prefix, payload)| payload)
            .trim();

        let bytes = BASE64
            .decode(payload)
            .or_400("Invalid image data")
            .map_err(|error| error.detail("malformed"))?;

        if bytes.is_empty() {
            return Err(StatusError::bad_request()
                .brief("Image is required")
                .detail("malformed"));
        }

        Ok(bytes)
    }
}

/// Encode raw image bytes as a data URI for display.
pub(crate) fn to_data_uri(image: &[u8]) -> String {
    // Anything that is not PNG is served as JPEG, the canvas default.
    let mime = if image.starts_with(PNG_MAGIC) {
        "image/png"
    } else {
        "image/jpeg"
    };

    format!("data:{mime};base64,{}", BASE64.encode(image))
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn data_uri_prefix_is_stripped() -> TestResult {
        let bytes = "data:image/jpeg;base64,/9j/4A==".decode_image()?;

        assert_eq!(bytes, [0xFF, 0xD8, 0xFF, 0xE0]);

        Ok(())
    }

    #[test]
    fn bare_base64_is_accepted() -> TestResult {
        assert_eq!("aGVsbG8=".decode_image()?, b"hello");

        Ok(())
    }

    #[test]
    fn invalid_base64_is_malformed() {
        let error = "data:image/jpeg;base64,@@@".decode_image().err();

        assert_eq!(
            error.map(|e| (e.code, e.detail)),
            Some((StatusCode::BAD_REQUEST, Some("malformed".to_owned())))
        );
    }

    #[test]
    fn empty_payload_is_malformed() {
        let error = "data:image/png;base64,".decode_image().err();

        assert_eq!(error.map(|e| e.code), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn data_uri_reflects_image_type() {
        assert_eq!(to_data_uri(&[0xFF, 0xD8, 0xFF, 0xE0]), "data:image/jpeg;base64,/9j/4A==");
        assert!(
            to_data_uri(&[0x89, b'P', b'N', b'G', 0x0D]).starts_with("data:image/png;base64,"),
            "expected png mime type"
        );
    }
}
