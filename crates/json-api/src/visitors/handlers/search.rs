//! Search Face Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use facegate_app::domain::{gate::MatchOutcome, identities::records::IdentityRecord};

use crate::{
    extensions::*,
    visitors::errors::{ambiguous, into_status_error},
};

/// Search Face Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SearchFaceRequest {
    /// Base64 probe image, optionally as a data URI
    pub image: String,
}

/// Matched employee details
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct MatchDetails {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub contact_number: String,
}

impl From<IdentityRecord> for MatchDetails {
    fn from(identity: IdentityRecord) -> Self {
        Self {
            employee_id: identity.person_id.into_inner(),
            first_name: identity.first_name,
            last_name: identity.last_name,
            contact_number: identity.contact_number,
        }
    }
}

/// Search Face Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchFaceResponse {
    pub message: String,

    /// Present when the face belongs to an enrolled employee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<MatchDetails>,

    /// Present when a face matched but no employee holds it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face_id: Option<String>,

    /// Ledger entry recorded for this presentation
    pub visitor_id: Uuid,
}

/// Search Face Handler
///
/// Matches the probe against enrolled faces and records the visit.
#[endpoint(
    tags("visitors"),
    summary = "Search Face",
    responses(
        (status_code = StatusCode::OK, description = "Employee matched, or no face matched"),
        (status_code = StatusCode::NOT_FOUND, description = "Face matched but no employee holds it"),
        (status_code = StatusCode::BAD_REQUEST, description = "Ambiguous match or malformed payload"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Upstream failure"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SearchFaceRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SearchFaceResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let probe = json.into_inner().image.decode_image()?;

    let outcome = state
        .app
        .gate
        .match_face(probe)
        .await
        .map_err(into_status_error)?;

    let response = match outcome {
        MatchOutcome::Accepted { identity, visit } => SearchFaceResponse {
            message: "Face match found!".to_string(),
            details: Some(identity.into()),
            face_id: None,
            visitor_id: visit.into_uuid(),
        },
        MatchOutcome::FoundUnknownFace { face_token, visit } => {
            res.status_code(StatusCode::NOT_FOUND);

            SearchFaceResponse {
                message: "Face match found, but no details in database.".to_string(),
                details: None,
                face_id: Some(face_token.into_inner()),
                visitor_id: visit.into_uuid(),
            }
        }
        MatchOutcome::NotFound { visit } => SearchFaceResponse {
            message: "No matching faces found.".to_string(),
            details: None,
            face_id: None,
            visitor_id: visit.into_uuid(),
        },
        MatchOutcome::Ambiguous { .. } => return Err(ambiguous()),
    };

    Ok(Json(response))
}
