//! Employee Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use facegate_app::domain::identities::records::IdentityRecord;

use crate::extensions::*;

/// Enrolled Employee
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct EmployeeResponse {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub contact_number: String,

    /// Blob key of the enrollment image
    pub image_id: String,

    /// Face token assigned by the matching service
    pub face_id: String,

    pub created_at: String,
}

impl From<IdentityRecord> for EmployeeResponse {
    fn from(identity: IdentityRecord) -> Self {
        Self {
            employee_id: identity.person_id.into_inner(),
            first_name: identity.first_name,
            last_name: identity.last_name,
            contact_number: identity.contact_number,
            image_id: identity.image_ref.into_inner(),
            face_id: identity.face_token.into_inner(),
            created_at: identity.created_at.to_string(),
        }
    }
}

/// Employee Index Handler
///
/// Returns every enrolled employee.
#[endpoint(tags("employees"), summary = "List Employees")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<EmployeeResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let identities = state
        .app
        .identities
        .list_identities()
        .await
        .or_500("failed to fetch employees")?;

    Ok(Json(identities.into_iter().map(Into::into).collect()))
}
