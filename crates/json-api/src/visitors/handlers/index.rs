//! Visitor Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use facegate_app::domain::visitors::records::{AttendanceStatus, VisitRecord};

use crate::extensions::*;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Visitor ledger entry
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct VisitorResponse {
    pub visitor_id: Uuid,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face_id: Option<String>,

    /// UTC, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,

    /// `Marked` or `Not Marked`
    pub attendance: String,

    /// Probe image as a data URI
    pub image_data: String,
}

fn attendance_label(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Marked => "Marked",
        AttendanceStatus::NotMarked => "Not Marked",
    }
}

impl From<VisitRecord> for VisitorResponse {
    fn from(visit: VisitRecord) -> Self {
        let identity = visit.identity;

        Self {
            visitor_id: visit.uuid.into_uuid(),
            employee_id: identity.as_ref().map(|i| i.person_id.to_string()),
            first_name: identity.as_ref().map(|i| i.first_name.clone()),
            last_name: identity.as_ref().map(|i| i.last_name.clone()),
            contact_number: identity.map(|i| i.contact_number),
            face_id: visit.face_token.map(|token| token.into_inner()),
            timestamp: visit.visited_at.strftime(TIMESTAMP_FORMAT).to_string(),
            attendance: attendance_label(visit.attendance).to_string(),
            image_data: to_data_uri(&visit.image_data),
        }
    }
}

/// Visitor Index Handler
///
/// Returns the visitor ledger, newest first.
#[endpoint(tags("visitors"), summary = "List Visitors")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<VisitorResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let mut visits = state
        .app
        .visitors
        .list_visits()
        .await
        .or_500("failed to fetch visitors")?;

    visits.sort_by(|a, b| b.visited_at.cmp(&a.visited_at));

    Ok(Json(visits.into_iter().map(Into::into).collect()))
}
