//! Enroll Employee Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use facegate_app::{domain::enrollment::data::NewEnrollment, keys::PersonId};

use crate::{employees::errors::into_status_error, extensions::*};

/// Enrollment Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubmitRequest {
    /// Caller-assigned employee id, unique per person
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub contact_number: String,

    /// Base64 image, optionally as a data URI
    pub image: String,
}

impl SubmitRequest {
    fn into_enrollment(self) -> Result<NewEnrollment, StatusError> {
        let image = self.image.decode_image()?;

        Ok(NewEnrollment {
            person_id: PersonId::new(self.employee_id.trim()),
            first_name: self.first_name,
            last_name: self.last_name,
            contact_number: self.contact_number,
            image,
        })
    }
}

/// Enrollment Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubmitResponse {
    pub message: String,

    /// Face token assigned by the matching service
    #[serde(rename = "FaceId")]
    pub face_id: String,
}

/// Enroll Employee Handler
///
/// Stores the image, indexes the face and commits the employee record.
#[endpoint(
    tags("employees"),
    summary = "Enroll Employee",
    responses(
        (status_code = StatusCode::OK, description = "Employee enrolled"),
        (status_code = StatusCode::BAD_REQUEST, description = "Duplicate employee, duplicate face or malformed payload"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "No face detected or upstream failure"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SubmitRequest>,
    depot: &mut Depot,
) -> Result<Json<SubmitResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let enrollment = json.into_inner().into_enrollment()?;

    let identity = state
        .app
        .enrollment
        .enroll(enrollment)
        .await
        .map_err(into_status_error)?;

    Ok(Json(SubmitResponse {
        message: "Form details and image saved successfully!".to_string(),
        face_id: identity.face_token.into_inner(),
    }))
}

#[cfg(test)]
mod tests {
    use facegate_app::domain::{
        enrollment::{EnrollmentError, MockEnrollmentService},
        identities::MockIdentitiesService,
    };
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::{employees_service, make_identity};

    use super::*;

    fn make_service(enrollment: MockEnrollmentService) -> Service {
        employees_service(
            MockIdentitiesService::new(),
            enrollment,
            Router::with_path("submit").post(handler),
        )
    }

    fn body(image: &str) -> serde_json::Value {
        json!({
            "employeeId": " E-1 ",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "contactNumber": "555-0100",
            "image": image,
        })
    }

    #[tokio::test]
    async fn test_submit_success_returns_face_id() -> TestResult {
        let mut enrollment = MockEnrollmentService::new();

        enrollment
            .expect_enroll()
            .once()
            .withf(|new| {
                *new == NewEnrollment {
                    person_id: PersonId::new("E-1"),
                    first_name: "Ada".to_string(),
                    last_name: "Lovelace".to_string(),
                    contact_number: "555-0100".to_string(),
                    image: b"hello".to_vec(),
                }
            })
            .return_once(|_| Ok(make_identity("E-1")));

        let mut res = TestClient::post("http://example.com/submit")
            .json(&body("data:image/jpeg;base64,aGVsbG8="))
            .send(&make_service(enrollment))
            .await;

        let body: SubmitResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.message, "Form details and image saved successfully!");
        assert_eq!(body.face_id, "face-E-1");

        Ok(())
    }

    #[tokio::test]
    async fn test_submit_duplicate_person_returns_400() {
        let mut enrollment = MockEnrollmentService::new();

        enrollment
            .expect_enroll()
            .once()
            .return_once(|_| Err(EnrollmentError::DuplicatePerson));

        let res = TestClient::post("http://example.com/submit")
            .json(&body("aGVsbG8="))
            .send(&make_service(enrollment))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_submit_duplicate_face_returns_400() {
        let mut enrollment = MockEnrollmentService::new();

        enrollment
            .expect_enroll()
            .once()
            .return_once(|_| Err(EnrollmentError::DuplicateFace));

        let res = TestClient::post("http://example.com/submit")
            .json(&body("aGVsbG8="))
            .send(&make_service(enrollment))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_submit_no_face_returns_500() {
        let mut enrollment = MockEnrollmentService::new();

        enrollment
            .expect_enroll()
            .once()
            .return_once(|_| Err(EnrollmentError::NoFaceDetected));

        let res = TestClient::post("http://example.com/submit")
            .json(&body("aGVsbG8="))
            .send(&make_service(enrollment))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn test_submit_undecodable_image_returns_400_without_enrolling() {
        let mut enrollment = MockEnrollmentService::new();

        enrollment.expect_enroll().never();

        let res = TestClient::post("http://example.com/submit")
            .json(&body("data:image/jpeg;base64,not base64!"))
            .send(&make_service(enrollment))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_submit_missing_field_returns_400() {
        let mut enrollment = MockEnrollmentService::new();

        enrollment.expect_enroll().never();

        let res = TestClient::post("http://example.com/submit")
            .json(&json!({ "employeeId": "E-1", "image": "aGVsbG8=" }))
            .send(&make_service(enrollment))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
