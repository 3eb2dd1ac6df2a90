//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use facegate_app::{
    context::AppContext,
    domain::{
        enrollment::MockEnrollmentService, gate::MockMatchGate,
        identities::{MockIdentitiesService, records::IdentityRecord},
        visitors::MockVisitorsService,
    },
    keys::{FaceToken, ImageRef, PersonId},
};

use crate::state::State;

fn strict_identities_mock() -> MockIdentitiesService {
    let mut identities = MockIdentitiesService::new();

    identities.expect_get_identity().never();
    identities.expect_create_identity().never();
    identities.expect_find_identity_by_face_token().never();
    identities.expect_list_identities().never();

    identities
}

fn strict_visitors_mock() -> MockVisitorsService {
    let mut visitors = MockVisitorsService::new();

    visitors.expect_record_visit().never();
    visitors.expect_list_visits().never();

    visitors
}

fn strict_enrollment_mock() -> MockEnrollmentService {
    let mut enrollment = MockEnrollmentService::new();

    enrollment.expect_enroll().never();

    enrollment
}

fn strict_gate_mock() -> MockMatchGate {
    let mut gate = MockMatchGate::new();

    gate.expect_match_face().never();

    gate
}

pub(crate) const TEST_COLLECTION: &str = "test-collection";

fn service(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}

/// Service over the enrollment and identity routes; the match gate and
/// ledger are strict mocks.
pub(crate) fn employees_service(
    identities: MockIdentitiesService,
    enrollment: MockEnrollmentService,
    route: Router,
) -> Service {
    service(
        AppContext {
            collection: TEST_COLLECTION.to_string(),
            identities: Arc::new(identities),
            visitors: Arc::new(strict_visitors_mock()),
            enrollment: Arc::new(enrollment),
            gate: Arc::new(strict_gate_mock()),
        },
        route,
    )
}

/// Service over the match and ledger routes; enrollment and identities are
/// strict mocks.
pub(crate) fn visitors_service(
    visitors: MockVisitorsService,
    gate: MockMatchGate,
    route: Router,
) -> Service {
    service(
        AppContext {
            collection: TEST_COLLECTION.to_string(),
            identities: Arc::new(strict_identities_mock()),
            visitors: Arc::new(visitors),
            enrollment: Arc::new(strict_enrollment_mock()),
            gate: Arc::new(gate),
        },
        route,
    )
}

/// Service where every application call is a strict mock.
pub(crate) fn idle_service(route: Router) -> Service {
    visitors_service(strict_visitors_mock(), strict_gate_mock(), route)
}

pub(crate) fn make_identity(person: &str) -> IdentityRecord {
    IdentityRecord {
        person_id: PersonId::new(person),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        contact_number: "555-0100".to_string(),
        image_ref: ImageRef::new(format!("registration/{person}.jpg")),
        face_token: FaceToken::new(format!("face-{person}")),
        created_at: Timestamp::UNIX_EPOCH,
    }
}
