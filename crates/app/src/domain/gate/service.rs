//! Match gate service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{info, warn};

use crate::{
    domain::{
        gate::{
            errors::MatchGateError,
            outcome::{CandidateSet, MatchOutcome},
        },
        identities::IdentitiesService,
        visitors::{VisitorsService, data::NewVisit},
    },
    matching::FaceMatcher,
};

/// Candidates requested per presentation. More than one surviving candidate
/// makes the presentation ambiguous.
pub const MATCH_MAX_CANDIDATES: usize = 5;

#[derive(Clone)]
pub struct FaceMatchGate {
    identities: Arc<dyn IdentitiesService>,
    visitors: Arc<dyn VisitorsService>,
    matcher: Arc<dyn FaceMatcher>,
    collection: String,
}

impl FaceMatchGate {
    #[must_use]
    pub fn new(
        identities: Arc<dyn IdentitiesService>,
        visitors: Arc<dyn VisitorsService>,
        matcher: Arc<dyn FaceMatcher>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            identities,
            visitors,
            matcher,
            collection: collection.into(),
        }
    }
}

#[async_trait]
impl MatchGate for FaceMatchGate {
    async fn match_face(&self, probe: Vec<u8>) -> Result<MatchOutcome, MatchGateError> {
        if probe.is_empty() {
            return Err(MatchGateError::Malformed("image is required"));
        }

        let candidates = self
            .matcher
            .search_faces(&self.collection, &probe, MATCH_MAX_CANDIDATES)
            .await?;

        let outcome = match CandidateSet::from(candidates) {
            CandidateSet::Many(candidates) => {
                warn!(candidates, "ambiguous face presentation, nothing recorded");

                return Ok(MatchOutcome::Ambiguous { candidates });
            }
            CandidateSet::Empty => {
                let visit = self.visitors.record_visit(NewVisit::unmatched(probe)).await?;

                MatchOutcome::NotFound { visit: visit.uuid }
            }
            CandidateSet::Sole(face_token) => {
                match self.identities.find_identity_by_face_token(&face_token).await? {
                    Some(identity) => {
                        let visit = self
                            .visitors
                            .record_visit(NewVisit::resolved(probe, &identity))
                            .await?;

                        MatchOutcome::Accepted {
                            identity,
                            visit: visit.uuid,
                        }
                    }
                    None => {
                        let visit = self
                            .visitors
                            .record_visit(NewVisit::unknown_face(probe, face_token.clone()))
                            .await?;

                        MatchOutcome::FoundUnknownFace {
                            face_token,
                            visit: visit.uuid,
                        }
                    }
                }
            }
        };

        info!(outcome = outcome.kind(), visit = ?outcome.visit(), "face presentation resolved");

        Ok(outcome)
    }
}

#[automock]
#[async_trait]
pub trait MatchGate: Send + Sync {
    /// Resolve a probe image and append the attempt to the visitor ledger.
    ///
    /// Ambiguous presentations are reported but not recorded.
    async fn match_face(&self, probe: Vec<u8>) -> Result<MatchOutcome, MatchGateError>;
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::{
        domain::{
            identities::{MockIdentitiesService, records::IdentityRecord},
            visitors::{
                MockVisitorsService, VisitorsServiceError,
                records::{AttendanceStatus, VisitRecord, VisitorIdentity},
            },
        },
        keys::{FaceToken, ImageRef, PersonId},
        matching::{FaceMatcherError, MockFaceMatcher, models::FaceCandidate},
    };

    use super::*;

    const COLLECTION: &str = "staff";

    fn identity() -> IdentityRecord {
        IdentityRecord {
            person_id: PersonId::new("E-1"),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            contact_number: "555-0100".to_string(),
            image_ref: ImageRef::new("registration/E-1.jpg"),
            face_token: FaceToken::new("face-1"),
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn recorded(visit: NewVisit) -> VisitRecord {
        VisitRecord {
            attendance: visit.attendance(),
            uuid: visit.uuid,
            visited_at: Timestamp::UNIX_EPOCH,
            image_data: visit.image_data,
            face_token: visit.face_token,
            identity: visit.identity,
        }
    }

    fn returns_candidates(matcher: &mut MockFaceMatcher, candidates: Vec<FaceCandidate>) {
        matcher
            .expect_search_faces()
            .once()
            .withf(|collection, probe, max| {
                collection == COLLECTION && probe == [1, 2, 3] && *max == MATCH_MAX_CANDIDATES
            })
            .return_once(move |_, _, _| Ok(candidates));
    }

    fn gate(
        identities: MockIdentitiesService,
        visitors: MockVisitorsService,
        matcher: MockFaceMatcher,
    ) -> FaceMatchGate {
        FaceMatchGate::new(
            Arc::new(identities),
            Arc::new(visitors),
            Arc::new(matcher),
            COLLECTION,
        )
    }

    #[tokio::test]
    async fn no_candidates_records_unmarked_visit_without_token() -> TestResult {
        let mut identities = MockIdentitiesService::new();
        let mut visitors = MockVisitorsService::new();
        let mut matcher = MockFaceMatcher::new();

        returns_candidates(&mut matcher, vec![]);

        identities.expect_find_identity_by_face_token().never();

        visitors
            .expect_record_visit()
            .once()
            .withf(|visit| {
                visit.face_token.is_none()
                    && visit.identity.is_none()
                    && visit.attendance() == AttendanceStatus::NotMarked
                    && visit.image_data == [1, 2, 3]
            })
            .return_once(|visit| Ok(recorded(visit)));

        let outcome = gate(identities, visitors, matcher)
            .match_face(vec![1, 2, 3])
            .await?;

        assert!(
            matches!(outcome, MatchOutcome::NotFound { .. }),
            "expected NotFound, got {outcome:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn sole_known_candidate_is_accepted_and_marked() -> TestResult {
        let mut identities = MockIdentitiesService::new();
        let mut visitors = MockVisitorsService::new();
        let mut matcher = MockFaceMatcher::new();

        returns_candidates(&mut matcher, vec![FaceCandidate::new("face-1", 97.5)]);

        identities
            .expect_find_identity_by_face_token()
            .once()
            .withf(|token| token.as_str() == "face-1")
            .return_once(|_| Ok(Some(identity())));

        visitors
            .expect_record_visit()
            .once()
            .withf(|visit| {
                visit.face_token == Some(FaceToken::new("face-1"))
                    && visit.identity == Some(VisitorIdentity::from(&identity()))
                    && visit.attendance() == AttendanceStatus::Marked
            })
            .return_once(|visit| Ok(recorded(visit)));

        let outcome = gate(identities, visitors, matcher)
            .match_face(vec![1, 2, 3])
            .await?;

        let MatchOutcome::Accepted { identity: found, .. } = outcome else {
            panic!("expected Accepted, got {outcome:?}");
        };

        assert_eq!(found, identity());

        Ok(())
    }

    #[tokio::test]
    async fn sole_unknown_candidate_records_token_only() -> TestResult {
        let mut identities = MockIdentitiesService::new();
        let mut visitors = MockVisitorsService::new();
        let mut matcher = MockFaceMatcher::new();

        returns_candidates(&mut matcher, vec![FaceCandidate::new("face-orphan", 88.0)]);

        identities
            .expect_find_identity_by_face_token()
            .once()
            .return_once(|_| Ok(None));

        visitors
            .expect_record_visit()
            .once()
            .withf(|visit| {
                visit.face_token == Some(FaceToken::new("face-orphan"))
                    && visit.identity.is_none()
                    && visit.attendance() == AttendanceStatus::NotMarked
            })
            .return_once(|visit| Ok(recorded(visit)));

        let outcome = gate(identities, visitors, matcher)
            .match_face(vec![1, 2, 3])
            .await?;

        let MatchOutcome::FoundUnknownFace { face_token, visit } = outcome else {
            panic!("expected FoundUnknownFace, got {outcome:?}");
        };

        assert_eq!(face_token, FaceToken::new("face-orphan"));
        assert_ne!(visit.into_uuid(), uuid::Uuid::nil());

        Ok(())
    }

    #[tokio::test]
    async fn several_candidates_are_ambiguous_and_skip_lookup_and_ledger() -> TestResult {
        let mut identities = MockIdentitiesService::new();
        let mut visitors = MockVisitorsService::new();
        let mut matcher = MockFaceMatcher::new();

        returns_candidates(
            &mut matcher,
            vec![
                FaceCandidate::new("face-1", 95.0),
                FaceCandidate::new("face-2", 94.0),
            ],
        );

        identities.expect_find_identity_by_face_token().never();
        visitors.expect_record_visit().never();

        let outcome = gate(identities, visitors, matcher)
            .match_face(vec![1, 2, 3])
            .await?;

        assert_eq!(outcome, MatchOutcome::Ambiguous { candidates: 2 });

        Ok(())
    }

    #[tokio::test]
    async fn empty_probe_is_malformed() {
        let mut matcher = MockFaceMatcher::new();

        matcher.expect_search_faces().never();

        let result = gate(
            MockIdentitiesService::new(),
            MockVisitorsService::new(),
            matcher,
        )
        .match_face(vec![])
        .await;

        assert!(
            matches!(result, Err(MatchGateError::Malformed(_))),
            "expected Malformed, got {result:?}"
        );
    }

    #[tokio::test]
    async fn matcher_failure_records_nothing() {
        let mut visitors = MockVisitorsService::new();
        let mut matcher = MockFaceMatcher::new();

        matcher.expect_search_faces().once().return_once(|_, _, _| {
            Err(FaceMatcherError::UnexpectedResponse("timeout".to_string()))
        });

        visitors.expect_record_visit().never();

        let result = gate(MockIdentitiesService::new(), visitors, matcher)
            .match_face(vec![1, 2, 3])
            .await;

        assert!(
            matches!(result, Err(MatchGateError::Matcher(_))),
            "expected Matcher, got {result:?}"
        );
    }

    #[tokio::test]
    async fn ledger_failure_is_surfaced() {
        let mut visitors = MockVisitorsService::new();
        let mut matcher = MockFaceMatcher::new();

        returns_candidates(&mut matcher, vec![]);

        visitors
            .expect_record_visit()
            .once()
            .return_once(|_| Err(VisitorsServiceError::InvalidData));

        let result = gate(MockIdentitiesService::new(), visitors, matcher)
            .match_face(vec![1, 2, 3])
            .await;

        assert!(
            matches!(result, Err(MatchGateError::Visitors(_))),
            "expected Visitors, got {result:?}"
        );
    }
}
