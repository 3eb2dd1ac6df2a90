//! End-to-end flows over Postgres, the filesystem blob store and an
//! in-memory matching service.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;
use testresult::TestResult;

use crate::{
    blobs::{BlobStore, FsBlobStore},
    context::AppContext,
    database::Db,
    domain::{
        enrollment::{EnrollmentError, data::NewEnrollment},
        gate::MatchOutcome,
        visitors::records::AttendanceStatus,
    },
    keys::{FaceToken, ImageRef, PersonId},
    matching::{
        FaceMatcher, FaceMatcherError,
        models::{FaceCandidate, IndexedFace},
    },
    test::TestContext,
};

const COLLECTION: &str = "scenario-faces";

const IMAGE_A: &[u8] = b"image-a";
const IMAGE_B: &[u8] = b"image-b";
const IMAGE_C: &[u8] = b"image-c";
const NO_FACE: &[u8] = b"blank-wall";

/// Treats identical image bytes as the same face.
#[derive(Default)]
struct InMemoryMatcher {
    faces: Mutex<Vec<(Vec<u8>, FaceToken)>>,
}

#[async_trait]
impl FaceMatcher for InMemoryMatcher {
    async fn index_face(
        &self,
        _collection: &str,
        label: &PersonId,
        _reference: &ImageRef,
        image: &[u8],
    ) -> Result<Option<IndexedFace>, FaceMatcherError> {
        if image == NO_FACE {
            return Ok(None);
        }

        let face_token = FaceToken::new(format!("face-{label}"));

        self.faces
            .lock()
            .map_err(|_| FaceMatcherError::UnexpectedResponse("poisoned".to_string()))?
            .push((image.to_vec(), face_token.clone()));

        Ok(Some(IndexedFace {
            face_token,
            confidence: 99.0,
        }))
    }

    async fn search_faces(
        &self,
        _collection: &str,
        image: &[u8],
        max_candidates: usize,
    ) -> Result<Vec<FaceCandidate>, FaceMatcherError> {
        let faces = self
            .faces
            .lock()
            .map_err(|_| FaceMatcherError::UnexpectedResponse("poisoned".to_string()))?;

        Ok(faces
            .iter()
            .filter(|(indexed, _)| indexed == image)
            .take(max_candidates)
            .map(|(_, token)| FaceCandidate::new(token.clone(), 99.5))
            .collect())
    }
}

struct Scenario {
    _ctx: TestContext,
    app: AppContext,
    blobs: Arc<FsBlobStore>,
    _dir: TempDir,
}

impl Scenario {
    async fn new() -> Self {
        Self::with_matcher(Arc::new(InMemoryMatcher::default())).await
    }

    async fn with_matcher(matcher: Arc<dyn FaceMatcher>) -> Self {
        let ctx = TestContext::new().await;
        let dir = TempDir::new().expect("tempdir");
        let blobs = Arc::new(FsBlobStore::new(dir.path()));

        let app = AppContext::from_parts(
            Db::new(ctx.db.pool().clone()),
            matcher,
            blobs.clone(),
            COLLECTION,
        );

        Self {
            _ctx: ctx,
            app,
            blobs,
            _dir: dir,
        }
    }

    async fn enroll(&self, person: &str, image: &[u8]) -> Result<FaceToken, EnrollmentError> {
        self.app
            .enrollment
            .enroll(NewEnrollment {
                person_id: PersonId::new(person),
                first_name: format!("First {person}"),
                last_name: format!("Last {person}"),
                contact_number: "555-0100".to_string(),
                image: image.to_vec(),
            })
            .await
            .map(|identity| identity.face_token)
    }
}

#[tokio::test]
async fn same_face_cannot_be_enrolled_under_two_people() -> TestResult {
    let scenario = Scenario::new().await;

    let token = scenario.enroll("P1", IMAGE_A).await?;

    assert_eq!(token, FaceToken::new("face-P1"));

    let result = scenario.enroll("P2", IMAGE_A).await;

    assert!(
        matches!(result, Err(EnrollmentError::DuplicateFace)),
        "expected DuplicateFace, got {result:?}"
    );

    let identities = scenario.app.identities.list_identities().await?;

    assert_eq!(identities.len(), 1);
    assert_eq!(identities[0].person_id, PersonId::new("P1"));
    assert_eq!(identities[0].face_token, token);

    Ok(())
}

#[tokio::test]
async fn enrolled_face_is_accepted_and_marked() -> TestResult {
    let scenario = Scenario::new().await;

    scenario.enroll("P1", IMAGE_A).await?;

    let outcome = scenario.app.gate.match_face(IMAGE_A.to_vec()).await?;

    let MatchOutcome::Accepted { identity, visit } = outcome else {
        panic!("expected Accepted, got {outcome:?}");
    };

    assert_eq!(identity.person_id, PersonId::new("P1"));
    assert_eq!(identity.first_name, "First P1");

    let visits = scenario.app.visitors.list_visits().await?;

    assert_eq!(visits.len(), 1);
    assert_eq!(visits[0].uuid, visit);
    assert_eq!(visits[0].attendance, AttendanceStatus::Marked);
    assert_eq!(visits[0].face_token, Some(FaceToken::new("face-P1")));
    assert_eq!(
        visits[0].identity.as_ref().map(|i| i.last_name.as_str()),
        Some("Last P1")
    );
    assert_eq!(visits[0].image_data, IMAGE_A);

    Ok(())
}

#[tokio::test]
async fn unknown_face_is_not_found_and_not_marked() -> TestResult {
    let scenario = Scenario::new().await;

    scenario.enroll("P1", IMAGE_A).await?;

    let outcome = scenario.app.gate.match_face(IMAGE_B.to_vec()).await?;

    assert!(
        matches!(outcome, MatchOutcome::NotFound { .. }),
        "expected NotFound, got {outcome:?}"
    );

    let visits = scenario.app.visitors.list_visits().await?;

    assert_eq!(visits.len(), 1);
    assert_eq!(visits[0].attendance, AttendanceStatus::NotMarked);
    assert_eq!(visits[0].face_token, None);
    assert_eq!(visits[0].identity, None);

    Ok(())
}

#[tokio::test]
async fn second_enrollment_of_same_person_is_rejected() -> TestResult {
    let scenario = Scenario::new().await;

    scenario.enroll("P1", IMAGE_A).await?;

    let result = scenario.enroll("P1", IMAGE_C).await;

    assert!(
        matches!(result, Err(EnrollmentError::DuplicatePerson)),
        "expected DuplicatePerson, got {result:?}"
    );

    let stored = scenario
        .app
        .identities
        .get_identity(&PersonId::new("P1"))
        .await?
        .expect("P1 stays enrolled");

    assert_eq!(stored.face_token, FaceToken::new("face-P1"));

    Ok(())
}

#[tokio::test]
async fn enrolled_identity_is_found_by_face_token_and_image_is_stored() -> TestResult {
    let scenario = Scenario::new().await;

    let token = scenario.enroll("P1", IMAGE_A).await?;

    let identity = scenario
        .app
        .identities
        .find_identity_by_face_token(&token)
        .await?
        .expect("identity by face token");

    assert_eq!(identity.person_id, PersonId::new("P1"));
    assert_eq!(identity.image_ref, ImageRef::new("registration/P1.jpg"));

    let image = scenario.blobs.get_blob(&identity.image_ref).await?;

    assert_eq!(image.as_deref(), Some(IMAGE_A));

    Ok(())
}

#[tokio::test]
async fn image_without_face_leaves_orphan_blob_and_no_identity() -> TestResult {
    let scenario = Scenario::new().await;

    let result = scenario.enroll("P1", NO_FACE).await;

    assert!(
        matches!(result, Err(EnrollmentError::NoFaceDetected)),
        "expected NoFaceDetected, got {result:?}"
    );

    assert!(scenario.app.identities.list_identities().await?.is_empty());

    let orphan = scenario
        .blobs
        .get_blob(&ImageRef::new("registration/P1.jpg"))
        .await?;

    assert_eq!(orphan.as_deref(), Some(NO_FACE));

    Ok(())
}

#[tokio::test]
async fn ambiguous_presentation_records_nothing() -> TestResult {
    let matcher = Arc::new(InMemoryMatcher::default());

    {
        let mut faces = matcher.faces.lock().expect("lock");

        faces.push((IMAGE_A.to_vec(), FaceToken::new("face-x")));
        faces.push((IMAGE_A.to_vec(), FaceToken::new("face-y")));
    }

    let scenario = Scenario::with_matcher(matcher).await;

    let outcome = scenario.app.gate.match_face(IMAGE_A.to_vec()).await?;

    assert_eq!(outcome, MatchOutcome::Ambiguous { candidates: 2 });
    assert!(scenario.app.visitors.list_visits().await?.is_empty());

    Ok(())
}
