//! Visit Data

use crate::{
    domain::{
        identities::records::IdentityRecord,
        visitors::records::{AttendanceStatus, VisitUuid, VisitorIdentity},
    },
    keys::FaceToken,
};

/// New Visit Data
///
/// Built through the outcome constructors so the attendance status always
/// agrees with what the presentation resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVisit {
    pub uuid: VisitUuid,
    pub image_data: Vec<u8>,
    pub face_token: Option<FaceToken>,
    pub identity: Option<VisitorIdentity>,
}

impl NewVisit {
    /// No face in the collection matched the probe.
    #[must_use]
    pub fn unmatched(image_data: Vec<u8>) -> Self {
        Self {
            uuid: VisitUuid::new(),
            image_data,
            face_token: None,
            identity: None,
        }
    }

    /// A face matched but no identity is enrolled with its token.
    #[must_use]
    pub fn unknown_face(image_data: Vec<u8>, face_token: FaceToken) -> Self {
        Self {
            uuid: VisitUuid::new(),
            image_data,
            face_token: Some(face_token),
            identity: None,
        }
    }

    /// The matched face belongs to an enrolled identity.
    #[must_use]
    pub fn resolved(image_data: Vec<u8>, identity: &IdentityRecord) -> Self {
        Self {
            uuid: VisitUuid::new(),
            image_data,
            face_token: Some(identity.face_token.clone()),
            identity: Some(identity.into()),
        }
    }

    #[must_use]
    pub fn attendance(&self) -> AttendanceStatus {
        if self.identity.is_some() {
            AttendanceStatus::Marked
        } else {
            AttendanceStatus::NotMarked
        }
    }
}
