//! Identity Records

use jiff::Timestamp;

use crate::keys::{FaceToken, ImageRef, PersonId};

/// Identity Record
///
/// One per enrolled person. Written once by enrollment and never updated.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityRecord {
    pub person_id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub contact_number: String,
    pub image_ref: ImageRef,
    pub face_token: FaceToken,
    pub created_at: Timestamp,
}
