//! Identities Data

use crate::keys::{FaceToken, ImageRef, PersonId};

/// New Identity Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewIdentity {
    pub person_id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub contact_number: String,
    pub image_ref: ImageRef,
    pub face_token: FaceToken,
}
