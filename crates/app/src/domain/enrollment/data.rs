//! Enrollment Data

use crate::{
    domain::identities::data::NewIdentity,
    keys::{FaceToken, ImageRef, PersonId},
};

/// New Enrollment Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewEnrollment {
    pub person_id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub contact_number: String,
    pub image: Vec<u8>,
}

impl NewEnrollment {
    /// Blob key the enrollment image is stored under.
    #[must_use]
    pub fn image_key(&self) -> String {
        registration_key(&self.person_id)
    }

    pub(crate) fn into_identity(self, image_ref: ImageRef, face_token: FaceToken) -> NewIdentity {
        NewIdentity {
            person_id: self.person_id,
            first_name: self.first_name,
            last_name: self.last_name,
            contact_number: self.contact_number,
            image_ref,
            face_token,
        }
    }
}

/// Blob key for a person's enrollment image.
#[must_use]
pub fn registration_key(person: &PersonId) -> String {
    format!("registration/{person}.jpg")
}
