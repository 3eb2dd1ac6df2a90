//! Visit Records

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{identities::records::IdentityRecord, visitors::VisitorsServiceError},
    keys::{FaceToken, PersonId},
    uuids::TypedUuid,
};

/// Visit UUID
pub type VisitUuid = TypedUuid<VisitRecord>;

/// Whether a presentation resolved to a known identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    Marked,
    NotMarked,
}

impl AttendanceStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Marked => "marked",
            Self::NotMarked => "not-marked",
        }
    }
}

impl Display for AttendanceStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = VisitorsServiceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "marked" => Ok(Self::Marked),
            "not-marked" => Ok(Self::NotMarked),
            other => Err(VisitorsServiceError::UnknownAttendance(other.to_owned())),
        }
    }
}

/// Identity fields copied onto a visit when the face resolved to someone.
#[derive(Debug, Clone, PartialEq)]
pub struct VisitorIdentity {
    pub person_id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub contact_number: String,
}

impl From<&IdentityRecord> for VisitorIdentity {
    fn from(identity: &IdentityRecord) -> Self {
        Self {
            person_id: identity.person_id.clone(),
            first_name: identity.first_name.clone(),
            last_name: identity.last_name.clone(),
            contact_number: identity.contact_number.clone(),
        }
    }
}

/// Visit Record
#[derive(Debug, Clone, PartialEq)]
pub struct VisitRecord {
    pub uuid: VisitUuid,
    pub visited_at: Timestamp,
    pub image_data: Vec<u8>,
    pub face_token: Option<FaceToken>,
    pub identity: Option<VisitorIdentity>,
    pub attendance: AttendanceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attendance_round_trips_through_its_column_value() {
        for status in [AttendanceStatus::Marked, AttendanceStatus::NotMarked] {
            assert_eq!(status.as_str().parse::<AttendanceStatus>().ok(), Some(status));
        }
    }

    #[test]
    fn unknown_attendance_value_is_rejected() {
        let result = "maybe".parse::<AttendanceStatus>();

        assert!(
            matches!(result, Err(VisitorsServiceError::UnknownAttendance(ref v)) if v == "maybe"),
            "expected UnknownAttendance, got {result:?}"
        );
    }
}
