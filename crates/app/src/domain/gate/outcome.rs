//! Match outcomes.

use crate::{
    domain::{identities::records::IdentityRecord, visitors::records::VisitUuid},
    keys::FaceToken,
    matching::models::FaceCandidate,
};

/// What a single face presentation resolved to.
///
/// Every variant except [`MatchOutcome::Ambiguous`] carries the id of the
/// ledger entry written for it.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// The sole candidate belongs to an enrolled identity.
    Accepted {
        identity: IdentityRecord,
        visit: VisitUuid,
    },

    /// The sole candidate has no enrolled identity behind it.
    FoundUnknownFace {
        face_token: FaceToken,
        visit: VisitUuid,
    },

    /// No candidate cleared the similarity threshold.
    NotFound { visit: VisitUuid },

    /// More than one candidate cleared the threshold.
    Ambiguous { candidates: usize },
}

impl MatchOutcome {
    /// Ledger entry written for this outcome, if any.
    #[must_use]
    pub fn visit(&self) -> Option<VisitUuid> {
        match self {
            Self::Accepted { visit, .. }
            | Self::FoundUnknownFace { visit, .. }
            | Self::NotFound { visit } => Some(*visit),
            Self::Ambiguous { .. } => None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Accepted { .. } => "accepted",
            Self::FoundUnknownFace { .. } => "found_unknown_face",
            Self::NotFound { .. } => "not_found",
            Self::Ambiguous { .. } => "ambiguous",
        }
    }
}

/// How many candidates a search produced, before any identity lookup.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CandidateSet {
    Empty,
    Sole(FaceToken),
    Many(usize),
}

impl From<Vec<FaceCandidate>> for CandidateSet {
    fn from(mut candidates: Vec<FaceCandidate>) -> Self {
        match candidates.len() {
            0 => Self::Empty,
            1 => match candidates.pop() {
                Some(candidate) => Self::Sole(candidate.face_token),
                None => Self::Empty,
            },
            n => Self::Many(n),
        }
    }
}
