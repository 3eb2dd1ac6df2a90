//! Matching Models

use serde::{Deserialize, Serialize};

use crate::keys::FaceToken;

/// A face stored in a collection by an index call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedFace {
    pub face_token: FaceToken,

    /// Detection confidence reported by the service, 0–100.
    #[serde(default)]
    pub confidence: f32,
}

/// One ranked result of a similarity search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceCandidate {
    pub face_token: FaceToken,

    /// Similarity to the probe, 0–100.
    pub similarity: f32,
}

impl FaceCandidate {
    pub fn new(face_token: impl Into<FaceToken>, similarity: f32) -> Self {
        Self {
            face_token: face_token.into(),
            similarity,
        }
    }
}

/// Keep candidates at or above `threshold`, best first, at most `max` of them.
#[must_use]
pub fn rank_candidates(
    mut candidates: Vec<FaceCandidate>,
    threshold: f32,
    max: usize,
) -> Vec<FaceCandidate> {
    candidates.retain(|candidate| candidate.similarity >= threshold);
    candidates.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    candidates.truncate(max);

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_candidates_drops_scores_below_threshold() {
        let ranked = rank_candidates(
            vec![
                FaceCandidate::new("a", 79.9),
                FaceCandidate::new("b", 80.0),
                FaceCandidate::new("c", 12.0),
            ],
            80.0,
            5,
        );

        assert_eq!(ranked, vec![FaceCandidate::new("b", 80.0)]);
    }

    #[test]
    fn rank_candidates_orders_best_first_and_truncates() {
        let ranked = rank_candidates(
            vec![
                FaceCandidate::new("low", 85.0),
                FaceCandidate::new("high", 99.5),
                FaceCandidate::new("mid", 92.0),
            ],
            80.0,
            2,
        );

        let tokens: Vec<&str> = ranked.iter().map(|c| c.face_token.as_str()).collect();

        assert_eq!(tokens, ["high", "mid"]);
    }
}
