//! Similarity pairs and the alert filter.
//!
//! A pair links two submissions of one assignment with the percentage of
//! matched code reported by the comparison run. An alert is a pair at or
//! above the threshold.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::ids::{AssignmentId, SubmissionId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SimilarityPair {
    pub id: i64,
    pub assignment: AssignmentId,
    pub file_name: String,
    pub submission_id_1: SubmissionId,
    pub submission_id_2: SubmissionId,
    pub match_id: i64,
    /// Matched code, 0 to 100
    pub percentage: f64,
}

impl SimilarityPair {
    pub fn is_alert(&self, threshold: u8) -> bool {
        self.percentage >= f64::from(threshold)
    }
}

/// Query for the alerts listing.
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct AlertParams {
    /// Minimum percentage, 0 to 100
    #[validate(range(min = 0, max = 100, message = "threshold must be between 0 and 100"))]
    pub threshold: Option<i64>,
}

impl AlertParams {
    /// The requested threshold clamped to `0..=100`, else `default`.
    pub fn threshold_or(&self, default: u8) -> u8 {
        self.threshold
            .and_then(|t| u8::try_from(t.clamp(0, 100)).ok())
            .unwrap_or(default)
            .min(100)
    }
}
