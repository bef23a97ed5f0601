use prism_models::{AssignmentId, SimilarityPair};
use serde::Serialize;
use utoipa::ToSchema;

/// Similarity pairs at or above `threshold`, highest first.
#[derive(Debug, Serialize, ToSchema)]
pub struct AlertsResponse {
    pub assignment: AssignmentId,
    pub threshold: u8,
    pub count: usize,
    pub results: Vec<SimilarityPair>,
}
