use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::{AssignmentId, ProfessorId, StudentId};

/// A student an instructor has flagged for review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FlaggedStudent {
    pub id: i64,
    pub professor: ProfessorId,
    pub student: StudentId,
    /// Similarity pair that triggered the flag
    #[serde(default)]
    pub similarity: Option<i64>,
    #[serde(default)]
    pub generative_ai: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConfirmedCheater {
    pub id: i64,
    pub confirmed_date: NaiveDate,
    pub threshold_used: i32,
    pub assignment: AssignmentId,
    pub student: StudentId,
}

/// Result of triggering the comparison pipeline for a course and semester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisRun {
    pub status: String,
    #[serde(default)]
    pub duration_s: Option<f64>,
}

impl AnalysisRun {
    pub fn succeeded(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
    }
}
