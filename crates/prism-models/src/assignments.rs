use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::{AssignmentId, SemesterId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Assignment {
    pub id: AssignmentId,
    pub assignment_number: i32,
    pub title: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub has_base_code: Option<bool>,
    #[serde(default)]
    pub has_policy: Option<bool>,
    #[serde(default)]
    pub course_catalog: Option<i64>,
    #[serde(default)]
    pub semester: Option<SemesterId>,
}

impl Assignment {
    /// `"A3: Spreadsheet"`
    pub fn label(&self) -> String {
        format!("A{}: {}", self.assignment_number, self.title)
    }
}
