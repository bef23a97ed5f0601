use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::ids::{AssignmentId, CourseId, StudentId, SubmissionId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Submission {
    pub id: SubmissionId,
    /// Grade out of 100. The backend serialises decimals as strings.
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub grade: Option<f64>,
    #[serde(default)]
    pub created_at: Option<NaiveDate>,
    #[serde(default)]
    pub flagged: bool,
    pub assignment: AssignmentId,
    pub student: StudentId,
    #[serde(default)]
    pub course_instance: Option<CourseId>,
    #[serde(default)]
    pub file_path: Option<String>,
}

fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Decimal {
        Number(f64),
        Text(String),
    }

    match Option::<Decimal>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Decimal::Number(n)) => Ok(Some(n)),
        Some(Decimal::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Decimal::Text(s)) => s.trim().parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_as_decimal_string() {
        let json = r#"{"id":5,"grade":"87.50","created_at":"2024-09-30","flagged":true,"assignment":11,"student":2,"course_instance":8,"file_path":"a3/2.zip"}"#;
        let submission: Submission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.grade, Some(87.5));
        assert!(submission.flagged);
        assert_eq!(submission.course_instance, Some(CourseId(8)));
    }

    #[test]
    fn test_grade_as_number_or_null() {
        let numeric: Submission =
            serde_json::from_str(r#"{"id":5,"grade":90,"assignment":1,"student":2}"#).unwrap();
        assert_eq!(numeric.grade, Some(90.0));

        let null: Submission =
            serde_json::from_str(r#"{"id":5,"grade":null,"assignment":1,"student":2}"#).unwrap();
        assert_eq!(null.grade, None);
        assert!(!null.flagged);
    }
}
