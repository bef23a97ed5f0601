use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::StudentId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Student {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub codegrade_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let student: Student =
            serde_json::from_str(r#"{"id":1,"first_name":"Ada","last_name":"Lovelace"}"#).unwrap();
        assert_eq!(student.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_full_name_with_missing_last_name() {
        let student: Student =
            serde_json::from_str(r#"{"id":1,"first_name":"Ada","last_name":""}"#).unwrap();
        assert_eq!(student.full_name(), "Ada");
    }
}
