use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::SemesterId;

/// An academic term, e.g. `"Fall 2024"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Semester {
    pub id: SemesterId,
    pub name: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub session: Option<String>,
}
