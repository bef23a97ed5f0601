//! Course instances as returned by `get-courses-by-semesters`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::{CourseId, ProfessorId, SemesterId};

/// Catalog entry shared by every offering of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CourseCatalog {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub catalog_number: Option<i32>,
    #[serde(default)]
    pub title: Option<String>,
}

/// One course taught in one semester, possibly one section of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Course {
    pub id: CourseId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub course_catalog: Option<CourseCatalog>,
    #[serde(default)]
    pub section_number: Option<i32>,
    #[serde(default)]
    pub semester: Option<SemesterId>,
    #[serde(default)]
    pub professor: Option<ProfessorId>,
}

impl Course {
    /// Label for lists and selects: `"CS 3500 - Software Practice (sec 1)"`.
    pub fn display_name(&self) -> String {
        let base = match (&self.course_catalog, &self.name) {
            (Some(catalog), _) => {
                let code = match (&catalog.subject, catalog.catalog_number) {
                    (Some(subject), Some(number)) => Some(format!("{subject} {number}")),
                    _ => catalog.name.clone(),
                };
                match (code, &catalog.title) {
                    (Some(code), Some(title)) => format!("{code} - {title}"),
                    (Some(code), None) => code,
                    (None, Some(title)) => title.clone(),
                    (None, None) => format!("Course {}", self.id),
                }
            }
            (None, Some(name)) => name.clone(),
            (None, None) => format!("Course {}", self.id),
        };

        match self.section_number {
            Some(section) => format!("{base} (sec {section})"),
            None => base,
        }
    }
}
