//! Strongly-typed id newtypes for backend entities.
//!
//! The backend keys every table with an integer primary key. Wrapping them
//! keeps a course id from being passed where an assignment id is expected:
//!
//! ```ignore
//! use prism_models::ids::{AssignmentId, CourseId};
//!
//! fn assignments_for(course: CourseId) { /* ... */ }
//!
//! assignments_for(CourseId(4));        // OK
//! // assignments_for(AssignmentId(4)); // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
        #[serde(transparent)]
        #[schema(value_type = i64)]
        pub struct $name(pub i64);

        impl $name {
            #[inline]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Backend user account id (the `uid` query parameter).
    UserId
);
define_id!(
    /// Instructor record id.
    ProfessorId
);
define_id!(SemesterId);
define_id!(
    /// Course instance id (a catalog course taught in one semester).
    CourseId
);
define_id!(AssignmentId);
define_id!(StudentId);
define_id!(SubmissionId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_plain_numbers() {
        assert_eq!(serde_json::to_string(&CourseId(12)).unwrap(), "12");
        let id: AssignmentId = serde_json::from_str("7").unwrap();
        assert_eq!(id, AssignmentId(7));
    }

    #[test]
    fn test_ids_parse_from_str() {
        assert_eq!(" 42 ".parse::<SemesterId>().unwrap(), SemesterId(42));
        assert!("x".parse::<SemesterId>().is_err());
    }

    #[test]
    fn test_debug_and_display() {
        assert_eq!(format!("{:?}", StudentId(3)), "StudentId(3)");
        assert_eq!(StudentId(3).to_string(), "3");
    }
}
