//! # PRISM Models
//!
//! Data-transfer records mirrored from the review API's JSON. They carry
//! no behaviour beyond display helpers; the backend owns their lifecycle.
//!
//! # Modules
//!
//! - [`ids`]: Integer id newtypes for each entity
//! - [`auth`]: Login, refresh and logout payloads, the current user
//! - [`semesters`], [`courses`], [`assignments`], [`students`], [`submissions`]
//! - [`similarity`]: Similarity pairs and alert thresholds
//! - [`cheating`]: Flagged students, confirmed cheaters, analysis runs
//! - [`plots`]: Pre-rendered plot kinds

pub mod assignments;
pub mod auth;
pub mod cheating;
pub mod courses;
pub mod ids;
pub mod plots;
pub mod semesters;
pub mod similarity;
pub mod students;
pub mod submissions;

pub use assignments::Assignment;
pub use auth::{
    CurrentUser, GoogleVerifyRequest, LoginResponse, LoginUser, LogoutRequest,
    TokenRefreshRequest, TokenRefreshResponse,
};
pub use cheating::{AnalysisRun, ConfirmedCheater, FlaggedStudent};
pub use courses::{Course, CourseCatalog};
pub use ids::{AssignmentId, CourseId, ProfessorId, SemesterId, StudentId, SubmissionId, UserId};
pub use plots::{AssignmentPlot, CoursePlot};
pub use semesters::Semester;
pub use similarity::{AlertParams, SimilarityPair};
pub use students::Student;
pub use submissions::Submission;
