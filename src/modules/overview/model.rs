use prism_models::{CurrentUser, Semester};
use serde::Serialize;
use utoipa::ToSchema;

/// Landing data: who is signed in and which semesters they teach.
#[derive(Debug, Serialize, ToSchema)]
pub struct Overview {
    pub user: CurrentUser,
    pub semesters: Vec<Semester>,
}
