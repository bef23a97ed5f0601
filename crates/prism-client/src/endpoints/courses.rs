use prism_models::{Course, Semester, SemesterId, UserId};

use crate::client::BackendClient;
use crate::endpoints::Listing;
use crate::error::ClientError;
use crate::session::Session;

impl BackendClient {
    /// Semesters in which `uid` teaches.
    pub async fn semesters(&self, session: &Session, uid: UserId) -> Result<Vec<Semester>, ClientError> {
        let listing: Listing<Semester> = self
            .get_json(
                session,
                "/api/course/semester/get-semesters/",
                &[("uid", uid.to_string())],
            )
            .await?;
        Ok(listing.into_vec())
    }

    /// Course instances `uid` teaches in `semester`.
    pub async fn courses(
        &self,
        session: &Session,
        uid: UserId,
        semester: SemesterId,
    ) -> Result<Vec<Course>, ClientError> {
        let listing: Listing<Course> = self
            .get_json(
                session,
                "/api/course/courseinstances/get-courses-by-semesters/",
                &[("uid", uid.to_string()), ("semester", semester.to_string())],
            )
            .await?;
        Ok(listing.into_vec())
    }
}
