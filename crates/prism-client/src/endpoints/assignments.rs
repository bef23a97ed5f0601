use prism_core::{Page, PageParams};
use prism_models::{Assignment, AssignmentId, CourseId, Student, Submission};

use crate::client::BackendClient;
use crate::endpoints::Listing;
use crate::error::ClientError;
use crate::session::Session;

impl BackendClient {
    pub async fn assignments(
        &self,
        session: &Session,
        course: CourseId,
    ) -> Result<Vec<Assignment>, ClientError> {
        let listing: Listing<Assignment> = self
            .get_json(
                session,
                "/api/assignment/assignments/get-assignments-by-course/",
                &[("course", course.to_string())],
            )
            .await?;
        Ok(listing.into_vec())
    }

    pub async fn students(&self, session: &Session, course: CourseId) -> Result<Vec<Student>, ClientError> {
        let listing: Listing<Student> = self
            .get_json(
                session,
                "/api/assignment/students/get-students-by-course/",
                &[("course", course.to_string())],
            )
            .await?;
        Ok(listing.into_vec())
    }

    pub async fn submissions(
        &self,
        session: &Session,
        assignment: AssignmentId,
        params: &PageParams,
    ) -> Result<Page<Submission>, ClientError> {
        let mut query = vec![("assignment", assignment.to_string())];
        query.extend(params.to_query());

        let listing: Listing<Submission> = self
            .get_json(session, "/api/assignment/submissions/", &query)
            .await?;
        Ok(listing.into_page())
    }
}
