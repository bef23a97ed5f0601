use prism_models::{AssignmentId, AssignmentPlot, CourseId, CoursePlot, SemesterId};
use reqwest::header::CONTENT_TYPE;

use crate::client::BackendClient;
use crate::error::ClientError;
use crate::session::Session;

/// Raw image bytes with the content type the backend reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotImage {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl BackendClient {
    pub async fn assignment_plot(
        &self,
        session: &Session,
        assignment: AssignmentId,
        kind: AssignmentPlot,
    ) -> Result<PlotImage, ClientError> {
        self.fetch_plot(session, &kind.backend_path(assignment)).await
    }

    pub async fn course_plot(
        &self,
        session: &Session,
        course: CourseId,
        semester: SemesterId,
        kind: CoursePlot,
    ) -> Result<PlotImage, ClientError> {
        self.fetch_plot(session, &kind.backend_path(course, semester))
            .await
    }

    async fn fetch_plot(&self, session: &Session, path: &str) -> Result<PlotImage, ClientError> {
        let url = self.url(path)?;
        let response = self
            .send_authed(session, |http| Ok(http.get(url.clone())))
            .await?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/png")
            .to_string();
        let bytes = response.bytes().await?.to_vec();

        Ok(PlotImage {
            content_type,
            bytes,
        })
    }
}
