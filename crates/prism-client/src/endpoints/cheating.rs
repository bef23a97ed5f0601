use prism_core::{Page, PageParams};
use prism_models::{
    AnalysisRun, AssignmentId, ConfirmedCheater, CourseId, FlaggedStudent, ProfessorId,
    SemesterId, SimilarityPair,
};
use tracing::info;

use crate::client::{BackendClient, decode};
use crate::endpoints::Listing;
use crate::error::ClientError;
use crate::session::Session;

impl BackendClient {
    /// Similarity pairs for an assignment, highest percentage first.
    pub async fn similarity_pairs(
        &self,
        session: &Session,
        assignment: AssignmentId,
        params: &PageParams,
    ) -> Result<Page<SimilarityPair>, ClientError> {
        let mut query = vec![
            ("assignment", assignment.to_string()),
            ("ordering", "-percentage".to_string()),
        ];
        query.extend(params.to_query());

        let listing: Listing<SimilarityPair> = self
            .get_json(session, "/api/cheating/submission-similarity-pairs/", &query)
            .await?;
        Ok(listing.into_page())
    }

    /// Walks the pair pages until a pair falls below `threshold`.
    ///
    /// Pairs arrive sorted by descending percentage, so the first pair
    /// under the threshold ends the scan.
    pub async fn alerts(
        &self,
        session: &Session,
        assignment: AssignmentId,
        threshold: u8,
    ) -> Result<Vec<SimilarityPair>, ClientError> {
        let mut alerts = Vec::new();
        let mut params = PageParams {
            page: Some(1),
            page_size: Some(prism_core::pagination::MAX_PAGE_SIZE),
        };

        loop {
            let page = self.similarity_pairs(session, assignment, &params).await?;
            let more = page.has_more();
            let before = alerts.len();
            let total = page.results.len();
            alerts.extend(page.results.into_iter().filter(|p| p.is_alert(threshold)));

            if !more || alerts.len() - before < total {
                break;
            }
            params.page = Some(params.page() + 1);
        }

        Ok(alerts)
    }

    pub async fn flagged_students(
        &self,
        session: &Session,
        professor: Option<ProfessorId>,
    ) -> Result<Vec<FlaggedStudent>, ClientError> {
        let query: Vec<(&str, String)> = professor
            .map(|p| vec![("professor", p.to_string())])
            .unwrap_or_default();
        let listing: Listing<FlaggedStudent> = self
            .get_json(session, "/api/cheating/flagged-students/", &query)
            .await?;
        Ok(listing.into_vec())
    }

    pub async fn confirmed_cheaters(
        &self,
        session: &Session,
        assignment: Option<AssignmentId>,
    ) -> Result<Vec<ConfirmedCheater>, ClientError> {
        let query: Vec<(&str, String)> = assignment
            .map(|a| vec![("assignment", a.to_string())])
            .unwrap_or_default();
        let listing: Listing<ConfirmedCheater> = self
            .get_json(session, "/api/cheating/confirmed-cheaters/", &query)
            .await?;
        Ok(listing.into_vec())
    }

    /// Triggers the comparison pipeline for one course offering.
    ///
    /// Runs synchronously on the backend and can take minutes, so it gets
    /// the pipeline timeout instead of the per-request one.
    pub async fn run_pipeline(
        &self,
        session: &Session,
        course: CourseId,
        semester: SemesterId,
    ) -> Result<AnalysisRun, ClientError> {
        let url = self.url(&format!("/api/cheating/{course}/{semester}/run-pipeline/"))?;
        let timeout = self.pipeline_timeout();
        let response = self
            .send_authed(session, |http| Ok(http.get(url.clone()).timeout(timeout)))
            .await?;
        let run: AnalysisRun = decode(response).await?;
        info!(%course, %semester, status = %run.status, duration_s = ?run.duration_s, "analysis pipeline finished");
        Ok(run)
    }
}
