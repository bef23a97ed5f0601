use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::assignments::model::AlertsResponse;
use crate::modules::auth::model::{HealthResponse, LoginInfo, SessionInfo};
use crate::modules::overview::model::Overview;
use prism_auth::{SessionAction, SessionState};
use prism_core::{ErrorResponse, PageParams};
use prism_models::{
    AlertParams, AnalysisRun, Assignment, AssignmentPlot, ConfirmedCheater, Course,
    CourseCatalog, CoursePlot, CurrentUser, FlaggedStudent, GoogleVerifyRequest, LoginUser,
    Semester, SimilarityPair, Student, Submission,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::health,
        crate::modules::auth::controller::login_page,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::refresh,
        crate::modules::auth::controller::logout,
        crate::modules::overview::controller::overview,
        crate::modules::overview::controller::me,
        crate::modules::semesters::controller::list_semesters,
        crate::modules::semesters::controller::list_courses,
        crate::modules::courses::controller::list_assignments,
        crate::modules::courses::controller::list_students,
        crate::modules::courses::controller::run_analysis,
        crate::modules::assignments::controller::list_submissions,
        crate::modules::assignments::controller::list_similarity_pairs,
        crate::modules::assignments::controller::list_alerts,
        crate::modules::plots::controller::assignment_plot,
        crate::modules::plots::controller::course_plot,
        crate::modules::cheating::controller::list_flagged_students,
        crate::modules::cheating::controller::list_confirmed_cheaters,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            LoginInfo,
            SessionInfo,
            SessionState,
            SessionAction,
            GoogleVerifyRequest,
            LoginUser,
            CurrentUser,
            Overview,
            Semester,
            Course,
            CourseCatalog,
            Assignment,
            Student,
            Submission,
            SimilarityPair,
            AlertParams,
            AlertsResponse,
            FlaggedStudent,
            ConfirmedCheater,
            AnalysisRun,
            AssignmentPlot,
            CoursePlot,
            PageParams,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Session", description = "Sign-in, token refresh and sign-out"),
        (name = "Dashboard", description = "Landing data for the signed-in instructor"),
        (name = "Courses", description = "Semesters, courses, assignments and students"),
        (name = "Assignments", description = "Submissions, similarity pairs and alerts"),
        (name = "Plots", description = "Pre-rendered analysis plots"),
        (name = "Analysis", description = "Comparison pipeline runs"),
        (name = "Cheating", description = "Flagged students and confirmed cheaters")
    ),
    info(
        title = "PRISM Dashboard",
        version = "0.1.0",
        description = "Session gateway and JSON dashboard over the PRISM academic-integrity review API.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("access_token"))),
            )
        }
    }
}
