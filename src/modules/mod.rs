pub mod assignments;
pub mod auth;
pub mod cheating;
pub mod courses;
pub mod overview;
pub mod plots;
pub mod semesters;

use prism_client::ClientError;
use prism_core::AppError;

use crate::metrics::track_backend_error;

/// Counts a failed backend call and turns it into a response error.
pub(crate) fn backend_failure(err: ClientError) -> AppError {
    track_backend_error(err.status().as_u16());
    err.into()
}
