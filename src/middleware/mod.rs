//! Middleware and extractors for the protected routes.
//!
//! # Modules
//!
//! - [`session`]: Cookie-driven session check in front of every protected route
//! - [`auth`]: [`auth::AuthSession`] extractor handing the session to controllers
//!
//! # Flow
//!
//! 1. The browser sends the `access_token` and `refresh_token` cookies
//! 2. [`session::require_session`] classifies the pair and redirects unless
//!    the access token is still live
//! 3. Controllers take an [`auth::AuthSession`] and call the backend with it
//! 4. Tokens refreshed during the call are written back as cookies
//!
//! ```ignore
//! use crate::middleware::auth::AuthSession;
//!
//! async fn list_semesters(
//!     State(state): State<AppState>,
//!     auth: AuthSession,
//! ) -> Result<Json<Vec<Semester>>, AppError> {
//!     let semesters = state.backend.semesters(&auth.session, auth.user.user_id).await?;
//!     Ok(Json(semesters))
//! }
//! ```

pub mod auth;
pub mod session;
