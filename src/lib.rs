//! # PRISM Dashboard
//!
//! Web dashboard for the PRISM academic-integrity review tool. Instructors
//! browse semesters, courses, assignments and students, trigger similarity
//! comparisons and view the plots and alerts the analysis backend produces.
//!
//! The dashboard owns no data. Every route is a thin wrapper over the
//! review API, glued together by a cookie-held session:
//!
//! ```text
//! browser ──cookies──▶ session middleware ──▶ controller ──▶ BackendClient ──▶ review API
//! ```
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Session check and the AuthSession extractor
//! ├── modules/          # Feature modules
//! │   ├── auth/        # /login, /refresh, /logout, /health
//! │   ├── overview/    # / and /api/me
//! │   ├── semesters/   # Semesters and their courses
//! │   ├── courses/     # Assignments, students, analysis runs
//! │   ├── assignments/ # Submissions, similarity pairs, alerts
//! │   ├── plots/       # PNG plots proxied from the backend
//! │   └── cheating/    # Flagged students, confirmed cheaters
//! └── utils/            # Cookie and redirect helpers
//! ```
//!
//! ## Session
//!
//! The access and refresh JWTs live in HttpOnly cookies. Before any
//! protected route runs, the pair is classified by
//! [`prism_auth::SessionState`] and the request either continues or is
//! redirected (`303`) to `/login`, `/refresh` or `/logout`.
//!
//! ## Modules
//!
//! - [`docs`]: OpenAPI documentation setup
//! - [`logging`]: Request logging and tracing subscriber setup
//! - [`metrics`]: Prometheus metrics endpoint and dashboard counters
//! - [`middleware`]: Session middleware and extractor
//! - [`modules`]: Feature modules
//! - [`router`]: Main application router
//! - [`state`]: Shared application state
//! - [`utils`]: Cookie and redirect helpers
//! - [`validator`]: Request validation utilities

pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;

// Re-export workspace crates for convenience
pub use prism_auth;
pub use prism_client;
pub use prism_config;
pub use prism_core;
pub use prism_models;
