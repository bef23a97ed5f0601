//! # PRISM Auth
//!
//! Client-side handling of the backend's JWTs.
//!
//! The dashboard never verifies signatures; that is the backend's job. It
//! only reads the claims to decide where a request should go:
//!
//! - [`claims`]: Claim structure of the access and refresh tokens
//! - [`jwt`]: Unverified decoding and expiry checks
//! - [`session`]: The session state check shared by the server and the CLI
//!
//! # Example
//!
//! ```ignore
//! use prism_auth::{SessionAction, SessionState};
//!
//! let state = SessionState::classify(access.as_deref(), refresh.as_deref(), now, 0);
//! match state.action() {
//!     SessionAction::Continue => { /* serve the page */ }
//!     other => { /* redirect to other.location() */ }
//! }
//! ```

pub mod claims;
pub mod jwt;
pub mod session;

pub use claims::TokenClaims;
pub use jwt::{AuthError, decode_claims, is_token_valid};
pub use session::{SessionAction, SessionState};
