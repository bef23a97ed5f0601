//! # PRISM Client
//!
//! [`BackendClient`] wraps every review API endpoint the dashboard uses.
//! Authenticated calls take a [`Session`]; when the backend answers `401`
//! the client refreshes the access token once and replays the request.
//!
//! ```ignore
//! use prism_client::{BackendClient, Session};
//! use prism_config::BackendConfig;
//!
//! let client = BackendClient::new(&BackendConfig::from_env())?;
//! let session = Session::new(Some(access), Some(refresh));
//! let semesters = client.semesters(&session, user_id).await?;
//! ```

mod client;
pub mod endpoints;
pub mod error;
pub mod session;

pub use client::BackendClient;
pub use endpoints::PlotImage;
pub use error::{ApiError, ClientError};
pub use session::{Session, Tokens};
