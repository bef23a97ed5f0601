//! # PRISM Core
//!
//! Foundational types shared by the dashboard server, the backend client
//! and the terminal dashboard:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`pagination`]: Page-number pagination as served by the backend
//!
//! # Example
//!
//! ```ignore
//! use prism_core::{AppError, Page, PageParams};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Assignment not found"));
//!
//! let params = PageParams { page: Some(2), page_size: Some(25) };
//! assert_eq!(params.page(), 2);
//! ```

pub mod errors;
pub mod pagination;

pub use errors::{AppError, ErrorResponse};
pub use pagination::{Page, PageParams};
