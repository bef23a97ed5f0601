//! Shared helpers for the HTTP layer.
//!
//! - [`cookies`]: Session cookie construction and removal
//! - [`redirect`]: Post-refresh redirect target sanitising

pub mod cookies;
pub mod redirect;
