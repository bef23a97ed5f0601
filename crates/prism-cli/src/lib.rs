//! # PRISM CLI
//!
//! Terminal front end for the similarity review dashboard. It talks to the
//! same backend as the web dashboard and applies the same session state
//! check before every command.
//!
//! - [`credentials`]: Token file on disk
//! - [`session`]: Session check, refresh and persistence
//! - [`render`]: Plain-text tables for backend records

pub mod credentials;
pub mod render;
pub mod session;
