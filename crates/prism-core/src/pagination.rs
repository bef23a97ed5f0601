//! Page-number pagination as served by the backend.
//!
//! The backend wraps list results in a page envelope:
//!
//! ```json
//! {
//!   "count": 42,
//!   "next": "http://backend/api/cheating/submission-similarity-pairs/?page=3",
//!   "previous": "http://backend/api/cheating/submission-similarity-pairs/?page=1",
//!   "results": [...]
//! }
//! ```
//!
//! Page size defaults to 10 and is capped at 100, mirroring the backend's
//! `page_size` query parameter limits.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Deserializes an optional query string number, treating `""` as absent.
fn deserialize_optional_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse::<u32>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// A single page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Page<T> {
    /// Total number of items across all pages
    pub count: u64,
    /// Absolute URL of the next page, if any
    #[serde(default)]
    pub next: Option<String>,
    /// Absolute URL of the previous page, if any
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Wraps an unpaginated list as a single complete page.
    pub fn single(results: Vec<T>) -> Self {
        Self {
            count: results.len() as u64,
            next: None,
            previous: None,
            results,
        }
    }

    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }

    /// Keeps only the results matching `keep`; `count` follows the filtered length.
    pub fn retain<F>(mut self, keep: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.results.retain(keep);
        self.count = self.results.len() as u64;
        self
    }
}

/// Query parameters for page-number pagination.
///
/// - `page` is 1-indexed and clamped to a minimum of 1
/// - `page_size` is clamped to `[1, 100]` and defaults to 10
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, IntoParams, ToSchema,
)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Page number (1-indexed, default: 1)
    #[serde(default, deserialize_with = "deserialize_optional_u32")]
    pub page: Option<u32>,
    /// Items per page (1-100, default: 10)
    #[serde(default, deserialize_with = "deserialize_optional_u32")]
    pub page_size: Option<u32>,
}

impl PageParams {
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    /// Query pairs in the form the backend expects.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page().to_string()),
            ("page_size", self.page_size().to_string()),
        ]
    }
}
