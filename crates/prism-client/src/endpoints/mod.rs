//! One `impl BackendClient` block per backend area.

mod assignments;
mod auth;
mod cheating;
mod courses;
mod plots;

pub use plots::PlotImage;

use prism_core::Page;
use serde::Deserialize;

/// Custom list actions answer with a bare array, router viewsets with a page.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum Listing<T> {
    Page(Page<T>),
    List(Vec<T>),
}

impl<T> Listing<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Page(page) => page.results,
            Listing::List(items) => items,
        }
    }

    pub(crate) fn into_page(self) -> Page<T> {
        match self {
            Listing::Page(page) => page,
            Listing::List(items) => Page::single(items),
        }
    }
}
