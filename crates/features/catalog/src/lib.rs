//! Catalog feature slice: the four reference datasets, the list/search/random queries over them
//! and the HTML card renderer.

mod dataset;
pub mod error;
mod model;
pub mod query;
pub mod render;
#[cfg(feature = "server")]
pub mod routes;

pub use dataset::{Dataset, Sources};
pub use error::CatalogError;
#[cfg(feature = "server")]
pub use error::ErrorBody;
pub use model::{Book, Character, House, Record, Spell};
pub use query::{ListQuery, Listing, resolve_category, resolve_language};

use potter_domain::config::CatalogConfig;
use potter_kernel::domain::registry::InitializedSlice;
use std::num::NonZeroUsize;
use strum::IntoEnumIterator;

/// Catalog feature state, immutable after [`init`].
#[potter_derive::potter_slice]
pub struct Catalog {
    dataset: Dataset,
    default_page_size: NonZeroUsize,
}

impl Catalog {
    #[must_use]
    pub fn from_dataset(dataset: Dataset, default_page_size: NonZeroUsize) -> Self {
        Self::new(CatalogInner { dataset, default_page_size })
    }
}

/// Parses the embedded datasets and wraps them in a registrable slice.
///
/// # Errors
/// * [`CatalogError::Dataset`] / [`CatalogError::Internal`] when the embedded data is invalid.
/// * [`CatalogError::Internal`] when `default_page_size` is zero.
pub fn init(config: &CatalogConfig) -> Result<InitializedSlice, CatalogError> {
    let default_page_size =
        NonZeroUsize::new(config.default_page_size).ok_or_else(|| CatalogError::Internal {
            message: "default_page_size must be at least 1".into(),
            context: Some("Reading catalog configuration".into()),
        })?;

    let dataset = Dataset::embedded()?;
    for category in potter_domain::catalog::Category::iter() {
        tracing::debug!(%category, records = dataset.records(category).len(), "Dataset loaded");
    }

    tracing::info!(default_page_size = default_page_size.get(), "Catalog slice initialized");

    Ok(InitializedSlice::new(Catalog::from_dataset(dataset, default_page_size)))
}
