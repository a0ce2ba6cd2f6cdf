use std::sync::Arc;

use crate::discovery::facets::{facet_options, FacetOptions};
use crate::models::ListingRecord;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; read-only for the life of the process.
    pub listings: Arc<[ListingRecord]>,
    /// Derived from `listings` at the same time, so the two never disagree.
    pub facets: Arc<FacetOptions>,
}

impl AppState {
    pub fn new(listings: Vec<ListingRecord>) -> Self {
        let facets = facet_options(&listings);
        Self {
            listings: listings.into(),
            facets: Arc::new(facets),
        }
    }
}
