//! One user's browsing state: the loaded collection, their criteria, and the view.
//!
//! Every change to either input recomputes the view from scratch.

use std::sync::Arc;

use tracing::debug;

use crate::discovery::engine;
use crate::discovery::intents::{apply_intent, FilterIntent};
use crate::discovery::summary::{summarize, FilterToken};
use crate::errors::ValidationError;
use crate::models::{FilterCriteria, ListingRecord};

#[derive(Debug, Clone)]
pub struct BrowseSession {
    listings: Arc<[ListingRecord]>,
    criteria: FilterCriteria,
    visible: Vec<ListingRecord>,
}

impl Default for BrowseSession {
    fn default() -> Self {
        Self::new(Arc::from(Vec::<ListingRecord>::new()))
    }
}

impl BrowseSession {
    /// Starts with empty criteria, so every listing is visible.
    pub fn new(listings: Arc<[ListingRecord]>) -> Self {
        Self::with_criteria(listings, FilterCriteria::default())
    }

    /// Resumes a session whose criteria the client carried over.
    pub fn with_criteria(listings: Arc<[ListingRecord]>, criteria: FilterCriteria) -> Self {
        let mut session = Self {
            listings,
            criteria,
            visible: Vec::new(),
        };
        session.recompute();
        session
    }

    /// Swaps in a freshly loaded collection, keeping the current criteria.
    pub fn replace_listings(&mut self, listings: Arc<[ListingRecord]>) {
        self.listings = listings;
        self.recompute();
    }

    /// Applies one user intent. On error nothing changes.
    pub fn apply(&mut self, intent: &FilterIntent) -> Result<(), ValidationError> {
        let next = apply_intent(&self.criteria, intent)?;
        if next != self.criteria {
            self.criteria = next;
            self.recompute();
        }
        Ok(())
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn visible(&self) -> &[ListingRecord] {
        &self.visible
    }

    pub fn active_filters(&self) -> Vec<FilterToken> {
        summarize(&self.criteria)
    }

    pub fn featured(&self) -> Vec<ListingRecord> {
        engine::featured(&self.listings)
    }

    fn recompute(&mut self) {
        self.visible = engine::filter(&self.listings, &self.criteria);
        debug!(
            listings = self.listings.len(),
            active_dimensions = self.criteria.active_dimensions(),
            searching = !self.criteria.search_term.is_empty(),
            visible = self.visible.len(),
            "Recomputed listing view"
        );
    }
}
