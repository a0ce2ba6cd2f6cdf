//! Axum route handlers for the Discovery API.
//!
//! Filter state lives with the client: every request carries its criteria, and the server
//! holds nothing per user.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};

use crate::discovery::engine;
use crate::discovery::facets::FacetOptions;
use crate::discovery::intents::{set_filter, FilterIntent};
use crate::discovery::session::BrowseSession;
use crate::discovery::summary::FilterToken;
use crate::errors::{AppError, ValidationError};
use crate::models::{Dimension, FilterCriteria, ListingRecord};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Query-string form of the criteria. Values are parsed exactly like `set_filter` input.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub q: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub listing_type: Option<String>,
    pub field: Option<String>,
    pub duration: Option<String>,
    pub paid: Option<String>,
}

impl ListingQuery {
    pub fn into_criteria(self) -> Result<FilterCriteria, ValidationError> {
        let facets = [
            (Dimension::Location, self.location),
            (Dimension::Type, self.listing_type),
            (Dimension::Field, self.field),
            (Dimension::Duration, self.duration),
            (Dimension::Paid, self.paid),
        ];

        let base = FilterCriteria {
            search_term: self.q.unwrap_or_default(),
            ..Default::default()
        };

        facets
            .into_iter()
            .filter_map(|(dimension, value)| value.map(|v| (dimension, v)))
            .try_fold(base, |criteria, (dimension, value)| {
                set_filter(&criteria, dimension, &value)
            })
    }
}

#[derive(Debug, Serialize)]
pub struct ListingsResponse {
    pub total: usize,
    pub listings: Vec<ListingRecord>,
    pub active_filters: Vec<FilterToken>,
    pub criteria: FilterCriteria,
}

#[derive(Debug, Deserialize)]
pub struct ApplyIntentRequest {
    #[serde(default)]
    pub criteria: FilterCriteria,
    pub intent: FilterIntent,
}

#[derive(Debug, Serialize)]
pub struct ApplyIntentResponse {
    pub criteria: FilterCriteria,
    pub active_filters: Vec<FilterToken>,
    pub total: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/listings
///
/// Filters the loaded collection by the query-string criteria and returns the
/// visible listings together with their removable active-filter tokens.
pub async fn handle_list_listings(
    State(state): State<AppState>,
    query: Result<Query<ListingQuery>, QueryRejection>,
) -> Result<Json<ListingsResponse>, AppError> {
    let Query(query) = query?;
    let criteria = query.into_criteria()?;
    let session = BrowseSession::with_criteria(state.listings.clone(), criteria);

    Ok(Json(ListingsResponse {
        total: session.visible().len(),
        listings: session.visible().to_vec(),
        active_filters: session.active_filters(),
        criteria: session.criteria().clone(),
    }))
}

/// GET /api/v1/listings/featured
pub async fn handle_featured(State(state): State<AppState>) -> Json<Vec<ListingRecord>> {
    Json(engine::featured(&state.listings))
}

/// GET /api/v1/listings/facets
pub async fn handle_facets(State(state): State<AppState>) -> Json<FacetOptions> {
    Json(state.facets.as_ref().clone())
}

/// GET /api/v1/listings/:id
pub async fn handle_get_listing(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<ListingRecord>, AppError> {
    let Path(id) = id?;
    state
        .listings
        .iter()
        .find(|r| r.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Listing {id} not found")))
}

/// POST /api/v1/filters/apply
///
/// Applies one user intent to the criteria the client sends and returns the next
/// criteria, its tokens, and how many listings it leaves visible.
pub async fn handle_apply_intent(
    State(state): State<AppState>,
    request: Result<Json<ApplyIntentRequest>, JsonRejection>,
) -> Result<Json<ApplyIntentResponse>, AppError> {
    let Json(request) = request?;
    let mut session = BrowseSession::with_criteria(state.listings.clone(), request.criteria);
    session.apply(&request.intent)?;

    Ok(Json(ApplyIntentResponse {
        criteria: session.criteria().clone(),
        active_filters: session.active_filters(),
        total: session.visible().len(),
    }))
}
