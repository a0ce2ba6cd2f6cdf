//! User intents — the only way criteria change.
//!
//! Facet values arrive as the raw strings a UI control holds and are parsed here, once,
//! at selection time. A rejected value leaves the caller's criteria untouched.

use serde::{Deserialize, Serialize};

use crate::discovery::summary::{clear_all, clear_token};
use crate::errors::ValidationError;
use crate::models::{Dimension, DurationRange, FilterCriteria, ListingType, PaidFilter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FilterIntent {
    SetSearchTerm { term: String },
    SetFilter { dimension: Dimension, value: String },
    ClearFilter { dimension: Dimension },
    ClearAll,
}

pub fn apply_intent(
    criteria: &FilterCriteria,
    intent: &FilterIntent,
) -> Result<FilterCriteria, ValidationError> {
    match intent {
        FilterIntent::SetSearchTerm { term } => Ok(FilterCriteria {
            search_term: term.clone(),
            ..criteria.clone()
        }),
        FilterIntent::SetFilter { dimension, value } => set_filter(criteria, *dimension, value),
        FilterIntent::ClearFilter { dimension } => Ok(clear_token(criteria, *dimension)),
        FilterIntent::ClearAll => Ok(clear_all(criteria)),
    }
}

/// Sets one facet from its raw control value. A blank value clears the facet, the
/// same as unticking its box.
pub fn set_filter(
    criteria: &FilterCriteria,
    dimension: Dimension,
    value: &str,
) -> Result<FilterCriteria, ValidationError> {
    if value.trim().is_empty() {
        return Ok(clear_token(criteria, dimension));
    }

    let mut next = criteria.clone();
    match dimension {
        Dimension::Location => next.location = Some(value.trim().to_string()),
        Dimension::Type => next.listing_type = Some(value.parse::<ListingType>()?),
        Dimension::Field => next.field = Some(value.trim().to_string()),
        Dimension::Duration => next.duration_range = Some(DurationRange::parse_label(value)?),
        Dimension::Paid => next.paid = PaidFilter::parse(value)?,
    }
    Ok(next)
}
