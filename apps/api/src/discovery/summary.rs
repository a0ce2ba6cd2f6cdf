//! Active-Filter Summary — removable chips derived from criteria.
//!
//! Tokens carry their `Dimension` so removal never has to read `display_text` back.

use serde::{Deserialize, Serialize};

use crate::models::{Dimension, FilterCriteria, PaidFilter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterToken {
    pub dimension: Dimension,
    pub display_text: String,
}

impl FilterToken {
    fn new(dimension: Dimension, display_text: String) -> Self {
        Self {
            dimension,
            display_text,
        }
    }
}

/// Tokens for every set facet, always ordered Location, Type, Field, Duration, Paid.
/// The search term never produces a token.
pub fn summarize(criteria: &FilterCriteria) -> Vec<FilterToken> {
    Dimension::ALL
        .iter()
        .filter_map(|&dimension| token_for(criteria, dimension))
        .collect()
}

fn token_for(criteria: &FilterCriteria, dimension: Dimension) -> Option<FilterToken> {
    let text = match dimension {
        Dimension::Location => format!("Location: {}", criteria.location.as_ref()?),
        Dimension::Type => format!("Type: {}", criteria.listing_type?),
        Dimension::Field => format!("Field: {}", criteria.field.as_ref()?),
        Dimension::Duration => format!("Duration: {}", criteria.duration_range?),
        Dimension::Paid => match criteria.paid {
            PaidFilter::Unset => return None,
            PaidFilter::RequirePaid => "Paid".to_string(),
            PaidFilter::RequireUnpaid => "Unpaid".to_string(),
        },
    };
    Some(FilterToken::new(dimension, text))
}

/// A copy of `criteria` with `dimension` unset. No-op when it already is.
pub fn clear_token(criteria: &FilterCriteria, dimension: Dimension) -> FilterCriteria {
    let mut next = criteria.clone();
    match dimension {
        Dimension::Location => next.location = None,
        Dimension::Type => next.listing_type = None,
        Dimension::Field => next.field = None,
        Dimension::Duration => next.duration_range = None,
        Dimension::Paid => next.paid = PaidFilter::Unset,
    }
    next
}

/// Every facet unset and the search term emptied.
pub fn clear_all(_criteria: &FilterCriteria) -> FilterCriteria {
    FilterCriteria::default()
}
