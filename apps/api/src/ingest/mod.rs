//! Listing ingestion — resolves display-shaped listings into `ListingRecord`s once, at load.
//!
//! Everything the engine compares numerically or by variant (duration, stipend, type) is
//! parsed here so filtering never has to re-read free text.

pub mod seed;
pub mod source;

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::models::{ListingRecord, ListingType, Stipend};

/// A listing as data-loading collaborators deliver it, e.g. `"duration": "3 months"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListing {
    pub id: u64,
    pub title: String,
    pub company: String,
    pub field: String,
    pub location: String,
    #[serde(rename = "type")]
    pub listing_type: String,
    pub duration: String,
    pub stipend: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub applications: u32,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub urgent: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub perks: Vec<String>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

impl RawListing {
    pub fn into_record(self) -> Result<ListingRecord, ValidationError> {
        let id = self.id;
        let wrap = |source: ValidationError| ValidationError::InvalidListing {
            id,
            source: Box::new(source),
        };

        let listing_type = self.listing_type.parse::<ListingType>().map_err(wrap)?;
        let duration_months = parse_duration_months(&self.duration).map_err(wrap)?;
        let stipend = parse_stipend(id, &self.stipend)?;

        Ok(ListingRecord {
            id,
            title: self.title,
            company: self.company,
            field: self.field,
            location: self.location,
            listing_type,
            duration_months,
            stipend,
            tags: dedup_tags(self.tags),
            applications: self.applications,
            rating: self.rating,
            featured: self.featured,
            urgent: self.urgent,
            description: self.description,
            requirements: self.requirements,
            perks: self.perks,
            deadline: self.deadline,
        })
    }
}

/// Converts a whole payload, stopping at the first bad record. Ids must be unique.
pub fn ingest_all(raw: Vec<RawListing>) -> Result<Vec<ListingRecord>, ValidationError> {
    let mut seen = HashSet::with_capacity(raw.len());
    raw.into_iter()
        .map(|listing| {
            if !seen.insert(listing.id) {
                return Err(ValidationError::DuplicateListingId(listing.id));
            }
            listing.into_record()
        })
        .collect()
}

/// `"3 months"`, `"1 month"`, `"6"` → months. Zero and trailing text are rejected.
pub fn parse_duration_months(raw: &str) -> Result<u32, ValidationError> {
    let malformed = || ValidationError::MalformedListingDuration(raw.to_string());

    let trimmed = raw.trim();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(digits_end);

    let months = number.parse::<u32>().map_err(|_| malformed())?;
    let unit = unit.trim().to_ascii_lowercase();
    if months == 0 || !matches!(unit.as_str(), "" | "month" | "months") {
        return Err(malformed());
    }
    Ok(months)
}

/// `"Unpaid"` is the only spelling of the unpaid variant; any other text is the amount.
pub fn parse_stipend(id: u64, raw: &str) -> Result<Stipend, ValidationError> {
    let amount = raw.trim();
    if amount.is_empty() {
        return Err(ValidationError::MissingStipend { id });
    }
    if amount.eq_ignore_ascii_case("unpaid") {
        return Ok(Stipend::Unpaid);
    }
    Ok(Stipend::Paid {
        amount: amount.to_string(),
    })
}

// Tags are an ordered set: keep first occurrence, compare case-insensitively.
fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.into_iter()
        .filter(|tag| seen.insert(tag.to_lowercase()))
        .collect()
}
