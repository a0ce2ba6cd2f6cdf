use serde::Serialize;

use crate::models::{DurationRange, ListingRecord, ListingType};

/// Duration buckets offered to the user. Each must parse as a `DurationRange`.
pub const DURATION_BUCKETS: &[&str] = &["1-3 months", "4-6 months", "7-12 months"];

const PAID_OPTIONS: &[&str] = &["Paid", "Unpaid"];

/// Selectable values for every facet, as a filter sidebar renders them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacetOptions {
    pub locations: Vec<String>,
    pub types: Vec<ListingType>,
    pub fields: Vec<String>,
    pub durations: Vec<String>,
    pub paid: Vec<String>,
}

/// Builds the options for a collection. Locations and fields are the distinct values
/// present, in first-seen order; locations offer only the part before the first comma.
pub fn facet_options(listings: &[ListingRecord]) -> FacetOptions {
    let mut locations: Vec<String> = Vec::new();
    let mut fields: Vec<String> = Vec::new();

    for record in listings {
        let city = record
            .location
            .split(',')
            .next()
            .unwrap_or_default()
            .trim();
        push_distinct(&mut locations, city);
        push_distinct(&mut fields, record.field.trim());
    }

    FacetOptions {
        locations,
        types: ListingType::ALL.to_vec(),
        fields,
        durations: DURATION_BUCKETS
            .iter()
            .filter(|label| DurationRange::parse_label(label).is_ok())
            .map(|label| label.to_string())
            .collect(),
        paid: PAID_OPTIONS.iter().map(|p| p.to_string()).collect(),
    }
}

fn push_distinct(values: &mut Vec<String>, candidate: &str) {
    if !candidate.is_empty() && !values.iter().any(|v| v == candidate) {
        values.push(candidate.to_string());
    }
}
