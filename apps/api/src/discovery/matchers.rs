//! Per-facet predicates. Each answers "does this listing satisfy this one constraint",
//! and an unset constraint is always satisfied.

use crate::models::{DurationRange, ListingRecord, ListingType, PaidFilter};

/// Case-insensitive substring search over title, company, field and tags.
pub fn matches_search(record: &ListingRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

    contains(&record.title)
        || contains(&record.company)
        || contains(&record.field)
        || record.tags.iter().any(|tag| contains(tag))
}

/// Partial, case-insensitive: `"nairobi"` matches `"Nairobi, Kenya"`.
pub fn matches_location(record: &ListingRecord, location: Option<&str>) -> bool {
    match location {
        None => true,
        Some(wanted) => record
            .location
            .to_lowercase()
            .contains(&wanted.to_lowercase()),
    }
}

pub fn matches_type(record: &ListingRecord, listing_type: Option<ListingType>) -> bool {
    listing_type.map_or(true, |t| record.listing_type == t)
}

pub fn matches_field(record: &ListingRecord, field: Option<&str>) -> bool {
    field.map_or(true, |f| record.field == f)
}

pub fn matches_duration(record: &ListingRecord, range: Option<&DurationRange>) -> bool {
    range.map_or(true, |r| r.contains(record.duration_months))
}

pub fn matches_paid(record: &ListingRecord, paid: PaidFilter) -> bool {
    match paid {
        PaidFilter::Unset => true,
        PaidFilter::RequirePaid => record.stipend.is_paid(),
        PaidFilter::RequireUnpaid => !record.stipend.is_paid(),
    }
}
