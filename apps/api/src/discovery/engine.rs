//! Filter Engine — conjunction of every facet matcher plus the search predicate.
//!
//! The visible view is always recomputed from the full collection; there is no
//! incremental state. Collections are small (tens to low thousands of listings), so a
//! full O(n·k) scan per change is the whole strategy. An index, if ever needed, belongs
//! behind `filter` without changing its signature.

use crate::discovery::matchers::{
    matches_duration, matches_field, matches_location, matches_paid, matches_search,
    matches_type,
};
use crate::models::{FilterCriteria, ListingRecord};

/// True iff `record` satisfies every constraint in `criteria`.
///
/// Equality checks run before the substring scans.
pub fn matches(record: &ListingRecord, criteria: &FilterCriteria) -> bool {
    matches_type(record, criteria.listing_type)
        && matches_field(record, criteria.field.as_deref())
        && matches_duration(record, criteria.duration_range.as_ref())
        && matches_paid(record, criteria.paid)
        && matches_location(record, criteria.location.as_deref())
        && matches_search(record, &criteria.search_term)
}

/// Stable filter: survivors keep their relative order from `listings`.
pub fn filter(listings: &[ListingRecord], criteria: &FilterCriteria) -> Vec<ListingRecord> {
    listings
        .iter()
        .filter(|record| matches(record, criteria))
        .cloned()
        .collect()
}

/// The featured subset, in collection order. Independent of any criteria.
pub fn featured(listings: &[ListingRecord]) -> Vec<ListingRecord> {
    listings.iter().filter(|r| r.featured).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::matchers;
    use crate::discovery::summary::clear_token;
    use crate::discovery::test_support::{catalog, listing, tech_and_marketing};
    use crate::models::{Dimension, DurationRange, ListingType, PaidFilter, Stipend};

    fn ids(records: &[ListingRecord]) -> Vec<u64> {
        records.iter().map(|r| r.id).collect()
    }

    /// A spread of criteria covering each dimension alone and in combination.
    fn criteria_grid() -> Vec<FilterCriteria> {
        vec![
            FilterCriteria::default(),
            FilterCriteria {
                search_term: "intern".to_string(),
                ..Default::default()
            },
            FilterCriteria {
                search_term: "bank".to_string(),
                ..Default::default()
            },
            FilterCriteria {
                location: Some("kenya".to_string()),
                ..Default::default()
            },
            FilterCriteria {
                listing_type: Some(ListingType::Hybrid),
                ..Default::default()
            },
            FilterCriteria {
                field: Some("Finance".to_string()),
                ..Default::default()
            },
            FilterCriteria {
                duration_range: Some(DurationRange::new(4, 6).unwrap()),
                ..Default::default()
            },
            FilterCriteria {
                paid: PaidFilter::RequireUnpaid,
                ..Default::default()
            },
            FilterCriteria {
                search_term: "intern".to_string(),
                location: Some("Nairobi".to_string()),
                duration_range: Some(DurationRange::new(1, 3).unwrap()),
                paid: PaidFilter::RequirePaid,
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_empty_criteria_returns_everything_in_order() {
        let listings = catalog();
        assert_eq!(filter(&listings, &FilterCriteria::default()), listings);
    }

    #[test]
    fn test_empty_collection_yields_empty_result() {
        let criteria = FilterCriteria {
            field: Some("Technology".to_string()),
            ..Default::default()
        };
        assert!(filter(&[], &criteria).is_empty());
    }

    #[test]
    fn test_field_scenario_then_clear() {
        let listings = tech_and_marketing();
        let criteria = FilterCriteria {
            field: Some("Technology".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter(&listings, &criteria)), vec![1]);

        let cleared = clear_token(&criteria, Dimension::Field);
        assert_eq!(ids(&filter(&listings, &cleared)), vec![1, 2]);
    }

    #[test]
    fn test_duration_range_boundaries() {
        let listings: Vec<_> = [3, 4, 6, 7]
            .into_iter()
            .enumerate()
            .map(|(i, months)| ListingRecord {
                duration_months: months,
                ..listing(i as u64 + 1, "Intern")
            })
            .collect();
        let criteria = FilterCriteria {
            duration_range: Some(DurationRange::new(4, 6).unwrap()),
            ..Default::default()
        };
        let months: Vec<u32> = filter(&listings, &criteria)
            .iter()
            .map(|r| r.duration_months)
            .collect();
        assert_eq!(months, vec![4, 6]);
    }

    #[test]
    fn test_require_unpaid_excludes_every_paid_amount() {
        let listings = vec![
            ListingRecord {
                stipend: Stipend::Paid {
                    amount: "Unpaid".to_string(),
                },
                ..listing(1, "Odd amount text")
            },
            ListingRecord {
                stipend: Stipend::Paid {
                    amount: String::new(),
                },
                ..listing(2, "Blank amount")
            },
            ListingRecord {
                stipend: Stipend::Unpaid,
                ..listing(3, "Volunteer")
            },
        ];
        let criteria = FilterCriteria {
            paid: PaidFilter::RequireUnpaid,
            ..Default::default()
        };
        assert_eq!(ids(&filter(&listings, &criteria)), vec![3]);
    }

    #[test]
    fn test_dimensions_combine_with_and() {
        let criteria = FilterCriteria {
            listing_type: Some(ListingType::Hybrid),
            location: Some("Mombasa".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter(&catalog(), &criteria)), vec![4]);
    }

    #[test]
    fn test_search_and_facet_combine() {
        let criteria = FilterCriteria {
            search_term: "bank".to_string(),
            listing_type: Some(ListingType::Remote),
            ..Default::default()
        };
        assert_eq!(ids(&filter(&catalog(), &criteria)), vec![2]);
    }

    #[test]
    fn test_refiltering_is_idempotent() {
        let listings = catalog();
        for criteria in criteria_grid() {
            let once = filter(&listings, &criteria);
            assert_eq!(filter(&once, &criteria), once, "{criteria:?}");
        }
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let mut listings = catalog();
        listings.reverse();
        for criteria in criteria_grid() {
            let kept = ids(&filter(&listings, &criteria));
            let expected: Vec<u64> = ids(&listings)
                .into_iter()
                .filter(|id| kept.contains(id))
                .collect();
            assert_eq!(kept, expected, "{criteria:?}");
        }
    }

    #[test]
    fn test_membership_is_conjunction_of_matchers() {
        let listings = catalog();
        for criteria in criteria_grid() {
            let kept = ids(&filter(&listings, &criteria));
            for record in &listings {
                let independently = matchers::matches_search(record, &criteria.search_term)
                    && matchers::matches_location(record, criteria.location.as_deref())
                    && matchers::matches_type(record, criteria.listing_type)
                    && matchers::matches_field(record, criteria.field.as_deref())
                    && matchers::matches_duration(record, criteria.duration_range.as_ref())
                    && matchers::matches_paid(record, criteria.paid);
                assert_eq!(kept.contains(&record.id), independently, "{criteria:?}");
            }
        }
    }

    #[test]
    fn test_featured_subset() {
        assert_eq!(ids(&featured(&catalog())), vec![1, 2]);
        assert!(featured(&tech_and_marketing()).is_empty());
    }
}
