//! Listing fixtures shared by the discovery tests.

use crate::models::{ListingRecord, ListingType, Stipend};

pub fn listing(id: u64, title: &str) -> ListingRecord {
    ListingRecord {
        id,
        title: title.to_string(),
        company: "Acme Ltd".to_string(),
        field: "Technology".to_string(),
        location: "Nairobi, Kenya".to_string(),
        listing_type: ListingType::OnSite,
        duration_months: 3,
        stipend: paid("Ksh 20,000/month"),
        tags: vec![],
        applications: 0,
        rating: 4.0,
        featured: false,
        urgent: false,
        description: String::new(),
        requirements: vec![],
        perks: vec![],
        deadline: None,
    }
}

pub fn paid(amount: &str) -> Stipend {
    Stipend::Paid {
        amount: amount.to_string(),
    }
}

/// The two-listing catalog used by the Technology/Marketing scenario.
pub fn tech_and_marketing() -> Vec<ListingRecord> {
    vec![
        ListingRecord {
            field: "Technology".to_string(),
            duration_months: 3,
            stipend: paid("Ksh 25000"),
            ..listing(1, "Software Engineering Intern")
        },
        ListingRecord {
            field: "Marketing".to_string(),
            duration_months: 4,
            stipend: Stipend::Unpaid,
            ..listing(2, "Marketing Intern")
        },
    ]
}

/// A varied catalog that exercises every facet.
pub fn catalog() -> Vec<ListingRecord> {
    vec![
        ListingRecord {
            company: "Safaricom PLC".to_string(),
            location: "Nairobi, Kenya".to_string(),
            listing_type: ListingType::Hybrid,
            duration_months: 3,
            tags: vec!["React".to_string(), "Node.js".to_string()],
            featured: true,
            ..listing(1, "Software Engineering Intern")
        },
        ListingRecord {
            company: "Equity Bank".to_string(),
            field: "Data & Analytics".to_string(),
            location: "Remote".to_string(),
            listing_type: ListingType::Remote,
            duration_months: 6,
            tags: vec!["Python".to_string(), "Machine Learning".to_string()],
            featured: true,
            ..listing(2, "Data Science Intern")
        },
        ListingRecord {
            company: "Andela".to_string(),
            field: "Marketing".to_string(),
            duration_months: 4,
            stipend: Stipend::Unpaid,
            tags: vec!["Social Media".to_string()],
            ..listing(3, "Marketing Intern")
        },
        ListingRecord {
            company: "KCB Bank".to_string(),
            field: "Finance".to_string(),
            location: "Mombasa, Kenya".to_string(),
            listing_type: ListingType::Hybrid,
            duration_months: 7,
            tags: vec!["Excel".to_string()],
            ..listing(4, "Finance Intern")
        },
    ]
}
