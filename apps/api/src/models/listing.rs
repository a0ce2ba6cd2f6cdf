use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// How the work is attended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingType {
    #[serde(rename = "On-site", alias = "OnSite")]
    OnSite,
    Remote,
    Hybrid,
}

impl ListingType {
    pub const ALL: [ListingType; 3] = [ListingType::OnSite, ListingType::Remote, ListingType::Hybrid];

    pub fn label(self) -> &'static str {
        match self {
            ListingType::OnSite => "On-site",
            ListingType::Remote => "Remote",
            ListingType::Hybrid => "Hybrid",
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ListingType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | ' ' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "onsite" => Ok(ListingType::OnSite),
            "remote" => Ok(ListingType::Remote),
            "hybrid" => Ok(ListingType::Hybrid),
            _ => Err(ValidationError::UnknownListingType(s.to_string())),
        }
    }
}

/// Compensation. `Unpaid` is its own variant and is never inferred from a missing amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Stipend {
    Paid { amount: String },
    Unpaid,
}

impl Stipend {
    pub fn is_paid(&self) -> bool {
        matches!(self, Stipend::Paid { .. })
    }
}

/// One opportunity as the engine sees it. Durations and stipends are already resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub id: u64,
    pub title: String,
    pub company: String,
    pub field: String,
    pub location: String,
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    pub duration_months: u32,
    pub stipend: Stipend,
    pub tags: Vec<String>,

    // Display-only attributes.
    pub applications: u32,
    pub rating: f32,
    pub featured: bool,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_type_parses_onsite_spellings() {
        for raw in ["On-site", "onsite", "On site", "OnSite", " ON-SITE "] {
            assert_eq!(raw.parse::<ListingType>().unwrap(), ListingType::OnSite, "{raw}");
        }
    }

    #[test]
    fn test_listing_type_rejects_unknown() {
        let err = "Freelance".parse::<ListingType>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownListingType("Freelance".to_string()));
    }

    #[test]
    fn test_listing_type_serde_uses_display_label() {
        assert_eq!(serde_json::to_string(&ListingType::OnSite).unwrap(), r#""On-site""#);
        let t: ListingType = serde_json::from_str(r#""OnSite""#).unwrap();
        assert_eq!(t, ListingType::OnSite);
    }

    #[test]
    fn test_stipend_serde_is_tagged() {
        let paid = Stipend::Paid {
            amount: "Ksh 25,000/month".to_string(),
        };
        let json = serde_json::to_value(&paid).unwrap();
        assert_eq!(json["kind"], "paid");
        assert_eq!(json["amount"], "Ksh 25,000/month");

        let unpaid: Stipend = serde_json::from_str(r#"{"kind":"unpaid"}"#).unwrap();
        assert!(!unpaid.is_paid());
    }
}
