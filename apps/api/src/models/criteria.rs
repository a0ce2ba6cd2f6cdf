use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::models::listing::ListingType;

/// One independent facet. Declaration order is the order active filters are summarized in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Location,
    Type,
    Field,
    Duration,
    Paid,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Location,
        Dimension::Type,
        Dimension::Field,
        Dimension::Duration,
        Dimension::Paid,
    ];
}

/// Tri-state paid facet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaidFilter {
    #[default]
    Unset,
    RequirePaid,
    RequireUnpaid,
}

impl PaidFilter {
    /// Accepts the facet labels (`paid` / `unpaid`) and the checkbox booleans.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "paid" | "true" => Ok(PaidFilter::RequirePaid),
            "unpaid" | "false" => Ok(PaidFilter::RequireUnpaid),
            _ => Err(ValidationError::UnknownPaidFilter(raw.to_string())),
        }
    }
}

/// Inclusive month range. Only constructible with `1 <= min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurationRange {
    min: u32,
    max: u32,
}

impl DurationRange {
    pub fn new(min: u32, max: u32) -> Result<Self, ValidationError> {
        if min == 0 || max == 0 {
            return Err(ValidationError::NonPositiveDurationRange { min, max });
        }
        if min > max {
            return Err(ValidationError::InvertedDurationRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Parses a facet label such as `"4-6 months"`. The unit suffix is optional.
    pub fn parse_label(label: &str) -> Result<Self, ValidationError> {
        let malformed = || ValidationError::MalformedDurationRange(label.to_string());

        let lower = label.trim().to_ascii_lowercase();
        let bounds = lower
            .strip_suffix("months")
            .or_else(|| lower.strip_suffix("month"))
            .unwrap_or(&lower)
            .trim();

        // Bare digits only: `u32::from_str` would also take a leading `+`.
        let bound = |raw: &str| {
            let raw = raw.trim();
            if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            raw.parse::<u32>().map_err(|_| malformed())
        };

        let (min, max) = bounds.split_once('-').ok_or_else(malformed)?;
        let (min, max) = (bound(min)?, bound(max)?);

        Self::new(min, max)
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, months: u32) -> bool {
        months >= self.min && months <= self.max
    }
}

impl fmt::Display for DurationRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} months", self.min, self.max)
    }
}

// Deserialization goes through `new` so a payload can't smuggle in an inverted range.
impl<'de> Deserialize<'de> for DurationRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Bounds {
            min: u32,
            max: u32,
        }

        let bounds = Bounds::deserialize(deserializer)?;
        DurationRange::new(bounds.min, bounds.max).map_err(serde::de::Error::custom)
    }
}

/// Text facets arrive the same way `set_filter` takes them: trimmed, blank means unset.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}

/// The active search + facet state of one browsing session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub search_term: String,
    #[serde(deserialize_with = "blank_as_none")]
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub listing_type: Option<ListingType>,
    #[serde(deserialize_with = "blank_as_none")]
    pub field: Option<String>,
    pub duration_range: Option<DurationRange>,
    pub paid: PaidFilter,
}

impl FilterCriteria {
    pub fn is_set(&self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Location => self.location.is_some(),
            Dimension::Type => self.listing_type.is_some(),
            Dimension::Field => self.field.is_some(),
            Dimension::Duration => self.duration_range.is_some(),
            Dimension::Paid => self.paid != PaidFilter::Unset,
        }
    }

    /// Number of facet dimensions currently constraining results (search excluded).
    pub fn active_dimensions(&self) -> usize {
        Dimension::ALL.iter().filter(|d| self.is_set(**d)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.active_dimensions() == 0
    }
}
