pub mod criteria;
pub mod listing;

pub use criteria::{Dimension, DurationRange, FilterCriteria, PaidFilter};
pub use listing::{ListingRecord, ListingType, Stipend};
