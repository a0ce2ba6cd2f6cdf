// Filter & search engine: per-facet matchers, the conjunctive filter, the active-filter
// summary, and the intent/session layer the HTTP handlers drive.

pub mod engine;
pub mod facets;
pub mod handlers;
pub mod intents;
pub mod matchers;
pub mod session;
pub mod summary;

#[cfg(test)]
pub(crate) mod test_support;
