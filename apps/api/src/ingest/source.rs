//! Listing sources — where the raw collection comes from.
//!
//! The engine doesn't care: every source ends in `ingest_all`, and `AppState` only ever
//! sees the resolved `ListingRecord`s.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::errors::ValidationError;
use crate::ingest::seed::SEED_LISTINGS_JSON;
use crate::ingest::{ingest_all, RawListing};
use crate::models::ListingRecord;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid listing data: {0}")]
    Invalid(#[from] ValidationError),
}

/// Either a bare array or the `{"internships": [...]}` envelope the web client reads.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListingPayload {
    Bare(Vec<RawListing>),
    Wrapped { internships: Vec<RawListing> },
}

impl ListingPayload {
    fn into_raw(self) -> Vec<RawListing> {
        match self {
            ListingPayload::Bare(raw) => raw,
            ListingPayload::Wrapped { internships } => internships,
        }
    }
}

fn ingest_json(json: &str) -> Result<Vec<ListingRecord>, SourceError> {
    let payload: ListingPayload = serde_json::from_str(json)?;
    Ok(ingest_all(payload.into_raw())?)
}

/// Swappable origin of the listing collection. Carried as `Box<dyn ListingSource>`.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Human-readable origin, for logs.
    fn describe(&self) -> String;

    async fn load(&self) -> Result<Vec<ListingRecord>, SourceError>;
}

pub struct SeedSource;

#[async_trait]
impl ListingSource for SeedSource {
    fn describe(&self) -> String {
        "built-in seed listings".to_string()
    }

    async fn load(&self) -> Result<Vec<ListingRecord>, SourceError> {
        ingest_json(SEED_LISTINGS_JSON)
    }
}

pub struct FileSource {
    pub path: PathBuf,
}

#[async_trait]
impl ListingSource for FileSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn load(&self) -> Result<Vec<ListingRecord>, SourceError> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        ingest_json(&json)
    }
}

pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl ListingSource for HttpSource {
    fn describe(&self) -> String {
        format!("url {}", self.url)
    }

    async fn load(&self) -> Result<Vec<ListingRecord>, SourceError> {
        let payload: ListingPayload = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(ingest_all(payload.into_raw())?)
    }
}

/// File wins over URL; with neither configured the seed collection is used.
pub fn source_from_config(config: &Config) -> Box<dyn ListingSource> {
    if let Some(path) = &config.listings_file {
        Box::new(FileSource { path: path.clone() })
    } else if let Some(url) = &config.listings_url {
        Box::new(HttpSource::new(url.clone()))
    } else {
        Box::new(SeedSource)
    }
}

pub async fn load_listings(source: &dyn ListingSource) -> Result<Vec<ListingRecord>, SourceError> {
    let listings = source.load().await?;
    info!("Loaded {} listings from {}", listings.len(), source.describe());
    Ok(listings)
}
