//! Studex listing discovery: the filter & search engine behind the internship board,
//! plus the ingestion and HTTP layers that feed and expose it.

pub mod config;
pub mod discovery;
pub mod errors;
pub mod ingest;
pub mod models;
pub mod routes;
pub mod state;
