// src/models/mod.rs

//! Domain models for the scraper.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

pub mod catalogue;
mod config;
mod link;
mod outcome;
mod record;

// Re-export all public types
pub use catalogue::{StationCatalogue, StationSpec};
pub use config::{Config, HttpConfig, PathsConfig, SourceConfig};
pub use link::LinkReference;
pub use outcome::{ExtractionOutcome, RunOutcome, RunReport, RunStats};
pub use record::{ExtractionRecord, IrsaReleases, Province, StationMetrics};
