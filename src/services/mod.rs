//! Service layer for the scraper.
//!
//! - `LinkDiscovery`: finds report links on the index page
//! - `DocumentFetcher`: downloads reports to the scratch directory
//! - `FieldExtractor`: turns report text into records
//! - `PageReader`: reads the first page of a PDF

pub mod documents;
pub mod extractor;
pub mod links;
pub mod pdf;
pub mod tables;

pub use documents::{DocumentFetcher, RetrievedBatch, sanitize_filename};
pub use extractor::FieldExtractor;
pub use links::{LinkDiscovery, parse_links};
pub use pdf::{PageReader, PdfPageReader};
