//! Storage abstractions for extraction output.
//!
//! Each run replaces the whole output file; no history is kept.
//!
//! ```text
//! public/data/
//! └── irsa_river_data.json   # JSON array, latest report first
//! ```

pub mod local;

use crate::error::Result;
use crate::models::ExtractionRecord;

// Re-export for convenience
pub use local::JsonFileStorage;

/// Trait for record storage backends.
pub trait RecordStorage {
    /// Replace the stored batch with `records`, keeping their order.
    fn write_records(&self, records: &[ExtractionRecord]) -> Result<()>;

    /// Load the stored batch, or an empty list if nothing was written yet.
    fn load_records(&self) -> Result<Vec<ExtractionRecord>>;

    /// Human-readable location for log messages.
    fn location(&self) -> String;
}
