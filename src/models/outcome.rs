//! Per-document and per-run outcomes.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::ExtractionRecord;

/// Result of extracting one document.
///
/// Both variants carry a record: a failed document still contributes its
/// default record to the batch.
#[derive(Debug, Clone)]
pub enum ExtractionOutcome {
    /// The first page was read and the pattern catalogue applied
    Extracted(ExtractionRecord),
    /// The document could not be read; `record` holds the defaults
    Failed {
        record: ExtractionRecord,
        error: String,
    },
}

impl ExtractionOutcome {
    pub fn record(&self) -> &ExtractionRecord {
        match self {
            Self::Extracted(record) | Self::Failed { record, .. } => record,
        }
    }

    pub fn into_record(self) -> ExtractionRecord {
        match self {
            Self::Extracted(record) | Self::Failed { record, .. } => record,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Counters and timing for one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub links_found: usize,
    pub downloads_failed: usize,
    pub documents_extracted: usize,
    pub extraction_failures: usize,
}

impl RunStats {
    /// Elapsed wall time in milliseconds.
    pub fn elapsed_ms(&self) -> i64 {
        (self.end_time - self.start_time).num_milliseconds()
    }
}

/// A run that produced at least one record.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub records: Vec<ExtractionRecord>,
    /// Where the batch was written
    pub location: String,
    pub stats: RunStats,
}

/// Outcome of a full pipeline run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// Discovery found no document links (or the index fetch failed)
    NoLinks,
    /// Links were found but none could be downloaded
    NoDocuments { attempted: usize },
    /// Records were written to the output path
    Completed(RunReport),
}

impl RunOutcome {
    /// Whether the run produced any records.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed(report) if !report.records.is_empty())
    }
}
