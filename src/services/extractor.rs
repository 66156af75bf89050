// src/services/extractor.rs

//! Field extraction from IRSA report text.
//!
//! Applies the station catalogue and the fixed report patterns to the text
//! of a report's first page. Extraction never fails: unreadable documents
//! produce the default record, and missing patterns leave fields unset.

use std::path::Path;

use regex::{Captures, Regex};

use crate::error::Result;
use crate::models::{ExtractionOutcome, ExtractionRecord, IrsaReleases, StationCatalogue};
use crate::services::pdf::PageReader;
use crate::services::tables::{find_tables, labelled_values};
use crate::utils::fs::base_name;

const DATE_PATTERN: &str = r"(\d{2}\.\d{2}\.\d{4})";
const RIM_INFLOWS_PATTERN: &str = r"(?i)\*?\*?RIM STATION INFLOWS\s*TOTAL\s*=?\s*(\d+)";
const RIM_OUTFLOWS_PATTERN: &str = r"(?i)RIM STATION OUTFLOWS\s*TOTAL\s*=?\s*(\d+)";
const RELEASES_PATTERN: &str = concat!(
    r"IRSA RELEASES\s*Date\s*Today\s*Last Year\s*(\d{2}\.\d{2}\.\d{4})\s*(\d{2}\.\d{2}\.\d{4})",
    r"[\s\S]*?Punjab:\s*(\d+)\s*Cs\s*(\d+)\s*Cs",
    r"[\s\S]*?Sindh:\s*(\d+)\s*Cs\s*(\d+)\s*Cs",
    r"[\s\S]*?KP:\s*(\d+)\s*Cs\s*(\d+)\s*Cs",
    r"[\s\S]*?Balochistan:\s*(\d+)\s*Cs\s*(\d+)\s*Cs",
);

/// Compiled patterns for one station.
#[derive(Debug)]
struct StationPatterns {
    name: String,
    metrics: Vec<(String, Regex)>,
}

/// Service that turns report text into [`ExtractionRecord`]s.
#[derive(Debug)]
pub struct FieldExtractor {
    catalogue: StationCatalogue,
    stations: Vec<StationPatterns>,
    date: Regex,
    rim_inflows: Regex,
    rim_outflows: Regex,
    releases: Regex,
}

impl FieldExtractor {
    /// Compile the patterns for `catalogue`.
    pub fn new(catalogue: StationCatalogue) -> Result<Self> {
        let stations = catalogue
            .stations()
            .iter()
            .map(|spec| {
                let metrics = spec
                    .metrics
                    .iter()
                    .map(|metric| Ok((metric.clone(), metric_pattern(metric)?)))
                    .collect::<Result<Vec<_>>>()?;
                Ok(StationPatterns {
                    name: spec.name.clone(),
                    metrics,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            catalogue,
            stations,
            date: Regex::new(DATE_PATTERN)?,
            rim_inflows: Regex::new(RIM_INFLOWS_PATTERN)?,
            rim_outflows: Regex::new(RIM_OUTFLOWS_PATTERN)?,
            releases: Regex::new(RELEASES_PATTERN)?,
        })
    }

    pub fn catalogue(&self) -> &StationCatalogue {
        &self.catalogue
    }

    /// Read a document's first page and extract its fields.
    ///
    /// Read failures are logged and produce [`ExtractionOutcome::Failed`]
    /// carrying the default record.
    pub fn extract_document(&self, reader: &dyn PageReader, path: &Path) -> ExtractionOutcome {
        let file = base_name(path);
        log::info!("Processing: {file}");

        match reader.first_page_text(path) {
            Ok(text) => {
                let record = self.extract_text(&file, &text);
                log::info!(
                    "  Extracted data for {} stations",
                    record.populated_station_count()
                );
                ExtractionOutcome::Extracted(record)
            }
            Err(e) => {
                log::error!("  Error reading {file}: {e}");
                ExtractionOutcome::Failed {
                    record: ExtractionRecord::empty(file, &self.catalogue),
                    error: e.to_string(),
                }
            }
        }
    }

    /// Extract every field from first-page text.
    pub fn extract_text(&self, file: &str, text: &str) -> ExtractionRecord {
        let mut record = ExtractionRecord::empty(file, &self.catalogue);

        if text.trim().is_empty() {
            log::warn!("  No text extracted from {file}");
            return record;
        }

        record.date = self.date.captures(text).map(|c| c[1].to_string());

        for station in &self.stations {
            let metrics = record.stations.entry(station.name.clone()).or_default();
            for (metric, pattern) in &station.metrics {
                if let Some(value) = last_number(pattern, text) {
                    metrics.insert(metric.clone(), value);
                }
            }
        }

        self.apply_tables(&mut record, text);

        record.rim_inflows = first_integer(&self.rim_inflows, text);
        record.rim_outflows = first_integer(&self.rim_outflows, text);
        record.irsa_releases = self.releases.captures(text).and_then(|c| releases(&c));

        record
    }

    /// Merge labelled table values into the table-target station.
    ///
    /// Table values overwrite pattern values with the same key.
    fn apply_tables(&self, record: &mut ExtractionRecord, text: &str) {
        let keywords = self.catalogue.table_keywords();
        for table in find_tables(text) {
            for (label, value) in labelled_values(&table, keywords) {
                record
                    .stations
                    .entry(self.catalogue.table_station().to_string())
                    .or_default()
                    .insert(label, value);
            }
        }
    }
}

fn metric_pattern(metric: &str) -> Result<Regex> {
    Ok(Regex::new(&format!(
        r"(?i){}\s*=\s*(\d+\.?\d*)",
        regex::escape(metric)
    ))?)
}

/// Value of the last match in document order.
fn last_number(pattern: &Regex, text: &str) -> Option<f64> {
    pattern
        .captures_iter(text)
        .filter_map(|c| c[1].parse::<f64>().ok())
        .last()
}

fn first_integer(pattern: &Regex, text: &str) -> Option<u64> {
    pattern.captures(text).and_then(|c| c[1].parse().ok())
}

fn releases(caps: &Captures<'_>) -> Option<IrsaReleases> {
    let n = |i: usize| caps.get(i)?.as_str().parse::<u64>().ok();

    Some(IrsaReleases {
        punjab_today: n(3)?,
        punjab_last_year: n(4)?,
        sindh_today: n(5)?,
        sindh_last_year: n(6)?,
        kp_today: n(7)?,
        kp_last_year: n(8)?,
        balochistan_today: n(9)?,
        balochistan_last_year: n(10)?,
    })
}
