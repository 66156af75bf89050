// src/pipeline/run.rs

//! Full scrape pipeline: discover → fetch → extract → persist.

use std::path::PathBuf;

use chrono::Utc;

use crate::error::Result;
use crate::models::{Config, ExtractionRecord, RunOutcome, RunReport, RunStats};
use crate::pipeline::scratch::ScratchDir;
use crate::services::{DocumentFetcher, FieldExtractor, LinkDiscovery, PageReader};
use crate::storage::RecordStorage;
use crate::utils::http::Transport;

/// Records extracted from a set of documents.
#[derive(Debug, Default)]
pub struct ExtractedBatch {
    /// One record per document, in input order
    pub records: Vec<ExtractionRecord>,
    /// Documents that could not be read
    pub failures: usize,
}

/// Extract every document in order; unreadable documents keep their slot.
pub fn extract_all(
    extractor: &FieldExtractor,
    reader: &dyn PageReader,
    documents: &[PathBuf],
) -> ExtractedBatch {
    let mut batch = ExtractedBatch::default();

    for path in documents {
        let outcome = extractor.extract_document(reader, path);
        if outcome.is_failed() {
            batch.failures += 1;
        }
        batch.records.push(outcome.into_record());
    }

    batch
}

/// Run the scrape pipeline.
///
/// Transport and document failures are absorbed; `Err` is returned only
/// for configuration, scratch directory and output write failures.
pub fn run_pipeline(
    config: &Config,
    transport: &dyn Transport,
    reader: &dyn PageReader,
    storage: &dyn RecordStorage,
) -> Result<RunOutcome> {
    let start_time = Utc::now();
    let extractor = FieldExtractor::new(config.catalogue()?)?;

    // Step 1: discover document links
    log::info!("Step 1/4: Discovering report links...");
    let links = LinkDiscovery::new(transport, &config.source).discover();
    if links.is_empty() {
        log::warn!("No PDFs found");
        return Ok(RunOutcome::NoLinks);
    }

    // Steps 2-3 share the scratch directory, removed when `scratch` drops
    let (extracted, downloads_failed) = {
        let scratch = ScratchDir::create(&config.paths.scratch_dir)?;

        log::info!("Step 2/4: Downloading {} report(s)...", links.len());
        let retrieved = DocumentFetcher::new(transport).retrieve(&links, scratch.path());
        if retrieved.documents.is_empty() {
            log::warn!("No PDFs downloaded");
            return Ok(RunOutcome::NoDocuments {
                attempted: links.len(),
            });
        }

        log::info!("Step 3/4: Extracting river features...");
        let extracted = extract_all(&extractor, reader, &retrieved.documents);
        (extracted, retrieved.failures)
    };

    // Step 4: persist
    log::info!("Step 4/4: Saving results...");
    storage.write_records(&extracted.records)?;

    let stats = RunStats {
        start_time,
        end_time: Utc::now(),
        links_found: links.len(),
        downloads_failed,
        documents_extracted: extracted.records.len(),
        extraction_failures: extracted.failures,
    };

    log::info!(
        "Processed {} document(s) in {} ms ({} download failures, {} unreadable)",
        stats.documents_extracted,
        stats.elapsed_ms(),
        stats.downloads_failed,
        stats.extraction_failures
    );

    Ok(RunOutcome::Completed(RunReport {
        records: extracted.records,
        location: storage.location(),
        stats,
    }))
}

/// Extract local documents and persist them, without network or scratch
/// directory.
pub fn run_extract(
    config: &Config,
    reader: &dyn PageReader,
    storage: &dyn RecordStorage,
    documents: &[PathBuf],
) -> Result<ExtractedBatch> {
    let extractor = FieldExtractor::new(config.catalogue()?)?;

    log::info!("Extracting {} local document(s)...", documents.len());
    let batch = extract_all(&extractor, reader, documents);
    storage.write_records(&batch.records)?;

    Ok(batch)
}
