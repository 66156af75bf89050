// src/services/documents.rs

//! Document retrieval service.
//!
//! Downloads each discovered report into the scratch directory under a
//! sanitized filename.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::error::Result;
use crate::models::LinkReference;
use crate::utils::http::Transport;

/// Documents persisted by one retrieval pass.
#[derive(Debug, Default)]
pub struct RetrievedBatch {
    /// Saved paths, in link order
    pub documents: Vec<PathBuf>,
    /// Links that could not be fetched or written
    pub failures: usize,
}

/// Service for downloading report documents.
pub struct DocumentFetcher<'a> {
    transport: &'a dyn Transport,
}

impl<'a> DocumentFetcher<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Download every link into `dir`.
    ///
    /// Each link is attempted independently; failures are logged and
    /// skipped without a placeholder.
    pub fn retrieve(&self, links: &[LinkReference], dir: &Path) -> RetrievedBatch {
        let mut batch = RetrievedBatch::default();
        let total = links.len();

        for (i, link) in links.iter().enumerate() {
            log::info!("[{}/{}] Downloading: {}", i + 1, total, link.name);

            match self.fetch_one(link, dir) {
                Ok(path) => {
                    log::debug!("Saved {}", path.display());
                    batch.documents.push(path);
                }
                Err(e) => {
                    batch.failures += 1;
                    log::warn!("Failed to download {} ({}): {}", link.name, link.url, e);
                }
            }
        }

        batch
    }

    fn fetch_one(&self, link: &LinkReference, dir: &Path) -> Result<PathBuf> {
        let bytes = self.transport.get_bytes(&link.url)?;
        let path = dir.join(sanitize_filename(&link.name));
        fs::write(&path, bytes)?;
        Ok(path)
    }
}

/// Make a display name safe to use as a filename.
///
/// Characters other than word characters, `-`, `.` and space become `_`,
/// and `.pdf` is appended unless already present.
pub fn sanitize_filename(name: &str) -> String {
    static UNSAFE: OnceLock<Regex> = OnceLock::new();
    let unsafe_chars =
        UNSAFE.get_or_init(|| Regex::new(r"[^\w\-. ]").expect("static pattern is valid"));

    let mut safe = unsafe_chars.replace_all(name, "_").into_owned();
    if !safe.to_lowercase().ends_with(".pdf") {
        safe.push_str(".pdf");
    }
    safe
}
