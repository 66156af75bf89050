// src/services/pdf.rs

//! First-page text reading for report PDFs.

use std::fs;
use std::panic;
use std::path::Path;

use crate::error::{AppError, Result};
use crate::utils::fs::base_name;

/// Reads the text layer of a document's first page.
pub trait PageReader {
    fn first_page_text(&self, path: &Path) -> Result<String>;
}

/// [`PageReader`] backed by `pdf-extract`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfPageReader;

impl PageReader for PdfPageReader {
    fn first_page_text(&self, path: &Path) -> Result<String> {
        let context = base_name(path);
        let bytes = fs::read(path)?;

        // pdf-extract panics on some malformed documents
        let pages = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(&bytes))
            .map_err(|_| AppError::pdf(&context, "PDF parser panicked"))?
            .map_err(|e| AppError::pdf(&context, format!("failed to extract text: {e}")))?;

        let text = pages
            .into_iter()
            .next()
            .ok_or_else(|| AppError::pdf(&context, "document has no pages"))?;

        log::debug!("Extracted {} characters from first page of {context}", text.len());
        Ok(text)
    }
}
