// src/pipeline/scratch.rs

//! Scratch directory for downloaded documents.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::utils::fs::ensure_dir;

/// Directory that lives for the retrieval and extraction steps.
///
/// Created on [`ScratchDir::create`], removed with its contents on drop.
#[derive(Debug)]
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    /// Create the directory if absent.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        ensure_dir(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if !self.path.exists() {
            return;
        }
        match fs::remove_dir_all(&self.path) {
            Ok(()) => log::info!("Cleaned up temporary files"),
            Err(e) => log::warn!(
                "Failed to remove scratch directory {}: {}",
                self.path.display(),
                e
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_removed_on_drop() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("temp_pdfs");

        {
            let scratch = ScratchDir::create(&dir).unwrap();
            fs::write(scratch.path().join("a.pdf"), b"x").unwrap();
            assert!(dir.is_dir());
        }

        assert!(!dir.exists());
    }

    #[test]
    fn test_reuses_existing_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("temp_pdfs");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("stale.pdf"), b"x").unwrap();

        let scratch = ScratchDir::create(&dir).unwrap();
        assert!(scratch.path().join("stale.pdf").exists());
        drop(scratch);
        assert!(!dir.exists());
    }

    #[test]
    fn test_removed_when_caller_errors() {
        fn failing_step(dir: &Path) -> Result<()> {
            let _scratch = ScratchDir::create(dir)?;
            Err(crate::error::AppError::validation("boom"))
        }

        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("temp_pdfs");
        assert!(failing_step(&dir).is_err());
        assert!(!dir.exists());
    }
}
