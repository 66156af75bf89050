//! File system utilities.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Ensure a directory exists.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// Ensure the parent directory of a file exists.
pub fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

/// Base filename of a path, or the whole path when it has none.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_parent_creates_nested_dirs() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("public/data/out.json");
        ensure_parent(&file).unwrap();
        assert!(tmp.path().join("public/data").is_dir());
    }

    #[test]
    fn test_ensure_parent_bare_filename() {
        assert!(ensure_parent(Path::new("out.json")).is_ok());
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name(Path::new("temp_pdfs/Daily Report.pdf")), "Daily Report.pdf");
    }
}
