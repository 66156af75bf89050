//! Local filesystem storage implementation.
//!
//! Writes the batch as pretty-printed UTF-8 JSON. Non-ASCII text is kept
//! as-is. Writes go to a temporary sibling file which is then renamed over
//! the target.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::models::ExtractionRecord;
use crate::storage::RecordStorage;
use crate::utils::fs::ensure_parent;

/// JSON file storage backend.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage writing to the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write bytes atomically (write to temp, then rename).
    fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        ensure_parent(&self.path)?;

        let tmp = self.path.with_extension("tmp");
        let mut file = fs::File::create(&tmp)?;
        file.write_all(bytes)?;
        file.flush()?;
        drop(file);

        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl RecordStorage for JsonFileStorage {
    fn write_records(&self, records: &[ExtractionRecord]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(records)?;
        self.write_bytes(&bytes)?;
        log::info!("Data saved to {}", self.path.display());
        Ok(())
    }

    fn load_records(&self) -> Result<Vec<ExtractionRecord>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("No output found at {}", self.path.display());
                Ok(Vec::new())
            }
            Err(e) => Err(AppError::Io(e)),
        }
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IrsaReleases, StationCatalogue};
    use tempfile::TempDir;

    fn sample_records() -> Vec<ExtractionRecord> {
        let catalogue = StationCatalogue::default();

        let mut latest = ExtractionRecord::empty("Report 05.11.2025.pdf", &catalogue);
        latest.date = Some("05.11.2025".into());
        latest.rim_inflows = Some(57300);
        latest.rim_outflows = Some(0);
        latest
            .stations
            .get_mut("INDUS @ TARBELA")
            .unwrap()
            .insert("LEVEL".into(), 1538.2);
        latest
            .stations
            .get_mut("KABUL @ NOWSHERA")
            .unwrap()
            .insert("MEAN DISCHARGE".into(), 9800.0);
        latest.irsa_releases = Some(IrsaReleases {
            punjab_today: 61000,
            punjab_last_year: 58000,
            sindh_today: 41000,
            sindh_last_year: 39500,
            kp_today: 3100,
            kp_last_year: 2900,
            balochistan_today: 5200,
            balochistan_last_year: 4800,
        });

        let older = ExtractionRecord::empty("تقرير.pdf", &catalogue);

        vec![latest, older]
    }

    #[test]
    fn test_write_and_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(tmp.path().join("public/data/out.json"));
        let records = sample_records();

        storage.write_records(&records).unwrap();
        let loaded = storage.load_records().unwrap();

        assert_eq!(loaded, records);
        assert!(!tmp.path().join("public/data/out.tmp").exists());
    }

    #[test]
    fn test_output_is_indented_and_unescaped() {
        let tmp = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(tmp.path().join("out.json"));

        storage.write_records(&sample_records()).unwrap();
        let text = fs::read_to_string(storage.path()).unwrap();

        assert!(text.starts_with("[\n  {"));
        assert!(text.contains("تقرير.pdf"));
        assert!(text.contains("\"irsa_releases\": {}"));
        assert!(text.contains("\"date\": null"));
    }

    #[test]
    fn test_write_overwrites_previous_batch() {
        let tmp = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(tmp.path().join("out.json"));

        storage.write_records(&sample_records()).unwrap();
        storage.write_records(&sample_records()[1..]).unwrap();

        let loaded = storage.load_records().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].file, "تقرير.pdf");
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(tmp.path().join("nope.json"));
        assert!(storage.load_records().unwrap().is_empty());
    }

    #[test]
    fn test_integer_fields_stay_integers() {
        let tmp = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(tmp.path().join("out.json"));
        storage.write_records(&sample_records()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(storage.path()).unwrap()).unwrap();
        assert!(value[0]["rim_inflows"].is_u64());
        assert!(value[0]["stations"]["INDUS @ TARBELA"]["LEVEL"].is_f64());
        assert!(value[1]["rim_inflows"].is_null());
    }
}
