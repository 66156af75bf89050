//! Station and metric catalogue.
//!
//! The catalogue lists every gauge station reported in the daily IRSA
//! sheet together with the metric names expected next to it. Every station
//! in the catalogue appears in each extracted record, even when none of its
//! metrics were found.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// A station and the metric names expected for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationSpec {
    /// Station name as it appears in the output (e.g., "INDUS @ TARBELA")
    pub name: String,

    /// Metric names searched as `<metric> = <number>`
    pub metrics: Vec<String>,
}

impl StationSpec {
    pub fn new(name: &str, metrics: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            metrics: metrics.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// Immutable station table passed into the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationCatalogue {
    stations: Vec<StationSpec>,
    table_station: String,
    table_keywords: Vec<String>,
}

impl StationCatalogue {
    /// Station that receives labelled values from the table scan.
    pub const TABLE_STATION: &'static str = "INDUS @ TARBELA";

    /// Build a catalogue from station specs, keeping their order.
    ///
    /// The table scan targets [`Self::TABLE_STATION`] and matches labels
    /// containing `TARBELA` or `INDUS`.
    pub fn new(stations: Vec<StationSpec>) -> Result<Self> {
        Self::with_table_target(
            stations,
            Self::TABLE_STATION,
            &["TARBELA".to_string(), "INDUS".to_string()],
        )
    }

    /// Build a catalogue with a custom table-scan target.
    pub fn with_table_target(
        stations: Vec<StationSpec>,
        table_station: &str,
        table_keywords: &[String],
    ) -> Result<Self> {
        if stations.is_empty() {
            return Err(AppError::validation("station catalogue is empty"));
        }
        for station in &stations {
            if station.name.trim().is_empty() {
                return Err(AppError::validation("station with empty name"));
            }
            if station.metrics.is_empty() {
                return Err(AppError::validation(format!(
                    "station '{}' has no metrics",
                    station.name
                )));
            }
        }
        if !stations.iter().any(|s| s.name == table_station) {
            return Err(AppError::validation(format!(
                "table station '{table_station}' is not in the catalogue"
            )));
        }

        Ok(Self {
            stations,
            table_station: table_station.to_string(),
            table_keywords: table_keywords.iter().map(|k| k.to_uppercase()).collect(),
        })
    }

    pub fn stations(&self) -> &[StationSpec] {
        &self.stations
    }

    pub fn table_station(&self) -> &str {
        &self.table_station
    }

    pub fn table_keywords(&self) -> &[String] {
        &self.table_keywords
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Position of a station in the catalogue, used for display ordering.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.stations.iter().position(|s| s.name == name)
    }
}

impl Default for StationCatalogue {
    fn default() -> Self {
        Self {
            stations: default_stations(),
            table_station: Self::TABLE_STATION.to_string(),
            table_keywords: vec!["TARBELA".to_string(), "INDUS".to_string()],
        }
    }
}

/// The eleven stations of the daily IRSA river sheet.
pub fn default_stations() -> Vec<StationSpec> {
    const RESERVOIR: &[&str] = &["LEVEL", "DEAD LEVEL", "MEAN INFLOW", "MEAN OUTFLOW"];
    const BARRAGE: &[&str] = &["U/S DISCHARGE", "D/S DISCHARGE"];

    vec![
        StationSpec::new("INDUS @ TARBELA", RESERVOIR),
        StationSpec::new("KALABAGH", BARRAGE),
        StationSpec::new("TAUNSA", &["U/S DISCHARGE", "D/S DISCHARGE", "T-P Link"]),
        StationSpec::new("SUKKUR", BARRAGE),
        StationSpec::new("JHELUM @ MANGLA", RESERVOIR),
        StationSpec::new("KABUL @ NOWSHERA", &["MEAN DISCHARGE"]),
        StationSpec::new("CHASMA", RESERVOIR),
        StationSpec::new("GUDDU", BARRAGE),
        StationSpec::new("KOIRI", BARRAGE),
        StationSpec::new(
            "CHENAB @ MARALA",
            &["MEAN U/S DISCHARGE", "MEAN D/S DISCHARGE"],
        ),
        StationSpec::new("PANJNAD", BARRAGE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalogue_has_eleven_stations() {
        let catalogue = StationCatalogue::default();
        assert_eq!(catalogue.len(), 11);
        assert_eq!(catalogue.position("INDUS @ TARBELA"), Some(0));
        assert_eq!(catalogue.position("PANJNAD"), Some(10));
        assert_eq!(catalogue.table_station(), "INDUS @ TARBELA");
    }

    #[test]
    fn test_default_matches_new() {
        let built = StationCatalogue::new(default_stations()).unwrap();
        assert_eq!(built, StationCatalogue::default());
    }

    #[test]
    fn test_rejects_station_without_metrics() {
        let stations = vec![
            StationSpec::new("INDUS @ TARBELA", &["LEVEL"]),
            StationSpec::new("GUDDU", &[]),
        ];
        assert!(StationCatalogue::new(stations).is_err());
    }

    #[test]
    fn test_rejects_missing_table_station() {
        let stations = vec![StationSpec::new("GUDDU", &["U/S DISCHARGE"])];
        assert!(StationCatalogue::new(stations).is_err());
    }

    #[test]
    fn test_custom_table_target() {
        let stations = vec![StationSpec::new("GUDDU", &["U/S DISCHARGE"])];
        let catalogue =
            StationCatalogue::with_table_target(stations, "GUDDU", &["guddu".to_string()])
                .unwrap();
        assert_eq!(catalogue.table_keywords(), &["GUDDU".to_string()]);
    }
}
