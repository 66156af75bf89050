//! Extraction record data structures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::StationCatalogue;

/// Metric name to value for one station.
pub type StationMetrics = BTreeMap<String, f64>;

/// Fields extracted from one IRSA report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    /// Base filename of the source document
    pub file: String,

    /// Report date in `DD.MM.YYYY` form
    pub date: Option<String>,

    /// Station name to metric mapping
    pub stations: BTreeMap<String, StationMetrics>,

    /// RIM station inflows total (Cs)
    pub rim_inflows: Option<u64>,

    /// RIM station outflows total (Cs)
    pub rim_outflows: Option<u64>,

    /// Provincial releases, serialized as `{}` when absent
    #[serde(default, with = "releases_or_empty")]
    pub irsa_releases: Option<IrsaReleases>,
}

impl ExtractionRecord {
    /// Create an empty record with every catalogue station present.
    pub fn empty(file: impl Into<String>, catalogue: &StationCatalogue) -> Self {
        let stations = catalogue
            .stations()
            .iter()
            .map(|s| (s.name.clone(), StationMetrics::new()))
            .collect();

        Self {
            file: file.into(),
            date: None,
            stations,
            rim_inflows: None,
            rim_outflows: None,
            irsa_releases: None,
        }
    }

    /// Number of stations with at least one metric.
    pub fn populated_station_count(&self) -> usize {
        self.stations.values().filter(|m| !m.is_empty()).count()
    }
}

/// Today and last-year releases for the four provinces, in Cs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IrsaReleases {
    pub punjab_today: u64,
    pub punjab_last_year: u64,
    pub sindh_today: u64,
    pub sindh_last_year: u64,
    pub kp_today: u64,
    pub kp_last_year: u64,
    pub balochistan_today: u64,
    pub balochistan_last_year: u64,
}

/// A province as listed in the releases block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Province {
    Punjab,
    Sindh,
    Kp,
    Balochistan,
}

impl Province {
    pub const ALL: [Province; 4] = [
        Province::Punjab,
        Province::Sindh,
        Province::Kp,
        Province::Balochistan,
    ];

    /// Display name ("Punjab", "Kp", ...).
    pub fn title(&self) -> &'static str {
        match self {
            Province::Punjab => "Punjab",
            Province::Sindh => "Sindh",
            Province::Kp => "Kp",
            Province::Balochistan => "Balochistan",
        }
    }
}

impl IrsaReleases {
    /// `(today, last_year)` for a province.
    pub fn pair(&self, province: Province) -> (u64, u64) {
        match province {
            Province::Punjab => (self.punjab_today, self.punjab_last_year),
            Province::Sindh => (self.sindh_today, self.sindh_last_year),
            Province::Kp => (self.kp_today, self.kp_last_year),
            Province::Balochistan => (self.balochistan_today, self.balochistan_last_year),
        }
    }
}

/// Serde adapter mapping `None` to `{}` and back.
mod releases_or_empty {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeMap};

    use super::IrsaReleases;

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Empty {}

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Full(IrsaReleases),
        Empty(Empty),
    }

    pub fn serialize<S: Serializer>(
        value: &Option<IrsaReleases>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(releases) => releases.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<IrsaReleases>, D::Error> {
        Ok(match Option::<Repr>::deserialize(deserializer)? {
            Some(Repr::Full(releases)) => Some(releases),
            Some(Repr::Empty(_)) | None => None,
        })
    }
}
