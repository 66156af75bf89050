// src/pipeline/summary.rs

//! Human-readable summary of the latest report.

use std::fmt::Write as _;

use crate::models::{ExtractionRecord, Province, StationCatalogue};

/// Render the summary of the first (latest) record, or `None` for an empty
/// batch.
///
/// Stations with no metrics are skipped; known stations are listed in
/// catalogue order, any others after them.
pub fn render_summary(records: &[ExtractionRecord], catalogue: &StationCatalogue) -> Option<String> {
    let latest = records.first()?;
    let border = "=".repeat(60);
    let mut out = String::new();

    let date = latest.date.as_deref().unwrap_or("None");
    let _ = writeln!(out, "{border}");
    let _ = writeln!(out, "LATEST REPORT - Date: {date}");
    let _ = writeln!(out, "{border}");

    let _ = writeln!(out, "\nKEY RIVER STATIONS:");
    let mut stations: Vec<_> = latest.stations.iter().filter(|(_, m)| !m.is_empty()).collect();
    stations.sort_by_key(|(name, _)| catalogue.position(name).unwrap_or(usize::MAX));
    for (station, metrics) in stations {
        let _ = writeln!(out, "\n  {station}:");
        for (metric, value) in metrics {
            let _ = writeln!(out, "    - {metric}: {value}");
        }
    }

    if let Some(inflows) = latest.rim_inflows.filter(|v| *v != 0) {
        let _ = writeln!(out, "\nRIM STATION INFLOWS: {inflows} Cs");
    }
    if let Some(outflows) = latest.rim_outflows.filter(|v| *v != 0) {
        let _ = writeln!(out, "RIM STATION OUTFLOWS: {outflows} Cs");
    }

    if let Some(releases) = &latest.irsa_releases {
        let _ = writeln!(out, "\nIRSA RELEASES (Today vs Last Year):");
        for province in Province::ALL {
            let (today, last_year) = releases.pair(province);
            let _ = writeln!(
                out,
                "  - {}: {today} Cs (was {last_year} Cs)",
                province.title()
            );
        }
    }

    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IrsaReleases;

    fn latest() -> ExtractionRecord {
        let mut record = ExtractionRecord::empty("r.pdf", &StationCatalogue::default());
        record.date = Some("05.11.2025".into());
        record
            .stations
            .get_mut("PANJNAD")
            .unwrap()
            .insert("U/S DISCHARGE".into(), 12000.0);
        record
            .stations
            .get_mut("INDUS @ TARBELA")
            .unwrap()
            .insert("MEAN INFLOW".into(), 24100.5);
        record.rim_inflows = Some(57300);
        record.rim_outflows = Some(0);
        record
    }

    #[test]
    fn test_empty_batch_has_no_summary() {
        assert!(render_summary(&[], &StationCatalogue::default()).is_none());
    }

    #[test]
    fn test_summary_layout() {
        let older = ExtractionRecord::empty("old.pdf", &StationCatalogue::default());
        let summary = render_summary(&[latest(), older], &StationCatalogue::default()).unwrap();

        assert!(summary.contains("LATEST REPORT - Date: 05.11.2025"));
        assert!(summary.contains("    - MEAN INFLOW: 24100.5"));
        assert!(summary.contains("RIM STATION INFLOWS: 57300 Cs"));
        assert!(!summary.contains("RIM STATION OUTFLOWS"));
        assert!(!summary.contains("IRSA RELEASES"));
        assert!(!summary.contains("KOIRI"));

        let tarbela = summary.find("INDUS @ TARBELA").unwrap();
        let panjnad = summary.find("PANJNAD").unwrap();
        assert!(tarbela < panjnad);
    }

    #[test]
    fn test_summary_releases() {
        let mut record = latest();
        record.irsa_releases = Some(IrsaReleases {
            punjab_today: 61000,
            punjab_last_year: 58000,
            sindh_today: 41000,
            sindh_last_year: 39500,
            kp_today: 3100,
            kp_last_year: 2900,
            balochistan_today: 5200,
            balochistan_last_year: 4800,
        });

        let summary = render_summary(&[record], &StationCatalogue::default()).unwrap();
        assert!(summary.contains("IRSA RELEASES (Today vs Last Year):"));
        assert!(summary.contains("  - Kp: 3100 Cs (was 2900 Cs)"));
        assert!(summary.contains("  - Balochistan: 5200 Cs (was 4800 Cs)"));
    }

    #[test]
    fn test_missing_date_prints_none() {
        let record = ExtractionRecord::empty("r.pdf", &StationCatalogue::default());
        let summary = render_summary(&[record], &StationCatalogue::default()).unwrap();
        assert!(summary.contains("Date: None"));
    }
}
