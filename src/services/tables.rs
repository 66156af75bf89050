// src/services/tables.rs

//! Layout-based table recovery from page text.
//!
//! The text layer of a PDF has no ruling lines, so tables are recovered
//! from spacing: a line whose fields are separated by tabs or runs of two
//! or more spaces is a table row, and consecutive rows form a table.

use std::sync::OnceLock;

use regex::Regex;

/// A table recovered from page text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTable {
    pub rows: Vec<Vec<String>>,
}

fn cell_separator() -> &'static Regex {
    static SEP: OnceLock<Regex> = OnceLock::new();
    SEP.get_or_init(|| Regex::new(r"[\t ]{2,}|\t").expect("static pattern is valid"))
}

fn number() -> &'static Regex {
    static NUM: OnceLock<Regex> = OnceLock::new();
    NUM.get_or_init(|| Regex::new(r"(\d+\.?\d*)").expect("static pattern is valid"))
}

fn leading_digit() -> &'static Regex {
    static LEAD: OnceLock<Regex> = OnceLock::new();
    LEAD.get_or_init(|| Regex::new(r"^\d").expect("static pattern is valid"))
}

/// Split a line into trimmed cells.
pub fn split_cells(line: &str) -> Vec<String> {
    cell_separator()
        .split(line.trim())
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Recover every table on a page.
///
/// A table is a maximal run of consecutive lines with at least two cells.
pub fn find_tables(text: &str) -> Vec<TextTable> {
    let mut tables = Vec::new();
    let mut current: Vec<Vec<String>> = Vec::new();

    for line in text.lines() {
        let cells = split_cells(line);
        if cells.len() >= 2 {
            current.push(cells);
        } else if !current.is_empty() {
            tables.push(TextTable {
                rows: std::mem::take(&mut current),
            });
        }
    }
    if !current.is_empty() {
        tables.push(TextTable { rows: current });
    }

    tables
}

/// Collect `(LABEL, value)` pairs from a table.
///
/// A cell containing a number takes the preceding cell as its label when
/// that cell is non-empty and does not start with a digit. Only labels
/// containing one of `keywords` (uppercase) are kept, in row order.
pub fn labelled_values(table: &TextTable, keywords: &[String]) -> Vec<(String, f64)> {
    let mut values = Vec::new();

    for row in &table.rows {
        for (i, cell) in row.iter().enumerate().skip(1) {
            if cell.is_empty() {
                continue;
            }
            let Some(m) = number().find(cell) else {
                continue;
            };
            let Ok(value) = m.as_str().parse::<f64>() else {
                continue;
            };

            let prev = &row[i - 1];
            if prev.is_empty() || leading_digit().is_match(prev) {
                continue;
            }

            let label = prev.to_uppercase();
            if keywords.iter().any(|k| label.contains(k.as_str())) {
                values.push((label, value));
            }
        }
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords() -> Vec<String> {
        vec!["TARBELA".to_string(), "INDUS".to_string()]
    }

    #[test]
    fn test_split_cells() {
        assert_eq!(
            split_cells("  Indus at Tarbela   1502.30\t  ft "),
            vec!["Indus at Tarbela", "1502.30", "ft"]
        );
        assert_eq!(split_cells("single words only"), vec!["single words only"]);
    }

    #[test]
    fn test_find_tables_groups_consecutive_rows() {
        let text = "HEADER LINE\n\
                    A   1\n\
                    B   2\n\
                    break here\n\
                    C   3\n";
        let tables = find_tables(text);

        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].rows.len(), 2);
        assert_eq!(tables[1].rows, vec![vec!["C".to_string(), "3".to_string()]]);
    }

    #[test]
    fn test_labelled_values_filters_by_keyword() {
        let table = TextTable {
            rows: vec![
                vec!["Tarbela Level".into(), "1502.30".into()],
                vec!["Mangla Level".into(), "1180".into()],
                vec!["Indus Inflow".into(), "45000 Cs".into(), "Tarbela".into(), "7".into()],
            ],
        };

        let values = labelled_values(&table, &keywords());
        assert_eq!(
            values,
            vec![
                ("TARBELA LEVEL".to_string(), 1502.30),
                ("INDUS INFLOW".to_string(), 45000.0),
                ("TARBELA".to_string(), 7.0),
            ]
        );
    }

    #[test]
    fn test_labelled_values_skips_numeric_labels() {
        let table = TextTable {
            rows: vec![vec!["INDUS".into(), "12".into(), "13".into()]],
        };

        let values = labelled_values(&table, &keywords());
        assert_eq!(values, vec![("INDUS".to_string(), 12.0)]);
    }
}
