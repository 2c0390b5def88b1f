//! Readers for the files written by the dataset generator.
//!
//! Each reader takes the raw bytes of one file and returns every record or
//! the first failure; nothing is partially returned.

pub mod consumption_csv_file;
pub mod metadata_json_file;
pub mod reading_csv_files;

use std::path::Path;

use csv::StringRecord;
use time::{macros::format_description, Date};

use crate::loader::LoadError;

pub use consumption_csv_file::parse_consumption;
pub use metadata_json_file::parse_metadata;
pub use reading_csv_files::{parse_co2, parse_production, parse_temperature};

/// One CSV record with name-based column access.
pub(crate) struct CsvRow<'a> {
    record: &'a StringRecord,
    headers: &'a StringRecord,
}

impl<'a> CsvRow<'a> {
    pub(crate) fn get(&self, name: &str) -> Result<&'a str, String> {
        self.headers
            .iter()
            .position(|h| h.trim() == name)
            .and_then(|idx| self.record.get(idx))
            .map(str::trim)
            .ok_or_else(|| format!("missing column '{name}'"))
    }

    pub(crate) fn date(&self, name: &str) -> Result<Date, String> {
        let s = self.get(name)?;
        Date::parse(s, format_description!("[year]-[month]-[day]"))
            .map_err(|e| format!("invalid {name} '{s}': {e}"))
    }

    pub(crate) fn f64(&self, name: &str) -> Result<f64, String> {
        let s = self.get(name)?;
        s.parse().map_err(|e| format!("invalid {name} '{s}': {e}"))
    }

    pub(crate) fn parse<T>(&self, name: &str) -> Result<T, String>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        self.get(name)?.parse().map_err(|e: T::Err| e.to_string())
    }
}

/// Parses every record of a CSV file with `convert`. The header row must
/// name every entry of `columns`; an empty file has no header and fails.
/// The first CSV or conversion failure aborts the whole table.
pub(crate) fn read_csv_table<T, F>(
    path: &Path,
    bytes: &[u8],
    columns: &[&str],
    convert: F,
) -> Result<Vec<T>, LoadError>
where
    F: Fn(&CsvRow<'_>) -> Result<T, String>,
{
    let csv_err = |source: csv::Error| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut rdr = csv::Reader::from_reader(bytes);
    let headers = rdr.headers().map_err(csv_err)?.clone();
    if let Some(missing) = columns.iter().find(|c| !headers.iter().any(|h| h.trim() == **c)) {
        return Err(LoadError::Header {
            path: path.to_path_buf(),
            column: missing.to_string(),
        });
    }

    let mut out = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(csv_err)?;
        let row = CsvRow {
            record: &record,
            headers: &headers,
        };
        match convert(&row) {
            Ok(v) => out.push(v),
            Err(reason) => {
                metrics::counter!("dataset_row_rejected_total").increment(1);
                return Err(LoadError::Row {
                    path: path.to_path_buf(),
                    line: record.position().map(|p| p.line()).unwrap_or(0),
                    reason,
                });
            }
        }
    }

    Ok(out)
}
