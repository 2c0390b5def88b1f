use std::{
    fs,
    path::{Path, PathBuf},
};

use building_data::Dataset;

use crate::{config::DataConfig, sources};

/// Any failure while reading the dataset. Fatal at startup: no query may
/// run against a partially loaded dataset.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{} has no '{column}' column", .path.display())]
    Header { path: PathBuf, column: String },
    #[error("malformed CSV in {}: {source}", .path.display())]
    Csv { path: PathBuf, source: csv::Error },
    #[error("invalid row in {} at line {line}: {reason}", .path.display())]
    Row {
        path: PathBuf,
        line: u64,
        reason: String,
    },
    #[error("malformed metadata in {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        source: serde_json::Error,
    },
}

fn read_bytes(path: &Path, hasher: &mut blake3::Hasher) -> Result<Vec<u8>, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    hasher.update(&(bytes.len() as u64).to_le_bytes());
    hasher.update(&bytes);
    Ok(bytes)
}

/// Reads the four tables and the metadata record. All-or-nothing: the
/// first failing file aborts the load.
pub fn load(cfg: &DataConfig) -> Result<Dataset, LoadError> {
    let mut hasher = blake3::Hasher::new();

    let path = cfg.path_of(&cfg.consumption_file);
    let consumption = sources::parse_consumption(&path, &read_bytes(&path, &mut hasher)?)?;

    let path = cfg.path_of(&cfg.production_file);
    let production = sources::parse_production(&path, &read_bytes(&path, &mut hasher)?)?;

    let path = cfg.path_of(&cfg.temperature_file);
    let temperature = sources::parse_temperature(&path, &read_bytes(&path, &mut hasher)?)?;

    let path = cfg.path_of(&cfg.co2_file);
    let co2 = sources::parse_co2(&path, &read_bytes(&path, &mut hasher)?)?;

    let path = cfg.path_of(&cfg.metadata_file);
    let metadata = sources::parse_metadata(&path, &read_bytes(&path, &mut hasher)?)?;

    let dataset = Dataset::new(consumption, production, temperature, co2, metadata);
    check_shared_dates(&dataset);

    tracing::info!(
        dir = %cfg.dir.display(),
        fingerprint = %hasher.finalize().to_hex(),
        consumption_rows = dataset.consumption().len(),
        production_rows = dataset.production().len(),
        temperature_rows = dataset.temperature().len(),
        co2_rows = dataset.co2().len(),
        "dataset loaded"
    );

    Ok(dataset)
}

/// Logs a warning when the tables disagree on which days they cover.
/// Returns whether they agree.
fn check_shared_dates(dataset: &Dataset) -> bool {
    let [consumption, production, temperature, co2] = dataset.table_dates();
    let mut shared = true;
    for (table, dates) in [("production", &production), ("temperature", &temperature), ("co2", &co2)] {
        if *dates != consumption {
            shared = false;
            tracing::warn!(
                table,
                table_days = dates.len(),
                consumption_days = consumption.len(),
                "table dates differ from consumption dates"
            );
        }
    }
    shared
}

#[cfg(test)]
mod tests {
    use super::*;
    use building_data::domain::{Co2Record, Metadata, ProductionRecord};
    use time::macros::date;

    fn metadata() -> Metadata {
        Metadata {
            total_surface_area: 1.0,
            pv_surface_area: 1.0,
            total_consumption: 0.0,
            total_production: 0.0,
            average_temperature: 0.0,
            average_co2: 0.0,
            generation_timestamp: String::new(),
        }
    }

    #[test]
    fn empty_tables_share_dates() {
        let ds = Dataset::new(vec![], vec![], vec![], vec![], metadata());
        assert!(check_shared_dates(&ds));
    }

    #[test]
    fn mismatched_dates_are_detected() {
        let ds = Dataset::new(
            vec![],
            vec![ProductionRecord {
                date: date!(2024 - 01 - 01),
                production_kwh: 1.0,
            }],
            vec![],
            vec![Co2Record {
                date: date!(2024 - 01 - 01),
                co2_ppm: 400.0,
            }],
            metadata(),
        );
        assert!(!check_shared_dates(&ds));
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let cfg = DataConfig::with_dir("/nonexistent/building-dataset");
        let err = load(&cfg).unwrap_err();
        match err {
            LoadError::Io { path, .. } => assert!(path.ends_with("consommation.csv")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
