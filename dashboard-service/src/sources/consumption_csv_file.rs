use std::path::Path;

use building_data::domain::{ConsumptionRecord, Level, Orientation};

use super::{read_csv_table, CsvRow};
use crate::{loader::LoadError, validation::validate_consumption};

/// Consumption table reader.
///
/// Expected header columns (by name):
/// - zone_id
/// - zone (display name)
/// - niveau (ground, floor-1, floor-2, floor-3)
/// - orientation (N, S, E, W)
/// - usage
/// - date (YYYY-MM-DD)
/// - consommation (kWh)
const COLUMNS: &[&str] = &["zone_id", "zone", "niveau", "orientation", "usage", "date", "consommation"];

pub fn parse_consumption(path: &Path, bytes: &[u8]) -> Result<Vec<ConsumptionRecord>, LoadError> {
    read_csv_table(path, bytes, COLUMNS, row_to_consumption)
}

fn row_to_consumption(row: &CsvRow<'_>) -> Result<ConsumptionRecord, String> {
    let record = ConsumptionRecord {
        zone_id: row.get("zone_id")?.to_string(),
        zone_name: row.get("zone")?.to_string(),
        level: row.parse::<Level>("niveau")?,
        orientation: row.parse::<Orientation>("orientation")?,
        usage_category: row.get("usage")?.to_string(),
        date: row.date("date")?,
        consumption_kwh: row.f64("consommation")?,
    };
    validate_consumption(&record).map_err(|e| e.to_string())?;
    Ok(record)
}
