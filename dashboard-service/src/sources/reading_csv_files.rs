use std::path::Path;

use building_data::domain::{Co2Record, Level, Orientation, ProductionRecord, TemperatureRecord};

use super::read_csv_table;
use crate::{
    loader::LoadError,
    validation::{validate_co2, validate_production, validate_temperature},
};

/// Production table: `date`, `production` (kWh).
pub fn parse_production(path: &Path, bytes: &[u8]) -> Result<Vec<ProductionRecord>, LoadError> {
    read_csv_table(path, bytes, &["date", "production"], |row| {
        let record = ProductionRecord {
            date: row.date("date")?,
            production_kwh: row.f64("production")?,
        };
        validate_production(&record).map_err(|e| e.to_string())?;
        Ok(record)
    })
}

/// Temperature table: `niveau`, `orientation`, `date`, `temperature` (°C).
pub fn parse_temperature(path: &Path, bytes: &[u8]) -> Result<Vec<TemperatureRecord>, LoadError> {
    read_csv_table(path, bytes, &["niveau", "orientation", "date", "temperature"], |row| {
        let record = TemperatureRecord {
            level: row.parse::<Level>("niveau")?,
            orientation: row.parse::<Orientation>("orientation")?,
            date: row.date("date")?,
            temperature_celsius: row.f64("temperature")?,
        };
        validate_temperature(&record).map_err(|e| e.to_string())?;
        Ok(record)
    })
}

/// CO2 table: `date`, `co2` (ppm).
pub fn parse_co2(path: &Path, bytes: &[u8]) -> Result<Vec<Co2Record>, LoadError> {
    read_csv_table(path, bytes, &["date", "co2"], |row| {
        let record = Co2Record {
            date: row.date("date")?,
            co2_ppm: row.f64("co2")?,
        };
        validate_co2(&record).map_err(|e| e.to_string())?;
        Ok(record)
    })
}
