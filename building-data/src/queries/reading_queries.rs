use std::collections::BTreeMap;

use time::Date;

use crate::{domain::Orientation, Dataset, DateRange};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProductionPoint {
    pub date: Date,
    pub production_kwh: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TemperaturePoint {
    pub date: Date,
    pub orientation: Orientation,
    pub average_celsius: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Co2Point {
    pub date: Date,
    pub co2_ppm: f64,
}

/// Daily production inside `range`, ordered by date. Rows are passed
/// through as stored; the table already holds one row per day.
pub fn production_by_date(dataset: &Dataset, range: DateRange) -> Vec<ProductionPoint> {
    let mut rows: Vec<ProductionPoint> = dataset
        .production()
        .iter()
        .filter(|r| range.contains(r.date))
        .map(|r| ProductionPoint {
            date: r.date,
            production_kwh: r.production_kwh,
        })
        .collect();
    rows.sort_by_key(|r| r.date);
    rows
}

/// Mean temperature per (date, orientation) for one level.
pub fn temperature_by_level(dataset: &Dataset, level: &str, range: DateRange) -> Vec<TemperaturePoint> {
    let mut groups: BTreeMap<(Date, Orientation), (f64, u32)> = BTreeMap::new();
    for r in dataset
        .temperature()
        .iter()
        .filter(|r| r.level.as_str() == level && range.contains(r.date))
    {
        let (sum, count) = groups.entry((r.date, r.orientation)).or_insert((0.0, 0));
        *sum += r.temperature_celsius;
        *count += 1;
    }

    groups
        .into_iter()
        .map(|((date, orientation), (sum, count))| TemperaturePoint {
            date,
            orientation,
            average_celsius: sum / f64::from(count),
        })
        .collect()
}

/// Daily CO2 concentration inside `range`, ordered by date.
pub fn co2_by_date(dataset: &Dataset, range: DateRange) -> Vec<Co2Point> {
    let mut rows: Vec<Co2Point> = dataset
        .co2()
        .iter()
        .filter(|r| range.contains(r.date))
        .map(|r| Co2Point {
            date: r.date,
            co2_ppm: r.co2_ppm,
        })
        .collect();
    rows.sort_by_key(|r| r.date);
    rows
}
