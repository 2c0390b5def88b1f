use time::Date;

use super::{Level, Orientation};

/// Photovoltaic production for one day.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProductionRecord {
    pub date: Date,
    pub production_kwh: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TemperatureRecord {
    pub level: Level,
    pub orientation: Orientation,
    pub date: Date,
    pub temperature_celsius: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Co2Record {
    pub date: Date,
    pub co2_ppm: f64,
}
