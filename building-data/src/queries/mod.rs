//! Pure, read-only queries over a loaded [`Dataset`](crate::Dataset).
//!
//! Every query filters, groups and orders in memory and returns a fresh
//! `Vec`. An empty `Vec` is the normal answer when nothing matches,
//! including unknown level or usage values.

mod consumption_queries;
mod filter_options;
mod reading_queries;

pub use consumption_queries::{
    consumption_by_orientation, consumption_time_series, ConsumptionPoint, OrientationTotal,
};
pub use filter_options::{filter_options, FilterOptions};
pub use reading_queries::{
    co2_by_date, production_by_date, temperature_by_level, Co2Point, ProductionPoint,
    TemperaturePoint,
};

#[cfg(test)]
pub(crate) mod fixtures {
    use time::Date;

    use crate::domain::{
        Co2Record, ConsumptionRecord, Level, Metadata, Orientation, ProductionRecord,
        TemperatureRecord,
    };

    pub fn consumption(
        level: Level,
        usage: &str,
        orientation: Orientation,
        date: Date,
        kwh: f64,
    ) -> ConsumptionRecord {
        ConsumptionRecord {
            zone_id: format!("Z-{}-{}", level.as_str(), orientation.as_str()),
            zone_name: format!("Zone {} {}", level.as_str(), orientation.as_str()),
            level,
            orientation,
            usage_category: usage.to_string(),
            date,
            consumption_kwh: kwh,
        }
    }

    pub fn temperature(level: Level, orientation: Orientation, date: Date, celsius: f64) -> TemperatureRecord {
        TemperatureRecord {
            level,
            orientation,
            date,
            temperature_celsius: celsius,
        }
    }

    pub fn production(date: Date, kwh: f64) -> ProductionRecord {
        ProductionRecord {
            date,
            production_kwh: kwh,
        }
    }

    pub fn co2(date: Date, ppm: f64) -> Co2Record {
        Co2Record { date, co2_ppm: ppm }
    }

    pub fn metadata() -> Metadata {
        Metadata {
            total_surface_area: 2500.0,
            pv_surface_area: 320.0,
            total_consumption: 0.0,
            total_production: 0.0,
            average_temperature: 0.0,
            average_co2: 0.0,
            generation_timestamp: "2024-01-31T00:00:00".to_string(),
        }
    }
}
