use std::collections::BTreeSet;

use time::Date;

use crate::domain::{Co2Record, ConsumptionRecord, Metadata, ProductionRecord, TemperatureRecord};

/// Inclusive calendar-day range. A range whose start is after its end
/// matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    pub fn single(day: Date) -> Self {
        Self { start: day, end: day }
    }

    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// One generation of the building datasets, loaded once and read-only
/// afterwards. Share it across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Dataset {
    consumption: Vec<ConsumptionRecord>,
    production: Vec<ProductionRecord>,
    temperature: Vec<TemperatureRecord>,
    co2: Vec<Co2Record>,
    metadata: Metadata,
}

impl Dataset {
    pub fn new(
        consumption: Vec<ConsumptionRecord>,
        production: Vec<ProductionRecord>,
        temperature: Vec<TemperatureRecord>,
        co2: Vec<Co2Record>,
        metadata: Metadata,
    ) -> Self {
        Self {
            consumption,
            production,
            temperature,
            co2,
            metadata,
        }
    }

    pub fn consumption(&self) -> &[ConsumptionRecord] {
        &self.consumption
    }

    pub fn production(&self) -> &[ProductionRecord] {
        &self.production
    }

    pub fn temperature(&self) -> &[TemperatureRecord] {
        &self.temperature
    }

    pub fn co2(&self) -> &[Co2Record] {
        &self.co2
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Earliest and latest date across all four tables.
    pub fn date_span(&self) -> Option<DateRange> {
        let dates = self.all_dates();
        let start = dates.iter().min()?;
        let end = dates.iter().max()?;
        Some(DateRange::new(*start, *end))
    }

    /// Distinct dates per table, in the order consumption, production,
    /// temperature, CO2.
    pub fn table_dates(&self) -> [BTreeSet<Date>; 4] {
        [
            self.consumption.iter().map(|r| r.date).collect(),
            self.production.iter().map(|r| r.date).collect(),
            self.temperature.iter().map(|r| r.date).collect(),
            self.co2.iter().map(|r| r.date).collect(),
        ]
    }

    fn all_dates(&self) -> Vec<Date> {
        self.consumption
            .iter()
            .map(|r| r.date)
            .chain(self.production.iter().map(|r| r.date))
            .chain(self.temperature.iter().map(|r| r.date))
            .chain(self.co2.iter().map(|r| r.date))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn metadata() -> Metadata {
        Metadata {
            total_surface_area: 1200.0,
            pv_surface_area: 150.0,
            total_consumption: 0.0,
            total_production: 0.0,
            average_temperature: 0.0,
            average_co2: 0.0,
            generation_timestamp: "2024-01-03 12:00:00".to_string(),
        }
    }

    #[test]
    fn date_range_is_inclusive_on_both_ends() {
        let range = DateRange::new(date!(2024 - 01 - 01), date!(2024 - 01 - 03));
        assert!(range.contains(date!(2024 - 01 - 01)));
        assert!(range.contains(date!(2024 - 01 - 03)));
        assert!(!range.contains(date!(2024 - 01 - 04)));
    }

    #[test]
    fn reversed_range_matches_nothing() {
        let range = DateRange::new(date!(2024 - 01 - 03), date!(2024 - 01 - 01));
        assert!(!range.contains(date!(2024 - 01 - 02)));
    }

    #[test]
    fn date_span_covers_every_table() {
        let ds = Dataset::new(
            vec![],
            vec![ProductionRecord {
                date: date!(2024 - 01 - 02),
                production_kwh: 3.0,
            }],
            vec![],
            vec![Co2Record {
                date: date!(2024 - 01 - 05),
                co2_ppm: 410.0,
            }],
            metadata(),
        );
        assert_eq!(
            ds.date_span(),
            Some(DateRange::new(date!(2024 - 01 - 02), date!(2024 - 01 - 05)))
        );
    }

    #[test]
    fn empty_dataset_has_no_span() {
        let ds = Dataset::new(vec![], vec![], vec![], vec![], metadata());
        assert_eq!(ds.date_span(), None);
    }
}
