use std::collections::BTreeMap;

use time::Date;

use crate::{
    domain::{ConsumptionRecord, Orientation},
    Dataset, DateRange,
};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OrientationTotal {
    pub orientation: Orientation,
    pub total_kwh: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConsumptionPoint {
    pub date: Date,
    pub orientation: Orientation,
    pub total_kwh: f64,
}

fn matching<'a>(
    dataset: &'a Dataset,
    level: &'a str,
    usage: &'a str,
    range: DateRange,
) -> impl Iterator<Item = &'a ConsumptionRecord> + 'a {
    dataset.consumption().iter().filter(move |r| {
        r.level.as_str() == level && r.usage_category == usage && range.contains(r.date)
    })
}

/// Total consumption per orientation for one level and usage category,
/// ordered by orientation name.
pub fn consumption_by_orientation(
    dataset: &Dataset,
    level: &str,
    usage: &str,
    range: DateRange,
) -> Vec<OrientationTotal> {
    let mut totals: BTreeMap<Orientation, f64> = BTreeMap::new();
    for r in matching(dataset, level, usage, range) {
        *totals.entry(r.orientation).or_insert(0.0) += r.consumption_kwh;
    }

    totals
        .into_iter()
        .map(|(orientation, total_kwh)| OrientationTotal {
            orientation,
            total_kwh,
        })
        .collect()
}

/// Daily consumption per orientation, ordered by date then orientation.
pub fn consumption_time_series(
    dataset: &Dataset,
    level: &str,
    usage: &str,
    range: DateRange,
) -> Vec<ConsumptionPoint> {
    let mut totals: BTreeMap<(Date, Orientation), f64> = BTreeMap::new();
    for r in matching(dataset, level, usage, range) {
        *totals.entry((r.date, r.orientation)).or_insert(0.0) += r.consumption_kwh;
    }

    totals
        .into_iter()
        .map(|((date, orientation), total_kwh)| ConsumptionPoint {
            date,
            orientation,
            total_kwh,
        })
        .collect()
}
