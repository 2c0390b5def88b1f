use time::Date;

use super::{Level, Orientation};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConsumptionRecord {
    pub zone_id: String,
    pub zone_name: String,
    pub level: Level,
    pub orientation: Orientation,
    pub usage_category: String,
    pub date: Date,
    pub consumption_kwh: f64,
}
