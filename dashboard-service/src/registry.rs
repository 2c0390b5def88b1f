//! Named entry points for the presentation layer. Each name maps to a
//! pure function of the dataset and the caller's filter parameters.

use std::collections::BTreeMap;

use building_data::{
    queries::{self, Co2Point, ConsumptionPoint, OrientationTotal, ProductionPoint, TemperaturePoint},
    Dataset, DateRange,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct QueryParams {
    pub level: Option<String>,
    pub usage: Option<String>,
    pub range: DateRange,
}

impl QueryParams {
    pub fn new(range: DateRange) -> Self {
        Self {
            level: None,
            usage: None,
            range,
        }
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    fn level(&self) -> Result<&str, QueryError> {
        self.level.as_deref().ok_or(QueryError::MissingParameter("level"))
    }

    fn usage(&self) -> Result<&str, QueryError> {
        self.usage.as_deref().ok_or(QueryError::MissingParameter("usage"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryOutput {
    OrientationTotals(Vec<OrientationTotal>),
    ConsumptionSeries(Vec<ConsumptionPoint>),
    Production(Vec<ProductionPoint>),
    Temperature(Vec<TemperaturePoint>),
    Co2(Vec<Co2Point>),
}

impl QueryOutput {
    pub fn len(&self) -> usize {
        match self {
            Self::OrientationTotals(rows) => rows.len(),
            Self::ConsumptionSeries(rows) => rows.len(),
            Self::Production(rows) => rows.len(),
            Self::Temperature(rows) => rows.len(),
            Self::Co2(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown query '{0}'")]
    UnknownQuery(String),
    #[error("query requires parameter '{0}'")]
    MissingParameter(&'static str),
}

pub type QueryFn = fn(&Dataset, &QueryParams) -> Result<QueryOutput, QueryError>;

fn consumption_by_orientation(ds: &Dataset, p: &QueryParams) -> Result<QueryOutput, QueryError> {
    let rows = queries::consumption_by_orientation(ds, p.level()?, p.usage()?, p.range);
    Ok(QueryOutput::OrientationTotals(rows))
}

fn consumption_time_series(ds: &Dataset, p: &QueryParams) -> Result<QueryOutput, QueryError> {
    let rows = queries::consumption_time_series(ds, p.level()?, p.usage()?, p.range);
    Ok(QueryOutput::ConsumptionSeries(rows))
}

fn production_by_date(ds: &Dataset, p: &QueryParams) -> Result<QueryOutput, QueryError> {
    Ok(QueryOutput::Production(queries::production_by_date(ds, p.range)))
}

fn temperature_by_level(ds: &Dataset, p: &QueryParams) -> Result<QueryOutput, QueryError> {
    let rows = queries::temperature_by_level(ds, p.level()?, p.range);
    Ok(QueryOutput::Temperature(rows))
}

fn co2_by_date(ds: &Dataset, p: &QueryParams) -> Result<QueryOutput, QueryError> {
    Ok(QueryOutput::Co2(queries::co2_by_date(ds, p.range)))
}

pub fn registry() -> BTreeMap<&'static str, QueryFn> {
    let mut map: BTreeMap<&'static str, QueryFn> = BTreeMap::new();
    map.insert("consumption_by_orientation", consumption_by_orientation);
    map.insert("consumption_time_series", consumption_time_series);
    map.insert("production_by_date", production_by_date);
    map.insert("temperature_by_level", temperature_by_level);
    map.insert("co2_by_date", co2_by_date);
    map
}

/// Which of `level` / `usage` a query reads. Unknown names need neither.
pub fn needs_filters(name: &str) -> (bool, bool) {
    match name {
        "consumption_by_orientation" | "consumption_time_series" => (true, true),
        "temperature_by_level" => (true, false),
        _ => (false, false),
    }
}

pub fn run_query(name: &str, dataset: &Dataset, params: &QueryParams) -> Result<QueryOutput, QueryError> {
    let query = registry()
        .get(name)
        .copied()
        .ok_or_else(|| QueryError::UnknownQuery(name.to_string()))?;

    let output = query(dataset, params)?;
    metrics::counter!("dashboard_queries_total").increment(1);
    tracing::debug!(query = name, rows = output.len(), "query executed");
    Ok(output)
}
