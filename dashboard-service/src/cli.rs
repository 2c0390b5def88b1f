//! Argument handling for the `dashboard-service` binary.

use anyhow::{bail, Context, Result};
use building_data::{queries, Dataset, DateRange};
use time::{macros::format_description, Date};

use crate::registry::{needs_filters, QueryParams};

pub const USAGE: &str =
    "usage: dashboard-service [<query> [level=<level>] [usage=<usage>] [start=YYYY-MM-DD] [end=YYYY-MM-DD]]";

fn parse_date(key: &str, value: &str) -> Result<Date> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .with_context(|| format!("invalid {key} '{value}'"))
}

/// Builds parameters for `query` from `key=value` arguments. A level or
/// usage the query reads falls back to the first filter option; a missing
/// bound falls back to the dataset's date span.
pub fn params_from_args(dataset: &Dataset, query: &str, args: &[String]) -> Result<QueryParams> {
    let mut level = None;
    let mut usage = None;
    let mut start = None;
    let mut end = None;

    for arg in args {
        let Some((key, value)) = arg.split_once('=') else {
            bail!("expected key=value, got '{arg}'\n{USAGE}");
        };
        match key {
            "level" => level = Some(value.to_string()),
            "usage" => usage = Some(value.to_string()),
            "start" => start = Some(parse_date(key, value)?),
            "end" => end = Some(parse_date(key, value)?),
            _ => bail!("unknown parameter '{key}'\n{USAGE}"),
        }
    }

    let (reads_level, reads_usage) = needs_filters(query);
    if (reads_level && level.is_none()) || (reads_usage && usage.is_none()) {
        let options = queries::filter_options(dataset);
        if reads_level && level.is_none() {
            level = options.default_level().map(str::to_string);
        }
        if reads_usage && usage.is_none() {
            usage = options.default_usage().map(str::to_string);
        }
    }

    let span = dataset.date_span();
    let (Some(start), Some(end)) = (start.or(span.map(|s| s.start)), end.or(span.map(|s| s.end))) else {
        bail!("dataset is empty; pass start= and end= explicitly");
    };

    Ok(QueryParams {
        level,
        usage,
        range: DateRange::new(start, end),
    })
}
