use std::env;

use anyhow::{Context, Result};
use building_data::queries;
use dashboard_service::{
    cli::{self, USAGE},
    config::AppConfig,
    loader, observability, registry,
};
use serde_json::json;

fn main() -> Result<()> {
    observability::init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.first().is_some_and(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return Ok(());
    }

    let cfg = AppConfig::load()?;

    // A dataset that fails to load is never queried; the error is reported
    // once, by the returned `anyhow` chain.
    let dataset = loader::load(&cfg.data).context("cannot start without a complete dataset")?;

    let output = match args.split_first() {
        None => json!({
            "metadata": dataset.metadata(),
            "filters": queries::filter_options(&dataset),
            "date_span": dataset.date_span(),
            "queries": registry::registry().keys().copied().collect::<Vec<&str>>(),
        }),
        Some((name, rest)) => {
            let params = cli::params_from_args(&dataset, name, rest)?;
            let rows = registry::run_query(name, &dataset, &params)?;
            if rows.is_empty() {
                tracing::info!(query = %name, "no rows matched");
            }
            serde_json::to_value(rows)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
