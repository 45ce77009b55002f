use crate::args::OutputFormat;
use crate::config::resolve_log_path;
use anyhow::Result;
use pageviews_engine::StatsEngine;
use pageviews_types::StatRecord;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct JsonReport<'a> {
    statistic: &'a str,
    records: &'a [StatRecord],
}

pub fn handle(base_dir: &Path, file: &str, statistic: &str, format: OutputFormat) -> Result<()> {
    let path = resolve_log_path(base_dir, file);
    let engine = StatsEngine::for_file(&path, statistic)?;

    match format {
        OutputFormat::Plain => {
            engine.print()?;
        }
        OutputFormat::Json => {
            let report = engine.calculate()?;
            let view = JsonReport {
                statistic: engine.statistic().id(),
                records: report.records(),
            };
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }

    Ok(())
}
