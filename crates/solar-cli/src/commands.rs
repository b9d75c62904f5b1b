use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Result, bail};
use tracing::{info, info_span};

use solar_analysis::{
    available_metrics, head_preview, histogram, prepare_distribution, rank_by_metric,
    summarize_distribution, time_extent,
};
use solar_cli::types::{CompareResult, CountryResult, SourceSummary};
use solar_ingest::{DataLocator, DataStore, LoadStatus};
use solar_model::{COUNTRY_COLUMN, Country, TIMESTAMP_COLUMN};

use crate::cli::{CompareArgs, CountryArgs};

pub fn run_compare(args: &CompareArgs, data_dirs: &[PathBuf]) -> Result<CompareResult> {
    validate_metric(&args.metric)?;
    if !args.threshold.is_finite() {
        bail!("threshold must be a finite number");
    }
    let span = info_span!("compare", metric = %args.metric);
    let _guard = span.enter();
    let start = Instant::now();

    let store = build_store(data_dirs);
    let combined = store.combined_default();
    let sources = combined
        .outcomes
        .iter()
        .map(|outcome| SourceSummary {
            entity: outcome.entity.clone(),
            rows: outcome.rows,
            loaded: outcome.status.failure_message(&outcome.entity).is_none(),
        })
        .collect();
    let ranking = rank_by_metric(&combined.frame, &args.metric, args.threshold);
    let distributions = match prepare_distribution(&combined.frame, &args.metric) {
        Some(projection) => summarize_distribution(&projection),
        None => Vec::new(),
    };
    info!(
        rows = combined.frame.height(),
        file_reads = store.file_reads(),
        duration_ms = start.elapsed().as_millis(),
        "comparison complete"
    );

    Ok(CompareResult {
        metric: args.metric.clone(),
        threshold: args.threshold,
        rows: combined.frame.height(),
        sources,
        ranking,
        distributions,
        errors: combined.diagnostics(),
    })
}

pub fn run_country(args: &CountryArgs, data_dirs: &[PathBuf]) -> Result<CountryResult> {
    validate_metric(&args.metric)?;
    let span = info_span!("country", name = %args.name);
    let _guard = span.enter();
    let start = Instant::now();

    let store = build_store(data_dirs);
    let table = store.entity(&args.name);
    let frame = &table.frame;
    let metric_summary = prepare_distribution(frame, &args.metric)
        .map(|projection| summarize_distribution(&projection))
        .and_then(|summaries| summaries.into_iter().next());
    let mut errors = Vec::new();
    if let Some(message) = table.diagnostic() {
        errors.push(message);
    }
    if matches!(table.status, LoadStatus::UnknownEntity) {
        let supported: Vec<&str> = Country::ALL.iter().map(Country::as_str).collect();
        errors.push(format!("supported countries: {}", supported.join(", ")));
    }
    info!(
        rows = frame.height(),
        duration_ms = start.elapsed().as_millis(),
        "country summary complete"
    );

    Ok(CountryResult {
        entity: table.entity.clone(),
        metric: args.metric.clone(),
        rows: frame.height(),
        metrics: available_metrics(frame),
        extent: time_extent(frame),
        preview: head_preview(frame, args.rows),
        metric_summary,
        histogram: histogram(frame, &args.metric, args.bins),
        errors,
    })
}

/// The entity and timestamp columns are not measurements; ranking or
/// summarizing by them is a usage error, not an empty result.
fn validate_metric(metric: &str) -> Result<()> {
    if metric == COUNTRY_COLUMN || metric == TIMESTAMP_COLUMN {
        bail!("column '{metric}' is not a measurement metric");
    }
    Ok(())
}

fn build_store(data_dirs: &[PathBuf]) -> DataStore {
    let mut locator = DataLocator::from_environment();
    for dir in data_dirs.iter().rev() {
        locator = locator.with_priority_dir(dir.clone());
    }
    DataStore::new(locator)
}
