//! Table and JSON rendering for command results.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde_json::json;

use solar_analysis::{EntityDistribution, HeadPreview, Histogram};
use solar_common::{TIMESTAMP_FORMAT, format_numeric};
use solar_model::{EntityMean, KNOWN_METRICS, RankingResult, metric_description, metric_unit};

use crate::types::{CompareResult, CountryResult, SourceSummary};

/// Bar width of the text histogram, in characters.
const HISTOGRAM_BAR_WIDTH: usize = 40;

/// Message shown when the metric column (or the table itself) was absent.
pub fn unavailable_message(metric: &str) -> String {
    format!("No {metric} data available for ranking.")
}

/// Message shown when the daytime filter matched nothing.
pub fn no_qualifying_message(metric: &str, threshold: f64) -> String {
    format!(
        "No daytime {metric} data ({metric} > {threshold} W/m^2) available for ranking.",
        threshold = format_numeric(threshold)
    )
}

/// Column header for the ranking table.
pub fn ranking_header(metric: &str) -> String {
    match metric_unit(metric) {
        Some(unit) => format!("Average Daytime {metric} ({unit})"),
        None => format!("Average Daytime {metric}"),
    }
}

/// Print the comparison: load outcomes, the ranking (or why there is
/// none), and the per-country distribution summary.
pub fn print_compare(result: &CompareResult) {
    println!("Metric: {}", describe_metric(&result.metric));
    println!(
        "Daytime filter: {} > {}",
        result.metric,
        format_numeric(result.threshold)
    );
    println!("Combined rows: {}", result.rows);
    println!("{}", sources_table(&result.sources));
    println!();
    match &result.ranking {
        RankingResult::Unavailable => println!("{}", unavailable_message(&result.metric)),
        RankingResult::NoQualifyingRows => {
            println!("{}", no_qualifying_message(&result.metric, result.threshold));
        }
        RankingResult::Ranked(entries) => {
            println!("{}", ranking_table(&result.metric, entries));
        }
    }
    if !result.distributions.is_empty() {
        println!();
        println!("Distribution of {} across countries:", result.metric);
        println!("{}", distribution_table(&result.distributions));
    }
    print_errors(&result.errors);
}

/// Print one country's overview.
pub fn print_country(result: &CountryResult) {
    println!("Country: {}", result.entity);
    println!("Rows: {}", result.rows);
    if let Some((first, last)) = result.extent {
        println!(
            "Time range: {} to {}",
            first.format(TIMESTAMP_FORMAT),
            last.format(TIMESTAMP_FORMAT)
        );
    }
    if !result.metrics.is_empty() {
        println!("Metrics: {}", result.metrics.join(", "));
    }
    if !result.preview.rows.is_empty() {
        println!();
        println!("First {} rows:", result.preview.rows.len());
        println!("{}", preview_table(&result.preview));
    }
    if let Some(summary) = &result.metric_summary {
        println!();
        println!("Distribution of {}:", result.metric);
        println!("{}", distribution_table(std::slice::from_ref(summary)));
    }
    if let Some(histogram) = &result.histogram {
        println!();
        println!("{} histogram:", histogram.metric);
        for line in histogram_lines(histogram, HISTOGRAM_BAR_WIDTH) {
            println!("{line}");
        }
    }
    print_errors(&result.errors);
}

/// Print the known-metric listing.
pub fn print_metrics() {
    println!("{}", metrics_table());
}

/// Ranking table with 1-based rank numbers; the top entry is highlighted.
pub fn ranking_table(metric: &str, entries: &[EntityMean]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rank"),
        header_cell("Country"),
        header_cell(&ranking_header(metric)),
        header_cell("Samples"),
    ]);
    apply_ranking_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (index, entry) in entries.iter().enumerate() {
        let rank = index + 1;
        let mut cells = vec![
            Cell::new(rank),
            Cell::new(&entry.entity),
            Cell::new(format!("{:.2}", entry.mean)),
            Cell::new(entry.samples),
        ];
        if rank == 1 {
            cells = cells
                .into_iter()
                .map(|cell| cell.fg(Color::Green).add_attribute(Attribute::Bold))
                .collect();
        }
        table.add_row(cells);
    }
    table
}

/// Per-country five-number summary table.
pub fn distribution_table(distributions: &[EntityDistribution]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Country"),
        header_cell("Count"),
        header_cell("Mean"),
        header_cell("Min"),
        header_cell("Q1"),
        header_cell("Median"),
        header_cell("Q3"),
        header_cell("Max"),
    ]);
    apply_table_style(&mut table);
    for index in 1..8 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for summary in distributions {
        table.add_row(vec![
            Cell::new(&summary.entity),
            Cell::new(summary.count),
            Cell::new(format!("{:.2}", summary.mean)),
            Cell::new(format!("{:.2}", summary.min)),
            Cell::new(format!("{:.2}", summary.q1)),
            Cell::new(format!("{:.2}", summary.median)),
            Cell::new(format!("{:.2}", summary.q3)),
            Cell::new(format!("{:.2}", summary.max)),
        ]);
    }
    table
}

/// Load outcome table for the comparison sources.
pub fn sources_table(sources: &[SourceSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Country"),
        header_cell("Rows"),
        header_cell("Loaded"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for source in sources {
        table.add_row(vec![
            Cell::new(&source.entity),
            Cell::new(source.rows),
            loaded_cell(source.loaded),
        ]);
    }
    table
}

/// First rows of an export, one column per export column.
pub fn preview_table(preview: &HeadPreview) -> Table {
    let mut table = Table::new();
    let header: Vec<Cell> = preview.columns.iter().map(|name| header_cell(name)).collect();
    table.set_header(header);
    apply_table_style(&mut table);
    for row in &preview.rows {
        table.add_row(row.clone());
    }
    table
}

/// Known-metric listing with units and long names.
pub fn metrics_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metric"),
        header_cell("Unit"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for metric in KNOWN_METRICS {
        table.add_row(vec![
            Cell::new(metric),
            Cell::new(metric_unit(metric).unwrap_or("-")),
            Cell::new(metric_description(metric).unwrap_or_default()),
        ]);
    }
    table
}

/// Text histogram: one line per bucket with a proportional bar.
pub fn histogram_lines(histogram: &Histogram, width: usize) -> Vec<String> {
    let max_count = histogram
        .bins
        .iter()
        .map(|bin| bin.count)
        .max()
        .unwrap_or(0);
    if max_count == 0 {
        return Vec::new();
    }
    histogram
        .bins
        .iter()
        .map(|bin| {
            let bar = "█".repeat(bin.count * width / max_count);
            format!(
                "[{:>8.1}, {:>8.1}]  {bar:<width$}  {}",
                bin.lower, bin.upper, bin.count
            )
        })
        .collect()
}

/// Comparison as pretty JSON for scripting.
pub fn compare_json(result: &CompareResult) -> serde_json::Result<String> {
    let sources: Vec<serde_json::Value> = result
        .sources
        .iter()
        .map(|source| {
            json!({
                "country": source.entity,
                "rows": source.rows,
                "loaded": source.loaded,
            })
        })
        .collect();
    let value = json!({
        "metric": result.metric,
        "threshold": result.threshold,
        "rows": result.rows,
        "sources": sources,
        "ranking": result.ranking,
        "distributions": result.distributions,
        "errors": result.errors,
    });
    serde_json::to_string_pretty(&value)
}

/// Country overview as pretty JSON for scripting.
pub fn country_json(result: &CountryResult) -> serde_json::Result<String> {
    let extent = result.extent.map(|(first, last)| {
        json!({
            "first": first.format(TIMESTAMP_FORMAT).to_string(),
            "last": last.format(TIMESTAMP_FORMAT).to_string(),
        })
    });
    let value = json!({
        "country": result.entity,
        "metric": result.metric,
        "rows": result.rows,
        "metrics": result.metrics,
        "time_extent": extent,
        "preview": result.preview,
        "summary": result.metric_summary,
        "histogram": result.histogram,
        "errors": result.errors,
    });
    serde_json::to_string_pretty(&value)
}

/// Shared style for the auxiliary listings.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_ranking_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn describe_metric(metric: &str) -> String {
    match metric_unit(metric) {
        Some(unit) => format!("{metric} ({unit})"),
        None => metric.to_string(),
    }
}

fn print_errors(errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    eprintln!("Errors:");
    for error in errors {
        eprintln!("- {error}");
    }
}

fn loaded_cell(loaded: bool) -> Cell {
    if loaded {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
