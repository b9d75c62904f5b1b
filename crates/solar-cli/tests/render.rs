//! Tests for the table and JSON rendering helpers.

use chrono::NaiveDate;

use solar_analysis::{EntityDistribution, HeadPreview, Histogram, HistogramBin};
use solar_cli::render::{
    compare_json, country_json, distribution_table, histogram_lines, metrics_table,
    no_qualifying_message, preview_table, ranking_header, ranking_table, sources_table,
    unavailable_message,
};
use solar_cli::types::{CompareResult, CountryResult, SourceSummary};
use solar_model::{EntityMean, KNOWN_METRICS, RankingResult};

fn sample_entries() -> Vec<EntityMean> {
    vec![
        EntityMean {
            entity: "Sierra Leone".to_string(),
            mean: 590.0,
            samples: 4,
        },
        EntityMean {
            entity: "Benin".to_string(),
            mean: 210.5,
            samples: 3,
        },
    ]
}

fn sample_compare() -> CompareResult {
    CompareResult {
        metric: "GHI".to_string(),
        threshold: 50.0,
        rows: 7,
        sources: vec![
            SourceSummary {
                entity: "Benin".to_string(),
                rows: 3,
                loaded: true,
            },
            SourceSummary {
                entity: "Sierra Leone".to_string(),
                rows: 4,
                loaded: true,
            },
            SourceSummary {
                entity: "Togo".to_string(),
                rows: 0,
                loaded: false,
            },
        ],
        ranking: RankingResult::Ranked(sample_entries()),
        distributions: vec![EntityDistribution {
            entity: "Benin".to_string(),
            count: 3,
            mean: 50.0,
            min: 10.0,
            q1: 35.0,
            median: 60.0,
            q3: 70.0,
            max: 80.0,
        }],
        errors: vec!["Togo: file not found".to_string()],
    }
}

#[test]
fn no_qualifying_message_names_the_filter() {
    assert_eq!(
        no_qualifying_message("GHI", 50.0),
        "No daytime GHI data (GHI > 50 W/m^2) available for ranking."
    );
}

#[test]
fn unavailable_message_names_the_metric() {
    assert_eq!(
        unavailable_message("DNI"),
        "No DNI data available for ranking."
    );
}

#[test]
fn ranking_header_includes_unit_for_known_metrics() {
    assert_eq!(ranking_header("GHI"), "Average Daytime GHI (W/m²)");
    assert_eq!(ranking_header("Tamb"), "Average Daytime Tamb (°C)");
    assert_eq!(ranking_header("Cloud"), "Average Daytime Cloud");
}

#[test]
fn ranking_table_lists_entities_with_means() {
    let rendered = ranking_table("GHI", &sample_entries()).to_string();
    for needle in [
        "Rank",
        "Average Daytime GHI (W/m²)",
        "Sierra Leone",
        "590.00",
        "Benin",
        "210.50",
    ] {
        assert!(rendered.contains(needle), "missing {needle} in:\n{rendered}");
    }
}

#[test]
fn distribution_table_shows_five_number_summary() {
    let rendered = distribution_table(&sample_compare().distributions).to_string();
    for needle in [
        "Benin", "Median", "50.00", "10.00", "35.00", "60.00", "70.00", "80.00",
    ] {
        assert!(rendered.contains(needle), "missing {needle} in:\n{rendered}");
    }
}

#[test]
fn sources_table_marks_loaded_and_missing() {
    let rendered = sources_table(&sample_compare().sources).to_string();
    assert!(rendered.contains("✓"));
    assert!(rendered.contains("Togo"));
}

#[test]
fn preview_table_renders_columns_and_cells() {
    let preview = HeadPreview {
        columns: vec!["Timestamp".to_string(), "GHI".to_string()],
        rows: vec![vec!["2021-08-09 00:01:00".to_string(), "-1.2".to_string()]],
    };
    let rendered = preview_table(&preview).to_string();
    assert!(rendered.contains("Timestamp"));
    assert!(rendered.contains("-1.2"));
}

#[test]
fn metrics_table_lists_every_known_metric() {
    let rendered = metrics_table().to_string();
    for metric in KNOWN_METRICS {
        assert!(rendered.contains(metric), "missing {metric} in:\n{rendered}");
    }
    assert!(rendered.contains("Global Horizontal Irradiance"));
}

#[test]
fn histogram_lines_scale_to_the_fullest_bin() {
    let histogram = Histogram {
        metric: "GHI".to_string(),
        bins: vec![
            HistogramBin {
                lower: 0.0,
                upper: 4.5,
                count: 2,
            },
            HistogramBin {
                lower: 4.5,
                upper: 9.0,
                count: 3,
            },
        ],
    };
    insta::assert_snapshot!(histogram_lines(&histogram, 10).join("\n"), @r"
    [     0.0,      4.5]  ██████      2
    [     4.5,      9.0]  ██████████  3
    ");
}

#[test]
fn histogram_lines_empty_without_counts() {
    let histogram = Histogram {
        metric: "GHI".to_string(),
        bins: Vec::new(),
    };
    assert!(histogram_lines(&histogram, 10).is_empty());
}

#[test]
fn compare_json_round_trips_through_value() {
    let result = sample_compare();

    let payload = compare_json(&result).expect("serialize comparison");
    let value: serde_json::Value = serde_json::from_str(&payload).expect("parse back");

    assert_eq!(value["metric"], "GHI");
    assert_eq!(value["threshold"], 50.0);
    assert_eq!(value["rows"], 7);
    assert_eq!(value["sources"][2]["country"], "Togo");
    assert_eq!(value["sources"][2]["loaded"], false);
    assert_eq!(value["ranking"]["Ranked"][0]["entity"], "Sierra Leone");
    assert_eq!(value["ranking"]["Ranked"][0]["mean"], 590.0);
    assert_eq!(value["ranking"]["Ranked"][0]["samples"], 4);
    assert_eq!(value["distributions"][0]["median"], 60.0);
    assert_eq!(value["errors"][0], "Togo: file not found");
}

#[test]
fn compare_json_renders_no_data_states_as_strings() {
    let mut result = sample_compare();
    result.ranking = RankingResult::Unavailable;

    let payload = compare_json(&result).expect("serialize comparison");
    let value: serde_json::Value = serde_json::from_str(&payload).expect("parse back");

    assert_eq!(value["ranking"], "Unavailable");
}

#[test]
fn country_json_includes_extent_and_nulls() {
    let first = NaiveDate::from_ymd_opt(2021, 8, 9)
        .and_then(|date| date.and_hms_opt(0, 1, 0))
        .expect("valid datetime");
    let last = NaiveDate::from_ymd_opt(2021, 8, 9)
        .and_then(|date| date.and_hms_opt(0, 3, 0))
        .expect("valid datetime");
    let result = CountryResult {
        entity: "Benin".to_string(),
        metric: "GHI".to_string(),
        rows: 3,
        metrics: vec!["GHI", "Tamb"],
        extent: Some((first, last)),
        preview: HeadPreview {
            columns: vec!["Timestamp".to_string()],
            rows: vec![vec!["2021-08-09 00:01:00".to_string()]],
        },
        metric_summary: None,
        histogram: None,
        errors: Vec::new(),
    };

    let payload = country_json(&result).expect("serialize country");
    let value: serde_json::Value = serde_json::from_str(&payload).expect("parse back");

    assert_eq!(value["country"], "Benin");
    assert_eq!(value["metric"], "GHI");
    assert_eq!(value["time_extent"]["first"], "2021-08-09 00:01:00");
    assert_eq!(value["time_extent"]["last"], "2021-08-09 00:03:00");
    assert_eq!(value["metrics"][1], "Tamb");
    assert!(value["summary"].is_null());
    assert!(value["histogram"].is_null());
}
