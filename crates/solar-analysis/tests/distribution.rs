use polars::prelude::{Column, DataFrame};

use solar_analysis::{prepare_distribution, summarize_distribution};
use solar_model::{DistributionPoint, DistributionProjection};

fn measurements(entities: &[&str], values: &[Option<f64>]) -> DataFrame {
    DataFrame::new(vec![
        Column::new("Country".into(), entities.to_vec()),
        Column::new("GHI".into(), values.to_vec()),
    ])
    .expect("build measurement frame")
}

#[test]
fn projection_preserves_rows_and_values() {
    let frame = measurements(
        &["Benin", "Togo", "Benin"],
        &[Some(120.5), None, Some(80.0)],
    );

    let projection = prepare_distribution(&frame, "GHI").expect("projection");

    assert_eq!(projection.metric, "GHI");
    assert_eq!(
        projection.points,
        vec![
            DistributionPoint {
                entity: "Benin".to_string(),
                value: Some(120.5),
            },
            DistributionPoint {
                entity: "Togo".to_string(),
                value: None,
            },
            DistributionPoint {
                entity: "Benin".to_string(),
                value: Some(80.0),
            },
        ]
    );
    assert_eq!(projection.entities(), vec!["Benin", "Togo"]);
}

#[test]
fn missing_metric_column_projects_nothing() {
    let frame = measurements(&["Benin"], &[Some(120.5)]);
    assert!(prepare_distribution(&frame, "WS").is_none());
}

#[test]
fn empty_table_projects_nothing() {
    assert!(prepare_distribution(&DataFrame::empty(), "GHI").is_none());
}

#[test]
fn summary_computes_five_number_statistics() {
    let projection = DistributionProjection {
        metric: "GHI".to_string(),
        points: [1.0, 2.0, 3.0, 4.0]
            .iter()
            .map(|&value| DistributionPoint {
                entity: "Benin".to_string(),
                value: Some(value),
            })
            .collect(),
    };

    let summaries = summarize_distribution(&projection);

    assert_eq!(summaries.len(), 1);
    let summary = &summaries[0];
    assert_eq!(summary.entity, "Benin");
    assert_eq!(summary.count, 4);
    assert!((summary.mean - 2.5).abs() < 1e-9);
    assert!((summary.min - 1.0).abs() < 1e-9);
    assert!((summary.q1 - 1.75).abs() < 1e-9);
    assert!((summary.median - 2.5).abs() < 1e-9);
    assert!((summary.q3 - 3.25).abs() < 1e-9);
    assert!((summary.max - 4.0).abs() < 1e-9);
}

#[test]
fn summary_skips_null_observations() {
    let frame = measurements(
        &["Benin", "Benin", "Benin"],
        &[Some(10.0), None, Some(30.0)],
    );
    let projection = prepare_distribution(&frame, "GHI").expect("projection");

    let summaries = summarize_distribution(&projection);

    assert_eq!(summaries[0].count, 2);
    assert!((summaries[0].mean - 20.0).abs() < 1e-9);
}

#[test]
fn entity_without_numeric_values_is_dropped() {
    let frame = measurements(&["Benin", "Togo"], &[None, Some(42.0)]);
    let projection = prepare_distribution(&frame, "GHI").expect("projection");

    let summaries = summarize_distribution(&projection);

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].entity, "Togo");
}

#[test]
fn summaries_keep_first_appearance_order() {
    let frame = measurements(
        &["Togo", "Benin", "Togo", "Sierra Leone"],
        &[Some(4.0), Some(9.0), Some(6.0), Some(1.0)],
    );
    let projection = prepare_distribution(&frame, "GHI").expect("projection");

    let summaries = summarize_distribution(&projection);

    let order: Vec<&str> = summaries
        .iter()
        .map(|summary| summary.entity.as_str())
        .collect();
    assert_eq!(order, vec!["Togo", "Benin", "Sierra Leone"]);
}

#[test]
fn unsorted_values_still_summarize_in_rank_order() {
    let frame = measurements(
        &["Benin"; 5],
        &[Some(50.0), Some(10.0), Some(40.0), Some(20.0), Some(30.0)],
    );
    let projection = prepare_distribution(&frame, "GHI").expect("projection");

    let summaries = summarize_distribution(&projection);

    let summary = &summaries[0];
    assert!((summary.min - 10.0).abs() < 1e-9);
    assert!((summary.median - 30.0).abs() < 1e-9);
    assert!((summary.max - 50.0).abs() < 1e-9);
}
