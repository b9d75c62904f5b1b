//! Distribution projection and per-entity summary statistics.

use std::collections::BTreeMap;

use polars::prelude::{AnyValue, DataFrame};
use serde::{Deserialize, Serialize};

use solar_common::{any_to_f64, any_to_string};
use solar_model::{COUNTRY_COLUMN, DistributionPoint, DistributionProjection};

/// Five-number summary, plus mean and count, for one entity's values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDistribution {
    pub entity: String,
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Project `(entity, metric)` pairs out of a combined table.
///
/// Returns `None` when the table is empty or lacks the metric column.
/// Otherwise every row appears in table order with its value unaltered;
/// null and non-numeric cells project as `None`.
pub fn prepare_distribution(frame: &DataFrame, metric: &str) -> Option<DistributionProjection> {
    if frame.height() == 0 {
        return None;
    }
    let metric_column = frame.column(metric).ok()?;
    let entity_column = frame.column(COUNTRY_COLUMN).ok()?;

    let mut points = Vec::with_capacity(frame.height());
    for idx in 0..frame.height() {
        let entity = any_to_string(entity_column.get(idx).unwrap_or(AnyValue::Null));
        let value = any_to_f64(metric_column.get(idx).unwrap_or(AnyValue::Null));
        points.push(DistributionPoint { entity, value });
    }
    Some(DistributionProjection {
        metric: metric.to_string(),
        points,
    })
}

/// Summarize a projection per entity, entities in first-appearance order.
///
/// Null observations stay out of the statistics and an entity with no
/// numeric values at all is dropped. Quartiles interpolate linearly
/// between closest ranks.
pub fn summarize_distribution(projection: &DistributionProjection) -> Vec<EntityDistribution> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for point in &projection.points {
        let entity = point.entity.as_str();
        if !groups.contains_key(entity) {
            order.push(entity);
            groups.insert(entity, Vec::new());
        }
        if let Some(value) = point.value {
            if value.is_finite() {
                if let Some(values) = groups.get_mut(entity) {
                    values.push(value);
                }
            }
        }
    }

    let mut summaries = Vec::new();
    for entity in order {
        let Some(values) = groups.get_mut(entity) else {
            continue;
        };
        if values.is_empty() {
            continue;
        }
        values.sort_by(f64::total_cmp);
        let count = values.len();
        let sum: f64 = values.iter().sum();
        summaries.push(EntityDistribution {
            entity: entity.to_string(),
            count,
            mean: sum / count as f64,
            min: values[0],
            q1: quantile(values, 0.25),
            median: quantile(values, 0.5),
            q3: quantile(values, 0.75),
            max: values[count - 1],
        });
    }
    summaries
}

/// Linear-interpolation quantile of an ascending slice. Empty input
/// yields NaN.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let pos = q * (n - 1) as f64;
            let lower = pos.floor() as usize;
            let upper = pos.ceil() as usize;
            let weight = pos - lower as f64;
            sorted[lower] + (sorted[upper] - sorted[lower]) * weight
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantile_interpolates() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert!((quantile(&values, 0.25) - 1.75).abs() < 1e-12);
        assert!((quantile(&values, 0.5) - 2.5).abs() < 1e-12);
        assert!((quantile(&values, 0.75) - 3.25).abs() < 1e-12);
        assert!((quantile(&values, 0.0) - 1.0).abs() < 1e-12);
        assert!((quantile(&values, 1.0) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_quantile_single_value() {
        assert!((quantile(&[7.5], 0.25) - 7.5).abs() < 1e-12);
    }

    #[test]
    fn test_quantile_empty_is_nan() {
        assert!(quantile(&[], 0.5).is_nan());
    }
}
