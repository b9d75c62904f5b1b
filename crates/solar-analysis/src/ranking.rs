//! Cross-country ranking by mean metric value.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use polars::prelude::{AnyValue, DataFrame};
use tracing::debug;

use solar_common::{any_to_f64, any_to_string};
use solar_model::{COUNTRY_COLUMN, EntityMean, RankingResult};

/// Rank entities by the mean of `metric` over rows where the value
/// strictly exceeds `threshold`.
///
/// An empty table or a table without the metric (or entity) column is
/// `Unavailable`; a filter that matches nothing is `NoQualifyingRows`.
/// Group order is first appearance in the table and the descending sort
/// is stable, so equal means keep that order. Null and non-finite cells
/// are ignored.
pub fn rank_by_metric(frame: &DataFrame, metric: &str, threshold: f64) -> RankingResult {
    if frame.height() == 0 {
        return RankingResult::Unavailable;
    }
    let Ok(metric_column) = frame.column(metric) else {
        return RankingResult::Unavailable;
    };
    let Ok(entity_column) = frame.column(COUNTRY_COLUMN) else {
        return RankingResult::Unavailable;
    };

    let mut order: Vec<String> = Vec::new();
    let mut totals: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for idx in 0..frame.height() {
        let Some(value) = any_to_f64(metric_column.get(idx).unwrap_or(AnyValue::Null)) else {
            continue;
        };
        if !value.is_finite() || value <= threshold {
            continue;
        }
        let entity = any_to_string(entity_column.get(idx).unwrap_or(AnyValue::Null));
        if entity.is_empty() {
            continue;
        }
        if !totals.contains_key(&entity) {
            order.push(entity.clone());
        }
        let entry = totals.entry(entity).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    if totals.is_empty() {
        return RankingResult::NoQualifyingRows;
    }

    let mut entries: Vec<EntityMean> = order
        .into_iter()
        .map(|entity| {
            let (sum, count) = totals[&entity];
            EntityMean {
                entity,
                mean: sum / count as f64,
                samples: count,
            }
        })
        .collect();
    entries.sort_by(|a, b| b.mean.partial_cmp(&a.mean).unwrap_or(Ordering::Equal));
    debug!(metric, entities = entries.len(), "ranked entities");
    RankingResult::Ranked(entries)
}
