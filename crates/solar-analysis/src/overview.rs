//! Per-country exploratory summaries: data preview, metric availability,
//! time coverage, and histogram binning.

use chrono::NaiveDateTime;
use polars::prelude::{AnyValue, DataFrame};
use serde::{Deserialize, Serialize};

use solar_common::{any_to_datetime, any_to_f64, any_to_string};
use solar_model::{KNOWN_METRICS, TIMESTAMP_COLUMN};

/// The first rows of a table, rendered as display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadPreview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Fixed-width histogram over a metric's observed range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub metric: String,
    pub bins: Vec<HistogramBin>,
}

/// One histogram bucket; `upper` of the last bucket is the observed max.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Well-known metrics actually present in the table, in canonical order.
pub fn available_metrics(frame: &DataFrame) -> Vec<&'static str> {
    KNOWN_METRICS
        .iter()
        .copied()
        .filter(|metric| frame.column(metric).is_ok())
        .collect()
}

/// The first `n` rows as display strings, with the column names.
pub fn head_preview(frame: &DataFrame, n: usize) -> HeadPreview {
    let columns: Vec<String> = frame
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str().to_string())
        .collect();
    let mut rows = Vec::new();
    for idx in 0..frame.height().min(n) {
        let row = frame
            .get_columns()
            .iter()
            .map(|column| any_to_string(column.get(idx).unwrap_or(AnyValue::Null)))
            .collect();
        rows.push(row);
    }
    HeadPreview { columns, rows }
}

/// Earliest and latest parseable timestamps in the table.
pub fn time_extent(frame: &DataFrame) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let column = frame.column(TIMESTAMP_COLUMN).ok()?;
    let mut extent: Option<(NaiveDateTime, NaiveDateTime)> = None;
    for idx in 0..frame.height() {
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        let Some(stamp) = any_to_datetime(&value) else {
            continue;
        };
        extent = Some(match extent {
            None => (stamp, stamp),
            Some((first, last)) => (first.min(stamp), last.max(stamp)),
        });
    }
    extent
}

/// Fixed-width histogram of a metric over its observed range.
///
/// Returns `None` when the metric column is absent, holds no finite
/// values, or `bins` is zero. A degenerate range (every value equal)
/// collapses to a single bucket.
pub fn histogram(frame: &DataFrame, metric: &str, bins: usize) -> Option<Histogram> {
    if bins == 0 {
        return None;
    }
    let column = frame.column(metric).ok()?;
    let mut values = Vec::new();
    for idx in 0..frame.height() {
        if let Some(value) = any_to_f64(column.get(idx).unwrap_or(AnyValue::Null)) {
            if value.is_finite() {
                values.push(value);
            }
        }
    }
    if values.is_empty() {
        return None;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return Some(Histogram {
            metric: metric.to_string(),
            bins: vec![HistogramBin {
                lower: min,
                upper: max,
                count: values.len(),
            }],
        });
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &value in &values {
        let mut slot = ((value - min) / width) as usize;
        if slot >= bins {
            slot = bins - 1;
        }
        counts[slot] += 1;
    }
    let buckets = counts
        .into_iter()
        .enumerate()
        .map(|(idx, count)| HistogramBin {
            lower: min + width * idx as f64,
            upper: if idx + 1 == bins {
                max
            } else {
                min + width * (idx + 1) as f64
            },
            count,
        })
        .collect();
    Some(Histogram {
        metric: metric.to_string(),
        bins: buckets,
    })
}
