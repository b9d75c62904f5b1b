//! Projection types for cross-country distribution views.

use serde::{Deserialize, Serialize};

/// One `(entity, value)` observation of a metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionPoint {
    /// Value of the `Country` column for the row.
    pub entity: String,
    /// Metric value, `None` where the cell was null or non-numeric.
    pub value: Option<f64>,
}

/// Minimal projection of one metric across entities.
///
/// Points appear in the source table's row order with values unaltered, so
/// a renderer sees exactly what the combined table held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionProjection {
    /// Metric column the projection was taken from.
    pub metric: String,
    /// Observations in original row order.
    pub points: Vec<DistributionPoint>,
}

impl DistributionProjection {
    /// Entities in first-appearance order.
    pub fn entities(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for point in &self.points {
            if !seen.contains(&point.entity.as_str()) {
                seen.push(point.entity.as_str());
            }
        }
        seen
    }
}
