//! Result types for the cross-country ranking.

use serde::{Deserialize, Serialize};

/// Mean of a metric for one entity over the qualifying rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMean {
    /// Value of the `Country` column this group was keyed on.
    pub entity: String,
    /// Arithmetic mean of the metric over the qualifying rows.
    pub mean: f64,
    /// Number of qualifying rows behind the mean.
    pub samples: usize,
}

/// Outcome of ranking entities by a metric.
///
/// The three states are deliberately distinct: a missing metric column is
/// not the same as a threshold filter that matched nothing, and callers
/// render a different message for each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RankingResult {
    /// The input table was empty or did not carry the metric column.
    Unavailable,
    /// The metric was present, but no row passed the threshold filter.
    NoQualifyingRows,
    /// Entities sorted by descending mean; ties keep first-appearance order.
    /// Rank numbers are positional (1-based) and assigned at render time.
    Ranked(Vec<EntityMean>),
}

impl RankingResult {
    /// Returns the ranked entries, or `None` for the two no-data states.
    pub fn entries(&self) -> Option<&[EntityMean]> {
        match self {
            RankingResult::Ranked(entries) => Some(entries),
            RankingResult::Unavailable | RankingResult::NoQualifyingRows => None,
        }
    }

    /// Returns true if at least one entity was ranked.
    pub fn is_ranked(&self) -> bool {
        matches!(self, RankingResult::Ranked(entries) if !entries.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_only_for_ranked() {
        assert_eq!(RankingResult::Unavailable.entries(), None);
        assert_eq!(RankingResult::NoQualifyingRows.entries(), None);

        let ranked = RankingResult::Ranked(vec![EntityMean {
            entity: "Benin".to_string(),
            mean: 230.5,
            samples: 12,
        }]);
        assert_eq!(ranked.entries().map(<[EntityMean]>::len), Some(1));
        assert!(ranked.is_ranked());
    }
}
