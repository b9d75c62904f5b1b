pub mod columns;
pub mod country;
pub mod distribution;
pub mod ranking;

pub use columns::{
    COUNTRY_COLUMN, DAYTIME_GHI_THRESHOLD, DEFAULT_RANKING_METRIC, KNOWN_METRICS,
    TIMESTAMP_COLUMN, metric_description, metric_unit,
};
pub use country::Country;
pub use distribution::{DistributionPoint, DistributionProjection};
pub use ranking::{EntityMean, RankingResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranking_result_serializes() {
        let result = RankingResult::Ranked(vec![
            EntityMean {
                entity: "Benin".to_string(),
                mean: 236.2,
                samples: 4021,
            },
            EntityMean {
                entity: "Togo".to_string(),
                mean: 223.9,
                samples: 3876,
            },
        ]);
        let json = serde_json::to_string(&result).expect("serialize ranking");
        let round: RankingResult = serde_json::from_str(&json).expect("deserialize ranking");
        assert_eq!(round, result);
    }

    #[test]
    fn country_column_not_a_metric() {
        assert!(!KNOWN_METRICS.contains(&COUNTRY_COLUMN));
        assert!(!KNOWN_METRICS.contains(&TIMESTAMP_COLUMN));
    }
}
