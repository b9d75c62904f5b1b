use chrono::NaiveDateTime;

use solar_analysis::{EntityDistribution, HeadPreview, Histogram};
use solar_model::RankingResult;

/// Everything the cross-country comparison produced.
#[derive(Debug)]
pub struct CompareResult {
    pub metric: String,
    pub threshold: f64,
    pub rows: usize,
    pub sources: Vec<SourceSummary>,
    pub ranking: RankingResult,
    pub distributions: Vec<EntityDistribution>,
    pub errors: Vec<String>,
}

/// Per-country load outcome feeding the comparison.
#[derive(Debug)]
pub struct SourceSummary {
    pub entity: String,
    pub rows: usize,
    pub loaded: bool,
}

/// Overview of a single country's export.
#[derive(Debug)]
pub struct CountryResult {
    pub entity: String,
    /// Metric the summary and histogram were taken over.
    pub metric: String,
    pub rows: usize,
    pub metrics: Vec<&'static str>,
    pub extent: Option<(NaiveDateTime, NaiveDateTime)>,
    pub preview: HeadPreview,
    pub metric_summary: Option<EntityDistribution>,
    pub histogram: Option<Histogram>,
    pub errors: Vec<String>,
}
