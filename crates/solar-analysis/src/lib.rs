//! Analysis routines over loaded measurement tables: daytime ranking,
//! distribution projection, and exploratory summaries.

pub mod distribution;
pub mod overview;
pub mod ranking;

pub use distribution::{EntityDistribution, prepare_distribution, summarize_distribution};
pub use overview::{
    HeadPreview, Histogram, HistogramBin, available_metrics, head_preview, histogram, time_extent,
};
pub use ranking::rank_by_metric;
