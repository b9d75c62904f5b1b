//! Concatenation of per-country tables into one combined table.

use std::collections::BTreeMap;

use polars::prelude::{DataFrame, DataType, PlSmallStr, Series};
use tracing::{debug, warn};

use solar_model::Country;

use crate::error::Result;
use crate::loader::{EntityTable, LoadStatus, load_country};
use crate::paths::DataLocator;

/// Lightweight per-entity record of what an aggregation saw.
#[derive(Debug, Clone)]
pub struct EntityOutcome {
    /// Entity the load was attempted for.
    pub entity: String,
    /// Rows the entity contributed.
    pub rows: usize,
    /// Outcome of the load.
    pub status: LoadStatus,
}

/// The combined table plus the outcomes that produced it.
#[derive(Debug, Clone)]
pub struct CombinedTable {
    /// Concatenated rows: entity order first, file order within.
    pub frame: DataFrame,
    /// Per-entity outcomes, in request order.
    pub outcomes: Vec<EntityOutcome>,
    /// Set when loaded tables could not be stacked.
    pub concat_error: Option<String>,
}

impl CombinedTable {
    /// True when at least one row survived.
    pub fn has_rows(&self) -> bool {
        self.frame.height() > 0
    }

    /// Diagnostics for every entity that contributed nothing, plus any
    /// stacking failure.
    pub fn diagnostics(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .outcomes
            .iter()
            .filter_map(|outcome| outcome.status.failure_message(&outcome.entity))
            .collect();
        if let Some(message) = &self.concat_error {
            lines.push(message.clone());
        }
        lines
    }
}

/// Load every requested country and concatenate whatever loads.
///
/// Entities whose table comes back empty (failed, unknown, or genuinely
/// zero-row) contribute nothing; if nothing survives, the combined frame
/// is empty and callers render a message instead of a chart.
pub fn load_all_countries(countries: &[Country], locator: &DataLocator) -> CombinedTable {
    let tables: Vec<EntityTable> = countries
        .iter()
        .map(|&country| load_country(country, locator))
        .collect();
    combine_entity_tables(tables.iter())
}

/// Concatenate already-loaded entity tables, skipping empty contributions.
pub fn combine_entity_tables<'a, I>(tables: I) -> CombinedTable
where
    I: IntoIterator<Item = &'a EntityTable>,
{
    let mut outcomes = Vec::new();
    let mut frames = Vec::new();
    for table in tables {
        outcomes.push(EntityOutcome {
            entity: table.entity.clone(),
            rows: table.frame.height(),
            status: table.status.clone(),
        });
        if table.frame.height() > 0 {
            frames.push(table.frame.clone());
        }
    }

    let (frame, concat_error) = match stack_frames(frames) {
        Ok(frame) => (frame, None),
        Err(error) => {
            warn!(%error, "failed to combine loaded tables");
            (DataFrame::empty(), Some(error.to_string()))
        }
    };
    debug!(
        entities = outcomes.len(),
        rows = frame.height(),
        "combined tables"
    );
    CombinedTable {
        frame,
        outcomes,
        concat_error,
    }
}

/// Stack frames in order, aligning each to the union of columns.
///
/// Column order is first-seen order; a frame missing a column gets nulls
/// of the dtype the column had where it first appeared. Row order within
/// each frame is untouched.
fn stack_frames(frames: Vec<DataFrame>) -> Result<DataFrame> {
    if frames.is_empty() {
        return Ok(DataFrame::empty());
    }

    let mut ordered: Vec<PlSmallStr> = Vec::new();
    let mut dtypes: BTreeMap<PlSmallStr, DataType> = BTreeMap::new();
    for frame in &frames {
        for column in frame.get_columns() {
            if !dtypes.contains_key(column.name()) {
                ordered.push(column.name().clone());
                dtypes.insert(column.name().clone(), column.dtype().clone());
            }
        }
    }

    let mut combined: Option<DataFrame> = None;
    for frame in frames {
        let aligned = align_frame(frame, &ordered, &dtypes)?;
        match combined.as_mut() {
            Some(existing) => {
                existing.vstack_mut(&aligned)?;
            }
            None => combined = Some(aligned),
        }
    }
    Ok(combined.unwrap_or_else(DataFrame::empty))
}

fn align_frame(
    mut frame: DataFrame,
    ordered: &[PlSmallStr],
    dtypes: &BTreeMap<PlSmallStr, DataType>,
) -> Result<DataFrame> {
    for name in ordered {
        if frame.column(name.as_str()).is_ok() {
            continue;
        }
        let Some(dtype) = dtypes.get(name) else {
            continue;
        };
        let filler = Series::full_null(name.clone(), frame.height(), dtype);
        frame.with_column(filler)?;
    }
    Ok(frame.select(ordered.iter().cloned())?)
}
