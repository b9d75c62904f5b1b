//! CSV loading for per-country measurement exports.
//!
//! Loading never raises toward the caller: every failure class collapses
//! to an empty table with a tagged status, so front-ends can always render
//! something and still tell "no data" apart from "failed to load".

use std::path::Path;

use polars::prelude::{
    CsvParseOptions, CsvReadOptions, DataFrame, DataType, IntoColumn, NamedFrom, SerReader, Series,
};
use tracing::{debug, warn};

use solar_common::is_numeric_dtype;
use solar_model::{COUNTRY_COLUMN, Country, TIMESTAMP_COLUMN};

use crate::error::{IngestError, Result};
use crate::paths::DataLocator;

/// What happened when an entity's export was requested.
#[derive(Debug, Clone)]
pub enum LoadStatus {
    /// File read and stamped; zero rows is a legitimate state.
    Loaded,
    /// Requested name is outside the fixed country set.
    UnknownEntity,
    /// File missing or malformed.
    Failed(IngestError),
}

impl LoadStatus {
    /// Diagnostic line for the two non-loaded states.
    pub fn failure_message(&self, entity: &str) -> Option<String> {
        match self {
            LoadStatus::Loaded => None,
            LoadStatus::UnknownEntity => Some(format!("unknown country '{entity}'")),
            LoadStatus::Failed(error) => Some(format!("{entity}: {error}")),
        }
    }
}

/// Result of loading one entity's export.
#[derive(Debug, Clone)]
pub struct EntityTable {
    /// Canonical entity name for known countries, the request verbatim
    /// otherwise.
    pub entity: String,
    /// Loaded rows; empty unless `status` is `Loaded`.
    pub frame: DataFrame,
    /// What happened.
    pub status: LoadStatus,
}

impl EntityTable {
    /// True when the file was read, even with zero rows.
    pub fn is_loaded(&self) -> bool {
        matches!(self.status, LoadStatus::Loaded)
    }

    /// Diagnostic for the failed and unknown states.
    pub fn diagnostic(&self) -> Option<String> {
        self.status.failure_message(&self.entity)
    }

    pub(crate) fn unknown(name: &str) -> Self {
        Self {
            entity: name.to_string(),
            frame: DataFrame::empty(),
            status: LoadStatus::UnknownEntity,
        }
    }

    fn failed(country: Country, error: IngestError) -> Self {
        Self {
            entity: country.as_str().to_string(),
            frame: DataFrame::empty(),
            status: LoadStatus::Failed(error),
        }
    }
}

/// Load one country's export, stamping every row with the country name.
///
/// Resolution follows the locator's candidate order; the first existing
/// file wins. Missing files and parse failures degrade to an empty table
/// with the diagnostic in the status.
pub fn load_country(country: Country, locator: &DataLocator) -> EntityTable {
    let filename = country.data_filename();
    let Some(path) = locator.resolve(filename) else {
        let error = IngestError::FileNotFound {
            filename: filename.to_string(),
            searched: locator.candidate_paths(filename),
        };
        warn!(country = %country, %error, "load failed");
        return EntityTable::failed(country, error);
    };
    match read_measurements(&path, country) {
        Ok(frame) => {
            debug!(
                country = %country,
                path = %path.display(),
                rows = frame.height(),
                "loaded export"
            );
            EntityTable {
                entity: country.as_str().to_string(),
                frame,
                status: LoadStatus::Loaded,
            }
        }
        Err(error) => {
            warn!(country = %country, path = %path.display(), %error, "load failed");
            EntityTable::failed(country, error)
        }
    }
}

/// Load by free-form name.
///
/// Names outside the country set are an ordinary absence, not an error:
/// the result is an empty table tagged `UnknownEntity`.
pub fn load_entity(name: &str, locator: &DataLocator) -> EntityTable {
    match name.parse::<Country>() {
        Ok(country) => load_country(country, locator),
        Err(_) => {
            warn!(entity = name, "unknown country requested");
            EntityTable::unknown(name)
        }
    }
}

/// Read a cleaned export: header row, timestamp parsing, numeric columns
/// normalized to f64, and the `Country` column stamped on.
fn read_measurements(path: &Path, country: Country) -> Result<DataFrame> {
    let parse_options = CsvParseOptions::default().with_try_parse_dates(true);
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .with_parse_options(parse_options)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.column(TIMESTAMP_COLUMN).is_err() {
        return Err(IngestError::MissingTimestamp {
            path: path.to_path_buf(),
        });
    }

    normalize_metric_columns(&mut df)?;

    let stamp = Series::new(
        COUNTRY_COLUMN.into(),
        vec![country.as_str(); df.height()],
    )
    .into_column();
    df.with_column(stamp)?;
    Ok(df)
}

/// Cast every numeric measurement column to f64 so tables from different
/// files stack without dtype conflicts.
fn normalize_metric_columns(df: &mut DataFrame) -> Result<()> {
    for name in df.get_column_names_owned() {
        if name.as_str() == TIMESTAMP_COLUMN {
            continue;
        }
        let column = df.column(name.as_str())?;
        if is_numeric_dtype(column.dtype()) && !matches!(column.dtype(), DataType::Float64) {
            let casted = column.cast(&DataType::Float64)?;
            df.with_column(casted)?;
        }
    }
    Ok(())
}
