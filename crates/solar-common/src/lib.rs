//! Shared utilities for the solar measurement crates.
//!
//! This crate provides the Polars `AnyValue` helpers used everywhere a
//! DataFrame is walked cell by cell.

pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use polars::{
    TIMESTAMP_FORMAT, any_to_datetime, any_to_f64, any_to_string, format_numeric,
    is_numeric_dtype, parse_f64,
};
