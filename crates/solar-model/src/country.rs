//! Type-safe enumeration of the measured countries.
//!
//! Each country maps to exactly one cleaned measurement export. The set is
//! closed: a new station means a new variant here, not a discovery pass.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A country with a cleaned measurement export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Country {
    Benin,
    SierraLeone,
    Togo,
}

impl Country {
    /// All countries in canonical order (also the default aggregation order).
    pub const ALL: [Country; 3] = [Country::Benin, Country::SierraLeone, Country::Togo];

    /// Returns the display name, as stamped into the `Country` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Benin => "Benin",
            Country::SierraLeone => "Sierra Leone",
            Country::Togo => "Togo",
        }
    }

    /// Returns the filename of this country's cleaned export.
    pub fn data_filename(&self) -> &'static str {
        match self {
            Country::Benin => "benin_clean.csv",
            Country::SierraLeone => "sierraleone_clean.csv",
            Country::Togo => "togo_clean.csv",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Country {
    type Err = String;

    /// Parse a country name (case-insensitive, separators tolerated).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "BENIN" => Ok(Country::Benin),
            "SIERRA LEONE" | "SIERRA-LEONE" | "SIERRALEONE" => Ok(Country::SierraLeone),
            "TOGO" => Ok(Country::Togo),
            _ => Err(format!("Unknown country: {s}")),
        }
    }
}
