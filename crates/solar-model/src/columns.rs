//! Well-known column names of the cleaned measurement exports.
//!
//! The exports are schema-flexible: any of the metric columns may be absent
//! from a given file, and consumers must treat absence as an ordinary state.
//! Only `Timestamp` is mandatory; `Country` is stamped at load time.

/// Timestamp column every export must carry.
pub const TIMESTAMP_COLUMN: &str = "Timestamp";

/// Entity tag column added to every row when a file is loaded.
pub const COUNTRY_COLUMN: &str = "Country";

/// Measurement columns the exports are known to carry, in canonical order.
pub const KNOWN_METRICS: [&str; 8] = ["GHI", "DNI", "DHI", "Tamb", "TModA", "TModB", "RH", "WS"];

/// Default metric for cross-country ranking.
pub const DEFAULT_RANKING_METRIC: &str = "GHI";

/// Irradiance level above which a row counts as daytime, in W/m².
pub const DAYTIME_GHI_THRESHOLD: f64 = 50.0;

/// Returns the physical unit of a well-known metric.
pub fn metric_unit(metric: &str) -> Option<&'static str> {
    match metric {
        "GHI" | "DNI" | "DHI" => Some("W/m²"),
        "Tamb" | "TModA" | "TModB" => Some("°C"),
        "RH" => Some("%"),
        "WS" => Some("m/s"),
        _ => None,
    }
}

/// Returns the long name of a well-known metric.
pub fn metric_description(metric: &str) -> Option<&'static str> {
    match metric {
        "GHI" => Some("Global Horizontal Irradiance"),
        "DNI" => Some("Direct Normal Irradiance"),
        "DHI" => Some("Diffuse Horizontal Irradiance"),
        "Tamb" => Some("Ambient Temperature"),
        "TModA" => Some("Module A Temperature"),
        "TModB" => Some("Module B Temperature"),
        "RH" => Some("Relative Humidity"),
        "WS" => Some("Wind Speed"),
        _ => None,
    }
}
