//! CLI library components for the solar measurement explorer.

pub mod logging;
pub mod render;
pub mod types;
