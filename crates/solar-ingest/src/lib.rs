//! Measurement export loading and aggregation.
//!
//! The loading pipeline is: resolve the export path through an ordered
//! candidate list ([`DataLocator`]), read and normalize the CSV, stamp the
//! `Country` column, then optionally stack several countries into one
//! combined table. All of it degrades instead of raising: a failed load is
//! an empty table with a tagged status.
//!
//! [`DataStore`] wraps the whole thing behind per-key memoization for
//! front-ends that ask for the same table repeatedly.

pub mod cache;
pub mod combine;
pub mod error;
pub mod loader;
pub mod paths;
pub mod store;

pub use cache::TableCache;
pub use combine::{CombinedTable, EntityOutcome, combine_entity_tables, load_all_countries};
pub use error::{IngestError, Result};
pub use loader::{EntityTable, LoadStatus, load_country, load_entity};
pub use paths::DataLocator;
pub use store::DataStore;
