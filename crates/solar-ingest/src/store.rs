//! Cache-owning facade over loading and aggregation.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use solar_model::Country;

use crate::cache::TableCache;
use crate::combine::{CombinedTable, combine_entity_tables};
use crate::loader::{EntityTable, load_country};
use crate::paths::DataLocator;

/// Entry point for front-ends: loads on demand, memoizes per key, and
/// counts the file reads it performs.
///
/// Per-country tables and combined tables are cached independently, so a
/// combined view reuses whatever per-country loads already happened and a
/// given export is read at most once per process.
#[derive(Debug)]
pub struct DataStore {
    locator: DataLocator,
    countries: TableCache<Country, EntityTable>,
    combined: TableCache<Vec<Country>, CombinedTable>,
    file_reads: AtomicUsize,
}

impl DataStore {
    /// Store resolving exports through the given locator.
    #[must_use]
    pub fn new(locator: DataLocator) -> Self {
        Self {
            locator,
            countries: TableCache::new(),
            combined: TableCache::new(),
            file_reads: AtomicUsize::new(0),
        }
    }

    /// Locator backing this store.
    pub fn locator(&self) -> &DataLocator {
        &self.locator
    }

    /// One country's table, loading the export on first request.
    pub fn country(&self, country: Country) -> Arc<EntityTable> {
        self.countries.get_or_compute(country, || {
            self.file_reads.fetch_add(1, Ordering::Relaxed);
            load_country(country, &self.locator)
        })
    }

    /// Free-form entity lookup. Unknown names degrade to an empty table
    /// without touching the caches or the filesystem.
    pub fn entity(&self, name: &str) -> Arc<EntityTable> {
        match name.parse::<Country>() {
            Ok(country) => self.country(country),
            Err(_) => Arc::new(EntityTable::unknown(name)),
        }
    }

    /// Combined table over the given countries, memoized per list.
    pub fn combined(&self, countries: &[Country]) -> Arc<CombinedTable> {
        self.combined.get_or_compute(countries.to_vec(), || {
            let tables: Vec<Arc<EntityTable>> = countries
                .iter()
                .map(|&country| self.country(country))
                .collect();
            combine_entity_tables(tables.iter().map(Arc::as_ref))
        })
    }

    /// Combined table over every known country.
    pub fn combined_default(&self) -> Arc<CombinedTable> {
        self.combined(&Country::ALL)
    }

    /// Number of export reads performed so far. Repeat requests served
    /// from the caches leave this untouched.
    pub fn file_reads(&self) -> usize {
        self.file_reads.load(Ordering::Relaxed)
    }
}
