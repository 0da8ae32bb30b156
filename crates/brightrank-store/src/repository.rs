//! Typed access to the application's stored documents.

use std::collections::BTreeMap;

use brightrank_core::{BrandProfile, HistoricalSnapshot, Report};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;
use crate::KeyValueStore;

/// Brand profile document.
pub const PROFILE_KEY: &str = "brightRankData";
/// Map of brand name to that brand's analysis snapshots, oldest first.
pub const HISTORY_KEY: &str = "brightRankHistory";
/// List of saved reports, oldest first.
pub const REPORTS_KEY: &str = "brightRankReports";

type HistoryMap = BTreeMap<String, Vec<HistoricalSnapshot>>;

pub struct AppRepository<S> {
    store: S,
}

impl<S: KeyValueStore> AppRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(value) = self.store.get(key)? else {
            return Ok(None);
        };
        serde_json::from_value(value)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            })
    }

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_value(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.store.put(key, &json)
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the profile cannot be read or is corrupt.
    pub fn load_profile(&self) -> Result<Option<BrandProfile>, StoreError> {
        self.load(PROFILE_KEY)
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the profile cannot be written.
    pub fn save_profile(&self, profile: &BrandProfile) -> Result<(), StoreError> {
        self.save(PROFILE_KEY, profile)
    }

    /// Snapshots recorded for `brand`, oldest first. Empty when none exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the history cannot be read or is corrupt.
    pub fn load_history(&self, brand: &str) -> Result<Vec<HistoricalSnapshot>, StoreError> {
        let mut all: HistoryMap = self.load(HISTORY_KEY)?.unwrap_or_default();
        Ok(all.remove(brand).unwrap_or_default())
    }

    /// Replaces the snapshots for `brand`, leaving other brands untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the history cannot be read back or written.
    pub fn save_history(
        &self,
        brand: &str,
        snapshots: &[HistoricalSnapshot],
    ) -> Result<(), StoreError> {
        let mut all: HistoryMap = self.load(HISTORY_KEY)?.unwrap_or_default();
        all.insert(brand.to_string(), snapshots.to_vec());
        self.save(HISTORY_KEY, &all)
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the report list cannot be read or is corrupt.
    pub fn load_reports(&self) -> Result<Vec<Report>, StoreError> {
        Ok(self.load(REPORTS_KEY)?.unwrap_or_default())
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the report list cannot be written.
    pub fn save_reports(&self, reports: &[Report]) -> Result<(), StoreError> {
        self.save(REPORTS_KEY, reports)
    }

    /// Appends `report` to the saved list and returns the new count.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the report list cannot be read or written.
    pub fn append_report(&self, report: Report) -> Result<usize, StoreError> {
        let mut reports = self.load_reports()?;
        reports.push(report);
        self.save_reports(&reports)?;
        Ok(reports.len())
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the report list cannot be read or is corrupt.
    pub fn find_report(&self, id: &str) -> Result<Option<Report>, StoreError> {
        Ok(self.load_reports()?.into_iter().find(|r| r.id == id))
    }
}

#[cfg(test)]
#[path = "repository_test.rs"]
mod tests;
