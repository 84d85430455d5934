//! Session-scoped state: favorites plus the current lookup
//!
//! One [`SessionState`] lives for one run of the interactive binary. It is
//! passed `&mut` into each interaction handler; nothing here touches disk and
//! everything is dropped (or explicitly `reset`) when the session ends.

use tracing::debug;

use crate::Result;
use crate::error::TripMateError;
use crate::models::FavoriteEntry;

/// Ordered in-memory list of saved favorites
///
/// Append and delete-by-position only. Duplicate (city, attraction) pairs
/// are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesStore {
    entries: Vec<FavoriteEntry>,
}

impl FavoritesStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a favorite at the end of the list
    pub fn add(&mut self, city: impl Into<String>, attraction: impl Into<String>) {
        self.entries.push(FavoriteEntry::new(city, attraction));
    }

    /// Remove and return the entry at `index`
    ///
    /// Later entries shift down by one; callers must re-fetch indices after
    /// each deletion. An out-of-bounds index is an error, never a panic.
    pub fn remove_at(&mut self, index: usize) -> Result<FavoriteEntry> {
        if index >= self.entries.len() {
            return Err(TripMateError::InvalidIndex {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// Read-only view of the current list, in save order
    #[must_use]
    pub fn list(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    /// Number of saved favorites
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Per-session application state
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Saved favorites, in save order
    pub favorites: FavoritesStore,
    /// Display name of the last successfully resolved city
    pub current_city: Option<String>,
    /// Attraction sample shown for the last successful lookup
    pub current_sample: Vec<String>,
}

impl SessionState {
    /// Create a fresh, empty session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful lookup: the resolved city and its sample
    pub fn record_lookup(&mut self, city: String, sample: Vec<String>) {
        debug!("Recording lookup for '{city}' with {} attractions", sample.len());
        self.current_city = Some(city);
        self.current_sample = sample;
    }

    /// Save the sample entry at `index` for the current city
    ///
    /// Only valid after a successful lookup; the selectable attractions are
    /// exactly the ones currently shown.
    pub fn save_from_sample(&mut self, index: usize) -> Result<FavoriteEntry> {
        let Some(city) = self.current_city.clone() else {
            return Err(TripMateError::InvalidIndex { index, len: 0 });
        };

        let attraction =
            self.current_sample
                .get(index)
                .cloned()
                .ok_or(TripMateError::InvalidIndex {
                    index,
                    len: self.current_sample.len(),
                })?;

        self.favorites.add(city.clone(), attraction.clone());
        Ok(FavoriteEntry::new(city, attraction))
    }

    /// Clear the whole session (end-of-session lifecycle)
    pub fn reset(&mut self) {
        self.favorites.clear();
        self.current_city = None;
        self.current_sample.clear();
    }
}
