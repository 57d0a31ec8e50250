//! Application state container and category operations.
//!
//! [`AppState`] is constructed once at application start and passed to
//! whatever needs it; there are no module-level globals. It owns the three
//! reactive stores and the in-memory category operations. Every list
//! mutation replaces the category store's value wholesale, so store
//! observers always fire with the full updated list.

use chrono::{DateTime, Utc};
use thiserror::Error;

use tally_core::{Category, CategoryId, CategoryName, IconKey, TimeInterval, ValidationError};

use crate::store::Store;

/// Errors from category operations.
#[derive(Debug, Error)]
pub enum StateError {
    /// No category with this id is in the list.
    #[error("unknown category: {id}")]
    UnknownCategory { id: CategoryId },

    /// A field value failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// The application's reactive state.
///
/// The three cells are independently settable; nothing here stops
/// `current_category` from pointing at a category absent from `categories`,
/// or the interval cell from being set on its own. The category operations
/// below keep them coherent for callers that stick to them.
#[derive(Debug, Default)]
pub struct AppState {
    /// All categories, archived ones included.
    pub categories: Store<Vec<Category>>,

    /// The category selected for active tracking, if any.
    pub current_category: Store<Option<Category>>,

    /// The open tracking session, if one is running.
    pub current_interval: Store<Option<TimeInterval>>,
}

impl AppState {
    /// Creates the container with an empty list and nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fresh category and returns its id.
    pub fn add_category(
        &mut self,
        name: impl Into<String>,
        icon: IconKey,
    ) -> Result<CategoryId, StateError> {
        let category = Category::new(name, icon)?;
        let id = category.uuid;

        let mut list = self.categories.get().clone();
        list.push(category);
        self.categories.set(list);

        tracing::debug!(%id, "category added");
        Ok(id)
    }

    /// Renames a category.
    pub fn rename_category(
        &mut self,
        id: CategoryId,
        new_name: impl Into<String>,
    ) -> Result<(), StateError> {
        let name = CategoryName::new(new_name)?;
        self.edit_category(id, |category| category.name = name)
    }

    /// Sets a category's advisory daily target, in seconds.
    pub fn set_daily_target(&mut self, id: CategoryId, secs: i64) -> Result<(), StateError> {
        self.edit_category(id, |category| category.daily_target_secs = secs)
    }

    /// Soft-deletes a category. Its history is kept and it can be restored.
    pub fn archive_category(&mut self, id: CategoryId) -> Result<(), StateError> {
        self.edit_category(id, |category| category.archived = true)
    }

    /// Brings an archived category back into active selection.
    pub fn restore_category(&mut self, id: CategoryId) -> Result<(), StateError> {
        self.edit_category(id, |category| category.archived = false)
    }

    /// Removes a category outright.
    ///
    /// If it was the selected one, the `current_category` cell is cleared
    /// as well so it does not dangle.
    pub fn delete_category(&mut self, id: CategoryId) -> Result<(), StateError> {
        let mut list = self.categories.get().clone();
        let before = list.len();
        list.retain(|category| category.uuid != id);
        if list.len() == before {
            return Err(StateError::UnknownCategory { id });
        }
        self.categories.set(list);

        if self
            .current_category
            .get()
            .as_ref()
            .is_some_and(|current| current.uuid == id)
        {
            self.current_category.set(None);
        }

        tracing::debug!(%id, "category deleted");
        Ok(())
    }

    /// Selects the category to track.
    ///
    /// Clears every other category's `current` flag first, so at most one
    /// category is current at any time, then mirrors the chosen category
    /// into the `current_category` cell.
    pub fn set_current_category(&mut self, id: CategoryId) -> Result<(), StateError> {
        let mut list = self.categories.get().clone();
        if !list.iter().any(|category| category.uuid == id) {
            return Err(StateError::UnknownCategory { id });
        }
        for category in &mut list {
            category.current = category.uuid == id;
        }
        self.categories.set(list);

        let chosen = self
            .categories
            .get()
            .iter()
            .find(|category| category.uuid == id)
            .cloned();
        self.current_category.set(chosen);

        tracing::debug!(%id, "current category changed");
        Ok(())
    }

    /// Selects a category and opens a tracking interval at `now`.
    pub fn start_tracking(&mut self, id: CategoryId, now: DateTime<Utc>) -> Result<(), StateError> {
        self.set_current_category(id)?;
        self.current_interval.set(Some(TimeInterval::starting_at(now)));
        tracing::debug!(%id, start = %now, "tracking started");
        Ok(())
    }

    /// Closes the open interval, accruing the elapsed seconds into the
    /// current category's time.
    ///
    /// Returns the accrued seconds, or `None` when no interval was open.
    /// The current category stays selected.
    pub fn stop_tracking(&mut self, now: DateTime<Utc>) -> Option<i64> {
        let interval = (*self.current_interval.get())?;
        let elapsed = interval.elapsed_secs(now);

        if let Some(current) = self.current_category.get().clone() {
            let id = current.uuid;
            let accrued = u64::try_from(elapsed).unwrap_or(0);
            if self.edit_category(id, |category| category.record_time(accrued)).is_ok() {
                // Refresh the mirror so it carries the accrued time.
                let updated = self
                    .categories
                    .get()
                    .iter()
                    .find(|category| category.uuid == id)
                    .cloned();
                self.current_category.set(updated);
            } else {
                tracing::warn!(%id, "current category missing from list, time not accrued");
            }
        }

        self.current_interval.set(None);
        tracing::debug!(elapsed, "tracking stopped");
        Some(elapsed)
    }

    /// Categories available for selection.
    #[must_use]
    pub fn active_categories(&self) -> Vec<Category> {
        self.categories
            .get()
            .iter()
            .filter(|category| !category.archived)
            .cloned()
            .collect()
    }

    /// Archived categories, history intact.
    #[must_use]
    pub fn archived_categories(&self) -> Vec<Category> {
        self.categories
            .get()
            .iter()
            .filter(|category| category.archived)
            .cloned()
            .collect()
    }

    fn edit_category(
        &mut self,
        id: CategoryId,
        edit: impl FnOnce(&mut Category),
    ) -> Result<(), StateError> {
        let mut list = self.categories.get().clone();
        let category = list
            .iter_mut()
            .find(|category| category.uuid == id)
            .ok_or(StateError::UnknownCategory { id })?;
        edit(category);
        self.categories.set(list);
        Ok(())
    }
}
