//! Non-empty, id-unique list of selectable characters.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{CatalogError, SelectableItem};

/// The ordered list of items a carousel browses.
///
/// A roster is never empty and never holds two items with the same id, so
/// modulo arithmetic over its length is always well defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    items: Vec<SelectableItem>,
}

impl Roster {
    /// Builds a roster from the given items.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if `items` is empty or contains duplicate ids.
    #[instrument(skip(items), fields(count = items.len()))]
    pub fn new(items: Vec<SelectableItem>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::new("Character roster cannot be empty"));
        }

        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id().as_str()) {
                return Err(CatalogError::new(format!(
                    "Duplicate character id: {}",
                    item.id()
                )));
            }
        }

        debug!(count = items.len(), "Roster built");
        Ok(Self { items })
    }

    /// Wraps items known to be non-empty and unique, such as built-in data.
    pub(crate) fn trusted(items: Vec<SelectableItem>) -> Self {
        debug_assert!(!items.is_empty());
        Self { items }
    }

    /// Number of items; always at least one.
    #[instrument(skip(self))]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[instrument(skip(self))]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the item at `index` wrapped modulo the roster length.
    #[instrument(skip(self))]
    pub fn wrapped(&self, index: usize) -> &SelectableItem {
        &self.items[index % self.items.len()]
    }

    /// Returns the item at `index`, if in range.
    #[instrument(skip(self))]
    pub fn get(&self, index: usize) -> Option<&SelectableItem> {
        self.items.get(index)
    }

    /// Looks up an item by id.
    #[instrument(skip(self))]
    pub fn find(&self, id: &str) -> Option<&SelectableItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Returns all items in display order.
    #[instrument(skip(self))]
    pub fn items(&self) -> &[SelectableItem] {
        &self.items
    }
}
