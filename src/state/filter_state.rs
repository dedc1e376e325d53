//! FilterState - Filter Controls and Current Selections
//!
//! Item definitions describe how a control renders; the value map holds what
//! is selected right now. The two are keyed by `field` but never
//! cross-checked, so a value may exist without an item and vice versa.

use serde_json::Value;
use tracing::{debug, trace};

use crate::domain::filter::{FilterItem, FilterItemPatch};
use crate::domain::value::{FilterValues, is_active_value};
use crate::domain::widget_config::FilterConfig;

/// State behind a generic filter form
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    items: Vec<FilterItem>,
    values: FilterValues,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<FilterItem>) -> Self {
        Self {
            items,
            values: FilterValues::new(),
        }
    }

    pub fn from_config(config: &FilterConfig) -> Self {
        Self::with_items(config.items.clone())
    }

    pub fn filter_items(&self) -> &[FilterItem] {
        &self.items
    }

    /// Append an item. Callers keep `field` unique.
    pub fn add_filter_item(&mut self, item: FilterItem) {
        debug!(field = %item.field, "add filter item");
        self.items.push(item);
    }

    pub fn remove_filter_item(&mut self, field: &str) {
        if let Some(pos) = self.items.iter().position(|i| i.field == field) {
            debug!(field, "remove filter item");
            self.items.remove(pos);
        } else {
            trace!(field, "remove filter item: not found");
        }
    }

    pub fn update_filter_item(&mut self, field: &str, patch: FilterItemPatch) {
        if let Some(item) = self.items.iter_mut().find(|i| i.field == field) {
            debug!(field, "update filter item");
            item.apply(patch);
        } else {
            trace!(field, "update filter item: not found");
        }
    }

    pub fn filter_item(&self, field: &str) -> Option<&FilterItem> {
        self.items.iter().find(|i| i.field == field)
    }

    /// Set or overwrite the selection for `field`
    pub fn set_filter_value(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        let field = field.into();
        debug!(field = %field, "set filter value");
        self.values.insert(field, value.into());
    }

    /// `None` when nothing was ever set; a stored null is `Some(&Value::Null)`.
    pub fn filter_value(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    pub fn set_all_filter_values(&mut self, values: &FilterValues) {
        debug!(count = values.len(), "set all filter values");
        self.values = values.clone();
    }

    /// Owned snapshot; changes to it never reach the store
    pub fn all_filter_values(&self) -> FilterValues {
        self.values.clone()
    }

    /// Drop every entry, leaving an empty map
    pub fn reset_filter_values(&mut self) {
        debug!("reset filter values");
        self.values.clear();
    }

    /// Copy each item's default value into the map, keeping other entries
    pub fn apply_item_defaults(&mut self) {
        for item in &self.items {
            if let Some(value) = &item.value {
                self.values.insert(item.field.clone(), value.clone());
            }
        }
        debug!(count = self.values.len(), "apply filter defaults");
    }

    /// Entries whose value is neither null nor the empty string
    pub fn active_filters(&self) -> FilterValues {
        self.values
            .iter()
            .filter(|(_, value)| is_active_value(value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}
