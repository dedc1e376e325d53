//! Value - Dynamic Records and Shared Value Types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One tabular entry, keyed by field name. Keys keep insertion order.
pub type Row = Map<String, Value>;

/// Current filter selections keyed by filter field name.
pub type FilterValues = Map<String, Value>;

/// A label/value pair offered by select-like columns and filter controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Display label
    pub label: String,
    /// Value stored when the option is picked
    pub value: Value,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Shallow merge: keys in `patch` override, all other keys of `base` are kept.
pub fn merge_row(base: &Row, patch: Row) -> Row {
    let mut merged = base.clone();
    for (key, value) in patch {
        merged.insert(key, value);
    }
    merged
}

/// Plain text for a cell value. Strings are unquoted, null renders empty.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Whether a filter value counts as a real selection (not null, not `""`).
pub fn is_active_value(value: &Value) -> bool {
    !matches!(value, Value::Null) && value.as_str() != Some("")
}
