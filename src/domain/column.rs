//! Column - Tabular Field Definitions

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::value::{Row, SelectOption, display_value};

/// Editor/renderer kind of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Text,
    Number,
    Date,
    Select,
    Checkbox,
    Custom,
}

type FormatFn = dyn Fn(&Value, &Row) -> String + Send + Sync;
type ValidateFn = dyn Fn(&Value) -> Result<(), String> + Send + Sync;

/// Cell formatter callback: `(cell value, whole row) -> display text`
#[derive(Clone)]
pub struct Formatter(Arc<FormatFn>);

impl Formatter {
    pub fn new(f: impl Fn(&Value, &Row) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, value: &Value, row: &Row) -> String {
        (self.0)(value, row)
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Formatter(..)")
    }
}

/// Two formatters are equal only when they share the same closure.
impl PartialEq for Formatter {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Cell validator callback: `Err(message)` rejects the value
#[derive(Clone)]
pub struct Validator(Arc<ValidateFn>);

impl Validator {
    pub fn new(f: impl Fn(&Value) -> Result<(), String> + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, value: &Value) -> Result<(), String> {
        (self.0)(value)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validator(..)")
    }
}

impl PartialEq for Validator {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Schema entry for one displayable/editable field of a table
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    /// Unique key within a table
    pub field: String,
    /// Header label
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub column_type: Option<ColumnType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// `None` counts as visible
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sortable: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(skip)]
    pub formatter: Option<Formatter>,
    #[serde(skip)]
    pub validator: Option<Validator>,
    /// Arbitrary extra attributes carried alongside the known ones
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ColumnDef {
    pub fn new(field: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_type(mut self, column_type: ColumnType) -> Self {
        self.column_type = Some(column_type);
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_formatter(
        mut self,
        f: impl Fn(&Value, &Row) -> String + Send + Sync + 'static,
    ) -> Self {
        self.formatter = Some(Formatter::new(f));
        self
    }

    pub fn with_validator(
        mut self,
        f: impl Fn(&Value) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.validator = Some(Validator::new(f));
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Only an explicit `visible = false` hides a column
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }

    /// Display text for this column's cell in `row`.
    ///
    /// Uses the formatter when set, otherwise the plain value text. A row
    /// without the field is formatted as null.
    pub fn format(&self, row: &Row) -> String {
        let value = row.get(&self.field).unwrap_or(&Value::Null);
        match &self.formatter {
            Some(formatter) => formatter.call(value, row),
            None => display_value(value),
        }
    }

    /// Run the validator, if any, against a candidate cell value
    pub fn validate(&self, value: &Value) -> Result<(), String> {
        match &self.validator {
            Some(validator) => validator.call(value),
            None => Ok(()),
        }
    }

    /// Shallow merge: every attribute set in `patch` overwrites, the rest stay.
    pub fn apply(&mut self, patch: ColumnPatch) {
        if let Some(field) = patch.field {
            self.field = field;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if patch.column_type.is_some() {
            self.column_type = patch.column_type;
        }
        if patch.width.is_some() {
            self.width = patch.width;
        }
        if patch.visible.is_some() {
            self.visible = patch.visible;
        }
        if patch.editable.is_some() {
            self.editable = patch.editable;
        }
        if patch.sortable.is_some() {
            self.sortable = patch.sortable;
        }
        if let Some(options) = patch.options {
            self.options = options;
        }
        if patch.formatter.is_some() {
            self.formatter = patch.formatter;
        }
        if patch.validator.is_some() {
            self.validator = patch.validator;
        }
        for (key, value) in patch.extra {
            self.extra.insert(key, value);
        }
    }
}

/// Partial column update; `None` leaves the attribute unchanged
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnPatch {
    pub field: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub column_type: Option<ColumnType>,
    pub width: Option<f64>,
    pub visible: Option<bool>,
    pub editable: Option<bool>,
    pub sortable: Option<bool>,
    pub options: Option<Vec<SelectOption>>,
    #[serde(skip)]
    pub formatter: Option<Formatter>,
    #[serde(skip)]
    pub validator: Option<Validator>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
