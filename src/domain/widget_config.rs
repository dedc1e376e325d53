//! Widget Config - Declarative Table and Filter Settings

use serde::{Deserialize, Serialize};

use crate::domain::column::ColumnDef;
use crate::domain::filter::FilterItem;
use crate::domain::value::Row;

/// Table height: a pixel count or any CSS length (`"60vh"`, `"auto"`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableHeight {
    Pixels(f64),
    Css(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowMode {
    Title,
    Tooltip,
    Ellipsis,
}

/// How overflowing cell text is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShowOverflow {
    Enabled(bool),
    Mode(OverflowMode),
}

/// Data table settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataTableConfig {
    pub columns: Vec<ColumnDef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<Row>,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<TableHeight>,
    pub stripe: bool,
    pub border: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_overflow: Option<ShowOverflow>,
}

/// Filter form settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterConfig {
    pub items: Vec<FilterItem>,
    /// Lay controls out on one line
    pub inline: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_width: Option<String>,
    pub show_reset: bool,
    pub show_search: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            inline: true,
            label_width: None,
            show_reset: true,
            show_search: true,
        }
    }
}
