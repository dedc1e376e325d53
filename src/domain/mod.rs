//! Domain - Pure Data Structures
//!
//! Definitions and records shared by the state stores. Dynamic values are
//! `serde_json::Value` so rows and extra attributes stay open-ended.

pub mod column;
pub mod filter;
pub mod module;
pub mod tab;
pub mod value;
pub mod widget_config;

pub use column::{ColumnDef, ColumnPatch, ColumnType, Formatter, Validator};
pub use filter::{FilterItem, FilterItemPatch, FilterType};
pub use module::ModuleConfig;
pub use tab::TabItem;
pub use value::{FilterValues, Row, SelectOption};
pub use widget_config::{DataTableConfig, FilterConfig, OverflowMode, ShowOverflow, TableHeight};
