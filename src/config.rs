//! Config - Loading and Saving Widget Configuration
//!
//! A [`WidgetConfig`] bundles the declarative settings a host needs to build
//! its stores. Files are TOML or JSON, picked by extension.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use tracing::{debug, info};

use crate::domain::module::ModuleConfig;
use crate::domain::tab::TabItem;
use crate::domain::widget_config::{DataTableConfig, FilterConfig};
use crate::error::{IoSnafu, Result, UnsupportedFormatSnafu};
use crate::state::{DataTableState, FilterState, ModulesState, TabsState};

/// Declarative settings for a page of widgets
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<DataTableConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tabs: Vec<TabItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub modules: Vec<ModuleConfig>,
}

enum Format {
    Toml,
    Json,
}

fn format_of(path: &Path) -> Result<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => UnsupportedFormatSnafu { path }.fail(),
    }
}

impl WidgetConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// TOML has no null, so rows or extra attributes holding null fail here.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a `.toml` or `.json` config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = format_of(path)?;
        let content = fs::read_to_string(path).context(IoSnafu { path })?;

        let config = match format {
            Format::Toml => Self::from_toml_str(&content)?,
            Format::Json => Self::from_json_str(&content)?,
        };
        info!(path = %path.display(), "loaded widget config");
        Ok(config)
    }

    /// Save as `.toml` or `.json`, picked by the path's extension
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = match format_of(path)? {
            Format::Toml => self.to_toml_string()?,
            Format::Json => self.to_json_string()?,
        };
        fs::write(path, content).context(IoSnafu { path })?;
        debug!(path = %path.display(), "saved widget config");
        Ok(())
    }

    /// Table store seeded from `table`, or an empty one
    pub fn data_table_state(&self) -> DataTableState {
        self.table
            .as_ref()
            .map(DataTableState::from_config)
            .unwrap_or_default()
    }

    /// Filter store seeded from `filter`, with item defaults applied
    pub fn filter_state(&self) -> FilterState {
        let mut state = self
            .filter
            .as_ref()
            .map(FilterState::from_config)
            .unwrap_or_default();
        state.apply_item_defaults();
        state
    }

    pub fn tabs_state(&self) -> TabsState {
        TabsState::with_tabs(self.tabs.iter().cloned())
    }

    pub fn modules_state(&self) -> ModulesState {
        let mut state = ModulesState::new();
        for module in &self.modules {
            state.register_module(module.clone());
        }
        state
    }
}
