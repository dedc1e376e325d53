//! Module - Loadable Module Descriptors

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A module that the host can load by name
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModuleConfig {
    /// Registry key
    pub name: String,
    /// Route or import path the host resolves the module from
    pub path: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub meta: Map<String, Value>,
}

impl ModuleConfig {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            meta: Map::new(),
        }
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }
}
