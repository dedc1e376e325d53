//! Tab - View Tab Descriptors

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn default_closable() -> bool {
    true
}

/// Represents one tab of a tabbed view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabItem {
    /// Unique identifier for the tab
    pub name: String,
    /// Display label
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Whether this tab can be closed
    #[serde(default = "default_closable")]
    pub closable: bool,
    /// Disabled tabs cannot be activated
    #[serde(default)]
    pub disabled: bool,
    /// Defer loading the tab body until first activation
    #[serde(default)]
    pub lazy: bool,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub props: Map<String, Value>,
}

impl TabItem {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            icon: None,
            closable: true,
            disabled: false,
            lazy: false,
            props: Map::new(),
        }
    }

    /// A tab that stays open, like a home page
    pub fn pinned(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            closable: false,
            ..Self::new(name, label)
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}
