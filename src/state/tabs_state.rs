//! TabsState - Tab Navigation State

use tracing::{debug, warn};

use crate::domain::tab::TabItem;

/// State for tab navigation
#[derive(Debug, Clone, Default)]
pub struct TabsState {
    /// Open tabs in display order
    tabs: Vec<TabItem>,
    /// Name of the active tab
    active: Option<String>,
}

impl TabsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open tabs from a list; the first enabled tab becomes active
    pub fn with_tabs(tabs: impl IntoIterator<Item = TabItem>) -> Self {
        let mut state = Self::default();
        for tab in tabs {
            state.add_tab(tab);
        }
        state
    }

    pub fn tabs(&self) -> &[TabItem] {
        &self.tabs
    }

    pub fn tab(&self, name: &str) -> Option<&TabItem> {
        self.tabs.iter().find(|t| t.name == name)
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Get the active tab
    pub fn active_tab(&self) -> Option<&TabItem> {
        let active = self.active.as_deref()?;
        self.tab(active)
    }

    /// Add a tab unless one with the same name is already open
    pub fn add_tab(&mut self, tab: TabItem) {
        if self.tab(&tab.name).is_some() {
            debug!(name = %tab.name, "add tab: already open");
            return;
        }

        if self.active.is_none() && !tab.disabled {
            self.active = Some(tab.name.clone());
        }
        debug!(name = %tab.name, "add tab");
        self.tabs.push(tab);
    }

    /// Activate a tab (from a header click). Unknown or disabled tabs are ignored.
    pub fn set_active(&mut self, name: &str) {
        match self.tab(name).map(|t| t.disabled) {
            Some(false) => self.active = Some(name.to_string()),
            Some(true) => debug!(name, "set active: tab disabled"),
            None => debug!(name, "set active: no such tab"),
        }
    }

    /// Close a tab by name
    pub fn close_tab(&mut self, name: &str) {
        let Some(pos) = self.tabs.iter().position(|t| t.name == name) else {
            return;
        };

        // Pinned tabs stay open
        if !self.tabs[pos].closable {
            warn!(name, "close tab: not closable");
            return;
        }

        // If closing the active tab, switch to the nearest enabled one before, then after
        if self.active.as_deref() == Some(name) {
            let before = self.tabs[..pos].iter().rev();
            let after = self.tabs[pos + 1..].iter();
            self.active = before
                .chain(after)
                .find(|t| !t.disabled)
                .map(|t| t.name.clone());
        }

        self.tabs.remove(pos);
        debug!(name, active = ?self.active, "close tab");
    }
}
