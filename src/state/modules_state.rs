//! ModulesState - Registry of Loadable Modules

use hashlink::LinkedHashMap;
use tracing::{debug, trace};

use crate::domain::module::ModuleConfig;

/// Modules keyed by name, iterated in registration order
#[derive(Debug, Clone, Default)]
pub struct ModulesState {
    modules: LinkedHashMap<String, ModuleConfig>,
    loading: bool,
    error: Option<String>,
}

impl ModulesState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module. Re-registering a name replaces its config but keeps
    /// its original position.
    pub fn register_module(&mut self, config: ModuleConfig) {
        if let Some(existing) = self.modules.get_mut(&config.name) {
            debug!(name = %config.name, "replace module");
            *existing = config;
        } else {
            debug!(name = %config.name, path = %config.path, "register module");
            self.modules.insert(config.name.clone(), config);
        }
    }

    pub fn unregister_module(&mut self, name: &str) {
        if self.modules.remove(name).is_some() {
            debug!(name, "unregister module");
        } else {
            trace!(name, "unregister module: not found");
        }
    }

    pub fn module(&self, name: &str) -> Option<&ModuleConfig> {
        self.modules.get(name)
    }

    pub fn all_modules(&self) -> Vec<&ModuleConfig> {
        self.modules.values().collect()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn clear_modules(&mut self) {
        self.modules.clear();
        debug!("clear modules");
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
