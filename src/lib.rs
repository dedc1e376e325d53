//! Widget State Library
//!
//! State containers behind a low-code widget kit: a generic data table
//! (column schema plus rows), a filter form (filter items plus current
//! selections), view tabs and a module registry. Rendering is left to the
//! host; it reads derived views such as
//! [`DataTableState::visible_columns`](state::DataTableState::visible_columns)
//! and [`FilterState::active_filters`](state::FilterState::active_filters) and
//! forwards user input to the mutators.

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod state;

pub use config::WidgetConfig;
pub use error::{Error, Result};
pub use state::{DataTableState, FilterState, ModulesState, TabsState};
