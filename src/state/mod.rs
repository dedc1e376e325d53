//! State - Widget State Stores
//!
//! Each store is an independent leaf owned by a single caller. Hosts read
//! the derived views and feed user input back through the mutators; they
//! never touch the underlying containers directly.

pub mod data_table_state;
pub mod filter_state;
pub mod modules_state;
pub mod tabs_state;

pub use data_table_state::DataTableState;
pub use filter_state::FilterState;
pub use modules_state::ModulesState;
pub use tabs_state::TabsState;
