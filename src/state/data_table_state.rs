//! DataTableState - Column Schema and Row Data for a Table
//!
//! Owns an ordered list of column definitions and an ordered list of rows.
//! Every mutator is synchronous; `visible_columns` is computed on read.

use tracing::{debug, trace, warn};

use crate::domain::column::{ColumnDef, ColumnPatch};
use crate::domain::value::{Row, merge_row};
use crate::domain::widget_config::DataTableConfig;
use crate::error::{Result, RowOutOfRangeSnafu};

/// State behind a generic data table
#[derive(Debug, Clone, Default)]
pub struct DataTableState {
    columns: Vec<ColumnDef>,
    rows: Vec<Row>,
    loading: bool,
    selected_rows: Vec<Row>,
}

impl DataTableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_columns(columns: Vec<ColumnDef>) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    /// Seed columns, rows and loading flag from declarative settings
    pub fn from_config(config: &DataTableConfig) -> Self {
        Self {
            columns: config.columns.clone(),
            rows: config.data.clone(),
            loading: config.loading,
            selected_rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn rows_len(&self) -> usize {
        self.rows.len()
    }

    /// Append a column. Callers keep `field` unique.
    pub fn add_column(&mut self, column: ColumnDef) {
        debug!(field = %column.field, "add column");
        self.columns.push(column);
    }

    /// Remove the first column with `field`; no-op when absent
    pub fn remove_column(&mut self, field: &str) {
        if let Some(pos) = self.columns.iter().position(|c| c.field == field) {
            debug!(field, "remove column");
            self.columns.remove(pos);
        } else {
            trace!(field, "remove column: not found");
        }
    }

    /// Merge `patch` into the first column with `field`; no-op when absent
    pub fn update_column(&mut self, field: &str, patch: ColumnPatch) {
        if let Some(column) = self.columns.iter_mut().find(|c| c.field == field) {
            debug!(field, "update column");
            column.apply(patch);
        } else {
            trace!(field, "update column: not found");
        }
    }

    pub fn column(&self, field: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.field == field)
    }

    /// Columns not explicitly hidden, in definition order
    pub fn visible_columns(&self) -> Vec<&ColumnDef> {
        self.columns.iter().filter(|c| c.is_visible()).collect()
    }

    /// Replace every row
    pub fn set_data(&mut self, rows: Vec<Row>) {
        debug!(rows = rows.len(), "set data");
        self.rows = rows;
    }

    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
        debug!(rows = self.rows.len(), "add row");
    }

    /// Remove the row at `index`; out-of-range indices are ignored
    pub fn remove_row(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
            debug!(index, "remove row");
        } else {
            trace!(index, len = self.rows.len(), "remove row: out of range");
        }
    }

    /// Shallow-merge `patch` into the row at `index`.
    ///
    /// Keys in `patch` override, other keys are preserved. An index past the
    /// end is rejected with [`Error::RowOutOfRange`](crate::error::Error) and
    /// the rows are left untouched.
    pub fn update_row(&mut self, index: usize, patch: Row) -> Result<()> {
        let len = self.rows.len();
        let Some(row) = self.rows.get_mut(index) else {
            warn!(index, len, "update row: out of range");
            return RowOutOfRangeSnafu { index, len }.fail();
        };

        *row = merge_row(row, patch);
        debug!(index, "update row");
        Ok(())
    }

    pub fn clear_data(&mut self) {
        self.rows.clear();
        debug!("clear data");
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn selected_rows(&self) -> &[Row] {
        &self.selected_rows
    }

    pub fn set_selected_rows(&mut self, rows: Vec<Row>) {
        debug!(selected = rows.len(), "set selection");
        self.selected_rows = rows;
    }

    pub fn clear_selection(&mut self) {
        self.selected_rows.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::column::ColumnType;
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn make_row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            other => panic!("row fixture must be an object, got {other}"),
        }
    }

    fn fields(columns: &[&ColumnDef]) -> Vec<String> {
        columns.iter().map(|c| c.field.clone()).collect()
    }

    fn column_fields(state: &DataTableState) -> Vec<&str> {
        state.columns().iter().map(|c| c.field.as_str()).collect()
    }

    #[test]
    fn add_remove_replay_keeps_first_added_order() {
        let keys = ["a", "b", "c", "d", "e", "f"];

        // Every subset of keys to remove, interleaved with the adds
        for mask in 0u32..(1 << keys.len()) {
            let mut state = DataTableState::new();
            let mut expected: Vec<&str> = Vec::new();

            for (i, key) in keys.into_iter().enumerate() {
                state.add_column(ColumnDef::new(key, key.to_uppercase()));
                expected.push(key);

                // Drop the previously added key once the next one is in
                if i > 0 && mask & (1 << (i - 1)) != 0 {
                    let prev = keys[i - 1];
                    state.remove_column(prev);
                    expected.retain(|k| *k != prev);
                }
            }
            if mask & (1 << (keys.len() - 1)) != 0 {
                let last = keys[keys.len() - 1];
                state.remove_column(last);
                expected.retain(|k| *k != last);
            }

            assert_eq!(column_fields(&state), expected, "removal mask {mask:06b}");
        }
    }

    #[test]
    fn removing_then_readding_moves_key_to_end() {
        let mut state = DataTableState::new();
        for field in ["a", "b", "c"] {
            state.add_column(ColumnDef::new(field, field));
        }
        state.remove_column("a");
        state.add_column(ColumnDef::new("a", "a"));

        assert_eq!(column_fields(&state), vec!["b", "c", "a"]);
    }

    #[test]
    fn remove_missing_column_is_noop() {
        let mut state = DataTableState::with_columns(vec![ColumnDef::new("a", "A")]);
        state.remove_column("zzz");
        assert_eq!(column_fields(&state), vec!["a"]);
    }

    #[test]
    fn remove_column_takes_first_match_only() {
        let mut state = DataTableState::new();
        state.add_column(ColumnDef::new("dup", "First"));
        state.add_column(ColumnDef::new("dup", "Second"));
        state.remove_column("dup");

        assert_eq!(state.columns().len(), 1);
        assert_eq!(state.columns()[0].title, "Second");
    }

    #[test]
    fn field_keys_stay_unique_under_caller_discipline() {
        let mut state = DataTableState::new();
        for field in ["id", "name", "qty"] {
            if state.column(field).is_none() {
                state.add_column(ColumnDef::new(field, field));
            }
        }
        // Re-adding an existing key is skipped by the caller
        if state.column("name").is_none() {
            state.add_column(ColumnDef::new("name", "Name again"));
        }

        let mut keys = column_fields(&state);
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn update_then_get_reflects_patch() {
        let original = ColumnDef::new("qty", "Quantity")
            .with_type(ColumnType::Number)
            .with_width(80.0);
        let mut state = DataTableState::with_columns(vec![original.clone()]);

        state.update_column(
            "qty",
            ColumnPatch {
                width: Some(100.0),
                editable: Some(true),
                ..Default::default()
            },
        );

        let mut expected = original;
        expected.width = Some(100.0);
        expected.editable = Some(true);
        assert_eq!(state.column("qty"), Some(&expected));
    }

    #[test]
    fn update_missing_column_is_noop() {
        let mut state = DataTableState::with_columns(vec![ColumnDef::new("a", "A")]);
        let before = state.columns().to_vec();
        state.update_column(
            "b",
            ColumnPatch {
                title: Some("B".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(state.columns(), before.as_slice());
        assert!(state.column("b").is_none());
    }

    #[test]
    fn visible_columns_exclude_only_explicit_false() {
        let state = DataTableState::with_columns(vec![
            ColumnDef::new("a", "A"),
            ColumnDef::new("b", "B").with_visible(false),
            ColumnDef::new("c", "C").with_visible(true),
        ]);

        assert_eq!(fields(&state.visible_columns()), vec!["a", "c"]);
    }

    #[test]
    fn visible_columns_follow_updates() {
        let mut state = DataTableState::with_columns(vec![
            ColumnDef::new("a", "A"),
            ColumnDef::new("b", "B"),
        ]);
        state.update_column(
            "a",
            ColumnPatch {
                visible: Some(false),
                ..Default::default()
            },
        );
        assert_eq!(fields(&state.visible_columns()), vec!["b"]);

        state.update_column(
            "a",
            ColumnPatch {
                visible: Some(true),
                ..Default::default()
            },
        );
        assert_eq!(fields(&state.visible_columns()), vec!["a", "b"]);
    }

    #[test]
    fn remove_row_out_of_range_is_noop() {
        let mut state = DataTableState::new();
        state.remove_row(0);
        assert_eq!(state.rows_len(), 0);

        state.set_data(vec![make_row(json!({"id": 1})), make_row(json!({"id": 2}))]);
        state.remove_row(2);
        state.remove_row(usize::MAX);
        assert_eq!(state.rows_len(), 2);

        state.remove_row(0);
        assert_eq!(state.rows(), &[make_row(json!({"id": 2}))]);
    }

    #[test]
    fn update_row_merges_shallowly() {
        let mut state = DataTableState::new();
        state.add_row(make_row(json!({"id": 1, "name": "pump", "tags": ["a"]})));

        state
            .update_row(0, make_row(json!({"name": "valve", "tags": ["b"], "new": 0})))
            .expect("in range");

        assert_eq!(
            state.row(0),
            Some(&make_row(json!({"id": 1, "name": "valve", "tags": ["b"], "new": 0})))
        );
    }

    #[test]
    fn update_row_out_of_range_is_an_error() {
        let mut state = DataTableState::new();
        state.add_row(make_row(json!({"id": 1})));

        let err = state
            .update_row(1, make_row(json!({"id": 9})))
            .expect_err("out of range");
        assert!(matches!(err, Error::RowOutOfRange { index: 1, len: 1 }));
        assert_eq!(state.rows(), &[make_row(json!({"id": 1}))]);
    }

    #[test]
    fn clear_data_is_idempotent() {
        let mut state = DataTableState::new();
        state.set_data(vec![make_row(json!({"id": 1}))]);

        state.clear_data();
        assert!(state.rows().is_empty());
        state.clear_data();
        assert!(state.rows().is_empty());
    }

    #[test]
    fn set_data_replaces_rows() {
        let mut state = DataTableState::new();
        state.add_row(make_row(json!({"id": 1})));
        state.set_data(vec![make_row(json!({"id": 2})), make_row(json!({"id": 3}))]);

        let ids: Vec<_> = state.rows().iter().map(|r| r["id"].clone()).collect();
        assert_eq!(ids, vec![json!(2), json!(3)]);
    }

    #[test]
    fn from_config_seeds_state() {
        let config = DataTableConfig {
            columns: vec![ColumnDef::new("id", "ID")],
            data: vec![make_row(json!({"id": 7}))],
            loading: true,
            ..Default::default()
        };
        let mut state = DataTableState::from_config(&config);

        assert_eq!(column_fields(&state), vec!["id"]);
        assert_eq!(state.rows_len(), 1);
        assert!(state.is_loading());
        state.set_loading(false);
        assert!(!state.is_loading());
    }

    #[test]
    fn selection_is_independent_of_rows() {
        let mut state = DataTableState::new();
        let row = make_row(json!({"id": 1}));
        state.add_row(row.clone());
        state.set_selected_rows(vec![row]);

        state.clear_data();
        assert_eq!(state.selected_rows().len(), 1);
        state.clear_selection();
        assert!(state.selected_rows().is_empty());
    }
}
