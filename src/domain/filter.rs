//! Filter - Filter Field Definitions

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::domain::value::SelectOption;

/// Kind of input control a filter renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    #[default]
    Input,
    Select,
    Date,
    DateRange,
    Number,
    NumberRange,
    Custom,
}

/// A key that is present always yields `Some`, even when its value is `null`
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Schema entry for one user-facing filter control
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterItem {
    /// Unique key; also the key into the filter value map
    pub field: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub filter_type: FilterType,
    /// Default selection. An explicit `null` is kept as `Some(Value::Null)`,
    /// distinct from no default at all.
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    /// Opaque props handed to the rendered control
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub props: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FilterItem {
    pub fn new(field: impl Into<String>, label: impl Into<String>, filter_type: FilterType) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
            filter_type,
            ..Default::default()
        }
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    pub fn apply(&mut self, patch: FilterItemPatch) {
        if let Some(field) = patch.field {
            self.field = field;
        }
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(filter_type) = patch.filter_type {
            self.filter_type = filter_type;
        }
        if patch.value.is_some() {
            self.value = patch.value;
        }
        if patch.placeholder.is_some() {
            self.placeholder = patch.placeholder;
        }
        if let Some(options) = patch.options {
            self.options = options;
        }
        // `props` is one attribute, so it is replaced wholesale
        if let Some(props) = patch.props {
            self.props = props;
        }
        for (key, value) in patch.extra {
            self.extra.insert(key, value);
        }
    }
}

/// Partial filter item update; `None` leaves the attribute unchanged
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct FilterItemPatch {
    pub field: Option<String>,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub filter_type: Option<FilterType>,
    #[serde(deserialize_with = "present_value")]
    pub value: Option<Value>,
    pub placeholder: Option<String>,
    pub options: Option<Vec<SelectOption>>,
    pub props: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn filter_type_wire_names() {
        let types: Vec<FilterType> =
            serde_json::from_value(json!(["daterange", "numberrange", "input"])).expect("types");
        assert_eq!(
            types,
            vec![FilterType::DateRange, FilterType::NumberRange, FilterType::Input]
        );
    }

    #[test]
    fn explicit_null_default_is_kept() {
        let items: Vec<FilterItem> = serde_json::from_value(json!([
            {"field": "owner", "label": "Owner", "type": "select", "value": null},
            {"field": "region", "label": "Region", "type": "select"}
        ]))
        .expect("items");

        assert_eq!(items[0].value, Some(Value::Null));
        assert_eq!(items[1].value, None);

        let mut item = items[1].clone().with_default("north");
        let patch: FilterItemPatch =
            serde_json::from_value(json!({"value": null})).expect("patch");
        item.apply(patch);
        assert_eq!(item.value, Some(Value::Null));

        let untouched: FilterItemPatch = serde_json::from_value(json!({})).expect("patch");
        assert_eq!(untouched.value, None);
    }

    #[test]
    fn apply_replaces_props_and_merges_extra() {
        let mut item = FilterItem::new("region", "Region", FilterType::Select)
            .with_placeholder("Pick one")
            .with_options(vec![SelectOption::new("North", "n")]);
        item.props.insert("clearable".to_string(), json!(true));
        item.extra.insert("span".to_string(), json!(6));

        let patch: FilterItemPatch = serde_json::from_value(json!({
            "label": "Area",
            "props": {"multiple": true},
            "order": 2
        }))
        .expect("patch");
        item.apply(patch);

        assert_eq!(item.label, "Area");
        assert_eq!(item.filter_type, FilterType::Select);
        assert_eq!(item.placeholder.as_deref(), Some("Pick one"));
        assert_eq!(item.options.len(), 1);
        assert_eq!(Value::Object(item.props.clone()), json!({"multiple": true}));
        assert_eq!(item.extra.get("span"), Some(&json!(6)));
        assert_eq!(item.extra.get("order"), Some(&json!(2)));
    }
}
