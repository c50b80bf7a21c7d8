use serde::Deserialize;
use serde_json::{Map, Value};

/// A `cardsInfo` entry. Every attribute may be missing.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCardRecord {
    #[serde(default)]
    pub card_id: Option<u64>,
    #[serde(default)]
    pub queue: Option<i64>,
    #[serde(default, rename = "type")]
    pub card_type: Option<i64>,
    #[serde(default)]
    pub due: Option<i64>,
    #[serde(default)]
    pub odue: Option<i64>,
    #[serde(default)]
    pub deck_name: Option<String>,
    /// Field name to `{"value": ..., "order": ...}`, in document order.
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl RawCardRecord {
    /// Text of the named field, if present and a string.
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(field_text)
    }

    /// Text of the field that comes first on the note.
    pub fn first_field_value(&self) -> Option<&str> {
        self.nth_field_value(0)
    }

    /// Text of the `n`th field in note order.
    ///
    /// Uses the `order` attribute when present; ties and missing orders fall
    /// back to document order.
    pub fn nth_field_value(&self, n: usize) -> Option<&str> {
        let mut ordered: Vec<(u64, usize, &Value)> = self
            .fields
            .values()
            .enumerate()
            .map(|(position, field)| {
                let order = field.get("order").and_then(Value::as_u64).unwrap_or(u64::MAX);
                (order, position, field)
            })
            .collect();
        ordered.sort_by_key(|(order, position, _)| (*order, *position));

        ordered.get(n).and_then(|&(_, _, field)| field_text(field))
    }
}

fn field_text(field: &Value) -> Option<&str> {
    field.get("value").and_then(Value::as_str)
}
