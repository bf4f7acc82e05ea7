use crate::core::value::{FieldValue, Value};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One enrollment row. Fields are looked up by name; a missing field reads
/// as `Null` and never panics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowData {
    pub entity: String,
    pub field_values: Vec<FieldValue>,
}

impl RowData {
    pub fn new(entity: &str, field_values: Vec<FieldValue>) -> Self {
        RowData {
            entity: entity.to_string(),
            field_values,
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.field_values
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(field))
    }

    pub fn get_value(&self, field: &str) -> Value {
        self.get(field)
            .and_then(|f| f.value.clone())
            .unwrap_or(Value::Null)
    }

    pub fn get_string(&self, field: &str) -> Option<String> {
        self.get(field)
            .and_then(|f| f.value.as_ref())
            .and_then(|v| v.as_string())
    }

    /// String value with surrounding whitespace removed. Rule matching is
    /// always done on trimmed values.
    pub fn get_trimmed(&self, field: &str) -> Option<String> {
        self.get_string(field).map(|s| s.trim().to_string())
    }

    pub fn get_date(&self, field: &str) -> Option<NaiveDate> {
        self.get(field)
            .and_then(|f| f.value.as_ref())
            .and_then(|v| v.as_date())
    }

    /// Upsert: overwrites the field when present, appends it otherwise.
    pub fn set(&mut self, field: &str, value: Value) {
        if let Some(col) = self
            .field_values
            .iter_mut()
            .find(|col| col.name.eq_ignore_ascii_case(field))
        {
            col.data_type = value.data_type();
            col.value = Some(value);
        } else {
            self.field_values.push(FieldValue::new(field, value));
        }
    }

    pub fn set_null(&mut self, field: &str) {
        if let Some(col) = self
            .field_values
            .iter_mut()
            .find(|col| col.name.eq_ignore_ascii_case(field))
        {
            col.value = Some(Value::Null);
        } else {
            self.field_values.push(FieldValue::null(field));
        }
    }
}
