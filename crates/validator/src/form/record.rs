//! Registration records as field-name → raw-value maps.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::RecordError;

/// One submitted registration: raw field values keyed by field name.
///
/// Values are kept exactly as typed, formatting included. An absent field
/// and an empty one are different: [`get`](Self::get) returns `None` for the
/// first and `Some("")` for the second.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormRecord {
    fields: BTreeMap<String, String>,
}

impl FormRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value of `field`, if present.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Raw value of `field` when present and non-empty.
    pub fn filled(&self, field: &str) -> Option<&str> {
        self.get(field).filter(|v| !v.is_empty())
    }

    /// Sets a field, returning the previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(field.into(), value.into())
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    /// Number of fields present.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Builds a record from a JSON object.
    ///
    /// Strings are kept as-is, numbers and booleans become their text,
    /// `null` means the field is absent. Arrays and nested objects are
    /// rejected.
    ///
    /// ```
    /// use castra_validator::form::FormRecord;
    /// use serde_json::json;
    ///
    /// let record = FormRecord::from_json(&json!({
    ///     "animal": "Mel",
    ///     "idade": 3,
    ///     "castra": true,
    ///     "microchip": null,
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(record.get("idade"), Some("3"));
    /// assert_eq!(record.get("castra"), Some("true"));
    /// assert_eq!(record.get("microchip"), None);
    /// ```
    pub fn from_json(value: &Value) -> Result<Self, RecordError> {
        let Value::Object(map) = value else {
            return Err(RecordError::NotAnObject {
                found: json_type(value),
            });
        };

        let mut record = Self::new();
        for (field, value) in map {
            let text = match value {
                Value::Null => continue,
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(RecordError::UnsupportedValue {
                        field: field.clone(),
                        found: json_type(value),
                    });
                }
            };
            record.insert(field.clone(), text);
        }

        Ok(record)
    }

    /// Decodes a single record object or an array of record objects.
    pub fn many_from_json(value: &Value) -> Result<Vec<Self>, RecordError> {
        match value {
            Value::Object(_) => Ok(vec![Self::from_json(value)?]),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    Self::from_json(item).map_err(|e| RecordError::AtIndex {
                        index,
                        source: Box::new(e),
                    })
                })
                .collect(),
            other => Err(RecordError::NotARecordList {
                found: json_type(other),
            }),
        }
    }

    /// Parses JSON text holding one record or an array of records.
    pub fn many_from_str(text: &str) -> Result<Vec<Self>, RecordError> {
        let value: Value = serde_json::from_str(text)?;
        Self::many_from_json(&value)
    }
}

impl<K, V> FromIterator<(K, V)> for FormRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filled_distinguishes_empty() {
        let record = FormRecord::new().with("email", "").with("cpf", "123");
        assert_eq!(record.get("email"), Some(""));
        assert_eq!(record.filled("email"), None);
        assert_eq!(record.filled("cpf"), Some("123"));
        assert_eq!(record.get("rg"), None);
    }

    #[test]
    fn test_rejects_non_objects() {
        let err = FormRecord::from_json(&json!(["a"])).unwrap_err();
        assert!(matches!(err, RecordError::NotAnObject { found: "an array" }));
    }

    #[test]
    fn test_rejects_nested_values() {
        let err = FormRecord::from_json(&json!({"endereco": {"cep": "01310100"}})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "field 'endereco' holds an object, expected a string, number or boolean"
        );
    }

    #[test]
    fn test_many_from_json() {
        let one = FormRecord::many_from_json(&json!({"animal": "Rex"})).unwrap();
        assert_eq!(one.len(), 1);

        let two = FormRecord::many_from_json(&json!([{"animal": "Rex"}, {"animal": "Mel"}])).unwrap();
        assert_eq!(two[1].get("animal"), Some("Mel"));

        let err = FormRecord::many_from_json(&json!([{"animal": "Rex"}, 3])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "record 1: expected a JSON object for a record, found a number"
        );

        assert!(FormRecord::many_from_json(&json!("Rex")).is_err());
    }

    #[test]
    fn test_many_from_str_reports_bad_json() {
        let err = FormRecord::many_from_str("{not json").unwrap_err();
        assert!(matches!(err, RecordError::Json(_)));
    }

    #[test]
    fn test_serde_transparent() {
        let record: FormRecord = [("animal", "Rex")].into_iter().collect();
        assert_eq!(serde_json::to_value(&record).unwrap(), json!({"animal": "Rex"}));
    }
}
