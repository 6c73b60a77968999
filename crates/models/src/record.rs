use serde_json::{Map, Value};

use crate::errors::ModelError;

/// Untyped row as the store returns it: a flat JSON object.
pub type Record = Map<String, Value>;

fn type_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "text",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A required text column. Absent or null counts as missing.
pub fn required_text(record: &Record, field: &'static str) -> Result<String, ModelError> {
    match record.get(field) {
        None | Some(Value::Null) => Err(ModelError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ModelError::TypeMismatch {
            field,
            expected: "text",
            found: type_of(other),
        }),
    }
}

pub fn optional_text(record: &Record, field: &'static str) -> Result<Option<String>, ModelError> {
    match record.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ModelError::TypeMismatch {
            field,
            expected: "text",
            found: type_of(other),
        }),
    }
}

/// A required numeric column; integers widen to f64.
pub fn required_number(record: &Record, field: &'static str) -> Result<f64, ModelError> {
    match record.get(field) {
        None | Some(Value::Null) => Err(ModelError::MissingField(field)),
        Some(value) => value.as_f64().ok_or(ModelError::TypeMismatch {
            field,
            expected: "number",
            found: type_of(value),
        }),
    }
}

pub fn optional_number(record: &Record, field: &'static str) -> Result<Option<f64>, ModelError> {
    match record.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or(ModelError::TypeMismatch {
                field,
                expected: "number",
                found: type_of(value),
            }),
    }
}

pub fn optional_integer(record: &Record, field: &'static str) -> Result<Option<i64>, ModelError> {
    match record.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_i64()
            .map(Some)
            .ok_or(ModelError::TypeMismatch {
                field,
                expected: "integer",
                found: type_of(value),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn required_text_distinguishes_missing_null_and_mistyped() {
        let r = record(json!({"name": "soap", "price": 2}));
        assert_eq!(required_text(&r, "name").unwrap(), "soap");
        assert_eq!(
            required_text(&r, "description"),
            Err(ModelError::MissingField("description"))
        );
        let r = record(json!({"name": null}));
        assert_eq!(required_text(&r, "name"), Err(ModelError::MissingField("name")));
        let r = record(json!({"name": 5}));
        assert!(matches!(
            required_text(&r, "name"),
            Err(ModelError::TypeMismatch { field: "name", .. })
        ));
    }

    #[test]
    fn numbers_accept_integers_and_reject_text() {
        let r = record(json!({"price": 3, "tax": 0.5}));
        assert_eq!(required_number(&r, "price").unwrap(), 3.0);
        assert_eq!(optional_number(&r, "tax").unwrap(), Some(0.5));
        let r = record(json!({"price": "3"}));
        assert!(matches!(
            required_number(&r, "price"),
            Err(ModelError::TypeMismatch { expected: "number", .. })
        ));
    }

    #[test]
    fn optional_integer_rejects_fractions() {
        let r = record(json!({"id": 7}));
        assert_eq!(optional_integer(&r, "id").unwrap(), Some(7));
        let r = record(json!({"id": 7.5}));
        assert!(optional_integer(&r, "id").is_err());
        let r = record(json!({}));
        assert_eq!(optional_integer(&r, "id").unwrap(), None);
    }
}
