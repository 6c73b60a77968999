use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ModelError;
use crate::record::{self, Record};

/// Backing table in the remote store.
pub const TABLE: &str = "items";

/// A catalog item. `id` is assigned by the store and present on every row
/// it returns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
}

/// Creation payload. Carries no `id`; unknown fields are rejected so a
/// client-supplied `id` (or a typo) fails validation instead of being
/// silently dropped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
}

/// Convert a store row into a typed [`Item`].
pub fn from_record(record: &Record) -> Result<Item, ModelError> {
    Ok(Item {
        id: record::optional_integer(record, "id")?,
        name: record::required_text(record, "name")?,
        description: record::optional_text(record, "description")?,
        price: record::required_number(record, "price")?,
        tax: record::optional_number(record, "tax")?,
    })
}

impl ItemDraft {
    /// Store-write payload. Unset optional fields are omitted entirely,
    /// never serialized as null.
    pub fn into_record(self) -> Record {
        let mut record = Record::new();
        record.insert("name".into(), Value::from(self.name));
        if let Some(description) = self.description {
            record.insert("description".into(), Value::from(description));
        }
        record.insert("price".into(), Value::from(self.price));
        if let Some(tax) = self.tax {
            record.insert("tax".into(), Value::from(tax));
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_record_maps_full_row() {
        let row = json!({"id": 1, "name": "soap", "description": "bar", "price": 2.5, "tax": 0.2});
        let item = from_record(row.as_object().unwrap()).unwrap();
        assert_eq!(
            item,
            Item {
                id: Some(1),
                name: "soap".into(),
                description: Some("bar".into()),
                price: 2.5,
                tax: Some(0.2),
            }
        );
    }

    #[test]
    fn from_record_tolerates_absent_optionals_and_extra_columns() {
        let row = json!({"id": 2, "name": "rope", "price": 9, "created_at": "2024-01-01"});
        let item = from_record(row.as_object().unwrap()).unwrap();
        assert_eq!(item.description, None);
        assert_eq!(item.tax, None);
        assert_eq!(item.price, 9.0);
    }

    #[test]
    fn from_record_fails_on_missing_name_or_mistyped_price() {
        let row = json!({"id": 3, "price": 1.0});
        assert_eq!(
            from_record(row.as_object().unwrap()),
            Err(ModelError::MissingField("name"))
        );
        let row = json!({"id": 3, "name": "x", "price": "1.0"});
        assert!(matches!(
            from_record(row.as_object().unwrap()),
            Err(ModelError::TypeMismatch { field: "price", .. })
        ));
    }

    #[test]
    fn draft_into_record_omits_unset_fields() {
        let draft = ItemDraft {
            name: "rope".into(),
            description: None,
            price: 9.0,
            tax: None,
        };
        let record = draft.into_record();
        assert_eq!(record.len(), 2);
        assert!(!record.contains_key("description"));
        assert!(!record.contains_key("tax"));
        assert!(!record.contains_key("id"));
    }

    #[test]
    fn draft_rejects_unknown_fields() {
        let err = serde_json::from_value::<ItemDraft>(
            json!({"id": 1, "name": "soap", "price": 2.5}),
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown field"));
        assert!(serde_json::from_value::<ItemDraft>(json!({"name": "soap"})).is_err());
    }
}
