use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ModelError;
use crate::record::{self, Record};

/// Backing table in the remote store.
pub const TABLE: &str = "users";

/// An application user. Structurally independent from [`crate::item::Item`];
/// the two tables share no relationship.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub age: Option<i64>,
}

/// Creation payload; no `id`, unknown fields rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserDraft {
    pub name: String,
    pub description: Option<String>,
    pub age: Option<i64>,
}

/// Convert a store row into a typed [`User`].
pub fn from_record(record: &Record) -> Result<User, ModelError> {
    Ok(User {
        id: record::optional_integer(record, "id")?,
        name: record::required_text(record, "name")?,
        description: record::optional_text(record, "description")?,
        age: record::optional_integer(record, "age")?,
    })
}

impl UserDraft {
    /// Store-write payload; unset optional fields are omitted, not null.
    pub fn into_record(self) -> Record {
        let mut record = Record::new();
        record.insert("name".into(), Value::from(self.name));
        if let Some(description) = self.description {
            record.insert("description".into(), Value::from(description));
        }
        if let Some(age) = self.age {
            record.insert("age".into(), Value::from(age));
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_record_roundtrips_store_row() {
        let row = json!({"id": 11, "name": "ada", "age": 36});
        let user = from_record(row.as_object().unwrap()).unwrap();
        assert_eq!(
            user,
            User {
                id: Some(11),
                name: "ada".into(),
                description: None,
                age: Some(36),
            }
        );
    }

    #[test]
    fn from_record_requires_name() {
        let row = json!({"id": 11, "age": 36});
        assert_eq!(
            from_record(row.as_object().unwrap()),
            Err(ModelError::MissingField("name"))
        );
    }

    #[test]
    fn draft_into_record_keeps_only_set_fields() {
        let record = UserDraft {
            name: "ada".into(),
            description: None,
            age: None,
        }
        .into_record();
        assert_eq!(record.len(), 1);
        assert_eq!(record["name"], json!("ada"));
    }
}
