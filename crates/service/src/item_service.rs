use models::item::{self, Item, ItemDraft};

use crate::errors::ServiceError;
use crate::store::TableStore;

/// Fetch every row of the `items` table as typed entities. One untranslatable
/// row fails the whole listing; there is no partial-result tolerance.
pub async fn list_items(store: &dyn TableStore) -> Result<Vec<Item>, ServiceError> {
    let records = store.select_all(item::TABLE).await?;
    let items = records
        .iter()
        .map(item::from_record)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(items)
}

/// Insert one item and return it as the store created it, id included.
pub async fn create_item(store: &dyn TableStore, draft: ItemDraft) -> Result<Item, ServiceError> {
    let created = store.insert(item::TABLE, draft.into_record()).await?;
    let first = created
        .first()
        .ok_or(ServiceError::EmptyInsert { table: item::TABLE })?;
    Ok(item::from_record(first)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryStore;
    use serde_json::json;

    fn draft(name: &str, price: f64) -> ItemDraft {
        ItemDraft {
            name: name.into(),
            description: None,
            price,
            tax: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_echoes_fields() {
        let store = MemoryStore::new();
        let created = create_item(&store, draft("soap", 2.5)).await.unwrap();
        assert!(created.id.is_some());
        assert_eq!(created.name, "soap");
        assert_eq!(created.price, 2.5);
        assert_eq!(created.description, None);
    }

    #[tokio::test]
    async fn list_returns_created_items_in_order() {
        let store = MemoryStore::new();
        create_item(&store, draft("soap", 2.5)).await.unwrap();
        create_item(&store, draft("rope", 9.0)).await.unwrap();
        let items = list_items(&store).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "soap");
        assert_eq!(items[1].name, "rope");
    }

    #[tokio::test]
    async fn list_on_empty_table_is_empty_not_an_error() {
        let store = MemoryStore::new();
        assert_eq!(list_items(&store).await.unwrap(), Vec::new());
    }

    #[tokio::test]
    async fn list_fails_wholesale_on_untranslatable_row() {
        let store = MemoryStore::new();
        create_item(&store, draft("soap", 2.5)).await.unwrap();
        store
            .seed(models::item::TABLE, json!({"id": 99, "price": 1.0}).as_object().unwrap().clone())
            .await;
        let err = list_items(&store).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(_)));
    }

    #[tokio::test]
    async fn create_surfaces_empty_insert_result() {
        let store = MemoryStore::new();
        store.swallow_inserts();
        let err = create_item(&store, draft("soap", 2.5)).await.unwrap_err();
        assert!(matches!(err, ServiceError::EmptyInsert { table: "items" }));
    }
}
