use models::user::{self, User, UserDraft};

use crate::errors::ServiceError;
use crate::store::TableStore;

/// Fetch every row of the `users` table as typed entities.
pub async fn list_users(store: &dyn TableStore) -> Result<Vec<User>, ServiceError> {
    let records = store.select_all(user::TABLE).await?;
    let users = records
        .iter()
        .map(user::from_record)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(users)
}

/// Insert one user and return it as the store created it, id included.
pub async fn create_user(store: &dyn TableStore, draft: UserDraft) -> Result<User, ServiceError> {
    let created = store.insert(user::TABLE, draft.into_record()).await?;
    let first = created
        .first()
        .ok_or(ServiceError::EmptyInsert { table: user::TABLE })?;
    Ok(user::from_record(first)?)
}
