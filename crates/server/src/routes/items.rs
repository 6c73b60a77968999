use axum::{extract::State, http::StatusCode, Json};

use models::item::{Item, ItemDraft};
use service::item_service;

use crate::errors::ApiError;
use crate::routes::ServerState;

/// `GET /items/` — full listing of the items table.
pub async fn read_items(State(state): State<ServerState>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = item_service::list_items(state.store.as_ref()).await?;
    Ok(Json(items))
}

/// `POST /item/` — create one item; the body has already been validated
/// against [`ItemDraft`] by the extractor, so a malformed payload never
/// reaches this point.
pub async fn create_item(
    State(state): State<ServerState>,
    Json(draft): Json<ItemDraft>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let created = item_service::create_item(state.store.as_ref(), draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
