use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use service::store::TableStore;

pub mod items;
pub mod users;

/// Shared handler state: the one store handle, constructed at startup and
/// safe for concurrent use.
#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<dyn TableStore>,
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({"message": "Hello from FastAPI with Supabase!"}))
}

/// Build the full application router: greeting, item and user resources,
/// request tracing, and the 404 rewrite wrapped around everything.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    // POST paths are singular while GET paths are plural; the upstream API
    // contract fixes them that way.
    let items = Router::new()
        .route("/items/", get(items::read_items))
        .route("/item/", post(items::create_item));

    let users = Router::new()
        .route("/users/", get(users::read_users))
        .route("/user/", post(users::create_user));

    Router::new()
        .route("/", get(root))
        .merge(items)
        .merge(users)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
        // registered last so it runs outermost, after routing has resolved
        .layer(axum::middleware::from_fn(crate::middleware::rewrite_not_found))
}
