use std::{env, io, net::SocketAddr, sync::Arc};

use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::routes::{self, ServerState};
use service::store::{SupabaseStore, TableStore};

/// Tracing to stdout, `RUST_LOG` respected with a sensible fallback.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,axum=info"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Bind address from env vars, with fallbacks.
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8000);
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: load settings, build the app and run the HTTP server.
/// Missing store credentials abort startup before anything is bound.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let settings = configs::Settings::load()?;
    let store: Arc<dyn TableStore> = Arc::new(SupabaseStore::new(&settings));
    let state = ServerState { store };

    let app = routes::build_router(state, build_cors());

    let addr = load_bind_addr()?;
    info!(%addr, app = %settings.app_name, "starting api server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
