use crate::config::AppConfig;
use crate::data;
use crate::types::{CountryGroups, PaymentSystemRecord};
use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

pub struct AppState {
    pub groups: CountryGroups,
}

#[derive(Deserialize)]
pub struct SystemsQuery {
    country: String,
}

pub async fn start_server(config: AppConfig, groups: CountryGroups) -> Result<()> {
    let state = Arc::new(AppState { groups });

    let addr = SocketAddr::from(([127, 0, 0, 1], config.server.port));
    println!("Starting server on http://{}", addr);

    // Serve the directory the map was generated into, so / picks up the
    // artifact when it is named index.html.
    let map_dir: PathBuf = config
        .output
        .html_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let app = Router::new()
        .route("/api/systems", get(systems_handler))
        .fallback_service(ServeDir::new(map_dir))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Look up the loaded payment systems for one country. Accepts the same
/// name variants as the loader ("USA", "UK", ...).
async fn systems_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SystemsQuery>,
) -> Json<Option<Vec<PaymentSystemRecord>>> {
    let country = data::normalize_country_name(&params.country);
    Json(state.groups.get(&country).cloned())
}
