use axum::Router;
use http::{header, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::routes::{chat, health, skills};
use crate::state::AppState;

pub fn create_app(state: AppState, config: &ServerConfig) -> Router {
    let router = Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/chat", chat::router())
        .nest("/api/skills", skills::router())
        .layer(cors_layer(config.cors_allowed_origin.as_deref()))
        .with_state(state);

    match config.ui_dir.as_deref() {
        Some(dir) if std::path::Path::new(dir).is_dir() => {
            info!("Serving front-end from {}", dir);
            router.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true))
        }
        Some(dir) => {
            warn!("UI_DIR {} does not exist, front-end will not be served", dir);
            router
        }
        None => router,
    }
}

fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    match origin.map(HeaderValue::from_str) {
        Some(Ok(value)) => layer.allow_origin(value),
        Some(Err(e)) => {
            warn!("Invalid CORS_ALLOWED_ORIGIN, allowing any origin: {}", e);
            layer.allow_origin(Any)
        }
        None => layer.allow_origin(Any),
    }
}
