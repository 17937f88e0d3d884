use std::sync::Arc;

use anyhow::anyhow;
use tokio::net::TcpListener;

use devfolio_backend::app;
use devfolio_backend::config::{ChatConfig, ServerConfig};
use devfolio_backend::logging::{self, LoggingConfig};
use devfolio_backend::services::chat_service::ChatService;
use devfolio_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    logging::init_logging(LoggingConfig::from_env())?;

    let server_config = ServerConfig::from_env().map_err(|e| anyhow!(e))?;
    let chat_config = ChatConfig::from_env().map_err(|e| anyhow!(e))?;

    let chat_service = ChatService::from_config(chat_config)?;
    let state = AppState {
        chat_service: Arc::new(chat_service),
    };
    let app = app::create_app(state, &server_config);

    let listener = TcpListener::bind(server_config.bind_addr).await?;
    tracing::info!("🚀 Devfolio backend running at http://{}/", server_config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
