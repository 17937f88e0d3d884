use std::sync::Arc;

use crate::services::chat_service::ChatService;

#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
}
