pub mod chat_service;
pub mod portfolio_context_service;
