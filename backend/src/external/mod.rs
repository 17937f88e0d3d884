pub mod chat_completions;
pub mod completion_provider;
pub mod injected_context;
pub mod system_role;
