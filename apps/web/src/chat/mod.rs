// Chat demo: per-visitor sessions that relay questions to the completion service.
// All completion calls go through llm_client.

pub mod handlers;
pub mod manager;
pub mod models;
pub mod session;
