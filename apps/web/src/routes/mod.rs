pub mod health;
pub mod page;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(page::handle_landing_page))
        // Static demo data
        .route("/api/v1/content", get(page::handle_content))
        .route("/api/v1/skills", get(page::handle_skills))
        .route("/api/v1/skills/radar.svg", get(page::handle_radar_svg))
        .route("/api/v1/careers", get(page::handle_careers))
        // Chat demo
        .route("/api/v1/chat/sessions", post(handlers::handle_create_session))
        .route("/api/v1/chat/sessions/:id", get(handlers::handle_get_session))
        .route(
            "/api/v1/chat/sessions/:id/messages",
            post(handlers::handle_submit_message),
        )
        .with_state(state)
}
