pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::speech::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Voice practice API
        .route("/api/v1/voice/analyze", post(handlers::handle_analyze_voice))
        .route(
            "/api/v1/voice/sessions",
            get(handlers::handle_list_sessions),
        )
        .route(
            "/api/v1/voice/sessions/:id",
            get(handlers::handle_get_session),
        )
        .with_state(state)
}
