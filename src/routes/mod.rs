use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use perksplus_lead::ApiMessage;
use perksplus_notification::Mailer;

mod health;
mod join;
mod simulator;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mailer: Arc<dyn Mailer>,
}

pub async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ApiMessage::new("Not found")))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/api/join", post(join::action))
        .route("/api/risk-simulator", get(simulator::assess))
        .fallback(fallback)
        .with_state(app_state)
}
