//! Health and root handlers (no auth required).

use axum::Json;
use chrono::Utc;

use crate::dto::response::{HealthResponse, MessageResponse};

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        time: Utc::now(),
    })
}

/// GET /
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Backend is running 🚀"))
}
