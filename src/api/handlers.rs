//! HTTP Request Handlers
//!
//! Shared application state plus the handlers that are not tied to a record
//! type: health check and the fallback for unknown endpoints.

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;

use crate::{
    models::HealthCheckResponse,
    service::{BlogService, UserService},
    utils::error::{AppError, AppResult},
    VERSION,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub blog_service: Arc<BlogService>,
    pub user_service: Arc<UserService>,
}

impl AppState {
    pub fn new(blog_service: BlogService, user_service: UserService) -> Self {
        Self {
            blog_service: Arc::new(blog_service),
            user_service: Arc::new(user_service),
        }
    }
}

/// Health check endpoint
///
/// Answers 503 when the record store cannot be reached.
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<HealthCheckResponse>> {
    state.blog_service.health_check().await.map_err(|e| {
        log::warn!("Health check failed: {}", e);
        AppError::Unavailable("record store unreachable".to_string())
    })?;

    let response = HealthCheckResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: VERSION.to_string(),
    };

    Ok(Json(response))
}

/// Fallback for requests that match no route
pub async fn unknown_endpoint() -> AppError {
    AppError::NotFound("unknown endpoint".to_string())
}
