use axum::{middleware as axum_middleware, routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{generate_handler, health_handler};
use crate::api::middleware::{cors, request_log};
use crate::api::openapi::swagger_ui;
use crate::application::use_cases::GenerateFileUseCase;

/// Application state container
pub struct AppState {
    pub generate_use_case: Arc<GenerateFileUseCase>,
    /// Capacity of each response's chunk buffer, in chunks
    pub stream_buffer_chunks: usize,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .merge(swagger_ui())
        .route("/health", get(health_handler))
        .route(
            "/api/v1/generate",
            get(generate_handler).with_state(Arc::clone(&state)),
        )
        .layer(axum_middleware::from_fn(request_log::request_log_middleware))
        .layer(cors::create_cors_layer_for_environment())
}
