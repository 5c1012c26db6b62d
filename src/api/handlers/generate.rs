use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, StatusCode},
    response::Response,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use crate::api::errors::ApiError;
use crate::api::router::AppState;
use crate::application::use_cases::StreamError;
use crate::infrastructure::streaming::ChannelSink;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GenerateQuery {
    /// Total file size in bytes (must be positive)
    pub size: i64,
    /// File type key, e.g. pdf, docx, xlsx, pptx, jpg, mp3, txt
    #[serde(rename = "type")]
    pub kind: String,
    /// Download filename; synthesized from size and type when omitted
    pub name: Option<String>,
}

/// GET /api/v1/generate
/// Stream a generated dummy file of exactly `size` bytes
#[utoipa::path(
    get,
    path = "/api/v1/generate",
    tag = "generate",
    params(GenerateQuery),
    responses(
        (status = 200, description = "Generated file body", content_type = "application/octet-stream"),
        (status = 400, description = "Missing or invalid size/type parameter", body = crate::api::errors::ErrorBody),
        (status = 413, description = "Requested size exceeds the configured maximum", body = crate::api::errors::ErrorBody)
    )
)]
pub async fn generate_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GenerateQuery>,
) -> Result<Response, ApiError> {
    // Reject bad input while a structured error response is still possible;
    // once the headers below are committed, failures can only terminate the
    // connection.
    let request = state
        .generate_use_case
        .prepare(query.size, &query.kind, query.name.as_deref())?;

    let total_size = request.size.get();
    let filename = request.filename.clone();

    let (mut sink, body_stream) = ChannelSink::bounded(state.stream_buffer_chunks);

    let use_case = Arc::clone(&state.generate_use_case);
    tokio::spawn(async move {
        match use_case.stream(&request, &mut sink).await {
            Ok(written) => {
                tracing::info!(
                    bytes = written,
                    filename = %request.filename,
                    "generation complete"
                );
            }
            Err(err @ StreamError::Cancelled { .. }) => {
                tracing::debug!(
                    error = %err,
                    filename = %request.filename,
                    "client disconnected mid-stream"
                );
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    filename = %request.filename,
                    "generation aborted"
                );
                sink.abort(std::io::Error::other(err.to_string()));
            }
        }
    });

    // Declared length and disposition must be fixed before the first body
    // byte goes out; the generator itself never touches transport metadata.
    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .header(header::CONTENT_LENGTH, total_size.to_string())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(Body::from_stream(body_stream))
        .map_err(|e| ApiError::internal_error(format!("Failed to build response: {}", e)))?;

    Ok(response)
}
