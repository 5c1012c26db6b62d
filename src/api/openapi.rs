use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::errors::ErrorBody;
use crate::api::handlers::health::HealthResponse;

/// OpenAPI specification for the bytesmith API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bytesmith API",
        version = "1.0.0",
        description = "Streaming generator for exact-size dummy files with type-specific magic bytes"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::generate::generate_handler,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBody,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "generate", description = "Dummy file generation")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI route
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
