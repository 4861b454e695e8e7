//! Read-only API documentation.
//!
//! ```text
//! GET /api-docs/               - Swagger UI
//! GET /api-docs/openapi.json   - Generated document
//! ```

use axum::Router;
use utoipa::openapi::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::state::AppState;

/// Path the Swagger UI is mounted at.
pub const SWAGGER_UI_PATH: &str = "/api-docs";

/// Path the generated document is served at.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Build the documentation router around an already generated document.
pub fn router(api_doc: OpenApi) -> Router<AppState> {
    SwaggerUi::new(SWAGGER_UI_PATH)
        .url(OPENAPI_PATH, api_doc)
        .into()
}
