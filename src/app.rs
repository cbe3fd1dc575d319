use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{echo_handler, hello_person_handler, hello_world_handler};
use crate::routes;
use crate::state::AppState;

/// Assemble the fixture routes, API docs and request tracing
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(routes::HELLO_WORLD, get(hello_world_handler))
        .route(routes::HELLO_PERSON, get(hello_person_handler))
        .route(routes::ECHO, get(echo_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
